//! Renderers (markdown, CSV, JSON) for evaluated points.

use crate::color::domain_color;
use geodisc_domain::{BoundaryMapFamily, Image, MapResult, StageTrace};
use geodisc_types::{Point, Provenance};
use serde::Serialize;

/// One input point and what the Geodisc map did with it.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub input: Point,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Mapped { image: Image },
    Failed { error: String },
}

impl Row {
    pub fn new(input: Point, result: MapResult<Image>) -> Self {
        let outcome = match result {
            Ok(image) => Outcome::Mapped { image },
            Err(err) => Outcome::Failed {
                error: err.to_string(),
            },
        };
        Self { input, outcome }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }

    pub fn is_at_infinity(&self) -> bool {
        matches!(&self.outcome, Outcome::Mapped { image } if image.is_at_infinity())
    }
}

pub fn render_rows_md(family: &BoundaryMapFamily, rows: &[Row]) -> String {
    let mut out = String::new();
    out.push_str("# geodisc grid\n\n");
    out.push_str(&format!("- Base point: `{}`\n", family.a()));
    out.push_str(&format!("- b: `{}`\n- c: `{}`\n", family.b(), family.c()));
    out.push_str(&format!(
        "- Inputs: {} (failed {}, at infinity {})\n\n",
        rows.len(),
        rows.iter().filter(|r| r.is_failed()).count(),
        rows.iter().filter(|r| r.is_at_infinity()).count()
    ));

    if rows.is_empty() {
        out.push_str("_No points evaluated._\n");
        return out;
    }

    out.push_str("| # | input | flags | output | branch | color |\n");
    out.push_str("|---|---|---|---|---|---|\n");
    for (i, row) in rows.iter().enumerate() {
        let flags = flag_label(row.input.provenance());
        match &row.outcome {
            Outcome::Mapped { image } => {
                for p in image.points() {
                    out.push_str(&format!(
                        "| {} | `{}` | {} | `{}` | {} | `{}` |\n",
                        i + 1,
                        row.input.z(),
                        flags,
                        p.z(),
                        p.branch_sign(),
                        domain_color(p.z()).to_hex()
                    ));
                }
            }
            Outcome::Failed { error } => {
                out.push_str(&format!(
                    "| {} | `{}` | {} | - | - | - |\n\n> {}\n\n",
                    i + 1,
                    row.input.z(),
                    flags,
                    error
                ));
            }
        }
    }

    out
}

/// One CSV line per output point; failed inputs get a single line with the error.
pub fn render_rows_csv(rows: &[Row]) -> String {
    let mut out = String::from("name,input_re,input_im,output_re,output_im,branch_sign,color,status\n");
    for row in rows {
        let name = csv_field(row.input.name());
        let (re, im) = (row.input.z().re, row.input.z().im);
        match &row.outcome {
            Outcome::Mapped { image } => {
                let status = if image.is_at_infinity() {
                    "at_infinity"
                } else {
                    "mapped"
                };
                for p in image.points() {
                    out.push_str(&format!(
                        "{},{},{},{},{},{},{},{}\n",
                        name,
                        re,
                        im,
                        p.z().re,
                        p.z().im,
                        p.branch_sign().value(),
                        domain_color(p.z()).to_hex(),
                        status
                    ));
                }
            }
            Outcome::Failed { error } => {
                out.push_str(&format!("{},{},{},,,,,{}\n", name, re, im, csv_field(error)));
            }
        }
    }
    out
}

#[derive(Serialize)]
struct GridDocument<'a> {
    base: [f64; 2],
    b: f64,
    c: f64,
    rows: &'a [Row],
}

pub fn render_rows_json(family: &BoundaryMapFamily, rows: &[Row]) -> anyhow::Result<String> {
    let doc = GridDocument {
        base: [family.a().re, family.a().im],
        b: family.b(),
        c: family.c(),
        rows,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Stage-by-stage account of a single evaluation.
pub fn render_trace_md(family: &BoundaryMapFamily, trace: &StageTrace) -> String {
    let mut out = String::new();
    out.push_str(&format!("# geodisc map: {}\n\n", trace.input.name()));
    out.push_str(&format!(
        "- Base point: `{}` (b = `{}`, c = `{}`)\n",
        family.a(),
        family.b(),
        family.c()
    ));
    out.push_str(&format!(
        "- Input: `{}` [{}]\n",
        trace.input.z(),
        flag_label(trace.input.provenance())
    ));
    out.push_str(&format!(
        "- f1: `{}` (branch {})\n",
        trace.f1.z(),
        trace.f1.branch_sign()
    ));

    let Some(f2) = &trace.f2 else {
        out.push_str("- f1 hit its pole; the image is complex infinity.\n");
        return out;
    };
    out.push_str(&format!("- f2: `{}`\n", f2.z()));

    let points = trace.image.points();
    out.push_str(&format!("- f3: {} root(s)\n", points.len()));
    for p in points {
        out.push_str(&format!(
            "  - `{}` (branch {}, color `{}`)\n",
            p.z(),
            p.branch_sign(),
            domain_color(p.z()).to_hex()
        ));
    }
    out
}

fn flag_label(p: Provenance) -> String {
    let mut flags = Vec::new();
    if p.is_origin {
        flags.push("origin");
    }
    if p.on_axis {
        flags.push("axis");
    }
    if p.on_arc {
        flags.push("arc");
    }
    if flags.is_empty() {
        "-".to_string()
    } else {
        flags.join(", ")
    }
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
