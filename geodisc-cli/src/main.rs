mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use config::{CliOverrides, ConfigMerger, GridFormat, MapFormat, MergedConfig, parse_complex};
use fs_err as fs;
use geodisc_domain::{BoundaryMapFamily, DomainError, MapError};
use geodisc_render::{
    Row, generate_points, render_rows_csv, render_rows_json, render_rows_md, render_trace_md,
};
use geodisc_types::{Point, ProvenanceHint};
use num_complex::Complex64;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "geodisc",
    version,
    about = "Evaluate the Geodisc boundary map f3 ∘ f2 ∘ f1 over points and grids."
)]
struct Cli {
    /// Directory searched for geodisc.toml (default: current directory).
    #[arg(long, global = true, default_value = ".")]
    config_dir: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the constants a, b, c derived from the base point.
    Constants(ConstantsArgs),
    /// Send one point through f1, f2 and f3, showing every stage.
    Map(MapArgs),
    /// Evaluate the map over a rectangular grid of points.
    Grid(GridArgs),
}

#[derive(Debug, Args)]
struct BaseArg {
    /// Base point `a` of the family, e.g. "3+4i". Needs nonzero real and imaginary parts.
    #[arg(long, env = "GEODISC_BASE", allow_hyphen_values = true, value_parser = parse_complex)]
    base: Option<Complex64>,
}

#[derive(Debug, Parser)]
struct ConstantsArgs {
    #[command(flatten)]
    base: BaseArg,

    #[arg(long, value_enum)]
    format: Option<MapFormat>,
}

#[derive(Debug, Parser)]
struct MapArgs {
    #[command(flatten)]
    base: BaseArg,

    /// The point to map, e.g. "1-2i".
    #[arg(long, allow_hyphen_values = true, value_parser = parse_complex)]
    point: Complex64,

    /// Label carried through every stage (default: the coordinate).
    #[arg(long)]
    name: Option<String>,

    /// Mark the point as the disk's origin.
    #[arg(long, conflicts_with = "not_origin")]
    origin: bool,

    /// Mark the point as not the origin, even if its coordinate is zero.
    #[arg(long)]
    not_origin: bool,

    /// Mark the point as lying on the real axis.
    #[arg(long, conflicts_with = "off_axis")]
    on_axis: bool,

    /// Mark the point as off the real axis, even if its imaginary part is zero.
    #[arg(long)]
    off_axis: bool,

    /// Mark the point as lying on the boundary arc.
    #[arg(long)]
    on_arc: bool,

    #[arg(long, value_enum)]
    format: Option<MapFormat>,
}

#[derive(Debug, Parser)]
struct GridArgs {
    #[command(flatten)]
    base: BaseArg,

    #[arg(long, allow_hyphen_values = true)]
    min_re: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    max_re: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    min_im: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    max_im: Option<f64>,

    /// Samples per unit length along each axis.
    #[arg(long)]
    density: Option<u32>,

    #[arg(long, value_enum)]
    format: Option<GridFormat>,

    /// Write the rendered grid here instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(exit_code(&e));
    }
    ExitCode::from(0)
}

/// 2 for a rejected base point, 1 for everything else.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| {
            cause
                .downcast_ref::<MapError>()
                .map(MapError::exit_code)
                .or_else(|| {
                    cause
                        .downcast_ref::<DomainError>()
                        .map(|e| MapError::from(e.clone()).exit_code())
                })
        })
        .unwrap_or(1)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Constants(args) => cmd_constants(&cli.config_dir, args),
        Command::Map(args) => cmd_map(&cli.config_dir, args),
        Command::Grid(args) => cmd_grid(&cli.config_dir, args),
    }
}

fn merge_config(config_dir: &Utf8Path, overrides: CliOverrides) -> anyhow::Result<MergedConfig> {
    let file_config = config::load_or_default(config_dir).context("load geodisc.toml config")?;
    ConfigMerger::new(file_config).merge(&overrides)
}

fn build_family(base: Complex64) -> anyhow::Result<BoundaryMapFamily> {
    let family = BoundaryMapFamily::new(base)?;
    debug!(a = %family.a(), b = family.b(), c = family.c(), "family constants");
    Ok(family)
}

#[derive(Serialize)]
struct Constants {
    a: Complex64,
    b: f64,
    c: f64,
}

fn cmd_constants(config_dir: &Utf8Path, args: ConstantsArgs) -> anyhow::Result<()> {
    let merged = merge_config(
        config_dir,
        CliOverrides {
            base: args.base.base,
            map_format: args.format,
            ..Default::default()
        },
    )?;
    let family = build_family(merged.base)?;

    match merged.map_format {
        MapFormat::Text => {
            println!("a = {}", family.a());
            println!("b = {}", family.b());
            println!("c = {}", family.c());
        }
        MapFormat::Json => {
            let constants = Constants {
                a: family.a(),
                b: family.b(),
                c: family.c(),
            };
            println!("{}", serde_json::to_string_pretty(&constants)?);
        }
    }
    Ok(())
}

/// `Some(true)` / `Some(false)` when one of the paired flags was passed, `None` to infer.
fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

fn cmd_map(config_dir: &Utf8Path, args: MapArgs) -> anyhow::Result<()> {
    let merged = merge_config(
        config_dir,
        CliOverrides {
            base: args.base.base,
            map_format: args.format,
            ..Default::default()
        },
    )?;
    let family = build_family(merged.base)?;

    let hint = ProvenanceHint {
        is_origin: flag_pair(args.origin, args.not_origin),
        on_axis: flag_pair(args.on_axis, args.off_axis),
        on_arc: args.on_arc,
    };
    let mut input = Point::construct(args.point, hint);
    if let Some(name) = args.name {
        input = input.named(name);
    }

    let trace = family.trace(&input)?;
    match merged.map_format {
        MapFormat::Text => print!("{}", render_trace_md(&family, &trace)),
        MapFormat::Json => println!("{}", serde_json::to_string_pretty(&trace)?),
    }
    Ok(())
}

fn cmd_grid(config_dir: &Utf8Path, args: GridArgs) -> anyhow::Result<()> {
    let merged = merge_config(
        config_dir,
        CliOverrides {
            base: args.base.base,
            min_re: args.min_re,
            max_re: args.max_re,
            min_im: args.min_im,
            max_im: args.max_im,
            density: args.density,
            grid_format: args.format,
            ..Default::default()
        },
    )?;
    let family = build_family(merged.base)?;

    let points = generate_points(&merged.grid).context("generate grid")?;
    let results = family.geodisc_all(&points);
    let rows: Vec<Row> = points
        .into_iter()
        .zip(results)
        .map(|(input, result)| Row::new(input, result))
        .collect();
    info!(
        points = rows.len(),
        failed = rows.iter().filter(|r| r.is_failed()).count(),
        "grid evaluated"
    );

    let rendered = match merged.grid_format {
        GridFormat::Markdown => render_rows_md(&family, &rows),
        GridFormat::Csv => render_rows_csv(&rows),
        GridFormat::Json => render_rows_json(&family, &rows)?,
    };

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
            }
            fs::write(&path, rendered).with_context(|| format!("write {}", path))?;
            info!("wrote {}", path);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
