use crate::error::MapResult;
use crate::family::BoundaryMapFamily;
use crate::roots::Roots;
use geodisc_types::Point;
use serde::Serialize;

/// Where the Geodisc map sends one input point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Image {
    /// The `f3` roots: one, or two at a branch point.
    Finite(Roots),
    /// The input sat on `f1`'s pole. Evaluation stops at the sentinel.
    AtInfinity(Point),
}

impl Image {
    pub fn roots(&self) -> Option<&Roots> {
        match self {
            Image::Finite(roots) => Some(roots),
            Image::AtInfinity(_) => None,
        }
    }

    pub fn points(&self) -> &[Point] {
        match self {
            Image::Finite(roots) => roots.as_slice(),
            Image::AtInfinity(p) => std::slice::from_ref(p),
        }
    }

    pub fn is_at_infinity(&self) -> bool {
        matches!(self, Image::AtInfinity(_))
    }
}

/// One point's trip through `f1 → f2 → f3`, stage by stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageTrace {
    pub input: Point,
    pub f1: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f2: Option<Point>,
    pub image: Image,
}

impl BoundaryMapFamily {
    pub fn trace(&self, p: &Point) -> MapResult<StageTrace> {
        let f1 = self.f1(p);
        if f1.is_infinite() {
            return Ok(StageTrace {
                input: p.clone(),
                image: Image::AtInfinity(f1.clone()),
                f1,
                f2: None,
            });
        }

        let f2 = self.f2(&f1);
        let roots = self.f3(&f2)?;
        Ok(StageTrace {
            input: p.clone(),
            f1,
            f2: Some(f2),
            image: Image::Finite(roots),
        })
    }

    /// The composed Geodisc map `f3 ∘ f2 ∘ f1`.
    pub fn geodisc(&self, p: &Point) -> MapResult<Image> {
        self.trace(p).map(|t| t.image)
    }

    /// Evaluates every point independently, so one failure does not hide the rest.
    pub fn geodisc_all<'a, I>(&self, points: I) -> Vec<MapResult<Image>>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        points.into_iter().map(|p| self.geodisc(p)).collect()
    }
}
