use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Geometric facts about a point's original input coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Provenance {
    /// The original input was the origin itself.
    pub is_origin: bool,
    /// The original input lay on the real axis.
    pub on_axis: bool,
    /// The original input lay on the arc from the origin to the base point.
    pub on_arc: bool,
}

impl Provenance {
    /// Provenance read straight off an original input coordinate.
    ///
    /// Only valid for coordinates that have not been through any map stage. Arc
    /// membership cannot be read off a coordinate, so `on_arc` is false.
    pub fn of_input(z: Complex64) -> Self {
        Self {
            is_origin: z.re == 0.0 && z.im == 0.0,
            on_axis: z.im == 0.0,
            on_arc: false,
        }
    }

    pub fn on_arc() -> Self {
        Self {
            on_arc: true,
            ..Self::default()
        }
    }

    pub fn without_origin(self) -> Self {
        Self {
            is_origin: false,
            ..self
        }
    }

    pub fn with_on_axis(self, on_axis: bool) -> Self {
        Self { on_axis, ..self }
    }
}

/// Partially supplied provenance. `None` flags are inferred from the coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvenanceHint {
    pub is_origin: Option<bool>,
    pub on_axis: Option<bool>,
    pub on_arc: bool,
}

/// Which flags [`ProvenanceHint::resolve`] had to infer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InferredFlags {
    pub is_origin: bool,
    pub on_axis: bool,
}

impl InferredFlags {
    pub fn any(self) -> bool {
        self.is_origin || self.on_axis
    }
}

impl ProvenanceHint {
    pub fn resolve(self, z: Complex64) -> (Provenance, InferredFlags) {
        let read = Provenance::of_input(z);
        let provenance = Provenance {
            is_origin: self.is_origin.unwrap_or(read.is_origin),
            on_axis: self.on_axis.unwrap_or(read.on_axis),
            on_arc: self.on_arc,
        };
        let inferred = InferredFlags {
            is_origin: self.is_origin.is_none(),
            on_axis: self.on_axis.is_none(),
        };
        (provenance, inferred)
    }
}

/// How a point's provenance is established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construction {
    /// Every flag is supplied by the caller.
    Explicit(Provenance),
    /// Origin and axis flags missing from the hint are derived from the coordinate, and
    /// each derivation is logged as a warning.
    Inferred(ProvenanceHint),
}

impl From<Provenance> for Construction {
    fn from(provenance: Provenance) -> Self {
        Construction::Explicit(provenance)
    }
}

impl From<ProvenanceHint> for Construction {
    fn from(hint: ProvenanceHint) -> Self {
        Construction::Inferred(hint)
    }
}
