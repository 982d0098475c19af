use crate::provenance::{Construction, Provenance, ProvenanceHint};
use crate::sign::BranchSign;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A coordinate on (or near) the region boundary, tagged with where it came from.
///
/// Stages never mutate a `Point`; they derive a new one with [`Point::moved_to`] or the
/// consuming `with_*` helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    z: Complex64,
    #[serde(flatten)]
    provenance: Provenance,
    branch_sign: BranchSign,
    name: String,
}

impl Point {
    /// Explicit construction: every provenance flag is supplied, nothing is inferred.
    pub fn new(z: Complex64, provenance: Provenance) -> Self {
        Self {
            z,
            provenance,
            branch_sign: BranchSign::Unset,
            name: z.to_string(),
        }
    }

    /// Convenience construction: origin and axis membership are read off `z`.
    ///
    /// Logs a warning for each inferred flag. Points that can reach the origin or the
    /// real axis transiently must use [`Point::new`] instead.
    pub fn inferred(z: Complex64) -> Self {
        Self::construct(z, Construction::Inferred(ProvenanceHint::default()))
    }

    pub fn construct(z: Complex64, construction: impl Into<Construction>) -> Self {
        match construction.into() {
            Construction::Explicit(provenance) => Self::new(z, provenance),
            Construction::Inferred(hint) => {
                let (provenance, inferred) = hint.resolve(z);
                if inferred.is_origin {
                    warn!(
                        z = %z,
                        is_origin = provenance.is_origin,
                        "is_origin inferred from coordinate"
                    );
                }
                if inferred.on_axis {
                    warn!(
                        z = %z,
                        on_axis = provenance.on_axis,
                        "on_axis inferred from coordinate"
                    );
                }
                Self::new(z, provenance)
            }
        }
    }

    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_branch_sign(self, branch_sign: BranchSign) -> Self {
        Self {
            branch_sign,
            ..self
        }
    }

    pub fn with_provenance(self, provenance: Provenance) -> Self {
        Self { provenance, ..self }
    }

    /// Same provenance, branch sign and name at a new coordinate.
    pub fn moved_to(&self, z: Complex64) -> Self {
        Self {
            z,
            provenance: self.provenance,
            branch_sign: self.branch_sign,
            name: self.name.clone(),
        }
    }

    pub fn z(&self) -> Complex64 {
        self.z
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_origin(&self) -> bool {
        self.provenance.is_origin
    }

    pub fn on_axis(&self) -> bool {
        self.provenance.on_axis
    }

    pub fn on_arc(&self) -> bool {
        self.provenance.on_arc
    }

    pub fn branch_sign(&self) -> BranchSign {
        self.branch_sign
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the complex-infinity sentinel. Do no further arithmetic on such a point.
    pub fn is_infinite(&self) -> bool {
        self.z.is_infinite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} (branch {})", self.name, self.z, self.branch_sign)
    }
}
