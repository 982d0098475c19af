//! Error types for geodisc-domain.
//!
//! - Domain errors (exit code 2): the caller supplied a base point the family cannot be
//!   built from.
//! - Invariant violations (exit code 1): a point reached `f3` in a state no correct
//!   upstream stage produces.

use num_complex::Complex64;
use thiserror::Error;

/// The top-level error type for map evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] InvariantViolationError),
}

/// The base point lies on an axis, so `b` or `c` would divide by zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("base point {base} has zero real part; b = |a|^2 / Re(a) is undefined")]
    ZeroRealPart { base: Complex64 },

    #[error("base point {base} has zero imaginary part; c = |a|^2 / Im(a) is undefined")]
    ZeroImaginaryPart { base: Complex64 },
}

/// A point reached `f3` carrying provenance that contradicts its coordinate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolationError {
    /// Zero coordinate without origin provenance.
    #[error("point '{name}' reached f3 at zero without origin provenance")]
    ZeroWithoutOrigin { name: String },
}

impl MapError {
    pub fn is_domain(&self) -> bool {
        matches!(self, MapError::Domain(_))
    }

    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            MapError::Domain(_) => 2,
            MapError::InvariantViolation(_) => 1,
        }
    }
}

pub type MapResult<T> = Result<T, MapError>;
