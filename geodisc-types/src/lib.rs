//! Value types shared by every stage of the Geodisc map pipeline.
//!
//! # Design constraints
//! - Points are values. Map stages return new points; nothing is mutated in place.
//! - Provenance flags describe the *original* input coordinate. They are set once at
//!   construction and threaded through the stages, never re-derived from a transformed
//!   coordinate.
//! - These types serialize, so the CLI can emit evaluated points as JSON.

pub mod point;
pub mod provenance;
pub mod sign;

pub use point::Point;
pub use provenance::{Construction, InferredFlags, Provenance, ProvenanceHint};
pub use sign::{BranchSign, InvalidBranchSign};
