//! The `F_a` boundary map family and the Geodisc composition `f3 ∘ f2 ∘ f1`.
//!
//! This crate owns *which branch* a point lands on. It does not own how points are
//! produced or displayed; that's the `geodisc-render` crate.

mod branch;
mod error;
mod family;
mod pipeline;
mod roots;

pub use branch::{branch_angle, branch_sqrt, sign};
pub use error::{DomainError, InvariantViolationError, MapError, MapResult};
pub use family::BoundaryMapFamily;
pub use pipeline::{Image, StageTrace};
pub use roots::Roots;
