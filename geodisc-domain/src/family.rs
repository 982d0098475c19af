use crate::branch::{branch_sqrt, sign};
use crate::error::{DomainError, InvariantViolationError};
use crate::roots::Roots;
use geodisc_types::{BranchSign, Point};
use num_complex::Complex64;
use tracing::{debug, trace, warn};

/// One member `F_a` of the boundary map family, anchored at base point `a`.
///
/// - `b = |a|² / Re(a)`: the pole of `f1`.
/// - `c = |a|² / Im(a)`: the shift of `f2`.
///
/// `f1` sends the circle through `0`, `a` and `b` to the imaginary axis (with `a ↦ ic`),
/// `f2` folds that axis onto the real axis, and `f3` opens it back up with a square root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryMapFamily {
    a: Complex64,
    b: f64,
    c: f64,
}

impl BoundaryMapFamily {
    pub fn new(a: Complex64) -> Result<Self, DomainError> {
        if a.re == 0.0 {
            return Err(DomainError::ZeroRealPart { base: a });
        }
        if a.im == 0.0 {
            return Err(DomainError::ZeroImaginaryPart { base: a });
        }
        let modulus_sq = a.norm_sqr();
        Ok(Self {
            a,
            b: modulus_sq / a.re,
            c: modulus_sq / a.im,
        })
    }

    /// Builds the family from a point's coordinate. Its provenance plays no part.
    pub fn from_base_point(base: &Point) -> Result<Self, DomainError> {
        Self::new(base.z())
    }

    pub fn a(&self) -> Complex64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// Möbius transform `f1(z) = z / (1 - z/b)`.
    ///
    /// At `z == b` this returns the complex-infinity sentinel: the input's provenance and
    /// name at `∞ + 0i` with no branch sign. Check [`Point::is_infinite`] before feeding
    /// the result onward.
    pub fn f1(&self, p: &Point) -> Point {
        let z = p.z();
        if z == Complex64::new(self.b, 0.0) {
            debug!(point = p.name(), b = self.b, "f1 pole hit; returning complex infinity");
            return p
                .moved_to(Complex64::new(f64::INFINITY, 0.0))
                .with_branch_sign(BranchSign::Unset);
        }

        let w = z / (1.0 - z / self.b);
        p.moved_to(w).with_branch_sign(sign(w))
    }

    /// Quadratic shift `f2(z) = z² + c²`.
    ///
    /// Every flag is carried over as-is. A non-origin point can land on zero here; it
    /// must keep `is_origin == false` so `f3` can tell it apart from the origin.
    pub fn f2(&self, p: &Point) -> Point {
        let z = p.z();
        p.moved_to(z * z + self.c * self.c)
    }

    /// Square root with provenance-driven branch selection.
    ///
    /// 1. Origin or arc provenance: both principal roots `[+w, -w]`, signs `+1, -1`.
    /// 2. On the real axis: `s · branch_sqrt(z)` for the inherited sign `s`.
    /// 3. Otherwise: `branch_sqrt(z)`, signed by the sign rule on the root itself.
    ///
    /// Every output has `is_origin == false`.
    pub fn f3(&self, p: &Point) -> Result<Roots, InvariantViolationError> {
        let z = p.z();
        let at_zero = z.re == 0.0 && z.im == 0.0;
        if at_zero && !p.is_origin() {
            return Err(InvariantViolationError::ZeroWithoutOrigin {
                name: p.name().to_string(),
            });
        }

        let provenance = p.provenance().without_origin();

        if p.is_origin() || p.on_arc() {
            let w = z.sqrt();
            trace!(point = p.name(), z = %z, root = %w, "f3 at branch point; emitting both roots");
            let plus = p
                .moved_to(w)
                .with_provenance(provenance)
                .with_branch_sign(BranchSign::Positive);
            let minus = p
                .moved_to(-w)
                .with_provenance(provenance)
                .with_branch_sign(BranchSign::Negative);
            return Ok(Roots::Two([plus, minus]));
        }

        if p.on_axis() {
            let s = p.branch_sign();
            if !s.is_set() {
                warn!(
                    point = p.name(),
                    z = %z,
                    "f3 on axis with no branch sign; root collapses to zero"
                );
            }
            let w = s.apply(branch_sqrt(z));
            debug!(point = p.name(), sign = %s, "f3 on axis; keeping inherited branch");
            return Ok(Roots::One(
                p.moved_to(w)
                    .with_provenance(provenance.with_on_axis(true))
                    .with_branch_sign(s),
            ));
        }

        let w = branch_sqrt(z);
        Ok(Roots::One(
            p.moved_to(w)
                .with_provenance(provenance.with_on_axis(false))
                .with_branch_sign(sign(w)),
        ))
    }
}
