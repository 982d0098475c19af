use geodisc_types::BranchSign;
use num_complex::Complex64;
use std::f64::consts::TAU;

/// `+1` when `Re(z) >= 0`, else `-1`. The imaginary axis counts as positive.
pub fn sign(z: Complex64) -> BranchSign {
    if z.re >= 0.0 {
        BranchSign::Positive
    } else {
        BranchSign::Negative
    }
}

/// Principal argument shifted into `[-2π, 0)`, placing the cut on the positive real axis.
///
/// Negative principal arguments pass through untouched; only `[0, π]` is shifted down by
/// `2π`, so angles just below the cut never round onto it.
pub fn branch_angle(z: Complex64) -> f64 {
    let theta = z.arg();
    if theta < 0.0 { theta } else { theta - TAU }
}

/// Square root with its branch cut along the positive real axis.
///
/// The result's angle is half of [`branch_angle`], so it lies in `[-π, 0)`: the lower
/// half-plane, with the positive real axis itself sent to `-√r`.
pub fn branch_sqrt(z: Complex64) -> Complex64 {
    if z.re == 0.0 && z.im == 0.0 {
        return Complex64::new(0.0, 0.0);
    }
    Complex64::from_polar(z.norm().sqrt(), branch_angle(z) / 2.0)
}
