use anyhow::ensure;
use geodisc_types::{Point, Provenance};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound on the number of points one grid may produce.
pub const MAX_GRID_SAMPLES: usize = 1 << 22;

/// A rectangular window of the complex plane sampled `density` times per unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub min_re: f64,
    pub max_re: f64,
    pub min_im: f64,
    pub max_im: f64,
    pub density: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            min_re: -2.0,
            max_re: 2.0,
            min_im: -2.0,
            max_im: 2.0,
            density: 10,
        }
    }
}

impl GridSpec {
    pub fn validate(&self) -> anyhow::Result<()> {
        for (label, v) in [
            ("min_re", self.min_re),
            ("max_re", self.max_re),
            ("min_im", self.min_im),
            ("max_im", self.max_im),
        ] {
            ensure!(v.is_finite(), "grid bound {} is not finite: {}", label, v);
        }
        ensure!(
            self.min_re <= self.max_re,
            "min_re {} exceeds max_re {}",
            self.min_re,
            self.max_re
        );
        ensure!(
            self.min_im <= self.max_im,
            "min_im {} exceeds max_im {}",
            self.min_im,
            self.max_im
        );
        ensure!(self.density > 0, "grid density must be positive");

        let (real, imag) = (self.real_samples(), self.imag_samples());
        let total = real.checked_mul(imag).unwrap_or(usize::MAX);
        ensure!(
            total <= MAX_GRID_SAMPLES,
            "too many grid samples: {} x {} exceeds the limit of {}",
            real,
            imag,
            MAX_GRID_SAMPLES
        );
        Ok(())
    }

    pub fn real_samples(&self) -> usize {
        sample_count(self.min_re, self.max_re, self.density)
    }

    pub fn imag_samples(&self) -> usize {
        sample_count(self.min_im, self.max_im, self.density)
    }
}

fn sample_count(min: f64, max: f64, density: u32) -> usize {
    (f64::from(density) * (max - min)).floor() as usize
}

/// `n` evenly spaced values from `start` to `stop`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Every grid coordinate, real part outermost.
pub fn generate_coordinates(spec: &GridSpec) -> anyhow::Result<Vec<Complex64>> {
    spec.validate()?;
    let reals = linspace(spec.min_re, spec.max_re, spec.real_samples());
    let imags = linspace(spec.min_im, spec.max_im, spec.imag_samples());

    let mut out = Vec::with_capacity(reals.len() * imags.len());
    for &re in &reals {
        for &im in &imags {
            out.push(Complex64::new(re, im));
        }
    }
    debug!(
        real = reals.len(),
        imag = imags.len(),
        total = out.len(),
        "generated grid"
    );
    Ok(out)
}

/// Grid coordinates as points. Each coordinate is an original input, so its origin and
/// axis membership are supplied explicitly rather than inferred.
pub fn generate_points(spec: &GridSpec) -> anyhow::Result<Vec<Point>> {
    Ok(generate_coordinates(spec)?
        .into_iter()
        .map(|z| Point::new(z, Provenance::of_input(z)))
        .collect())
}

/// Splits coordinates into parallel real and imaginary component vectors.
pub fn split_components(zs: &[Complex64]) -> (Vec<f64>, Vec<f64>) {
    zs.iter().map(|z| (z.re, z.im)).unzip()
}

pub fn coordinate_pairs(zs: &[Complex64]) -> Vec<[f64; 2]> {
    zs.iter().map(|z| [z.re, z.im]).collect()
}
