use num_complex::Complex64;
use serde::Serialize;
use std::f64::consts::{FRAC_2_PI, TAU};

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// Color channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Domain coloring of a coordinate: hue from its angle, lightness from its modulus.
///
/// The origin is black and complex infinity is white.
pub fn domain_color(z: Complex64) -> Rgb {
    let hue = (z.re.atan2(z.im) + TAU / 3.0) / TAU;
    let lightness = FRAC_2_PI * z.norm().atan();
    hls_to_rgb(hue, lightness, 1.0)
}

/// HLS to RGB; hue wraps modulo 1.
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> Rgb {
    if s == 0.0 {
        return Rgb { r: l, g: l, b: l };
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    Rgb {
        r: hue_channel(m1, m2, h + ONE_THIRD),
        g: hue_channel(m1, m2, h),
        b: hue_channel(m1, m2, h - ONE_THIRD),
    }
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}
