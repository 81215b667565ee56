//! Color math — direct conversions without external dependencies.
//! Hue is in degrees; saturation, value, and alpha are normalized f64 in 0.0–1.0.

use std::f64::consts::PI;

/// HSV → RGB via the chroma/sector formula. `h` in degrees, [0, 360).
///
/// Sectors are 60° wide and half-open on the low end: exactly 60.0 falls in
/// the second sector, matching the per-pixel wheel rendering so there is no
/// seam at sector boundaries. Output channels are clamped to 0.0–1.0.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        (r + m).clamp(0.0, 1.0),
        (g + m).clamp(0.0, 1.0),
        (b + m).clamp(0.0, 1.0),
    )
}

/// Map a wheel-relative position to (hue°, saturation).
///
/// Angle comes from `atan2` in (-π, π] and is shifted to put hue in
/// [0, 360). Saturation is distance over `radius`, clamped, so points past
/// the rim still read as fully saturated.
pub fn point_to_hue_sat(x: f64, y: f64, radius: f64) -> (f64, f64) {
    let angle = y.atan2(x);
    let hue = (angle + PI) / (2.0 * PI) * 360.0;
    let dist = (x * x + y * y).sqrt();
    let sat = (dist / radius).clamp(0.0, 1.0);
    (hue, sat)
}

/// Alpha from the vertical NDC position on the strip.
///
/// Piecewise-linear: 0 below -0.8, 1 above 0.8, linear between, continuous
/// at both breakpoints.
pub fn alpha_from_y(y: f64) -> f64 {
    if y < -0.8 {
        return 0.0;
    }
    if y > 0.8 {
        return 1.0;
    }
    (y + 0.8) / 1.6
}
