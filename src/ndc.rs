//! Window-pixel ↔ normalized-device-coordinate mapping.
//!
//! All region tests and picker geometry live in NDC: [-1, 1] × [-1, 1],
//! center origin, y-up. Raw pointer positions arrive in device pixels with a
//! top-left origin and y-down, so the mapper rescales both axes and flips y.

/// A point in normalized device coordinates.
///
/// Only [`NdcPoint::from_window`] produces these from raw pixel input; the
/// rest of the crate never converts pixels ad hoc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcPoint {
    pub x: f64,
    pub y: f64,
}

impl NdcPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Map a raw pointer position to NDC given the viewport size in pixels.
    ///
    /// The viewport must be positive; the windowing layer never delivers
    /// pointer events to a zero-sized view.
    pub fn from_window(raw_x: f64, raw_y: f64, width: f64, height: f64) -> Self {
        Self {
            x: (raw_x / width) * 2.0 - 1.0,
            y: 1.0 - (raw_y / height) * 2.0,
        }
    }

    /// Inverse mapping, used by the paint pass to place NDC-defined geometry.
    pub fn to_window(self, width: f64, height: f64) -> (f64, f64) {
        ((self.x + 1.0) / 2.0 * width, (1.0 - self.y) / 2.0 * height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_viewport_is_origin() {
        let p = NdcPoint::from_window(400.0, 400.0, 800.0, 800.0);
        assert_eq!(p, NdcPoint::new(0.0, 0.0));
    }

    #[test]
    fn corners_map_to_unit_square() {
        assert_eq!(
            NdcPoint::from_window(0.0, 0.0, 800.0, 600.0),
            NdcPoint::new(-1.0, 1.0)
        );
        assert_eq!(
            NdcPoint::from_window(800.0, 600.0, 800.0, 600.0),
            NdcPoint::new(1.0, -1.0)
        );
    }

    #[test]
    fn y_axis_is_flipped() {
        // Pixel y grows downward; NDC y grows upward.
        let p = NdcPoint::from_window(100.0, 100.0, 800.0, 800.0);
        assert_eq!(p, NdcPoint::new(-0.75, 0.75));
    }

    #[test]
    fn to_window_round_trips() {
        let p = NdcPoint::from_window(720.0, 400.0, 800.0, 800.0);
        assert_eq!(p, NdcPoint::new(0.8, 0.0));
        let (x, y) = p.to_window(800.0, 800.0);
        assert!((x - 720.0).abs() < 1e-9);
        assert!((y - 400.0).abs() < 1e-9);
    }
}
