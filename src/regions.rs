//! The two fixed interactive regions, defined in NDC space.
//!
//! The wheel is a disk centered at the origin; the alpha strip is an
//! axis-aligned box to its right. Both are compile-time constants and do not
//! move or scale with the window: the canvas maps its whole surface to NDC.

use crate::ndc::NdcPoint;

/// Hue/saturation wheel radius in NDC units.
pub const WHEEL_RADIUS: f64 = 0.6;

/// Alpha strip horizontal extent.
pub const ALPHA_BOX_X: (f64, f64) = (0.8, 0.9);

/// Alpha strip vertical extent.
pub const ALPHA_BOX_Y: (f64, f64) = (-0.8, 0.8);

/// True iff `p` lies on or inside the wheel. Boundary points count as inside.
pub fn in_wheel(p: NdcPoint) -> bool {
    p.x * p.x + p.y * p.y <= WHEEL_RADIUS * WHEEL_RADIUS
}

/// True iff `p` lies in the alpha strip. All four edges are inclusive.
pub fn in_alpha_box(p: NdcPoint) -> bool {
    p.x >= ALPHA_BOX_X.0 && p.x <= ALPHA_BOX_X.1 && p.y >= ALPHA_BOX_Y.0 && p.y <= ALPHA_BOX_Y.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_boundary_is_inside() {
        // Points with x² + y² exactly R².
        assert!(in_wheel(NdcPoint::new(WHEEL_RADIUS, 0.0)));
        assert!(in_wheel(NdcPoint::new(0.0, -WHEEL_RADIUS)));
        let d = WHEEL_RADIUS / 2.0_f64.sqrt();
        assert!(in_wheel(NdcPoint::new(d, d)));
        assert!(!in_wheel(NdcPoint::new(WHEEL_RADIUS + 1e-6, 0.0)));
    }

    #[test]
    fn alpha_box_edges_are_inclusive() {
        assert!(in_alpha_box(NdcPoint::new(0.8, 0.0)));
        assert!(in_alpha_box(NdcPoint::new(0.9, 0.0)));
        assert!(in_alpha_box(NdcPoint::new(0.85, 0.8)));
        assert!(in_alpha_box(NdcPoint::new(0.85, -0.8)));
        assert!(in_alpha_box(NdcPoint::new(0.8, 0.8)));
        assert!(!in_alpha_box(NdcPoint::new(0.79, 0.0)));
        assert!(!in_alpha_box(NdcPoint::new(0.91, 0.0)));
        assert!(!in_alpha_box(NdcPoint::new(0.85, 0.81)));
        assert!(!in_alpha_box(NdcPoint::new(-0.85, 0.0)));
    }

    #[test]
    fn regions_are_disjoint() {
        // The box starts past the wheel rim, so no point can hit both.
        // Sweep a grid over the whole NDC square rather than assuming it.
        for i in 0..=200 {
            for j in 0..=200 {
                let p = NdcPoint::new(i as f64 / 100.0 - 1.0, j as f64 / 100.0 - 1.0);
                assert!(
                    !(in_wheel(p) && in_alpha_box(p)),
                    "both regions claim ({}, {})",
                    p.x,
                    p.y
                );
            }
        }
    }
}
