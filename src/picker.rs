//! Picker state and its click transition.
//!
//! A flat document: the selected color plus the vertical offset of the alpha
//! handle. The canvas owns one of these behind a signal and feeds it discrete
//! click events; there is no drag handling, so a press is the only input that
//! changes state.

use crate::color::RgbaColor;
use crate::math;
use crate::ndc::NdcPoint;
use crate::regions;

/// Current picker selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerState {
    color: RgbaColor,
    slider_offset: f64,
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerState {
    /// Opaque white, handle at the strip's midpoint.
    pub fn new() -> Self {
        Self {
            color: RgbaColor::default(),
            slider_offset: 0.0,
        }
    }

    /// The selected RGBA color.
    pub fn color(&self) -> RgbaColor {
        self.color
    }

    /// Vertical NDC position of the alpha handle. Purely visual; the alpha
    /// channel itself lives in [`Self::color`].
    pub fn slider_offset(&self) -> f64 {
        self.slider_offset
    }

    /// Apply one click at `p` and return the next state.
    ///
    /// Both region tests run on every click; the regions are disjoint, so at
    /// most one branch fires. A wheel hit replaces RGB and leaves alpha and
    /// the handle alone; a strip hit replaces alpha and the handle and leaves
    /// RGB alone; a miss returns the state unchanged.
    pub fn apply_click(self, p: NdcPoint) -> Self {
        let mut next = self;
        if regions::in_alpha_box(p) {
            next.slider_offset = p.y;
            next.color = next.color.with_alpha(math::alpha_from_y(p.y));
        }
        if regions::in_wheel(p) {
            let (hue, sat) = math::point_to_hue_sat(p.x, p.y, regions::WHEEL_RADIUS);
            let (r, g, b) = math::hsv_to_rgb(hue, sat, 1.0);
            next.color = next.color.with_rgb(r, g, b);
        }
        next
    }
}
