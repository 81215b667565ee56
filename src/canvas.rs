//! Picker canvas: wheel, alpha strip, handle, and swatch in one view.
//!
//! The canvas treats its own surface as the viewport: pointer positions
//! arrive as view-local pixels, which is exactly the raw input the NDC
//! mapper expects, and every painted shape is defined in NDC and mapped
//! back through [`NdcPoint::to_window`]. Presses are the only input that
//! changes state; there is no drag handling.

use std::sync::Arc;
use std::time::Instant;

use floem::kurbo::{BezPath, Circle, Point, Rect, Shape};
use floem::peniko::{self, Blob, Color, Gradient};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::checkerboard;
use crate::constants;
use crate::math;
use crate::ndc::NdcPoint;
use crate::picker::PickerState;
use crate::regions;

/// Feather width in raster pixels for anti-aliasing the wheel edge.
const FEATHER: f64 = 3.0;

/// Rasterize the wheel at full value (V=1.0) to an RGBA8 buffer.
///
/// Every pixel is converted to wheel-relative NDC and run through the same
/// [`math::point_to_hue_sat`] + [`math::hsv_to_rgb`] pair the click path
/// uses, so the picked color always matches the pixel under the pointer.
/// The circle is inset by [`FEATHER`] so the anti-alias gradient fits in the
/// buffer; the feather only fades alpha, saturation clamps at the rim.
fn rasterize_wheel(size: u32) -> Vec<u8> {
    let half = size as f64 / 2.0;
    let px_radius = half - FEATHER;
    let scale = regions::WHEEL_RADIUS / px_radius;

    let mut buf = vec![0u8; (size * size * 4) as usize];

    for py in 0..size {
        let dy = py as f64 + 0.5 - half;
        let row_offset = (py * size * 4) as usize;

        for px in 0..size {
            let dx = px as f64 + 0.5 - half;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist > px_radius + FEATHER {
                continue; // fully outside
            }

            let alpha = ((px_radius + FEATHER - dist) / FEATHER).clamp(0.0, 1.0);

            // Raster y grows downward; NDC y grows upward.
            let (hue, sat) =
                math::point_to_hue_sat(dx * scale, -dy * scale, regions::WHEEL_RADIUS);
            let (r, g, b) = math::hsv_to_rgb(hue, sat, 1.0);

            let offset = row_offset + (px * 4) as usize;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = (alpha * 255.0 + 0.5) as u8;
        }
    }

    buf
}

pub(crate) struct PickerCanvas {
    id: ViewId,
    state: RwSignal<PickerState>,
    current: PickerState,
    size: floem::taffy::prelude::Size<f32>,
    /// Cached wheel image, rasterized once at a fixed resolution.
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
}

/// Creates the picker canvas.
///
/// Clicks on the wheel or the alpha strip advance `state` through
/// [`PickerState::apply_click`]; clicks elsewhere leave it untouched.
pub(crate) fn picker_canvas(state: RwSignal<PickerState>) -> PickerCanvas {
    let id = ViewId::new();

    create_effect(move |_| {
        let s = state.get();
        id.update_state(s);
    });

    PickerCanvas {
        id,
        state,
        current: state.get_untracked(),
        size: Default::default(),
        wheel_img: None,
        wheel_hash: Vec::new(),
    }
    .style(|s| s.size_full().cursor(floem::style::CursorStyle::Default))
}

impl PickerCanvas {
    /// Map an NDC point into this view's pixel space.
    fn to_px(&self, x: f64, y: f64) -> Point {
        let (px, py) = NdcPoint::new(x, y).to_window(self.size.width as f64, self.size.height as f64);
        Point::new(px, py)
    }

    /// Pixel rect for an NDC extent (`x0 < x1`, `y0 < y1` in NDC).
    fn ndc_rect(&self, x: (f64, f64), y: (f64, f64)) -> Rect {
        let top_left = self.to_px(x.0, y.1);
        let bottom_right = self.to_px(x.1, y.0);
        Rect::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    fn ensure_wheel_image(&mut self) {
        if self.wheel_img.is_some() {
            return;
        }

        let size = constants::WHEEL_RASTER_SIZE;
        let start = Instant::now();
        let pixels = rasterize_wheel(size);
        log::debug!("rasterized {size}x{size} wheel in {:?}", start.elapsed());

        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob, peniko::Format::Rgba8, size, size);

        self.wheel_hash = b"wheel".to_vec();
        self.wheel_img = Some(img);
    }
}

impl View for PickerCanvas {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(next) = state.downcast::<PickerState>() {
            self.current = *next;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, _cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let w = self.size.width as f64;
                let h = self.size.height as f64;
                if w > 0.0 && h > 0.0 {
                    let p = NdcPoint::from_window(e.pos.x, e.pos.y, w, h);
                    let next = self.current.apply_click(p);
                    if next != self.current {
                        self.state.set(next);
                    }
                }
                EventPropagation::Stop
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        // Background
        let (br, bg, bb) = constants::BACKGROUND;
        cx.fill(&Rect::new(0.0, 0.0, w, h), Color::rgba(br, bg, bb, 1.0), 0.0);

        // Wheel image, clipped to the disk
        let r = regions::WHEEL_RADIUS;
        let wheel_rect = self.ndc_rect((-r, r), (-r, r));
        let center = Point::new(wheel_rect.center().x, wheel_rect.center().y);
        let radius = wheel_rect.width().min(wheel_rect.height()) / 2.0;
        let clip = Circle::new(center, radius);
        cx.save();
        cx.clip(&clip);
        self.ensure_wheel_image();
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                wheel_rect,
            );
        }
        cx.restore();

        // Alpha strip: white at the top, black at the bottom
        let strip = self.ndc_rect(regions::ALPHA_BOX_X, regions::ALPHA_BOX_Y);
        let white = Color::rgba(1.0, 1.0, 1.0, 1.0);
        let black = Color::rgba(0.0, 0.0, 0.0, 1.0);
        let gradient = Gradient::new_linear((strip.x0, strip.y0), (strip.x0, strip.y1))
            .with_stops([white, black]);
        // Convert to BezPath so the vello renderer uses the general path
        // handler (its Rect fast-path only supports solid colors).
        let path = strip.to_path(0.1);
        cx.fill(&path, &gradient, 0.0);
        cx.stroke(
            &strip,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Handle: gray triangle pointing at the strip, apex at slider_offset
        let off = self.current.slider_offset();
        let mut tri = BezPath::new();
        tri.move_to(self.to_px(constants::HANDLE_LEFT, off + constants::HANDLE_HALF_HEIGHT));
        tri.line_to(self.to_px(constants::HANDLE_LEFT, off - constants::HANDLE_HALF_HEIGHT));
        tri.line_to(self.to_px(regions::ALPHA_BOX_X.0, off));
        tri.close_path();
        let gray = constants::HANDLE_GRAY;
        cx.fill(&tri, Color::rgba(gray, gray, gray, 1.0), 0.0);

        // Swatch over a checkerboard so the alpha channel reads visually
        let swatch = self.ndc_rect(constants::SWATCH_X, constants::SWATCH_Y);
        checkerboard::paint_checkerboard(cx, swatch, constants::CHECKER_CELL);
        let c = self.current.color();
        cx.fill(&swatch, Color::rgba(c.r(), c.g(), c.b(), c.a()), 0.0);
        cx.stroke(
            &swatch,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_matches_pick_formula_for_interior_pixels() {
        // Cross-check raster pixels against the click-path formula: both run
        // point_to_hue_sat + hsv_to_rgb, so interior pixels must agree to
        // within rounding.
        let size = 128;
        let buf = rasterize_wheel(size);
        let half = size as f64 / 2.0;
        let px_radius = half - FEATHER;
        let scale = regions::WHEEL_RADIUS / px_radius;

        for (px, py) in [(64u32, 64u32), (40, 40), (90, 30), (64, 100), (20, 64)] {
            let dx = px as f64 + 0.5 - half;
            let dy = py as f64 + 0.5 - half;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!(dist < px_radius, "sample must be interior");

            let (hue, sat) =
                math::point_to_hue_sat(dx * scale, -dy * scale, regions::WHEEL_RADIUS);
            let (r, g, b) = math::hsv_to_rgb(hue, sat, 1.0);

            let o = (py * size + px) as usize * 4;
            assert_eq!(buf[o], (r * 255.0 + 0.5) as u8);
            assert_eq!(buf[o + 1], (g * 255.0 + 0.5) as u8);
            assert_eq!(buf[o + 2], (b * 255.0 + 0.5) as u8);
            assert_eq!(buf[o + 3], 255);
        }
    }
}
