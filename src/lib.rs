//! # floem-wheel
//!
//! An HSV color wheel picker for [Floem](https://github.com/lapce/floem).
//!
//! Renders a hue/saturation wheel, a vertical alpha strip, and a live color
//! swatch, with the picked RGBA channels shown as text. Clicking the wheel
//! picks hue and saturation at full value; clicking the strip picks alpha.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_wheel::{wheel_picker, PickerState};
//!
//! let state = RwSignal::new(PickerState::new());
//! // Use `wheel_picker(state)` in your Floem view tree.
//! ```

mod canvas;
mod checkerboard;
mod color;
mod constants;
mod math;
mod ndc;
mod panel;
mod picker;
mod readout;
mod regions;

pub use color::RgbaColor;
pub use ndc::NdcPoint;
pub use picker::PickerState;

use floem::prelude::*;
use floem::reactive::RwSignal;

/// Creates the top-level picker view.
///
/// The picker reads from and writes to `state`. Any external changes to the
/// signal are reflected in the UI, and clicks update the signal.
pub fn wheel_picker(state: RwSignal<PickerState>) -> impl IntoView {
    panel::picker_panel(state)
}
