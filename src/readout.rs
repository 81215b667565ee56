//! Read-only text readout of the four RGBA channel values.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::constants;
use crate::picker::PickerState;

fn channel_label(
    lbl: &'static str,
    state: RwSignal<PickerState>,
    read: impl Fn(PickerState) -> f64 + 'static,
) -> impl IntoView {
    label(move || format!("{}:{:.6}", lbl, read(state.get()))).style(|s| {
        s.font_size(constants::READOUT_FONT)
            .font_family("monospace".to_string())
            .color(Color::WHITE)
    })
}

/// The four channel lines, stacked vertically.
pub(crate) fn channel_readout(state: RwSignal<PickerState>) -> impl IntoView {
    v_stack((
        channel_label("R", state, |s| s.color().r()),
        channel_label("G", state, |s| s.color().g()),
        channel_label("B", state, |s| s.color().b()),
        channel_label("A", state, |s| s.color().a()),
    ))
    .style(|s| s.gap(2.0))
}
