//! Composed picker panel: the canvas with the channel readout pinned on top.

use floem::prelude::*;
use floem::reactive::RwSignal;

use crate::canvas::picker_canvas;
use crate::picker::PickerState;
use crate::readout::channel_readout;

/// Canvas underneath, readout anchored to the top-left corner.
pub(crate) fn picker_panel(state: RwSignal<PickerState>) -> impl IntoView {
    stack((
        picker_canvas(state),
        channel_readout(state).style(|s| s.absolute().inset_left(12.0).inset_top(12.0)),
    ))
    .style(|s| s.size_full())
}
