use crate::ui::InputEvent;

/// Move selection cursor one item left, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    (selected + item_count - 1) % item_count
}

/// Move selection cursor one item right, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    (selected + 1) % item_count
}

/// Turn an accumulated quadrature delta into a run of rotate events.
///
/// Positive deltas are clockwise (`RotateRight`). Partial detents are
/// dropped. Returns `None` when the knob has not moved a full detent.
pub fn knob_steps(delta: i16, counts_per_detent: i16) -> Option<(InputEvent, u16)> {
    let steps = delta / counts_per_detent.max(1);
    match steps {
        0 => None,
        s if s > 0 => Some((InputEvent::RotateRight, s.unsigned_abs())),
        s => Some((InputEvent::RotateLeft, s.unsigned_abs())),
    }
}
