//! Translation of a horizontal drag delta into a discrete reorder target.
//!
//! The quantum is the configured minimum tab width plus spacing even though
//! rendered tabs are content-width dependent. The translator only picks a
//! target slot; the organizer re-lays-out after the move, so the
//! approximation is self-correcting.

use crate::config::TabBarConfig;

/// Drags at or below this many logical units are treated as clicks, not
/// reorder gestures.
pub const DRAG_COMMIT_THRESHOLD: f32 = 20.0;

/// Compute the reorder target for a finished drag.
///
/// Returns `None` when the gesture should not move anything: delta within the
/// click threshold, an empty list, or a quantized target equal to the current
/// index. `Some(index)` is always within `[0, tab_count)`.
pub fn reorder_target(
    delta_x: f32,
    current_index: usize,
    tab_count: usize,
    config: &TabBarConfig,
) -> Option<usize> {
    if tab_count == 0 || current_index >= tab_count {
        return None;
    }
    if delta_x.abs() <= DRAG_COMMIT_THRESHOLD {
        return None;
    }

    let quantum = config.tab_min_width + config.tab_spacing;
    let position_change = (delta_x / quantum).floor() as isize;
    let new_index =
        (current_index as isize + position_change).clamp(0, tab_count as isize - 1) as usize;

    (new_index != current_index).then_some(new_index)
}
