//! Selection state snapshot

use crate::foundation::math::clamp01;

/// Selection progress of an item for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionState {
    selection_progress: f32,
}

impl SelectionState {
    /// Create a snapshot with the given progress
    pub fn new(selection_progress: f32) -> Self {
        Self {
            selection_progress: clamp01(selection_progress),
        }
    }

    /// Progress toward selection in `[0, 1]`
    pub fn selection_progress(&self) -> f32 {
        self.selection_progress
    }

    /// Set the progress, clamped to `[0, 1]`
    pub fn set_selection_progress(&mut self, progress: f32) {
        self.selection_progress = clamp01(progress);
    }
}
