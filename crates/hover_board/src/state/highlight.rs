//! Highlight state snapshot
//!
//! Produced by cursor tracking: the nearest interaction point on the item
//! plus how close any cursor is to contact.

use crate::foundation::math::{clamp01, Vec3};

/// Nearest cursor interaction with an item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    /// Nearest point on the item's surface, in world space
    pub nearest_world_pos: Vec3,
    /// Distance from the cursor to that point
    pub distance: f32,
    /// Normalized progress toward contact (1 = touching)
    pub progress: f32,
}

impl Highlight {
    /// Create a highlight at a world position
    pub fn new(nearest_world_pos: Vec3, distance: f32, progress: f32) -> Self {
        Self {
            nearest_world_pos,
            distance,
            progress: clamp01(progress),
        }
    }
}

/// Highlight snapshot of an item for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HighlightState {
    /// Nearest highlight across cursors, if any cursor is in range
    pub nearest_highlight: Option<Highlight>,
    /// Whether this item is the nearest item for some cursor
    pub is_nearest_across_all_items_for_any_cursor: bool,
    max_highlight_progress: f32,
}

impl HighlightState {
    /// Snapshot with no cursor in range
    pub fn none() -> Self {
        Self::default()
    }

    /// Snapshot for a single nearest highlight
    ///
    /// Max progress follows the highlight's own progress.
    pub fn with_highlight(highlight: Highlight, is_nearest: bool) -> Self {
        Self {
            nearest_highlight: Some(highlight),
            is_nearest_across_all_items_for_any_cursor: is_nearest,
            max_highlight_progress: highlight.progress,
        }
    }

    /// Strongest highlight progress across cursors, in `[0, 1]`
    pub fn max_highlight_progress(&self) -> f32 {
        self.max_highlight_progress
    }

    /// Set the strongest highlight progress, clamped to `[0, 1]`
    pub fn set_max_highlight_progress(&mut self, progress: f32) {
        self.max_highlight_progress = clamp01(progress);
    }

    /// Drop any highlight for this frame
    pub fn clear(&mut self) {
        *self = Self::none();
    }
}
