//! Highlight/selection fill of a renderer

use crate::foundation::math::clamp01;

/// Progress-driven fill behind a renderer's canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererFill {
    /// Fill width
    pub size_x: f32,
    /// Fill height
    pub size_y: f32,
    /// Whether the edge glow is shown
    pub edge_visible: bool,
    highlight_progress: f32,
    selection_progress: f32,
}

impl Default for RendererFill {
    fn default() -> Self {
        Self {
            size_x: 10.0,
            size_y: 10.0,
            edge_visible: false,
            highlight_progress: 0.0,
            selection_progress: 0.0,
        }
    }
}

impl RendererFill {
    /// Highlight progress in `[0, 1]`
    pub fn highlight_progress(&self) -> f32 {
        self.highlight_progress
    }

    /// Set highlight progress, clamped to `[0, 1]`
    pub fn set_highlight_progress(&mut self, progress: f32) {
        self.highlight_progress = clamp01(progress);
    }

    /// Selection progress in `[0, 1]`
    pub fn selection_progress(&self) -> f32 {
        self.selection_progress
    }

    /// Set selection progress, clamped to `[0, 1]`
    pub fn set_selection_progress(&mut self, progress: f32) {
        self.selection_progress = clamp01(progress);
    }
}
