//! Rectangle button renderer

use super::canvas::RendererCanvas;
use super::fill::RendererFill;
use crate::config::clamp_renderer_size;
use crate::foundation::math::{inverse_transform_point, transform_point, Mat4, Vec3};

/// Rectangle button: a fill behind a label/icon canvas
///
/// When `controlled_by_item` is set, a controller owns every field below
/// and rewrites them each frame; clear it to edit the button by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleButton {
    /// Whether a controller currently drives this renderer
    pub controlled_by_item: bool,
    /// Width, clamped to `[0, 100]` on update
    pub size_x: f32,
    /// Height, clamped to `[0, 100]` on update
    pub size_y: f32,
    /// Vertical offset within the parent renderer
    pub local_offset_y: f32,
    /// Whether the button is drawn
    pub visible: bool,
    /// Label and icons
    pub canvas: RendererCanvas,
    /// Highlight/selection fill
    pub fill: RendererFill,
}

impl Default for RectangleButton {
    fn default() -> Self {
        Self::new()
    }
}

impl RectangleButton {
    /// Create a visible 10x10 button
    pub fn new() -> Self {
        Self {
            controlled_by_item: false,
            size_x: 10.0,
            size_y: 10.0,
            local_offset_y: 0.0,
            visible: true,
            canvas: RendererCanvas::default(),
            fill: RendererFill::default(),
        }
    }

    /// Propagate size into the canvas and fill after the parent pushed settings
    pub fn update_after_parent(&mut self) {
        self.size_x = clamp_renderer_size(self.size_x);
        self.size_y = clamp_renderer_size(self.size_y);

        self.canvas.size_x = self.size_x;
        self.canvas.size_y = self.size_y;
        self.fill.size_x = self.size_x;
        self.fill.size_y = self.size_y;
    }

    /// Nearest point on the button rectangle to a world-space point
    ///
    /// `world` is the local-to-world matrix of the node owning the button.
    pub fn nearest_world_position(&self, world: &Mat4, from: Vec3) -> Vec3 {
        let local = inverse_transform_point(world, from);
        let half_x = self.size_x / 2.0;
        let half_y = self.size_y / 2.0;

        let nearest = Vec3::new(
            local.x.clamp(-half_x, half_x),
            local.y.clamp(self.local_offset_y - half_y, self.local_offset_y + half_y),
            0.0,
        );

        transform_point(world, nearest)
    }
}
