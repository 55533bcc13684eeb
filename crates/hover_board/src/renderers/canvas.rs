//! Label and icon canvas

use super::icon::IconPair;

/// Label text plus icon pair drawn on top of a renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RendererCanvas {
    /// Label text
    pub label_text: String,
    /// Outer/inner icons
    pub icons: IconPair,
    /// Canvas width
    pub size_x: f32,
    /// Canvas height
    pub size_y: f32,
}
