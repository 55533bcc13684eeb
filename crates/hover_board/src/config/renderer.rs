//! Renderer configuration
//!
//! Groups the tunables for controllers, slider layout and slider track
//! meshes. Every section falls back to its defaults when omitted from a file.

use serde::{Serialize, Deserialize};

use super::Config;
use crate::foundation::math::Vec4;

/// Largest size a controller accepts on either axis
pub const MAX_RENDERER_SIZE: f32 = 100.0;

/// Clamp a renderer size into `[0, MAX_RENDERER_SIZE]`; non-finite sizes become 0
pub fn clamp_renderer_size(size: f32) -> f32 {
    if size.is_finite() {
        size.clamp(0.0, MAX_RENDERER_SIZE)
    } else {
        0.0
    }
}

/// Top-level renderer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Controller defaults and hover behavior
    pub controller: ControllerConfig,
    /// Slider handle/jump/track layout
    pub slider: SliderLayoutConfig,
    /// Slider track mesh colors
    pub mesh: SliderMeshConfig,
}

impl Config for RendererConfig {}

/// Controller defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Initial width of a new controller
    pub default_size_x: f32,
    /// Initial height of a new controller
    pub default_size_y: f32,
    /// Exponent applied when easing the jump preview toward the snapped
    /// hover value; higher values resist leaving a snap point
    pub hover_ease_power: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            default_size_x: 10.0,
            default_size_y: 10.0,
            hover_ease_power: 3.0,
        }
    }
}

/// Slider layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderLayoutConfig {
    /// Height of the draggable handle button
    pub handle_size_y: f32,
    /// Height of the jump preview button
    pub jump_size_y: f32,
    /// Horizontal inset of the track relative to the slider width
    pub track_inset_x: f32,
}

impl Default for SliderLayoutConfig {
    fn default() -> Self {
        Self {
            handle_size_y: 2.0,
            jump_size_y: 1.0,
            track_inset_x: 0.5,
        }
    }
}

/// Slider track mesh colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderMeshConfig {
    /// Color of unfilled track segments
    pub track_color: Vec4,
    /// Color of filled track segments
    pub fill_color: Vec4,
}

impl Default for SliderMeshConfig {
    fn default() -> Self {
        Self {
            track_color: Vec4::new(0.5, 0.5, 0.5, 1.0),
            fill_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}
