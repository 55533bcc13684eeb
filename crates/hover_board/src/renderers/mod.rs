//! Rectangle renderers and their controller
//!
//! Architecture:
//! - `controller`: binds an item to exactly one renderer variant per frame
//! - `button` / `slider`: the two renderer variants
//! - `canvas`, `fill`, `icon`: sub-visuals shared by both variants

pub mod icon;
pub mod fill;
pub mod canvas;
pub mod button;
pub mod slider;
pub mod controller;

pub use icon::{IconType, IconPair, icon_pair_for};
pub use fill::RendererFill;
pub use canvas::RendererCanvas;
pub use button::RectangleButton;
pub use slider::{RectangleSlider, TrackSegment, JUMP_INACTIVE};
pub use controller::{RendererController, RectangleController, ControllerError, ActiveRenderer};
