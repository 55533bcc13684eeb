//! Item data model
//!
//! Items are the interactive records a controller renders: plain buttons,
//! checkboxes, radios, parent/sticky items and sliders. Each item has exactly
//! one shape, expressed as an [`ItemKind`] variant.

mod item;
mod slider;

pub use item::{ItemData, ItemKind, ItemType};
pub use slider::{SliderItem, SliderFillType, SliderLabelFormatter, default_slider_label};
