//! Per-frame interaction state
//!
//! Highlight and selection snapshots are refreshed by the input/cursor layer
//! before controllers run, and only read during a controller update.

mod highlight;
mod selection;

pub use highlight::{HighlightState, Highlight};
pub use selection::SelectionState;
