//! # Hover Board
//!
//! Renderer controllers for rectangle-shaped spatial UI items.
//!
//! ## Features
//!
//! - **Rectangle Controller**: binds an item (button, checkbox, radio, parent,
//!   sticky or slider) to exactly one renderer variant and keeps it in sync
//!   with item, highlight and selection state every frame
//! - **Slider Track Meshes**: quad meshes with change detection so geometry
//!   and color are only rebuilt when their inputs actually change
//! - **Scene Registry**: slotmap-backed renderer nodes with a role index for
//!   lazy renderer acquisition
//!
//! ## Quick Start
//!
//! ```rust
//! use hover_board::prelude::*;
//!
//! let mut host = RendererHost::new(RendererConfig::default());
//! let key = host.add_item(ItemData::checkbox("Lights", true)).unwrap();
//!
//! host.tick();
//!
//! let button = host.button_for(key).expect("checkbox items use a button renderer");
//! assert_eq!(button.canvas.icons.outer, IconType::CheckOuter);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod items;
pub mod state;
pub mod scene;
pub mod meshes;
pub mod renderers;
pub mod host;

pub use host::{RendererHost, ItemKey, HostError};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        RendererHost, ItemKey, HostError,
        config::{Config, ConfigError, ConfigFormat, RendererConfig, ControllerConfig, SliderLayoutConfig, SliderMeshConfig},
        foundation::math::{Vec2, Vec3, Vec4, Mat4, Transform},
        items::{ItemData, ItemKind, ItemType, SliderItem, SliderFillType},
        state::{HighlightState, Highlight, SelectionState},
        scene::{RendererScene, NodeKey, RendererRole, SceneComponent, SceneError},
        meshes::{DirtyState, MeshSliderRectangle, RenderMesh},
        renderers::{
            RendererController, RectangleController, ControllerError,
            RectangleButton, RectangleSlider, IconType, IconPair,
        },
    };
}
