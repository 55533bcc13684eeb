//! Scene registry for renderer objects
//!
//! Controllers construct, look up and destroy their renderers through a
//! [`RendererScene`]. Nodes live in a slotmap, and a role index maps
//! `(parent, role)` to the renderer child filling that role, so acquiring an
//! existing renderer never walks the tree.

mod registry;

pub use registry::{RendererScene, SceneNode, SceneComponent, RendererRole, NodeKey, SceneError};
