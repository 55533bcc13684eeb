//! Procedural meshes for renderer visuals
//!
//! - `dirty`: change detection shared by mesh rebuild passes
//! - `mesh_build`: working vertex arrays and the committed render buffer
//! - `slider_rectangle`: slider track/fill quads

pub mod dirty;
pub mod mesh_build;
pub mod slider_rectangle;

pub use dirty::DirtyState;
pub use mesh_build::{MeshBuild, MeshVertex, RenderMesh};
pub use slider_rectangle::{MeshSliderRectangle, QuadSettings};
