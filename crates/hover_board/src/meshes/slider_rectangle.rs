//! Slider track rectangle mesh
//!
//! One segment of a slider track: a quad whose UV y-range maps onto the
//! segment's span of the full track. Geometry and color are rebuilt in
//! separate passes, each gated by its own [`DirtyState`], so per-frame color
//! changes never rebuild geometry.

use log::trace;

use super::dirty::DirtyState;
use super::mesh_build::{MeshBuild, RenderMesh};
use crate::config::{clamp_renderer_size, SliderMeshConfig};
use crate::foundation::math::{clamp01, Vec4};

/// Geometry inputs of a slider rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSettings {
    /// Quad width
    pub size_x: f32,
    /// Quad height
    pub size_y: f32,
    /// UV y assigned to the bottom edge
    pub uv_start_y: f32,
    /// UV y assigned to the top edge
    pub uv_end_y: f32,
}

/// Slider track/fill quad with change-detected rebuilds
#[derive(Debug, Clone)]
pub struct MeshSliderRectangle {
    /// Width, clamped to `[0, 100]` when built
    pub size_x: f32,
    /// Height, clamped to `[0, 100]` when built
    pub size_y: f32,
    /// UV y at the bottom edge, clamped to `[0, 1]`
    pub uv_start_y: f32,
    /// UV y at the top edge, clamped to `[0, 1]`
    pub uv_end_y: f32,
    /// Whether this segment shows fill instead of track
    pub is_fill: bool,
    /// Color used when not filled
    pub track_color: Vec4,
    /// Color used when filled
    pub fill_color: Vec4,
    /// Inactive meshes skip updates entirely
    pub active: bool,
    build: Option<MeshBuild>,
    geometry: DirtyState<QuadSettings>,
    color: DirtyState<Vec4>,
}

impl Default for MeshSliderRectangle {
    fn default() -> Self {
        Self::new(&SliderMeshConfig::default())
    }
}

impl MeshSliderRectangle {
    /// Create an unbuilt rectangle using the configured colors
    pub fn new(config: &SliderMeshConfig) -> Self {
        Self {
            size_x: 10.0,
            size_y: 10.0,
            uv_start_y: 0.0,
            uv_end_y: 1.0,
            is_fill: false,
            track_color: config.track_color,
            fill_color: config.fill_color,
            active: true,
            build: None,
            geometry: DirtyState::new(),
            color: DirtyState::new(),
        }
    }

    /// Current geometry inputs after clamping
    pub fn settings(&self) -> QuadSettings {
        QuadSettings {
            size_x: clamp_renderer_size(self.size_x),
            size_y: clamp_renderer_size(self.size_y),
            uv_start_y: clamp01(self.uv_start_y),
            uv_end_y: clamp01(self.uv_end_y),
        }
    }

    /// Color for the current fill state
    pub fn active_color(&self) -> Vec4 {
        if self.is_fill {
            self.fill_color
        } else {
            self.track_color
        }
    }

    /// Refresh geometry and color after the owning renderer updated
    ///
    /// Returns false without touching the buffer when the mesh is inactive.
    pub fn update_after_renderer(&mut self) -> bool {
        if !self.update_geometry_after_renderer() {
            return false;
        }

        self.update_color();
        true
    }

    /// Allocate a mesh buffer when none exists or a fresh one is requested
    ///
    /// A new buffer clears both change baselines and runs one update pass, so
    /// geometry and color are committed even if the inputs did not change.
    pub fn create_mesh_builder_if_needed(&mut self, new_buffer: bool) -> bool {
        if self.build.is_some() && !new_buffer {
            return false;
        }

        self.build = Some(MeshBuild::new());
        self.geometry.reset();
        self.color.reset();

        self.update_after_renderer();
        true
    }

    /// Rebuild the quad when size or UV range changed since the last commit
    pub fn update_mesh(&mut self) {
        let settings = self.settings();
        if !self.geometry.is_changed(&settings) {
            return;
        }

        let Some(build) = self.build.as_mut() else {
            return;
        };

        build.build_quad(settings.size_x, settings.size_y);

        for (i, uv) in build.uvs.iter_mut().enumerate() {
            uv.y = if i == 1 || i == 2 {
                settings.uv_start_y
            } else {
                settings.uv_end_y
            };
        }

        build.commit();
        trace!("Rebuilt slider rectangle geometry: {settings:?}");

        self.geometry.commit(settings);
    }

    /// Recolor every vertex when the active color changed
    pub fn update_color(&mut self) {
        let color = self.active_color();
        if !self.color.is_changed(&color) {
            return;
        }

        let Some(build) = self.build.as_mut() else {
            return;
        };

        build.commit_colors(color);
        trace!("Recolored slider rectangle: {color:?}");

        self.color.commit(color);
    }

    /// The committed mesh, once a buffer exists
    pub fn render_mesh(&self) -> Option<&RenderMesh> {
        self.build.as_ref().map(MeshBuild::render_mesh)
    }

    fn update_geometry_after_renderer(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.create_mesh_builder_if_needed(false);
        self.update_mesh();
        true
    }
}
