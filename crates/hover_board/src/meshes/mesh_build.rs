//! Mesh building and the committed render buffer
//!
//! [`MeshBuild`] holds working position/UV/index arrays that mesh components
//! edit in place. Nothing reaches the [`RenderMesh`] until `commit` (geometry)
//! or `commit_colors` (uniform vertex color) is called, and each commit bumps
//! a revision counter the draw layer can compare against.

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::{Vec2, Vec3, Vec4};

/// Interleaved vertex uploaded to the GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Local-space position
    pub position: [f32; 3],
    /// Texture coordinates
    pub uv: [f32; 2],
    /// Linear RGBA color
    pub color: [f32; 4],
}

/// Committed mesh data consumed by the draw layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderMesh {
    /// Interleaved vertices
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices
    pub indices: Vec<u32>,
    /// Incremented on every geometry commit
    pub geometry_revision: u64,
    /// Incremented on every color commit
    pub color_revision: u64,
}

impl RenderMesh {
    /// Raw vertex bytes for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Working arrays for a procedural mesh
#[derive(Debug, Clone)]
pub struct MeshBuild {
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Texture coordinates, one per vertex
    pub uvs: Vec<Vec2>,
    /// Triangle indices
    pub indices: Vec<u32>,
    color: Vec4,
    render: RenderMesh,
}

impl Default for MeshBuild {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshBuild {
    /// Create an empty builder with a white vertex color
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            render: RenderMesh::default(),
        }
    }

    /// Replace the working arrays with an axis-aligned quad centered on the origin
    ///
    /// Vertex order is top-right, bottom-right, bottom-left, top-left, so
    /// vertices 1 and 2 form the bottom edge (UV y = 0).
    pub fn build_quad(&mut self, size_x: f32, size_y: f32) {
        let half_x = size_x / 2.0;
        let half_y = size_y / 2.0;

        self.vertices.clear();
        self.vertices.extend([
            Vec3::new(half_x, half_y, 0.0),
            Vec3::new(half_x, -half_y, 0.0),
            Vec3::new(-half_x, -half_y, 0.0),
            Vec3::new(-half_x, half_y, 0.0),
        ]);

        self.uvs.clear();
        self.uvs.extend([
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
        ]);

        self.indices.clear();
        self.indices.extend([0, 1, 2, 0, 2, 3]);
    }

    /// Push working positions, UVs and indices into the render mesh
    pub fn commit(&mut self) {
        let color: [f32; 4] = self.color.into();

        self.render.vertices = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, position)| MeshVertex {
                position: (*position).into(),
                uv: self.uvs.get(i).copied().unwrap_or_else(Vec2::zeros).into(),
                color,
            })
            .collect();
        self.render.indices.clone_from(&self.indices);
        self.render.geometry_revision += 1;
    }

    /// Apply one color to every committed vertex
    ///
    /// The color also sticks for vertices produced by later geometry commits.
    pub fn commit_colors(&mut self, color: Vec4) {
        self.color = color;

        let color: [f32; 4] = color.into();
        for vertex in &mut self.render.vertices {
            vertex.color = color;
        }
        self.render.color_revision += 1;
    }

    /// The committed render mesh
    pub fn render_mesh(&self) -> &RenderMesh {
        &self.render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_quad_layout() {
        let mut build = MeshBuild::new();
        build.build_quad(20.0, 10.0);

        assert_eq!(build.vertices.len(), 4);
        assert_eq!(build.vertices[1], Vec3::new(10.0, -5.0, 0.0));
        assert_eq!(build.vertices[3], Vec3::new(-10.0, 5.0, 0.0));
        assert_eq!(build.uvs[2], Vec2::new(0.0, 0.0));
        assert_eq!(build.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_nothing_reaches_render_mesh_before_commit() {
        let mut build = MeshBuild::new();
        build.build_quad(1.0, 1.0);
        assert!(build.render_mesh().vertices.is_empty());

        build.commit();
        assert_eq!(build.render_mesh().vertices.len(), 4);
        assert_eq!(build.render_mesh().geometry_revision, 1);
        assert_eq!(build.render_mesh().vertex_bytes().len(), 4 * std::mem::size_of::<MeshVertex>());
        assert_eq!(build.render_mesh().index_bytes().len(), 6 * 4);
    }

    #[test]
    fn test_commit_colors_is_uniform_and_sticky() {
        let mut build = MeshBuild::new();
        let red = Vec4::new(1.0, 0.0, 0.0, 1.0);

        build.commit_colors(red);
        assert_eq!(build.render_mesh().color_revision, 1);

        build.build_quad(2.0, 2.0);
        build.commit();
        assert!(build
            .render_mesh()
            .vertices
            .iter()
            .all(|vertex| vertex.color == [1.0, 0.0, 0.0, 1.0]));
        assert_eq!(build.render_mesh().color_revision, 1);
    }
}
