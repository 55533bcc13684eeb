//! Math utilities and types
//!
//! Provides the vector/matrix aliases used by renderers and meshes, plus the
//! scalar helpers shared by slider value mapping.

pub use nalgebra::{
    Vector2, Vector3, Vector4,
    Matrix4,
    Quaternion,
    Unit,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (also used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position relative to the parent
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Replace the rotation
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Replace the scale
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

/// Apply a world matrix to a point
pub fn transform_point(matrix: &Mat4, point: Vec3) -> Vec3 {
    matrix.transform_point(&Point3::from(point)).coords
}

/// Bring a world-space point into the local space of `world`
///
/// Degenerate (non-invertible) matrices leave the point unchanged.
pub fn inverse_transform_point(world: &Mat4, point: Vec3) -> Vec3 {
    world
        .try_inverse()
        .map_or(point, |inverse| transform_point(&inverse, point))
}

/// Clamp a value into `[0, 1]`
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Linear interpolation between `a` and `b`, with `t` clamped to `[0, 1]`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp01(t)
}

/// Position of `value` within `[a, b]`, clamped to `[0, 1]`
///
/// Returns 0 when the range is empty.
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() <= f32::EPSILON {
        return 0.0;
    }
    clamp01((value - a) / (b - a))
}

/// Ease a continuous slider value toward its snapped position
///
/// `snaps` below 2 means the slider is continuous and the value is returned
/// untouched. Otherwise the distance to `snapped` is measured in fractions of
/// half a snap step (the farthest the nearest snap can be) and raised to
/// `power`. Higher powers hold the displayed value closer to the snapped one
/// until the cursor nears the midpoint between snaps, where both sides meet.
pub fn eased_value(snaps: u32, value: f32, snapped: f32, power: f32) -> f32 {
    if snaps < 2 {
        return value;
    }

    #[allow(clippy::cast_precision_loss)]
    let half_steps = 2.0 * (snaps - 1) as f32;
    let diff = value - snapped;
    let half_step_fraction = clamp01(diff.abs() * half_steps);

    snapped + diff.signum() * half_step_fraction.powf(power) / half_steps
}
