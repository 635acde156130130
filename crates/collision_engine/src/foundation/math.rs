//! Math utilities and types
//!
//! Provides the fundamental math types used by the collision core.

pub use nalgebra::{
    Vector3,
    UnitQuaternion,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f32>;

/// Rigid world transform of a collider owner (position and rotation)
///
/// Scale is deliberately absent: collider shapes carry their own dimensions
/// in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }
}

impl Transform {
    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

/// World-aligned basis `{x, y, z}`
pub const WORLD_AXES: [Vec3; 3] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
];

/// Math utility functions
pub mod utils {
    use super::{Vec3, WORLD_AXES};

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Component-wise clamp of a point into the box `[min, max]`
    pub fn clamp_point(point: Vec3, min: Vec3, max: Vec3) -> Vec3 {
        Vec3::new(
            clamp(point.x, min.x, max.x),
            clamp(point.y, min.y, max.y),
            clamp(point.z, min.z, max.z),
        )
    }

    /// Re-orthonormalize three basis vectors (Gram-Schmidt).
    ///
    /// The first axis keeps its direction, the second is made orthogonal to
    /// it, and the third is rebuilt from their cross product so the result is
    /// right-handed. Degenerate input falls back to the world axis of the same
    /// index instead of producing NaNs.
    pub fn orthonormalize(axes: [Vec3; 3]) -> [Vec3; 3] {
        let x = axes[0].try_normalize(f32::EPSILON).unwrap_or(WORLD_AXES[0]);

        let y_raw = axes[1] - x * x.dot(&axes[1]);
        let y = match y_raw.try_normalize(f32::EPSILON) {
            Some(y) => y,
            // Second axis parallel to the first: pick any perpendicular
            None => any_perpendicular(x),
        };

        let z = x.cross(&y);
        // Keep the caller's handedness when the third axis was meaningful
        let z = if z.dot(&axes[2]) < 0.0 { -z } else { z };

        [x, y, z]
    }

    /// A unit vector perpendicular to `v` (which must be unit length)
    pub fn any_perpendicular(v: Vec3) -> Vec3 {
        let helper = if v.x.abs() < 0.9 { WORLD_AXES[0] } else { WORLD_AXES[1] };
        v.cross(&helper).normalize()
    }
}
