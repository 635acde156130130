//! High-level collision shape abstractions
//!
//! Colliders store their shape in local space relative to the collider
//! center and transform it to world space once per tick, before the
//! narrow phase runs.

use crate::foundation::math::{utils, Quat, Vec3, WORLD_AXES};
use crate::physics::error::{CollisionError, CollisionResult};
use super::intersection;
use super::primitives::{Aabb, BoundingSphere, Obb};

/// Shape tag used for dispatch and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    /// Sphere
    Sphere,
    /// Axis-aligned box
    Aabb,
    /// Oriented box
    Obb,
}

/// Collision shape types (stored in LOCAL SPACE, relative to the collider
/// center)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// A sphere around the collider center
    Sphere {
        /// Radius in world units
        radius: f32,
    },
    /// An axis-aligned box; corners are offsets from the collider center
    Aabb {
        /// Minimum corner offset
        min: Vec3,
        /// Maximum corner offset
        max: Vec3,
    },
    /// An oriented box centered on the collider center
    Obb {
        /// Half extent along each local axis
        half_extents: Vec3,
        /// Local axes before the owner's rotation is applied
        axes: [Vec3; 3],
    },
}

impl ColliderShape {
    /// Creates a spherical collision shape with given radius
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// Creates an axis-aligned box from corner offsets
    pub fn aabb(min: Vec3, max: Vec3) -> Self {
        Self::Aabb { min, max }
    }

    /// Creates an axis-aligned box centered on the collider center
    pub fn cuboid(half_extents: Vec3) -> Self {
        Self::Aabb {
            min: -half_extents,
            max: half_extents,
        }
    }

    /// Creates an oriented box aligned with the owner's rotation
    pub fn obb(half_extents: Vec3) -> Self {
        Self::Obb {
            half_extents,
            axes: WORLD_AXES,
        }
    }

    /// Creates an oriented box with an additional local rotation
    pub fn obb_with_rotation(half_extents: Vec3, rotation: Quat) -> Self {
        Self::Obb {
            half_extents,
            axes: WORLD_AXES.map(|axis| rotation * axis),
        }
    }

    /// Shape tag
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere { .. } => ShapeKind::Sphere,
            Self::Aabb { .. } => ShapeKind::Aabb,
            Self::Obb { .. } => ShapeKind::Obb,
        }
    }

    /// Reject parameters the intersection tests cannot work with
    pub fn validate(&self) -> CollisionResult<()> {
        let finite = |v: &Vec3| v.iter().all(|c| c.is_finite());

        match self {
            Self::Sphere { radius } => {
                if !radius.is_finite() || *radius < 0.0 {
                    return Err(CollisionError::InvalidShape(format!(
                        "sphere radius must be finite and non-negative, got {radius}"
                    )));
                }
            }
            Self::Aabb { min, max } => {
                if !finite(min) || !finite(max) {
                    return Err(CollisionError::InvalidShape("AABB corners must be finite".into()));
                }
                if (0..3).any(|i| min[i] > max[i]) {
                    return Err(CollisionError::InvalidShape(format!(
                        "AABB min {min:?} exceeds max {max:?}"
                    )));
                }
            }
            Self::Obb { half_extents, axes } => {
                if !finite(half_extents) || half_extents.iter().any(|e| *e < 0.0) {
                    return Err(CollisionError::InvalidShape(format!(
                        "OBB half extents must be finite and non-negative, got {half_extents:?}"
                    )));
                }
                if axes.iter().any(|axis| !finite(axis) || axis.magnitude_squared() <= f32::EPSILON) {
                    return Err(CollisionError::InvalidShape("OBB axes must be finite and non-zero".into()));
                }
                let [x, y, _] = axes.map(|axis| axis.normalize());
                if x.cross(&y).magnitude_squared() <= f32::EPSILON {
                    return Err(CollisionError::InvalidShape("OBB axes must not be parallel".into()));
                }
            }
        }
        Ok(())
    }

    /// Transform this shape to world space
    ///
    /// Spheres and AABBs only translate. OBB axes are rotated by the owner's
    /// rotation and re-orthonormalized so accumulated drift never reaches
    /// the SAT.
    pub fn to_world_space(&self, world_center: Vec3, rotation: &Quat) -> WorldSpaceShape {
        match self {
            Self::Sphere { radius } => WorldSpaceShape::Sphere(BoundingSphere::new(world_center, *radius)),
            Self::Aabb { min, max } => {
                WorldSpaceShape::Aabb(Aabb::new(world_center + min, world_center + max))
            }
            Self::Obb { half_extents, axes } => {
                let rotated = axes.map(|axis| rotation * axis);
                WorldSpaceShape::Obb(Obb::new(world_center, *half_extents, utils::orthonormalize(rotated)))
            }
        }
    }
}

impl Default for ColliderShape {
    fn default() -> Self {
        Self::Sphere { radius: 0.5 }
    }
}

/// World-space collision shape, rebuilt every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldSpaceShape {
    /// World-space sphere
    Sphere(BoundingSphere),
    /// World-space axis-aligned box
    Aabb(Aabb),
    /// World-space oriented box
    Obb(Obb),
}

impl WorldSpaceShape {
    /// Shape tag
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Aabb(_) => ShapeKind::Aabb,
            Self::Obb(_) => ShapeKind::Obb,
        }
    }

    /// Get center position
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Sphere(sphere) => sphere.center,
            Self::Aabb(aabb) => aabb.center(),
            Self::Obb(obb) => obb.center,
        }
    }

    /// Axis-aligned box enclosing the shape (for debug overlays)
    pub fn bounds(&self) -> Aabb {
        match self {
            Self::Sphere(sphere) => sphere.bounds(),
            Self::Aabb(aabb) => *aabb,
            Self::Obb(obb) => obb.bounds(),
        }
    }

    /// Test if this shape intersects with another shape
    ///
    /// Each unordered pair of tags maps to exactly one predicate; the mixed
    /// arms accept either argument order, so the result never depends on
    /// which collider came first.
    pub fn intersects(&self, other: &WorldSpaceShape, sat_epsilon: f32) -> bool {
        match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => intersection::sphere_sphere(a, b),
            (Self::Aabb(a), Self::Aabb(b)) => intersection::aabb_aabb(a, b),
            (Self::Obb(a), Self::Obb(b)) => intersection::obb_obb(a, b, sat_epsilon),

            (Self::Sphere(sphere), Self::Aabb(aabb)) |
            (Self::Aabb(aabb), Self::Sphere(sphere)) => intersection::sphere_aabb(sphere, aabb),

            (Self::Sphere(sphere), Self::Obb(obb)) |
            (Self::Obb(obb), Self::Sphere(sphere)) => intersection::sphere_obb(sphere, obb),

            (Self::Aabb(aabb), Self::Obb(obb)) |
            (Self::Obb(obb), Self::Aabb(aabb)) => intersection::aabb_obb(aabb, obb, sat_epsilon),
        }
    }
}
