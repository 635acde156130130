//! Primitive collision volumes in world space
//!
//! Provides the three volumes the narrow phase understands: bounding
//! spheres, axis-aligned boxes and oriented boxes. The overlap predicates
//! themselves live in [`super::intersection`].

use crate::foundation::math::{utils, Vec3, WORLD_AXES};

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Smallest axis-aligned box enclosing the sphere
    pub fn bounds(&self) -> Aabb {
        let extent = Vec3::repeat(self.radius);
        Aabb::new(self.center - extent, self.center + extent)
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box from its center and half extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half extents of the box along x, y and z
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Closest point inside the box to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        utils::clamp_point(point, self.min, self.max)
    }

    /// Check whether a point lies inside the box (bounds inclusive)
    pub fn contains_point(&self, point: Vec3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// View this box as an oriented box with the world basis
    pub fn to_obb(&self) -> Obb {
        Obb::new(self.center(), self.half_extents(), WORLD_AXES)
    }
}

/// Oriented bounding box
///
/// `axes` must be unit length and mutually orthogonal; [`Obb::new`] does
/// not repair them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    /// Center of the box in world space
    pub center: Vec3,
    /// Half extent along each of `axes`
    pub half_extents: Vec3,
    /// Local x, y, z axes of the box in world space
    pub axes: [Vec3; 3],
}

impl Obb {
    /// Create an oriented box
    pub fn new(center: Vec3, half_extents: Vec3, axes: [Vec3; 3]) -> Self {
        Self {
            center,
            half_extents,
            axes,
        }
    }

    /// Closest point on (or inside) the box to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let offset = point - self.center;
        let mut closest = self.center;

        for (i, axis) in self.axes.iter().enumerate() {
            let extent = self.half_extents[i];
            let distance = utils::clamp(offset.dot(axis), -extent, extent);
            closest += axis * distance;
        }

        closest
    }

    /// The eight corners of the box
    pub fn corners(&self) -> [Vec3; 8] {
        let [x, y, z] = [
            self.axes[0] * self.half_extents.x,
            self.axes[1] * self.half_extents.y,
            self.axes[2] * self.half_extents.z,
        ];
        let c = self.center;
        [
            c - x - y - z,
            c + x - y - z,
            c - x + y - z,
            c + x + y - z,
            c - x - y + z,
            c + x - y + z,
            c - x + y + z,
            c + x + y + z,
        ]
    }

    /// Smallest axis-aligned box enclosing this oriented box
    pub fn bounds(&self) -> Aabb {
        let extent = Vec3::from_fn(|row, _| {
            (0..3)
                .map(|k| self.axes[k][row].abs() * self.half_extents[k])
                .sum::<f32>()
        });
        Aabb::from_center_half_extents(self.center, extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Quat;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_aabb_center_and_extents() {
        let aabb = Aabb::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 2.0, 4.0));
        assert_relative_eq!(aabb.center(), Vec3::new(1.0, 1.0, 3.0), epsilon = EPSILON);
        assert_relative_eq!(aabb.half_extents(), Vec3::new(2.0, 1.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_aabb_as_obb_keeps_geometry() {
        let aabb = Aabb::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
        let obb = aabb.to_obb();
        assert_eq!(obb.axes, WORLD_AXES);
        assert_relative_eq!(obb.half_extents, Vec3::new(1.0, 2.0, 3.0), epsilon = EPSILON);
        assert_relative_eq!(obb.bounds().min, aabb.min, epsilon = EPSILON);
        assert_relative_eq!(obb.bounds().max, aabb.max, epsilon = EPSILON);
    }

    #[test]
    fn test_obb_closest_point_clamps_per_axis() {
        let rotation = Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_4);
        let axes = WORLD_AXES.map(|axis| rotation * axis);
        let obb = Obb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), axes);

        // Far along the box's own x axis: clamps onto the face center
        let point = axes[0] * 10.0;
        assert_relative_eq!(obb.closest_point(point), axes[0], epsilon = EPSILON);

        // Inside points are returned unchanged
        let inside = Vec3::new(0.1, 0.2, 0.3);
        assert_relative_eq!(obb.closest_point(inside), inside, epsilon = EPSILON);
    }

    #[test]
    fn test_rotated_obb_bounds() {
        let rotation = Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_4);
        let obb = Obb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), WORLD_AXES.map(|a| rotation * a));
        let bounds = obb.bounds();
        let diagonal = std::f32::consts::SQRT_2;

        assert_relative_eq!(bounds.max, Vec3::new(diagonal, diagonal, 1.0), epsilon = EPSILON);
        for corner in obb.corners() {
            assert!(bounds.contains_point(corner * 0.999));
        }
    }

    #[test]
    fn test_sphere_bounds() {
        let sphere = BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0);
        assert_relative_eq!(sphere.bounds().min, Vec3::new(0.5, -1.0, -1.0), epsilon = EPSILON);
        assert_relative_eq!(sphere.bounds().max, Vec3::new(2.5, 1.0, 1.0), epsilon = EPSILON);
    }
}
