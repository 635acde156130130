//! Narrow-phase overlap predicates
//!
//! One pure function per unordered pair of primitive volumes. All bounds are
//! inclusive: shapes that merely touch are reported as overlapping.

use super::primitives::{Aabb, BoundingSphere, Obb};

/// Sphere vs sphere: center distance no greater than the radius sum
pub fn sphere_sphere(a: &BoundingSphere, b: &BoundingSphere) -> bool {
    let distance_squared = (a.center - b.center).magnitude_squared();
    let radius_sum = a.radius + b.radius;
    distance_squared <= radius_sum * radius_sum
}

/// AABB vs AABB: intervals overlap on x, y and z
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    (0..3).all(|i| a.max[i] >= b.min[i] && a.min[i] <= b.max[i])
}

/// Sphere vs AABB: clamp the sphere center into the box and compare the
/// squared distance to the clamped point against the squared radius
pub fn sphere_aabb(sphere: &BoundingSphere, aabb: &Aabb) -> bool {
    let closest = aabb.closest_point(sphere.center);
    (closest - sphere.center).magnitude_squared() <= sphere.radius * sphere.radius
}

/// Sphere vs OBB: same as [`sphere_aabb`] but clamping in the box's frame
pub fn sphere_obb(sphere: &BoundingSphere, obb: &Obb) -> bool {
    let closest = obb.closest_point(sphere.center);
    (closest - sphere.center).magnitude_squared() <= sphere.radius * sphere.radius
}

/// AABB vs OBB: the AABB is treated as an OBB with world axes
pub fn aabb_obb(aabb: &Aabb, obb: &Obb, epsilon: f32) -> bool {
    obb_obb(&aabb.to_obb(), obb, epsilon)
}

/// OBB vs OBB: 15-axis separating axis test
///
/// Candidate axes are the three face normals of each box and the nine cross
/// products of their edges. `epsilon` is added to every `|R[i][j]|` so that
/// cross products of (nearly) parallel edges, which collapse to zero, keep a
/// positive projection radius instead of reporting a spurious separation.
///
/// Based on Ericson, *Real-Time Collision Detection*, 4.4.1.
pub fn obb_obb(a: &Obb, b: &Obb, epsilon: f32) -> bool {
    let ea = &a.half_extents;
    let eb = &b.half_extents;

    // Rotation expressing b in a's frame
    let mut r = [[0.0_f32; 3]; 3];
    let mut abs_r = [[0.0_f32; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            r[i][j] = a.axes[i].dot(&b.axes[j]);
            abs_r[i][j] = r[i][j].abs() + epsilon;
        }
    }

    // Translation, expressed in a's frame
    let offset = b.center - a.center;
    let t = [
        offset.dot(&a.axes[0]),
        offset.dot(&a.axes[1]),
        offset.dot(&a.axes[2]),
    ];

    // Face axes of A
    for i in 0..3 {
        let ra = ea[i];
        let rb = eb[0] * abs_r[i][0] + eb[1] * abs_r[i][1] + eb[2] * abs_r[i][2];
        if t[i].abs() > ra + rb {
            return false;
        }
    }

    // Face axes of B
    for j in 0..3 {
        let ra = ea[0] * abs_r[0][j] + ea[1] * abs_r[1][j] + ea[2] * abs_r[2][j];
        let rb = eb[j];
        let distance = t[0] * r[0][j] + t[1] * r[1][j] + t[2] * r[2][j];
        if distance.abs() > ra + rb {
            return false;
        }
    }

    // Edge cross axes A_i x B_j
    for i in 0..3 {
        let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
        for j in 0..3 {
            let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);

            let ra = ea[i1] * abs_r[i2][j] + ea[i2] * abs_r[i1][j];
            let rb = eb[j1] * abs_r[i][j2] + eb[j2] * abs_r[i][j1];
            let distance = t[i2] * r[i1][j] - t[i1] * r[i2][j];
            if distance.abs() > ra + rb {
                return false;
            }
        }
    }

    true
}
