//! Infinite ground plane and its analytic intersection test.

use glam::Vec3A;

use crate::ray::Ray;

/// Infinite plane defined by a point on it and an inward-facing normal.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// A point on the plane.
    pub point: Vec3A,

    /// Plane normal pointing away from the sky (straight down for the
    /// ground plane).
    pub inverse_normal: Vec3A,
}

impl Plane {
    /// Create a new plane.
    pub fn new(point: Vec3A, inverse_normal: Vec3A) -> Self {
        Self {
            point,
            inverse_normal,
        }
    }

    /// Test a ray against the plane, returning the intersection point.
    ///
    /// A hit requires the ray to be closing on the plane
    /// (`direction · inverse_normal > 0`, strictly). Rays moving parallel to
    /// the plane or away from it miss, so the distance division below can
    /// never divide by zero.
    pub fn intersection(&self, ray: &Ray) -> Option<Vec3A> {
        let closing = ray.direction.dot(self.inverse_normal);
        if closing <= 0.0 {
            return None;
        }

        let to_plane = self.point - ray.origin;
        let distance = to_plane.dot(self.inverse_normal) / closing;
        Some(ray.at(distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Plane {
        Plane::new(Vec3A::ZERO, Vec3A::NEG_Y)
    }

    #[test]
    fn descending_ray_hits_where_it_meets_the_plane() {
        // From 10 units up, heading down-forward at 45 degrees.
        let direction = Vec3A::new(0.0, -1.0, 1.0).normalize();
        let ray = Ray::new(Vec3A::new(0.0, 10.0, 0.0), direction);
        let point = ground().intersection(&ray).expect("descending ray must hit");
        assert!(point.abs_diff_eq(Vec3A::new(0.0, 0.0, 10.0), 1e-4));
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(Vec3A::new(0.0, 10.0, 0.0), Vec3A::X);
        assert!(ground().intersection(&ray).is_none());
    }

    #[test]
    fn ascending_ray_misses() {
        let direction = Vec3A::new(0.0, 1.0, 1.0).normalize();
        let ray = Ray::new(Vec3A::new(0.0, 10.0, 0.0), direction);
        assert!(ground().intersection(&ray).is_none());
    }
}
