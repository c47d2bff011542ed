//! Sphere primitive and its analytic intersection test.
//!
//! Uses the nearest-approach formulation: project the centre onto the ray,
//! compare the perpendicular distance against the radius, then back up from
//! the nearest point by half the chord length to find the entry point.

use glam::Vec3A;

use crate::ray::Ray;

/// Intersection of a ray with the sphere surface.
#[derive(Debug, Clone, Copy)]
pub struct SphereHit {
    /// Entry point on the surface, the intersection nearer the ray origin.
    pub point: Vec3A,

    /// Unit surface normal at the entry point.
    pub normal: Vec3A,
}

/// Sphere primitive defined by centre and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Centre point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere.
    pub radius: f32,

    /// Radius squared, cached for the chord and shadow-disk calculations.
    pub radius_squared: f32,
}

impl Sphere {
    /// Create a new sphere, caching the squared radius.
    pub fn new(center: Vec3A, radius: f32) -> Self {
        Self {
            center,
            radius,
            radius_squared: radius * radius,
        }
    }

    /// Test a ray against the sphere, returning the entry point and normal.
    ///
    /// `ray.direction` must be normalized. A ray whose closest approach
    /// exactly equals the radius counts as a miss (strict inequality), so a
    /// hit always has a nonzero chord.
    pub fn entry(&self, ray: &Ray) -> Option<SphereHit> {
        let to_sphere = self.center - ray.origin;
        let t_closest = ray.direction.dot(to_sphere);
        let nearest = ray.at(t_closest);
        let distance = (self.center - nearest).length();
        if distance >= self.radius {
            return None;
        }

        // Back up from the nearest-approach point by half the chord length.
        let half_chord = (self.radius_squared - distance * distance).sqrt();
        let point = nearest - ray.direction * half_chord;
        let normal = (point - self.center).normalize();
        Some(SphereHit { point, normal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_sphere() -> Sphere {
        Sphere::new(Vec3A::new(0.0, 15.0, 40.0), 11.0)
    }

    #[test]
    fn center_aimed_ray_enters_at_radius_distance() {
        let sphere = scene_sphere();
        let ray = Ray::new(Vec3A::new(0.0, 15.0, 0.0), Vec3A::Z);
        let hit = sphere.entry(&ray).expect("ray through the centre must hit");
        assert!(((hit.point - sphere.center).length() - sphere.radius).abs() < 1e-3);
        assert!(hit.point.abs_diff_eq(Vec3A::new(0.0, 15.0, 29.0), 1e-3));
    }

    #[test]
    fn tangent_ray_is_a_miss() {
        let sphere = scene_sphere();
        // Closest approach is exactly the radius.
        let ray = Ray::new(Vec3A::new(0.0, 26.0, 0.0), Vec3A::Z);
        assert!(sphere.entry(&ray).is_none());
    }

    #[test]
    fn entry_normal_is_unit_and_faces_the_ray() {
        let sphere = scene_sphere();
        let ray = Ray::new(Vec3A::new(0.0, 10.0, 0.0), Vec3A::Z);
        let hit = sphere.entry(&ray).expect("off-centre ray within radius must hit");
        assert!((hit.normal.length() - 1.0).abs() < 1e-5);
        assert!(hit.normal.dot(ray.direction) < 0.0);
    }

    #[test]
    fn distant_ray_misses() {
        let sphere = scene_sphere();
        let ray = Ray::new(Vec3A::new(0.0, 50.0, 0.0), Vec3A::Z);
        assert!(sphere.entry(&ray).is_none());
    }
}
