//! Fixed scene description.
//!
//! One reflective sphere over an infinite checkered ground plane. The
//! geometry is immutable for the lifetime of a render and is passed into the
//! sampler as a value rather than living as constants inside the shading
//! code.

use glam::Vec3A;

use crate::plane::Plane;
use crate::sphere::Sphere;

/// Immutable scene description.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    /// The reflective sphere.
    pub sphere: Sphere,

    /// The checkered ground plane.
    pub ground: Plane,
}

impl Scene {
    /// Point on the ground plane directly beneath the sphere's centre.
    ///
    /// This is the centre of the shadow disk the ground shader darkens.
    pub fn sphere_ground_projection(&self) -> Vec3A {
        let n = self.ground.inverse_normal;
        self.sphere.center - n * (self.sphere.center - self.ground.point).dot(n)
    }
}

impl Default for Scene {
    /// The built-in scene: sphere of radius 11 centred at (0, 15, 40),
    /// ground plane through the origin facing up.
    fn default() -> Self {
        Self {
            sphere: Sphere::new(Vec3A::new(0.0, 15.0, 40.0), 11.0),
            ground: Plane::new(Vec3A::ZERO, Vec3A::NEG_Y),
        }
    }
}
