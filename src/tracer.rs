//! The ray sampler: what a single ray sees.
//!
//! A two-stage pipeline, not a recursive tracer. The ray is tested against
//! the sphere first; on a hit it restarts from the entry point along the
//! mirrored direction and everything it sees from there contributes at a
//! fixed half weight. The second stage tests the ground plane and falls back
//! to the sky. A reflected ray that would re-hit the sphere is not
//! re-tested.

use glam::Vec3A;

use crate::ray::Ray;
use crate::scene::Scene;
use crate::shading::{self, Color};

/// Sample the colour seen from `position` along `direction`.
///
/// `direction` must be normalized.
pub fn sample(scene: &Scene, mut position: Vec3A, mut direction: Vec3A) -> Color {
    let mut colour = Color::ZERO;
    let mut blend = 1.0;

    if let Some(hit) = scene.sphere.entry(&Ray::new(position, direction)) {
        position = hit.point;
        direction = shading::reflect(direction, hit.normal);
        colour = colour.lerp(shading::sample_sphere(hit.normal), blend);
        blend = 0.5;
    }

    let ray = Ray::new(position, direction);
    match scene.ground.intersection(&ray) {
        Some(point) => {
            let ground = shading::sample_ground(
                point,
                direction,
                scene.sphere_ground_projection(),
                scene.sphere.radius_squared,
            );
            colour = colour.lerp(ground, blend);
        }
        None => {
            colour = colour.lerp(shading::sample_sky(direction), blend);
        }
    }

    colour
}
