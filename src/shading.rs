//! Surface shaders for the three things a ray can see.
//!
//! Pure colour functions with no scene state. Channels are in the nominal
//! [0, 255] range but are never clamped here; bright sphere caps can exceed
//! 255 and the output stage is responsible for bringing them back into byte
//! range.

use glam::Vec3A;

/// RGB colour type; channels nominally in [0, 255].
pub type Color = Vec3A;

/// Reflect a vector about a surface normal.
///
/// Adds enough of the normal to cancel the vector's component along it, then
/// the same amount again: the normal component reverses while the tangential
/// component and the overall magnitude are preserved.
pub fn reflect(vector: Vec3A, normal: Vec3A) -> Vec3A {
    vector + normal * (-2.0 * vector.dot(normal))
}

/// Sky colour for a ray that escapes the scene.
///
/// Fixed red and green with a vertical blue gradient: brightest looking
/// straight up, darker toward the horizon. `direction` is assumed
/// normalized.
pub fn sample_sky(direction: Vec3A) -> Color {
    let blue = 180.0 + 64.0 * direction.dot(Vec3A::Y);
    Color::new(32.0, 128.0, blue)
}

/// Ground colour at `point` for a ray arriving along `direction`.
///
/// A checkerboard of two greens with 10-unit cells, each blended toward a
/// twice-as-bright variant the more steeply the ray looks down. Points
/// within the sphere's shadow disk get half the colour.
pub fn sample_ground(
    point: Vec3A,
    direction: Vec3A,
    shadow_center: Vec3A,
    shadow_radius_squared: f32,
) -> Color {
    let ix = (point.x * 0.1).abs() as i32;
    let iz = (point.z * 0.1).abs() as i32;

    let base = if (ix % 2) ^ (iz % 2) != 0 {
        Color::new(32.0, 128.0, 32.0)
    } else {
        Color::new(64.0, 128.0, 64.0)
    };

    let dot_down = direction.dot(Vec3A::NEG_Y);
    let mut colour = base.lerp(base * 2.0, dot_down);

    if (shadow_center - point).length_squared() < shadow_radius_squared {
        colour *= 0.5;
    }

    colour
}

/// Sphere colour for the surface normal at the hit point.
///
/// The usual normal-to-colour remap, pulled toward half brightness as the
/// normal tips away from world up, so caps facing the sky are brightest.
pub fn sample_sphere(normal: Vec3A) -> Color {
    let full = (normal * 0.5 + Vec3A::splat(0.5)) * 255.0;
    (full * 0.5).lerp(full, normal.dot(Vec3A::Y))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shadow disk far away from every point the tests sample.
    fn no_shadow() -> (Vec3A, f32) {
        (Vec3A::new(1000.0, 0.0, 1000.0), 121.0)
    }

    // The shaders lean on these vector identities; pin them down once.
    #[test]
    fn vector_identities_the_shaders_rely_on() {
        let v = Vec3A::new(3.0, -4.0, 12.0);
        assert!((v.normalize().length() - 1.0).abs() < 1e-6);
        assert!((v.dot(v) - v.length_squared()).abs() < 1e-4);

        let a = Color::new(64.0, 128.0, 64.0);
        let b = a * 2.0;
        assert!(a.lerp(b, 0.0).abs_diff_eq(a, 1e-6));
        assert!(a.lerp(b, 1.0).abs_diff_eq(b, 1e-6));
        // Blend factors outside [0, 1] extrapolate; the sphere shader uses
        // this to darken below the half-bright end.
        assert!(a.lerp(b, -1.0).abs_diff_eq(Color::ZERO, 1e-6));
    }

    #[test]
    fn reflect_preserves_magnitude_and_flips_normal_component() {
        let incoming = Vec3A::new(0.3, -0.8, 0.52).normalize();
        let normal = Vec3A::new(0.2, 0.9, -0.1).normalize();
        let reflected = reflect(incoming, normal);
        assert!((reflected.length() - incoming.length()).abs() < 1e-5);
        assert!((reflected.dot(normal) + incoming.dot(normal)).abs() < 1e-5);
    }

    #[test]
    fn sky_is_bluest_straight_up() {
        let zenith = sample_sky(Vec3A::Y);
        let horizon = sample_sky(Vec3A::X);
        assert!(zenith.abs_diff_eq(Color::new(32.0, 128.0, 244.0), 1e-4));
        assert!(horizon.abs_diff_eq(Color::new(32.0, 128.0, 180.0), 1e-4));
    }

    #[test]
    fn adjacent_tiles_use_different_greens() {
        let (shadow_center, shadow_r2) = no_shadow();
        let down = Vec3A::NEG_Y;
        let a = sample_ground(Vec3A::new(5.0, 0.0, 5.0), down, shadow_center, shadow_r2);
        let b = sample_ground(Vec3A::new(15.0, 0.0, 5.0), down, shadow_center, shadow_r2);
        assert_ne!(a, b);
    }

    #[test]
    fn shadow_disk_halves_the_tile_colour() {
        let down = Vec3A::NEG_Y;
        let shadow_center = Vec3A::new(0.0, 0.0, 40.0);
        // Same tile parity and lighting, one point inside the disk and one
        // well outside it.
        let shadowed = sample_ground(Vec3A::new(0.0, 0.0, 40.0), down, shadow_center, 121.0);
        let lit = sample_ground(Vec3A::new(0.0, 0.0, 60.0), down, shadow_center, 121.0);
        assert!(shadowed.abs_diff_eq(lit * 0.5, 1e-4));
    }

    #[test]
    fn steeper_rays_brighten_the_ground() {
        let (shadow_center, shadow_r2) = no_shadow();
        let point = Vec3A::new(5.0, 0.0, 5.0);
        let steep = sample_ground(point, Vec3A::NEG_Y, shadow_center, shadow_r2);
        let shallow = sample_ground(
            point,
            Vec3A::new(0.0, -1.0, 4.0).normalize(),
            shadow_center,
            shadow_r2,
        );
        assert!(steep.y > shallow.y);
    }

    #[test]
    fn upward_facing_cap_is_full_brightness() {
        let cap = sample_sphere(Vec3A::Y);
        assert!(cap.abs_diff_eq(Color::new(127.5, 255.0, 127.5), 1e-4));
    }

    #[test]
    fn sideways_normal_shades_at_half() {
        // dot with world up is zero, so the colour sits at the half-bright
        // end of the blend.
        let side = sample_sphere(Vec3A::X);
        assert!(side.abs_diff_eq(Color::new(127.5, 63.75, 63.75), 1e-4));
    }
}
