//! Camera for ray generation and the multi-sample pixel loop.

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::random::{self, SampleRng};
use crate::scene::Scene;
use crate::shading::Color;
use crate::tracer;

/// Camera for ray generation and scene rendering.
///
/// Axis-aligned pinhole model: rays fan out from `position` around `forward`
/// scaled by the image height, one pixel-sized step apart, with sub-pixel
/// jitter for anti-aliasing. There is no up/right basis; the pixel grid
/// lives in the world x/y plane.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Number of random samples for each pixel (for anti-aliasing)
    pub samples_per_pixel: u32,
    /// Camera position in world space
    pub position: Vec3A,
    /// View direction the pixel grid is centred on
    pub forward: Vec3A,
}

impl Camera {
    /// Creates a camera with the default settings.
    ///
    /// Default: 512x512 image, 64 samples per pixel, placed at (0, 10, 0)
    /// looking along +Z.
    pub fn new() -> Self {
        Self {
            image_width: 512,
            image_height: 512,
            samples_per_pixel: 64,
            position: Vec3A::new(0.0, 10.0, 0.0),
            forward: Vec3A::Z,
        }
    }

    /// Renders the scene into an f32 RGB framebuffer.
    ///
    /// Traverses pixels with y decreasing, so buffer row 0 holds the
    /// first-traversed row and writing the buffer out in storage order
    /// reproduces the traversal order byte for byte. Channels hold raw
    /// shader output in the nominal [0, 255] range, unclamped.
    pub fn render(&self, scene: &Scene, rng: &mut SampleRng) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::new(self.image_width, self.image_height);

        info!("Generating image...");
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new((self.image_width * self.image_height) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        let half_width = (self.image_width / 2) as i32;
        let half_height = (self.image_height / 2) as i32;
        let scaled_forward = self.forward * self.image_height as f32;
        let sample_weight = 1.0 / self.samples_per_pixel as f32;

        for (row, y) in (0..self.image_height as i32).rev().enumerate() {
            for x in 0..self.image_width as i32 {
                let mut colour = Color::ZERO;

                for sample_index in 0..self.samples_per_pixel {
                    let jitter = random::jitter(rng);
                    let offset = Vec3A::new(
                        (x - half_width) as f32 + jitter.x,
                        (y - half_height) as f32 + jitter.y,
                        0.0,
                    );
                    let direction = (scaled_forward + offset).normalize();
                    let sampled = tracer::sample(scene, self.position, direction);

                    // Running average: the first sample assigns directly,
                    // later samples blend in at a constant 1/N weight.
                    colour = if sample_index == 0 {
                        sampled
                    } else {
                        colour.lerp(sampled, sample_weight)
                    };
                }

                image.put_pixel(x as u32, row as u32, Rgb([colour.x, colour.y, colour.z]));
                pb.inc(1);
            }
        }

        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }
}
