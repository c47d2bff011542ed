use clap::Parser;
use log::info;

mod cli;
mod logger;

use cli::Args;
use glintrace::camera::Camera;
use glintrace::output::{save_image_as_png, save_image_as_ppm, write_ppm_to_stdout};
use glintrace::random;
use glintrace::scene::Scene;
use logger::init_logger;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("GlinTrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image resolution: {}x{}, samples per pixel: {}, seed: {}",
        args.width, args.height, args.samples_per_pixel, args.seed
    );

    let scene = Scene::default();

    let mut camera = Camera::new();
    camera.image_width = args.width;
    camera.image_height = args.height;
    camera.samples_per_pixel = args.samples_per_pixel;

    let mut rng = random::seeded(args.seed);
    let image = camera.render(&scene, &mut rng);

    match args.output.as_deref() {
        None => {
            if let Err(e) = write_ppm_to_stdout(&image) {
                log::error!("Failed to write PPM stream: {}", e);
                std::process::exit(1);
            }
        }
        Some(path) if path.ends_with(".png") => save_image_as_png(&image, path),
        Some(path) if path.ends_with(".ppm") => save_image_as_ppm(&image, path),
        Some(path) => {
            log::error!(
                "Unsupported file extension '{}'. Only .png and .ppm formats are supported.",
                std::path::Path::new(path)
                    .extension()
                    .unwrap_or_default()
                    .to_string_lossy()
            );
            std::process::exit(1);
        }
    }
}
