//! Image output: binary PPM streams and PNG files.
//!
//! The renderer's framebuffer stores raw shader output, f32 channels in the
//! nominal [0, 255] range that can overshoot on bright highlights. Both
//! writers clamp each channel to [0, 255] before truncating to a byte; the
//! core never clamps, so this boundary owns the decision.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use image::{ImageBuffer, Rgb};
use log::{info, warn};

/// Framebuffer type produced by the renderer.
pub type Frame = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Convert one colour channel to a byte, clamping out-of-range values.
fn channel_byte(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Write the image as a binary PPM ("P6") stream.
///
/// Emits the ASCII header `P6 <width> <height> 255 ` followed immediately by
/// one red/green/blue byte triple per pixel in buffer storage order.
pub fn write_ppm<W: Write>(image: &Frame, out: &mut W) -> io::Result<()> {
    write!(out, "P6 {} {} 255 ", image.width(), image.height())?;

    let mut bytes = Vec::with_capacity((image.width() * image.height() * 3) as usize);
    for pixel in image.pixels() {
        bytes.push(channel_byte(pixel[0]));
        bytes.push(channel_byte(pixel[1]));
        bytes.push(channel_byte(pixel[2]));
    }
    out.write_all(&bytes)?;
    out.flush()
}

/// Write the PPM stream to stdout.
pub fn write_ppm_to_stdout(image: &Frame) -> io::Result<()> {
    let stdout = io::stdout();
    write_ppm(image, &mut BufWriter::new(stdout.lock()))
}

/// Save the image as a PPM file.
pub fn save_image_as_ppm(image: &Frame, output_path: &str) {
    let result =
        File::create(output_path).and_then(|file| write_ppm(image, &mut BufWriter::new(file)));
    match result {
        Ok(()) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}

/// Save the image as an 8-bit PNG.
///
/// No gamma correction is applied: the channels are already display-referred
/// byte values, not linear light.
pub fn save_image_as_png(image: &Frame, output_path: &str) {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            let pixel = image.get_pixel(x, y);
            Rgb([
                channel_byte(pixel[0]),
                channel_byte(pixel[1]),
                channel_byte(pixel[2]),
            ])
        });

    match u8_image.save(output_path) {
        Ok(()) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}
