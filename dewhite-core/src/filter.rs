//! Per-image white background removal

use std::path::Path;

use image::io::Reader;
use image::{ImageFormat, Rgba, RgbaImage};
use thiserror::Error;

/// Every color channel must be strictly above this for a pixel to count as white.
pub const WHITE_THRESHOLD: u8 = 200;

/// Replacement written over white pixels.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Failed to decode or encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),
}

/// Check whether red, green and blue all exceed [`WHITE_THRESHOLD`].
/// Alpha is ignored.
pub fn is_white(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD
}

/// Rewrite every white pixel to [`TRANSPARENT_WHITE`], leaving the rest alone.
///
/// Returns how many pixels were rewritten.
pub fn clear_white(img: &mut RgbaImage) -> usize {
    let mut cleared = 0;
    for pixel in img.pixels_mut() {
        if is_white(pixel) {
            *pixel = TRANSPARENT_WHITE;
            cleared += 1;
        }
    }
    cleared
}

/// Load the image at `path`, clear its white pixels and overwrite it as PNG.
///
/// The decoder is picked from the file content, falling back to the
/// extension. The original file is replaced without a backup.
pub fn remove_white_background(path: impl AsRef<Path>) -> Result<usize, FilterError> {
    let path = path.as_ref();
    let mut img = Reader::open(path)?
        .with_guessed_format()?
        .decode()?
        .into_rgba8();
    let (width, height) = img.dimensions();

    let cleared = clear_white(&mut img);
    log::debug!(
        "{}: {}x{}, cleared {} pixels",
        path.display(),
        width,
        height,
        cleared
    );

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(cleared)
}
