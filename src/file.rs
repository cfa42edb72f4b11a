use image::{DynamicImage, ImageBuffer, ImageResult, Rgba, Rgba32FImage};
use std::path::Path;

use super::{buffer::*, color::*};

impl Image {
    pub fn from_rgba32f(img: &Rgba32FImage) -> Self {
        Image {
            width: img.width() as usize,
            height: img.height() as usize,
            pixels: img.pixels().map(|p| Color::from(p.0)).collect(),
        }
    }

    pub fn to_rgba32f(&self) -> Rgba32FImage {
        ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            Rgba(self.get(x as usize, y as usize).into())
        })
    }

    /// Converts to 8 bits per channel, clamping every channel to `[0, 1]`.
    pub fn to_dynamic8(&self) -> DynamicImage {
        DynamicImage::ImageRgba8(DynamicImage::ImageRgba32F(self.to_rgba32f()).to_rgba8())
    }
}

/// Decodes an image file without any filtering, so each texel is read back
/// exactly as stored.
pub fn load_image(path: impl AsRef<Path>) -> ImageResult<Image> {
    let img = image::open(path)?;
    Ok(Image::from_rgba32f(&img.into_rgba32f()))
}

/// Encodes `img` in the format implied by the extension of `path`.
pub fn save_image(img: &Image, path: impl AsRef<Path>) -> ImageResult<()> {
    img.to_dynamic8().save(path)
}
