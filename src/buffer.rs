use super::color::*;
use super::error::ImageError;

/// A fixed-size grid of colors, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) pixels: Vec<Color>,
}

impl Image {
    /// A `width` x `height` image filled with [`Color::CLEAR`].
    pub fn new(width: usize, height: usize) -> Self {
        Image {
            width,
            height,
            pixels: vec![Color::CLEAR; width * height],
        }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, ImageError> {
        if pixels.len() != width * height {
            return Err(ImageError::SizeMismatch { width, height, len: pixels.len() });
        }

        Ok(Image { width, height, pixels })
    }

    /// A single-row strip, the shape palettes are expected to have.
    pub fn strip(colors: impl IntoIterator<Item = Color>) -> Self {
        let pixels: Vec<Color> = colors.into_iter().collect();
        Image {
            width: pixels.len(),
            height: 1,
            pixels,
        }
    }

    pub fn from_func(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }

        Image {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[x + y * self.width]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Color {
        &mut self.pixels[x + y * self.width]
    }

    /// Row `y`, or an empty slice if the image has no such row.
    pub fn row(&self, y: usize) -> &[Color] {
        if y >= self.height {
            return &[];
        }
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Concatenates bands of equal width top to bottom.
    pub(crate) fn stack(bands: impl IntoIterator<Item = Self>) -> Self {
        let mut bands_iter = bands.into_iter();
        let mut stacked = match bands_iter.next() {
            Some(first) => first,
            None => return Image::new(0, 0),
        };

        for band in bands_iter {
            assert_eq!(stacked.width, band.width);
            stacked.height += band.height;
            stacked.pixels.extend(band.pixels);
        }

        stacked
    }
}
