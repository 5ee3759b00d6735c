use crate::Raster;
use image::Rgb;

/// Per-pixel greenness of a [`Raster`].
///
/// Pixels are stored in row-major order, same as the source raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreenMask {
    width: u32,
    height: u32,
    pixels: Box<[bool]>,
}

impl GreenMask {
    /// Classifies every pixel of `raster`.
    ///
    /// `threshold` is assumed to be already validated.
    pub(crate) fn classify(raster: &Raster, threshold: f32) -> Self {
        let (width, height) = raster.dimensions();
        let pixels = raster
            .pixels()
            .map(|pixel| is_green(pixel, threshold))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Returns (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns whether the pixel at (`x`, `y`) is green, or `None` if
    /// out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x < self.width && y < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            Some(self.pixels[idx])
        } else {
            None
        }
    }

    /// Number of green pixels.
    pub fn count(&self) -> usize {
        self.pixels.iter().filter(|green| **green).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.pixels.iter().copied()
    }
}

/// Green dominance test.
///
/// A pixel is green when its green channel strictly exceeds
/// `threshold` times both its red and blue channels.
pub(crate) fn is_green(Rgb([r, g, b]): &Rgb<f32>, threshold: f32) -> bool {
    *g > threshold * *r && *g > threshold * *b
}
