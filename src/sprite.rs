//! Sprite images stamped at every particle position.
//!
//! Sprites are kept as straight (non-premultiplied) RGBA8. They can be loaded
//! from PNG or JPEG files, built from raw pixel data, or generated as a soft
//! radial glow that looks like a spark.
//!
//! ```
//! use sparks::Sprite;
//!
//! let spark = Sprite::glow(8, [255, 200, 120]);
//! assert_eq!(spark.width(), 17);
//! assert_eq!(spark.height(), 17);
//! ```

use crate::error::SpriteError;
use image::{Rgba, RgbaImage};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    /// Build a sprite from raw RGBA data (4 bytes per pixel).
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, SpriteError> {
        let expected = width as usize * height as usize * 4;
        let actual = data.len();
        RgbaImage::from_raw(width, height, data)
            .filter(|_| actual == expected)
            .map(|image| Self { image })
            .ok_or(SpriteError::SizeMismatch { expected, actual })
    }

    /// Load a sprite from an image file.
    ///
    /// Supports PNG and JPEG.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SpriteError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| SpriteError::Load {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgba8();

        log::info!(
            "loaded sprite '{}' ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self { image })
    }

    /// A soft round spark of the given color.
    ///
    /// The sprite is `2 * radius + 1` pixels square. Alpha falls off
    /// quadratically from the center to zero at `radius`.
    pub fn glow(radius: u32, color: [u8; 3]) -> Self {
        let size = radius * 2 + 1;
        let r = radius.max(1) as f64;
        let image = RgbaImage::from_fn(size, size, |x, y| {
            let dx = x as f64 - radius as f64;
            let dy = y as f64 - radius as f64;
            let falloff = (1.0 - (dx * dx + dy * dy).sqrt() / r).clamp(0.0, 1.0);
            let alpha = (falloff * falloff * 255.0).round() as u8;
            Rgba([color[0], color[1], color[2], alpha])
        });
        Self { image }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
