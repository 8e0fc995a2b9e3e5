//! CPU compositing of particle sprites.
//!
//! A [`Canvas`] is an RGBA8 frame filled with a background color. Sprites are
//! stamped centered on a position and clipped to the canvas bounds.
//!
//! # Blend Modes
//!
//! | Mode | Result |
//! |------|--------|
//! | [`BlendMode::Alpha`] | Standard "over" compositing |
//! | [`BlendMode::Additive`] | Source color scaled by alpha is added, saturating |
//!
//! Additive blending is the usual choice for sparks: overlapping particles get
//! brighter instead of hiding each other.

use crate::error::RenderError;
use crate::scene::EmitterScene;
use crate::sprite::Sprite;
use crate::time::Time;
use glam::DVec2;
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// How a sprite pixel is combined with the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    Alpha,
    #[default]
    Additive,
}

pub struct Canvas {
    image: RgbaImage,
    background: Rgba<u8>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
            background,
        }
    }

    /// Size of the canvas as a surface size for layout.
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.image.width() as f64, self.image.height() as f64)
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Refill the canvas with the background color.
    pub fn clear(&mut self) {
        let background = self.background;
        for pixel in self.image.pixels_mut() {
            *pixel = background;
        }
    }

    /// Draw `sprite` centered on `center`. Parts outside the canvas are dropped.
    pub fn stamp(&mut self, sprite: &Sprite, center: DVec2, blend: BlendMode) {
        if !center.is_finite() {
            return;
        }

        let left = (center.x - sprite.width() as f64 / 2.0).round() as i64;
        let top = (center.y - sprite.height() as f64 / 2.0).round() as i64;
        let (width, height) = (self.image.width() as i64, self.image.height() as i64);

        // Fully off-canvas; also keeps `left + sx` and `top + sy` from overflowing.
        if left >= width
            || top >= height
            || left <= -(sprite.width() as i64)
            || top <= -(sprite.height() as i64)
        {
            return;
        }

        for sy in 0..sprite.height() {
            let y = top + sy as i64;
            if y < 0 || y >= height {
                continue;
            }
            for sx in 0..sprite.width() {
                let x = left + sx as i64;
                if x < 0 || x >= width {
                    continue;
                }
                let src = sprite.pixel(sx, sy);
                let dst = self.image.get_pixel_mut(x as u32, y as u32);
                *dst = blend_pixel(*dst, src, blend);
            }
        }
    }

    /// Clear the canvas and draw every particle of `scene` as it appears at `now`.
    pub fn render(&mut self, scene: &EmitterScene, sprite: &Sprite, now: f64, blend: BlendMode) {
        self.clear();
        for position in scene.positions_at(now) {
            self.stamp(sprite, position, blend);
        }
    }

    /// Write the canvas as a PNG file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| RenderError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Timing and blending of a rendered frame sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSequence {
    /// Number of frames to write.
    pub frames: u32,
    /// Frames per animation second.
    pub fps: f64,
    pub blend: BlendMode,
}

impl Default for FrameSequence {
    fn default() -> Self {
        Self {
            frames: 60,
            fps: 30.0,
            blend: BlendMode::Additive,
        }
    }
}

/// File name of frame `index` in a sequence (`frame_0000.png`, ...).
pub fn frame_file_name(index: u32) -> String {
    format!("frame_{index:04}.png")
}

/// Lay `scene` out on `canvas`, make it appear at time zero, and write
/// `sequence.frames` PNG frames into `out_dir` at a fixed step of
/// `1 / sequence.fps` seconds.
///
/// The output directory is created if missing. Returns the written paths in
/// frame order.
pub fn render_frames<P: AsRef<Path>>(
    scene: &mut EmitterScene,
    sprite: &Sprite,
    canvas: &mut Canvas,
    out_dir: P,
    sequence: &FrameSequence,
) -> Result<Vec<PathBuf>, RenderError> {
    if !sequence.fps.is_finite() || sequence.fps <= 0.0 {
        return Err(RenderError::InvalidFps(sequence.fps));
    }

    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir).map_err(|source| RenderError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    scene.layout(canvas.size());
    let mut time = Time::new();
    time.set_fixed_delta(Some(1.0 / sequence.fps));
    scene.appear(time.elapsed());

    let mut paths = Vec::with_capacity(sequence.frames as usize);
    for frame in 0..sequence.frames {
        canvas.render(scene, sprite, time.elapsed(), sequence.blend);
        let path = out_dir.join(frame_file_name(frame));
        canvas.save(&path)?;
        paths.push(path);
        time.update();
    }

    log::debug!("wrote {} frames to {}", paths.len(), out_dir.display());
    Ok(paths)
}

fn blend_pixel(dst: Rgba<u8>, src: Rgba<u8>, mode: BlendMode) -> Rgba<u8> {
    let a = src[3] as u32;
    if a == 0 {
        return dst;
    }
    match mode {
        BlendMode::Alpha => {
            let inv = 255 - a;
            let mut out = [0u8; 4];
            for c in 0..3 {
                out[c] = ((src[c] as u32 * a + dst[c] as u32 * inv + 127) / 255) as u8;
            }
            out[3] = (a + (dst[3] as u32 * inv + 127) / 255).min(255) as u8;
            Rgba(out)
        }
        BlendMode::Additive => {
            let mut out = dst.0;
            for c in 0..3 {
                let add = (src[c] as u32 * a + 127) / 255;
                out[c] = (dst[c] as u32 + add).min(255) as u8;
            }
            out[3] = out[3].max(src[3]);
            Rgba(out)
        }
    }
}
