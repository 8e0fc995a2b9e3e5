//! # sparks - spark particle emitter
//!
//! A fixed number of particles, each moving from a jittered start point to an
//! end point determined by a jittered angle and speed, looping forever.
//!
//! ## Quick Start
//!
//! ```
//! use sparks::prelude::*;
//!
//! let emitter = Emitter::new(EmitterConfig::sparks()).with_seed(42);
//! let mut scene = EmitterScene::new(emitter);
//!
//! let mut canvas = Canvas::new(320, 240, Rgba([0, 0, 0, 255]));
//! scene.layout(canvas.size());
//! scene.appear(0.0);
//!
//! let sprite = Sprite::glow(6, [255, 190, 90]);
//! canvas.render(&scene, &sprite, 0.5, BlendMode::Additive);
//! ```
//!
//! ## Core Concepts
//!
//! ### Trajectories
//!
//! [`trajectory()`] maps an [`EmitterConfig`], a surface size and a random
//! source to a [`ParticleTrajectory`]. It is pure: each call draws fresh
//! randomness and touches nothing else.
//!
//! ### Emitters and scenes
//!
//! An [`Emitter`] computes one trajectory per particle slot, each from its own
//! seeded [`SpawnContext`]. An [`EmitterScene`] lays those particles out on a
//! surface and animates them with an [`Animation`] once they appear.
//!
//! ### Angles
//!
//! Zero points up (towards smaller `y`); `PI / 2` points right.
//!
//! ## Feature Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`trajectory`](mod@trajectory) | Start/end point calculation |
//! | [`emitter`] | Configuration and per-slot spawning |
//! | [`animation`] | Curves and repetition |
//! | [`scene`] | Layout and activation |
//! | [`render`] | CPU sprite compositing |
//! | [`config`] | JSON presets |
//! | [`time`] | Frame clock |

pub mod animation;
pub mod config;
pub mod emitter;
pub mod error;
pub mod particle;
pub mod render;
pub mod scene;
mod spawn;
pub mod sprite;
pub mod time;
pub mod trajectory;

pub use animation::{Animation, Curve, Repeat};
pub use config::load_preset;
pub use emitter::{Emitter, EmitterConfig};
pub use error::{ConfigError, RenderError, SpriteError};
pub use glam::DVec2;
pub use particle::Particle;
pub use render::{render_frames, BlendMode, Canvas, FrameSequence};
pub use scene::EmitterScene;
pub use spawn::SpawnContext;
pub use sprite::Sprite;
pub use trajectory::{trajectory, ParticleTrajectory};

/// Convenient re-exports for common usage.
///
/// ```
/// use sparks::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::{Animation, Curve, Repeat};
    pub use crate::emitter::{Emitter, EmitterConfig};
    pub use crate::particle::Particle;
    pub use crate::render::{render_frames, BlendMode, Canvas, FrameSequence};
    pub use crate::scene::EmitterScene;
    pub use crate::spawn::SpawnContext;
    pub use crate::sprite::Sprite;
    pub use crate::time::Time;
    pub use crate::trajectory::{trajectory, ParticleTrajectory};
    pub use crate::DVec2;
    pub use image::Rgba;
}
