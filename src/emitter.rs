//! Emitter configuration and per-slot spawning.
//!
//! An [`Emitter`] owns one [`EmitterConfig`] and produces one
//! [`ParticleTrajectory`] per particle slot. Every slot draws from its own
//! random source (see [`SpawnContext`]), so slot `i` gets the same trajectory
//! for a given seed no matter in which order the slots are computed.
//!
//! # Configuration
//!
//! | Field | Meaning | Default |
//! |-------|---------|---------|
//! | `particle_count` | Number of particle slots | `0` |
//! | `creation_point` | Emission center, normalized to the surface | `(0.5, 0.5)` |
//! | `creation_range` | Size of the jitter rectangle, normalized | `(0, 0)` |
//! | `angle` | Emission direction in radians, `0` = up | `0` |
//! | `angle_range` | Full width of the angular jitter | `0` |
//! | `speed` | Distance travelled per cycle | `50` |
//! | `speed_range` | Full width of the speed jitter | `0` |
//!
//! # Example
//!
//! ```
//! use sparks::{DVec2, Emitter, EmitterConfig};
//!
//! let emitter = Emitter::new(
//!     EmitterConfig::default()
//!         .with_particle_count(200)
//!         .with_angle_range_degrees(360.0)
//!         .with_speed_range(80.0),
//! )
//! .with_seed(42);
//!
//! let trajectories = emitter.spawn(DVec2::new(640.0, 480.0));
//! assert_eq!(trajectories.len(), 200);
//! ```

use crate::spawn::SpawnContext;
use crate::trajectory::{trajectory, ParticleTrajectory};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Read-only description of an emitter.
///
/// Ranges are full widths: a `speed_range` of `80` jitters the speed by up to
/// `40` in either direction. Ranges must not be negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Number of particles to instantiate.
    pub particle_count: u32,
    /// Center of the emission area in unit coordinates.
    pub creation_point: DVec2,
    /// Width and height of the jitter rectangle around `creation_point`.
    pub creation_range: DVec2,
    /// Base emission direction in radians. Zero points up.
    pub angle: f64,
    /// Full width of the angular jitter, in radians.
    pub angle_range: f64,
    /// Base displacement from start to end.
    pub speed: f64,
    /// Full width of the speed jitter.
    pub speed_range: f64,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            particle_count: 0,
            creation_point: DVec2::splat(0.5),
            creation_range: DVec2::ZERO,
            angle: 0.0,
            angle_range: 0.0,
            speed: 50.0,
            speed_range: 0.0,
        }
    }
}

impl EmitterConfig {
    /// The spark burst: 200 particles flying out in every direction from the
    /// center, with speeds between 10 and 90.
    pub fn sparks() -> Self {
        Self::default()
            .with_particle_count(200)
            .with_angle_range_degrees(360.0)
            .with_speed_range(80.0)
    }

    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the emission center in unit coordinates (`(0.5, 0.5)` is the
    /// middle of the surface).
    pub fn with_creation_point(mut self, point: DVec2) -> Self {
        self.creation_point = point;
        self
    }

    /// Set the jitter rectangle size in unit coordinates.
    pub fn with_creation_range(mut self, range: DVec2) -> Self {
        self.creation_range = range;
        self
    }

    /// Set the base emission angle in radians.
    pub fn with_angle(mut self, radians: f64) -> Self {
        self.angle = radians;
        self
    }

    pub fn with_angle_degrees(self, degrees: f64) -> Self {
        self.with_angle(degrees.to_radians())
    }

    /// Set the full width of the angular jitter in radians.
    pub fn with_angle_range(mut self, radians: f64) -> Self {
        self.angle_range = radians;
        self
    }

    pub fn with_angle_range_degrees(self, degrees: f64) -> Self {
        self.with_angle_range(degrees.to_radians())
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the full width of the speed jitter.
    pub fn with_speed_range(mut self, range: f64) -> Self {
        self.speed_range = range;
        self
    }

    /// Smallest and largest speed a particle can be given.
    pub fn speed_bounds(&self) -> (f64, f64) {
        let half = self.speed_range / 2.0;
        (self.speed - half, self.speed + half)
    }
}

/// Spawns trajectories for every particle slot of a configuration.
#[derive(Clone, Debug)]
pub struct Emitter {
    config: EmitterConfig,
    seed: u64,
}

impl Emitter {
    /// Create an emitter seeded from the system clock.
    ///
    /// Use [`Emitter::with_seed`] for reproducible output.
    pub fn new(config: EmitterConfig) -> Self {
        Self {
            config,
            seed: clock_seed(),
        }
    }

    /// Fix the base seed of the per-particle random sources.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[inline]
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn particle_count(&self) -> u32 {
        self.config.particle_count
    }

    /// Trajectory of slot `index` on a surface of `surface_size`.
    pub fn trajectory_for(&self, index: u32, surface_size: DVec2) -> ParticleTrajectory {
        let mut ctx = SpawnContext::new(index, self.config.particle_count, self.seed);
        trajectory(&self.config, surface_size, &mut ctx)
    }

    /// One trajectory per particle slot, in slot order.
    pub fn spawn(&self, surface_size: DVec2) -> Vec<ParticleTrajectory> {
        log::debug!(
            "spawning {} particles on {}x{} surface (seed {:#x})",
            self.config.particle_count,
            surface_size.x,
            surface_size.y,
            self.seed
        );
        (0..self.config.particle_count)
            .map(|i| self.trajectory_for(i, surface_size))
            .collect()
    }
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}
