//! Per-particle trajectory calculation.
//!
//! A trajectory is the pair of points a particle travels between. The start
//! point is the emitter's creation point jittered inside the creation range and
//! scaled to the surface; the end point is the start displaced by the jittered
//! speed along the jittered emission angle.
//!
//! Angles use an "up is zero" convention and grow clockwise on a y-down
//! surface, so `0` moves a particle towards smaller `y` and `PI / 2` moves it
//! towards larger `x`.
//!
//! # Example
//!
//! ```
//! use sparks::{trajectory, DVec2, EmitterConfig};
//! use rand::SeedableRng;
//!
//! let config = EmitterConfig::default().with_speed(10.0);
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
//! let t = trajectory(&config, DVec2::new(100.0, 100.0), &mut rng);
//!
//! assert!((t.start - DVec2::new(50.0, 50.0)).length() < 1e-9);
//! assert!((t.end - DVec2::new(50.0, 40.0)).length() < 1e-9);
//! ```

use crate::emitter::EmitterConfig;
use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// The start and end point of one particle.
///
/// Created once per particle and never mutated; the animation layer
/// interpolates between the two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleTrajectory {
    /// Where the particle appears.
    pub start: DVec2,
    /// Where the particle is at the end of one animation cycle.
    pub end: DVec2,
}

impl ParticleTrajectory {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Vector from `start` to `end`.
    #[inline]
    pub fn displacement(&self) -> DVec2 {
        self.end - self.start
    }

    /// Distance travelled over one cycle. Equals the jittered speed when that
    /// speed is non-negative.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.displacement().length()
    }

    /// Direction of travel in the up-is-zero convention, in `(-PI, PI]`.
    pub fn heading(&self) -> f64 {
        let d = self.displacement();
        // Undo the quarter turn applied when the end point was computed.
        let render_angle = d.y.atan2(d.x);
        let heading = render_angle + FRAC_PI_2;
        if heading > std::f64::consts::PI {
            heading - std::f64::consts::TAU
        } else {
            heading
        }
    }

    /// Point at `t` along the segment (`0.0` = start, `1.0` = end).
    #[inline]
    pub fn lerp(&self, t: f64) -> DVec2 {
        self.start.lerp(self.end, t)
    }
}

/// Draw a value uniformly from the closed interval `[-range / 2, range / 2]`.
///
/// A negative `range` inverts the interval and makes `rand` panic.
#[inline]
pub(crate) fn jitter<R: Rng + ?Sized>(rng: &mut R, range: f64) -> f64 {
    let half = range / 2.0;
    rng.gen_range(-half..=half)
}

/// Compute the trajectory of a single particle.
///
/// `surface_size` is the size of the surface `config.creation_point` is
/// normalized against. Randomness is drawn from `rng` in a fixed order:
/// x offset, y offset, speed, direction.
///
/// No validation is performed. Ranges must be non-negative; a degenerate
/// surface size simply produces degenerate (possibly NaN) points.
pub fn trajectory<R: Rng + ?Sized>(
    config: &EmitterConfig,
    surface_size: DVec2,
    rng: &mut R,
) -> ParticleTrajectory {
    let offset_x = jitter(rng, config.creation_range.x);
    let offset_y = jitter(rng, config.creation_range.y);
    let start = surface_size * (config.creation_point + DVec2::new(offset_x, offset_y));

    let actual_speed = config.speed + jitter(rng, config.speed_range);
    let actual_direction = config.angle + jitter(rng, config.angle_range);

    // The surface measures angles from the +x axis; ours start at "up".
    let render_angle = actual_direction - FRAC_PI_2;
    let end = start + DVec2::new(render_angle.cos(), render_angle.sin()) * actual_speed;

    ParticleTrajectory { start, end }
}
