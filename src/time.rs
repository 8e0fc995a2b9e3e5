//! Frame clock driving particle animation.
//!
//! [`Time`] accumulates per-frame deltas into an elapsed time. With a fixed
//! delta the clock ignores the wall clock entirely, which makes rendered frame
//! sequences reproducible.
//!
//! # Example
//!
//! ```
//! use sparks::time::Time;
//!
//! let mut time = Time::new();
//! time.set_fixed_delta(Some(0.25));
//!
//! time.update();
//! let (elapsed, delta) = time.update();
//! assert_eq!(elapsed, 0.5);
//! assert_eq!(delta, 0.25);
//! assert_eq!(time.frame(), 2);
//! ```

use std::time::{Duration, Instant};

/// Elapsed and delta time for an animation loop.
#[derive(Debug)]
pub struct Time {
    /// When the last frame occurred.
    last_frame: Instant,
    /// Accumulated (scaled) time in seconds.
    elapsed_secs: f64,
    /// Time since last frame in seconds.
    delta_secs: f64,
    /// Total frames since start.
    frame_count: u64,
    paused: bool,
    /// Fixed delta time for deterministic updates (optional).
    fixed_delta: Option<f64>,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f64,
}

impl Time {
    /// Create a new clock starting from now.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            paused: false,
            fixed_delta: None,
            time_scale: 1.0,
        }
    }

    /// Advance one frame.
    ///
    /// Returns `(elapsed_time, delta_time)` for convenience.
    pub fn update(&mut self) -> (f64, f64) {
        let now = Instant::now();
        let raw_delta = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        if self.paused {
            self.delta_secs = 0.0;
            return (self.elapsed_secs, self.delta_secs);
        }

        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta) * self.time_scale;
        self.elapsed_secs += self.delta_secs;
        self.frame_count += 1;

        log::trace!(
            "frame {} elapsed {:.4}s delta {:.4}s",
            self.frame_count,
            self.elapsed_secs,
            self.delta_secs
        );

        (self.elapsed_secs, self.delta_secs)
    }

    /// Total elapsed time in seconds.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed_secs
    }

    /// Time since last frame in seconds (delta time).
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Pause time progression.
    ///
    /// While paused, `delta()` returns 0 and `elapsed()` stops increasing.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume time progression after pausing.
    pub fn resume(&mut self) {
        if self.paused {
            self.last_frame = Instant::now();
            self.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Set a fixed delta time for deterministic updates.
    ///
    /// Pass `None` to use real frame timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f64>) {
        self.fixed_delta = delta;
    }

    /// Set time scale multiplier. Negative values clamp to 0.
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }

    /// Reset the clock, keeping the fixed delta and time scale.
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
        self.elapsed_secs = 0.0;
        self.delta_secs = 0.0;
        self.frame_count = 0;
        self.paused = false;
    }

    /// Elapsed time as a Duration.
    #[inline]
    pub fn elapsed_duration(&self) -> Duration {
        Duration::from_secs_f64(self.elapsed_secs)
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
