//! Timing curves and repetition for particle motion.
//!
//! An [`Animation`] turns elapsed time into a progress value in `[0, 1]` that
//! is used to interpolate a particle between its start and end points. The
//! spark effect uses [`Animation::sparks`]: linear, one time unit per cycle,
//! repeating forever and jumping back to the start after every cycle.

use serde::{Deserialize, Serialize};

/// Easing applied to the raw cycle progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Curve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Curve {
    /// Map `t` in `[0, 1]` through the curve.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => t * (2.0 - t),
            Curve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// How often an animation plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repeat {
    /// Play a single cycle and hold the end value.
    #[default]
    Once,
    /// Loop forever. With `autoreverses`, every other cycle plays backwards.
    Forever { autoreverses: bool },
    /// Play `count` cycles and hold the last value.
    Count { count: u32, autoreverses: bool },
}

/// Duration, curve and repetition of a particle's motion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Length of one cycle in seconds.
    pub duration: f64,
    pub curve: Curve,
    pub repeat: Repeat,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            duration: 1.0,
            curve: Curve::Linear,
            repeat: Repeat::Once,
        }
    }
}

impl Animation {
    /// Linear motion over `duration`, played once.
    pub fn linear(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// One second per cycle, linear, looping without reversal.
    pub fn sparks() -> Self {
        Self::linear(1.0).repeat_forever(false)
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn repeat_forever(mut self, autoreverses: bool) -> Self {
        self.repeat = Repeat::Forever { autoreverses };
        self
    }

    pub fn repeat_count(mut self, count: u32, autoreverses: bool) -> Self {
        self.repeat = Repeat::Count {
            count,
            autoreverses,
        };
        self
    }

    /// Progress in `[0, 1]` after `elapsed` seconds.
    ///
    /// Negative elapsed time is treated as not started. A non-positive
    /// duration completes immediately.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if elapsed <= 0.0 {
            return self.curve.apply(0.0);
        }
        if self.duration <= 0.0 {
            return self.curve.apply(1.0);
        }

        let cycles = elapsed / self.duration;
        let raw = match self.repeat {
            Repeat::Once => cycles.min(1.0),
            Repeat::Forever { autoreverses } => looped(cycles, autoreverses),
            Repeat::Count {
                count,
                autoreverses,
            } => {
                let count = count.max(1) as f64;
                if cycles >= count {
                    // Hold the value the final cycle ended on.
                    if autoreverses && (count as u64) % 2 == 0 {
                        0.0
                    } else {
                        1.0
                    }
                } else {
                    looped(cycles, autoreverses)
                }
            }
        };
        self.curve.apply(raw)
    }
}

fn looped(cycles: f64, autoreverses: bool) -> f64 {
    let phase = cycles.fract();
    if autoreverses && (cycles.floor() as u64) % 2 == 1 {
        1.0 - phase
    } else {
        phase
    }
}
