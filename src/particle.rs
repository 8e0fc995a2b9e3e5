//! A single animated particle.

use crate::animation::Animation;
use crate::trajectory::ParticleTrajectory;
use glam::DVec2;

/// One sprite instance moving along its trajectory.
///
/// A particle sits at its start point until it is activated. Activation happens
/// once, after the particle has been laid out; from then on the animation
/// drives it from `start` towards `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    trajectory: ParticleTrajectory,
    activated_at: Option<f64>,
}

impl Particle {
    pub fn new(trajectory: ParticleTrajectory) -> Self {
        Self {
            trajectory,
            activated_at: None,
        }
    }

    /// A particle on `trajectory` that carries over an earlier activation.
    pub fn with_activation(trajectory: ParticleTrajectory, activated_at: Option<f64>) -> Self {
        Self {
            trajectory,
            activated_at,
        }
    }

    #[inline]
    pub fn trajectory(&self) -> &ParticleTrajectory {
        &self.trajectory
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.activated_at.is_some()
    }

    /// Time the particle was activated, if it has been.
    #[inline]
    pub fn activated_at(&self) -> Option<f64> {
        self.activated_at
    }

    /// Start animating at `now`. Only the first call has an effect.
    pub fn activate(&mut self, now: f64) {
        if self.activated_at.is_none() {
            self.activated_at = Some(now);
        }
    }

    /// Displayed position at time `now`.
    pub fn position_at(&self, now: f64, animation: &Animation) -> DVec2 {
        match self.activated_at {
            None => self.trajectory.start,
            Some(since) => self.trajectory.lerp(animation.progress(now - since)),
        }
    }
}

impl From<ParticleTrajectory> for Particle {
    fn from(trajectory: ParticleTrajectory) -> Self {
        Self::new(trajectory)
    }
}
