//! The emitter as laid out on a surface.
//!
//! [`EmitterScene`] ties an [`Emitter`] to a concrete surface size. Laying out
//! computes one particle per slot; the particles stay at their start points
//! until [`EmitterScene::appear`] activates them, after which each one loops
//! along its trajectory independently.
//!
//! ```
//! use sparks::{DVec2, Emitter, EmitterConfig, EmitterScene};
//!
//! let mut scene = EmitterScene::new(Emitter::new(EmitterConfig::sparks()).with_seed(1));
//! scene.layout(DVec2::new(400.0, 300.0));
//! scene.appear(0.0);
//!
//! let positions = scene.positions_at(0.5);
//! assert_eq!(positions.len(), 200);
//! ```

use crate::animation::Animation;
use crate::emitter::Emitter;
use crate::particle::Particle;
use glam::DVec2;

pub struct EmitterScene {
    emitter: Emitter,
    animation: Animation,
    surface_size: Option<DVec2>,
    particles: Vec<Particle>,
}

impl EmitterScene {
    /// Create a scene using the looping spark animation.
    pub fn new(emitter: Emitter) -> Self {
        Self {
            emitter,
            animation: Animation::sparks(),
            surface_size: None,
            particles: Vec::new(),
        }
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    #[inline]
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    #[inline]
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Size of the last layout, if any.
    #[inline]
    pub fn surface_size(&self) -> Option<DVec2> {
        self.surface_size
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Lay the particles out for `surface_size`.
    ///
    /// Does nothing if the scene is already laid out at this size. Otherwise
    /// every trajectory is recomputed for the new size. A slot that was
    /// already active keeps its activation time and goes on animating along
    /// its new trajectory; slots new to the scene start out inactive. Returns
    /// whether a new layout happened.
    pub fn layout(&mut self, surface_size: DVec2) -> bool {
        if self.surface_size == Some(surface_size) {
            return false;
        }

        let previous = std::mem::take(&mut self.particles);
        self.particles = self
            .emitter
            .spawn(surface_size)
            .into_iter()
            .enumerate()
            .map(|(i, trajectory)| {
                let activated_at = previous.get(i).and_then(Particle::activated_at);
                Particle::with_activation(trajectory, activated_at)
            })
            .collect();
        self.surface_size = Some(surface_size);

        log::debug!(
            "laid out {} particles at {}x{}",
            self.particles.len(),
            surface_size.x,
            surface_size.y
        );
        true
    }

    /// Activate every particle that is not yet animating.
    pub fn appear(&mut self, now: f64) {
        for particle in &mut self.particles {
            particle.activate(now);
        }
    }

    /// Displayed position of every particle at time `now`, in slot order.
    pub fn positions_at(&self, now: f64) -> Vec<DVec2> {
        self.particles
            .iter()
            .map(|p| p.position_at(now, &self.animation))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::EmitterConfig;

    fn scene() -> EmitterScene {
        EmitterScene::new(
            Emitter::new(EmitterConfig::default().with_particle_count(3).with_speed(10.0))
                .with_seed(1),
        )
    }

    #[test]
    fn test_layout_creates_inactive_particles() {
        let mut scene = scene();
        assert!(scene.particles().is_empty());

        assert!(scene.layout(DVec2::new(100.0, 100.0)));
        assert_eq!(scene.particles().len(), 3);
        assert!(scene.particles().iter().all(|p| !p.is_active()));
        assert_eq!(scene.positions_at(0.5), vec![DVec2::new(50.0, 50.0); 3]);
    }

    #[test]
    fn test_layout_same_size_is_noop() {
        let mut scene = scene();
        scene.layout(DVec2::new(100.0, 100.0));
        scene.appear(0.0);

        assert!(!scene.layout(DVec2::new(100.0, 100.0)));
        assert!(scene.particles().iter().all(|p| p.is_active()));
    }

    #[test]
    fn test_resize_relays_out_and_keeps_animating() {
        let mut scene = scene();
        scene.layout(DVec2::new(100.0, 100.0));
        scene.appear(0.0);

        assert!(scene.layout(DVec2::new(200.0, 50.0)));
        assert_eq!(scene.surface_size(), Some(DVec2::new(200.0, 50.0)));
        assert!(scene.particles().iter().all(|p| p.activated_at() == Some(0.0)));
        assert_eq!(scene.particles()[0].trajectory().start, DVec2::new(100.0, 25.0));

        // Halfway along the new trajectory, not parked at its start.
        for pos in scene.positions_at(0.5) {
            assert!((pos - DVec2::new(100.0, 20.0)).length() < 1e-9, "{pos}");
        }
    }

    #[test]
    fn test_resize_before_appear_stays_inactive() {
        let mut scene = scene();
        scene.layout(DVec2::new(100.0, 100.0));
        scene.layout(DVec2::new(200.0, 200.0));

        assert!(scene.particles().iter().all(|p| !p.is_active()));
        assert_eq!(scene.positions_at(0.5), vec![DVec2::new(100.0, 100.0); 3]);
    }

    #[test]
    fn test_appear_after_resize_keeps_first_activation() {
        let mut scene = scene();
        scene.layout(DVec2::new(100.0, 100.0));
        scene.appear(2.0);
        scene.layout(DVec2::new(200.0, 200.0));
        scene.appear(7.0);

        assert!(scene.particles().iter().all(|p| p.activated_at() == Some(2.0)));
    }

    #[test]
    fn test_appear_animates_upwards() {
        let mut scene = scene();
        scene.layout(DVec2::new(100.0, 100.0));
        scene.appear(1.0);

        for pos in scene.positions_at(1.5) {
            assert!((pos - DVec2::new(50.0, 45.0)).length() < 1e-9);
        }
    }
}
