//! Per-particle random source.
//!
//! Each particle slot gets its own [`SpawnContext`], seeded from the emitter's
//! base seed and the slot index. Slots therefore never share random state and
//! can be computed in any order, or on different threads, with the same result.
//!
//! `SpawnContext` implements [`RngCore`], so it can be passed straight to
//! [`trajectory`](crate::trajectory::trajectory) or any other `rand` consumer:
//!
//! ```
//! use sparks::{trajectory, DVec2, EmitterConfig, SpawnContext};
//!
//! let config = EmitterConfig::sparks();
//! let surface = DVec2::new(100.0, 100.0);
//! let mut ctx = SpawnContext::new(0, config.particle_count, 1234);
//! let t = trajectory(&config, surface, &mut ctx);
//! assert!(t.distance() >= 10.0 && t.distance() <= 90.0);
//! ```

use crate::trajectory::jitter;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Random source and slot information for one particle.
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: u32,
    /// Total number of particles being spawned.
    pub count: u32,
    rng: SmallRng,
}

impl SpawnContext {
    /// Create the context for slot `index` of `count`.
    pub fn new(index: u32, count: u32, seed: u64) -> Self {
        Self {
            index,
            count,
            rng: SmallRng::seed_from_u64(slot_seed(seed, index)),
        }
    }

    /// Normalized position of this slot among all slots (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.index as f64 / self.count as f64
    }

    /// Random f64 in the closed interval `[min, max]`.
    #[inline]
    pub fn random_range(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..=max)
    }

    /// Symmetric jitter in `[-range / 2, range / 2]`.
    #[inline]
    pub fn jitter(&mut self, range: f64) -> f64 {
        jitter(&mut self.rng, range)
    }
}

impl RngCore for SpawnContext {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Spread neighboring slot indices across the seed space (splitmix64 finalizer).
fn slot_seed(seed: u64, index: u32) -> u64 {
    let mut z = seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_context_progress() {
        let ctx = SpawnContext::new(50, 100, 0);
        assert!((ctx.progress() - 0.5).abs() < 1e-12);

        let empty = SpawnContext::new(0, 0, 0);
        assert_eq!(empty.progress(), 0.0);
    }

    #[test]
    fn test_same_slot_same_stream() {
        let mut a = SpawnContext::new(4, 10, 77);
        let mut b = SpawnContext::new(4, 10, 77);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_neighbor_slots_differ() {
        let mut a = SpawnContext::new(0, 10, 77);
        let mut b = SpawnContext::new(1, 10, 77);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_random_range_closed() {
        let mut ctx = SpawnContext::new(0, 1, 5);
        for _ in 0..500 {
            let v = ctx.random_range(-1.0, 3.0);
            assert!((-1.0..=3.0).contains(&v));
        }
        assert_eq!(ctx.random_range(2.0, 2.0), 2.0);
    }

    #[test]
    fn test_jitter_bounds() {
        let mut ctx = SpawnContext::new(0, 1, 5);
        for _ in 0..500 {
            let v = ctx.jitter(0.2);
            assert!(v.abs() <= 0.1);
        }
    }
}
