//! Sources for the per-tick movement of a bus.
//!
//! Every location query moves a bus north-east by a small random amount.
//! The amount is drawn through the [`Jitter`] trait so the movement can be
//! made reproducible (seeded) or fully fixed in tests.

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::shared::geo::Coordinate;

/// Smallest offset added to each axis per tick, in degrees.
pub const MIN_STEP: f64 = 0.0001;
/// Largest offset added to each axis per tick, in degrees.
pub const MAX_STEP: f64 = 0.001;

pub trait Jitter: Send + Sync {
    /// Returns the offset to add to a live position. Both components are
    /// drawn independently from `MIN_STEP..=MAX_STEP`.
    fn step(&self) -> Coordinate;
}

fn draw<R: Rng>(rng: &mut R) -> Coordinate {
    Coordinate {
        latitude: rng.gen_range(MIN_STEP..=MAX_STEP),
        longitude: rng.gen_range(MIN_STEP..=MAX_STEP),
    }
}

/// Draws offsets from the thread local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomJitter;

impl Jitter for RandomJitter {
    fn step(&self) -> Coordinate {
        draw(&mut rand::thread_rng())
    }
}

/// Deterministic offsets from a seeded ChaCha8 stream.
pub struct SeededJitter(Mutex<ChaCha8Rng>);

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(ChaCha8Rng::seed_from_u64(seed)))
    }
}

impl Jitter for SeededJitter {
    fn step(&self) -> Coordinate {
        draw(&mut *self.0.lock())
    }
}

/// Always returns the same offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub Coordinate);

impl Jitter for FixedJitter {
    fn step(&self) -> Coordinate {
        self.0
    }
}

#[test]
fn random_steps_stay_in_range() {
    let jitter = RandomJitter;
    for _ in 0..1000 {
        let step = jitter.step();
        assert!((MIN_STEP..=MAX_STEP).contains(&step.latitude));
        assert!((MIN_STEP..=MAX_STEP).contains(&step.longitude));
    }
}

#[test]
fn seeded_steps_are_reproducible() {
    let a = SeededJitter::new(7);
    let b = SeededJitter::new(7);
    for _ in 0..100 {
        let (sa, sb) = (a.step(), b.step());
        assert_eq!(sa, sb);
        assert!((MIN_STEP..=MAX_STEP).contains(&sa.latitude));
        assert!((MIN_STEP..=MAX_STEP).contains(&sa.longitude));
    }
}
