//! Weight sampling for online Bayesian bagging.
//!
//! This module holds everything that decides how much each ensemble member
//! should learn from an arriving instance: the running class statistics,
//! the Gamma weight samplers and the seed stream that hands every model its
//! own reproducible generator.

pub mod stats;
pub mod weight;

pub use stats::RunningClassStats;
pub use weight::{AdaptiveSampler, ClassCountSampler, GammaParams, WeightSampler};

use crate::core::types::Weight;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, Gamma};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Master random stream of an ensemble.
///
/// Each draw hands out one sub-seed, in order, and a generator seeded from
/// it. Model 0 always takes the first slot of an instance, model 1 the
/// second, and so on, so a fixed master seed fixes every weight.
#[derive(Debug, Clone)]
pub struct SeedStream {
    seed: u64,
    master: Xoshiro256PlusPlus,
}

impl SeedStream {
    /// Create a stream from a master seed.
    pub fn new(seed: u64) -> Self {
        SeedStream {
            seed,
            master: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Master seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next sub-seed.
    pub fn next_seed(&mut self) -> u64 {
        self.master.next_u64()
    }

    /// Generator for the next slot.
    pub fn next_rng(&mut self) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(self.next_seed())
    }

    /// Rewind to the start of the stream.
    pub fn reset(&mut self) {
        self.master = Xoshiro256PlusPlus::seed_from_u64(self.seed);
    }
}

/// Draw one instance weight.
pub fn draw_weight<R: Rng + ?Sized>(gamma: &Gamma<f64>, rng: &mut R) -> Weight {
    gamma.sample(rng)
}
