//! Random perturbation sources.
//!
//! Profiles draw uniform deviates through [`UniformDeviates`], so any
//! `rand::Rng` can drive them. [`NoiseStream`] hands out one ChaCha stream per
//! cell, keyed by the cell's linear index, which makes the perturbed field a
//! pure function of the seed no matter how the grid is traversed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

/// A source of independent uniform deviates in [0, 1).
pub trait UniformDeviates {
    /// Draw the next deviate.
    fn uniform(&mut self) -> f64;
}

impl<R: Rng> UniformDeviates for R {
    fn uniform(&mut self) -> f64 {
        self.random()
    }
}

/// Always returns the same deviate.
///
/// `ConstantDeviate(0.5)` switches every perturbation off regardless of the
/// noise amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantDeviate(pub f64);

impl UniformDeviates for ConstantDeviate {
    fn uniform(&mut self) -> f64 {
        self.0
    }
}

/// Counter-addressable deviate streams, one per grid cell.
#[derive(Debug, Clone)]
pub struct NoiseStream {
    seed: u64,
    base: ChaChaRng,
}

impl NoiseStream {
    /// Create the streams for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            base: ChaChaRng::seed_from_u64(seed),
        }
    }

    /// Seed the streams were built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generator for the cell with linear index `index`.
    ///
    /// Two calls with the same index return generators producing the same
    /// sequence.
    pub fn cell(&self, index: usize) -> ChaChaRng {
        let mut rng = self.base.clone();
        rng.set_stream(index as u64);
        rng
    }
}

/// Centred perturbation of relative size `amplitude` from a deviate `u`.
///
/// amplitude × (u - 1/2), so zero amplitude gives exactly zero.
pub fn perturbation(amplitude: f64, u: f64) -> f64 {
    amplitude * (u - 0.5)
}
