// src/generate.rs
//! Random request generation.
//!
//! Uses ChaCha8 so a given seed always yields the same request set.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{EngineError, Result};

pub struct RequestGenerator {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RequestGenerator {
    pub fn from_seed(seed: u64) -> Self {
        RequestGenerator { rng: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    /// Seeds from the thread RNG. The chosen seed is kept so the run can
    /// be reproduced with [`RequestGenerator::from_seed`].
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws `count` cylinders on a disk of `disk_size`.
    ///
    /// When the disk has room, the cylinders are distinct and returned in
    /// ascending order. Otherwise they are drawn with replacement and
    /// returned in draw order.
    pub fn generate(&mut self, count: usize, disk_size: u32) -> Result<Vec<u32>> {
        if disk_size <= 1 {
            return Err(EngineError::InvalidGeometry { size: disk_size });
        }
        if count == 0 {
            return Err(EngineError::InvalidRequestCount { count });
        }

        let requests = if count > disk_size as usize {
            (0..count).map(|_| self.rng.random_range(0..disk_size)).collect()
        } else {
            let mut picked: Vec<u32> = index::sample(&mut self.rng, disk_size as usize, count)
                .into_iter()
                .map(|i| i as u32)
                .collect();
            picked.sort_unstable();
            picked
        };

        debug!(seed = self.seed, count, disk_size, "generated requests");
        Ok(requests)
    }
}
