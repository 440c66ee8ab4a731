// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Random-fit placement.
//!
//! Counts every block that can hold the request, then picks one of them
//! uniformly at random. Selection is by position among the candidates, not
//! by size.
//!
//! # Seeding
//! The RNG is seeded once, when the strategy is constructed, and is never
//! reseeded by [`reset`](PlacementStrategy::reset). A benchmark that builds
//! its strategies once per process therefore gets one random stream per
//! process. Without an explicit seed one is drawn from OS entropy; it is kept
//! so a surprising run can be reproduced with [`RandomFit::with_seed`].

use crate::strategy::{carve_at, Outcome, PlacementStrategy};
use crate::{PlacementError, StrategyKind};
use free_list::FreeList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks a uniformly random block among those with `size >= requested`.
#[derive(Debug, Clone)]
pub struct RandomFit {
    rng: StdRng,
    seed: u64,
}

impl RandomFit {
    /// Creates a strategy seeded from OS entropy.
    pub fn new() -> Self {
        let seed = rand::random();
        tracing::debug!("random-fit seeded from entropy: {seed}");
        Self::with_seed(seed)
    }

    /// Creates a strategy with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this strategy's RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomFit {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementStrategy for RandomFit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RandomFit
    }

    fn attempt(&mut self, list: &mut FreeList, size: u64) -> Result<Outcome, PlacementError> {
        let count = list.candidates(size).count();
        if count == 0 {
            return Ok(Outcome::Failed);
        }

        let pick = self.rng.gen_range(0..count);
        let chosen = list.candidates(size).nth(pick);
        match chosen {
            Some((index, _)) => carve_at(list, index, size),
            None => Ok(Outcome::Failed),
        }
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}
