// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmark inputs: the initial block sizes and the request sequence.
//!
//! A [`Workload`] is either loaded from a pair of sizes files or generated
//! synthetically from a seed, which is handy for benchmarks and for
//! producing sample input files.

use crate::input::{read_sizes, write_sizes};
use crate::BenchError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// The two immutable sequences a benchmark replays.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Workload {
    /// Initial free block sizes, in pool order.
    pub blocks: Vec<u64>,
    /// Allocation request sizes, in replay order.
    pub requests: Vec<u64>,
}

/// Shape of a generated workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticSpec {
    pub blocks: usize,
    pub requests: usize,
    /// Block sizes are drawn uniformly from `1..=max_block`.
    pub max_block: u64,
    /// Request sizes are drawn uniformly from `1..=max_request`.
    pub max_request: u64,
}

impl Default for SyntheticSpec {
    fn default() -> Self {
        Self {
            blocks: 1000,
            requests: 1000,
            max_block: 4096,
            max_request: 1024,
        }
    }
}

impl Workload {
    pub fn new(blocks: Vec<u64>, requests: Vec<u64>) -> Self {
        Self { blocks, requests }
    }

    /// Loads block sizes from `chunks` and request sizes from `sizes`.
    pub fn load(chunks: &Path, sizes: &Path) -> Result<Self, BenchError> {
        let blocks = read_sizes(chunks)?;
        let requests = read_sizes(sizes)?;
        if blocks.is_empty() {
            tracing::warn!("chunks file '{}' has no blocks", chunks.display());
        }
        Ok(Self { blocks, requests })
    }

    /// Writes the workload as two sizes files.
    pub fn save(&self, chunks: &Path, sizes: &Path) -> Result<(), BenchError> {
        write_sizes(chunks, &self.blocks)?;
        write_sizes(sizes, &self.requests)
    }

    /// Generates a workload from `seed`. The same seed and spec always give
    /// the same workload.
    pub fn synthetic(spec: SyntheticSpec, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let max_block = spec.max_block.max(1);
        let max_request = spec.max_request.max(1);

        let blocks = (0..spec.blocks).map(|_| rng.gen_range(1..=max_block)).collect();
        let requests = (0..spec.requests)
            .map(|_| rng.gen_range(1..=max_request))
            .collect();
        Self { blocks, requests }
    }

    /// Sum of all block sizes.
    pub fn pool_bytes(&self) -> u64 {
        self.blocks.iter().fold(0u64, |acc, &b| acc.saturating_add(b))
    }

    /// Sum of all request sizes.
    pub fn requested_bytes(&self) -> u64 {
        self.requests.iter().fold(0u64, |acc, &r| acc.saturating_add(r))
    }

    /// Returns a one-line description.
    pub fn summary(&self) -> String {
        format!(
            "{} blocks ({} bytes), {} requests ({} bytes)",
            self.blocks.len(),
            self.pool_bytes(),
            self.requests.len(),
            self.requested_bytes(),
        )
    }
}
