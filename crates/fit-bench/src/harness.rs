// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The benchmark harness.
//!
//! [`Benchmark`] owns the pool, the immutable input sequences and one
//! instance of every configured strategy. Each strategy run:
//!
//! 1. Rebuilds the pool from the original block sizes.
//! 2. Resets the strategy's per-run state (next-fit cursor).
//! 3. Replays every request in order, timing only the replay loop.
//! 4. Computes fragmentation of the final pool.
//! 5. Emits a [`StrategyReport`].
//!
//! Because the pool is rebuilt inside the harness before every run, no run
//! can observe another's mutations.
//!
//! Strategies are built once, in [`Benchmark::new`]. Random-fit's RNG is
//! therefore seeded once per harness and keeps its stream across runs.

use crate::report::failed_ratio;
use crate::{BenchConfig, BenchError, RunStats, StrategyReport, Workload};
use free_list::FreeList;
use placement::{place, PlacementStrategy, StrategyKind, ZeroSizePolicy};
use std::time::{Duration, Instant};

/// Replays a request sequence against every configured strategy.
///
/// # Example
/// ```
/// use fit_bench::{BenchConfig, Benchmark};
///
/// let mut bench = Benchmark::new(
///     vec![100, 500, 200, 300, 600],
///     vec![212, 417, 112, 426],
///     BenchConfig::default(),
/// )
/// .unwrap();
///
/// let reports = bench.run_all().unwrap();
/// assert_eq!(reports.len(), 5);
/// assert_eq!(reports[0].failed_bytes, 426); // first-fit
/// ```
pub struct Benchmark {
    blocks: Vec<u64>,
    requests: Vec<u64>,
    config: BenchConfig,
    pool: FreeList,
    strategies: Vec<Box<dyn PlacementStrategy>>,
}

impl Benchmark {
    /// Creates a harness over the given block and request sizes.
    pub fn new(
        blocks: Vec<u64>,
        requests: Vec<u64>,
        config: BenchConfig,
    ) -> Result<Self, BenchError> {
        config.validate()?;

        if blocks.is_empty() && !requests.is_empty() {
            tracing::warn!("pool has no blocks: every non-zero request will fail");
        }

        let strategies = config
            .strategies
            .iter()
            .map(|kind| kind.build(config.seed))
            .collect();

        tracing::info!(
            "benchmark created: {} blocks, {} requests, strategies {:?}, zero-size policy '{}'",
            blocks.len(),
            requests.len(),
            config.strategies.iter().map(|k| k.name()).collect::<Vec<_>>(),
            config.zero_size,
        );

        Ok(Self {
            pool: FreeList::new(),
            blocks,
            requests,
            config,
            strategies,
        })
    }

    /// Creates a harness over a loaded or generated workload.
    pub fn from_workload(workload: Workload, config: BenchConfig) -> Result<Self, BenchError> {
        Self::new(workload.blocks, workload.requests, config)
    }

    /// Runs every configured strategy in order.
    pub fn run_all(&mut self) -> Result<Vec<StrategyReport>, BenchError> {
        let kinds = self.config.strategies.clone();
        kinds.into_iter().map(|kind| self.run(kind)).collect()
    }

    /// Runs a single strategy against a freshly rebuilt pool.
    ///
    /// A strategy missing from the configuration is built on first use and
    /// kept for later runs.
    pub fn run(&mut self, kind: StrategyKind) -> Result<StrategyReport, BenchError> {
        let slot = match self.strategies.iter().position(|s| s.kind() == kind) {
            Some(i) => i,
            None => {
                self.strategies.push(kind.build(self.config.seed));
                self.strategies.len() - 1
            }
        };

        tracing::info!("running {}", kind.label());

        self.pool.rebuild(&self.blocks);
        tracing::debug!("pool rebuilt: {}", self.pool.summary());

        let strategy = self.strategies[slot].as_mut();
        strategy.reset();

        let (duration, stats) =
            replay(strategy, &mut self.pool, &self.requests, self.config.zero_size)?;

        let report = StrategyReport {
            strategy: kind,
            duration,
            fragmentation: self.pool.fragmentation(),
            failed_bytes: stats.bytes_failed,
            failed_ratio: failed_ratio(stats.bytes_failed, stats.bytes_requested),
            total_bytes: stats.bytes_requested,
            remaining_blocks: self.pool.len(),
            remaining_bytes: self.pool.total(),
            seed: strategy.seed(),
            stats,
        };

        tracing::debug!("{}", report.stats.summary());
        tracing::info!("{}", report.summary());
        Ok(report)
    }

    /// The pool as left by the most recent run.
    pub fn pool(&self) -> &FreeList {
        &self.pool
    }

    pub fn blocks(&self) -> &[u64] {
        &self.blocks
    }

    pub fn requests(&self) -> &[u64] {
        &self.requests
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }
}

impl std::fmt::Debug for Benchmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Benchmark")
            .field("blocks", &self.blocks.len())
            .field("requests", &self.requests.len())
            .field("strategies", &self.config.strategies)
            .field("zero_size", &self.config.zero_size)
            .finish()
    }
}

/// Replays `requests` through `strategy`, returning the loop's wall-clock
/// time and the per-request counters.
fn replay(
    strategy: &mut dyn PlacementStrategy,
    pool: &mut FreeList,
    requests: &[u64],
    policy: ZeroSizePolicy,
) -> Result<(Duration, RunStats), BenchError> {
    let mut stats = RunStats::default();
    let start = Instant::now();

    for &size in requests {
        let outcome = place(strategy, pool, size, policy)?;
        if !outcome.is_success() {
            tracing::trace!("{}: request of {size} bytes failed", strategy.name());
        }
        stats.record(size, &outcome);
    }

    Ok((start.elapsed(), stats))
}
