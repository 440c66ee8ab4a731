// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fit-bench
//!
//! Benchmark harness comparing free-list placement strategies.
//!
//! The harness takes:
//! - the initial block sizes (one [`FreeList`](free_list::FreeList) is
//!   rebuilt from them before every run),
//! - the request sizes (replayed unchanged against every strategy),
//! - a [`BenchConfig`] choosing strategies, the random-fit seed and the
//!   zero-size policy,
//!
//! and produces one [`StrategyReport`] per strategy.
//!
//! # Run Lifecycle
//! ```text
//! for each strategy (first, next, best, worst, random):
//!     pool.rebuild(blocks) ──► strategy.reset()
//!         │
//!         ▼
//!     ┌── Instant::now() ──────────────────────────┐
//!     │  for size in requests: place(strategy, ..) │
//!     └── elapsed() ───────────────────────────────┘
//!         │
//!         ▼
//!     fragmentation(pool) ──► StrategyReport
//! ```
//!
//! # Example
//! ```
//! use fit_bench::{BenchConfig, Benchmark, Workload};
//! use fit_bench::workload::SyntheticSpec;
//!
//! let workload = Workload::synthetic(SyntheticSpec::default(), 7);
//! let config = BenchConfig { seed: Some(7), ..Default::default() };
//!
//! let mut bench = Benchmark::from_workload(workload, config).unwrap();
//! for report in bench.run_all().unwrap() {
//!     println!("{}", report.summary());
//! }
//! ```

mod config;
mod error;
mod harness;
pub mod input;
mod report;
mod stats;
pub mod workload;

pub use config::BenchConfig;
pub use error::BenchError;
pub use harness::Benchmark;
pub use report::{Ranking, StrategyReport};
pub use stats::RunStats;
pub use workload::Workload;
