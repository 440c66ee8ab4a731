// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-run request statistics.
//!
//! [`RunStats`] counts what happened to each request during one strategy
//! run: how many were placed, how many failed, and how the pool changed.
//! Byte counters saturate at `u64::MAX` instead of wrapping.

use free_list::Carve;
use placement::Outcome;

/// Cumulative counters for one strategy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RunStats {
    /// Requests replayed.
    pub requests: u64,
    /// Requests carved out of a block.
    pub placed: u64,
    /// Zero-size requests accepted without touching the pool.
    pub accepted: u64,
    /// Requests no block could hold.
    pub failed: u64,
    /// Requests of size 0, whatever their outcome.
    pub zero_size_requests: u64,
    /// Sum of all request sizes.
    pub bytes_requested: u64,
    /// Sum of the sizes of successful requests.
    pub bytes_allocated: u64,
    /// Sum of the sizes of failed requests.
    pub bytes_failed: u64,
    /// Placements that left a remainder in the block.
    pub blocks_split: u64,
    /// Placements that consumed a whole block.
    pub blocks_exhausted: u64,
}

impl RunStats {
    /// Records the outcome of one request.
    pub fn record(&mut self, size: u64, outcome: &Outcome) {
        self.requests += 1;
        self.bytes_requested = self.bytes_requested.saturating_add(size);
        if size == 0 {
            self.zero_size_requests += 1;
        }

        match outcome {
            Outcome::Placed { carve, .. } => {
                self.placed += 1;
                self.bytes_allocated = self.bytes_allocated.saturating_add(size);
                match carve {
                    Carve::Split { .. } => self.blocks_split += 1,
                    Carve::Exhausted => self.blocks_exhausted += 1,
                }
            }
            Outcome::Accepted => {
                self.accepted += 1;
            }
            Outcome::Failed => {
                self.failed += 1;
                self.bytes_failed = self.bytes_failed.saturating_add(size);
            }
        }
    }

    /// Fraction of requests that succeeded, in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` if no requests were replayed.
    pub fn success_ratio(&self) -> f64 {
        if self.requests == 0 {
            return 0.0;
        }
        (self.placed + self.accepted) as f64 / self.requests as f64
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Requests: {} total ({} placed, {} accepted, {} failed, {:.0}% success), \
             {} bytes requested, {} failed, {} splits, {} exhausted blocks",
            self.requests,
            self.placed,
            self.accepted,
            self.failed,
            self.success_ratio() * 100.0,
            self.bytes_requested,
            self.bytes_failed,
            self.blocks_split,
            self.blocks_exhausted,
        )
    }
}
