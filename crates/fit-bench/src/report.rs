// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-strategy benchmark results.
//!
//! A [`StrategyReport`] is what one strategy run hands to the reporting
//! layer: elapsed replay time, final fragmentation, and how many requested
//! bytes could not be placed. [`Ranking`] picks the standout strategies out
//! of a set of reports.

use crate::RunStats;
use placement::StrategyKind;
use std::time::Duration;

/// Results of replaying the request sequence under one strategy.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StrategyReport {
    pub strategy: StrategyKind,
    /// Wall-clock time of the replay loop (pool rebuild excluded).
    pub duration: Duration,
    /// Fragmentation of the final pool, in `[0.0, 1.0]`.
    pub fragmentation: f64,
    /// Sum of the sizes of requests that could not be placed.
    pub failed_bytes: u64,
    /// `failed_bytes / total_bytes`, `0.0` when nothing was requested.
    pub failed_ratio: f64,
    /// Sum of all request sizes.
    pub total_bytes: u64,
    /// Blocks left in the pool after the run.
    pub remaining_blocks: usize,
    /// Free bytes left in the pool after the run.
    pub remaining_bytes: f64,
    /// Seed of the strategy's RNG, if it uses one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub stats: RunStats,
}

impl StrategyReport {
    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn label(&self) -> &'static str {
        self.strategy.label()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn fragmentation_percent(&self) -> f64 {
        self.fragmentation * 100.0
    }

    pub fn failed_percent(&self) -> f64 {
        self.failed_ratio * 100.0
    }

    /// Bytes successfully handed out.
    pub fn allocated_bytes(&self) -> u64 {
        self.stats.bytes_allocated
    }

    /// Returns a human-readable summary suitable for logs.
    pub fn summary(&self) -> String {
        format!(
            "{}: {:.6}s, fragmentation {:.2}%, {} bytes failed ({:.2}%), \
             {} blocks left",
            self.name(),
            self.duration_seconds(),
            self.fragmentation_percent(),
            self.failed_bytes,
            self.failed_percent(),
            self.remaining_blocks,
        )
    }
}

/// `failed / total`, defined as `0.0` when `total` is zero.
pub(crate) fn failed_ratio(failed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    failed as f64 / total as f64
}

/// The standout strategies among a set of reports.
///
/// Ties go to the report that comes first.
#[derive(Debug, Clone, Copy)]
pub struct Ranking<'a> {
    pub fewest_failed: &'a StrategyReport,
    pub least_fragmented: &'a StrategyReport,
    pub fastest: &'a StrategyReport,
}

impl<'a> Ranking<'a> {
    /// Returns `None` when `reports` is empty.
    pub fn of(reports: &'a [StrategyReport]) -> Option<Self> {
        let fewest_failed = reports.iter().min_by_key(|r| r.failed_bytes)?;
        let least_fragmented = reports
            .iter()
            .min_by(|a, b| a.fragmentation.total_cmp(&b.fragmentation))?;
        let fastest = reports.iter().min_by_key(|r| r.duration)?;
        Some(Self {
            fewest_failed,
            least_fragmented,
            fastest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(strategy: StrategyKind, ms: u64, frag: f64, failed: u64) -> StrategyReport {
        StrategyReport {
            strategy,
            duration: Duration::from_millis(ms),
            fragmentation: frag,
            failed_bytes: failed,
            failed_ratio: failed_ratio(failed, 1000),
            total_bytes: 1000,
            remaining_blocks: 3,
            remaining_bytes: 10.0,
            seed: None,
            stats: RunStats::default(),
        }
    }

    #[test]
    fn test_failed_ratio() {
        assert_eq!(failed_ratio(0, 0), 0.0);
        assert_eq!(failed_ratio(10, 0), 0.0);
        assert!((failed_ratio(25, 100) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_percentages() {
        let r = report(StrategyKind::FirstFit, 1500, 0.125, 250);
        assert!((r.duration_seconds() - 1.5).abs() < 1e-12);
        assert!((r.fragmentation_percent() - 12.5).abs() < 1e-9);
        assert!((r.failed_percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary() {
        let r = report(StrategyKind::BestFit, 2, 0.5, 100);
        let s = r.summary();
        assert!(s.starts_with("best-fit:"));
        assert!(s.contains("fragmentation 50.00%"));
        assert!(s.contains("100 bytes failed (10.00%)"));
    }

    #[test]
    fn test_ranking() {
        let reports = vec![
            report(StrategyKind::FirstFit, 5, 0.4, 300),
            report(StrategyKind::BestFit, 9, 0.1, 100),
            report(StrategyKind::WorstFit, 1, 0.7, 100),
        ];
        let rank = Ranking::of(&reports).unwrap();
        assert_eq!(rank.fewest_failed.strategy, StrategyKind::BestFit);
        assert_eq!(rank.least_fragmented.strategy, StrategyKind::BestFit);
        assert_eq!(rank.fastest.strategy, StrategyKind::WorstFit);
    }

    #[test]
    fn test_ranking_empty() {
        assert!(Ranking::of(&[]).is_none());
    }

    #[test]
    fn test_serialises_to_json() {
        let r = report(StrategyKind::RandomFit, 1, 0.0, 0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["strategy"], "random-fit");
        assert_eq!(json["failed_bytes"], 0);
        assert!(json.get("seed").is_none());
    }
}
