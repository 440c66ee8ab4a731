// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The closed set of placement strategies.

use crate::strategy::{BestFit, FirstFit, NextFit, PlacementStrategy, RandomFit, WorstFit};
use crate::PlacementError;
use std::fmt;
use std::str::FromStr;

/// Identifies one of the five placement strategies.
///
/// Matching on this enum is exhaustive: adding a strategy means updating
/// every `match`, never falling through a default arm.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    FirstFit,
    NextFit,
    BestFit,
    WorstFit,
    RandomFit,
}

impl StrategyKind {
    /// Every strategy, in benchmark order.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::FirstFit,
        StrategyKind::NextFit,
        StrategyKind::BestFit,
        StrategyKind::WorstFit,
        StrategyKind::RandomFit,
    ];

    /// Machine-friendly name, e.g. `"first-fit"`.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::FirstFit => "first-fit",
            StrategyKind::NextFit => "next-fit",
            StrategyKind::BestFit => "best-fit",
            StrategyKind::WorstFit => "worst-fit",
            StrategyKind::RandomFit => "random-fit",
        }
    }

    /// Report heading, e.g. `"First Fit"`.
    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::FirstFit => "First Fit",
            StrategyKind::NextFit => "Next Fit",
            StrategyKind::BestFit => "Best Fit",
            StrategyKind::WorstFit => "Worst Fit",
            StrategyKind::RandomFit => "Random Fit",
        }
    }

    /// Whether runs of this strategy can differ between processes.
    pub fn is_deterministic(self) -> bool {
        !matches!(self, StrategyKind::RandomFit)
    }

    /// Builds a fresh strategy instance.
    ///
    /// `seed` only affects [`RandomFit`]; `None` draws a seed from OS
    /// entropy.
    pub fn build(self, seed: Option<u64>) -> Box<dyn PlacementStrategy> {
        match self {
            StrategyKind::FirstFit => Box::new(FirstFit::new()),
            StrategyKind::NextFit => Box::new(NextFit::new()),
            StrategyKind::BestFit => Box::new(BestFit::new()),
            StrategyKind::WorstFit => Box::new(WorstFit::new()),
            StrategyKind::RandomFit => Box::new(match seed {
                Some(seed) => RandomFit::with_seed(seed),
                None => RandomFit::new(),
            }),
        }
    }

    /// Parses a comma-separated list such as `"first,best,random-fit"`.
    pub fn parse_list(s: &str) -> Result<Vec<StrategyKind>, PlacementError> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(StrategyKind::from_str)
            .collect()
    }
}

impl FromStr for StrategyKind {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalised.as_str() {
            "first-fit" | "first" | "ff" => Ok(StrategyKind::FirstFit),
            "next-fit" | "next" | "nf" => Ok(StrategyKind::NextFit),
            "best-fit" | "best" | "bf" => Ok(StrategyKind::BestFit),
            "worst-fit" | "worst" | "wf" => Ok(StrategyKind::WorstFit),
            "random-fit" | "random" | "rng-fit" | "rng" => Ok(StrategyKind::RandomFit),
            _ => Err(PlacementError::UnknownStrategy(s.trim().to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order() {
        let names: Vec<_> = StrategyKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec!["first-fit", "next-fit", "best-fit", "worst-fit", "random-fit"]
        );
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("first-fit".parse::<StrategyKind>().unwrap(), StrategyKind::FirstFit);
        assert_eq!("Next Fit".parse::<StrategyKind>().unwrap(), StrategyKind::NextFit);
        assert_eq!("best_fit".parse::<StrategyKind>().unwrap(), StrategyKind::BestFit);
        assert_eq!("WORST".parse::<StrategyKind>().unwrap(), StrategyKind::WorstFit);
        assert_eq!("rng".parse::<StrategyKind>().unwrap(), StrategyKind::RandomFit);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "buddy".parse::<StrategyKind>().unwrap_err();
        assert!(matches!(err, PlacementError::UnknownStrategy(ref s) if s == "buddy"));
    }

    #[test]
    fn test_parse_list() {
        let kinds = StrategyKind::parse_list("first, best ,random,").unwrap();
        assert_eq!(
            kinds,
            vec![StrategyKind::FirstFit, StrategyKind::BestFit, StrategyKind::RandomFit]
        );
        assert!(StrategyKind::parse_list("first,bogus").is_err());
    }

    #[test]
    fn test_label_and_display() {
        assert_eq!(StrategyKind::WorstFit.label(), "Worst Fit");
        assert_eq!(format!("{}", StrategyKind::RandomFit), "random-fit");
    }

    #[test]
    fn test_build_matches_kind() {
        for kind in StrategyKind::ALL {
            let s = kind.build(Some(1));
            assert_eq!(s.kind(), kind);
            assert_eq!(s.name(), kind.name());
        }
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&StrategyKind::BestFit).unwrap();
        assert_eq!(json, r#""best-fit""#);
        let back: StrategyKind = serde_json::from_str(r#""next-fit""#).unwrap();
        assert_eq!(back, StrategyKind::NextFit);
    }

    #[test]
    fn test_determinism_flag() {
        assert!(StrategyKind::FirstFit.is_deterministic());
        assert!(!StrategyKind::RandomFit.is_deterministic());
    }
}
