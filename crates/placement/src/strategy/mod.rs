// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`PlacementStrategy`] trait and strategy implementations.

pub mod best_fit;
pub mod first_fit;
pub mod next_fit;
pub mod random_fit;
pub mod worst_fit;

pub use best_fit::BestFit;
pub use first_fit::FirstFit;
pub use next_fit::NextFit;
pub use random_fit::RandomFit;
pub use worst_fit::WorstFit;

use crate::{PlacementError, StrategyKind};
use free_list::{Carve, FreeList};

/// What happened to a single allocation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request was carved out of the block at `index`.
    Placed { index: usize, carve: Carve },
    /// The request succeeded without touching the pool (zero-size request
    /// under [`ZeroSizePolicy::Accept`](crate::ZeroSizePolicy::Accept)).
    Accepted,
    /// No block could hold the request. The pool is unchanged.
    Failed,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed)
    }
}

/// Trait for placement strategies.
///
/// Each call to [`attempt`](Self::attempt) services exactly one request:
/// on success exactly one block has been shrunk or removed, on failure the
/// list is untouched. Iterating over requests is the caller's job.
///
/// Strategies hold no reference to the pool. Any state they keep between
/// calls (the next-fit cursor) is cleared by [`reset`](Self::reset) when
/// the pool is rebuilt.
pub trait PlacementStrategy: Send {
    /// Which of the five strategies this is.
    fn kind(&self) -> StrategyKind;

    /// Human-readable name of this strategy.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Tries to place a request of `size` bytes.
    fn attempt(&mut self, list: &mut FreeList, size: u64) -> Result<Outcome, PlacementError>;

    /// Clears per-run state. Called after the pool is rebuilt.
    fn reset(&mut self) {}

    /// RNG seed, for strategies that make random choices.
    fn seed(&self) -> Option<u64> {
        None
    }
}

/// Carves `size` bytes from the chosen block.
pub(crate) fn carve_at(
    list: &mut FreeList,
    index: usize,
    size: u64,
) -> Result<Outcome, PlacementError> {
    let carve = list.carve(index, size)?;
    Ok(Outcome::Placed { index, carve })
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Replays `requests` and returns the failed request sizes.
    pub fn replay(
        strategy: &mut dyn PlacementStrategy,
        list: &mut FreeList,
        requests: &[u64],
    ) -> Vec<u64> {
        requests
            .iter()
            .copied()
            .filter(|&r| !strategy.attempt(list, r).unwrap().is_success())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_success() {
        assert!(Outcome::Accepted.is_success());
        assert!(Outcome::Placed {
            index: 0,
            carve: Carve::Exhausted
        }
        .is_success());
        assert!(!Outcome::Failed.is_success());
    }

    #[test]
    fn test_carve_at_reports_index() {
        let mut list = FreeList::from(vec![10, 20]);
        let out = carve_at(&mut list, 1, 5).unwrap();
        assert_eq!(
            out,
            Outcome::Placed {
                index: 1,
                carve: Carve::Split { remaining: 15 }
            }
        );
    }

    #[test]
    fn test_carve_at_propagates_integrity_error() {
        let mut list = FreeList::from(vec![10]);
        let err = carve_at(&mut list, 0, 11).unwrap_err();
        assert!(matches!(err, PlacementError::FreeList(_)));
    }
}
