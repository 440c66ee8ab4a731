// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Worst-fit placement.
//!
//! Scans the whole list and takes the largest block that fits, so the
//! remainder is as large as possible and more likely to serve later
//! requests. Breaks up big blocks quickly. Ties go to the earliest block.

use crate::strategy::{carve_at, Outcome, PlacementStrategy};
use crate::{PlacementError, StrategyKind};
use free_list::FreeList;

/// Takes the largest block with `size >= requested`.
#[derive(Debug, Clone, Default)]
pub struct WorstFit;

impl WorstFit {
    pub fn new() -> Self {
        Self
    }
}

impl PlacementStrategy for WorstFit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::WorstFit
    }

    fn attempt(&mut self, list: &mut FreeList, size: u64) -> Result<Outcome, PlacementError> {
        // `max_by_key` would keep the *last* maximum; only a strictly larger
        // block replaces the current pick.
        let worst = list
            .candidates(size)
            .fold(None, |worst: Option<(usize, u64)>, (index, block_size)| match worst {
                Some((_, w)) if w >= block_size => worst,
                _ => Some((index, block_size)),
            });
        match worst {
            Some((index, _)) => carve_at(list, index, size),
            None => Ok(Outcome::Failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use free_list::Carve;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_worst_fit_trace() {
        let mut list = FreeList::from(vec![100, 500, 200, 300, 600]);
        let mut s = WorstFit::new();

        // 212 → 600 (388), 417 → 500 (83), 112 → 388 (276), 426 → none.
        assert_eq!(
            s.attempt(&mut list, 212).unwrap(),
            Outcome::Placed { index: 4, carve: Carve::Split { remaining: 388 } }
        );
        assert_eq!(
            s.attempt(&mut list, 417).unwrap(),
            Outcome::Placed { index: 1, carve: Carve::Split { remaining: 83 } }
        );
        assert_eq!(
            s.attempt(&mut list, 112).unwrap(),
            Outcome::Placed { index: 4, carve: Carve::Split { remaining: 276 } }
        );
        assert_eq!(s.attempt(&mut list, 426).unwrap(), Outcome::Failed);
        assert_eq!(list.sizes(), vec![100, 83, 200, 300, 276]);
    }

    #[test]
    fn test_tie_goes_to_earliest() {
        let mut list = FreeList::from(vec![50, 400, 10, 400]);
        assert_eq!(
            WorstFit::new().attempt(&mut list, 100).unwrap(),
            Outcome::Placed { index: 1, carve: Carve::Split { remaining: 300 } }
        );
    }

    #[test]
    fn test_no_candidate_leaves_list_untouched() {
        let mut list = FreeList::from(vec![5, 6, 7]);
        assert_eq!(WorstFit::new().attempt(&mut list, 8).unwrap(), Outcome::Failed);
        assert_eq!(list.sizes(), vec![5, 6, 7]);
    }

    #[test]
    fn test_chosen_block_is_maximal_candidate() {
        let mut rng = StdRng::seed_from_u64(0x3057);
        let blocks: Vec<u64> = (0..64).map(|_| rng.gen_range(0..2048)).collect();
        let mut list = FreeList::from(blocks);
        let mut s = WorstFit::new();

        for _ in 0..256 {
            let size = rng.gen_range(1..512);
            let max_candidate = list.candidates(size).map(|(_, b)| b).max();
            let before = list.sizes();

            match s.attempt(&mut list, size).unwrap() {
                Outcome::Placed { index, .. } => {
                    assert_eq!(Some(before[index]), max_candidate);
                }
                Outcome::Failed => assert_eq!(max_candidate, None),
                Outcome::Accepted => unreachable!(),
            }
        }
    }
}
