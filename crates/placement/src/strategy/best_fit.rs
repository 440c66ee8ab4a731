// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Best-fit placement.
//!
//! Scans the whole list and takes the smallest block that still fits,
//! leaving the smallest possible remainder. Ties go to the earliest block.
//! Tends to preserve large blocks but litters the list with slivers.

use crate::strategy::{carve_at, Outcome, PlacementStrategy};
use crate::{PlacementError, StrategyKind};
use free_list::FreeList;

/// Takes the smallest block with `size >= requested`.
#[derive(Debug, Clone, Default)]
pub struct BestFit;

impl BestFit {
    pub fn new() -> Self {
        Self
    }
}

impl PlacementStrategy for BestFit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BestFit
    }

    fn attempt(&mut self, list: &mut FreeList, size: u64) -> Result<Outcome, PlacementError> {
        // `min_by_key` keeps the first of several equal minima.
        let best = list.candidates(size).min_by_key(|&(_, block_size)| block_size);
        match best {
            Some((index, _)) => carve_at(list, index, size),
            None => Ok(Outcome::Failed),
        }
    }
}
