// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! First-fit placement.
//!
//! Scans from the head of the list and takes the first block large enough.
//! Cheap and deterministic, but repeated allocations pile up near the head
//! and leave a trail of small remainders there.

use crate::strategy::{carve_at, Outcome, PlacementStrategy};
use crate::{PlacementError, StrategyKind};
use free_list::FreeList;

/// Takes the first block with `size >= requested`.
#[derive(Debug, Clone, Default)]
pub struct FirstFit;

impl FirstFit {
    pub fn new() -> Self {
        Self
    }
}

impl PlacementStrategy for FirstFit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::FirstFit
    }

    fn attempt(&mut self, list: &mut FreeList, size: u64) -> Result<Outcome, PlacementError> {
        let first = list.candidates(size).next();
        match first {
            Some((index, _)) => carve_at(list, index, size),
            None => Ok(Outcome::Failed),
        }
    }
}
