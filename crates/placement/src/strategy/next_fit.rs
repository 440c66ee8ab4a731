// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Next-fit placement.
//!
//! Like first-fit, but each search resumes just after the block used by the
//! previous placement and wraps to the head once. Spreads allocations across
//! the list instead of clustering them at the front, at the cost of not
//! always finding the earliest fit.
//!
//! # Cursor
//! The cursor is an index into the current list, owned by the strategy and
//! cleared by [`reset`](PlacementStrategy::reset). After a placement it
//! points at the block following the one used:
//!
//! - `Split` → `index + 1`
//! - `Exhausted` → `index` (the following block shifted down into it)
//!
//! A failed search visits every block and clears the cursor, so the next
//! search starts from the head. A cursor at or past the end of the list also
//! wraps to the head.

use crate::strategy::{carve_at, Outcome, PlacementStrategy};
use crate::{PlacementError, StrategyKind};
use free_list::{Carve, FreeList};

/// Resumes scanning after the last placement, wrapping once.
#[derive(Debug, Clone, Default)]
pub struct NextFit {
    cursor: Option<usize>,
}

impl NextFit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next search starts from, if any placement happened since
    /// the last reset.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}

impl PlacementStrategy for NextFit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::NextFit
    }

    fn attempt(&mut self, list: &mut FreeList, size: u64) -> Result<Outcome, PlacementError> {
        let len = list.len();
        if len == 0 {
            return Ok(Outcome::Failed);
        }

        let start = match self.cursor {
            Some(c) if c < len => c,
            _ => 0,
        };

        let found = (0..len)
            .map(|step| (start + step) % len)
            .find(|&i| list.get(i).is_some_and(|b| b.fits(size)));

        let Some(index) = found else {
            self.cursor = None;
            return Ok(Outcome::Failed);
        };

        let outcome = carve_at(list, index, size)?;
        if let Outcome::Placed { carve, .. } = outcome {
            self.cursor = Some(match carve {
                Carve::Split { .. } => index + 1,
                Carve::Exhausted => index,
            });
        }
        Ok(outcome)
    }

    fn reset(&mut self) {
        self.cursor = None;
    }
}
