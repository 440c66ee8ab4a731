// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The ordered list of free blocks.
//!
//! [`FreeList`] is a contiguous `Vec<Block>` kept in input order. It is
//! mutated through exactly one operation, [`FreeList::carve`], which either
//! shrinks a block or removes it once it is exhausted. Every placement
//! strategy goes through `carve`, so the splice logic lives in one place.
//!
//! # Index stability
//! Removing a block shifts every later block down by one. Strategies that
//! remember positions across calls (next-fit) must account for this using
//! the returned [`Carve`] value.

use crate::{Block, FreeListError};
use std::fmt;

/// Result of a successful [`FreeList::carve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carve {
    /// The block was shrunk and is still in the list at the same index.
    Split { remaining: u64 },
    /// The request consumed the whole block and it was removed.
    Exhausted,
}

impl Carve {
    /// Bytes left in the carved block (0 when it was removed).
    pub fn remaining(&self) -> u64 {
        match self {
            Carve::Split { remaining } => *remaining,
            Carve::Exhausted => 0,
        }
    }
}

/// An ordered sequence of free blocks.
///
/// # Example
/// ```
/// use free_list::{Carve, FreeList};
///
/// let mut list = FreeList::from(vec![100, 500, 200]);
/// assert_eq!(list.largest(), 500);
///
/// assert_eq!(list.carve(1, 212).unwrap(), Carve::Split { remaining: 288 });
/// assert_eq!(list.carve(0, 100).unwrap(), Carve::Exhausted);
/// assert_eq!(list.sizes(), vec![288, 200]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FreeList {
    blocks: Vec<Block>,
}

impl FreeList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards all blocks and builds one block per size, preserving order.
    ///
    /// The backing allocation is reused, so rebuilding between strategy runs
    /// does not reallocate once the list has reached its largest size.
    pub fn rebuild(&mut self, sizes: &[u64]) {
        self.blocks.clear();
        self.blocks.extend(sizes.iter().copied().map(Block::new));
    }

    /// Sum of all block sizes.
    ///
    /// Accumulated in `f64` so very large pools cannot overflow.
    pub fn total(&self) -> f64 {
        self.blocks.iter().map(|b| b.size as f64).sum()
    }

    /// Size of the largest block, or 0 when the list is empty.
    pub fn largest(&self) -> u64 {
        self.blocks.iter().map(|b| b.size).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Current block sizes in list order.
    pub fn sizes(&self) -> Vec<u64> {
        self.blocks.iter().map(|b| b.size).collect()
    }

    /// Blocks able to hold `requested` bytes, as `(index, size)` pairs in
    /// list order.
    pub fn candidates(&self, requested: u64) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .filter(move |(_, b)| b.fits(requested))
            .map(|(i, b)| (i, b.size))
    }

    /// Takes `size` bytes out of the block at `index`.
    ///
    /// - If the block is larger than `size`, it shrinks in place.
    /// - If it is exactly `size`, it is removed from the list.
    /// - A zero-byte carve never mutates the list, so zero-size blocks stay
    ///   in place until the list is rebuilt.
    ///
    /// On error the list is unchanged.
    pub fn carve(&mut self, index: usize, size: u64) -> Result<Carve, FreeListError> {
        let len = self.blocks.len();
        let block = self
            .blocks
            .get_mut(index)
            .ok_or(FreeListError::IndexOutOfRange { index, len })?;

        if block.size < size {
            return Err(FreeListError::InsufficientSpace {
                index,
                available: block.size,
                requested: size,
            });
        }

        if size == 0 {
            return Ok(Carve::Split {
                remaining: block.size,
            });
        }

        if block.size == size {
            self.blocks.remove(index);
            Ok(Carve::Exhausted)
        } else {
            block.size -= size;
            Ok(Carve::Split {
                remaining: block.size,
            })
        }
    }

    /// Returns a one-line description for logs and CLI output.
    pub fn summary(&self) -> String {
        format!(
            "{} blocks, {:.0} bytes free, largest {} bytes",
            self.len(),
            self.total(),
            self.largest(),
        )
    }
}

impl From<Vec<u64>> for FreeList {
    fn from(sizes: Vec<u64>) -> Self {
        sizes.into_iter().collect()
    }
}

impl FromIterator<u64> for FreeList {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().map(Block::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FreeList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl fmt::Debug for FreeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.blocks.iter().map(|b| b.size))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_preserves_order() {
        let mut list = FreeList::from(vec![1, 2, 3]);
        list.rebuild(&[100, 500, 200, 300, 600]);
        assert_eq!(list.sizes(), vec![100, 500, 200, 300, 600]);
    }

    #[test]
    fn test_rebuild_discards_mutations() {
        let mut list = FreeList::new();
        list.rebuild(&[10, 20]);
        list.carve(0, 10).unwrap();
        list.carve(0, 5).unwrap();
        assert_eq!(list.sizes(), vec![15]);

        list.rebuild(&[10, 20]);
        assert_eq!(list.sizes(), vec![10, 20]);
    }

    #[test]
    fn test_rebuild_empty() {
        let mut list = FreeList::from(vec![4, 5]);
        list.rebuild(&[]);
        assert!(list.is_empty());
        assert_eq!(list.total(), 0.0);
        assert_eq!(list.largest(), 0);
    }

    #[test]
    fn test_total_and_largest() {
        let list = FreeList::from(vec![100, 500, 200, 300, 600]);
        assert_eq!(list.total(), 1700.0);
        assert_eq!(list.largest(), 600);
    }

    #[test]
    fn test_total_does_not_overflow() {
        let list = FreeList::from(vec![u64::MAX, u64::MAX]);
        assert!(list.total() > u64::MAX as f64);
    }

    #[test]
    fn test_carve_split() {
        let mut list = FreeList::from(vec![100, 500]);
        let c = list.carve(1, 212).unwrap();
        assert_eq!(c, Carve::Split { remaining: 288 });
        assert_eq!(c.remaining(), 288);
        assert_eq!(list.sizes(), vec![100, 288]);
    }

    #[test]
    fn test_carve_exhausts_and_shifts() {
        let mut list = FreeList::from(vec![100, 500, 200]);
        assert_eq!(list.carve(1, 500).unwrap(), Carve::Exhausted);
        assert_eq!(list.sizes(), vec![100, 200]);
        // The block after the removed one now sits at the same index.
        assert_eq!(list.get(1), Some(&Block::new(200)));
    }

    #[test]
    fn test_carve_zero_is_noop() {
        let mut list = FreeList::from(vec![0, 7]);
        assert_eq!(list.carve(0, 0).unwrap(), Carve::Split { remaining: 0 });
        assert_eq!(list.carve(1, 0).unwrap(), Carve::Split { remaining: 7 });
        assert_eq!(list.sizes(), vec![0, 7]);
    }

    #[test]
    fn test_carve_out_of_range() {
        let mut list = FreeList::from(vec![10]);
        let err = list.carve(3, 1).unwrap_err();
        assert_eq!(err, FreeListError::IndexOutOfRange { index: 3, len: 1 });
        assert_eq!(list.sizes(), vec![10]);
    }

    #[test]
    fn test_carve_insufficient() {
        let mut list = FreeList::from(vec![10]);
        let err = list.carve(0, 11).unwrap_err();
        assert!(matches!(err, FreeListError::InsufficientSpace { .. }));
        assert_eq!(list.sizes(), vec![10]);
    }

    #[test]
    fn test_candidates() {
        let list = FreeList::from(vec![50, 50, 200, 0, 300]);
        let c: Vec<_> = list.candidates(100).collect();
        assert_eq!(c, vec![(2, 200), (4, 300)]);
        assert_eq!(list.candidates(0).count(), 5);
        assert_eq!(list.candidates(1000).count(), 0);
    }

    #[test]
    fn test_debug_lists_sizes() {
        let list = FreeList::from(vec![3, 4]);
        assert_eq!(format!("{list:?}"), "[3, 4]");
    }

    #[test]
    fn test_summary() {
        let list = FreeList::from(vec![100, 400]);
        let s = list.summary();
        assert!(s.contains("2 blocks"));
        assert!(s.contains("500 bytes free"));
        assert!(s.contains("largest 400"));
    }
}
