// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! External fragmentation of a free list.
//!
//! ```text
//! fragmentation = 1 - largest / total
//! ```
//!
//! A value near 0 means almost all free space sits in one block; a value
//! near 1 means free space is scattered across many small blocks.
//!
//! # Empty pools
//! When no free space is left (`total == 0`) the metric is reported as
//! exactly `1.0`. This is a modelling convention inherited from the
//! benchmark's reporting format: it lumps "nothing left to fragment" together
//! with "maximally fragmented" and says nothing about the real layout.

use crate::FreeList;

/// Fragmentation of `list` in `[0.0, 1.0]`.
///
/// # Example
/// ```
/// use free_list::{fragmentation, FreeList};
///
/// let list = FreeList::from(vec![100, 300]);
/// assert!((fragmentation(&list) - 0.25).abs() < 1e-12);
///
/// assert_eq!(fragmentation(&FreeList::new()), 1.0);
/// ```
pub fn fragmentation(list: &FreeList) -> f64 {
    let total = list.total();
    if total <= 0.0 {
        return 1.0;
    }
    let ratio = 1.0 - list.largest() as f64 / total;
    ratio.clamp(0.0, 1.0)
}

impl FreeList {
    /// See [`fragmentation`].
    pub fn fragmentation(&self) -> f64 {
        fragmentation(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_one() {
        assert_eq!(fragmentation(&FreeList::new()), 1.0);
    }

    #[test]
    fn test_all_zero_blocks_is_one() {
        let list = FreeList::from(vec![0, 0, 0]);
        assert_eq!(list.fragmentation(), 1.0);
    }

    #[test]
    fn test_single_block_is_zero() {
        let list = FreeList::from(vec![4096]);
        assert_eq!(list.fragmentation(), 0.0);
    }

    #[test]
    fn test_formula() {
        let list = FreeList::from(vec![100, 176, 200, 300, 183]);
        let expected = 1.0 - 300.0 / 959.0;
        assert!((list.fragmentation() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_even_split() {
        let list = FreeList::from(vec![10; 10]);
        assert!((list.fragmentation() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_bounds() {
        for sizes in [vec![1], vec![1, 1], vec![5, 0, 5], vec![u64::MAX, 1]] {
            let f = FreeList::from(sizes).fragmentation();
            assert!((0.0..=1.0).contains(&f));
        }
    }
}
