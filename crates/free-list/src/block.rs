// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A single free block, tracked by size only.

use std::fmt;

/// A contiguous run of free memory.
///
/// No address is kept: blocks are never coalesced or reordered, so the
/// position in the [`FreeList`](crate::FreeList) is the only identity a
/// block needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Block {
    /// Free bytes in this block.
    pub size: u64,
}

impl Block {
    pub fn new(size: u64) -> Self {
        Self { size }
    }

    /// Whether this block can hold a request of `requested` bytes.
    #[inline]
    pub fn fits(&self, requested: u64) -> bool {
        self.size >= requested
    }
}

impl From<u64> for Block {
    fn from(size: u64) -> Self {
        Self { size }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B", self.size)
    }
}
