// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for free-list mutation.

/// Errors reported by [`FreeList::carve`](crate::FreeList::carve).
///
/// Placement strategies only carve blocks they have just inspected, so
/// either variant means a strategy picked an index it should not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FreeListError {
    /// The index does not name a block in the list.
    #[error("block index {index} out of range (list has {len} blocks)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The block is too small to satisfy the request.
    #[error("block {index} holds {available} bytes, cannot carve {requested}")]
    InsufficientSpace {
        index: usize,
        available: u64,
        requested: u64,
    },
}
