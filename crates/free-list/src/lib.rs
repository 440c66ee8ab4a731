// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # free-list
//!
//! The pool model shared by every placement strategy: an ordered list of
//! free blocks, tracked by size only.
//!
//! # Key Components
//!
//! - [`Block`] — one contiguous run of free memory.
//! - [`FreeList`] — the ordered block list. Rebuilt from the original block
//!   sizes before each strategy run; mutated only through
//!   [`FreeList::carve`].
//! - [`fragmentation`] — `1 - largest / total` over the current list.
//!
//! # Mutation Model
//!
//! ```text
//! strategy picks index i
//!       │
//!       ▼
//!   FreeList::carve(i, size)
//!       │
//!       ├── size <  block ──► Carve::Split { remaining }
//!       └── size == block ──► Carve::Exhausted  (block removed)
//! ```
//!
//! Blocks only shrink or disappear. There is no free/coalesce path.
//!
//! # Example
//! ```
//! use free_list::FreeList;
//!
//! let mut list = FreeList::new();
//! list.rebuild(&[100, 500, 200, 300, 600]);
//!
//! list.carve(1, 212).unwrap();
//! assert_eq!(list.sizes(), vec![100, 288, 200, 300, 600]);
//! assert_eq!(list.largest(), 600);
//! ```

mod block;
mod error;
mod fragmentation;
mod list;

pub use block::Block;
pub use error::FreeListError;
pub use fragmentation::fragmentation;
pub use list::{Carve, FreeList};
