// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # placement
//!
//! Placement heuristics that pick which free block serves an allocation
//! request.
//!
//! # Strategies
//!
//! | Strategy | Search | Picks | Per call |
//! |---|---|---|---|
//! | [`FirstFit`] | from head, early exit | first fit | O(n) worst case |
//! | [`NextFit`] | from cursor, wraps once | first fit after cursor | O(n) worst case |
//! | [`BestFit`] | full scan | smallest fit | O(n) |
//! | [`WorstFit`] | full scan | largest fit | O(n) |
//! | [`RandomFit`] | two passes | uniform among fits | O(n) |
//!
//! All strategies implement [`PlacementStrategy`] and are selected through
//! the closed [`StrategyKind`] enum. Strategies are purely algorithmic: they
//! own no pool, only the per-run state they need (next-fit's cursor,
//! random-fit's RNG), and they mutate the list solely through
//! [`FreeList::carve`](free_list::FreeList::carve).
//!
//! # Example
//! ```
//! use free_list::FreeList;
//! use placement::{place, Outcome, StrategyKind, ZeroSizePolicy};
//!
//! let mut list = FreeList::from(vec![100, 500, 200, 300, 600]);
//! let mut best = StrategyKind::BestFit.build(None);
//!
//! let out = place(best.as_mut(), &mut list, 212, ZeroSizePolicy::default()).unwrap();
//! assert!(matches!(out, Outcome::Placed { index: 3, .. }));
//! assert_eq!(list.sizes(), vec![100, 500, 200, 88, 600]);
//! ```

mod error;
mod kind;
mod policy;
pub mod strategy;

pub use error::PlacementError;
pub use kind::StrategyKind;
pub use policy::{place, ZeroSizePolicy};
pub use strategy::{
    BestFit, FirstFit, NextFit, Outcome, PlacementStrategy, RandomFit, WorstFit,
};
