// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for placement strategies.

/// Errors that can occur while selecting or running a strategy.
///
/// A request that no block can satisfy is *not* an error; it is reported as
/// [`Outcome::Failed`](crate::Outcome::Failed).
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    /// A strategy chose a block the free list refused to carve.
    #[error("free-list integrity error: {0}")]
    FreeList(#[from] free_list::FreeListError),

    /// The strategy name did not match any known strategy.
    #[error("unknown strategy '{0}'; expected one of: first-fit, next-fit, best-fit, worst-fit, random-fit")]
    UnknownStrategy(String),

    /// The zero-size policy name did not match any known policy.
    #[error("unknown zero-size policy '{0}'; expected one of: search, accept, reject")]
    UnknownPolicy(String),
}
