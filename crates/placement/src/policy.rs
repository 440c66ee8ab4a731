// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Handling of zero-size requests.
//!
//! Under the plain `size >= requested` rule a zero-byte request fits every
//! block, including zero-size ones, and fails only on an empty pool. Whether
//! that is the right reading depends on what the input sizes model, so the
//! choice is a configuration knob rather than a hard-coded rule.

use crate::strategy::{Outcome, PlacementStrategy};
use crate::PlacementError;
use free_list::FreeList;
use std::fmt;
use std::str::FromStr;

/// What to do with a request of 0 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroSizePolicy {
    /// Run the strategy as for any other size: succeeds iff the pool has at
    /// least one block, never mutates it.
    #[default]
    Search,
    /// Always succeed without consulting the pool.
    Accept,
    /// Always count as a failed request (adds 0 failed bytes).
    Reject,
}

impl ZeroSizePolicy {
    pub fn name(self) -> &'static str {
        match self {
            ZeroSizePolicy::Search => "search",
            ZeroSizePolicy::Accept => "accept",
            ZeroSizePolicy::Reject => "reject",
        }
    }
}

impl FromStr for ZeroSizePolicy {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "search" => Ok(ZeroSizePolicy::Search),
            "accept" => Ok(ZeroSizePolicy::Accept),
            "reject" => Ok(ZeroSizePolicy::Reject),
            other => Err(PlacementError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for ZeroSizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Services one request through `strategy`, applying `policy` to
/// zero-size requests.
pub fn place(
    strategy: &mut dyn PlacementStrategy,
    list: &mut FreeList,
    size: u64,
    policy: ZeroSizePolicy,
) -> Result<Outcome, PlacementError> {
    if size == 0 {
        match policy {
            ZeroSizePolicy::Search => {}
            ZeroSizePolicy::Accept => return Ok(Outcome::Accepted),
            ZeroSizePolicy::Reject => return Ok(Outcome::Failed),
        }
    }
    strategy.attempt(list, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrategyKind;

    #[test]
    fn test_search_fails_only_on_empty_pool() {
        for kind in StrategyKind::ALL {
            let mut s = kind.build(Some(11));

            let mut list = FreeList::from(vec![0, 8]);
            let out = place(s.as_mut(), &mut list, 0, ZeroSizePolicy::Search).unwrap();
            assert!(out.is_success(), "{kind} failed a zero request");
            assert_eq!(list.sizes(), vec![0, 8]);

            let mut empty = FreeList::new();
            let out = place(s.as_mut(), &mut empty, 0, ZeroSizePolicy::Search).unwrap();
            assert_eq!(out, Outcome::Failed, "{kind} placed into an empty pool");
        }
    }

    #[test]
    fn test_accept_skips_pool() {
        let mut s = StrategyKind::FirstFit.build(None);
        let mut empty = FreeList::new();
        let out = place(s.as_mut(), &mut empty, 0, ZeroSizePolicy::Accept).unwrap();
        assert_eq!(out, Outcome::Accepted);
    }

    #[test]
    fn test_reject_fails() {
        let mut s = StrategyKind::BestFit.build(None);
        let mut list = FreeList::from(vec![10]);
        let out = place(s.as_mut(), &mut list, 0, ZeroSizePolicy::Reject).unwrap();
        assert_eq!(out, Outcome::Failed);
    }

    #[test]
    fn test_policy_ignored_for_nonzero() {
        let mut s = StrategyKind::FirstFit.build(None);
        let mut list = FreeList::from(vec![10]);
        let out = place(s.as_mut(), &mut list, 4, ZeroSizePolicy::Reject).unwrap();
        assert!(out.is_success());
        assert_eq!(list.sizes(), vec![6]);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Accept".parse::<ZeroSizePolicy>().unwrap(), ZeroSizePolicy::Accept);
        assert_eq!(ZeroSizePolicy::default().to_string(), "search");
        assert!("maybe".parse::<ZeroSizePolicy>().is_err());
    }
}
