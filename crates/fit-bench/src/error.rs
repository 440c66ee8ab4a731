// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the benchmark harness.

use std::path::PathBuf;

/// Errors that can occur while loading inputs or running a benchmark.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Reading or writing a sizes file failed.
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of a sizes file is not a valid size.
    #[error("line {line}: invalid size '{content}': {reason}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    /// A placement strategy reported an integrity violation, or a strategy
    /// or policy name was not recognised.
    #[error("placement error: {0}")]
    Placement(#[from] placement::PlacementError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
