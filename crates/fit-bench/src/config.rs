// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmark configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! strategies = ["first-fit", "next-fit", "best-fit", "worst-fit", "random-fit"]
//! seed = 42
//! zero_size = "search"
//! chunks = "./data/chunks.txt"
//! sizes = "./data/sizes.txt"
//! ```
//!
//! Every key is optional; missing keys take the [`Default`] values.

use crate::BenchError;
use placement::{StrategyKind, ZeroSizePolicy};
use std::path::{Path, PathBuf};

/// Configuration for a benchmark run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Strategies to run, in order. Defaults to all five in benchmark order.
    pub strategies: Vec<StrategyKind>,
    /// Seed for random-fit. `None` draws one from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// How zero-size requests are treated.
    pub zero_size: ZeroSizePolicy,
    /// Path to the block-size ("chunks") file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<PathBuf>,
    /// Path to the request-size file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<PathBuf>,
}

impl BenchConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, BenchError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BenchError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, BenchError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| BenchError::Config(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, BenchError> {
        toml::to_string_pretty(self)
            .map_err(|e| BenchError::Config(format!("TOML serialise error: {e}")))
    }

    /// Checks that at least one strategy is selected and none repeats.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.strategies.is_empty() {
            return Err(BenchError::Config("no strategies selected".into()));
        }
        for (i, kind) in self.strategies.iter().enumerate() {
            if self.strategies[..i].contains(kind) {
                return Err(BenchError::Config(format!(
                    "strategy '{kind}' listed more than once"
                )));
            }
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            strategies: StrategyKind::ALL.to_vec(),
            seed: None,
            zero_size: ZeroSizePolicy::default(),
            chunks: None,
            sizes: None,
        }
    }
}
