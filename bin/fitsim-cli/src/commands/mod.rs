// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod generate;
pub mod inspect;
pub mod run;

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Verbosity maps to `warn` (default), `info` (`-v`), `debug` (`-vv`) and
/// `trace` (`-vvv`). `RUST_LOG` takes precedence when set. Logs go to
/// stderr so reports on stdout can be piped.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
