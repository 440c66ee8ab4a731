// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fitsim
//!
//! Command-line interface for the free-list placement simulator.
//!
//! ## Usage
//! ```bash
//! # Compare all five strategies (the subcommand is optional)
//! fitsim -c chunks.txt -s sizes.txt
//!
//! # Pick strategies, fix the random-fit seed, print a table
//! fitsim run -c chunks.txt -s sizes.txt --strategies best,worst,random --seed 42 --format table
//!
//! # Describe the inputs without running anything
//! fitsim inspect -c chunks.txt -s sizes.txt
//!
//! # Write a synthetic workload
//! fitsim generate --chunks chunks.txt --sizes sizes.txt --blocks 1000 --requests 5000
//! ```

mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use placement::ZeroSizePolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fitsim",
    about = "Compare first/next/best/worst/random-fit placement on a simulated free list",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments take precedence).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the requests against every selected strategy (default).
    Run(RunArgs),

    /// Print statistics about the block and request files.
    Inspect {
        /// Block-size ("chunks") file, one size per line.
        #[arg(short, long)]
        chunks: PathBuf,

        /// Request-size file, one size per line.
        #[arg(short, long)]
        sizes: Option<PathBuf>,
    },

    /// Write a random workload as a chunks file and a sizes file.
    Generate {
        /// Output path for block sizes.
        #[arg(long)]
        chunks: PathBuf,

        /// Output path for request sizes.
        #[arg(long)]
        sizes: PathBuf,

        /// Number of free blocks.
        #[arg(long, default_value_t = 1000)]
        blocks: usize,

        /// Number of requests.
        #[arg(long, default_value_t = 1000)]
        requests: usize,

        /// Largest block size.
        #[arg(long, default_value_t = 4096)]
        max_block: u64,

        /// Largest request size.
        #[arg(long, default_value_t = 1024)]
        max_request: u64,

        /// Generator seed (random when omitted).
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    /// Block-size ("chunks") file, one size per line.
    #[arg(short, long)]
    pub chunks: Option<PathBuf>,

    /// Request-size file, one size per line.
    #[arg(short, long)]
    pub sizes: Option<PathBuf>,

    /// Strategies to run, comma-separated (e.g. "first,best,random-fit").
    #[arg(long)]
    pub strategies: Option<String>,

    /// Seed for random-fit (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Zero-size request handling: search, accept or reject.
    #[arg(long)]
    pub zero_size: Option<ZeroSizePolicy>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the remaining block sizes after each strategy.
    #[arg(long)]
    pub dump_pool: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One section per strategy.
    #[default]
    Text,
    /// Aligned comparison table with a summary.
    Table,
    /// Machine-readable JSON.
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Run(args)) => commands::run::execute(cli.config, args),
        None => commands::run::execute(cli.config, cli.run),
        Some(Commands::Inspect { chunks, sizes }) => commands::inspect::execute(chunks, sizes),
        Some(Commands::Generate {
            chunks,
            sizes,
            blocks,
            requests,
            max_block,
            max_request,
            seed,
        }) => commands::generate::execute(
            chunks,
            sizes,
            fit_bench::workload::SyntheticSpec {
                blocks,
                requests,
                max_block,
                max_request,
            },
            seed,
        ),
    }
}
