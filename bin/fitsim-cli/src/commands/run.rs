// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fitsim run` command: replay the requests against each strategy.
//!
//! Loads the chunks and sizes files once, builds a single harness (so the
//! random-fit RNG is seeded once for the whole process) and prints one
//! result per strategy in the selected format.

use crate::{OutputFormat, RunArgs};
use anyhow::Context;
use fit_bench::{BenchConfig, Benchmark, Ranking, StrategyReport, Workload};
use placement::StrategyKind;
use std::io::IsTerminal;
use std::path::PathBuf;

pub fn execute(config_path: Option<PathBuf>, args: RunArgs) -> anyhow::Result<()> {
    let config = resolve_config(config_path, &args)?;

    let (Some(chunks), Some(sizes)) = (config.chunks.clone(), config.sizes.clone()) else {
        anyhow::bail!(
            "Usage: fitsim -c <chunks file> -s <sizes file> (or set `chunks` and `sizes` in --config)"
        );
    };

    let workload = Workload::load(&chunks, &sizes)
        .with_context(|| format!("loading '{}' and '{}'", chunks.display(), sizes.display()))?;
    tracing::info!("workload: {}", workload.summary());

    let mut bench = Benchmark::from_workload(workload, config.clone())?;
    let mut reports = Vec::with_capacity(config.strategies.len());

    if args.format == OutputFormat::Table {
        print_table_header();
    }

    for &kind in &config.strategies {
        let report = bench.run(kind)?;
        match args.format {
            OutputFormat::Text => print_text(&report),
            OutputFormat::Table => print_table_row(&report),
            OutputFormat::Json => {}
        }
        if args.dump_pool && args.format != OutputFormat::Json {
            print_pool(kind, &bench.pool().sizes());
        }
        reports.push(report);
    }

    match args.format {
        OutputFormat::Text => {}
        OutputFormat::Table => print_table_summary(&reports),
        OutputFormat::Json => {
            let out = serde_json::json!({
                "chunks": chunks,
                "sizes": sizes,
                "blocks": bench.blocks().len(),
                "requests": bench.requests().len(),
                "zero_size": bench.config().zero_size,
                "reports": reports,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

/// Config file first, then CLI overrides.
fn resolve_config(config_path: Option<PathBuf>, args: &RunArgs) -> anyhow::Result<BenchConfig> {
    let mut config = match config_path {
        Some(path) => BenchConfig::from_file(&path)?,
        None => BenchConfig::default(),
    };

    if let Some(list) = &args.strategies {
        config.strategies = StrategyKind::parse_list(list)?;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(policy) = args.zero_size {
        config.zero_size = policy;
    }
    if args.chunks.is_some() {
        config.chunks = args.chunks.clone();
    }
    if args.sizes.is_some() {
        config.sizes = args.sizes.clone();
    }

    config.validate()?;
    Ok(config)
}

fn print_text(report: &StrategyReport) {
    if std::io::stdout().is_terminal() {
        println!("\x1b[1m{}\x1b[0m", report.label());
    } else {
        println!("{}", report.label());
    }
    println!("Time taken: {:.6}s", report.duration_seconds());
    println!("Fragmentation: {:.2}%", report.fragmentation_percent());
    println!(
        "Bytes failed: {} ({:.2}%)",
        report.failed_bytes,
        report.failed_percent(),
    );
    if let Some(seed) = report.seed {
        println!("Seed: {seed}");
    }
    println!();
}

fn print_table_header() {
    println!(
        "  {:<12} {:>12} {:>10} {:>14} {:>9} {:>9} {:>8}",
        "Strategy", "Time (ms)", "Frag %", "Failed bytes", "Failed %", "Failed #", "Blocks",
    );
    println!("  {}", "-".repeat(80));
}

fn print_table_row(r: &StrategyReport) {
    println!(
        "  {:<12} {:>12.4} {:>9.2}% {:>14} {:>8.2}% {:>9} {:>8}",
        r.name(),
        r.duration_seconds() * 1000.0,
        r.fragmentation_percent(),
        r.failed_bytes,
        r.failed_percent(),
        r.stats.failed,
        r.remaining_blocks,
    );
}

fn print_table_summary(reports: &[StrategyReport]) {
    println!();
    let Some(rank) = Ranking::of(reports) else {
        println!("  No strategies were run.");
        return;
    };
    println!("  Summary:");
    println!(
        "   Fewest failed:    {} ({} bytes)",
        rank.fewest_failed.name(),
        rank.fewest_failed.failed_bytes,
    );
    println!(
        "   Least fragmented: {} ({:.2}%)",
        rank.least_fragmented.name(),
        rank.least_fragmented.fragmentation_percent(),
    );
    println!(
        "   Fastest:          {} ({:.4}ms)",
        rank.fastest.name(),
        rank.fastest.duration_seconds() * 1000.0,
    );
    println!();
}

fn print_pool(kind: StrategyKind, sizes: &[u64]) {
    println!("Remaining blocks after {} ({}):", kind.label(), sizes.len());
    for size in sizes {
        println!("{size}");
    }
    println!();
}
