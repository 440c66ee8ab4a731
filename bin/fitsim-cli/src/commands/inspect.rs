// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fitsim inspect` command: describe the inputs without running anything.

use anyhow::Context;
use fit_bench::input::read_sizes;
use free_list::FreeList;
use std::path::PathBuf;

pub fn execute(chunks: PathBuf, sizes: Option<PathBuf>) -> anyhow::Result<()> {
    let blocks = read_sizes(&chunks).with_context(|| format!("reading '{}'", chunks.display()))?;
    let pool: FreeList = blocks.iter().copied().collect();

    println!("  Pool ({})", chunks.display());
    println!("   Blocks:        {}", pool.len());
    println!("   Free bytes:    {:.0}", pool.total());
    println!("   Largest:       {}", pool.largest());
    println!(
        "   Zero-size:     {}",
        pool.iter().filter(|b| b.size == 0).count()
    );
    println!("   Fragmentation: {:.2}%", pool.fragmentation() * 100.0);
    println!();

    let Some(sizes) = sizes else {
        return Ok(());
    };

    let requests = read_sizes(&sizes).with_context(|| format!("reading '{}'", sizes.display()))?;
    let requested: f64 = requests.iter().map(|&r| r as f64).sum();
    let largest = pool.largest();

    println!("  Requests ({})", sizes.display());
    println!("   Count:         {}", requests.len());
    println!("   Bytes:         {requested:.0}");
    println!(
        "   Largest:       {}",
        requests.iter().copied().max().unwrap_or(0)
    );
    println!(
        "   Zero-size:     {}",
        requests.iter().filter(|&&r| r == 0).count()
    );
    println!(
        "   Never fit:     {} (larger than the largest block)",
        requests.iter().filter(|&&r| r > largest).count()
    );
    if pool.total() > 0.0 {
        println!(
            "   Demand/supply: {:.2}%",
            requested / pool.total() * 100.0
        );
    }
    println!();

    Ok(())
}
