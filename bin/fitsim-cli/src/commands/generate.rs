// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fitsim generate` command: write a synthetic workload to disk.

use fit_bench::workload::SyntheticSpec;
use fit_bench::Workload;
use std::path::PathBuf;

pub fn execute(
    chunks: PathBuf,
    sizes: PathBuf,
    spec: SyntheticSpec,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let workload = Workload::synthetic(spec, seed);
    workload.save(&chunks, &sizes)?;

    tracing::info!("generated workload with seed {seed}");
    println!(
        "Wrote {} to '{}' and '{}' (seed {seed})",
        workload.summary(),
        chunks.display(),
        sizes.display(),
    );
    Ok(())
}
