// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Parsing of block-size and request-size files.
//!
//! Both inputs use the same format: one size per line.
//!
//! ```text
//! # chunks.txt
//! 100
//! 500
//! 4K
//! 1M
//! ```
//!
//! - Leading and trailing whitespace is ignored.
//! - Blank lines and lines starting with `#` are skipped.
//! - A size is a plain byte count or a number with a binary suffix:
//!   `K`/`KB` (1024), `M`/`MB` (1024²), `G`/`GB` (1024³), `B` (1).
//!   Suffixes are case-insensitive.

use crate::BenchError;
use std::fs;
use std::path::Path;

/// Parses one size such as `"512"`, `"4K"` or `"1MB"`.
///
/// Returns a description of the problem on failure.
///
/// # Examples
/// ```
/// use fit_bench::input::parse_size;
///
/// assert_eq!(parse_size("512").unwrap(), 512);
/// assert_eq!(parse_size("4k").unwrap(), 4096);
/// assert_eq!(parse_size("1MB").unwrap(), 1024 * 1024);
/// assert!(parse_size("-3").is_err());
/// ```
pub fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty size".to_string());
    }

    let upper = s.to_uppercase();
    let (num_str, multiplier): (&str, u64) = if upper.ends_with("GB") {
        (&s[..s.len() - 2], 1024 * 1024 * 1024)
    } else if upper.ends_with('G') {
        (&s[..s.len() - 1], 1024 * 1024 * 1024)
    } else if upper.ends_with("MB") {
        (&s[..s.len() - 2], 1024 * 1024)
    } else if upper.ends_with('M') {
        (&s[..s.len() - 1], 1024 * 1024)
    } else if upper.ends_with("KB") {
        (&s[..s.len() - 2], 1024)
    } else if upper.ends_with('K') {
        (&s[..s.len() - 1], 1024)
    } else if upper.ends_with('B') {
        (&s[..s.len() - 1], 1)
    } else {
        (s, 1)
    };

    let value: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| "expected an unsigned number with an optional K, M or G suffix".to_string())?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| "size does not fit in 64 bits".to_string())
}

/// Parses a whole sizes description, preserving line order.
pub fn parse_sizes(text: &str) -> Result<Vec<u64>, BenchError> {
    let mut sizes = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let size = parse_size(line).map_err(|reason| BenchError::Parse {
            line: i + 1,
            content: line.to_string(),
            reason,
        })?;
        sizes.push(size);
    }
    Ok(sizes)
}

/// Reads and parses a sizes file.
pub fn read_sizes(path: &Path) -> Result<Vec<u64>, BenchError> {
    let text = fs::read_to_string(path).map_err(|source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sizes = parse_sizes(&text)?;
    tracing::debug!("read {} sizes from '{}'", sizes.len(), path.display());
    Ok(sizes)
}

/// Writes sizes one per line, in a form [`read_sizes`] accepts.
pub fn write_sizes(path: &Path, sizes: &[u64]) -> Result<(), BenchError> {
    let mut text = String::with_capacity(sizes.len() * 6);
    for size in sizes {
        text.push_str(&size.to_string());
        text.push('\n');
    }
    fs::write(path, text).map_err(|source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_size("0").unwrap(), 0);
        assert_eq!(parse_size(" 212 ").unwrap(), 212);
        assert_eq!(parse_size("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(parse_size("2K").unwrap(), 2048);
        assert_eq!(parse_size("2kb").unwrap(), 2048);
        assert_eq!(parse_size("3M").unwrap(), 3 * 1024 * 1024);
        assert_eq!(parse_size("1G").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_size("1gb").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_size("64B").unwrap(), 64);
        assert_eq!(parse_size("64 KB").unwrap(), 64 * 1024);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_size("").is_err());
        assert!(parse_size("abc").is_err());
        assert!(parse_size("-1").is_err());
        assert!(parse_size("1.5M").is_err());
        assert!(parse_size("K").is_err());
    }

    #[test]
    fn test_parse_overflow() {
        let err = parse_size("18446744073709551615K").unwrap_err();
        assert!(err.contains("64 bits"));
    }

    #[test]
    fn test_parse_sizes_skips_blank_and_comments() {
        let text = "# chunks\n100\n\n  500 \r\n# trailing comment\n200\n";
        assert_eq!(parse_sizes(text).unwrap(), vec![100, 500, 200]);
    }

    #[test]
    fn test_parse_sizes_empty() {
        assert!(parse_sizes("").unwrap().is_empty());
        assert!(parse_sizes("\n\n# nothing\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_sizes_reports_line() {
        let err = parse_sizes("10\n20\nthirty\n").unwrap_err();
        match err {
            BenchError::Parse { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "thirty");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_then_read() {
        let path = std::env::temp_dir().join(format!("fit-bench-input-{}.txt", std::process::id()));
        write_sizes(&path, &[1, 22, 333]).unwrap();
        assert_eq!(read_sizes(&path).unwrap(), vec![1, 22, 333]);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_sizes(Path::new("/nonexistent/fit-bench/sizes.txt")).unwrap_err();
        assert!(matches!(err, BenchError::Io { .. }));
    }
}
