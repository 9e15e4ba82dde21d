// src/io/batch.rs

//! Reader for test-batch files.
//!
//! A batch file is a sequence of blocks. Each block starts with a site count
//! `n` followed by `n` lines `<x> <y>`; `n = 0` ends the file. Blank lines and
//! lines starting with `#` are ignored anywhere.

use crate::io::diagnostic::{Diagnostic, DiagnosticKind};
use crate::math::{types::Point2D, utils::constants::MAX_SITES};
use bevy::log::{debug, warn};

/// One accepted block of sites.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchBlock {
    /// 1-based line of the block's count.
    pub line: usize,
    pub sites: Vec<Point2D>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchParse {
    pub blocks: Vec<BatchBlock>,
    pub diagnostics: Vec<Diagnostic>,
    /// `true` if a `0` count ended the input.
    pub terminated: bool,
}

pub struct BatchReader;

impl BatchReader {
    pub fn parse(text: &str) -> BatchParse {
        let mut result = BatchParse::default();
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, raw)| (index + 1, raw.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        while let Some((count_line, line)) = lines.next() {
            let declared = match line.parse::<i64>() {
                Ok(0) => {
                    result.terminated = true;
                    break;
                }
                Ok(n) if n > 0 => n as usize,
                _ => {
                    result.diagnostics.push(Diagnostic::new(
                        count_line,
                        DiagnosticKind::InvalidCount(line.to_string()),
                    ));
                    continue;
                }
            };

            let mut sites = Vec::new();
            while sites.len() < declared {
                let Some((point_line, line)) = lines.next() else {
                    break;
                };
                match parse_site(line) {
                    Some(site) => sites.push(site),
                    None => result.diagnostics.push(Diagnostic::new(
                        point_line,
                        DiagnosticKind::InvalidPoint(line.to_string()),
                    )),
                }
            }

            if sites.len() < declared {
                result.diagnostics.push(Diagnostic::new(
                    count_line,
                    DiagnosticKind::TruncatedBlock {
                        declared,
                        read: sites.len(),
                    },
                ));
            }
            if sites.len() > MAX_SITES {
                result.diagnostics.push(Diagnostic::new(
                    count_line,
                    DiagnosticKind::TooManySites {
                        count: sites.len(),
                        limit: MAX_SITES,
                    },
                ));
                continue;
            }
            if !sites.is_empty() {
                result.blocks.push(BatchBlock {
                    line: count_line,
                    sites,
                });
            }
        }

        for diagnostic in &result.diagnostics {
            warn!("Batch input {}", diagnostic);
        }
        debug!(
            "Batch parsed: {} blocks, {} diagnostics, terminated: {}",
            result.blocks.len(),
            result.diagnostics.len(),
            result.terminated
        );
        result
    }
}

fn parse_site(line: &str) -> Option<Point2D> {
    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return None;
    };
    let point = Point2D::new(x.parse().ok()?, y.parse().ok()?);
    point.is_finite().then_some(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_until_zero() {
        let text = "\
# first case
2
10 20
30 40

3
0 0
# comment inside a block
5 0
10 0
0
1
99 99
";
        let parsed = BatchReader::parse(text);
        assert!(parsed.terminated);
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.blocks.len(), 2);
        assert_eq!(parsed.blocks[0].line, 2);
        assert_eq!(
            parsed.blocks[0].sites,
            vec![Point2D::new(10.0, 20.0), Point2D::new(30.0, 40.0)]
        );
        assert_eq!(parsed.blocks[1].sites.len(), 3);
        assert_eq!(parsed.blocks[1].sites[2], Point2D::new(10.0, 0.0));
    }

    #[test]
    fn test_oversized_block_is_skipped() {
        let text = "4\n0 0\n1 1\n2 2\n3 3\n1\n5 5\n";
        let parsed = BatchReader::parse(text);
        assert!(!parsed.terminated);
        assert_eq!(parsed.blocks.len(), 1);
        assert_eq!(parsed.blocks[0].sites, vec![Point2D::new(5.0, 5.0)]);
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::new(
                1,
                DiagnosticKind::TooManySites { count: 4, limit: 3 }
            )]
        );
    }

    #[test]
    fn test_malformed_lines_do_not_count() {
        let text = "two\n2\n1 2 3\n4 x\n1.5 2.5\n-3 4e1\n0\n";
        let parsed = BatchReader::parse(text);
        assert_eq!(parsed.blocks.len(), 1);
        assert_eq!(
            parsed.blocks[0].sites,
            vec![Point2D::new(1.5, 2.5), Point2D::new(-3.0, 40.0)]
        );
        let lines: Vec<usize> = parsed.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
        assert_eq!(
            parsed.diagnostics[0].kind,
            DiagnosticKind::InvalidCount("two".to_string())
        );
    }

    #[test]
    fn test_truncated_block_is_kept() {
        let parsed = BatchReader::parse("3\n1 1\n2 2\n");
        assert_eq!(parsed.blocks.len(), 1);
        assert_eq!(parsed.blocks[0].sites.len(), 2);
        assert_eq!(
            parsed.diagnostics[0].kind,
            DiagnosticKind::TruncatedBlock {
                declared: 3,
                read: 2
            }
        );
    }

    #[test]
    fn test_negative_count_is_reported() {
        let parsed = BatchReader::parse("-2\n1\n7 8\n");
        assert_eq!(parsed.blocks.len(), 1);
        assert_eq!(parsed.blocks[0].line, 2);
        assert_eq!(parsed.diagnostics.len(), 1);
    }
}
