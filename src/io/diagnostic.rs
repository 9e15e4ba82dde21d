// src/io/diagnostic.rs

use std::fmt;
use thiserror::Error;

/// Why a single input line was skipped or a block rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    #[error("unknown record tag '{0}'")]
    UnknownTag(String),

    #[error("'{tag}' record expects {expected} fields, got {actual}")]
    WrongFieldCount {
        tag: char,
        expected: usize,
        actual: usize,
    },

    #[error("invalid coordinate '{0}'")]
    InvalidNumber(String),

    #[error("invalid site count '{0}'")]
    InvalidCount(String),

    #[error("invalid site line '{0}'")]
    InvalidPoint(String),

    #[error("block holds {count} sites, at most {limit} are supported; block skipped")]
    TooManySites { count: usize, limit: usize },

    #[error("record already holds {limit} sites; extra site skipped")]
    ExtraSite { limit: usize },

    #[error("block ended after {read} of {declared} sites")]
    TruncatedBlock { declared: usize, read: usize },
}

/// A problem found on one line of an input file. Parsing continues after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}
