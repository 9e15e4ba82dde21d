// src/io/record.rs

//! # Diagram Record Codec
//!
//! Line-oriented text format for a diagram:
//!
//! ```text
//! P <x> <y>
//! E <x1> <y1> <x2> <y2>
//! ```
//!
//! Coordinates are rounded to the nearest integer, ties to even. A record holds
//! at most three sites; further `P` lines are skipped. The canonical form lists sites sorted by
//! `(x, y)`, then edges with `(x1, y1) <= (x2, y2)` sorted by `(x1, y1, x2, y2)`,
//! so equal diagrams always serialize to identical bytes.

use crate::io::diagnostic::{Diagnostic, DiagnosticKind};
use crate::math::{
    geometry::voronoi::VoronoiDiagram,
    types::{Point2D, Segment},
    utils::constants::MAX_SITES,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounds to the nearest integer, ties to even (`2.5 -> 2`, `3.5 -> 4`).
fn round_coordinate(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Parses one coordinate token. Values outside the `i64` range are rejected
/// instead of saturating.
fn parse_coordinate(field: &str) -> Option<i64> {
    let value = field.parse::<f64>().ok()?.round_ties_even();
    (value.is_finite() && value.abs() < i64::MAX as f64).then(|| value as i64)
}

/// Integer site `P x y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordPoint {
    pub x: i64,
    pub y: i64,
}

impl RecordPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn from_point(point: Point2D) -> Self {
        Self::new(round_coordinate(point.x), round_coordinate(point.y))
    }

    pub fn to_point(self) -> Point2D {
        Point2D::new(self.x as f64, self.y as f64)
    }
}

/// Integer segment `E x1 y1 x2 y2` with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordEdge {
    pub start: RecordPoint,
    pub end: RecordPoint,
}

impl RecordEdge {
    /// Orders the endpoints.
    pub fn new(a: RecordPoint, b: RecordPoint) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn from_segment(segment: &Segment) -> Self {
        Self::new(
            RecordPoint::from_point(segment.start),
            RecordPoint::from_point(segment.end),
        )
    }

    pub fn to_segment(self) -> Segment {
        Segment::new(self.start.to_point(), self.end.to_point())
    }
}

/// The persisted unit: site list plus segment list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramRecord {
    pub sites: Vec<RecordPoint>,
    pub edges: Vec<RecordEdge>,
}

/// Result of a tolerant parse: everything readable plus one diagnostic per skipped line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecord {
    pub record: DiagramRecord,
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagramRecord {
    /// Builds a canonical record.
    pub fn new(sites: Vec<RecordPoint>, edges: Vec<RecordEdge>) -> Self {
        let mut record = Self { sites, edges };
        record.canonicalize();
        record
    }

    /// Rounds and canonicalizes floating-point geometry.
    pub fn from_geometry(sites: &[Point2D], segments: &[Segment]) -> Self {
        Self::new(
            sites.iter().copied().map(RecordPoint::from_point).collect(),
            segments.iter().map(RecordEdge::from_segment).collect(),
        )
    }

    pub fn from_diagram(diagram: &VoronoiDiagram) -> Self {
        Self::from_geometry(&diagram.sites, &diagram.segments)
    }

    pub fn canonicalize(&mut self) {
        self.sites.sort();
        for edge in &mut self.edges {
            *edge = RecordEdge::new(edge.start, edge.end);
        }
        self.edges.sort();
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty() && self.edges.is_empty()
    }

    pub fn site_points(&self) -> Vec<Point2D> {
        self.sites.iter().map(|p| p.to_point()).collect()
    }

    pub fn segments(&self) -> Vec<Segment> {
        self.edges.iter().map(|e| e.to_segment()).collect()
    }

    /// Canonical text form, one record per line, each line `\n`-terminated.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Reads records in any order. Blank lines and `#` comments are ignored;
    /// malformed lines and `P` lines past the third site are skipped with a
    /// diagnostic.
    pub fn parse(text: &str) -> ParsedRecord {
        let mut sites = Vec::new();
        let mut edges = Vec::new();
        let mut diagnostics = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let result = match tokens[0] {
                "P" => parse_fields::<2>('P', &tokens[1..]).and_then(|[x, y]| {
                    if sites.len() >= MAX_SITES {
                        return Err(DiagnosticKind::ExtraSite { limit: MAX_SITES });
                    }
                    sites.push(RecordPoint::new(x, y));
                    Ok(())
                }),
                "E" => parse_fields::<4>('E', &tokens[1..]).map(|[x1, y1, x2, y2]| {
                    edges.push(RecordEdge::new(
                        RecordPoint::new(x1, y1),
                        RecordPoint::new(x2, y2),
                    ))
                }),
                tag => Err(DiagnosticKind::UnknownTag(tag.to_string())),
            };
            if let Err(kind) = result {
                diagnostics.push(Diagnostic::new(index + 1, kind));
            }
        }

        ParsedRecord {
            record: Self::new(sites, edges),
            diagnostics,
        }
    }
}

/// Parses exactly `N` numeric fields. Fractional values are rounded like saved coordinates.
fn parse_fields<const N: usize>(tag: char, fields: &[&str]) -> Result<[i64; N], DiagnosticKind> {
    if fields.len() != N {
        return Err(DiagnosticKind::WrongFieldCount {
            tag,
            expected: N,
            actual: fields.len(),
        });
    }
    let mut values = [0_i64; N];
    for (slot, field) in values.iter_mut().zip(fields) {
        *slot = parse_coordinate(field)
            .ok_or_else(|| DiagnosticKind::InvalidNumber(field.to_string()))?;
    }
    Ok(values)
}

impl fmt::Display for DiagramRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for site in &self.sites {
            writeln!(f, "P {} {}", site.x, site.y)?;
        }
        for edge in &self.edges {
            writeln!(
                f,
                "E {} {} {} {}",
                edge.start.x, edge.start.y, edge.end.x, edge.end.y
            )?;
        }
        Ok(())
    }
}
