// src/math/geometry/voronoi/diagram.rs

use crate::math::{
    geometry::voronoi::bisector::Bisector,
    types::{Bounds2D, Point2D, Segment},
};

/// Ergebnis einer Berechnung: Sites, ungeclippte Bisektoren und sichtbare Segmente.
///
/// Built fresh on every recomputation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiDiagram {
    pub sites: Vec<Point2D>,
    /// Oriented lines and rays, before clipping.
    pub bisectors: Vec<Bisector>,
    /// Drawable output, clipped to `viewport`.
    pub segments: Vec<Segment>,
    /// Common origin of the rays for three sites in general position.
    pub circumcenter: Option<Point2D>,
    pub viewport: Bounds2D,
}

impl VoronoiDiagram {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }
}
