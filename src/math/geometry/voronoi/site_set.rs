// src/math/geometry/voronoi/site_set.rs

use crate::math::{
    error::{MathError, MathResult},
    types::Point2D,
    utils::constants::MAX_SITES,
};

/// Ordered sequence of at most three sites.
///
/// Insertion order defines the indices `A, B, C` used by the bisector
/// constructor. A fourth insertion is rejected and leaves the set unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteSet {
    sites: Vec<Point2D>,
}

impl SiteSet {
    pub const CAPACITY: usize = MAX_SITES;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: &[Point2D]) -> MathResult<Self> {
        if points.len() > Self::CAPACITY {
            return Err(MathError::TooManySites {
                limit: Self::CAPACITY,
                actual: points.len(),
            });
        }
        let mut set = Self::new();
        for &point in points {
            set.try_push(point)?;
        }
        Ok(set)
    }

    /// Appends a site and returns its index.
    pub fn try_push(&mut self, site: Point2D) -> MathResult<usize> {
        if self.is_full() {
            return Err(MathError::TooManySites {
                limit: Self::CAPACITY,
                actual: self.sites.len() + 1,
            });
        }
        if !site.is_finite() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Site coordinates must be finite, got {:?}", site),
            });
        }
        self.sites.push(site);
        Ok(self.sites.len() - 1)
    }

    pub fn clear(&mut self) {
        self.sites.clear();
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.sites.len() >= Self::CAPACITY
    }

    pub fn as_slice(&self) -> &[Point2D] {
        &self.sites
    }
}

impl TryFrom<Vec<Point2D>> for SiteSet {
    type Error = MathError;

    fn try_from(points: Vec<Point2D>) -> MathResult<Self> {
        Self::from_points(&points)
    }
}
