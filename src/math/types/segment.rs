// src/math/types/segment.rs

use crate::math::{
    types::{Point2D, Vector2DExt},
    utils::simple_geometry::{distance, midpoint},
};

/// A finite drawable edge `(x1,y1)-(x2,y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    pub fn midpoint(&self) -> Point2D {
        midpoint(self.start, self.end)
    }

    /// Unit direction from `start` to `end`, `None` for a zero-length segment.
    pub fn direction(&self, epsilon: f64) -> Option<Point2D> {
        (self.end - self.start).try_unit(epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_metrics() {
        let segment = Segment::new(Point2D::new(0.0, 0.0), Point2D::new(6.0, 8.0));
        assert_relative_eq!(segment.length(), 10.0);
        assert_eq!(segment.midpoint(), Point2D::new(3.0, 4.0));
        let dir = segment.direction(1e-12).unwrap();
        assert_relative_eq!(dir.x, 0.6);
        assert_relative_eq!(dir.y, 0.8);
    }

    #[test]
    fn test_zero_length_has_no_direction() {
        let p = Point2D::new(1.0, 1.0);
        assert!(Segment::new(p, p).direction(1e-12).is_none());
    }
}
