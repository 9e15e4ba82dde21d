// src/math/algorithms/clipping.rs

//! # Viewport Clipping Module
//!
//! This module turns the unbounded primitives of a Voronoi diagram (full lines
//! and rays) into finite segments inside an axis-aligned viewport.
//!
//! Two policies are supported:
//! - [`ClipPolicy::Exact`] solves `origin + t * dir` against the four viewport
//!   edges (parametric slab clipping) and keeps exactly the visible part.
//! - [`ClipPolicy::Extend`] draws past the viewport like a plain canvas: lines are pushed a
//!   fixed length out in both directions, rays are extrapolated along their
//!   dominant axis to the viewport edge.

use crate::math::{
    types::{Bounds2D, Point2D, Segment},
    utils::constants,
};
use serde::{Deserialize, Serialize};

/// Specifies how unbounded primitives are turned into finite segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClipPolicy {
    /// Exact intersection with the viewport rectangle.
    /// A primitive that misses the viewport yields no segment.
    #[default]
    Exact,
    /// Lines are extended by a fixed length in both directions; rays are
    /// extrapolated along their dominant axis to the viewport edge. The
    /// non-dominant coordinate may overshoot the viewport.
    Extend,
}

/// Clips lines and rays against a viewport.
#[derive(Debug, Clone)]
pub struct ViewportClipper {
    bounds: Bounds2D,
    policy: ClipPolicy,
    tolerance: f64, // Tolerance for boundary tests and minimal segment length
    extension_length: f64,
}

impl ViewportClipper {
    /// Creates a clipper for `bounds` with the exact policy.
    ///
    /// Default values:
    /// - `policy`: `ClipPolicy::Exact`
    /// - `tolerance`: `constants::EPSILON_VISUAL`
    /// - `extension_length`: twice the larger viewport dimension
    pub fn new(bounds: Bounds2D) -> Self {
        Self {
            bounds,
            policy: ClipPolicy::default(),
            tolerance: constants::EPSILON_VISUAL,
            extension_length: bounds.max_dimension() * 2.0,
        }
    }

    pub fn with_policy(mut self, policy: ClipPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the tolerance for floating-point comparisons. Must be non-negative.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Length a line is extended on each side under [`ClipPolicy::Extend`].
    pub fn with_extension_length(mut self, length: f64) -> Self {
        self.extension_length = length.max(0.0);
        self
    }

    /// Clips the infinite line through `point` with unit `direction`.
    ///
    /// # Returns
    /// The visible part of the line, or `None` if it misses the viewport.
    pub fn clip_line(&self, point: Point2D, direction: Point2D) -> Option<Segment> {
        let segment = match self.policy {
            ClipPolicy::Exact => {
                self.clip_parametric(point, direction, f64::NEG_INFINITY, f64::INFINITY)?
            }
            ClipPolicy::Extend => Segment::new(
                point - direction * self.extension_length,
                point + direction * self.extension_length,
            ),
        };
        self.accept(segment)
    }

    /// Clips the ray starting at `origin` with unit `direction`.
    ///
    /// # Returns
    /// The visible part of the ray, or `None` if it misses the viewport.
    pub fn clip_ray(&self, origin: Point2D, direction: Point2D) -> Option<Segment> {
        let segment = match self.policy {
            ClipPolicy::Exact => self.clip_parametric(origin, direction, 0.0, f64::INFINITY)?,
            ClipPolicy::Extend => self.extrapolate_dominant_axis(origin, direction)?,
        };
        self.accept(segment)
    }

    fn accept(&self, segment: Segment) -> Option<Segment> {
        let finite = segment.start.is_finite() && segment.end.is_finite();
        (finite && segment.length() >= self.tolerance).then_some(segment)
    }

    /// Parametric slab clipping of `origin + t * direction`, `t` restricted to
    /// `[t_enter, t_exit]`, against the viewport.
    fn clip_parametric(
        &self,
        origin: Point2D,
        direction: Point2D,
        mut t_enter: f64,
        mut t_exit: f64,
    ) -> Option<Segment> {
        let min = self.bounds.min;
        let max = self.bounds.max;
        // (p, q): the edge constraint is p * t <= q
        let constraints = [
            (-direction.x, origin.x - min.x),
            (direction.x, max.x - origin.x),
            (-direction.y, origin.y - min.y),
            (direction.y, max.y - origin.y),
        ];

        for (p, q) in constraints {
            if p == 0.0 {
                // Parallel to this edge: either fully inside the slab or never visible.
                if q < -self.tolerance {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t_enter = t_enter.max(t);
            } else {
                t_exit = t_exit.min(t);
            }
            if t_enter > t_exit {
                return None;
            }
        }

        if !t_enter.is_finite() || !t_exit.is_finite() {
            return None;
        }
        Some(Segment::new(
            origin + direction * t_enter,
            origin + direction * t_exit,
        ))
    }

    /// Extends `origin` along `direction` until the dominant coordinate reaches
    /// the viewport edge; the other coordinate follows the line equation and is
    /// not corrected if it leaves the viewport.
    fn extrapolate_dominant_axis(&self, origin: Point2D, direction: Point2D) -> Option<Segment> {
        let end = if direction.x.abs() > direction.y.abs() {
            let x_end = if direction.x > 0.0 {
                self.bounds.max.x
            } else {
                self.bounds.min.x
            };
            let y_end = origin.y + direction.y / direction.x * (x_end - origin.x);
            Point2D::new(x_end, y_end)
        } else {
            if direction.y == 0.0 {
                return None;
            }
            let y_end = if direction.y > 0.0 {
                self.bounds.max.y
            } else {
                self.bounds.min.y
            };
            let x_end = origin.x + direction.x / direction.y * (y_end - origin.y);
            Point2D::new(x_end, y_end)
        };
        Some(Segment::new(origin, end))
    }
}
