// src/math/geometry/voronoi/direction.rs

use crate::math::{
    geometry::voronoi::bisector::{Bisector, CandidateRay},
    types::Point2D,
    utils::simple_geometry::distance,
};
use bevy::log::trace;
use serde::{Deserialize, Serialize};

/// How the orientation of a ray leaving the circumcenter is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DirectionStrategy {
    /// Pick the sign of `v` with `v · (p1 - other) > 0`, so that every point
    /// past the circumcenter is closer to the bisected pair than to `other`.
    #[default]
    HalfPlane,
    /// Probe a far point along `±v` and keep the direction where
    /// `distance(probe, other) - min(distance(probe, p1), distance(probe, p2))`
    /// is larger. Ties keep `+v`.
    FarPointScore,
}

/// Fixes the sign of each candidate ray.
#[derive(Debug, Clone)]
pub struct DirectionResolver {
    strategy: DirectionStrategy,
    probe_distance: f64,
}

impl DirectionResolver {
    /// # Arguments
    /// * `strategy` - The orientation test to apply.
    /// * `probe_distance` - Distance `T` of the probe point, only used by
    ///   [`DirectionStrategy::FarPointScore`].
    pub fn new(strategy: DirectionStrategy, probe_distance: f64) -> Self {
        Self {
            strategy,
            probe_distance,
        }
    }

    pub fn resolve(&self, candidate: &CandidateRay) -> Bisector {
        let direction = match self.strategy {
            DirectionStrategy::HalfPlane => {
                let side = candidate.direction.dot(candidate.p1 - candidate.other);
                if side >= 0.0 {
                    candidate.direction
                } else {
                    -candidate.direction
                }
            }
            DirectionStrategy::FarPointScore => {
                let forward = self.score(candidate, candidate.direction);
                let backward = self.score(candidate, -candidate.direction);
                trace!(
                    "Ray {:?}: score +v = {}, -v = {}",
                    candidate.pair, forward, backward
                );
                if backward > forward {
                    -candidate.direction
                } else {
                    candidate.direction
                }
            }
        };
        candidate.into_ray(direction)
    }

    /// Heuristic score of `direction` for the far-point strategy.
    pub fn score(&self, candidate: &CandidateRay, direction: Point2D) -> f64 {
        let probe = candidate.origin + direction * self.probe_distance;
        let nearest_pair = distance(probe, candidate.p1).min(distance(probe, candidate.p2));
        distance(probe, candidate.other) - nearest_pair
    }
}
