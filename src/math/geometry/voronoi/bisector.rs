// src/math/geometry/voronoi/bisector.rs

//! Perpendicular bisectors of up to three sites.
//!
//! - two sites: one unbounded line through the midpoint
//! - three collinear sites: two lines, one per consecutive pair in `(x, y)` order
//! - three sites in general position: the circumcenter plus one candidate ray
//!   per site pair, whose orientation is fixed by the direction resolver

use crate::math::{
    types::{Point2D, Vector2DExt},
    utils::{
        comparison::nearly_zero,
        constants,
        simple_geometry::{midpoint, signed_area_doubled},
    },
};
use bevy::log::{debug, warn};

/// An unbounded boundary between the cells of two sites.
///
/// `pair` holds the indices of the two sites in the input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bisector {
    /// Unbounded in both directions.
    Line {
        point: Point2D,
        direction: Point2D,
        pair: [usize; 2],
    },
    /// Unbounded in one direction, starting at `origin`.
    Ray {
        origin: Point2D,
        direction: Point2D,
        pair: [usize; 2],
    },
}

impl Bisector {
    /// The line's point or the ray's origin.
    pub fn anchor(&self) -> Point2D {
        match self {
            Bisector::Line { point, .. } => *point,
            Bisector::Ray { origin, .. } => *origin,
        }
    }

    /// Unit direction.
    pub fn direction(&self) -> Point2D {
        match self {
            Bisector::Line { direction, .. } | Bisector::Ray { direction, .. } => *direction,
        }
    }

    pub fn pair(&self) -> [usize; 2] {
        match self {
            Bisector::Line { pair, .. } | Bisector::Ray { pair, .. } => *pair,
        }
    }

    pub fn is_ray(&self) -> bool {
        matches!(self, Bisector::Ray { .. })
    }

    pub fn point_at(&self, t: f64) -> Point2D {
        self.anchor() + self.direction() * t
    }
}

/// A ray from the circumcenter along the bisector of `p1`/`p2` whose sign is
/// not decided yet. `direction` is one of the two unit candidates `±v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateRay {
    pub origin: Point2D,
    pub direction: Point2D,
    pub pair: [usize; 2],
    pub p1: Point2D,
    pub p2: Point2D,
    /// The site not in `pair`.
    pub other: Point2D,
}

impl CandidateRay {
    pub fn into_ray(self, direction: Point2D) -> Bisector {
        Bisector::Ray {
            origin: self.origin,
            direction,
            pair: self.pair,
        }
    }
}

/// Result of the construction step, before direction resolution and clipping.
#[derive(Debug, Clone, PartialEq)]
pub enum Construction {
    /// Fewer than two usable sites.
    Empty,
    /// Two sites, or three collinear sites.
    Lines(Vec<Bisector>),
    /// Three sites in general position.
    Rays {
        circumcenter: Point2D,
        candidates: Vec<CandidateRay>,
    },
}

impl Construction {
    pub fn circumcenter(&self) -> Option<Point2D> {
        match self {
            Construction::Rays { circumcenter, .. } => Some(*circumcenter),
            _ => None,
        }
    }
}

/// Circumcenter of `a`, `b`, `c` via the determinant formula.
///
/// Returns `None` when `|D| < epsilon` (collinear or coincident sites).
pub fn circumcenter(a: Point2D, b: Point2D, c: Point2D, epsilon: f64) -> Option<Point2D> {
    let d = signed_area_doubled(a, b, c);
    if !d.is_finite() || nearly_zero(d, epsilon) {
        return None;
    }

    let a_sq = a.length_squared();
    let b_sq = b.length_squared();
    let c_sq = c.length_squared();
    let ux = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
    let uy = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;
    Some(Point2D::new(ux, uy))
}

/// Builds the bisector primitives for a site list of length 0 to 3.
#[derive(Debug, Clone)]
pub struct BisectorConstructor {
    epsilon: f64,
}

impl Default for BisectorConstructor {
    fn default() -> Self {
        Self {
            epsilon: constants::EPSILON_EXACT,
        }
    }
}

impl BisectorConstructor {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.max(0.0),
        }
    }

    /// Perpendicular bisector line of `sites[pair[0]]` and `sites[pair[1]]`.
    ///
    /// Returns `None` for coincident sites.
    pub fn perpendicular_bisector(&self, a: Point2D, b: Point2D, pair: [usize; 2]) -> Option<Bisector> {
        let direction = (b - a).perpendicular().try_unit(self.epsilon)?;
        Some(Bisector::Line {
            point: midpoint(a, b),
            direction,
            pair,
        })
    }

    pub fn construct(&self, sites: &[Point2D]) -> Construction {
        match sites {
            [] | [_] => Construction::Empty,
            [a, b] => match self.perpendicular_bisector(*a, *b, [0, 1]) {
                Some(line) => Construction::Lines(vec![line]),
                None => {
                    warn!("Sites {:?} and {:?} coincide, no bisector", a, b);
                    Construction::Empty
                }
            },
            [a, b, c] => match circumcenter(*a, *b, *c, self.epsilon) {
                Some(center) => self.candidate_rays(sites, center),
                None => self.collinear_lines(sites),
            },
            _ => {
                warn!(
                    "Bisector construction supports at most {} sites, got {}",
                    constants::MAX_SITES,
                    sites.len()
                );
                Construction::Empty
            }
        }
    }

    /// Degenerate triangle: bisectors of consecutive pairs in `(x, y)` order.
    fn collinear_lines(&self, sites: &[Point2D]) -> Construction {
        let mut order: Vec<usize> = (0..sites.len()).collect();
        order.sort_by(|&i, &j| sites[i].lexicographic_cmp(&sites[j]));
        debug!("Collinear sites, bisecting sorted pairs {:?}", order);

        let lines: Vec<Bisector> = order
            .windows(2)
            .filter_map(|w| {
                let line = self.perpendicular_bisector(sites[w[0]], sites[w[1]], [w[0], w[1]]);
                if line.is_none() {
                    warn!("Sites {} and {} coincide, bisector omitted", w[0], w[1]);
                }
                line
            })
            .collect();

        if lines.is_empty() {
            Construction::Empty
        } else {
            Construction::Lines(lines)
        }
    }

    fn candidate_rays(&self, sites: &[Point2D], center: Point2D) -> Construction {
        const TRIPLETS: [[usize; 3]; 3] = [[0, 1, 2], [1, 2, 0], [2, 0, 1]];

        let candidates = TRIPLETS
            .iter()
            .filter_map(|&[i, j, k]| {
                let (p1, p2) = (sites[i], sites[j]);
                let Some(direction) = (p2 - p1).perpendicular().try_unit(self.epsilon) else {
                    warn!("Sites {} and {} coincide, ray omitted", i, j);
                    return None;
                };
                Some(CandidateRay {
                    origin: center,
                    direction,
                    pair: [i, j],
                    p1,
                    p2,
                    other: sites[k],
                })
            })
            .collect();

        Construction::Rays {
            circumcenter: center,
            candidates,
        }
    }
}
