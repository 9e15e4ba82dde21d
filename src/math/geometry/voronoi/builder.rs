// src/math/geometry/voronoi/builder.rs

use crate::math::{
    algorithms::clipping::ViewportClipper,
    error::MathResult,
    geometry::voronoi::{
        bisector::{Bisector, BisectorConstructor, Construction},
        config::VoronoiConfig,
        diagram::VoronoiDiagram,
        direction::DirectionResolver,
        site_set::SiteSet,
    },
    types::{Bounds2D, Point2D},
};
use bevy::log::{debug, warn};

/// Berechnet das Voronoi-Diagramm von höchstens drei Sites.
/// Orchestriert die Schritte: Bisektor-Konstruktion, Richtungsauflösung
/// und Clipping auf den Viewport.
///
/// The builder holds configuration only; every call to [`VoronoiBuilder::compute`]
/// starts from scratch.
#[derive(Debug, Clone)]
pub struct VoronoiBuilder {
    config: VoronoiConfig,
    viewport: Bounds2D,
    constructor: BisectorConstructor,
    resolver: DirectionResolver,
    clipper: ViewportClipper,
}

impl VoronoiBuilder {
    pub fn new(config: VoronoiConfig) -> MathResult<Self> {
        config.validate()?; // Validiert die übergebene Konfiguration
        let viewport = config.viewport()?;
        let max_dimension = viewport.max_dimension();

        let constructor = BisectorConstructor::new(config.degeneracy_epsilon);
        let resolver = DirectionResolver::new(
            config.direction_strategy,
            config.far_point_factor * max_dimension,
        );
        let clipper = ViewportClipper::new(viewport)
            .with_policy(config.clip_policy)
            .with_tolerance(config.clip_epsilon)
            .with_extension_length(config.extension_factor * max_dimension);

        Ok(Self {
            config,
            viewport,
            constructor,
            resolver,
            clipper,
        })
    }

    pub fn config(&self) -> &VoronoiConfig {
        &self.config
    }

    pub fn viewport(&self) -> Bounds2D {
        self.viewport
    }

    /// Computes the diagram of `sites`.
    ///
    /// Degenerate bisectors (coincident sites) and bisectors that miss the
    /// viewport are left out; the rest of the diagram is still produced.
    pub fn compute(&self, sites: &SiteSet) -> VoronoiDiagram {
        let points = sites.as_slice();
        let construction = self.constructor.construct(points);
        let circumcenter = construction.circumcenter();

        let bisectors: Vec<Bisector> = match construction {
            Construction::Empty => Vec::new(),
            Construction::Lines(lines) => lines,
            Construction::Rays { candidates, .. } => candidates
                .iter()
                .map(|candidate| self.resolver.resolve(candidate))
                .collect(),
        };

        let segments = bisectors
            .iter()
            .filter_map(|bisector| {
                let segment = match *bisector {
                    Bisector::Line {
                        point, direction, ..
                    } => self.clipper.clip_line(point, direction),
                    Bisector::Ray {
                        origin, direction, ..
                    } => self.clipper.clip_ray(origin, direction),
                };
                if segment.is_none() {
                    debug!(
                        "Bisector of sites {:?} does not cross viewport {}",
                        bisector.pair(),
                        self.viewport
                    );
                }
                segment
            })
            .collect::<Vec<_>>();

        debug!(
            "Computed diagram: {} sites, {} bisectors, {} segments, circumcenter {:?}",
            points.len(),
            bisectors.len(),
            segments.len(),
            circumcenter
        );

        VoronoiDiagram {
            sites: points.to_vec(),
            bisectors,
            segments,
            circumcenter,
            viewport: self.viewport,
        }
    }

    /// Like [`VoronoiBuilder::compute`], for a plain point list.
    ///
    /// Fails with `MathError::TooManySites` for more than three points.
    pub fn compute_points(&self, points: &[Point2D]) -> MathResult<VoronoiDiagram> {
        let sites = SiteSet::from_points(points).inspect_err(|e| warn!("{}", e))?;
        Ok(self.compute(&sites))
    }
}

/// `compute(sites, viewport) -> diagram` for a `[0,width]×[0,height]` viewport
/// with the default strategies.
pub fn compute(sites: &[Point2D], width: f64, height: f64) -> MathResult<VoronoiDiagram> {
    VoronoiBuilder::new(VoronoiConfig::default().with_viewport(width, height))?
        .compute_points(sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{
        algorithms::clipping::ClipPolicy,
        error::MathError,
        geometry::voronoi::direction::DirectionStrategy,
    };
    use approx::assert_abs_diff_eq;

    fn builder() -> VoronoiBuilder {
        VoronoiBuilder::new(VoronoiConfig::default()).unwrap()
    }

    fn sites(points: &[(f64, f64)]) -> SiteSet {
        let points: Vec<Point2D> = points.iter().map(|&(x, y)| Point2D::new(x, y)).collect();
        SiteSet::from_points(&points).unwrap()
    }

    #[test]
    fn test_empty_and_single_site() {
        assert!(builder().compute(&SiteSet::new()).is_empty());
        let diagram = builder().compute(&sites(&[(100.0, 200.0)]));
        assert!(diagram.is_empty());
        assert_eq!(diagram.site_count(), 1);
        assert!(diagram.circumcenter.is_none());
    }

    #[test]
    fn test_two_sites_vertical_bisector() {
        let diagram = builder().compute(&sites(&[(0.0, 0.0), (10.0, 0.0)]));
        assert_eq!(diagram.segment_count(), 1);

        let segment = diagram.segments[0];
        assert_abs_diff_eq!(segment.midpoint().x, 5.0, epsilon = 1e-9);
        // clipped to [0,600]: midpoint of the visible part is at mid-height
        assert_abs_diff_eq!(segment.midpoint().y, 300.0, epsilon = 1e-9);
        assert_abs_diff_eq!(segment.direction(1e-12).unwrap().x, 0.0, epsilon = 1e-12);

        // the full line passes exactly through the midpoint of the sites
        let line = diagram.bisectors[0];
        assert_eq!(line.anchor(), Point2D::new(5.0, 0.0));
        let along = segment.direction(1e-12).unwrap();
        assert_abs_diff_eq!(
            (Point2D::new(5.0, 0.0) - segment.start).perp_dot(along),
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_coincident_sites_produce_no_segments() {
        let diagram = builder().compute(&sites(&[(42.0, 42.0), (42.0, 42.0)]));
        assert!(diagram.is_empty());
        assert!(diagram.bisectors.is_empty());
    }

    #[test]
    fn test_near_equilateral_triangle() {
        let diagram = builder().compute(&sites(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.66)]));
        let center = diagram.circumcenter.unwrap();
        assert_abs_diff_eq!(center.x, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center.y, 2.89, epsilon = 1e-2);

        assert_eq!(diagram.bisectors.len(), 3);
        for bisector in &diagram.bisectors {
            assert!(bisector.is_ray());
            assert_eq!(bisector.anchor(), center);
        }

        // pairwise separated by about 120 degrees
        let dirs: Vec<Point2D> = diagram.bisectors.iter().map(|b| b.direction()).collect();
        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            let angle = dirs[i].dot(dirs[j]).clamp(-1.0, 1.0).acos().to_degrees();
            assert_abs_diff_eq!(angle, 120.0, epsilon = 0.1);
        }

        // circumcenter is inside the viewport: every ray starts there
        assert_eq!(diagram.segment_count(), 3);
        for segment in &diagram.segments {
            assert_eq!(segment.start, center);
        }
    }

    #[test]
    fn test_triangle_inside_viewport_has_three_segments() {
        let diagram = builder().compute(&sites(&[(200.0, 200.0), (400.0, 220.0), (300.0, 400.0)]));
        let center = diagram.circumcenter.unwrap();
        assert_eq!(diagram.segment_count(), 3);
        for segment in &diagram.segments {
            assert_eq!(segment.start, center);
            assert!(diagram.viewport.contains(segment.end, 1e-9));
            let on_edge = segment.end.x.abs() < 1e-9
                || (segment.end.x - 600.0).abs() < 1e-9
                || segment.end.y.abs() < 1e-9
                || (segment.end.y - 600.0).abs() < 1e-9;
            assert!(on_edge, "{:?} does not end on the viewport edge", segment);
        }
    }

    #[test]
    fn test_collinear_sites_two_vertical_lines() {
        let diagram = builder().compute(&sites(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]));
        assert!(diagram.circumcenter.is_none());
        assert_eq!(diagram.bisectors.len(), 2);
        assert_eq!(diagram.bisectors[0].anchor(), Point2D::new(2.5, 0.0));
        assert_eq!(diagram.bisectors[1].anchor(), Point2D::new(7.5, 0.0));

        assert_eq!(diagram.segment_count(), 2);
        assert_abs_diff_eq!(diagram.segments[0].start.x, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(diagram.segments[1].start.x, 7.5, epsilon = 1e-12);
        for segment in &diagram.segments {
            assert_abs_diff_eq!(segment.start.x, segment.end.x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_extend_policy_reaches_past_viewport() {
        let builder = VoronoiBuilder::new(
            VoronoiConfig::default()
                .with_clip_policy(ClipPolicy::Extend)
                .with_direction_strategy(DirectionStrategy::FarPointScore),
        )
        .unwrap();
        let diagram = builder.compute(&sites(&[(100.0, 300.0), (300.0, 300.0)]));
        let segment = diagram.segments[0];
        // 2 * 600 in both directions from the midpoint
        assert_abs_diff_eq!(segment.start.y, 300.0 - 1200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(segment.end.y, 300.0 + 1200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(segment.start.x, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compute_points_rejects_four_sites() {
        let points = [Point2D::ZERO, Point2D::X, Point2D::Y, Point2D::ONE];
        assert!(matches!(
            builder().compute_points(&points),
            Err(MathError::TooManySites { limit: 3, actual: 4 })
        ));
    }

    #[test]
    fn test_free_compute_uses_viewport_size() {
        let diagram = compute(&[Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)], 100.0, 40.0).unwrap();
        assert_eq!(diagram.viewport.height(), 40.0);
        assert_abs_diff_eq!(diagram.segments[0].length(), 40.0, epsilon = 1e-9);
        assert!(compute(&[], 0.0, 40.0).is_err());
    }
}
