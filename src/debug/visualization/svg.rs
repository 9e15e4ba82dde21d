// src/debug/visualization/svg.rs

//! SVG-Ausgabe eines Diagramms: Rahmen, Voronoi-Segmente und Sites mit Koordinaten.

use crate::io::{
    error::{DiagramIoError, IoResult},
    record::RecordPoint,
};
use crate::math::{
    geometry::voronoi::VoronoiDiagram,
    types::{Bounds2D, Point2D, Segment},
};
use bevy::log::info;
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle, Line, Rectangle, Text};

const BACKGROUND: &str = "#202020";
const FRAME: &str = "gray";
const SITE: &str = "white";
const EDGE: &str = "#3060ff";
const CIRCUMCENTER: &str = "#ff9040";

/// Zeichnet Sites und Segmente im Viewport.
pub fn render_svg(sites: &[Point2D], segments: &[Segment], viewport: &Bounds2D) -> Document {
    let mut document = Document::new()
        .set("width", viewport.width())
        .set("height", viewport.height())
        .set(
            "viewBox",
            (viewport.min.x, viewport.min.y, viewport.width(), viewport.height()),
        )
        .add(
            Rectangle::new()
                .set("x", viewport.min.x)
                .set("y", viewport.min.y)
                .set("width", viewport.width())
                .set("height", viewport.height())
                .set("fill", BACKGROUND)
                .set("stroke", FRAME)
                .set("stroke-width", 2),
        );

    for segment in segments {
        document = document.add(
            Line::new()
                .set("x1", segment.start.x)
                .set("y1", segment.start.y)
                .set("x2", segment.end.x)
                .set("y2", segment.end.y)
                .set("stroke", EDGE)
                .set("stroke-width", 2),
        );
    }

    for site in sites {
        let label = RecordPoint::from_point(*site);
        document = document
            .add(
                Circle::new()
                    .set("cx", site.x)
                    .set("cy", site.y)
                    .set("r", 2)
                    .set("fill", SITE),
            )
            .add(
                Text::new(format!("({},{})", label.x, label.y))
                    .set("x", site.x + 5.0)
                    .set("y", site.y - 5.0)
                    .set("fill", SITE)
                    .set("font-family", "monospace")
                    .set("font-size", 12),
            );
    }

    document
}

/// Like [`render_svg`], plus a marker on the circumcenter when there is one.
pub fn render_diagram(diagram: &VoronoiDiagram) -> Document {
    let document = render_svg(&diagram.sites, &diagram.segments, &diagram.viewport);
    match diagram.circumcenter {
        Some(center) if diagram.viewport.contains(center, 0.0) => document.add(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", 3)
                .set("fill", "none")
                .set("stroke", CIRCUMCENTER),
        ),
        _ => document,
    }
}

pub fn save_svg(path: &Path, document: &Document) -> IoResult<()> {
    svg::save(path, document).map_err(|source| DiagramIoError::Io {
        action: "write SVG",
        path: path.to_path_buf(),
        source,
    })?;
    info!("SVG '{}' wurde erstellt.", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::voronoi::compute;

    #[test]
    fn test_render_contains_segments_and_labels() {
        let diagram = compute(
            &[
                Point2D::new(100.0, 100.0),
                Point2D::new(300.0, 100.0),
                Point2D::new(200.4, 299.6),
            ],
            600.0,
            600.0,
        )
        .unwrap();
        let svg = render_diagram(&diagram).to_string();

        assert_eq!(svg.matches("<line").count(), diagram.segment_count());
        assert!(svg.contains("(100,100)"));
        assert!(svg.contains("(200,300)"));
        // three sites plus the circumcenter marker
        assert_eq!(svg.matches("<circle").count(), 4);
    }

    #[test]
    fn test_empty_diagram_still_has_frame() {
        let viewport = Bounds2D::from_viewport(320.0, 240.0).unwrap();
        let svg = render_svg(&[], &[], &viewport).to_string();
        assert!(svg.contains("<rect"));
        assert!(!svg.contains("<line"));
    }
}
