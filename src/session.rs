// src/session.rs

//! The collaborator-side state: exactly one site set and one segment set.
//!
//! Every site insertion recomputes the whole diagram; loads replace both sets
//! wholesale, and only after the input was read completely.

use crate::io::{
    batch::BatchBlock,
    diagnostic::Diagnostic,
    error::IoResult,
    files,
    record::DiagramRecord,
};
use crate::math::{
    error::MathResult,
    geometry::voronoi::{SiteSet, VoronoiBuilder, VoronoiConfig, VoronoiDiagram},
    types::{Point2D, Segment},
};
use bevy::log::{info, warn};
use bevy::prelude::Resource;
use std::path::Path;

#[derive(Resource, Debug, Clone)]
pub struct DiagramSession {
    builder: VoronoiBuilder,
    sites: SiteSet,
    segments: Vec<Segment>,
}

impl DiagramSession {
    pub fn new(config: VoronoiConfig) -> MathResult<Self> {
        Ok(Self {
            builder: VoronoiBuilder::new(config)?,
            sites: SiteSet::new(),
            segments: Vec::new(),
        })
    }

    pub fn builder(&self) -> &VoronoiBuilder {
        &self.builder
    }

    pub fn sites(&self) -> &SiteSet {
        &self.sites
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Adds a site and recomputes. A fourth site is rejected and nothing changes.
    pub fn insert_site(&mut self, site: Point2D) -> MathResult<&[Segment]> {
        if let Err(e) = self.sites.try_push(site) {
            warn!("Site {:?} rejected: {}", site, e);
            return Err(e);
        }
        self.recompute();
        Ok(&self.segments)
    }

    /// Replaces all sites and recomputes.
    pub fn set_sites(&mut self, points: &[Point2D]) -> MathResult<&[Segment]> {
        self.sites = SiteSet::from_points(points)?;
        self.recompute();
        Ok(&self.segments)
    }

    /// Shows one block of a test batch.
    pub fn load_batch_block(&mut self, block: &BatchBlock) -> MathResult<&[Segment]> {
        info!(
            "Batch block at line {}: {} sites",
            block.line,
            block.sites.len()
        );
        self.set_sites(&block.sites)
    }

    pub fn clear(&mut self) {
        self.sites.clear();
        self.segments.clear();
    }

    /// Full diagram for the current sites, freshly computed.
    pub fn compute(&self) -> VoronoiDiagram {
        self.builder.compute(&self.sites)
    }

    /// Canonical record of what is currently shown.
    pub fn record(&self) -> DiagramRecord {
        DiagramRecord::from_geometry(self.sites.as_slice(), &self.segments)
    }

    /// Shows a stored record as is: its edges are not recomputed.
    ///
    /// Parsed records never hold more than three sites; a record value built
    /// by hand with more is rejected and the current state is kept.
    pub fn load_record(&mut self, record: &DiagramRecord) -> MathResult<()> {
        let sites = SiteSet::from_points(&record.site_points()).inspect_err(|e| {
            warn!("Record rejected: {}", e);
        })?;
        self.sites = sites;
        self.segments = record.segments();
        Ok(())
    }

    /// Parses and loads a record; returns the diagnostics of skipped lines.
    pub fn load_record_str(&mut self, text: &str) -> MathResult<Vec<Diagnostic>> {
        let parsed = DiagramRecord::parse(text);
        for diagnostic in &parsed.diagnostics {
            warn!("Record input {}", diagnostic);
        }
        self.load_record(&parsed.record)?;
        Ok(parsed.diagnostics)
    }

    pub fn load_record_file(&mut self, path: &Path) -> IoResult<Vec<Diagnostic>> {
        let text = files::read_text(path)?;
        let diagnostics = self.load_record_str(&text)?;
        info!(
            "Loaded '{}': {} sites, {} segments",
            path.display(),
            self.sites.len(),
            self.segments.len()
        );
        Ok(diagnostics)
    }

    pub fn save_record_file(&self, path: &Path) -> IoResult<()> {
        files::write_text(path, &self.record().to_text())
    }

    fn recompute(&mut self) {
        self.segments = self.builder.compute(&self.sites).segments;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{diagnostic::DiagnosticKind, error::DiagramIoError, record::RecordPoint};
    use crate::math::error::MathError;

    fn session() -> DiagramSession {
        DiagramSession::new(VoronoiConfig::default()).unwrap()
    }

    #[test]
    fn test_insertions_recompute() {
        let mut session = session();
        assert!(session.insert_site(Point2D::new(100.0, 100.0)).unwrap().is_empty());
        assert_eq!(session.insert_site(Point2D::new(300.0, 100.0)).unwrap().len(), 1);
        assert_eq!(session.insert_site(Point2D::new(200.0, 300.0)).unwrap().len(), 3);
    }

    #[test]
    fn test_fourth_site_is_rejected_without_changes() {
        let mut session = session();
        session
            .set_sites(&[
                Point2D::new(100.0, 100.0),
                Point2D::new(300.0, 100.0),
                Point2D::new(200.0, 300.0),
            ])
            .unwrap();
        let before = session.record();

        let err = session.insert_site(Point2D::new(50.0, 50.0)).unwrap_err();
        assert_eq!(err, MathError::TooManySites { limit: 3, actual: 4 });
        assert_eq!(session.record(), before);
    }

    #[test]
    fn test_clear() {
        let mut session = session();
        session.insert_site(Point2D::new(1.0, 1.0)).unwrap();
        session.insert_site(Point2D::new(9.0, 9.0)).unwrap();
        session.clear();
        assert!(session.sites().is_empty());
        assert!(session.segments().is_empty());
        assert!(session.record().is_empty());
    }

    #[test]
    fn test_load_record_replaces_state() {
        let mut session = session();
        session.insert_site(Point2D::new(5.0, 5.0)).unwrap();

        let diagnostics = session
            .load_record_str("E 300 0 300 600\nP 400 300\nP 200 300\nbad line\n")
            .unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(session.sites().len(), 2);
        assert_eq!(session.segments().len(), 1);
        assert_eq!(
            session.record().to_text(),
            "P 200 300\nP 400 300\nE 300 0 300 600\n"
        );
    }

    #[test]
    fn test_load_record_with_four_sites_skips_extra_site() {
        let mut session = session();
        session.insert_site(Point2D::new(5.0, 5.0)).unwrap();

        let diagnostics = session
            .load_record_str("P 0 0\nP 1 1\nP 2 2\nP 3 3\nE 0 0 5 5\n")
            .unwrap();
        assert_eq!(
            diagnostics,
            vec![Diagnostic::new(4, DiagnosticKind::ExtraSite { limit: 3 })]
        );
        assert_eq!(session.sites().len(), 3);
        assert_eq!(session.segments().len(), 1);
        assert_eq!(
            session.record().to_text(),
            "P 0 0\nP 1 1\nP 2 2\nE 0 0 5 5\n"
        );
    }

    #[test]
    fn test_oversized_record_value_keeps_state() {
        let mut session = session();
        session.insert_site(Point2D::new(5.0, 5.0)).unwrap();
        let before = session.record();

        let record = DiagramRecord::new(
            (0..4).map(|i| RecordPoint::new(i, i)).collect(),
            Vec::new(),
        );
        let result = session.load_record(&record);
        assert!(matches!(result, Err(MathError::TooManySites { actual: 4, .. })));
        assert_eq!(session.record(), before);
    }

    #[test]
    fn test_save_then_load_file() {
        let dir = std::env::temp_dir().join(format!("trisite_session_{}", std::process::id()));
        files::create_dir_all(&dir).unwrap();
        let path = dir.join("diagram.txt");

        let mut original = session();
        original.insert_site(Point2D::new(3.0, 4.0)).unwrap();
        original.insert_site(Point2D::new(1.0, 2.0)).unwrap();
        original.save_record_file(&path).unwrap();

        let text = files::read_text(&path).unwrap();
        assert_eq!(text.lines().next(), Some("P 1 2"));

        let mut reloaded = session();
        assert!(reloaded.load_record_file(&path).unwrap().is_empty());
        assert_eq!(reloaded.record(), original.record());
        assert_eq!(reloaded.record().to_text(), text);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_leaves_state() {
        let mut session = session();
        session.insert_site(Point2D::new(5.0, 5.0)).unwrap();
        let result = session.load_record_file(Path::new("/nonexistent/record.txt"));
        assert!(matches!(result, Err(DiagramIoError::Io { .. })));
        assert_eq!(session.sites().len(), 1);
    }
}
