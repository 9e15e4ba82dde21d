// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod voronoi;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen,
// falls man nicht das gesamte `math::prelude` importieren möchte.
pub use self::voronoi::{
    Bisector, DirectionStrategy, SiteSet, VoronoiBuilder, VoronoiConfig, VoronoiDiagram,
};
