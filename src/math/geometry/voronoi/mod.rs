// src/math/geometry/voronoi/mod.rs

// Deklaration der Untermodule für Voronoi-spezifische Funktionalität
pub mod bisector;
pub mod builder;
pub mod config;
pub mod diagram;
pub mod direction;
pub mod site_set;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Voronoi-Elemente
pub use self::bisector::{Bisector, BisectorConstructor, CandidateRay, Construction, circumcenter};
pub use self::builder::{VoronoiBuilder, compute};
pub use self::config::VoronoiConfig;
pub use self::diagram::VoronoiDiagram;
pub use self::direction::{DirectionResolver, DirectionStrategy};
pub use self::site_set::SiteSet;
