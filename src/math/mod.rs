// src/math/mod.rs
pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::clipping::{ClipPolicy, ViewportClipper},
        error::{MathError, MathResult},
        geometry::voronoi::{
            Bisector, DirectionStrategy, SiteSet, VoronoiBuilder, VoronoiConfig, VoronoiDiagram,
            compute,
        },
        types::*,
    };
}
