// src/math/types/mod.rs
pub mod bounds;
pub mod segment;
pub mod vector;

pub use bounds::*;
pub use segment::*;
pub use vector::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::DVec2;

// Einheitlicher Punkttyp für das gesamte Modul (f64, da die Degenerationstests 1e-12 nutzen)
pub type Point2D = DVec2;
