// src/math/algorithms/mod.rs

// Deklaration der verschiedenen Algorithmus-Kategorien
pub mod clipping;

// Clipping
pub use self::clipping::{ClipPolicy, ViewportClipper};
