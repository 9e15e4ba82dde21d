// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Tolerance for exact degeneracy checks (coincident sites, collinear triples).
    pub const EPSILON_EXACT: f64 = 1e-12;
    /// Tolerance for visual checks (clipping, segment lengths).
    pub const EPSILON_VISUAL: f64 = 1e-6;
    /// Maximale Anzahl an Sites, die der Konstruktor verarbeitet.
    pub const MAX_SITES: usize = 3;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64, epsilon: f64) -> bool {
        a.abs() < epsilon
    }
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use crate::math::types::Point2D;

    /// Euclidean distance `sqrt((ax-bx)^2 + (ay-by)^2)`.
    pub fn distance(a: Point2D, b: Point2D) -> f64 {
        (a.x - b.x).hypot(a.y - b.y)
    }

    /// Twice the signed area of the triangle `abc`:
    /// `2 * (ax(by-cy) + bx(cy-ay) + cx(ay-by))`.
    ///
    /// Zero (within tolerance) means the three points are collinear.
    pub fn signed_area_doubled(a: Point2D, b: Point2D, c: Point2D) -> f64 {
        2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y))
    }

    /// Mittelpunkt zweier Punkte
    pub fn midpoint(a: Point2D, b: Point2D) -> Point2D {
        (a + b) * 0.5
    }
}
