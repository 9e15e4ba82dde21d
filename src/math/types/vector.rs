// src/math/types/vector.rs

use bevy::math::DVec2;
use std::cmp::Ordering;

/// Erweiterte Vektor-Operationen für Bevy's DVec2.
pub trait Vector2DExt {
    /// Left-hand rotation by 90°: `(x, y) -> (-y, x)`.
    fn perpendicular(&self) -> Self;

    /// Unit vector in the same direction, or `None` when `|v| < epsilon`.
    fn try_unit(&self, epsilon: f64) -> Option<Self>
    where
        Self: Sized;

    /// Total lexicographic order on `(x, y)`.
    fn lexicographic_cmp(&self, other: &Self) -> Ordering;
}

impl Vector2DExt for DVec2 {
    fn perpendicular(&self) -> Self {
        // DVec2::perp() ist bereits (-y, x)
        self.perp()
    }

    fn try_unit(&self, epsilon: f64) -> Option<Self> {
        let length = self.length();
        if !length.is_finite() || length < epsilon {
            return None;
        }
        Some(*self / length)
    }

    fn lexicographic_cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}
