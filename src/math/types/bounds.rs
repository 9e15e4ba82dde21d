// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
///
/// Used as the drawing viewport `[0,W]×[0,H]` that every bisector is clipped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Default for Bounds2D {
    /// 600×600, the size of the drawing canvas.
    fn default() -> Self {
        Self {
            min: Point2D::ZERO,
            max: Point2D::new(600.0, 600.0),
        }
    }
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> MathResult<Self> {
        if !(min.x <= max.x && min.y <= max.y) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Viewport `[0,width]×[0,height]`.
    pub fn from_viewport(width: f64, height: f64) -> MathResult<Self> {
        let bounds = Self::new(Point2D::ZERO, Point2D::new(width, height))?;
        if !bounds.is_valid() || bounds.area() <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Viewport must have a positive finite size, got {width}x{height}"),
            });
        }
        Ok(bounds)
    }

    /// Prüft ob die Bounding Box gültig ist
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.is_finite()
            && self.max.is_finite()
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// The larger of width and height.
    pub fn max_dimension(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Fläche der Bounding Box
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Prüft ob ein Punkt innerhalb liegt, mit Toleranz auf allen Seiten
    pub fn contains(&self, point: Point2D, tolerance: f64) -> bool {
        point.x >= self.min.x - tolerance
            && point.x <= self.max.x + tolerance
            && point.y >= self.min.y - tolerance
            && point.y <= self.max.y + tolerance
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds2D(({}, {}) to ({}, {}))",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}
