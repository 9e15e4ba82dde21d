// src/math/geometry/voronoi/config.rs

use crate::math::{
    algorithms::clipping::ClipPolicy,
    error::{MathError, MathResult},
    geometry::voronoi::direction::DirectionStrategy,
    types::Bounds2D,
    utils::constants,
};
use serde::{Deserialize, Serialize};

/// Konfiguration für die Berechnung eines Voronoi-Diagramms mit höchstens drei Sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoronoiConfig {
    /// Breite des Viewports `[0,W]`.
    pub viewport_width: f64,
    /// Höhe des Viewports `[0,H]`.
    pub viewport_height: f64,
    /// Wie die Richtung der Strahlen vom Umkreismittelpunkt bestimmt wird.
    pub direction_strategy: DirectionStrategy,
    /// Wie Geraden und Strahlen auf den Viewport begrenzt werden.
    pub clip_policy: ClipPolicy,
    /// Toleranz für exakte Degenerationstests (zusammenfallende Sites, Kollinearität).
    pub degeneracy_epsilon: f64,
    /// Toleranz für visuelle Tests (Clipping, minimale Segmentlänge).
    pub clip_epsilon: f64,
    /// Probe distance of the far-point heuristic, as a multiple of the larger
    /// viewport dimension.
    pub far_point_factor: f64,
    /// Line extension under `ClipPolicy::Extend`, as a multiple of the larger
    /// viewport dimension.
    pub extension_factor: f64,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self {
            viewport_width: 600.0, // Größe der Zeichenfläche
            viewport_height: 600.0,
            direction_strategy: DirectionStrategy::default(),
            clip_policy: ClipPolicy::default(),
            degeneracy_epsilon: constants::EPSILON_EXACT,
            clip_epsilon: constants::EPSILON_VISUAL,
            far_point_factor: 10.0,
            extension_factor: 2.0,
        }
    }
}

impl VoronoiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn with_direction_strategy(mut self, strategy: DirectionStrategy) -> Self {
        self.direction_strategy = strategy;
        self
    }

    pub fn with_clip_policy(mut self, policy: ClipPolicy) -> Self {
        self.clip_policy = policy;
        self
    }

    pub fn with_degeneracy_epsilon(mut self, epsilon: f64) -> Self {
        self.degeneracy_epsilon = epsilon;
        self
    }

    pub fn with_clip_epsilon(mut self, epsilon: f64) -> Self {
        self.clip_epsilon = epsilon;
        self
    }

    pub fn with_far_point_factor(mut self, factor: f64) -> Self {
        self.far_point_factor = factor;
        self
    }

    pub fn with_extension_factor(mut self, factor: f64) -> Self {
        self.extension_factor = factor;
        self
    }

    /// Viewport `[0,W]×[0,H]`.
    pub fn viewport(&self) -> MathResult<Bounds2D> {
        Bounds2D::from_viewport(self.viewport_width, self.viewport_height)
    }

    pub fn validate(&self) -> MathResult<()> {
        self.viewport()?;

        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !positive(self.degeneracy_epsilon) || !positive(self.clip_epsilon) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Tolerances must be positive, got degeneracy {} and clip {}",
                    self.degeneracy_epsilon, self.clip_epsilon
                ),
            });
        }
        if !positive(self.far_point_factor) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Far point factor must be positive, got {}",
                    self.far_point_factor
                ),
            });
        }
        if !positive(self.extension_factor) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Extension factor must be positive, got {}",
                    self.extension_factor
                ),
            });
        }
        Ok(())
    }
}
