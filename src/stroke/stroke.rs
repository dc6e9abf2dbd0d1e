//! Strokes and their fill texture state.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::point::Point;

/// Texture placement of a stroke's fill region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillUv {
    /// Fill texture rotation, in radians.
    pub rotation: f64,
    /// Fill texture translation.
    pub translation: Vector2<f64>,
    /// Uniform fill texture scale.
    pub scale: f64,
}

impl Default for FillUv {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            translation: Vector2::zeros(),
            scale: 1.0,
        }
    }
}

/// An ordered polyline with per-point and per-stroke texture attributes.
///
/// Point order is drawing order: it defines the arc length used for
/// normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Points in drawing order.
    pub points: Vec<Point>,
    /// Material slot of the owning object.
    #[serde(default)]
    pub material_index: usize,
    /// Fill texture state.
    #[serde(default)]
    pub fill: FillUv,
}

impl Stroke {
    /// Create a stroke from points using material slot 0.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            material_index: 0,
            fill: FillUv::default(),
        }
    }

    /// Set the material slot.
    pub fn with_material(mut self, material_index: usize) -> Self {
        self.material_index = material_index;
        self
    }

    /// Set the fill texture state.
    pub fn with_fill(mut self, fill: FillUv) -> Self {
        self.fill = fill;
        self
    }

    /// Number of points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Check if the stroke has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_fill_default_is_identity() {
        let fill = FillUv::default();
        assert_eq!(fill.rotation, 0.0);
        assert_eq!(fill.translation, Vector2::zeros());
        assert_eq!(fill.scale, 1.0);
    }

    #[test]
    fn test_stroke_accessors() {
        let stroke = Stroke::new(vec![
            Point::new(Point3::new(0.0, 0.0, 0.0)),
            Point::new(Point3::new(1.0, 0.0, 0.0)),
        ])
        .with_material(2);

        assert_eq!(stroke.num_points(), 2);
        assert!(!stroke.is_empty());
        assert_eq!(stroke.material_index, 2);
        assert!(Stroke::default().is_empty());
    }
}
