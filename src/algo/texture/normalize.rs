//! Stroke-space normalization length.

use crate::stroke::Point;

use super::options::FitMethod;

/// Sum of the 3D segment lengths between consecutive points.
///
/// Returns 0 for strokes with fewer than two points.
pub fn stroke_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| (w[1].position - w[0].position).norm())
        .sum()
}

/// The divisor applied to every UV factor of a stroke.
///
/// Never zero: degenerate strokes (fewer than two points, or all points
/// coincident) normalize by 1.
pub fn normalization_length(points: &[Point], fit: FitMethod) -> f64 {
    match fit {
        FitMethod::ConstantLength => 1.0,
        FitMethod::FitStroke => {
            if points.len() < 2 {
                return 1.0;
            }
            let len = stroke_length(points);
            if len > 0.0 {
                len
            } else {
                1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn points(coords: &[[f64; 3]]) -> Vec<Point> {
        coords
            .iter()
            .map(|c| Point::new(Point3::new(c[0], c[1], c[2])))
            .collect()
    }

    #[test]
    fn test_arc_length_l_shape() {
        let pts = points(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]]);
        assert!((stroke_length(&pts) - 2.0).abs() < 1e-12);
        assert!((normalization_length(&pts, FitMethod::FitStroke) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_arc_length_3d() {
        let pts = points(&[[0.0, 0.0, 0.0], [1.0, 2.0, 2.0]]);
        assert!((stroke_length(&pts) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_length_is_one() {
        let pts = points(&[[0.0, 0.0, 0.0], [5.0, 0.0, 0.0], [5.0, 7.0, 1.0]]);
        assert_eq!(normalization_length(&pts, FitMethod::ConstantLength), 1.0);
        assert_eq!(normalization_length(&[], FitMethod::ConstantLength), 1.0);
    }

    #[test]
    fn test_degenerate_strokes_clamp_to_one() {
        assert_eq!(stroke_length(&[]), 0.0);
        assert_eq!(normalization_length(&[], FitMethod::FitStroke), 1.0);

        let single = points(&[[3.0, 3.0, 3.0]]);
        assert_eq!(normalization_length(&single, FitMethod::FitStroke), 1.0);

        let coincident = points(&[[1.0, 1.0, 0.0], [1.0, 1.0, 0.0]]);
        assert_eq!(normalization_length(&coincident, FitMethod::FitStroke), 1.0);
    }
}
