use nalgebra::{Point2, Vector2};

/// Returns the unit vector pointing from `from` to `to`.
///
/// Coincident points have no direction; the zero vector is returned so that
/// perpendicular offsets built from it collapse onto the centerline instead of
/// producing NaN coordinates.
pub fn unit_direction(from: &Point2<f64>, to: &Point2<f64>) -> Vector2<f64> {
    let delta = to - from;
    delta.try_normalize(f64::EPSILON).unwrap_or_else(Vector2::zeros)
}

/// Rotates `v` by +90° in canvas coordinates.
pub fn perpendicular(v: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Shifts the segment `from → to` sideways by `offset` units.
///
/// Positive offsets move along [`perpendicular`] of the segment direction,
/// negative ones the other way.
pub fn offset_segment(
    from: &Point2<f64>,
    to: &Point2<f64>,
    offset: f64,
) -> (Point2<f64>, Point2<f64>) {
    let shift = perpendicular(&unit_direction(from, to)) * offset;
    (from + shift, to + shift)
}

/// Shortest distance from `p` to the closed segment `a → b`.
pub fn distance_to_segment(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= f64::EPSILON {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}
