//! Geometric math utilities: distances and circumcircles.

/// Coinciding points maximal distance (epsilon).
pub const VERTEX_DIST_EPSILON: f64 = 1e-14;

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Center of the circle through three points.
///
/// Returns `None` when the points are collinear (or coincide), i.e. when no
/// finite circle exists.
pub fn calc_circumcenter(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
) -> Option<(f64, f64)> {
    let d = 2.0 * (x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2));
    if d.abs() < VERTEX_DIST_EPSILON {
        return None;
    }
    let s1 = x1 * x1 + y1 * y1;
    let s2 = x2 * x2 + y2 * y2;
    let s3 = x3 * x3 + y3 * y3;
    let cx = (s1 * (y2 - y3) + s2 * (y3 - y1) + s3 * (y1 - y2)) / d;
    let cy = (s1 * (x3 - x2) + s2 * (x1 - x3) + s3 * (x2 - x1)) / d;
    Some((cx, cy))
}
