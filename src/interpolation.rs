//! Bezier control points for curves through route vertices.
//!
//! Quadratic and cubic interpolation for short point runs, and the smoothed
//! cubic used for long runs: the tangent at each vertex follows the chord
//! between its neighbours, split in proportion to the adjacent segment
//! lengths (the same construction as AGG's `vcgen_smooth_poly1`).

use crate::basics::{PointD, PointI};
use crate::math::calc_distance;

/// Smoothing weight for main cubics between two interior vertices.
pub const SMOOTH_INTERNAL_VALUE: f64 = 1.0;
/// Smoothing weight for the lead-in and lead-out at the open ends of a spline.
pub const SMOOTH_EXTERNAL_VALUE: f64 = 0.5;

/// Two control points of a cubic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPair {
    pub c0: PointD,
    pub c1: PointD,
}

impl ControlPair {
    pub fn new(c0: PointD, c1: PointD) -> Self {
        Self { c0, c1 }
    }
}

/// Control point of the quadratic Bezier from `p0` to `p2` that passes
/// through `p1` at `t = 0.5`: `c = 2·p1 - (p0 + p2) / 2`.
pub fn quad_control(p0: PointI, p1: PointI, p2: PointI) -> PointD {
    let (p0, p1, p2) = (PointD::from(p0), PointD::from(p1), PointD::from(p2));
    PointD::new(
        2.0 * p1.x - 0.5 * (p0.x + p2.x),
        2.0 * p1.y - 0.5 * (p0.y + p2.y),
    )
}

/// Control points of the cubic Bezier from `p0` to `p3` that passes through
/// `p1` at `t = 1/3` and `p2` at `t = 2/3`.
pub fn cubic_control(p0: PointI, p1: PointI, p2: PointI, p3: PointI) -> ControlPair {
    let (p0, p1, p2, p3) = (
        PointD::from(p0),
        PointD::from(p1),
        PointD::from(p2),
        PointD::from(p3),
    );
    ControlPair::new(
        PointD::new(
            (-5.0 * p0.x + 18.0 * p1.x - 9.0 * p2.x + 2.0 * p3.x) / 6.0,
            (-5.0 * p0.y + 18.0 * p1.y - 9.0 * p2.y + 2.0 * p3.y) / 6.0,
        ),
        PointD::new(
            (2.0 * p0.x - 9.0 * p1.x + 18.0 * p2.x - 5.0 * p3.x) / 6.0,
            (2.0 * p0.y - 9.0 * p1.y + 18.0 * p2.y - 5.0 * p3.y) / 6.0,
        ),
    )
}

// Share of the chord taken by the first of two adjacent segments.
#[inline]
fn split_ratio(d1: f64, d2: f64) -> f64 {
    let total = d1 + d2;
    if total == 0.0 {
        0.5
    } else {
        d1 / total
    }
}

/// Control points of the smoothed cubic from `p1` to `p2`.
///
/// The entry tangent at `p1` is parallel to the chord `p2 - p0`, the exit
/// tangent at `p2` to the chord `p3 - p1`. Each tangent is scaled by
/// `weight` (in `(0, 1]`) and by the share of its chord that falls on the
/// `p1-p2` side of the vertex.
pub fn smooth_cubic_control(
    p0: PointI,
    p1: PointI,
    p2: PointI,
    p3: PointI,
    weight: f64,
) -> ControlPair {
    let (p0, p1, p2, p3) = (
        PointD::from(p0),
        PointD::from(p1),
        PointD::from(p2),
        PointD::from(p3),
    );
    let smooth = weight * 0.5;

    let d01 = calc_distance(p0.x, p0.y, p1.x, p1.y);
    let d12 = calc_distance(p1.x, p1.y, p2.x, p2.y);
    let d23 = calc_distance(p2.x, p2.y, p3.x, p3.y);

    let k1 = split_ratio(d01, d12);
    let k2 = split_ratio(d12, d23);

    let xm1 = p0.x + (p2.x - p0.x) * k1;
    let ym1 = p0.y + (p2.y - p0.y) * k1;
    let xm2 = p1.x + (p3.x - p1.x) * k2;
    let ym2 = p1.y + (p3.y - p1.y) * k2;

    ControlPair::new(
        PointD::new(p1.x + smooth * (p2.x - xm1), p1.y + smooth * (p2.y - ym1)),
        PointD::new(p2.x + smooth * (p1.x - xm2), p2.y + smooth * (p1.y - ym2)),
    )
}

/// Reflect `c` through `center`.
#[inline]
pub fn reflect(c: PointD, center: PointI) -> PointD {
    let center = PointD::from(center);
    PointD::new(center.x - (c.x - center.x), center.y - (c.y - center.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn pt(x: i32, y: i32) -> PointI {
        PointI::new(x, y)
    }

    fn assert_point(p: PointD, x: f64, y: f64) {
        assert!((p.x - x).abs() < EPSILON, "x: {} != {}", p.x, x);
        assert!((p.y - y).abs() < EPSILON, "y: {} != {}", p.y, y);
    }

    fn quad_at(p0: PointD, c: PointD, p2: PointD, t: f64) -> PointD {
        let u = 1.0 - t;
        PointD::new(
            u * u * p0.x + 2.0 * u * t * c.x + t * t * p2.x,
            u * u * p0.y + 2.0 * u * t * c.y + t * t * p2.y,
        )
    }

    fn cubic_at(p0: PointD, ctrl: ControlPair, p3: PointD, t: f64) -> PointD {
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        PointD::new(
            a * p0.x + b * ctrl.c0.x + c * ctrl.c1.x + d * p3.x,
            a * p0.y + b * ctrl.c0.y + c * ctrl.c1.y + d * p3.y,
        )
    }

    #[test]
    fn test_quad_control_arch() {
        let c = quad_control(pt(0, 0), pt(5, 10), pt(10, 0));
        assert_point(c, 5.0, 20.0);
    }

    #[test]
    fn test_quad_passes_through_middle_point() {
        let (p0, p1, p2) = (pt(3, -4), pt(17, 22), pt(40, 9));
        let c = quad_control(p0, p1, p2);
        let mid = quad_at(p0.into(), c, p2.into(), 0.5);
        assert_point(mid, 17.0, 22.0);
    }

    #[test]
    fn test_cubic_control_straight_line() {
        let ctrl = cubic_control(pt(0, 0), pt(1, 0), pt(2, 0), pt(3, 0));
        assert_point(ctrl.c0, 1.0, 0.0);
        assert_point(ctrl.c1, 2.0, 0.0);
    }

    #[test]
    fn test_cubic_passes_through_inner_points() {
        let (p0, p1, p2, p3) = (pt(0, 0), pt(10, 30), pt(40, 35), pt(60, 0));
        let ctrl = cubic_control(p0, p1, p2, p3);
        assert_point(cubic_at(p0.into(), ctrl, p3.into(), 1.0 / 3.0), 10.0, 30.0);
        assert_point(cubic_at(p0.into(), ctrl, p3.into(), 2.0 / 3.0), 40.0, 35.0);
    }

    #[test]
    fn test_smooth_cubic_even_spacing() {
        let ctrl = smooth_cubic_control(pt(0, 0), pt(10, 0), pt(20, 0), pt(30, 0), 1.0);
        assert_point(ctrl.c0, 15.0, 0.0);
        assert_point(ctrl.c1, 15.0, 0.0);
    }

    #[test]
    fn test_smooth_cubic_tangents_follow_chords() {
        let (p0, p1, p2, p3) = (pt(0, 0), pt(10, 10), pt(20, 10), pt(30, 0));
        let ctrl = smooth_cubic_control(p0, p1, p2, p3, SMOOTH_INTERNAL_VALUE);
        // Entry tangent parallel to p2 - p0 = (20, 10).
        let (tx, ty) = (ctrl.c0.x - 10.0, ctrl.c0.y - 10.0);
        assert!((tx * 10.0 - ty * 20.0).abs() < EPSILON);
        assert!(tx > 0.0);
        // Exit tangent parallel to p3 - p1 = (20, -10), pointing back.
        let (ex, ey) = (ctrl.c1.x - 20.0, ctrl.c1.y - 10.0);
        assert!((ex * -10.0 - ey * 20.0).abs() < EPSILON);
        assert!(ex < 0.0);
    }

    #[test]
    fn test_smooth_weight_scales_tangent() {
        let (p0, p1, p2, p3) = (pt(0, 0), pt(10, 10), pt(20, 10), pt(30, 0));
        let full = smooth_cubic_control(p0, p1, p2, p3, SMOOTH_INTERNAL_VALUE);
        let half = smooth_cubic_control(p0, p1, p2, p3, SMOOTH_EXTERNAL_VALUE);
        assert!(((full.c0.x - 10.0) - 2.0 * (half.c0.x - 10.0)).abs() < EPSILON);
        assert!(((full.c1.y - 10.0) - 2.0 * (half.c1.y - 10.0)).abs() < EPSILON);
    }

    #[test]
    fn test_smooth_cubic_repeated_points_stay_finite() {
        let ctrl = smooth_cubic_control(pt(5, 5), pt(5, 5), pt(5, 5), pt(9, 9), 1.0);
        assert!(ctrl.c0.x.is_finite() && ctrl.c0.y.is_finite());
        assert!(ctrl.c1.x.is_finite() && ctrl.c1.y.is_finite());
        assert_point(ctrl.c0, 5.0, 5.0);
    }

    #[test]
    fn test_reflect() {
        assert_point(reflect(PointD::new(12.5, 3.0), pt(10, 0)), 7.5, -3.0);
    }
}
