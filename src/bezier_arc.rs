//! Circular arcs as cubic Bezier curves.
//!
//! Transfers and loop-backs on a transit map are drawn as circle arcs
//! through three points. The arc is split into pieces of at most a quarter
//! turn, each approximated by one cubic.

use crate::basics::PI;
use crate::math::calc_circumcenter;
use crate::path_sink::PathSink;

/// Epsilon to prevent adding degenerate curves.
const BEZIER_ARC_ANGLE_EPSILON: f64 = 0.01;

/// Convert an arc segment to a single cubic Bezier curve.
///
/// Returns `[x0, y0, x1, y1, x2, y2, x3, y3]`: start point, two control
/// points and end point. `sweep_angle` must be non-zero.
pub fn arc_to_bezier(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start_angle: f64,
    sweep_angle: f64,
) -> [f64; 8] {
    let x0 = (sweep_angle / 2.0).cos();
    let y0 = (sweep_angle / 2.0).sin();
    let tx = (1.0 - x0) * 4.0 / 3.0;
    let ty = y0 - tx * x0 / y0;

    let px = [x0, x0 + tx, x0 + tx, x0];
    let py = [-y0, -ty, ty, y0];

    let sn = (start_angle + sweep_angle / 2.0).sin();
    let cs = (start_angle + sweep_angle / 2.0).cos();

    let mut curve = [0.0; 8];
    for i in 0..4 {
        curve[i * 2] = cx + rx * (px[i] * cs - py[i] * sn);
        curve[i * 2 + 1] = cy + ry * (px[i] * sn + py[i] * cs);
    }
    curve
}

/// Signed sweep from angle `a1` to `a3` that passes through `a2`.
fn sweep_through(a1: f64, a2: f64, a3: f64) -> f64 {
    let ccw = (a3 - a1).rem_euclid(2.0 * PI);
    let mid = (a2 - a1).rem_euclid(2.0 * PI);
    if mid <= ccw {
        ccw
    } else {
        ccw - 2.0 * PI
    }
}

/// Draw the circle arc that starts at the sink's current point (x1, y1),
/// passes through (x2, y2) and ends at (x3, y3).
///
/// Collinear or coincident points have no finite circle, and a vanishing
/// sweep has no usable tangents; the arc then degrades to a straight
/// `line_to(x3, y3)`.
#[allow(clippy::too_many_arguments)]
pub fn circle_arc_to<S: PathSink>(
    sink: &mut S,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
) {
    let Some((cx, cy)) = calc_circumcenter(x1, y1, x2, y2, x3, y3) else {
        sink.line_to(x3, y3);
        return;
    };

    let r = (x1 - cx).hypot(y1 - cy);
    let start = (y1 - cy).atan2(x1 - cx);
    let sweep = sweep_through(start, (y2 - cy).atan2(x2 - cx), (y3 - cy).atan2(x3 - cx));
    if sweep.abs() < BEZIER_ARC_ANGLE_EPSILON {
        sink.line_to(x3, y3);
        return;
    }

    let mut angle = start;
    let mut total_sweep = 0.0;
    loop {
        let prev_sweep = total_sweep;
        let mut local_sweep = PI * 0.5 * sweep.signum();
        total_sweep += local_sweep;
        let done = total_sweep.abs() >= sweep.abs() - BEZIER_ARC_ANGLE_EPSILON;
        if done {
            local_sweep = sweep - prev_sweep;
        }

        let c = arc_to_bezier(cx, cy, r, r, angle, local_sweep);
        if done {
            sink.cubic_to(c[2], c[3], c[4], c[5], x3, y3);
            break;
        }
        sink.cubic_to(c[2], c[3], c[4], c[5], c[6], c[7]);
        angle += local_sweep;
    }
}
