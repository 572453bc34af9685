//! Cohen-Sutherland segment classification against a clip rectangle.
//!
//! The rectangle is treated as a closed region: a point lying exactly on an
//! edge has a zero outcode, so a segment that only touches the boundary
//! (an edge or a single corner) counts as inside. Both clip modes of the
//! spline builder share this convention, which keeps drawn and skipped
//! stretches complementary.
//!
//! Outcodes settle the trivial cases. The rest is decided with a
//! Liang-Barsky parameter interval kept as exact integer fractions, so the
//! answer never depends on rounding or on which endpoint comes first.

use crate::basics::{PointI, Rect, RectI};

// ============================================================================
// Clipping flags (Cohen-Sutherland outcodes)
// ============================================================================

pub const CLIPPING_FLAGS_X1_CLIPPED: u32 = 4;
pub const CLIPPING_FLAGS_X2_CLIPPED: u32 = 1;
pub const CLIPPING_FLAGS_Y1_CLIPPED: u32 = 8;
pub const CLIPPING_FLAGS_Y2_CLIPPED: u32 = 2;

/// Compute Cohen-Sutherland outcode for point (x, y) against clip_box.
///
/// ```text
///        |        |
///  1100  |  1000  | 1001
///        |        |
/// -------+--------+-------- clip_box.y1 (top)
///        |        |
///  0100  |  0000  | 0001
///        |        |
/// -------+--------+-------- clip_box.y2 (bottom)
///        |        |
///  0110  |  0010  | 0011
///        |        |
///  clip_box.x1  clip_box.x2
/// ```
#[inline]
pub fn clipping_flags<T: Copy + PartialOrd>(x: T, y: T, clip_box: &Rect<T>) -> u32 {
    (x > clip_box.x2) as u32
        | (((y > clip_box.y2) as u32) << 1)
        | (((x < clip_box.x1) as u32) << 2)
        | (((y < clip_box.y1) as u32) << 3)
}

// ============================================================================
// Exact parameter interval
// ============================================================================

/// A segment parameter `num / den` with `den > 0`.
#[derive(Debug, Clone, Copy)]
struct Param {
    num: i128,
    den: i128,
}

impl Param {
    const ZERO: Param = Param { num: 0, den: 1 };
    const ONE: Param = Param { num: 1, den: 1 };

    fn new(num: i128, den: i128) -> Self {
        if den < 0 {
            Self { num: -num, den: -den }
        } else {
            Self { num, den }
        }
    }

    #[inline]
    fn lt(self, other: Param) -> bool {
        self.num * other.den < other.num * self.den
    }
}

/// Narrow `[t0, t1]` by the half-plane `p * t <= q`. Returns `false` once
/// the interval is empty.
fn clip_interval(p: i128, q: i128, t0: &mut Param, t1: &mut Param) -> bool {
    if p == 0 {
        // Parallel to the edge: inside or outside for every t.
        return q >= 0;
    }
    let r = Param::new(q, p);
    if p < 0 {
        if t1.lt(r) {
            return false;
        }
        if t0.lt(r) {
            *t0 = r;
        }
    } else {
        if r.lt(*t0) {
            return false;
        }
        if r.lt(*t1) {
            *t1 = r;
        }
    }
    true
}

// ============================================================================
// Segment classification
// ============================================================================

/// Returns `true` if any portion of the segment `p0 → p1` lies inside
/// `clip_box`, edges included. `clip_box` must be normalized.
///
/// Trivially accepts when both outcodes are zero and trivially rejects when
/// they share a side. Otherwise the parameter range `[0, 1]` is cut by the
/// four edge half-planes; the segment hits the box iff the range stays
/// non-empty. The result is the same for `(p0, p1)` and `(p1, p0)`.
pub fn segment_in_rect(clip_box: &RectI, p0: PointI, p1: PointI) -> bool {
    let f0 = clipping_flags(p0.x, p0.y, clip_box);
    let f1 = clipping_flags(p1.x, p1.y, clip_box);
    if (f0 | f1) == 0 {
        return true;
    }
    if (f0 & f1) != 0 {
        return false;
    }

    let (x0, y0) = (p0.x as i128, p0.y as i128);
    let dx = p1.x as i128 - x0;
    let dy = p1.y as i128 - y0;

    let mut t0 = Param::ZERO;
    let mut t1 = Param::ONE;
    clip_interval(-dx, x0 - clip_box.x1 as i128, &mut t0, &mut t1)
        && clip_interval(dx, clip_box.x2 as i128 - x0, &mut t0, &mut t1)
        && clip_interval(-dy, y0 - clip_box.y1 as i128, &mut t0, &mut t1)
        && clip_interval(dy, clip_box.y2 as i128 - y0, &mut t0, &mut t1)
}

// ============================================================================
// Tests
// ============================================================================
