//! Spline builders for route polylines.
//!
//! A run of route vertices becomes one path through all of them:
//!
//! - 2 points: a straight line
//! - 3 points: one quadratic through the middle point
//! - 4 points: one cubic through both inner points
//! - 5 or more: a sliding window `(p0, p1, p2, p3)` emits a smoothed cubic
//!   from `p1` to `p2` per step, preceded on the first window by a lead-in
//!   quad `p0 → p1` and followed on the last window by a lead-out quad
//!   `p2 → p3`. The lead pieces use the external (half) smoothing weight so
//!   the open ends of the route do not overshoot.
//!
//! The clipped variant tests each piece against a rectangle with the
//! Cohen-Sutherland segment test and either draws it or jumps over it with a
//! `move_to` to the piece's end point, so the cursor stays on the route.

use tracing::{debug, trace, warn};

use crate::basics::{PointD, PointI, RectI};
use crate::clip_cohen_sutherland::segment_in_rect;
use crate::error::{Result, SplineError};
use crate::interpolation::{
    cubic_control, quad_control, reflect, smooth_cubic_control, SMOOTH_EXTERNAL_VALUE,
    SMOOTH_INTERNAL_VALUE,
};
use crate::path_sink::PathSink;

// ============================================================================
// ClipMode
// ============================================================================

/// Which side of the clip rectangle gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    /// Draw only pieces that touch the rectangle.
    Inner,
    /// Draw only pieces that stay clear of the rectangle.
    Outer,
}

impl ClipMode {
    pub fn from_inner(clip_inner: bool) -> Self {
        if clip_inner {
            ClipMode::Inner
        } else {
            ClipMode::Outer
        }
    }

    /// Draw/jump decision for a piece whose segment test returned `inside`.
    #[inline]
    pub fn should_draw(self, inside: bool) -> bool {
        match self {
            ClipMode::Inner => inside,
            ClipMode::Outer => !inside,
        }
    }
}

// ============================================================================
// SplinePiece
// ============================================================================

/// The logical pieces a 4-point window can emit in the long-run case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplinePiece {
    /// Quad `p0 → p1`, first window only.
    LeadIn,
    /// Smoothed cubic `p1 → p2`, every window.
    Main,
    /// Quad `p2 → p3`, last window only.
    LeadOut,
}

impl SplinePiece {
    /// The segment of the window this piece is clip-tested against.
    #[inline]
    pub fn segment(self, w: &[PointI; 4]) -> (PointI, PointI) {
        match self {
            SplinePiece::LeadIn => (w[0], w[1]),
            SplinePiece::Main => (w[1], w[2]),
            SplinePiece::LeadOut => (w[2], w[3]),
        }
    }
}

// Per-piece decision source: unclipped builders draw everything.
#[derive(Clone, Copy)]
struct Clip<'a> {
    rect: &'a RectI,
    mode: ClipMode,
}

fn decide(clip: Option<Clip<'_>>, test: impl FnOnce(&RectI) -> bool) -> bool {
    match clip {
        None => true,
        Some(c) => c.mode.should_draw(test(c.rect)),
    }
}

#[inline]
fn jump<S: PathSink>(sink: &mut S, p: PointI, what: &str) {
    trace!(piece = what, x = p.x, y = p.y, "jumping over clipped piece");
    sink.move_to(p.x as f64, p.y as f64);
}

// ============================================================================
// SplineBuilder
// ============================================================================

/// Spline builder with its smoothing configuration.
///
/// The defaults reproduce the standard route rendering: full smoothing on
/// interior cubics, half smoothing on the lead-in and lead-out, and the
/// inherited 4-point clip test that ignores the `p2-p3` segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineBuilder {
    smooth_internal: f64,
    smooth_external: f64,
    clip_cubic_tail: bool,
}

impl Default for SplineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SplineBuilder {
    pub fn new() -> Self {
        Self {
            smooth_internal: SMOOTH_INTERNAL_VALUE,
            smooth_external: SMOOTH_EXTERNAL_VALUE,
            clip_cubic_tail: false,
        }
    }

    pub fn set_smooth_internal(&mut self, v: f64) {
        self.smooth_internal = v;
    }

    pub fn smooth_internal(&self) -> f64 {
        self.smooth_internal
    }

    pub fn set_smooth_external(&mut self, v: f64) {
        self.smooth_external = v;
    }

    pub fn smooth_external(&self) -> f64 {
        self.smooth_external
    }

    /// When set, a clipped 4-point run also tests its last segment `p2-p3`
    /// before drawing the cubic.
    pub fn set_clip_cubic_tail(&mut self, v: bool) {
        self.clip_cubic_tail = v;
    }

    pub fn clip_cubic_tail(&self) -> bool {
        self.clip_cubic_tail
    }

    /// Emit a smooth path through `points[begin..begin + count]`.
    pub fn build_spline<S: PathSink>(
        &self,
        sink: &mut S,
        points: &[PointI],
        begin: usize,
        count: usize,
    ) -> Result<()> {
        let run = window(points, begin, count)?;
        debug!(count, "building spline");
        self.trace_run(sink, run, None);
        Ok(())
    }

    /// Emit the spline through `points[begin..begin + count]`, drawing only
    /// the pieces `mode` selects relative to `rect` and jumping over the rest.
    pub fn build_clipped_spline<S: PathSink>(
        &self,
        sink: &mut S,
        rect: &RectI,
        points: &[PointI],
        begin: usize,
        count: usize,
        mode: ClipMode,
    ) -> Result<()> {
        let run = window(points, begin, count)?;
        debug!(count, ?mode, "building clipped spline");
        self.trace_run(sink, run, Some(Clip { rect, mode }));
        Ok(())
    }

    fn trace_run<S: PathSink>(&self, sink: &mut S, run: &[PointI], clip: Option<Clip<'_>>) {
        let p0 = run[0];
        sink.move_to(p0.x as f64, p0.y as f64);

        match *run {
            [p0, p1] => {
                if decide(clip, |r| segment_in_rect(r, p0, p1)) {
                    sink.line_to(p1.x as f64, p1.y as f64);
                } else {
                    jump(sink, p1, "line");
                }
            }
            [p0, p1, p2] => {
                let draw = decide(clip, |r| {
                    segment_in_rect(r, p0, p1) || segment_in_rect(r, p1, p2)
                });
                if draw {
                    let c = quad_control(p0, p1, p2);
                    sink.quad_to(c.x, c.y, p2.x as f64, p2.y as f64);
                } else {
                    jump(sink, p2, "quad");
                }
            }
            [p0, p1, p2, p3] => {
                let tail = self.clip_cubic_tail;
                let draw = decide(clip, |r| {
                    segment_in_rect(r, p0, p1)
                        || segment_in_rect(r, p1, p2)
                        || (tail && segment_in_rect(r, p2, p3))
                });
                if draw {
                    let ctrl = cubic_control(p0, p1, p2, p3);
                    cubic(sink, ctrl.c0, ctrl.c1, p3);
                } else {
                    jump(sink, p3, "cubic");
                }
            }
            _ => self.trace_windows(sink, run, clip),
        }
    }

    fn trace_windows<S: PathSink>(&self, sink: &mut S, run: &[PointI], clip: Option<Clip<'_>>) {
        let last = run.len() - 4;
        for (i, w) in run.windows(4).enumerate() {
            let w = [w[0], w[1], w[2], w[3]];
            if i == 0 {
                self.emit_piece(sink, &w, SplinePiece::LeadIn, clip);
            }
            self.emit_piece(sink, &w, SplinePiece::Main, clip);
            if i == last {
                self.emit_piece(sink, &w, SplinePiece::LeadOut, clip);
            }
        }
    }

    fn emit_piece<S: PathSink>(
        &self,
        sink: &mut S,
        w: &[PointI; 4],
        piece: SplinePiece,
        clip: Option<Clip<'_>>,
    ) {
        let (a, b) = piece.segment(w);
        if !decide(clip, |r| segment_in_rect(r, a, b)) {
            jump(sink, b, piece_name(piece));
            return;
        }

        let [p0, p1, p2, p3] = *w;
        match piece {
            SplinePiece::LeadIn => {
                let ext = smooth_cubic_control(p0, p1, p2, p3, self.smooth_external);
                let c = reflect(ext.c0, p1);
                sink.quad_to(c.x, c.y, p1.x as f64, p1.y as f64);
            }
            SplinePiece::Main => {
                let ctrl = smooth_cubic_control(p0, p1, p2, p3, self.smooth_internal);
                cubic(sink, ctrl.c0, ctrl.c1, p2);
            }
            SplinePiece::LeadOut => {
                let ext = smooth_cubic_control(p0, p1, p2, p3, self.smooth_external);
                let c = reflect(ext.c1, p2);
                sink.quad_to(c.x, c.y, p3.x as f64, p3.y as f64);
            }
        }
    }
}

fn piece_name(piece: SplinePiece) -> &'static str {
    match piece {
        SplinePiece::LeadIn => "lead-in",
        SplinePiece::Main => "main",
        SplinePiece::LeadOut => "lead-out",
    }
}

#[inline]
fn cubic<S: PathSink>(sink: &mut S, c0: PointD, c1: PointD, to: PointI) {
    sink.cubic_to(c0.x, c0.y, c1.x, c1.y, to.x as f64, to.y as f64);
}

/// Borrow the run `points[begin..begin + count]`, rejecting short or
/// out-of-range windows before anything reaches the sink.
fn window(points: &[PointI], begin: usize, count: usize) -> Result<&[PointI]> {
    if count < 2 {
        warn!(count, "spline rejected: too few points");
        return Err(SplineError::TooFewPoints { count });
    }
    let end = begin.checked_add(count).filter(|&end| end <= points.len());
    match end {
        Some(end) => Ok(&points[begin..end]),
        None => {
            warn!(begin, count, len = points.len(), "spline rejected: window out of bounds");
            Err(SplineError::WindowOutOfBounds {
                begin,
                count,
                len: points.len(),
            })
        }
    }
}

// ============================================================================
// Free entry points
// ============================================================================

/// [`SplineBuilder::build_spline`] with the default configuration.
pub fn build_spline<S: PathSink>(
    sink: &mut S,
    points: &[PointI],
    begin: usize,
    count: usize,
) -> Result<()> {
    SplineBuilder::new().build_spline(sink, points, begin, count)
}

/// [`SplineBuilder::build_clipped_spline`] with the default configuration.
pub fn build_clipped_spline<S: PathSink>(
    sink: &mut S,
    rect: &RectI,
    points: &[PointI],
    begin: usize,
    count: usize,
    mode: ClipMode,
) -> Result<()> {
    SplineBuilder::new().build_clipped_spline(sink, rect, points, begin, count, mode)
}

/// Continue the current sub-path to `p1` if the segment `p0-p1` passes the
/// clip decision, otherwise jump to `p1`.
///
/// Unlike the spline builders this does not emit the initial `move_to`; the
/// sink's cursor is expected to be at `p0` already.
pub fn line_to_clipped<S: PathSink>(
    sink: &mut S,
    rect: &RectI,
    p0: PointI,
    p1: PointI,
    mode: ClipMode,
) {
    if mode.should_draw(segment_in_rect(rect, p0, p1)) {
        sink.line_to(p1.x as f64, p1.y as f64);
    } else {
        jump(sink, p1, "line");
    }
}

// ============================================================================
// Tests
// ============================================================================
