//! Path construction interface.
//!
//! The builders never render anything themselves; they push primitives into
//! a [`PathSink`]. Each drawing call advances the sink's current point to its
//! final coordinate, and `move_to` starts a new disjoint sub-path.
//!
//! A sink carries cursor state, so one sink instance must only be fed from
//! one builder at a time.

pub trait PathSink {
    /// Start a new sub-path at (x, y) without drawing.
    fn move_to(&mut self, x: f64, y: f64);

    /// Straight segment from the current point to (x, y).
    fn line_to(&mut self, x: f64, y: f64);

    /// Quadratic Bezier from the current point to (x, y).
    fn quad_to(&mut self, x_ctrl: f64, y_ctrl: f64, x: f64, y: f64);

    /// Cubic Bezier from the current point to (x, y).
    #[allow(clippy::too_many_arguments)]
    fn cubic_to(&mut self, x_ctrl1: f64, y_ctrl1: f64, x_ctrl2: f64, y_ctrl2: f64, x: f64, y: f64);
}

/// Lets builders borrow a sink instead of owning it.
impl<S: PathSink + ?Sized> PathSink for &mut S {
    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y);
    }

    fn quad_to(&mut self, x_ctrl: f64, y_ctrl: f64, x: f64, y: f64) {
        (**self).quad_to(x_ctrl, y_ctrl, x, y);
    }

    fn cubic_to(&mut self, x_ctrl1: f64, y_ctrl1: f64, x_ctrl2: f64, y_ctrl2: f64, x: f64, y: f64) {
        (**self).cubic_to(x_ctrl1, y_ctrl1, x_ctrl2, y_ctrl2, x, y);
    }
}
