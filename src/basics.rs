//! Foundation types, constants, and path command utilities.
//!
//! Points, rectangles and vertices shared by the clipping, interpolation
//! and path-building modules.

pub const PI: f64 = std::f64::consts::PI;

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle defined by two corner points.
///
/// In screen coordinates `x1` is the left edge, `y1` the top, `x2` the right
/// and `y2` the bottom. Clipping assumes `x1 <= x2` and `y1 <= y2`; call
/// [`Rect::normalize`] first when that is not known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;

// ============================================================================
// Path commands
// ============================================================================

pub const PATH_CMD_STOP: u32 = 0;
pub const PATH_CMD_MOVE_TO: u32 = 1;
pub const PATH_CMD_LINE_TO: u32 = 2;
pub const PATH_CMD_CURVE3: u32 = 3;
pub const PATH_CMD_CURVE4: u32 = 4;

/// Returns `true` if `c` is a drawing command (line_to through curve4).
#[inline]
pub fn is_drawing(c: u32) -> bool {
    (PATH_CMD_LINE_TO..=PATH_CMD_CURVE4).contains(&c)
}

#[inline]
pub fn is_move_to(c: u32) -> bool {
    c == PATH_CMD_MOVE_TO
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Route vertex in device units.
pub type PointI = PointBase<i32>;
/// Interpolated point, e.g. a Bezier control point.
pub type PointD = PointBase<f64>;

impl From<PointI> for PointD {
    #[inline]
    fn from(p: PointI) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}

// ============================================================================
// Vertex
// ============================================================================

/// A vertex with coordinates and a path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexBase<T: Copy> {
    pub x: T,
    pub y: T,
    pub cmd: u32,
}

impl<T: Copy> VertexBase<T> {
    pub fn new(x: T, y: T, cmd: u32) -> Self {
        Self { x, y, cmd }
    }
}

pub type VertexD = VertexBase<f64>;

// ============================================================================
// VertexSource trait
// ============================================================================

/// Pull-style vertex iteration. [`crate::path_storage::PathStorage`] implements
/// it so recorded paths can be replayed vertex by vertex.
pub trait VertexSource {
    /// Reset the vertex source to the beginning of the given path.
    fn rewind(&mut self, path_id: u32);

    /// Return the next vertex. Writes coordinates to `x` and `y`, returns a
    /// path command. Returns `PATH_CMD_STOP` when iteration is complete.
    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32;
}

impl<T: VertexSource> VertexSource for &mut T {
    fn rewind(&mut self, path_id: u32) {
        (*self).rewind(path_id);
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        (*self).vertex(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_normalize() {
        let mut r = RectI::new(30, 40, 10, 20);
        r.normalize();
        assert_eq!(r, RectI::new(10, 20, 30, 40));
    }

    #[test]
    fn test_path_command_classification() {
        assert!(is_move_to(PATH_CMD_MOVE_TO));
        assert!(!is_move_to(PATH_CMD_LINE_TO));

        assert!(is_drawing(PATH_CMD_LINE_TO));
        assert!(is_drawing(PATH_CMD_CURVE3));
        assert!(is_drawing(PATH_CMD_CURVE4));
        assert!(!is_drawing(PATH_CMD_MOVE_TO));
        assert!(!is_drawing(PATH_CMD_STOP));
    }

    #[test]
    fn test_point_conversion() {
        let p: PointD = PointI::new(3, -7).into();
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, -7.0);
    }
}
