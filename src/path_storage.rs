//! Path storage: a vertex container that records what the builders emit.
//!
//! Stores vertices with path commands in a `Vec<VertexD>`. A quadratic curve
//! occupies two vertices (control, end) tagged `PATH_CMD_CURVE3`; a cubic
//! occupies three tagged `PATH_CMD_CURVE4`.

use crate::basics::{
    is_move_to, VertexD, VertexSource, PATH_CMD_CURVE3, PATH_CMD_CURVE4, PATH_CMD_LINE_TO,
    PATH_CMD_MOVE_TO, PATH_CMD_STOP,
};
use crate::path_sink::PathSink;

/// The main vertex container.
///
/// Implements [`PathSink`] so builders can write into it, and
/// [`VertexSource`] so the result can be replayed.
#[derive(Debug, Clone, Default)]
pub struct PathStorage {
    vertices: Vec<VertexD>,
    iterator: usize,
}

impl PathStorage {
    /// Create an empty path storage.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            iterator: 0,
        }
    }

    /// Remove all vertices (keeps allocated memory).
    pub fn remove_all(&mut self) {
        self.vertices.clear();
        self.iterator = 0;
    }

    // ---------------------------------------------------------------
    // Path construction
    // ---------------------------------------------------------------

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push(VertexD::new(x, y, PATH_CMD_MOVE_TO));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push(VertexD::new(x, y, PATH_CMD_LINE_TO));
    }

    /// Add a quadratic Bezier curve (curve3) with explicit control point.
    pub fn curve3(&mut self, x_ctrl: f64, y_ctrl: f64, x_to: f64, y_to: f64) {
        self.vertices
            .push(VertexD::new(x_ctrl, y_ctrl, PATH_CMD_CURVE3));
        self.vertices
            .push(VertexD::new(x_to, y_to, PATH_CMD_CURVE3));
    }

    /// Add a cubic Bezier curve (curve4) with two explicit control points.
    #[allow(clippy::too_many_arguments)]
    pub fn curve4(
        &mut self,
        x_ctrl1: f64,
        y_ctrl1: f64,
        x_ctrl2: f64,
        y_ctrl2: f64,
        x_to: f64,
        y_to: f64,
    ) {
        self.vertices
            .push(VertexD::new(x_ctrl1, y_ctrl1, PATH_CMD_CURVE4));
        self.vertices
            .push(VertexD::new(x_ctrl2, y_ctrl2, PATH_CMD_CURVE4));
        self.vertices
            .push(VertexD::new(x_to, y_to, PATH_CMD_CURVE4));
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// Total number of vertices stored.
    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// All stored vertices in emission order.
    pub fn vertices(&self) -> &[VertexD] {
        &self.vertices
    }

    /// Number of sub-paths, i.e. of `move_to` commands.
    pub fn subpath_count(&self) -> usize {
        self.vertices.iter().filter(|v| is_move_to(v.cmd)).count()
    }

    /// Get the X coordinate of the last vertex (or 0.0 if empty).
    pub fn last_x(&self) -> f64 {
        self.vertices.last().map_or(0.0, |v| v.x)
    }

    /// Get the Y coordinate of the last vertex (or 0.0 if empty).
    pub fn last_y(&self) -> f64 {
        self.vertices.last().map_or(0.0, |v| v.y)
    }

    /// Get a command by index.
    pub fn command(&self, idx: usize) -> u32 {
        self.vertices[idx].cmd
    }
}

impl PathSink for PathStorage {
    fn move_to(&mut self, x: f64, y: f64) {
        PathStorage::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        PathStorage::line_to(self, x, y);
    }

    fn quad_to(&mut self, x_ctrl: f64, y_ctrl: f64, x: f64, y: f64) {
        self.curve3(x_ctrl, y_ctrl, x, y);
    }

    fn cubic_to(&mut self, x_ctrl1: f64, y_ctrl1: f64, x_ctrl2: f64, y_ctrl2: f64, x: f64, y: f64) {
        self.curve4(x_ctrl1, y_ctrl1, x_ctrl2, y_ctrl2, x, y);
    }
}

impl VertexSource for PathStorage {
    fn rewind(&mut self, path_id: u32) {
        self.iterator = path_id as usize;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.iterator >= self.vertices.len() {
            return PATH_CMD_STOP;
        }
        let v = &self.vertices[self.iterator];
        *x = v.x;
        *y = v.y;
        self.iterator += 1;
        v.cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty() {
        let ps = PathStorage::new();
        assert_eq!(ps.total_vertices(), 0);
        assert_eq!(ps.last_x(), 0.0);
        assert_eq!(ps.last_y(), 0.0);
        assert_eq!(ps.subpath_count(), 0);
    }

    #[test]
    fn test_move_to_line_to() {
        let mut ps = PathStorage::new();
        ps.move_to(10.0, 20.0);
        ps.line_to(30.0, 40.0);
        ps.line_to(50.0, 60.0);

        assert_eq!(ps.total_vertices(), 3);
        assert_eq!(ps.command(0), PATH_CMD_MOVE_TO);
        assert_eq!(ps.command(1), PATH_CMD_LINE_TO);
        assert_eq!(ps.command(2), PATH_CMD_LINE_TO);

        let v = ps.vertices()[1];
        assert!((v.x - 30.0).abs() < 1e-10);
        assert!((v.y - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_curve3() {
        let mut ps = PathStorage::new();
        ps.move_to(0.0, 0.0);
        ps.curve3(50.0, 100.0, 100.0, 0.0);

        assert_eq!(ps.total_vertices(), 3);
        assert_eq!(ps.command(1), PATH_CMD_CURVE3);
        assert_eq!(ps.command(2), PATH_CMD_CURVE3);
        assert_eq!(ps.last_x(), 100.0);
    }

    #[test]
    fn test_curve4() {
        let mut ps = PathStorage::new();
        ps.move_to(0.0, 0.0);
        ps.curve4(25.0, 100.0, 75.0, 100.0, 100.0, 0.0);

        assert_eq!(ps.total_vertices(), 4);
        assert_eq!(ps.command(1), PATH_CMD_CURVE4);
        assert_eq!(ps.command(3), PATH_CMD_CURVE4);
    }

    #[test]
    fn test_sink_calls_record_commands() {
        let mut ps = PathStorage::new();
        {
            let sink: &mut dyn PathSink = &mut ps;
            sink.move_to(1.0, 2.0);
            sink.quad_to(3.0, 4.0, 5.0, 6.0);
            sink.cubic_to(7.0, 8.0, 9.0, 10.0, 11.0, 12.0);
            sink.move_to(13.0, 14.0);
            sink.line_to(15.0, 16.0);
        }
        let cmds: Vec<u32> = ps.vertices().iter().map(|v| v.cmd).collect();
        assert_eq!(
            cmds,
            vec![
                PATH_CMD_MOVE_TO,
                PATH_CMD_CURVE3,
                PATH_CMD_CURVE3,
                PATH_CMD_CURVE4,
                PATH_CMD_CURVE4,
                PATH_CMD_CURVE4,
                PATH_CMD_MOVE_TO,
                PATH_CMD_LINE_TO,
            ]
        );
        assert_eq!(ps.subpath_count(), 2);
    }

    #[test]
    fn test_vertex_source_replay() {
        let mut ps = PathStorage::new();
        ps.move_to(10.0, 20.0);
        ps.line_to(30.0, 40.0);

        let (mut x, mut y) = (0.0, 0.0);
        assert_eq!(ps.vertex(&mut x, &mut y), PATH_CMD_MOVE_TO);
        assert_eq!(ps.vertex(&mut x, &mut y), PATH_CMD_LINE_TO);
        assert!((x - 30.0).abs() < 1e-10);
        assert_eq!(ps.vertex(&mut x, &mut y), PATH_CMD_STOP);

        ps.rewind(0);
        assert_eq!(ps.vertex(&mut x, &mut y), PATH_CMD_MOVE_TO);
        assert!((y - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_remove_all() {
        let mut ps = PathStorage::new();
        ps.move_to(10.0, 20.0);
        ps.line_to(30.0, 40.0);
        ps.remove_all();

        assert_eq!(ps.total_vertices(), 0);
    }
}
