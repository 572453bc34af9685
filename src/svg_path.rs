//! SVG path data output.

use crate::path_sink::PathSink;

/// A [`PathSink`] that serializes commands as SVG path data
/// (`M x y L x y Q cx cy x y C c1x c1y c2x c2y x y`).
///
/// Coordinates are rounded to three decimals with trailing zeros trimmed.
#[derive(Debug, Clone, Default)]
pub struct SvgPathWriter {
    data: String,
}

impl SvgPathWriter {
    pub fn new() -> Self {
        Self {
            data: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn into_string(self) -> String {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn command(&mut self, letter: char, coords: &[f64]) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(letter);
        for &v in coords {
            self.data.push(' ');
            push_number(&mut self.data, v);
        }
    }
}

fn push_number(out: &mut String, v: f64) {
    let rounded = (v * 1000.0).round() / 1000.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{:.3}", rounded);
    out.push_str(text.trim_end_matches('0').trim_end_matches('.'));
}

impl PathSink for SvgPathWriter {
    fn move_to(&mut self, x: f64, y: f64) {
        self.command('M', &[x, y]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.command('L', &[x, y]);
    }

    fn quad_to(&mut self, x_ctrl: f64, y_ctrl: f64, x: f64, y: f64) {
        self.command('Q', &[x_ctrl, y_ctrl, x, y]);
    }

    fn cubic_to(&mut self, x_ctrl1: f64, y_ctrl1: f64, x_ctrl2: f64, y_ctrl2: f64, x: f64, y: f64) {
        self.command('C', &[x_ctrl1, y_ctrl1, x_ctrl2, y_ctrl2, x, y]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let w = SvgPathWriter::new();
        assert!(w.is_empty());
        assert_eq!(w.as_str(), "");
    }

    #[test]
    fn test_commands() {
        let mut w = SvgPathWriter::new();
        w.move_to(0.0, 0.0);
        w.line_to(10.0, 0.0);
        w.quad_to(5.0, 20.0, 10.0, 0.0);
        w.cubic_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(w.as_str(), "M 0 0 L 10 0 Q 5 20 10 0 C 1 2 3 4 5 6");
    }

    #[test]
    fn test_number_formatting() {
        let mut w = SvgPathWriter::new();
        w.move_to(1.5, -2.25);
        w.line_to(1.0 / 3.0, -0.0001);
        w.line_to(12.5004, 100.0);
        assert_eq!(w.into_string(), "M 1.5 -2.25 L 0.333 0 L 12.5 100");
    }
}
