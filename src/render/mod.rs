mod svg;

pub use svg::SvgCanvas;

use crate::geometry::{Rectangle, Segment};
use crate::operations::colorize::Color;
use crate::operations::compose::Composition;

/// Stroke width of every drawn line.
pub const LINE_WIDTH: f64 = 4.0;

/// Line styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// A drawing surface a composition can be rendered onto.
pub trait Canvas {
    /// Draws a straight line.
    fn line(&mut self, segment: &Segment, stroke: Stroke);

    /// Draws a filled rectangle with no outline.
    fn fill_rect(&mut self, rect: &Rectangle, color: Color);
}

/// Renders a composition.
///
/// The border goes down first in white, then the filled faces, then the
/// partition lines in black so they sit on top of the fills.
pub fn draw(composition: &Composition, canvas: &mut impl Canvas) {
    let arrangement = composition.arrangement();

    for segment in arrangement.border() {
        canvas.line(segment, Stroke::new(Color::White, LINE_WIDTH));
    }
    for face in composition.filled() {
        if let Some(color) = face.color {
            canvas.fill_rect(&face.rect, color);
        }
    }
    for segment in arrangement.partitions() {
        canvas.line(segment, Stroke::new(Color::Black, LINE_WIDTH));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::compose::Compose;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct Recorder {
        ops: Vec<String>,
    }

    impl Canvas for Recorder {
        fn line(&mut self, _segment: &Segment, stroke: Stroke) {
            self.ops.push(format!("line:{}", stroke.color.css_name()));
        }

        fn fill_rect(&mut self, _rect: &Rectangle, color: Color) {
            self.ops.push(format!("rect:{}", color.css_name()));
        }
    }

    #[test]
    fn draw_order_is_border_fills_partitions() {
        let mut rng = StdRng::seed_from_u64(8);
        let composition = Compose::default().execute(&mut rng).unwrap();
        let mut recorder = Recorder::default();
        draw(&composition, &mut recorder);

        let filled = composition.filled().count();
        let partitions = composition.arrangement().partitions().len();
        assert_eq!(recorder.ops.len(), 4 + filled + partitions);
        assert!(recorder.ops[..4].iter().all(|op| op == "line:white"));
        assert!(recorder.ops[4..4 + filled]
            .iter()
            .all(|op| op.starts_with("rect:")));
        assert!(recorder.ops[4 + filled..]
            .iter()
            .all(|op| op == "line:black"));
    }
}
