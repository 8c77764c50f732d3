use svg::node::element::{Line, Rectangle as RectElement};
use svg::{Document, Node};

use crate::geometry::{Rectangle, Segment};
use crate::operations::colorize::Color;

use super::{Canvas, Stroke};

/// Accumulates drawing calls into an SVG document.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    document: Document,
}

impl SvgCanvas {
    /// Creates an empty canvas of the given pixel size.
    #[must_use]
    pub fn new(width: i64, height: i64) -> Self {
        let document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {width} {height}"));
        Self { document }
    }

    /// Closes the document and returns it serialized.
    #[must_use]
    pub fn finish(self) -> String {
        self.document.to_string()
    }
}

impl Canvas for SvgCanvas {
    fn line(&mut self, segment: &Segment, stroke: Stroke) {
        let line = Line::new()
            .set("x1", segment.p1.x)
            .set("y1", segment.p1.y)
            .set("x2", segment.p2.x)
            .set("y2", segment.p2.y)
            .set("stroke", stroke.color.css_name())
            .set("stroke-width", stroke.width);
        self.document.append(line);
    }

    fn fill_rect(&mut self, rect: &Rectangle, color: Color) {
        let element = RectElement::new()
            .set("x", rect.p1.x)
            .set("y", rect.p1.y)
            .set("width", rect.width())
            .set("height", rect.height())
            .set("fill", color.css_name());
        self.document.append(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;

    fn element<'a>(svg: &'a str, tag: &str) -> Vec<&'a str> {
        svg.lines()
            .map(str::trim)
            .filter(|l| l.starts_with(&format!("<{tag} ")))
            .collect()
    }

    #[test]
    fn empty_document() {
        let svg = SvgCanvas::new(80, 60).finish();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("width=\"80\""));
        assert!(svg.contains("height=\"60\""));
        assert!(svg.contains("viewBox=\"0 0 80 60\""));
        assert!(element(&svg, "line").is_empty());
    }

    #[test]
    fn line_and_rect_elements() {
        let mut canvas = SvgCanvas::new(100, 100);
        canvas.line(&Segment::vertical(50, 100), Stroke::new(Color::Black, 4.0));
        canvas.fill_rect(
            &Rectangle::new(Point::new(50, 0), Point::new(100, 50)),
            Color::Red,
        );
        let svg = canvas.finish();

        let lines = element(&svg, "line");
        assert_eq!(lines.len(), 1);
        for attr in [
            "x1=\"50\"",
            "y1=\"0\"",
            "x2=\"50\"",
            "y2=\"100\"",
            "stroke=\"black\"",
            "stroke-width=\"4\"",
        ] {
            assert!(lines[0].contains(attr), "{attr} missing in {}", lines[0]);
        }

        let rects = element(&svg, "rect");
        assert_eq!(rects.len(), 1);
        for attr in ["x=\"50\"", "y=\"0\"", "width=\"50\"", "height=\"50\"", "fill=\"red\""] {
            assert!(rects[0].contains(attr), "{attr} missing in {}", rects[0]);
        }
    }
}
