use rand::Rng;
use tracing::debug;

use crate::geometry::Rectangle;

/// Named colors used for fills and strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    White,
    Black,
}

impl Color {
    /// Returns the CSS color keyword.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

/// The fill colors a composition may use. Each is used at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from an explicit color list.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![Color::Red, Color::Blue, Color::Yellow])
    }
}

/// A face and the fill it was given, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoredFace {
    pub rect: Rectangle,
    pub color: Option<Color>,
}

/// Randomly fills a few faces, each with a different palette color.
///
/// Every face is colored with probability `remaining / face_count`, where
/// `remaining` is the number of unused palette colors. A used color leaves the
/// palette, so no more faces are filled than the palette has colors are ever filled.
#[derive(Debug, Clone, Default)]
pub struct Colorize {
    palette: Palette,
}

impl Colorize {
    /// Creates a new `Colorize` operation.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Executes the coloring, preserving face order.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute<R: Rng>(&self, faces: &[Rectangle], rng: &mut R) -> Vec<ColoredFace> {
        let mut remaining = self.palette.colors.clone();
        let count = faces.len() as f64;

        faces
            .iter()
            .map(|&rect| {
                let threshold = 1.0 - remaining.len() as f64 / count;
                let color = if !remaining.is_empty() && rng.random::<f64>() > threshold {
                    let color = remaining.remove(rng.random_range(0..remaining.len()));
                    debug!(?rect, color = color.css_name(), "face colored");
                    Some(color)
                } else {
                    None
                };
                ColoredFace { rect, color }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn strip(n: i64) -> Vec<Rectangle> {
        (0..n)
            .map(|i| Rectangle::new(Point::new(i * 10, 0), Point::new(i * 10 + 10, 10)))
            .collect()
    }

    #[test]
    fn no_faces_no_colors() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Colorize::default().execute(&[], &mut rng).is_empty());
    }

    #[test]
    fn colors_are_distinct_and_bounded() {
        let faces = strip(40);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let colored = Colorize::default().execute(&faces, &mut rng);
            assert_eq!(colored.len(), faces.len());

            let used: Vec<Color> = colored.iter().filter_map(|f| f.color).collect();
            assert!(used.len() <= 3);
            let unique: HashSet<Color> = used.iter().copied().collect();
            assert_eq!(unique.len(), used.len());
        }
    }

    #[test]
    fn fewer_faces_than_colors_fills_every_face() {
        // Threshold is negative, so every draw passes.
        let faces = strip(2);
        let mut rng = StdRng::seed_from_u64(9);
        let colored = Colorize::default().execute(&faces, &mut rng);
        assert!(colored.iter().all(|f| f.color.is_some()));
    }

    #[test]
    fn empty_palette_fills_nothing() {
        let faces = strip(5);
        let mut rng = StdRng::seed_from_u64(1);
        let colored = Colorize::new(Palette::new(Vec::new())).execute(&faces, &mut rng);
        assert!(colored.iter().all(|f| f.color.is_none()));
    }

    #[test]
    fn face_order_is_preserved() {
        let faces = strip(6);
        let mut rng = StdRng::seed_from_u64(4);
        let colored = Colorize::default().execute(&faces, &mut rng);
        let rects: Vec<Rectangle> = colored.iter().map(|f| f.rect).collect();
        assert_eq!(rects, faces);
    }

    #[test]
    fn same_seed_same_colors() {
        let faces = strip(12);
        let a = Colorize::default().execute(&faces, &mut StdRng::seed_from_u64(77));
        let b = Colorize::default().execute(&faces, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
