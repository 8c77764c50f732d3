use std::collections::HashSet;

use crate::math::Point;

/// Insertion-ordered set of grid points.
///
/// Points compare by coordinates; inserting a point that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
    order: Vec<Point>,
    members: HashSet<Point>,
}

impl PointSet {
    /// Creates a new, empty point set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point. Returns `true` if it was not already present.
    pub fn insert(&mut self, p: Point) -> bool {
        if self.members.insert(p) {
            self.order.push(p);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, p: &Point) -> bool {
        self.members.contains(p)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.order.iter()
    }

    /// Returns the points sorted by x, ties broken by y.
    #[must_use]
    pub fn sorted(&self) -> Vec<Point> {
        let mut points = self.order.clone();
        points.sort_unstable_by_key(|p| (p.x, p.y));
        points
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::new();
        for p in iter {
            set.insert(p);
        }
        set
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_dropped() {
        let mut set = PointSet::new();
        assert!(set.insert(Point::new(1, 2)));
        assert!(!set.insert(Point::new(1, 2)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iteration_keeps_insertion_order() {
        let set: PointSet = [Point::new(9, 0), Point::new(1, 5), Point::new(1, 2)]
            .into_iter()
            .collect();
        let order: Vec<Point> = set.iter().copied().collect();
        assert_eq!(order, vec![Point::new(9, 0), Point::new(1, 5), Point::new(1, 2)]);
    }

    #[test]
    fn sorted_is_x_then_y() {
        let set: PointSet = [Point::new(9, 0), Point::new(1, 5), Point::new(1, 2)]
            .into_iter()
            .collect();
        assert_eq!(
            set.sorted(),
            vec![Point::new(1, 2), Point::new(1, 5), Point::new(9, 0)]
        );
    }
}
