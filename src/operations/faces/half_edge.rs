use std::collections::{HashMap, HashSet};

use slotmap::SlotMap;

use crate::math::{to_f64, Point};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the half-edge store.
    pub struct VertexId;

    /// Unique identifier for a half-edge in the half-edge store.
    pub struct HalfEdgeId;
}

/// A vertex and the half-edges leaving it.
#[derive(Debug, Clone)]
pub struct VertexData {
    pub point: Point,
    /// Outgoing half-edges, counter-clockwise by direction once linked.
    pub outgoing: Vec<HalfEdgeId>,
}

/// One direction of an undirected edge.
#[derive(Debug, Clone)]
pub struct HalfEdgeData {
    pub origin: VertexId,
    pub twin: HalfEdgeId,
    /// Following half-edge around the same face, set by [`HalfEdgeStore::link`].
    pub next: Option<HalfEdgeId>,
}

/// Arena holding a planar graph as a doubly connected edge list.
///
/// Vertices are unique per grid point. Entities refer to each other via typed
/// IDs, so faces can be walked without self-referential structures.
#[derive(Debug, Default)]
pub struct HalfEdgeStore {
    vertices: SlotMap<VertexId, VertexData>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
    by_point: HashMap<Point, VertexId>,
}

impl HalfEdgeStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the vertex at `point`, inserting it if needed.
    pub fn vertex_at(&mut self, point: Point) -> VertexId {
        if let Some(&id) = self.by_point.get(&point) {
            return id;
        }
        let id = self.vertices.insert(VertexData {
            point,
            outgoing: Vec::new(),
        });
        self.by_point.insert(point, id);
        id
    }

    /// Inserts the undirected edge `a`-`b` as a pair of twin half-edges.
    ///
    /// Returns `(a -> b, b -> a)`.
    pub fn add_edge(&mut self, a: Point, b: Point) -> (HalfEdgeId, HalfEdgeId) {
        let va = self.vertex_at(a);
        let vb = self.vertex_at(b);

        let forward = self.half_edges.insert(HalfEdgeData {
            origin: va,
            twin: HalfEdgeId::default(),
            next: None,
        });
        let backward = self.half_edges.insert(HalfEdgeData {
            origin: vb,
            twin: forward,
            next: None,
        });
        self.half_edges[forward].twin = backward;

        self.vertices[va].outgoing.push(forward);
        self.vertices[vb].outgoing.push(backward);
        (forward, backward)
    }

    /// Returns the point a half-edge starts from.
    #[must_use]
    pub fn origin_point(&self, he: HalfEdgeId) -> Point {
        self.vertices[self.half_edges[he].origin].point
    }

    /// Direction angle of a half-edge, in `(-pi, pi]`.
    fn angle(&self, he: HalfEdgeId) -> f64 {
        let from = to_f64(&self.origin_point(he));
        let to = to_f64(&self.origin_point(self.half_edges[he].twin));
        (to.y - from.y).atan2(to.x - from.x)
    }

    /// Orders every vertex's outgoing half-edges by angle and sets `next` links.
    ///
    /// Arriving at a vertex along `h`, the walk continues on the outgoing
    /// half-edge immediately clockwise from `twin(h)`. Bounded faces then come
    /// out with positive signed area.
    pub fn link(&mut self) {
        let ids: Vec<VertexId> = self.vertices.keys().collect();
        for v in ids {
            let mut outgoing = self.vertices[v].outgoing.clone();
            outgoing.sort_by(|a, b| self.angle(*a).total_cmp(&self.angle(*b)));
            self.vertices[v].outgoing = outgoing;
        }

        let mut links = Vec::with_capacity(self.half_edges.len());
        for (he, data) in &self.half_edges {
            let twin = data.twin;
            let around = &self.vertices[self.half_edges[twin].origin].outgoing;
            let Some(pos) = around.iter().position(|&o| o == twin) else {
                continue;
            };
            let clockwise = around[(pos + around.len() - 1) % around.len()];
            links.push((he, clockwise));
        }
        for (he, next) in links {
            self.half_edges[he].next = Some(next);
        }
    }

    /// Walks every face cycle once, returning the corner points of each.
    ///
    /// Requires [`Self::link`] to have run.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<Point>> {
        let mut visited: HashSet<HalfEdgeId> = HashSet::new();
        let mut cycles = Vec::new();

        for start in self.half_edges.keys() {
            if visited.contains(&start) {
                continue;
            }
            let mut cycle = Vec::new();
            let mut current = start;
            loop {
                if !visited.insert(current) {
                    break;
                }
                cycle.push(self.origin_point(current));
                match self.half_edges[current].next {
                    Some(next) if next != start => current = next,
                    _ => break,
                }
            }
            cycles.push(cycle);
        }

        cycles
    }
}

/// Twice the signed area of a closed polygon (shoelace formula).
///
/// Accumulates in `i128` so products of large `i64` coordinates cannot overflow.
#[must_use]
pub fn doubled_signed_area(points: &[Point]) -> i128 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            i128::from(points[i].x) * i128::from(points[j].y)
                - i128::from(points[j].x) * i128::from(points[i].y)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_store() -> HalfEdgeStore {
        let mut store = HalfEdgeStore::new();
        let corners = [
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        for i in 0..4 {
            store.add_edge(corners[i], corners[(i + 1) % 4]);
        }
        store.link();
        store
    }

    #[test]
    fn vertices_are_shared_by_point() {
        let mut store = HalfEdgeStore::new();
        let a = store.vertex_at(Point::new(3, 4));
        let b = store.vertex_at(Point::new(3, 4));
        let c = store.vertex_at(Point::new(4, 3));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let (forward, backward) = store.add_edge(Point::new(3, 4), Point::new(4, 3));
        assert_eq!(store.origin_point(forward), Point::new(3, 4));
        assert_eq!(store.origin_point(backward), Point::new(4, 3));
    }

    #[test]
    fn square_has_inner_and_outer_cycle() {
        let cycles = square_store().cycles();
        assert_eq!(cycles.len(), 2);
        let mut areas: Vec<i128> = cycles.iter().map(|c| doubled_signed_area(c)).collect();
        areas.sort_unstable();
        assert_eq!(areas, vec![-200, 200]);
    }

    #[test]
    fn dangling_edge_folds_back() {
        let mut store = HalfEdgeStore::new();
        store.add_edge(Point::new(0, 0), Point::new(5, 0));
        store.link();
        let cycles = store.cycles();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 2);
        assert_eq!(doubled_signed_area(&cycles[0]), 0);
    }

    #[test]
    fn shoelace_of_unit_square() {
        let pts = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(0, 1),
        ];
        assert_eq!(doubled_signed_area(&pts), 2);
    }
}
