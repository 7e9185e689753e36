//! Tesseract (4D hypercube) geometry

use glam::Vec4;

/// Number of tesseract vertices (2⁴)
pub const VERTEX_COUNT: usize = 16;

/// Number of tesseract edges (16 vertices × 4 incident edges / 2)
pub const EDGE_COUNT: usize = 32;

/// Edge connecting two vertices that differ in one coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    /// Index (x=0, y=1, z=2, w=3) of the coordinate the endpoints differ in
    pub axis: usize,
}

/// Unit tesseract: every vertex coordinate is ±1
#[derive(Debug, Clone)]
pub struct Tesseract {
    pub vertices: [Vec4; VERTEX_COUNT],
    pub edges: Vec<Edge>,
}

impl Tesseract {
    pub fn new() -> Self {
        build_tesseract()
    }
}

impl Default for Tesseract {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the 16 vertices and 32 axis-tagged edges.
///
/// Vertices are enumerated x-outermost, w-innermost, so vertex 0 is
/// `(-1,-1,-1,-1)` and vertex 15 is `(1,1,1,1)`.
pub fn build_tesseract() -> Tesseract {
    let mut vertices = [Vec4::ZERO; VERTEX_COUNT];
    let mut n = 0;
    for &x in &[-1.0f32, 1.0] {
        for &y in &[-1.0f32, 1.0] {
            for &z in &[-1.0f32, 1.0] {
                for &w in &[-1.0f32, 1.0] {
                    vertices[n] = Vec4::new(x, y, z, w);
                    n += 1;
                }
            }
        }
    }

    let mut edges = Vec::with_capacity(EDGE_COUNT);
    for i in 0..VERTEX_COUNT {
        for j in (i + 1)..VERTEX_COUNT {
            if let Some(axis) = single_differing_axis(vertices[i], vertices[j]) {
                edges.push(Edge { a: i, b: j, axis });
            }
        }
    }

    Tesseract { vertices, edges }
}

/// Index of the only coordinate in which `a` and `b` differ, if exactly one does
pub fn single_differing_axis(a: Vec4, b: Vec4) -> Option<usize> {
    let mut found = None;
    for axis in 0..4 {
        if a[axis] != b[axis] {
            if found.is_some() {
                return None;
            }
            found = Some(axis);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let t = build_tesseract();
        assert_eq!(t.vertices.len(), 16);
        assert_eq!(t.edges.len(), 32);
    }

    #[test]
    fn vertex_order_is_x_outermost() {
        let t = build_tesseract();
        assert_eq!(t.vertices[0], Vec4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices[1], Vec4::new(-1.0, -1.0, -1.0, 1.0));
        assert_eq!(t.vertices[8], Vec4::new(1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices[15], Vec4::ONE);
    }

    #[test]
    fn every_edge_differs_in_its_stored_axis_only() {
        let t = build_tesseract();
        for edge in &t.edges {
            let (va, vb) = (t.vertices[edge.a], t.vertices[edge.b]);
            let differing: Vec<usize> = (0..4).filter(|&k| va[k] != vb[k]).collect();
            assert_eq!(differing, vec![edge.axis], "edge {edge:?}");
        }
    }

    #[test]
    fn each_vertex_has_four_edges_one_per_axis() {
        let t = build_tesseract();
        for v in 0..VERTEX_COUNT {
            let mut axes: Vec<usize> = t
                .edges
                .iter()
                .filter(|e| e.a == v || e.b == v)
                .map(|e| e.axis)
                .collect();
            axes.sort_unstable();
            assert_eq!(axes, vec![0, 1, 2, 3], "vertex {v}");
        }
    }

    #[test]
    fn eight_edges_per_axis() {
        let t = build_tesseract();
        for axis in 0..4 {
            assert_eq!(t.edges.iter().filter(|e| e.axis == axis).count(), 8);
        }
    }

    #[test]
    fn differing_axis_rejects_diagonals() {
        let a = Vec4::new(-1.0, -1.0, 1.0, 1.0);
        assert_eq!(single_differing_axis(a, a), None);
        assert_eq!(single_differing_axis(a, Vec4::new(1.0, 1.0, 1.0, 1.0)), None);
        assert_eq!(single_differing_axis(a, Vec4::new(-1.0, -1.0, 1.0, -1.0)), Some(3));
    }
}
