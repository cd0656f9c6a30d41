//! Triangle soup normalization.
//!
//! Mesh files (and the STL loader in particular) deliver a *triangle soup*:
//! every triangle carries its own three raw coordinates, and vertices shared
//! between triangles appear once per triangle. This module deduplicates those
//! points into an indexed representation: a vertex list plus triangle index
//! triples, the form every later pipeline stage works on.
//!
//! Deduplication is **bit-exact**: two points are the same vertex iff all
//! three `f64` coordinates have identical bit patterns. There is no epsilon
//! merging. A mesh exported with per-face duplicate but numerically distinct
//! vertices will not weld here; the closure validator flags the resulting
//! open topology downstream.

use std::collections::HashMap;

use nalgebra::Point3;

use super::index::{TriangleId, VertexId};
use crate::error::{Result, StrandError};

/// A deduplicated triangle mesh: vertex positions plus index triples.
///
/// Triangle winding is whatever the input encoded; the pipeline only relies
/// on winding being *consistent* between neighboring triangles, and repairs
/// local disagreements itself.
#[derive(Debug, Clone)]
pub struct IndexedMesh {
    vertices: Vec<Point3<f64>>,
    triangles: Vec<[VertexId; 3]>,
}

impl IndexedMesh {
    /// Build an indexed mesh from a triangle soup.
    ///
    /// Vertices are numbered in first-seen order, which makes the result
    /// deterministic for a given input sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::EmptyMesh`] if the soup contains no triangles.
    pub fn from_soup(soup: &[[Point3<f64>; 3]]) -> Result<Self> {
        if soup.is_empty() {
            return Err(StrandError::EmptyMesh);
        }

        let mut seen: HashMap<[u64; 3], VertexId> = HashMap::new();
        let mut vertices: Vec<Point3<f64>> = Vec::new();
        let mut triangles: Vec<[VertexId; 3]> = Vec::with_capacity(soup.len());

        for corners in soup {
            let mut tri = [VertexId::new(0); 3];
            for (slot, point) in corners.iter().enumerate() {
                let key = [point.x.to_bits(), point.y.to_bits(), point.z.to_bits()];
                let id = *seen.entry(key).or_insert_with(|| {
                    let id = VertexId::new(vertices.len());
                    vertices.push(*point);
                    id
                });
                tri[slot] = id;
            }
            triangles.push(tri);
        }

        Ok(Self { vertices, triangles })
    }

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.vertices[v.index()]
    }

    /// Get the vertex triple of a triangle.
    #[inline]
    pub fn triangle(&self, t: TriangleId) -> [VertexId; 3] {
        self.triangles[t.index()]
    }

    /// Iterate over all triangle IDs.
    pub fn triangle_ids(&self) -> impl Iterator<Item = TriangleId> + '_ {
        (0..self.triangles.len()).map(TriangleId::new)
    }

    /// The three directed vertex pairs of a triangle: consecutive pairs plus
    /// the wrap-around pair, in local slot order.
    pub fn directed_pairs(&self, t: TriangleId) -> [[VertexId; 2]; 3] {
        let [a, b, c] = self.triangle(t);
        [[a, b], [b, c], [c, a]]
    }

    /// Euclidean distance between two vertices.
    pub fn distance(&self, a: VertexId, b: VertexId) -> f64 {
        (self.position(b) - self.position(a)).norm()
    }
}
