//! Mesh closure validation.
//!
//! A closed, consistently wound mesh has every undirected edge covered by
//! exactly two directed edge occurrences, one per incident triangle, running
//! in opposite directions. The check below counts every directed edge value
//! together with its reversal; on a closed mesh every count is exactly 2.
//!
//! Violations are reported, not fatal: the pipeline keeps going on a
//! best-effort basis and the caller decides how loudly to warn.

use std::collections::HashMap;

use super::index::VertexId;
use super::indexed::IndexedMesh;

/// One directed edge value whose occurrence count is not exactly 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosureDefect {
    /// The directed vertex pair.
    pub pair: [VertexId; 2],
    /// How many times the pair occurred (directed plus reversed).
    pub count: usize,
}

/// Result of the closure check.
#[derive(Debug, Clone, Default)]
pub struct ClosureReport {
    /// Directed edge values that did not occur exactly twice, in sorted
    /// order. Empty for a closed mesh.
    pub defects: Vec<ClosureDefect>,
}

impl ClosureReport {
    /// Whether every edge occurred exactly twice.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.defects.is_empty()
    }
}

/// Check that every undirected edge of the mesh occurs exactly twice.
pub fn check_closure(mesh: &IndexedMesh) -> ClosureReport {
    let mut counts: HashMap<[VertexId; 2], usize> = HashMap::new();

    for t in mesh.triangle_ids() {
        for [a, b] in mesh.directed_pairs(t) {
            *counts.entry([a, b]).or_insert(0) += 1;
            *counts.entry([b, a]).or_insert(0) += 1;
        }
    }

    let mut defects: Vec<ClosureDefect> = counts
        .into_iter()
        .filter(|&(_, count)| count != 2)
        .map(|(pair, count)| ClosureDefect { pair, count })
        .collect();
    defects.sort_by_key(|d| d.pair);

    ClosureReport { defects }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point3;

    use super::*;

    fn tetra_soup() -> Vec<[Point3<f64>; 3]> {
        let verts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];
        let faces = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        faces
            .iter()
            .map(|f| [verts[f[0]], verts[f[1]], verts[f[2]]])
            .collect()
    }

    #[test]
    fn test_closed_tetrahedron() {
        let mesh = IndexedMesh::from_soup(&tetra_soup()).unwrap();
        let report = check_closure(&mesh);
        assert!(report.is_closed());
    }

    #[test]
    fn test_punctured_tetrahedron_warns() {
        let mut soup = tetra_soup();
        soup.pop();
        let mesh = IndexedMesh::from_soup(&soup).unwrap();
        let report = check_closure(&mesh);
        assert!(!report.is_closed());
        // The missing face leaves its 3 edges single-covered; each shows up
        // as two directed defect values (the pair and its reversal).
        assert_eq!(report.defects.len(), 6);
        assert!(report.defects.iter().all(|d| d.count == 1));
    }
}
