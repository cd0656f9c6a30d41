//! # Strand
//!
//! Turns a closed triangulated surface mesh into build instructions for a
//! physical tube-and-string sculpture: every mesh edge becomes a rigid tube,
//! and one (ideally) continuous string is threaded through all of them.
//!
//! The pipeline deduplicates the raw triangle soup, models each triangle as
//! a small loop of directed edges with successor pointers, grows a spanning
//! tree over the face adjacency graph, and splices the face loops together
//! with a pointer "twist" at every tree edge. The cycles of the final
//! successor permutation are the strings; unique edges get letter codes in
//! threading order and scaled lengths for cutting.
//!
//! ## Quick Start
//!
//! ```no_run
//! use strand::io;
//! use strand::pipeline::thread_soup;
//!
//! let soup = io::load_soup("model.stl").unwrap();
//! let threading = thread_soup(&soup, 1.0).unwrap();
//!
//! if !threading.closure.is_closed() {
//!     eprintln!("mesh is not closed; instructions may be wrong");
//! }
//! print!("{}", threading.plan);
//! ```
//!
//! ## Running the stages by hand
//!
//! ```
//! use nalgebra::Point3;
//! use strand::mesh::IndexedMesh;
//! use strand::topology::{
//!     apply_twists, extract_strings, FaceAdjacency, SpanningForest, WindingModel,
//! };
//!
//! # let p = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
//! # let verts = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.5, 1.0, 0.0), p(0.5, 0.5, 1.0)];
//! # let soup: Vec<[Point3<f64>; 3]> = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]]
//! #     .iter()
//! #     .map(|f: &[usize; 3]| [verts[f[0]], verts[f[1]], verts[f[2]]])
//! #     .collect();
//! let mesh = IndexedMesh::from_soup(&soup).unwrap();
//! let mut model = WindingModel::build(&mesh);
//! let forest = SpanningForest::grow(&FaceAdjacency::build(&model));
//! apply_twists(&mut model, &forest.crossings).unwrap();
//!
//! let strings = extract_strings(&model).unwrap();
//! assert_eq!(strings.iter().map(Vec::len).sum::<usize>(), model.num_dir_edges());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod mesh;
pub mod pipeline;
pub mod report;
pub mod topology;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use strand::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, StrandError};
    pub use crate::mesh::{
        check_closure, ClosureReport, DirEdgeId, EdgeId, IndexedMesh, TriangleId, VertexId,
    };
    pub use crate::pipeline::{thread_soup, Threading};
    pub use crate::report::ThreadingPlan;
    pub use crate::topology::{
        apply_twists, extract_strings, FaceAdjacency, SpanningForest, WindingModel,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::Point3;

    /// A regular tetrahedron with edge length `2 * sqrt(2)`.
    fn regular_tetra_soup() -> Vec<[Point3<f64>; 3]> {
        let verts = [
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(-1.0, 1.0, -1.0),
            Point3::new(-1.0, -1.0, 1.0),
        ];
        let faces = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        faces
            .iter()
            .map(|f| [verts[f[0]], verts[f[1]], verts[f[2]]])
            .collect()
    }

    #[test]
    fn test_tetrahedron_end_to_end() {
        // Scale the 2*sqrt(2) edges down to unit tubes
        let scale = 1.0 / (2.0 * 2.0_f64.sqrt());
        let threading = thread_soup(&regular_tetra_soup(), scale).unwrap();

        assert!(threading.closure.is_closed());

        let plan = &threading.plan;
        assert_eq!(plan.tube_count(), 6);
        let codes: Vec<&str> = plan.tubes.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, ["A", "B", "C", "D", "E", "F"]);
        for tube in &plan.tubes {
            assert!((tube.length - 1.0).abs() < 1e-12, "tube {} has length {}", tube.code, tube.length);
        }

        // 3 directed edges per triangle, 4 triangles
        let total: usize = plan.strings.iter().map(Vec::len).sum();
        assert_eq!(total, 12);
        // The heuristic merges one shell into one string
        assert_eq!(plan.strings.len(), 1);

        let text = plan.to_string();
        assert!(text.starts_with("Tubes: 6\n"));
        assert!(text.contains("\nThreading order:\n"));
    }

    #[test]
    fn test_every_tube_threaded_twice() {
        let threading = thread_soup(&regular_tetra_soup(), 1.0).unwrap();

        let mut counts = std::collections::HashMap::new();
        for string in &threading.plan.strings {
            for token in string {
                *counts.entry(token.trim_end_matches('\'')).or_insert(0usize) += 1;
            }
        }
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&c| c == 2));
    }
}
