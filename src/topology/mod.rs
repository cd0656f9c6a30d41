//! Threading topology: from face loops to strings.
//!
//! This module holds the algorithmic core of the crate. Starting from an
//! [`IndexedMesh`](crate::mesh::IndexedMesh):
//!
//! 1. [`WindingModel::build`] creates three directed edges per triangle with
//!    successor pointers cycling each face, and deduplicates canonical vertex
//!    pairs into the unique (undirected) edge table.
//! 2. [`FaceAdjacency::build`] records which triangles share which unique
//!    edge, with the local slot on both sides.
//! 3. [`SpanningForest::grow`] runs a breadth-first traversal per connected
//!    shell, yielding tree crossings in discovery order.
//! 4. [`apply_twists`] splices the face loops together along each crossing,
//!    reversing inconsistently running loops first.
//! 5. [`extract_strings`] partitions the final successor permutation into
//!    disjoint cycles - the physical strings.
//!
//! The spanning-tree heuristic merges each shell's loops into the fewest
//! cycles this construction can reach (ideally one per shell). It makes no
//! optimality claim: no alternative spanning trees are attempted.

mod adjacency;
mod spanning;
mod strings;
mod twist;
mod winding;

pub use adjacency::{AdjacentFace, FaceAdjacency};
pub use spanning::{SpanningForest, TreeCrossing};
pub use strings::extract_strings;
pub use twist::apply_twists;
pub use winding::{DirEdge, WindingModel};
