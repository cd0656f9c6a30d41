//! Core mesh data structures.
//!
//! This module provides the indexed triangle-mesh representation the
//! threading pipeline works on, together with the closure validator.
//!
//! # Overview
//!
//! The primary type is [`IndexedMesh`]: a deduplicated vertex list plus
//! triangle index triples, built from a raw triangle soup by bit-exact
//! coordinate deduplication (see [`IndexedMesh::from_soup`]).
//!
//! [`check_closure`] verifies that every undirected edge of the mesh is
//! covered by exactly two opposing directed edges; a mesh that fails the
//! check still flows through the pipeline, but the threading instructions
//! may be wrong.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe u32 index wrappers:
//! - [`VertexId`] - Identifies a deduplicated vertex
//! - [`TriangleId`] - Identifies a triangle
//! - [`DirEdgeId`] - Identifies a directed edge (one of 3 per triangle)
//! - [`EdgeId`] - Identifies an undirected (unique) edge, i.e. one tube

mod closure;
mod index;
mod indexed;

pub use closure::{check_closure, ClosureDefect, ClosureReport};
pub use index::{DirEdgeId, EdgeId, TriangleId, VertexId};
pub use indexed::IndexedMesh;
