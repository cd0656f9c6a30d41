//! Error types for strand.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`StrandError`].
pub type Result<T> = std::result::Result<T, StrandError>;

/// Errors that can occur while planning a threading.
#[derive(Error, Debug)]
pub enum StrandError {
    /// The input soup contains no triangles.
    #[error("mesh has no triangles")]
    EmptyMesh,

    /// A twist was requested between two directed edges that do not lie
    /// on the same undirected edge. This is an internal invariant
    /// violation, not a property of the input mesh.
    #[error("tried to twist directed edges {i1} and {i2}, which do not share an edge")]
    NonSharedTwist {
        /// Arena index of the first directed edge.
        i1: usize,
        /// Arena index of the second directed edge.
        i2: usize,
    },

    /// String extraction reached a directed edge already claimed by
    /// another string. The successor function is not a permutation.
    #[error("string traversal branched at directed edge {edge}")]
    BranchedString {
        /// Arena index of the offending directed edge.
        edge: usize,
    },

    /// A directed edge's vertex pair no longer matches its canonical
    /// undirected edge during output assembly.
    #[error("directed edge {edge} lost its canonical edge identity")]
    EdgeIdentityLost {
        /// Arena index of the offending directed edge.
        edge: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading a mesh from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}
