//! Mesh file I/O.
//!
//! The pipeline consumes a plain triangle soup; this module is the thin
//! collaborator that produces one from a mesh file. STL is the only format
//! sculpture meshes arrive in here.

pub mod stl;

pub use stl::load_soup;
