//! Index types for mesh elements.
//!
//! This module provides type-safe index wrappers for vertices, triangles,
//! directed edges, and undirected (unique) edges. All indices are backed by
//! `u32`; sculpture-scale meshes are hundreds to low thousands of triangles,
//! so wider backing types would buy nothing.

use std::fmt::{self, Debug};

/// A type-safe vertex index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(u32);

/// A type-safe triangle index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TriangleId(u32);

/// A type-safe directed-edge index.
///
/// Directed edge `t * 3 + s` is the edge at local slot `s` (0, 1, or 2) of
/// triangle `t`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct DirEdgeId(u32);

/// A type-safe undirected (unique) edge index.
///
/// Unique edges are the physical tubes being labeled and priced.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct EdgeId(u32);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new index from a raw value.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index <= u32::MAX as usize, "index {} too large", index);
                Self(index as u32)
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(VertexId, "V");
impl_index_type!(TriangleId, "T");
impl_index_type!(DirEdgeId, "DE");
impl_index_type!(EdgeId, "E");

impl DirEdgeId {
    /// The directed edge at local slot `slot` of triangle `tri`.
    #[inline]
    pub fn from_slot(tri: TriangleId, slot: usize) -> Self {
        debug_assert!(slot < 3, "slot {} out of range", slot);
        Self::new(tri.index() * 3 + slot)
    }

    /// The triangle owning this directed edge.
    #[inline]
    pub fn triangle(self) -> TriangleId {
        TriangleId::new(self.index() / 3)
    }

    /// The local slot (0, 1, or 2) of this directed edge within its triangle.
    #[inline]
    pub fn slot(self) -> usize {
        self.index() % 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let v = VertexId::new(42);
        assert_eq!(v.index(), 42);
    }

    #[test]
    fn test_type_safety() {
        // These are different types and cannot be mixed
        let v = VertexId::new(0);
        let de = DirEdgeId::new(0);
        let e = EdgeId::new(0);

        // All have the same raw value but are distinct types
        assert_eq!(v.index(), de.index());
        assert_eq!(de.index(), e.index());
    }

    #[test]
    fn test_slot_round_trip() {
        let de = DirEdgeId::from_slot(TriangleId::new(7), 2);
        assert_eq!(de.index(), 23);
        assert_eq!(de.triangle(), TriangleId::new(7));
        assert_eq!(de.slot(), 2);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", VertexId::new(42)), "V(42)");
        assert_eq!(format!("{:?}", EdgeId::new(3)), "E(3)");
    }
}
