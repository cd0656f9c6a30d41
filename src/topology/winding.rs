//! Winding model: the directed-edge arena.
//!
//! Every triangle contributes three directed edges, one per local slot. Each
//! directed edge carries its vertex pair, the index of the undirected edge it
//! covers, and a mutable *successor* pointer to the next directed edge a
//! string would thread through. Initially the successor cycles within the
//! owning triangle (slot 0 -> 1 -> 2 -> 0), so the model starts out as one
//! small closed loop of string per face.
//!
//! The successor pointers form a permutation over the whole arena. The twist
//! stage rewires them to splice face loops together; nothing is ever created
//! or destroyed, only redirected. Records live in a `Vec` addressed by
//! [`DirEdgeId`], so there are no ownership cycles to fight.

use std::collections::HashMap;

use crate::mesh::{DirEdgeId, EdgeId, IndexedMesh, TriangleId, VertexId};

/// A directed edge record.
#[derive(Debug, Clone, Copy)]
pub struct DirEdge {
    /// The vertex this directed edge leaves from.
    pub origin: VertexId,
    /// The vertex this directed edge arrives at.
    pub dest: VertexId,
    /// The next directed edge along the string.
    pub successor: DirEdgeId,
    /// The undirected edge this directed edge covers.
    pub edge: EdgeId,
}

/// The directed-edge arena plus the canonical undirected edge table.
#[derive(Debug, Clone)]
pub struct WindingModel {
    pub(crate) dir_edges: Vec<DirEdge>,
    /// Canonical undirected edges as ascending vertex pairs, in first-seen
    /// order over the directed edges.
    pub(crate) edges: Vec<[VertexId; 2]>,
}

impl WindingModel {
    /// Build the initial winding model for a mesh.
    ///
    /// Directed edge `t * 3 + s` covers the vertex pair at slot `s` of
    /// triangle `t` (consecutive pairs plus the wrap-around pair), and its
    /// successor is the next slot of the same triangle.
    pub fn build(mesh: &IndexedMesh) -> Self {
        let n = mesh.num_triangles();
        let mut dir_edges = Vec::with_capacity(n * 3);
        let mut edges: Vec<[VertexId; 2]> = Vec::new();
        let mut canonical: HashMap<[VertexId; 2], EdgeId> = HashMap::new();

        for t in mesh.triangle_ids() {
            for (slot, [origin, dest]) in mesh.directed_pairs(t).into_iter().enumerate() {
                let key = if origin < dest { [origin, dest] } else { [dest, origin] };
                let edge = *canonical.entry(key).or_insert_with(|| {
                    let id = EdgeId::new(edges.len());
                    edges.push(key);
                    id
                });
                dir_edges.push(DirEdge {
                    origin,
                    dest,
                    successor: DirEdgeId::from_slot(t, (slot + 1) % 3),
                    edge,
                });
            }
        }

        Self { dir_edges, edges }
    }

    /// Get the number of directed edges.
    #[inline]
    pub fn num_dir_edges(&self) -> usize {
        self.dir_edges.len()
    }

    /// Get the number of undirected (unique) edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get a directed edge by ID.
    #[inline]
    pub fn dir_edge(&self, id: DirEdgeId) -> &DirEdge {
        &self.dir_edges[id.index()]
    }

    /// Get the successor of a directed edge.
    #[inline]
    pub fn successor(&self, id: DirEdgeId) -> DirEdgeId {
        self.dir_edge(id).successor
    }

    /// Get the undirected edge a directed edge covers.
    #[inline]
    pub fn edge_of(&self, id: DirEdgeId) -> EdgeId {
        self.dir_edge(id).edge
    }

    /// The canonical (ascending) vertex pair of an undirected edge.
    #[inline]
    pub fn canonical(&self, e: EdgeId) -> [VertexId; 2] {
        self.edges[e.index()]
    }

    /// Whether a directed edge currently runs against its canonical pair.
    ///
    /// The canonical pair is ascending, so the forward occurrence runs from
    /// the smaller to the larger vertex. Cycle reversal swaps origin and
    /// dest, flipping this automatically.
    #[inline]
    pub fn is_reversed(&self, id: DirEdgeId) -> bool {
        let de = self.dir_edge(id);
        de.origin > de.dest
    }

    /// Iterate over all directed edge IDs.
    pub fn dir_edge_ids(&self) -> impl Iterator<Item = DirEdgeId> + '_ {
        (0..self.dir_edges.len()).map(DirEdgeId::new)
    }

    /// The `(triangle, slot)` occurrences of each undirected edge, bucketed
    /// in [`EdgeId`] order. On a closed manifold mesh every bucket holds
    /// exactly two entries.
    pub fn edge_occurrences(&self) -> Vec<Vec<(TriangleId, usize)>> {
        let mut buckets = vec![Vec::new(); self.edges.len()];
        for id in self.dir_edge_ids() {
            buckets[self.edge_of(id).index()].push((id.triangle(), id.slot()));
        }
        buckets
    }

    /// Collect the successor cycle containing `start`, in traversal order.
    pub(crate) fn collect_cycle(&self, start: DirEdgeId) -> Vec<DirEdgeId> {
        let mut cycle = vec![start];
        let mut cur = self.successor(start);
        while cur != start {
            cycle.push(cur);
            cur = self.successor(cur);
        }
        cycle
    }

    /// Reverse the successor cycle containing `start` in place.
    ///
    /// Every member's vertex pair is flipped and the successor pointers are
    /// rebuilt so the cycle runs backward. Vertex-continuity of the cycle is
    /// preserved: each member still arrives where its successor departs.
    pub(crate) fn reverse_cycle(&mut self, start: DirEdgeId) {
        let cycle = self.collect_cycle(start);
        for &id in &cycle {
            let de = &mut self.dir_edges[id.index()];
            std::mem::swap(&mut de.origin, &mut de.dest);
        }
        for (k, &id) in cycle.iter().enumerate() {
            let prev = if k == 0 { cycle[cycle.len() - 1] } else { cycle[k - 1] };
            self.dir_edges[id.index()].successor = prev;
        }
    }

    /// Exchange the successor pointers of two directed edges.
    ///
    /// When the two edges lie on distinct cycles this splices them into one.
    pub(crate) fn swap_successors(&mut self, i1: DirEdgeId, i2: DirEdgeId) {
        let s1 = self.successor(i1);
        let s2 = self.successor(i2);
        self.dir_edges[i1.index()].successor = s2;
        self.dir_edges[i2.index()].successor = s1;
    }
}
