//! Twist application: splicing face loops along the spanning forest.
//!
//! For each tree crossing, the two directed edges on either side of the
//! shared undirected edge swap successor pointers. Exchanging the outgoing
//! pointers of two nodes in distinct cycles of a permutation merges those
//! cycles into one; applied along every tree edge this splices all the face
//! loops of a component into long closed walks.
//!
//! The splice only keeps the walk vertex-continuous if both directed edges
//! run in the same direction at swap time: the successor of one must depart
//! where the other arrives. On a consistently wound mesh twin edges run in
//! *opposite* directions, so the common case is to first reverse the cycle
//! containing the newly discovered triangle's edge. At that point that cycle
//! is still the triangle's own pristine 3-loop, so the fix is cheap.

use crate::error::{Result, StrandError};
use crate::mesh::DirEdgeId;

use super::spanning::TreeCrossing;
use super::winding::WindingModel;

/// Apply the tree crossings to the winding model, in discovery order.
///
/// # Errors
///
/// Returns [`StrandError::NonSharedTwist`] if a crossing names two directed
/// edges that do not cover the same undirected edge. That means the
/// adjacency or spanning stage broke an invariant; the input mesh cannot
/// cause it.
pub fn apply_twists(model: &mut WindingModel, crossings: &[TreeCrossing]) -> Result<()> {
    for crossing in crossings {
        let i1 = DirEdgeId::from_slot(crossing.from, crossing.from_slot);
        let i2 = DirEdgeId::from_slot(crossing.to, crossing.to_slot);

        if model.edge_of(i1) != model.edge_of(i2) {
            return Err(StrandError::NonSharedTwist {
                i1: i1.index(),
                i2: i2.index(),
            });
        }

        // Same undirected edge, so the pairs are either equal or opposite.
        if model.dir_edge(i1).origin != model.dir_edge(i2).origin {
            model.reverse_cycle(i2);
        }

        model.swap_successors(i1, i2);
    }
    Ok(())
}
