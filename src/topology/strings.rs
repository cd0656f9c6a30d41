//! String extraction: reading cycles off the final successor permutation.
//!
//! After twisting, every directed edge still has exactly one successor and
//! one predecessor. The strings are the disjoint cycles of that permutation;
//! together they partition the arena, so every tube is threaded exactly twice
//! (once per directed occurrence).

use crate::error::{Result, StrandError};
use crate::mesh::DirEdgeId;

use super::winding::WindingModel;

/// Partition all directed edges into successor cycles.
///
/// Starts are scanned in increasing [`DirEdgeId`] order, so the string order
/// and each string's starting edge are deterministic.
///
/// # Errors
///
/// Returns [`StrandError::BranchedString`] if the walk reaches a directed
/// edge already claimed by another string before closing its loop. That can
/// only happen if the successor function stopped being a permutation, which
/// is a pipeline bug rather than an input defect.
pub fn extract_strings(model: &WindingModel) -> Result<Vec<Vec<DirEdgeId>>> {
    let mut visited = vec![false; model.num_dir_edges()];
    let mut strings = Vec::new();

    for start in model.dir_edge_ids() {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;
        let mut string = vec![start];

        let mut cur = model.successor(start);
        while cur != start {
            if visited[cur.index()] {
                return Err(StrandError::BranchedString { edge: cur.index() });
            }
            visited[cur.index()] = true;
            string.push(cur);
            cur = model.successor(cur);
        }
        strings.push(string);
    }

    Ok(strings)
}
