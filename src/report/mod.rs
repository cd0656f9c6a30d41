//! Threading plan assembly and rendering.
//!
//! Turns the extracted strings into build instructions: a table of labeled
//! tube lengths and, per string, the sequence of letter codes to thread.
//! The threading order is rendered first so that letter codes are assigned
//! in threading order; the tube table then comes out alphabetical in the
//! order the builder will first need each tube.

mod labels;

use std::fmt;

use crate::error::{Result, StrandError};
use crate::mesh::{DirEdgeId, EdgeId, IndexedMesh};
use crate::topology::WindingModel;

pub use labels::LetterTable;

/// Column width for wrapping threading sequences.
const WRAP_COLUMNS: usize = 34;

/// One labeled tube: a unique edge's letter code and its scaled length.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeEntry {
    /// The tube's letter code.
    pub code: String,
    /// Euclidean edge length times the scale factor.
    pub length: f64,
}

/// The assembled build instructions.
#[derive(Debug, Clone)]
pub struct ThreadingPlan {
    /// Labeled tube lengths, sorted by letter code.
    pub tubes: Vec<TubeEntry>,
    /// Per string, the letter codes in threading order (with `'` marking
    /// traversals against the first-seen direction).
    pub strings: Vec<Vec<String>>,
}

impl ThreadingPlan {
    /// Assemble the plan from the extracted strings.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::EdgeIdentityLost`] if a directed edge's vertex
    /// pair no longer matches its canonical undirected edge. The twist stage
    /// only ever swaps pairs wholesale, so a mismatch means the model was
    /// corrupted.
    pub fn assemble(
        mesh: &IndexedMesh,
        model: &WindingModel,
        strings: &[Vec<DirEdgeId>],
        scale: f64,
    ) -> Result<Self> {
        let mut letters = LetterTable::new(model.num_edges());

        let mut threaded = Vec::with_capacity(strings.len());
        for string in strings {
            let mut tokens = Vec::with_capacity(string.len());
            for &id in string {
                let de = model.dir_edge(id);
                let pair = if de.origin < de.dest {
                    [de.origin, de.dest]
                } else {
                    [de.dest, de.origin]
                };
                if pair != model.canonical(de.edge) {
                    return Err(StrandError::EdgeIdentityLost { edge: id.index() });
                }
                tokens.push(letters.traversal_code(de.edge, model.is_reversed(id)));
            }
            threaded.push(tokens);
        }

        let mut tubes: Vec<TubeEntry> = (0..model.num_edges())
            .map(|e| {
                let e = EdgeId::new(e);
                let [a, b] = model.canonical(e);
                TubeEntry {
                    code: letters.code(e),
                    length: mesh.distance(a, b) * scale,
                }
            })
            .collect();
        tubes.sort_by(|x, y| x.code.cmp(&y.code));

        Ok(Self { tubes, strings: threaded })
    }

    /// Get the number of unique tubes.
    #[inline]
    pub fn tube_count(&self) -> usize {
        self.tubes.len()
    }
}

impl fmt::Display for ThreadingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tubes: {}", self.tube_count())?;
        for tube in &self.tubes {
            writeln!(f, "{} {:.3}", tube.code, tube.length)?;
        }
        writeln!(f)?;

        writeln!(f, "Threading order:")?;
        for string in &self.strings {
            let sequence = string.join(" - ");
            writeln!(f, "{}", textwrap::fill(&sequence, WRAP_COLUMNS))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point3;

    use crate::mesh::IndexedMesh;
    use crate::topology::{apply_twists, extract_strings, FaceAdjacency, SpanningForest, WindingModel};

    use super::*;

    fn cube_soup() -> Vec<[Point3<f64>; 3]> {
        let v = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let faces = [
            [0, 3, 2], [0, 2, 1],
            [4, 5, 6], [4, 6, 7],
            [0, 1, 5], [0, 5, 4],
            [1, 2, 6], [1, 6, 5],
            [2, 3, 7], [2, 7, 6],
            [3, 0, 4], [3, 4, 7],
        ];
        faces
            .iter()
            .map(|f| [v[f[0]], v[f[1]], v[f[2]]])
            .collect()
    }

    fn cube_plan(scale: f64) -> ThreadingPlan {
        let mesh = IndexedMesh::from_soup(&cube_soup()).unwrap();
        let mut model = WindingModel::build(&mesh);
        let forest = SpanningForest::grow(&FaceAdjacency::build(&model));
        apply_twists(&mut model, &forest.crossings).unwrap();
        let strings = extract_strings(&model).unwrap();
        ThreadingPlan::assemble(&mesh, &model, &strings, scale).unwrap()
    }

    #[test]
    fn test_cube_tube_lengths() {
        let scale = 2.5;
        let plan = cube_plan(scale);

        // 12 cube edges plus 6 face diagonals
        assert_eq!(plan.tube_count(), 18);
        let side = scale;
        let diagonal = 2.0_f64.sqrt() * scale;

        let mut sides = 0;
        let mut diagonals = 0;
        for tube in &plan.tubes {
            if (tube.length - side).abs() < 1e-9 {
                sides += 1;
            } else if (tube.length - diagonal).abs() < 1e-9 {
                diagonals += 1;
            } else {
                panic!("unexpected tube length {}", tube.length);
            }
        }
        assert_eq!(sides, 12);
        assert_eq!(diagonals, 6);
    }

    #[test]
    fn test_tubes_sorted_by_code() {
        let plan = cube_plan(1.0);
        let codes: Vec<_> = plan.tubes.iter().map(|t| t.code.clone()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_codes_follow_threading_order() {
        let plan = cube_plan(1.0);
        // The first tokens of the first string meet fresh tubes in
        // alphabetical order: A, then B, ...
        let first = &plan.strings[0];
        assert_eq!(first[0], "A");
        let mut seen = std::collections::HashSet::new();
        let mut next = 0u8;
        for token in first {
            let bare = token.trim_end_matches('\'');
            if seen.insert(bare.to_string()) {
                assert_eq!(bare.as_bytes()[0], b'A' + next);
                next += 1;
            }
        }
    }

    #[test]
    fn test_render_shape() {
        let plan = cube_plan(1.0);
        let text = plan.to_string();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("Tubes: 18"));
        for _ in 0..18 {
            let line = lines.next().unwrap();
            let (code, length) = line.split_once(' ').unwrap();
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
            length.parse::<f64>().unwrap();
        }
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Threading order:"));

        // Wrapped threading lines stay within the wrap width
        for line in lines {
            assert!(line.len() <= WRAP_COLUMNS, "line too long: {:?}", line);
        }
    }
}
