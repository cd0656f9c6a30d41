//! STL (stereolithography) format support.
//!
//! Loads an STL file as a raw triangle soup. Both binary and ASCII formats
//! are supported (detected automatically by `stl_io`).
//!
//! The soup is returned exactly as stored: no vertex welding and no
//! degenerate-triangle filtering. Deduplication belongs to
//! [`IndexedMesh::from_soup`](crate::mesh::IndexedMesh::from_soup) and is
//! bit-exact; dropping triangles here would silently change the closure
//! accounting downstream.

use std::fs::File;
use std::path::Path;

use nalgebra::Point3;

use crate::error::{Result, StrandError};

/// Load the triangle soup from an STL file.
///
/// # Example
///
/// ```no_run
/// use strand::io::stl;
///
/// let soup = stl::load_soup("model.stl").unwrap();
/// ```
pub fn load_soup<P: AsRef<Path>>(path: P) -> Result<Vec<[Point3<f64>; 3]>> {
    let path = path.as_ref();
    let mut file = File::open(path)?;

    let stl = stl_io::read_stl(&mut file).map_err(|e| StrandError::LoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let soup = stl
        .faces
        .iter()
        .map(|tri| {
            let mut corners = [Point3::origin(); 3];
            for (corner, &vi) in corners.iter_mut().zip(&tri.vertices) {
                let v = &stl.vertices[vi];
                *corner = Point3::new(v[0] as f64, v[1] as f64, v[2] as f64);
            }
            corners
        })
        .collect();

    Ok(soup)
}
