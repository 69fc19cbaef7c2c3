//! OBJ mesh loading
//!
//! Parses a triangulated OBJ file with `tobj` and expands every face corner
//! into its own vertex, in the order the corners appear in the file. Every
//! `pos/texcoord/normal` reference is checked against the attribute lists;
//! an unresolvable reference fails with [`AssetError::Malformed`].

use std::path::Path;

use crate::error::AssetError;
use crate::gfx::geometry::GeometryData;

/// Loads the mesh at `path` as an unindexed triangle list.
///
/// Faces must have exactly three `v/vt/vn` references. Models in the file
/// are concatenated in file order.
pub fn load_mesh(path: impl AsRef<Path>) -> Result<GeometryData, AssetError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AssetError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let source = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    check_face_references(&source).map_err(|reason| AssetError::malformed(path, reason))?;

    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            single_index: false,
            triangulate: false,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        },
    )
    .map_err(|err| match err {
        tobj::LoadError::OpenFileFailed => AssetError::NotFound {
            path: path.to_path_buf(),
        },
        other => AssetError::malformed(path, other.to_string()),
    })?;

    let mut data = GeometryData::new();
    for model in &models {
        append_model(&mut data, &model.mesh)
            .map_err(|reason| AssetError::malformed(path, format!("{}: {}", model.name, reason)))?;
    }

    log::info!(
        "Loaded mesh {}: {} vertices ({} triangles)",
        path.display(),
        data.vertex_count(),
        data.triangle_count()
    );

    Ok(data)
}

/// Resolves each face corner of `mesh` and appends it to `data`.
fn append_model(data: &mut GeometryData, mesh: &tobj::Mesh) -> Result<(), String> {
    if let Some(arity) = mesh.face_arities.iter().find(|&&a| a != 3) {
        return Err(format!("face with {} vertices, expected 3", arity));
    }
    if mesh.indices.len() % 3 != 0 {
        return Err(format!(
            "{} face references do not form whole triangles",
            mesh.indices.len()
        ));
    }
    let texcoord_indices = &mesh.texcoord_indices;
    if texcoord_indices.len() != mesh.indices.len() {
        return Err("face reference without texture coordinate".to_string());
    }
    let normal_indices = &mesh.normal_indices;
    if normal_indices.len() != mesh.indices.len() {
        return Err("face reference without normal".to_string());
    }

    for corner in 0..mesh.indices.len() {
        let position = fetch::<3>(&mesh.positions, mesh.indices[corner], "position")?;
        let tex_coords = fetch::<2>(&mesh.texcoords, texcoord_indices[corner], "texture coordinate")?;
        let normal = fetch::<3>(&mesh.normals, normal_indices[corner], "normal")?;
        data.push_vertex(position, tex_coords, normal);
    }

    Ok(())
}

/// Requires every corner of every `f` line to spell out all three of
/// `pos/texcoord/normal`. `tobj` substitutes index 0 for an omitted
/// reference, so `1//1` has to be caught before it parses the file.
fn check_face_references(source: &str) -> Result<(), String> {
    for (number, line) in source.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("f") {
            continue;
        }
        for corner in tokens {
            let mut parts = corner.split('/');
            let complete = (0..3).all(|_| parts.next().is_some_and(|part| !part.is_empty()))
                && parts.next().is_none();
            if !complete {
                return Err(format!(
                    "line {}: face reference `{}` is not of the form v/vt/vn",
                    number + 1,
                    corner
                ));
            }
        }
    }
    Ok(())
}

/// Reads the `N`-component attribute at `index` from a flat array.
fn fetch<const N: usize>(flat: &[f32], index: u32, what: &str) -> Result<[f32; N], String> {
    let start = index as usize * N;
    flat.get(start..start + N)
        .and_then(|slice| <[f32; N]>::try_from(slice).ok())
        .ok_or_else(|| {
            format!(
                "{} index {} out of range ({} available)",
                what,
                index as usize + 1,
                flat.len() / N
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_in_range() {
        let flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(fetch::<3>(&flat, 1, "position").unwrap(), [4.0, 5.0, 6.0]);
        assert_eq!(fetch::<2>(&flat, 2, "uv").unwrap(), [5.0, 6.0]);
    }

    #[test]
    fn test_fetch_out_of_range() {
        let flat = [1.0, 2.0, 3.0];
        let err = fetch::<3>(&flat, 1, "position").unwrap_err();
        assert!(err.contains("position index 2 out of range"));
    }

    #[test]
    fn test_complete_face_references() {
        let source = "v 0 0 0\nf 1/1/1 2/2/1 3/3/1\n# f 1//1\n";
        assert!(check_face_references(source).is_ok());
    }

    #[test]
    fn test_incomplete_face_references() {
        for face in [
            "f 1//1 2//1 3//1",
            "f 1/1/1 2//1 3/3/1",
            "f 1/1 2/2 3/3",
            "f 1 2 3",
            "f 1/1/1/1 2/2/1 3/3/1",
        ] {
            let err = check_face_references(face).unwrap_err();
            assert!(err.starts_with("line 1:"), "{face}: {err}");
        }
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_mesh("definitely/not/here.obj").unwrap_err();
        assert!(err.is_not_found());
    }
}
