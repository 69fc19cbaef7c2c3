//! # Primitive Shape Generation
//!
//! Procedural cube used for the satellites. The shape is a pure function of
//! its edge length; nothing is cached between calls.

use super::GeometryData;

/// One cube face: outward normal plus four corners given as
/// (corner sign, uv) pairs in drawing order.
struct Face {
    normal: [f32; 3],
    corners: [([f32; 3], [f32; 2]); 4],
}

#[rustfmt::skip]
const CUBE_FACES: [Face; 6] = [
    // Front (+Z)
    Face { normal: [0.0, 0.0, 1.0], corners: [
        ([-1.0, -1.0,  1.0], [0.0, 0.0]), ([ 1.0, -1.0,  1.0], [1.0, 0.0]),
        ([ 1.0,  1.0,  1.0], [1.0, 1.0]), ([-1.0,  1.0,  1.0], [0.0, 1.0]),
    ]},
    // Back (-Z)
    Face { normal: [0.0, 0.0, -1.0], corners: [
        ([-1.0, -1.0, -1.0], [1.0, 0.0]), ([-1.0,  1.0, -1.0], [1.0, 1.0]),
        ([ 1.0,  1.0, -1.0], [0.0, 1.0]), ([ 1.0, -1.0, -1.0], [0.0, 0.0]),
    ]},
    // Top (+Y)
    Face { normal: [0.0, 1.0, 0.0], corners: [
        ([-1.0,  1.0, -1.0], [0.0, 1.0]), ([-1.0,  1.0,  1.0], [0.0, 0.0]),
        ([ 1.0,  1.0,  1.0], [1.0, 0.0]), ([ 1.0,  1.0, -1.0], [1.0, 1.0]),
    ]},
    // Bottom (-Y)
    Face { normal: [0.0, -1.0, 0.0], corners: [
        ([-1.0, -1.0, -1.0], [1.0, 1.0]), ([ 1.0, -1.0, -1.0], [0.0, 1.0]),
        ([ 1.0, -1.0,  1.0], [0.0, 0.0]), ([-1.0, -1.0,  1.0], [1.0, 0.0]),
    ]},
    // Right (+X)
    Face { normal: [1.0, 0.0, 0.0], corners: [
        ([ 1.0, -1.0, -1.0], [1.0, 0.0]), ([ 1.0,  1.0, -1.0], [1.0, 1.0]),
        ([ 1.0,  1.0,  1.0], [0.0, 1.0]), ([ 1.0, -1.0,  1.0], [0.0, 0.0]),
    ]},
    // Left (-X)
    Face { normal: [-1.0, 0.0, 0.0], corners: [
        ([-1.0, -1.0, -1.0], [0.0, 0.0]), ([-1.0, -1.0,  1.0], [1.0, 0.0]),
        ([-1.0,  1.0,  1.0], [1.0, 1.0]), ([-1.0,  1.0, -1.0], [0.0, 1.0]),
    ]},
];

/// Generate a cube with edge length `size`, centered at the origin.
///
/// Each of the six faces is a quad of four unshared vertices carrying the
/// face's outward normal, split into two triangles (`0,1,2` and `2,3,0`).
/// The texture is mapped once per face.
pub fn generate_cube(size: f32) -> GeometryData {
    let h = size / 2.0;
    let mut data = GeometryData::new();

    for face in CUBE_FACES.iter() {
        let base = data.vertices.len() as u32;
        for (sign, uv) in face.corners.iter() {
            data.vertices.push([sign[0] * h, sign[1] * h, sign[2] * h]);
            data.tex_coords.push(*uv);
            data.normals.push(face.normal);
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube(1.0);
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.vertices.len(), cube.normals.len());
        assert_eq!(cube.vertices.len(), cube.tex_coords.len());
    }

    #[test]
    fn test_cube_extent_follows_size() {
        let cube = generate_cube(0.4);
        for v in &cube.vertices {
            for c in v {
                assert!((c.abs() - 0.2).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_normals_point_outward() {
        let cube = generate_cube(2.0);
        for (position, normal) in cube.vertices.iter().zip(cube.normals.iter()) {
            // The normal's axis component has the same sign as the corner
            let dot: f32 = (0..3).map(|i| position[i] * normal[i]).sum();
            assert!(dot > 0.0, "normal {:?} at {:?} points inward", normal, position);
            assert_eq!(normal.iter().map(|c| c.abs()).sum::<f32>(), 1.0);
        }
    }

    #[test]
    fn test_each_face_covers_full_texture() {
        let cube = generate_cube(1.0);
        for face in cube.tex_coords.chunks(4) {
            let mut sorted: Vec<[f32; 2]> = face.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert_eq!(sorted, vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]);
        }
    }

    #[test]
    fn test_zero_size_collapses_to_origin() {
        let cube = generate_cube(0.0);
        assert!(cube.vertices.iter().all(|v| v.iter().all(|c| *c == 0.0)));
    }
}
