/// Minimal OBJ loader: `v` positions and triangular `f` faces into a flat position buffer
use std::path::Path;

use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{i64 as integer, space0, space1},
    number::complete::float,
    sequence::preceded,
    IResult,
};

use crate::error::LoadError;
use crate::files;
use crate::geometry::{Mesh, FLOATS_PER_VERTEX};
use crate::vector::Vector3;

/// Face groups read per `f` line; extra groups of polygons are dropped
const FACE_ARITY: usize = 3;

/// A face-vertex reference as written in the file (1-based)
#[derive(Debug, Clone, Copy)]
struct FaceRef {
    index: i64,
    line: usize,
}

impl FaceRef {
    fn position(&self) -> Option<usize> {
        self.index.checked_sub(1).and_then(|i| usize::try_from(i).ok())
    }
}

/// Load an OBJ file from disk
pub fn load(path: impl AsRef<Path>) -> Result<Mesh, LoadError> {
    let path = path.as_ref();
    let source = files::read_all(path)?;
    let mesh = parse_obj(&source)?;
    log::info!(
        "loaded {} ({} triangles, {} vertices)",
        path.display(),
        mesh.triangle_count(),
        mesh.vertex_count()
    );
    Ok(mesh)
}

/// Parse OBJ text.
///
/// Only `v x y z` and `f a b c` lines are read; every other line is skipped.
/// Face groups may carry `/`-separated texture and normal indices, which are
/// ignored. Faces are not triangulated: a polygon contributes its first three
/// groups. Shared vertices are duplicated per reference, so the output holds
/// three positions per face in file order.
pub fn parse_obj(source: &str) -> Result<Mesh, LoadError> {
    let mut vertices: Vec<Vector3> = Vec::new();
    let mut faces: Vec<FaceRef> = Vec::new();
    let mut polygons = 0usize;

    for (number, raw) in source.split('\n').enumerate() {
        let line_number = number + 1;
        let line = raw
            .trim_start_matches(|c: char| c == ' ' || c == '\r')
            .trim_end_matches('\r');

        if line.starts_with("v ") {
            let (_, vertex) = parse_vertex(line)
                .map_err(|_| LoadError::malformed(line_number, "expected three coordinates after 'v'"))?;
            vertices.push(vertex);
        } else if line.starts_with("f ") {
            let (rest, indices) = parse_face(line)
                .map_err(|_| LoadError::malformed(line_number, "expected three vertex indices after 'f'"))?;
            if has_extra_group(rest) {
                polygons += 1;
            }
            faces.extend(indices.iter().map(|&index| FaceRef {
                index,
                line: line_number,
            }));
        }
    }

    if polygons > 0 {
        log::warn!("{} faces had more than {} vertices; only the first {} were kept", polygons, FACE_ARITY, FACE_ARITY);
    }
    log::debug!("parsed {} vertices and {} face references", vertices.len(), faces.len());

    resolve_faces(&vertices, &faces)
}

/// Dereference every face index into the output buffer
fn resolve_faces(vertices: &[Vector3], faces: &[FaceRef]) -> Result<Mesh, LoadError> {
    let len = faces.len() * FLOATS_PER_VERTEX;
    let mut positions: Vec<f32> = Vec::new();
    positions
        .try_reserve_exact(len)
        .map_err(|_| LoadError::AllocationFailure {
            requested: len * std::mem::size_of::<f32>(),
        })?;

    for face in faces {
        let vertex = face
            .position()
            .and_then(|i| vertices.get(i))
            .ok_or_else(|| {
                LoadError::malformed(
                    face.line,
                    format!(
                        "face references vertex {} but {} vertices are defined",
                        face.index,
                        vertices.len()
                    ),
                )
            })?;
        positions.extend_from_slice(&vertex.to_array());
    }

    Mesh::from_positions(positions).ok_or_else(|| {
        let line = faces.last().map_or(0, |face| face.line);
        LoadError::malformed(line, "face references do not form whole triangles")
    })
}

fn parse_vertex(input: &str) -> IResult<&str, Vector3> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = preceded(space1, float)(input)?;
    let (input, y) = preceded(space1, float)(input)?;
    let (input, z) = preceded(space1, float)(input)?;
    Ok((input, Vector3::new(x, y, z)))
}

fn parse_face(input: &str) -> IResult<&str, [i64; FACE_ARITY]> {
    let (mut input, _) = tag("f")(input)?;
    let mut indices = [0; FACE_ARITY];
    for slot in indices.iter_mut() {
        let (rest, index) = parse_face_group(input)?;
        *slot = index;
        input = rest;
    }
    Ok((input, indices))
}

/// True when another face group follows the first three
fn has_extra_group(rest: &str) -> bool {
    parse_face_group(rest).is_ok()
}

/// `v`, `v/vt`, `v//vn` or `v/vt/vn`; only the position index is kept
fn parse_face_group(input: &str) -> IResult<&str, i64> {
    let (input, index) = preceded(space0, integer)(input)?;
    let (input, _) = take_till(|c: char| c.is_whitespace())(input)?;
    Ok((input, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::tests::fixture;

    const QUAD: &str = "\
# two triangles sharing an edge
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3
f 1 3 4
";

    #[test]
    fn test_shared_vertices_are_duplicated() {
        let mesh = parse_obj(QUAD).unwrap();
        let positions = mesh.as_slice();
        assert_eq!(positions.len(), 18);
        assert_eq!(&positions[0..3], &positions[9..12]);
        assert_eq!(&positions[6..9], &positions[12..15]);
        assert_eq!(&positions[15..18], &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_sub_indices_are_skipped() {
        let source = "v 1 2 3\nv 4 5 6\nv 7 8 9\nvt 0.5 0.5\nvn 0 0 1\nf 1/1/1 2/1/1 3/1/1\nf 3//1 2//1 1//1\nf 2/1 3/1 1/1\n";
        let mesh = parse_obj(source).unwrap();
        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(
            &mesh.as_slice()[9..18],
            &[7.0, 8.0, 9.0, 4.0, 5.0, 6.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_unrecognised_lines_are_ignored() {
        let source = "mtllib scene.mtl\r\no Quad\r\n\r\n   v -1.5 2e-1 +3\r\nv 0 0 0\r\nv 0 1 0\r\nusemtl red\r\ns off\r\nf 1 2 3\r\n";
        let mesh = parse_obj(source).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(&mesh.as_slice()[0..3], &[-1.5, 0.2, 3.0]);
    }

    #[test]
    fn test_faces_may_precede_vertices() {
        let mesh = parse_obj("f 3 2 1\nv 1 0 0\nv 0 1 0\nv 0 0 1\n").unwrap();
        assert_eq!(&mesh.as_slice()[0..3], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_polygons_keep_first_three_groups() {
        let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n").unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(&mesh.as_slice()[6..9], &[1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_trailing_comment_is_not_a_polygon() {
        let (rest, indices) = parse_face("f 1 2 3 # note").unwrap();
        assert_eq!(indices, [1, 2, 3]);
        assert!(!has_extra_group(rest));

        let (rest, _) = parse_face("f 1/1 2/1 3/1 4/1").unwrap();
        assert!(has_extra_group(rest));
        assert!(!has_extra_group(""));

        let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3 # note\n").unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_partial_triangle_is_malformed() {
        let vertices = [Vector3::zero(), Vector3::one()];
        let faces = [FaceRef { index: 1, line: 7 }, FaceRef { index: 2, line: 7 }];
        assert!(matches!(
            resolve_faces(&vertices, &faces),
            Err(LoadError::MalformedGeometry { line: 7, .. })
        ));
    }

    #[test]
    fn test_no_faces_gives_empty_mesh() {
        let mesh = parse_obj("v 0 0 0\nv 1 0 0\n").unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_out_of_range_index() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\nf 1 2 9\n").unwrap_err();
        match err {
            LoadError::MalformedGeometry { line, reason } => {
                assert_eq!(line, 5);
                assert!(reason.contains("vertex 9"));
            }
            other => panic!("expected malformed geometry, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_and_negative_indices_are_malformed() {
        let vertices = "v 0 0 0\nv 1 0 0\nv 1 1 0\n";
        for face in ["f 0 1 2", "f -1 -2 -3", "f -9223372036854775808 1 2"] {
            let source = format!("{}{}\n", vertices, face);
            assert!(matches!(
                parse_obj(&source),
                Err(LoadError::MalformedGeometry { line: 4, .. })
            ));
        }
    }

    #[test]
    fn test_short_lines_are_malformed() {
        assert!(matches!(
            parse_obj("v 0 0 0\nv 1 0 0\nf 1 2\n"),
            Err(LoadError::MalformedGeometry { line: 3, .. })
        ));
        assert!(matches!(
            parse_obj("v 0 zero 0\n"),
            Err(LoadError::MalformedGeometry { line: 1, .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = fixture("quad.obj", QUAD.as_bytes());
        let mesh = load(&path).unwrap();
        assert_eq!(mesh.as_slice().len(), 18);
    }

    #[test]
    fn test_load_empty_file() {
        let path = fixture("empty.obj", b"");
        assert!(matches!(load(&path), Err(LoadError::EmptyInput { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("tiro-missing-model.obj");
        assert!(matches!(load(&path), Err(LoadError::OpenFailure { .. })));
    }
}
