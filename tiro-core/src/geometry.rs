/// Geometry primitives for 3D rendering
use crate::vector::Vector3;

/// Floats per vertex position
pub const FLOATS_PER_VERTEX: usize = 3;
/// Floats per triangle (three positions)
pub const FLOATS_PER_TRIANGLE: usize = 3 * FLOATS_PER_VERTEX;

/// A triangle face defined by three positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vector3; 3],
}

impl Triangle {
    pub fn new(v0: Vector3, v1: Vector3, v2: Vector3) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Calculate the face normal from the triangle's winding.
    ///
    /// Degenerate (zero-area) triangles have no normal and yield NaN.
    pub fn normal(&self) -> Vector3 {
        let [v0, v1, v2] = self.vertices;
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        edge1.cross(edge2).normalized()
    }
}

/// A positions-only triangle soup, three floats per vertex and nine per triangle,
/// in draw order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<f32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a flat position buffer; its length must be a multiple of nine
    pub fn from_positions(positions: Vec<f32>) -> Option<Self> {
        if positions.len() % FLOATS_PER_TRIANGLE != 0 {
            return None;
        }
        Some(Self { positions })
    }

    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(triangles * FLOATS_PER_TRIANGLE),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        for v in triangle.vertices {
            self.positions.extend_from_slice(&v.to_array());
        }
    }

    /// The flat float buffer handed to a vertex-buffer upload
    pub fn as_slice(&self) -> &[f32] {
        &self.positions
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / FLOATS_PER_VERTEX
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / FLOATS_PER_TRIANGLE
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.positions.chunks_exact(FLOATS_PER_TRIANGLE).map(|t| {
            Triangle::new(
                Vector3::new(t[0], t[1], t[2]),
                Vector3::new(t[3], t[4], t[5]),
                Vector3::new(t[6], t[7], t[8]),
            )
        })
    }

    /// Axis-aligned bounding box as `(min, max)`, `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vector3, Vector3)> {
        let mut points = self
            .positions
            .chunks_exact(FLOATS_PER_VERTEX)
            .map(|p| Vector3::new(p[0], p[1], p[2]));
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Vector3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Vector3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        }))
    }

    /// Create a simple cube mesh, counter-clockwise winding seen from outside
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let corners = [
            Vector3::new(-h, -h, h),
            Vector3::new(h, -h, h),
            Vector3::new(h, h, h),
            Vector3::new(-h, h, h),
            Vector3::new(-h, -h, -h),
            Vector3::new(h, -h, -h),
            Vector3::new(h, h, -h),
            Vector3::new(-h, h, -h),
        ];
        // Front, back, top, bottom, right, left
        let faces: [[usize; 4]; 6] = [
            [0, 1, 2, 3],
            [5, 4, 7, 6],
            [3, 2, 6, 7],
            [4, 5, 1, 0],
            [1, 5, 6, 2],
            [4, 0, 3, 7],
        ];

        let mut mesh = Self::with_capacity(faces.len() * 2);
        for [a, b, c, d] in faces {
            mesh.add_triangle(Triangle::new(corners[a], corners[b], corners[c]));
            mesh.add_triangle(Triangle::new(corners[a], corners[c], corners[d]));
        }
        mesh
    }
}
