/// Column-major 3x3 and 4x4 matrices (`data[col * N + row]`)
use std::fmt;
use std::ops;

use crate::vector::{Vector3, Vector4};

/// Determinants with a smaller magnitude are treated as singular by [`Matrix4::inverse`]
pub const SINGULAR_EPSILON: f32 = 1e-6;

/// 3x3 matrix, only used as scratch space for cofactor expansion
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix3 {
    pub data: [f32; 9],
}

impl Matrix3 {
    #[inline]
    pub const fn new(data: [f32; 9]) -> Self {
        Self { data }
    }

    pub const fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col * 3 + row]
    }

    pub fn transpose(&self) -> Self {
        let mut m = Self::new([0.0; 9]);
        for col in 0..3 {
            for row in 0..3 {
                m.data[row * 3 + col] = self.get(row, col);
            }
        }
        m
    }

    pub fn determinant(&self) -> f32 {
        let m = |row, col| self.get(row, col);
        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// 4x4 transform matrix in the OpenGL convention (column vectors, column-major storage)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4 {
    pub data: [f32; 16],
}

impl Matrix4 {
    #[inline]
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    pub const fn zero() -> Self {
        Self::new([0.0; 16])
    }

    pub const fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn from_columns(columns: [Vector4; 4]) -> Self {
        let mut m = Self::zero();
        for (col, v) in columns.iter().enumerate() {
            m.data[col * 4..col * 4 + 4].copy_from_slice(&v.to_array());
        }
        m
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[col * 4 + row] = value;
    }

    pub fn column(&self, col: usize) -> Vector4 {
        Vector4::new(
            self.get(0, col),
            self.get(1, col),
            self.get(2, col),
            self.get(3, col),
        )
    }

    pub fn row(&self, row: usize) -> Vector4 {
        Vector4::new(
            self.get(row, 0),
            self.get(row, 1),
            self.get(row, 2),
            self.get(row, 3),
        )
    }

    /// Column-major floats, ready for a uniform upload
    #[inline]
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }

    /// `a.multiply(b) * v == a * (b * v)`: `b` is applied first
    pub fn multiply(&self, b: &Matrix4) -> Matrix4 {
        let mut m = Self::zero();
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.get(row, k) * b.get(k, col);
                }
                m.set(row, col, sum);
            }
        }
        m
    }

    pub fn transpose(&self) -> Matrix4 {
        let mut m = Self::zero();
        for col in 0..4 {
            for row in 0..4 {
                m.set(col, row, self.get(row, col));
            }
        }
        m
    }

    /// The 3x3 matrix left after removing `row` and `col`
    pub fn minor(&self, row: usize, col: usize) -> Matrix3 {
        let mut m = Matrix3::new([0.0; 9]);
        let mut i = 0;
        for c in (0..4).filter(|&c| c != col) {
            for r in (0..4).filter(|&r| r != row) {
                m.data[i] = self.get(r, c);
                i += 1;
            }
        }
        m
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col).determinant()
    }

    /// Cofactor expansion along the first row
    pub fn determinant(&self) -> f32 {
        (0..4).map(|col| self.get(0, col) * self.cofactor(0, col)).sum()
    }

    /// Inverse via the adjugate.
    ///
    /// A singular (or nearly singular) matrix yields the identity rather than
    /// NaNs, so a bad transform degrades to "no transform" for the frame.
    pub fn inverse(&self) -> Matrix4 {
        let det = self.determinant();
        if det.abs() < SINGULAR_EPSILON {
            return Self::identity();
        }

        let inv_det = 1.0 / det;
        let mut m = Self::zero();
        for col in 0..4 {
            for row in 0..4 {
                m.set(row, col, self.cofactor(col, row) * inv_det);
            }
        }
        m
    }

    pub fn translation(offset: Vector3) -> Matrix4 {
        let mut m = Self::identity();
        m.set(0, 3, offset.x);
        m.set(1, 3, offset.y);
        m.set(2, 3, offset.z);
        m
    }

    pub fn scaling(scale: Vector3) -> Matrix4 {
        let mut m = Self::identity();
        m.set(0, 0, scale.x);
        m.set(1, 1, scale.y);
        m.set(2, 2, scale.z);
        m
    }

    /// Right-handed rotation of `angle` radians around `axis` (need not be unit length)
    pub fn rotation(axis: Vector3, angle: f32) -> Matrix4 {
        let Vector3 { x, y, z } = axis.normalized();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        let mut m = Self::identity();
        m.set(0, 0, t * x * x + c);
        m.set(0, 1, t * x * y - s * z);
        m.set(0, 2, t * x * z + s * y);

        m.set(1, 0, t * x * y + s * z);
        m.set(1, 1, t * y * y + c);
        m.set(1, 2, t * y * z - s * x);

        m.set(2, 0, t * x * z - s * y);
        m.set(2, 1, t * y * z + s * x);
        m.set(2, 2, t * z * z + c);
        m
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    ///
    /// `up` must not be collinear with `target - eye`, otherwise the side
    /// axis is zero-length and the result is NaN.
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Matrix4 {
        let z_axis = (target - eye).normalized();
        let x_axis = z_axis.cross(up).normalized();
        let y_axis = x_axis.cross(z_axis);

        let mut m = Self::identity();
        m.set(0, 0, x_axis.x);
        m.set(0, 1, x_axis.y);
        m.set(0, 2, x_axis.z);

        m.set(1, 0, y_axis.x);
        m.set(1, 1, y_axis.y);
        m.set(1, 2, y_axis.z);

        m.set(2, 0, -z_axis.x);
        m.set(2, 1, -z_axis.y);
        m.set(2, 2, -z_axis.z);

        m.set(0, 3, -x_axis.dot(eye));
        m.set(1, 3, -y_axis.dot(eye));
        m.set(2, 3, z_axis.dot(eye));
        m
    }

    /// Right-handed perspective projection with OpenGL clip depth (-1..1).
    ///
    /// `fov` is the full vertical field of view in radians.
    pub fn perspective(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Matrix4 {
        let t = (fov / 2.0).tan();

        let mut m = Self::zero();
        m.set(0, 0, 1.0 / (aspect_ratio * t));
        m.set(1, 1, 1.0 / t);
        m.set(2, 2, -(far + near) / (far - near));
        m.set(2, 3, -(2.0 * far * near) / (far - near));
        m.set(3, 2, -1.0);
        m
    }

    /// Right-handed orthographic projection with OpenGL clip depth (-1..1)
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix4 {
        let mut m = Self::identity();
        m.set(0, 0, 2.0 / (right - left));
        m.set(1, 1, 2.0 / (top - bottom));
        m.set(2, 2, -2.0 / (far - near));
        m.set(0, 3, -(right + left) / (right - left));
        m.set(1, 3, -(top + bottom) / (top - bottom));
        m.set(2, 3, -(far + near) / (far - near));
        m
    }

    /// True when every element is within `epsilon` of `other`
    pub fn approx_eq(&self, other: &Matrix4, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl ops::Mul<Matrix4> for Matrix4 {
    type Output = Matrix4;

    #[inline]
    fn mul(self, rhs: Matrix4) -> Matrix4 {
        self.multiply(&rhs)
    }
}

impl ops::Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    #[inline]
    fn mul(self, v: Vector4) -> Vector4 {
        Vector4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prec = f.precision().unwrap_or(3);
        for row in 0..4 {
            writeln!(
                f,
                "[{:>w$.p$} {:>w$.p$} {:>w$.p$} {:>w$.p$}]",
                self.get(row, 0),
                self.get(row, 1),
                self.get(row, 2),
                self.get(row, 3),
                w = prec + 4,
                p = prec
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn sample() -> Matrix4 {
        Matrix4::translation(Vector3::new(1.0, -2.0, 3.5))
            * Matrix4::rotation(Vector3::new(0.3, 1.0, -0.2), 0.7)
            * Matrix4::scaling(Vector3::new(2.0, 0.5, 3.0))
    }

    #[test]
    fn test_column_major_layout() {
        let m = Matrix4::translation(Vector3::new(7.0, 8.0, 9.0));
        assert_eq!(&m.data[12..15], &[7.0, 8.0, 9.0]);
        assert_eq!(m.get(0, 3), 7.0);
        assert_eq!(m.column(3), Vector4::new(7.0, 8.0, 9.0, 1.0));
        assert_eq!(Matrix4::from_columns([m.column(0), m.column(1), m.column(2), m.column(3)]), m);
    }

    #[test]
    fn test_identity_is_neutral() {
        let m = sample();
        assert_eq!(Matrix4::identity() * m, m);
        assert_eq!(m * Matrix4::identity(), m);
    }

    #[test]
    fn test_multiply_applies_right_operand_first() {
        let t = Matrix4::translation(Vector3::new(1.0, 0.0, 0.0));
        let s = Matrix4::scaling(Vector3::new(2.0, 2.0, 2.0));
        let p = Vector4::new(1.0, 1.0, 1.0, 1.0);

        assert_eq!((t * s) * p, t * (s * p));
        assert_eq!((t * s) * p, Vector4::new(3.0, 2.0, 2.0, 1.0));
        assert_eq!((s * t) * p, Vector4::new(4.0, 2.0, 2.0, 1.0));
        assert_ne!(t * s, s * t);
    }

    #[test]
    fn test_transpose_twice_is_original() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().get(1, 3), m.get(3, 1));
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Matrix4::identity().determinant(), 1.0);
        assert_eq!(Matrix4::scaling(Vector3::new(2.0, 3.0, 4.0)).determinant(), 24.0);
        assert_eq!(Matrix4::translation(Vector3::new(5.0, 6.0, 7.0)).determinant(), 1.0);
        assert!((sample().determinant() - 3.0).abs() < EPSILON);
        assert_eq!(Matrix3::identity().determinant(), 1.0);
        let m3 = Matrix3::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m3.determinant(), 0.0);
        assert_eq!(m3.transpose().get(0, 1), m3.get(1, 0));
    }

    #[test]
    fn test_inverse_round_trips_to_identity() {
        let m = sample();
        let inv = m.inverse();
        assert!((m * inv).approx_eq(&Matrix4::identity(), EPSILON));
        assert!((inv * m).approx_eq(&Matrix4::identity(), EPSILON));
    }

    #[test]
    fn test_inverse_of_singular_is_identity() {
        // third row repeats the first
        let m = Matrix4::new([
            1.0, 5.0, 1.0, 0.0, //
            2.0, -1.0, 2.0, 0.0, //
            3.0, 4.0, 3.0, 0.0, //
            7.0, 8.0, 7.0, 1.0,
        ]);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Matrix4::identity());
        assert_eq!(Matrix4::zero().inverse(), Matrix4::identity());
        assert_eq!(Matrix4::scaling(Vector3::new(1.0, 0.0, 1.0)).inverse(), Matrix4::identity());
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vector3::new(0.0, 0.0, 3.0);
        let view = Matrix4::look_at(eye, Vector3::zero(), Vector3::up());

        assert!((view * eye.extend(1.0)).approx_eq(Vector4::new(0.0, 0.0, 0.0, 1.0), EPSILON));
        // target ends up straight ahead, down -Z
        assert!((view * Vector4::new(0.0, 0.0, 0.0, 1.0)).approx_eq(Vector4::new(0.0, 0.0, -3.0, 1.0), EPSILON));
        assert!((view * Vector4::new(1.0, 0.0, 3.0, 1.0)).approx_eq(Vector4::new(1.0, 0.0, 0.0, 1.0), EPSILON));
    }

    #[test]
    fn test_look_at_basis_rows_are_orthonormal() {
        let view = Matrix4::look_at(
            Vector3::new(4.0, 2.0, -1.0),
            Vector3::new(-1.0, 0.5, 2.0),
            Vector3::up(),
        );
        let rows: Vec<Vector3> = (0..3).map(|r| view.row(r).truncate()).collect();
        for (i, a) in rows.iter().enumerate() {
            assert!((a.length() - 1.0).abs() < EPSILON);
            for b in rows.iter().skip(i + 1) {
                assert!(a.dot(*b).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_perspective_maps_near_and_far_to_clip_range() {
        let proj = Matrix4::perspective(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);

        let near = proj * Vector4::new(0.0, 0.0, -0.1, 1.0);
        let far = proj * Vector4::new(0.0, 0.0, -100.0, 1.0);
        assert!((near.z / near.w + 1.0).abs() < 1e-4);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);

        // 90 degree fov: a point at 45 degrees up lands on the top clip edge
        let edge = proj * Vector4::new(0.0, 2.0, -2.0, 1.0);
        assert!((edge.y / edge.w - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_orthographic_maps_box_to_cube() {
        let proj = Matrix4::orthographic(-2.0, 2.0, -1.0, 1.0, 0.5, 10.0);
        let corner = proj * Vector4::new(2.0, -1.0, -10.0, 1.0);
        assert!(corner.approx_eq(Vector4::new(1.0, -1.0, 1.0, 1.0), EPSILON));
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let r = Matrix4::rotation(Vector3::up(), std::f32::consts::FRAC_PI_2);
        let v = r * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!(v.approx_eq(Vector4::new(0.0, 0.0, -1.0, 1.0), EPSILON));
    }
}
