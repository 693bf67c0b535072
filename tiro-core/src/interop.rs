/// Conversions to and from `nalgebra` types
use crate::matrix::Matrix4;
use crate::vector::{Vector3, Vector4};

impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Point3<f32> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f32>> for Vector3 {
    fn from(p: nalgebra::Point3<f32>) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector4> for nalgebra::Vector4<f32> {
    fn from(v: Vector4) -> Self {
        nalgebra::Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<nalgebra::Vector4<f32>> for Vector4 {
    fn from(v: nalgebra::Vector4<f32>) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}

// Both sides store columns contiguously
impl From<Matrix4> for nalgebra::Matrix4<f32> {
    fn from(m: Matrix4) -> Self {
        nalgebra::Matrix4::from_column_slice(&m.data)
    }
}

impl From<nalgebra::Matrix4<f32>> for Matrix4 {
    fn from(m: nalgebra::Matrix4<f32>) -> Self {
        let mut data = [0.0; 16];
        data.copy_from_slice(m.as_slice());
        Matrix4::new(data)
    }
}
