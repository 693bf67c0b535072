//! TIRO Core Library - math, camera and mesh loading for the renderer
//!
//! This library holds everything the demo needs that is not tied to a
//! rendering API: vector/matrix algebra, the fly camera, the OBJ loader and
//! the file helpers they share.

pub mod camera;
pub mod error;
pub mod files;
pub mod geometry;
pub mod interop;
pub mod matrix;
pub mod obj;
pub mod projection;
pub mod shader;
pub mod vector;

// Re-export commonly used types
pub use camera::{Camera, CameraMovement};
pub use error::LoadError;
pub use geometry::{Mesh, Triangle};
pub use matrix::{Matrix3, Matrix4};
pub use projection::{Projection, ProjectionMode};
pub use shader::ShaderSources;
pub use vector::{radians, Vector2, Vector3, Vector4};
