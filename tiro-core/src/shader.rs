/// Vertex/fragment shader source pair, read in full for a backend to compile
use std::path::Path;

use crate::error::LoadError;
use crate::files;

/// Largest shader source accepted, in bytes
pub const MAX_SHADER_SOURCE_LEN: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn load(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let vertex = files::read_bounded(vertex_path.as_ref(), MAX_SHADER_SOURCE_LEN)?;
        let fragment = files::read_bounded(fragment_path.as_ref(), MAX_SHADER_SOURCE_LEN)?;
        log::debug!(
            "shader sources: {} ({} bytes), {} ({} bytes)",
            vertex_path.as_ref().display(),
            vertex.len(),
            fragment_path.as_ref().display(),
            fragment.len()
        );
        Ok(Self { vertex, fragment })
    }
}
