/// Projection settings and world-to-screen projection
use crate::matrix::Matrix4;
use crate::vector::{radians, Vector3};

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

/// Viewport-dependent projection parameters; the field of view comes from the camera zoom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub mode: ProjectionMode,
    /// Half-height of the orthographic view volume
    pub ortho_extent: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            near: 0.1,
            far: 100.0,
            mode: ProjectionMode::Perspective,
            ortho_extent: 2.0,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Create the projection matrix for a vertical field of view in degrees
    pub fn matrix(&self, fov_degrees: f32) -> Matrix4 {
        match self.mode {
            ProjectionMode::Perspective => {
                Matrix4::perspective(radians(fov_degrees), self.aspect, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let height = self.ortho_extent;
                let width = height * self.aspect;
                Matrix4::orthographic(-width, width, -height, height, self.near, self.far)
            }
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        };
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Project a world-space point to screen space.
///
/// Returns `(x, y, depth)` with `depth` in normalized device coordinates, or
/// `None` when the point is behind the eye or outside the clip volume.
pub fn project_to_screen(
    point: Vector3,
    view_projection: &Matrix4,
    width: u32,
    height: u32,
) -> Option<(f32, f32, f32)> {
    let clip = *view_projection * point.extend(1.0);

    // Prevent division by near-zero or negative w (behind the eye)
    if clip.w < 1e-6 {
        return None;
    }

    let ndc = clip.truncate() * (1.0 / clip.w);

    // Clip test
    if !(-1.0..=1.0).contains(&ndc.x) || !(-1.0..=1.0).contains(&ndc.y) || !(-1.0..=1.0).contains(&ndc.z) {
        return None;
    }

    // Convert to screen space
    let screen_x = (ndc.x + 1.0) * 0.5 * width as f32;
    let screen_y = (1.0 - ndc.y) * 0.5 * height as f32;

    Some((screen_x, screen_y, ndc.z))
}
