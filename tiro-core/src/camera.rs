/// First-person fly camera driven by Euler angles
use crate::matrix::Matrix4;
use crate::vector::{radians, Vector3};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch limit in degrees; stays short of 90 so `front` never lines up with world up
pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Direction of a keyboard movement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    /// Along world up, not the camera's own up
    Up,
    Down,
}

/// Fly camera state.
///
/// `front`, `right` and `up` are derived from `yaw`/`pitch` by
/// [`Camera::update_basis`] and are never set directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vector3,
    front: Vector3,
    up: Vector3,
    right: Vector3,
    world_up: Vector3,
    /// Degrees
    pub yaw: f32,
    /// Degrees
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees
    pub zoom: f32,
}

impl Camera {
    pub fn new(position: Vector3, world_up: Vector3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vector3::forward(),
            up: world_up,
            right: Vector3::right(),
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_basis();
        camera
    }

    pub fn front(&self) -> Vector3 {
        self.front
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn right(&self) -> Vector3 {
        self.right
    }

    /// Re-derive the orthonormal basis from the Euler angles
    pub fn update_basis(&mut self) {
        let (yaw, pitch) = (radians(self.yaw), radians(self.pitch));
        let front = Vector3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());

        // order matters: swapping the cross operands flips handedness
        self.front = front.normalized();
        self.right = self.front.cross(self.world_up).normalized();
        self.up = self.right.cross(self.front).normalized();
    }

    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::look_at(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using the current zoom as field of view
    pub fn projection_matrix(&self, aspect_ratio: f32, near: f32, far: f32) -> Matrix4 {
        Matrix4::perspective(radians(self.zoom), aspect_ratio, near, far)
    }

    /// Move along the basis by `movement_speed * dt`. `dt` is expected to be non-negative.
    pub fn process_movement(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.world_up * velocity,
            CameraMovement::Down => self.position -= self.world_up * velocity,
        }
    }

    pub fn process_look(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_basis();
    }

    pub fn process_zoom(&mut self, scroll_delta: f32) {
        self.zoom = (self.zoom - scroll_delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vector3::new(0.0, 0.0, 3.0), Vector3::up(), DEFAULT_YAW, DEFAULT_PITCH)
    }
}
