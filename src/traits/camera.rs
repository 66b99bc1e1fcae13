use glam::{Mat4, Vec3};

/// Camera movement and control abstraction
pub trait CameraController {
    /// Update camera state based on elapsed milliseconds
    fn update(&mut self, delta_ms: f32);

    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4;

    /// Get the camera translation in world space
    fn translation(&self) -> Vec3;
}
