use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::camera::CameraMode;
use crate::types::{CameraUniform, LightUniform, ModelUniform};

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FrameInfo {
    pub number: u64,
    /// Simulated milliseconds since start
    pub time_ms: f64,
    /// Delta that produced this frame, after clamping
    pub delta_ms: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time_ms: f64, delta_ms: f32) -> Self {
        Self {
            number,
            time_ms,
            delta_ms,
        }
    }

    /// Next frame after a step of `delta_ms`
    pub fn advance(&self, delta_ms: f32) -> Self {
        Self::new(self.number + 1, self.time_ms + f64::from(delta_ms), delta_ms)
    }
}

/// Everything a render backend needs to draw one frame
#[derive(Debug, Clone)]
pub struct FrameOutput {
    pub frame: FrameInfo,
    pub view: Mat4,
    pub projection: Mat4,
    pub models: Vec<Mat4>,
    pub lights: Vec<LightUniform>,
}

impl FrameOutput {
    pub fn camera_uniform(&self) -> CameraUniform {
        CameraUniform::new(self.view, self.projection)
    }

    pub fn model_uniforms(&self) -> Vec<ModelUniform> {
        self.models.iter().copied().map(ModelUniform::from).collect()
    }

    pub fn light_uniforms(&self) -> &[LightUniform] {
        &self.lights
    }
}

/// Serializable summary of simulation state, for logs and headless runs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub time_ms: f64,
    pub mode: CameraMode,
    pub segment: usize,
    pub t: f32,
    pub speed: f32,
    pub translation: Vec3,
    pub yaw: f32,
    pub angle: f32,
    pub selected_light: usize,
}
