use log::{info, trace};

use crate::frame::FrameOutput;
use crate::traits::RenderBackend;

/// How often the frame rate is logged
const FPS_UPDATE_INTERVAL_MS: f32 = 1000.0;

/// Backend that packs each frame into GPU-ready bytes and logs it instead of
/// drawing. Used by the windowed driver until a real renderer is attached,
/// and by headless runs.
#[derive(Debug, Default)]
pub struct LogBackend {
    submitted: u64,
    uploaded_bytes: usize,
    frame_count: u32,
    fps_update_timer: f32,
    fps: f32,
}

impl LogBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> u64 {
        self.submitted
    }

    /// Bytes the last frame would upload
    pub fn uploaded_bytes(&self) -> usize {
        self.uploaded_bytes
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    fn update_fps(&mut self, delta_ms: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta_ms;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL_MS {
            self.fps = self.frame_count as f32 * 1000.0 / self.fps_update_timer;
            info!("FPS: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl RenderBackend for LogBackend {
    fn submit(&mut self, frame: &FrameOutput) -> Result<(), Box<dyn std::error::Error>> {
        let camera = frame.camera_uniform();
        let models = frame.model_uniforms();
        self.uploaded_bytes = bytemuck::bytes_of(&camera).len()
            + bytemuck::cast_slice::<_, u8>(&models).len()
            + bytemuck::cast_slice::<_, u8>(frame.light_uniforms()).len();
        self.submitted += 1;

        trace!(
            "frame {}: {} models, {} lights, {} bytes",
            frame.frame.number,
            models.len(),
            frame.lights.len(),
            self.uploaded_bytes
        );
        self.update_fps(frame.frame.delta_ms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::simulation::Simulation;

    #[test]
    fn test_counts_bytes_for_default_scene() {
        let mut sim = Simulation::new(&SceneConfig::default()).unwrap();
        let mut backend = LogBackend::new();
        backend.submit(&sim.tick(16.0)).unwrap();
        assert_eq!(backend.submitted(), 1);
        // camera + 11 models + 2 lights
        assert_eq!(backend.uploaded_bytes(), 128 + 11 * 64 + 2 * 64);
    }

    #[test]
    fn test_fps_after_one_second() {
        let mut sim = Simulation::new(&SceneConfig::default()).unwrap();
        let mut backend = LogBackend::new();
        for _ in 0..40 {
            backend.submit(&sim.tick(25.0)).unwrap();
        }
        assert!((backend.fps() - 40.0).abs() < 1e-3);
    }
}
