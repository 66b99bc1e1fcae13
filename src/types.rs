use glam::Mat4;

use crate::lighting::{Light, LightKind};

/// View and projection matrices for the GPU, column major
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }
}

/// Per-object model matrix for the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl From<Mat4> for ModelUniform {
    fn from(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

/// Light data for the GPU, padded to vec4 boundaries
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub enabled: u32, // 1 if lit, 0 if switched off
    pub color: [f32; 3],
    pub intensity: f32,
    pub ambient: [f32; 3],
    pub attenuation: f32,
    pub direction: [f32; 3],
    pub cos_cutoff: f32, // -1.0 for point lights, lights every direction
}

impl From<&Light> for LightUniform {
    fn from(light: &Light) -> Self {
        let (direction, cos_cutoff) = match light.kind {
            LightKind::Point => ([0.0; 3], -1.0),
            LightKind::Spot {
                direction,
                cutoff_degrees,
            } => (direction.to_array(), cutoff_degrees.to_radians().cos()),
        };
        Self {
            position: light.position.to_array(),
            enabled: u32::from(light.enabled),
            color: light.color.to_rgb(),
            intensity: light.intensity,
            ambient: light.ambient.to_array(),
            attenuation: light.attenuation,
            direction,
            cos_cutoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::default_lights;

    #[test]
    fn test_uniform_sizes_are_vec4_aligned() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 128);
        assert_eq!(std::mem::size_of::<ModelUniform>(), 64);
        assert_eq!(std::mem::size_of::<LightUniform>(), 64);
    }

    #[test]
    fn test_light_uniform_from_defaults() {
        let lights = default_lights();
        let point = LightUniform::from(&lights[0]);
        let spot = LightUniform::from(&lights[1]);
        assert_eq!(point.cos_cutoff, -1.0);
        assert_eq!(point.enabled, 1);
        assert!((spot.cos_cutoff - 45f32.to_radians().cos()).abs() < 1e-6);
        assert!((spot.color[2] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_camera_uniform_bytes() {
        let uniform = CameraUniform::new(Mat4::IDENTITY, Mat4::IDENTITY);
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 128);
    }
}
