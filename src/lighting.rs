use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::hsv_to_rgb;

/// Degrees of hue per adjustment step
pub const HUE_STEP: f32 = 10.0;
/// Value (brightness) per adjustment step
pub const VALUE_STEP: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightKind {
    Point,
    Spot { direction: Vec3, cutoff_degrees: f32 },
}

/// Color as hue (degrees), saturation and value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    pub fn to_rgb(&self) -> [f32; 3] {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub enabled: bool,
    pub kind: LightKind,
    pub ambient: Vec3,
    pub color: Hsv,
    pub position: Vec3,
    #[serde(default)]
    pub attenuation: f32,
    pub intensity: f32,
}

impl Light {
    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidLight {
            light: index,
            reason: reason.to_string(),
        };
        let spot_ok = match self.kind {
            LightKind::Point => true,
            LightKind::Spot {
                direction,
                cutoff_degrees,
            } => direction.is_finite() && cutoff_degrees.is_finite(),
        };
        if !(spot_ok
            && self.ambient.is_finite()
            && self.position.is_finite()
            && self.attenuation.is_finite()
            && self.intensity.is_finite()
            && self.color.hue.is_finite())
        {
            return Err(invalid("non-finite field"));
        }
        if !(0.0..=1.0).contains(&self.color.saturation) || !(0.0..=1.0).contains(&self.color.value)
        {
            return Err(invalid("saturation and value must be within [0, 1]"));
        }
        Ok(())
    }
}

/// The scene's lights plus which one the user is editing
#[derive(Debug, Clone)]
pub struct LightRig {
    lights: Vec<Light>,
    selected: usize,
}

impl LightRig {
    pub fn new(lights: Vec<Light>) -> Result<Self, ConfigError> {
        for (i, light) in lights.iter().enumerate() {
            light.validate(i)?;
        }
        Ok(Self { lights, selected: 0 })
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn cycle_selected(&mut self) {
        if !self.lights.is_empty() {
            self.selected = (self.selected + 1) % self.lights.len();
            debug!("selected light {}", self.selected);
        }
    }

    /// Rotate the selected light's hue, wrapping into `[0, 360)`
    pub fn shift_hue(&mut self, degrees: f32) {
        if let Some(light) = self.lights.get_mut(self.selected) {
            light.color.hue = (light.color.hue + degrees).rem_euclid(360.0);
        }
    }

    /// Brighten or dim the selected light, clamped to `[0, 1]`
    pub fn shift_value(&mut self, amount: f32) {
        if let Some(light) = self.lights.get_mut(self.selected) {
            light.color.value = (light.color.value + amount).clamp(0.0, 1.0);
        }
    }
}

pub fn default_lights() -> Vec<Light> {
    vec![
        Light {
            enabled: true,
            kind: LightKind::Point,
            ambient: Vec3::new(0.2, 0.0, 0.05),
            color: Hsv::new(0.0, 1.0, 1.0),
            position: Vec3::new(0.0, 20.0, -20.0),
            attenuation: 0.0,
            intensity: 1.0,
        },
        Light {
            enabled: true,
            kind: LightKind::Spot {
                direction: Vec3::ZERO,
                cutoff_degrees: 45.0,
            },
            ambient: Vec3::ZERO,
            color: Hsv::new(240.0, 1.0, 1.0),
            position: Vec3::new(0.0, 20.0, -20.0),
            attenuation: 0.0,
            intensity: 1.0,
        },
    ]
}
