use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::CameraPose;
use crate::error::ConfigError;
use crate::input::ScrollDirection;
use crate::math::wrap_degrees;

/// Tuning constants for the hand-driven camera modes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualSettings {
    /// Degrees of rotation per pixel of pointer drag
    pub drag_sensitivity: f32,
    /// Distance moved per free-fly key event
    pub fly_speed: f32,
    /// Factor applied to the fly speed per scroll notch
    pub fly_speed_step: f32,
    /// Depth factor per scroll notch towards the target in orbit mode
    pub zoom_in: f32,
    /// Depth factor per scroll notch away from the target in orbit mode
    pub zoom_out: f32,
}

impl Default for ManualSettings {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.4,
            fly_speed: 0.2,
            fly_speed_step: 1.12,
            zoom_in: 0.95,
            zoom_out: 1.05,
        }
    }
}

impl ManualSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("drag_sensitivity", self.drag_sensitivity),
            ("fly_speed", self.fly_speed),
            ("fly_speed_step", self.fly_speed_step),
            ("zoom_in", self.zoom_in),
            ("zoom_out", self.zoom_out),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidCameraConstant { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyMove {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    Up,
    Down,
}

/// Free-fly and orbit camera state.
///
/// Both modes share one pose. Moves are pre-rotated by yaw only, so
/// "forward" follows the heading around the vertical axis and ignores pitch.
#[derive(Debug, Clone)]
pub struct ManualCamera {
    pose: CameraPose,
    home: Vec3,
    fly_speed: f32,
    settings: ManualSettings,
    anchor: Option<Vec2>,
}

impl ManualCamera {
    pub fn new(home: Vec3, settings: ManualSettings) -> Result<Self, ConfigError> {
        if !home.is_finite() {
            return Err(ConfigError::InvalidCameraConstant {
                name: "home",
                value: f32::NAN,
            });
        }
        settings.validate()?;
        Ok(Self {
            pose: CameraPose::at(home),
            home,
            fly_speed: settings.fly_speed,
            settings,
            anchor: None,
        })
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn home(&self) -> Vec3 {
        self.home
    }

    pub fn fly_speed(&self) -> f32 {
        self.fly_speed
    }

    /// Continue from wherever another camera left off
    pub fn take_over(&mut self, pose: CameraPose) {
        self.pose = pose;
    }

    /// Home translation, all angles zero
    pub fn reset(&mut self) {
        self.pose = CameraPose::at(self.home);
    }

    pub fn reset_fly_speed(&mut self) {
        self.fly_speed = self.settings.fly_speed;
    }

    pub fn fly(&mut self, movement: FlyMove) {
        let s = self.fly_speed;
        let (sin, cos) = self.pose.yaw.to_radians().sin_cos();
        let t = &mut self.pose.translation;
        match movement {
            FlyMove::Forward => {
                t.x -= sin * s;
                t.z += cos * s;
            }
            FlyMove::Backward => {
                t.x += sin * s;
                t.z -= cos * s;
            }
            FlyMove::StrafeLeft => {
                t.x += cos * s;
                t.z += sin * s;
            }
            FlyMove::StrafeRight => {
                t.x -= cos * s;
                t.z -= sin * s;
            }
            // the translation moves the world, so rising means lowering y
            FlyMove::Up => t.y -= s,
            FlyMove::Down => t.y += s,
        }
    }

    /// Pointer went down; following drags are measured from here
    pub fn press(&mut self, x: f32, y: f32) {
        self.anchor = Some(Vec2::new(x, y));
    }

    /// Pointer moved to `(x, y)` with the button held
    pub fn drag_to(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        if let Some(anchor) = self.anchor {
            let delta = position - anchor;
            self.rotate(delta.x, delta.y);
        }
        self.anchor = Some(position);
    }

    /// Horizontal motion turns yaw, vertical motion turns pitch
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let k = self.settings.drag_sensitivity;
        self.pose.pitch = wrap_degrees(self.pose.pitch + dy * k);
        self.pose.yaw = wrap_degrees(self.pose.yaw + dx * k);
    }

    pub fn scroll_speed(&mut self, direction: ScrollDirection) {
        match direction {
            ScrollDirection::Up => self.fly_speed *= self.settings.fly_speed_step,
            ScrollDirection::Down => self.fly_speed /= self.settings.fly_speed_step,
        }
    }

    pub fn zoom(&mut self, direction: ScrollDirection) {
        let factor = match direction {
            ScrollDirection::Up => self.settings.zoom_in,
            ScrollDirection::Down => self.settings.zoom_out,
        };
        self.pose.translation.z *= factor;
    }

    /// Free-fly view, `Rotation * Translation`
    pub fn fly_view(&self) -> Mat4 {
        self.pose.rotation_then_translation()
    }

    /// Orbit view, `Translation * Rotation`
    pub fn orbit_view(&self) -> Mat4 {
        self.pose.translation_then_rotation()
    }
}
