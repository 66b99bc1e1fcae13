use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::clock::AnimationClock;
use crate::error::ConfigError;
use crate::math::{rotation_y, translation};

/// Height of a bobbing object above its resting position.
///
/// Never negative: objects rise from rest and come back down to it.
pub fn bob_offset(amplitude: f32, angle: f32, phase: f32) -> f32 {
    amplitude * (angle + phase).to_radians().sin().abs()
}

/// How an object reacts to the animation clock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectMotion {
    Static,
    Spin,
    /// Spin with the carousel and bob, `phase` degrees out of step
    SpinAndBob { phase: f32 },
}

/// Load-time placement of an object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub translation: Vec3,
    pub yaw_degrees: f32,
    pub scale: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            yaw_degrees: 0.0,
            scale: 1.0,
        }
    }
}

impl Placement {
    pub fn yawed(yaw_degrees: f32) -> Self {
        Self {
            yaw_degrees,
            ..Self::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw_degrees.to_radians()),
            self.translation,
        )
    }

    fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.yaw_degrees.is_finite() && self.scale.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectConfig {
    pub name: String,
    #[serde(default)]
    pub placement: Placement,
    pub motion: ObjectMotion,
}

impl ObjectConfig {
    pub fn new(name: impl Into<String>, placement: Placement, motion: ObjectMotion) -> Self {
        Self {
            name: name.into(),
            placement,
            motion,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    name: String,
    initial: Mat4,
    motion: ObjectMotion,
    model: Mat4,
}

impl SceneObject {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial(&self) -> Mat4 {
        self.initial
    }

    pub fn motion(&self) -> ObjectMotion {
        self.motion
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }
}

/// Builds every object's model matrix from its initial transform and the
/// shared animation angle. Recomputes all objects on every call.
#[derive(Debug, Clone)]
pub struct SceneCompositor {
    objects: Vec<SceneObject>,
    bob_amplitude: f32,
}

impl SceneCompositor {
    pub fn new(objects: &[ObjectConfig], bob_amplitude: f32) -> Result<Self, ConfigError> {
        if !(bob_amplitude.is_finite() && bob_amplitude >= 0.0) {
            return Err(ConfigError::InvalidBobAmplitude(bob_amplitude));
        }
        let objects = objects
            .iter()
            .map(|config| {
                let phase_ok = match config.motion {
                    ObjectMotion::SpinAndBob { phase } => phase.is_finite(),
                    ObjectMotion::Static | ObjectMotion::Spin => true,
                };
                if !(phase_ok && config.placement.is_finite()) {
                    return Err(ConfigError::NonFinitePlacement {
                        object: config.name.clone(),
                    });
                }
                let initial = config.placement.matrix();
                Ok(SceneObject {
                    name: config.name.clone(),
                    initial,
                    motion: config.motion,
                    model: initial,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            objects,
            bob_amplitude,
        })
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn bob_amplitude(&self) -> f32 {
        self.bob_amplitude
    }

    pub fn compose(&mut self, clock: &AnimationClock) {
        let angle = clock.angle();
        let spin = rotation_y(-angle);
        for object in &mut self.objects {
            object.model = match object.motion {
                ObjectMotion::Static => object.initial,
                ObjectMotion::Spin => spin * object.initial,
                ObjectMotion::SpinAndBob { phase } => {
                    let lift = bob_offset(self.bob_amplitude, angle, phase);
                    translation(Vec3::new(0.0, lift, 0.0)) * spin * object.initial
                }
            };
        }
    }

    pub fn model_matrices(&self) -> Vec<Mat4> {
        self.objects.iter().map(SceneObject::model).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> Vec<ObjectConfig> {
        vec![
            ObjectConfig::new("floor", Placement::default(), ObjectMotion::Static),
            ObjectConfig::new("platform", Placement::default(), ObjectMotion::Spin),
            ObjectConfig::new(
                "horse",
                Placement::yawed(60.0),
                ObjectMotion::SpinAndBob { phase: 20.0 },
            ),
        ]
    }

    fn clock_at(degrees: f32) -> AnimationClock {
        let mut clock = AnimationClock::default();
        clock.tick(degrees * 20.0);
        clock
    }

    #[test]
    fn test_bob_never_negative() {
        for angle in (0..360).step_by(7) {
            for phase in [0.0, 20.0, 95.0, 200.0, -45.0] {
                assert!(bob_offset(1.5, angle as f32, phase) >= 0.0);
            }
        }
    }

    #[test]
    fn test_static_object_keeps_initial() {
        let mut scene = SceneCompositor::new(&carousel(), 1.0).unwrap();
        scene.compose(&clock_at(45.0));
        assert_eq!(scene.objects()[0].model(), scene.objects()[0].initial());
    }

    #[test]
    fn test_spin_rotates_against_angle() {
        let mut scene = SceneCompositor::new(&carousel(), 1.0).unwrap();
        scene.compose(&clock_at(90.0));
        let expected = Mat4::from_rotation_y((-90.0f32).to_radians());
        assert!(scene.objects()[1].model().abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn test_bob_composition_order() {
        let mut scene = SceneCompositor::new(&carousel(), 2.0).unwrap();
        let clock = clock_at(70.0);
        scene.compose(&clock);
        let horse = &scene.objects()[2];
        let lift = bob_offset(2.0, clock.angle(), 20.0);
        let expected = Mat4::from_translation(Vec3::new(0.0, lift, 0.0))
            * Mat4::from_rotation_y(-clock.angle().to_radians())
            * horse.initial();
        assert!(horse.model().abs_diff_eq(expected, 1e-5));
        assert!((lift - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_initial_transform_never_changes() {
        let mut scene = SceneCompositor::new(&carousel(), 1.0).unwrap();
        let before: Vec<Mat4> = scene.objects().iter().map(SceneObject::initial).collect();
        scene.compose(&clock_at(123.0));
        scene.compose(&clock_at(301.0));
        let after: Vec<Mat4> = scene.objects().iter().map(SceneObject::initial).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_rejects_negative_amplitude() {
        assert!(matches!(
            SceneCompositor::new(&carousel(), -1.0),
            Err(ConfigError::InvalidBobAmplitude(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_phase() {
        let objects = vec![ObjectConfig::new(
            "horse",
            Placement::default(),
            ObjectMotion::SpinAndBob { phase: f32::NAN },
        )];
        assert!(matches!(
            SceneCompositor::new(&objects, 1.0),
            Err(ConfigError::NonFinitePlacement { .. })
        ));
    }
}
