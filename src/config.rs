//! Scene configuration.
//!
//! Every section has defaults that reproduce the merry-go-round scene, so an
//! empty JSON object (`{}`) is a complete configuration.

use std::fs;
use std::path::Path;

use glam::{Mat4, Vec3};
use log::info;
use serde::{Deserialize, Serialize};

use crate::camera::{ManualSettings, PathSegment, YawRamp, DEFAULT_SEGMENT_DURATION_MS};
use crate::core::clock::DEFAULT_MS_PER_DEGREE;
use crate::error::ConfigError;
use crate::lighting::{default_lights, Light};
use crate::math::CubicBezier;
use crate::scene::{ObjectConfig, ObjectMotion, Placement};

/// Where the tour starts and the manual camera returns to
pub const HOME: Vec3 = Vec3::new(0.0, -4.0, -20.0);
/// Number of carousel horses in the default scene
pub const HORSE_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub home: Vec3,
    pub segment_duration_ms: f32,
    pub default_speed: f32,
    pub manual: ManualSettings,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            home: HOME,
            segment_duration_ms: DEFAULT_SEGMENT_DURATION_MS,
            default_speed: 1.0,
            manual: ManualSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fovy_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fovy_degrees: 45.0,
            aspect: 1.0,
            near: 1.0,
            far: 50.0,
        }
    }
}

impl ProjectionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all_finite = [self.fovy_degrees, self.aspect, self.near, self.far]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(ConfigError::InvalidProjection(
                "all parameters must be finite".into(),
            ));
        }
        if !(self.fovy_degrees > 0.0 && self.fovy_degrees < 180.0) {
            return Err(ConfigError::InvalidProjection(format!(
                "field of view must be within (0, 180), got {}",
                self.fovy_degrees
            )));
        }
        if self.aspect <= 0.0 {
            return Err(ConfigError::InvalidProjection(format!(
                "aspect ratio must be positive, got {}",
                self.aspect
            )));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigError::InvalidProjection(format!(
                "need 0 < near < far, got near {} far {}",
                self.near, self.far
            )));
        }
        Ok(())
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub ms_per_degree: f32,
    pub bob_amplitude: f32,
    pub enabled: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            ms_per_degree: DEFAULT_MS_PER_DEGREE,
            bob_amplitude: 1.0,
            enabled: true,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ms_per_degree.is_finite() && self.ms_per_degree > 0.0) {
            return Err(ConfigError::InvalidAnimationRate(self.ms_per_degree));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub animation: AnimationConfig,
    pub path: Vec<PathSegment>,
    pub objects: Vec<ObjectConfig>,
    pub lights: Vec<Light>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            projection: ProjectionConfig::default(),
            animation: AnimationConfig::default(),
            path: default_path(),
            objects: default_objects(),
            lights: default_lights(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!(
            "loaded scene config from {} ({} path segments, {} objects)",
            path.display(),
            config.path.len(),
            config.objects.len()
        );
        Ok(config)
    }
}

/// The carousel tour: approach, look around, dive under the platform,
/// glance left and right, climb back out.
pub fn default_path() -> Vec<PathSegment> {
    let v = Vec3::new;
    let look_around = v(0.0, -3.0, -12.0);
    let low = v(0.0, -8.0, -6.0);
    vec![
        PathSegment::curve(CubicBezier::new(
            HOME,
            v(0.0, 0.0, -18.0),
            v(0.0, 0.0, -14.0),
            look_around,
        )),
        PathSegment::pivot(look_around, YawRamp::new(0.0, 360.0)).with_speed_scale(0.5),
        PathSegment::curve(CubicBezier::new(
            look_around,
            v(0.0, -3.0, -22.0),
            v(0.0, -8.0, -22.0),
            low,
        )),
        PathSegment::curve(CubicBezier::point(low)),
        PathSegment::turning_curve(
            CubicBezier::new(low, v(0.0, -8.5, -6.5), v(0.0, -9.5, -5.5), v(0.0, -10.0, -6.0)),
            YawRamp::new(360.0, 180.0),
        ),
        PathSegment::turning_curve(
            CubicBezier::new(v(0.0, -10.0, -6.0), v(0.0, -9.5, -5.5), v(0.0, -8.5, -6.5), low),
            YawRamp::new(180.0, 0.0),
        ),
        PathSegment::curve(CubicBezier::new(
            low,
            v(0.0, -6.0, -22.0),
            v(0.0, -6.0, -22.0),
            HOME,
        )),
    ]
}

pub fn default_objects() -> Vec<ObjectConfig> {
    let mut objects: Vec<ObjectConfig> = ["pillars", "floor_static", "roof", "dragon_head"]
        .into_iter()
        .map(|name| ObjectConfig::new(name, Placement::default(), ObjectMotion::Static))
        .collect();
    objects.push(ObjectConfig::new(
        "floor_rotating",
        Placement::default(),
        ObjectMotion::Spin,
    ));
    objects.extend((0..HORSE_COUNT).map(|i| {
        ObjectConfig::new(
            format!("horse_{i}"),
            Placement::yawed(60.0 * i as f32),
            ObjectMotion::SpinAndBob {
                phase: 20.0 * i as f32,
            },
        )
    }));
    objects
}
