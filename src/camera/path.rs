use glam::{Mat4, Vec3};
use log::debug;
use serde::{Deserialize, Serialize};

use super::CameraPose;
use crate::error::ConfigError;
use crate::math::CubicBezier;

/// Time to traverse one segment at unit speed
pub const DEFAULT_SEGMENT_DURATION_MS: f32 = 2000.0;

fn default_speed_scale() -> f32 {
    1.0
}

/// Linear mapping from the curve parameter to a yaw angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YawRamp {
    pub from: f32,
    pub to: f32,
}

impl YawRamp {
    pub const fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    pub fn at(&self, t: f32) -> f32 {
        self.from + (self.to - self.from) * t
    }

    fn is_finite(&self) -> bool {
        self.from.is_finite() && self.to.is_finite()
    }
}

/// What the camera does while a segment is active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentMotion {
    /// Translate along a Bezier arc, optionally turning while doing so
    Curve {
        curve: CubicBezier,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        yaw: Option<YawRamp>,
    },
    /// Hold translation at a fixed point and turn in place
    Pivot { at: Vec3, yaw: YawRamp },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    #[serde(flatten)]
    pub motion: SegmentMotion,
    /// Multiplier on the path speed while this segment is active. Turning
    /// phases run slower so angular motion reads like the translations.
    #[serde(default = "default_speed_scale")]
    pub speed_scale: f32,
}

impl PathSegment {
    pub fn curve(curve: CubicBezier) -> Self {
        Self {
            motion: SegmentMotion::Curve { curve, yaw: None },
            speed_scale: 1.0,
        }
    }

    pub fn turning_curve(curve: CubicBezier, yaw: YawRamp) -> Self {
        Self {
            motion: SegmentMotion::Curve {
                curve,
                yaw: Some(yaw),
            },
            speed_scale: 1.0,
        }
    }

    pub fn pivot(at: Vec3, yaw: YawRamp) -> Self {
        Self {
            motion: SegmentMotion::Pivot { at, yaw },
            speed_scale: 1.0,
        }
    }

    pub fn with_speed_scale(mut self, speed_scale: f32) -> Self {
        self.speed_scale = speed_scale;
        self
    }

    pub fn yaw_ramp(&self) -> Option<&YawRamp> {
        match &self.motion {
            SegmentMotion::Curve { yaw, .. } => yaw.as_ref(),
            SegmentMotion::Pivot { yaw, .. } => Some(yaw),
        }
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let finite = match &self.motion {
            SegmentMotion::Curve { curve, yaw } => {
                curve.is_finite() && yaw.as_ref().map_or(true, YawRamp::is_finite)
            }
            SegmentMotion::Pivot { at, yaw } => at.is_finite() && yaw.is_finite(),
        };
        if !finite {
            return Err(ConfigError::NonFiniteSegment { segment: index });
        }
        if !(self.speed_scale.is_finite() && self.speed_scale > 0.0) {
            return Err(ConfigError::InvalidSpeedScale {
                segment: index,
                value: self.speed_scale,
            });
        }
        if let SegmentMotion::Curve { curve, .. } = &self.motion {
            if curve.is_degenerate() {
                debug!("path segment {index} is a hold at {:?}", curve.start());
            }
        }
        Ok(())
    }

    /// Largest path speed whose effective rate and traversal time on this
    /// segment both stay finite and non-zero
    fn speed_limit(&self, segment_duration_ms: f32) -> f32 {
        let overflow = f32::MAX / self.speed_scale;
        let underflow = segment_duration_ms / (f32::MIN_POSITIVE * self.speed_scale);
        overflow.min(underflow) * 0.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathDirection {
    Forward,
    Reverse,
}

impl PathDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// Speed presets selectable while the tour is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedPreset {
    Slow,
    Medium,
    Fast,
}

impl SpeedPreset {
    pub const fn speed(self) -> f32 {
        match self {
            Self::Slow => 0.5,
            Self::Medium => 1.0,
            Self::Fast => 2.0,
        }
    }
}

/// Automatic camera tour over a closed loop of path segments.
///
/// The curve parameter `t` always stays in `[0, 1]`. Stepping past either
/// end moves to the neighbouring segment (modulo the segment count) and the
/// unconsumed part of the step carries on there at that segment's rate.
#[derive(Debug, Clone)]
pub struct CameraPath {
    segments: Vec<PathSegment>,
    segment_duration_ms: f32,
    default_speed: f32,
    max_speed: f32,
    index: usize,
    t: f32,
    speed: f32,
    resume_speed: Option<f32>,
    direction: PathDirection,
    translation: Vec3,
    yaw: f32,
}

impl CameraPath {
    pub fn new(
        segments: Vec<PathSegment>,
        segment_duration_ms: f32,
        default_speed: f32,
    ) -> Result<Self, ConfigError> {
        if segments.is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        if !(segment_duration_ms.is_finite() && segment_duration_ms > 0.0) {
            return Err(ConfigError::InvalidSegmentDuration(segment_duration_ms));
        }
        if !(default_speed.is_finite() && default_speed >= 0.0) {
            return Err(ConfigError::InvalidCameraConstant {
                name: "default_speed",
                value: default_speed,
            });
        }
        let mut max_speed = f32::MAX;
        for (i, segment) in segments.iter().enumerate() {
            segment.validate(i)?;
            let limit = segment.speed_limit(segment_duration_ms);
            if default_speed > limit {
                return Err(ConfigError::PathSpeedOverflow {
                    segment: i,
                    speed: default_speed,
                    speed_scale: segment.speed_scale,
                });
            }
            max_speed = max_speed.min(limit);
        }

        let mut path = Self {
            segments,
            segment_duration_ms,
            default_speed,
            max_speed,
            index: 0,
            t: 0.0,
            speed: default_speed,
            resume_speed: None,
            direction: PathDirection::Forward,
            translation: Vec3::ZERO,
            yaw: 0.0,
        };
        path.sample();
        Ok(path)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn direction(&self) -> PathDirection {
        self.direction
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn is_paused(&self) -> bool {
        self.speed == 0.0
    }

    /// Pose of the tour camera: path translation and yaw, no pitch or roll
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            translation: self.translation,
            pitch: 0.0,
            yaw: self.yaw,
            roll: 0.0,
        }
    }

    /// `Translation * Rx * Ry * Rz`
    pub fn view_matrix(&self) -> Mat4 {
        self.pose().translation_then_rotation()
    }

    /// Advance the tour by `delta_ms` milliseconds of wall time.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn advance(&mut self, delta_ms: f32) {
        let delta_ms = if delta_ms.is_finite() { delta_ms.max(0.0) } else { 0.0 };
        if delta_ms == 0.0 || self.speed == 0.0 {
            return;
        }

        let mut remaining = delta_ms;
        let lap = self.lap_duration_ms();
        // Whole laps land on the same (index, t); keep one so held yaw is
        // still refreshed by every ramp on the loop.
        if lap.is_finite() && lap > 0.0 && remaining > 2.0 * lap {
            remaining = lap + remaining % lap;
        }

        let count = self.segments.len();
        loop {
            let rate = self.rate();
            if !(rate.is_finite() && rate > 0.0) {
                break;
            }
            match self.direction {
                PathDirection::Forward => {
                    let to_boundary = (1.0 - self.t) / rate;
                    if remaining <= to_boundary {
                        self.t = (self.t + remaining * rate).min(1.0);
                        break;
                    }
                    remaining -= to_boundary;
                    self.t = 1.0;
                    self.sample();
                    self.index = (self.index + 1) % count;
                    self.t = 0.0;
                }
                PathDirection::Reverse => {
                    let to_boundary = self.t / rate;
                    if remaining <= to_boundary {
                        self.t = (self.t - remaining * rate).max(0.0);
                        break;
                    }
                    remaining -= to_boundary;
                    self.t = 0.0;
                    self.sample();
                    self.index = (self.index + count - 1) % count;
                    self.t = 1.0;
                }
            }
            debug!("camera path entered segment {}", self.index);
        }

        self.sample();
    }

    /// Flip the travel direction in place; index and t are untouched
    pub fn invert(&mut self) {
        self.direction = self.direction.flipped();
        debug!("camera path direction now {:?}", self.direction);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = if speed.is_nan() {
            0.0
        } else {
            speed.clamp(0.0, self.max_speed)
        };
        self.resume_speed = None;
    }

    pub fn select_preset(&mut self, preset: SpeedPreset) {
        self.set_speed(preset.speed());
    }

    /// Freeze the tour, or resume at the speed it had before pausing
    pub fn toggle_pause(&mut self) {
        if self.speed == 0.0 {
            self.speed = self.resume_speed.take().unwrap_or(self.default_speed);
        } else {
            self.resume_speed = Some(self.speed);
            self.speed = 0.0;
        }
        debug!("camera path speed now {}", self.speed);
    }

    pub fn reset_speed(&mut self) {
        self.set_speed(self.default_speed);
    }

    pub fn reset_heading(&mut self) {
        self.yaw = 0.0;
    }

    /// Back to the first segment at default speed, facing forward
    pub fn restart(&mut self) {
        self.index = 0;
        self.t = 0.0;
        self.reset_speed();
        self.reset_heading();
        self.sample();
    }

    fn rate(&self) -> f32 {
        self.speed * self.segments[self.index].speed_scale / self.segment_duration_ms
    }

    fn lap_duration_ms(&self) -> f32 {
        self.segments
            .iter()
            .map(|s| self.segment_duration_ms / (self.speed * s.speed_scale))
            .sum()
    }

    fn sample(&mut self) {
        match &self.segments[self.index].motion {
            SegmentMotion::Curve { curve, yaw } => {
                self.translation = curve.point_at(self.t);
                if let Some(ramp) = yaw {
                    self.yaw = ramp.at(self.t);
                }
            }
            SegmentMotion::Pivot { at, yaw } => {
                self.translation = *at;
                self.yaw = yaw.at(self.t);
            }
        }
    }
}
