//! Construction-time error types.
//!
//! Everything that can go wrong is caught while the scene is being built.
//! Tick-time operations never fail.

use std::fmt;

/// Errors raised while validating or loading a scene configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The camera path has no segments.
    EmptyPath,
    /// A curve control point, pivot point or yaw ramp is NaN or infinite.
    NonFiniteSegment { segment: usize },
    /// A segment's speed scale is not a positive finite number.
    InvalidSpeedScale { segment: usize, value: f32 },
    /// The path speed times a segment's speed scale leaves the finite range.
    PathSpeedOverflow { segment: usize, speed: f32, speed_scale: f32 },
    /// The time needed to traverse one segment at unit speed is not positive.
    InvalidSegmentDuration(f32),
    /// A camera speed or sensitivity constant is out of range.
    InvalidCameraConstant { name: &'static str, value: f32 },
    /// The bob amplitude is negative or not finite.
    InvalidBobAmplitude(f32),
    /// The animation rate (milliseconds per degree) is not positive.
    InvalidAnimationRate(f32),
    /// The projection parameters do not describe a valid frustum.
    InvalidProjection(String),
    /// An object placement or phase is NaN or infinite.
    NonFinitePlacement { object: String },
    /// A light has a non-finite field or an out-of-range color.
    InvalidLight { light: usize, reason: String },
    /// Reading the configuration file failed.
    Io(std::io::Error),
    /// The configuration file is not valid JSON for this schema.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "camera path must contain at least one segment"),
            Self::NonFiniteSegment { segment } => {
                write!(f, "path segment {segment} contains a non-finite value")
            }
            Self::InvalidSpeedScale { segment, value } => {
                write!(f, "path segment {segment} has invalid speed scale {value}")
            }
            Self::PathSpeedOverflow {
                segment,
                speed,
                speed_scale,
            } => write!(
                f,
                "path segment {segment}: speed {speed} at scale {speed_scale} is out of range"
            ),
            Self::InvalidSegmentDuration(ms) => {
                write!(f, "segment duration must be positive, got {ms} ms")
            }
            Self::InvalidCameraConstant { name, value } => {
                write!(f, "camera constant `{name}` is out of range: {value}")
            }
            Self::InvalidBobAmplitude(a) => {
                write!(f, "bob amplitude must be finite and non-negative, got {a}")
            }
            Self::InvalidAnimationRate(r) => {
                write!(f, "animation rate must be positive, got {r} ms per degree")
            }
            Self::InvalidProjection(msg) => write!(f, "invalid projection: {msg}"),
            Self::NonFinitePlacement { object } => {
                write!(f, "object `{object}` has a non-finite placement")
            }
            Self::InvalidLight { light, reason } => write!(f, "light {light}: {reason}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
