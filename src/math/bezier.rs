use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Evaluates a cubic Bezier curve at `t`, independently per axis.
///
/// No clamping is applied: values of `t` outside `[0, 1]` extrapolate along
/// the same polynomial. Callers own the range of `t`.
pub fn cubic_bezier(points: &[Vec3; 4], t: f32) -> Vec3 {
    let u = 1.0 - t;
    points[0] * (u * u * u)
        + points[1] * (3.0 * t * u * u)
        + points[2] * (3.0 * t * t * u)
        + points[3] * (t * t * t)
}

/// Four control points of one cubic arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicBezier {
    pub points: [Vec3; 4],
}

impl CubicBezier {
    pub const fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Degenerate arc that sits on a single point
    pub const fn point(p: Vec3) -> Self {
        Self::new(p, p, p, p)
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        cubic_bezier(&self.points, t)
    }

    pub fn start(&self) -> Vec3 {
        self.points[0]
    }

    pub fn end(&self) -> Vec3 {
        self.points[3]
    }

    /// True when all four control points coincide
    pub fn is_degenerate(&self) -> bool {
        self.points.iter().all(|p| *p == self.points[0])
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }
}
