//! Camera state machine: an automatic Bezier tour plus two manual modes.
//!
//! Modes cycle `Automatic -> FreeFly -> Orbit -> Automatic`. Leaving either
//! manual mode puts the camera back at its home pose and restarts the tour.
//! Entering free fly from the tour keeps the tour's pose so the user can
//! take over mid-flight.

pub mod manual;
pub mod path;

use glam::{Mat4, Vec3};
use log::{debug, info};
use serde::Serialize;

use crate::input::ScrollDirection;
use crate::math::{rotation_xyz, translation};
use crate::traits::CameraController;

pub use manual::{FlyMove, ManualCamera, ManualSettings};
pub use path::{
    CameraPath, PathDirection, PathSegment, SegmentMotion, SpeedPreset, YawRamp,
    DEFAULT_SEGMENT_DURATION_MS,
};

/// Translation plus pitch/yaw/roll in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    pub translation: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl CameraPose {
    pub const fn at(translation: Vec3) -> Self {
        Self {
            translation,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
        }
    }

    /// `Rx * Ry * Rz`
    pub fn rotation(&self) -> Mat4 {
        rotation_xyz(self.pitch, self.yaw, self.roll)
    }

    pub fn translation_then_rotation(&self) -> Mat4 {
        translation(self.translation) * self.rotation()
    }

    pub fn rotation_then_translation(&self) -> Mat4 {
        self.rotation() * translation(self.translation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CameraMode {
    #[default]
    Automatic,
    FreeFly,
    Orbit,
}

impl CameraMode {
    pub const fn next(self) -> Self {
        match self {
            Self::Automatic => Self::FreeFly,
            Self::FreeFly => Self::Orbit,
            Self::Orbit => Self::Automatic,
        }
    }
}

/// Owns the tour and the manual camera and routes input by mode
#[derive(Debug, Clone)]
pub struct CameraRig {
    mode: CameraMode,
    path: CameraPath,
    manual: ManualCamera,
}

impl CameraRig {
    pub fn new(path: CameraPath, manual: ManualCamera) -> Self {
        Self {
            mode: CameraMode::Automatic,
            path,
            manual,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    pub fn manual(&self) -> &ManualCamera {
        &self.manual
    }

    /// Pose of whichever camera is currently driving the view
    pub fn pose(&self) -> CameraPose {
        match self.mode {
            CameraMode::Automatic => self.path.pose(),
            CameraMode::FreeFly | CameraMode::Orbit => self.manual.pose(),
        }
    }

    pub fn cycle_mode(&mut self) {
        match self.mode {
            CameraMode::Automatic => self.manual.take_over(self.path.pose()),
            CameraMode::FreeFly | CameraMode::Orbit => {
                self.manual.reset();
                self.path.restart();
            }
        }
        self.mode = self.mode.next();
        info!("camera mode: {:?}", self.mode);
    }

    /// Speeds back to default, pose back to home
    pub fn reset(&mut self) {
        self.path.reset_speed();
        self.path.reset_heading();
        self.manual.reset_fly_speed();
        self.manual.reset();
        debug!("camera reset in {:?} mode", self.mode);
    }

    pub fn select_preset(&mut self, preset: SpeedPreset) {
        if self.mode == CameraMode::Automatic {
            self.path.select_preset(preset);
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.mode == CameraMode::Automatic {
            self.path.toggle_pause();
        }
    }

    pub fn invert_path(&mut self) {
        if self.mode == CameraMode::Automatic {
            self.path.invert();
        }
    }

    pub fn fly(&mut self, movement: FlyMove) {
        if self.mode == CameraMode::FreeFly {
            self.manual.fly(movement);
        }
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.manual.press(x, y);
    }

    pub fn drag_to(&mut self, x: f32, y: f32) {
        if self.mode != CameraMode::Automatic {
            self.manual.drag_to(x, y);
        }
    }

    pub fn scroll(&mut self, direction: ScrollDirection) {
        match self.mode {
            CameraMode::Automatic => {}
            CameraMode::FreeFly => self.manual.scroll_speed(direction),
            CameraMode::Orbit => self.manual.zoom(direction),
        }
    }
}

impl CameraController for CameraRig {
    fn update(&mut self, delta_ms: f32) {
        if self.mode == CameraMode::Automatic {
            self.path.advance(delta_ms);
        }
    }

    fn view_matrix(&self) -> Mat4 {
        match self.mode {
            CameraMode::Automatic => self.path.view_matrix(),
            CameraMode::FreeFly => self.manual.fly_view(),
            CameraMode::Orbit => self.manual.orbit_view(),
        }
    }

    fn translation(&self) -> Vec3 {
        self.pose().translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::CubicBezier;

    const HOME: Vec3 = Vec3::new(0.0, -4.0, -20.0);
    const AWAY: Vec3 = Vec3::new(1.0, -5.0, -21.0);

    fn rig() -> CameraRig {
        let path = CameraPath::new(
            vec![
                PathSegment::curve(CubicBezier::new(HOME, HOME, AWAY, AWAY)),
                PathSegment::pivot(AWAY, YawRamp::new(0.0, 90.0)),
            ],
            1000.0,
            1.0,
        )
        .unwrap();
        let manual = ManualCamera::new(HOME, ManualSettings::default()).unwrap();
        CameraRig::new(path, manual)
    }

    #[test]
    fn test_mode_cycle_order() {
        assert_eq!(CameraMode::Automatic.next(), CameraMode::FreeFly);
        assert_eq!(CameraMode::FreeFly.next(), CameraMode::Orbit);
        assert_eq!(CameraMode::Orbit.next(), CameraMode::Automatic);
    }

    #[test]
    fn test_free_fly_takes_over_tour_pose() {
        let mut rig = rig();
        rig.update(1500.0);
        assert_eq!(rig.translation(), AWAY);
        let yaw = rig.pose().yaw;

        rig.cycle_mode();
        assert_eq!(rig.mode(), CameraMode::FreeFly);
        assert_eq!(rig.translation(), AWAY);
        assert_eq!(rig.pose().yaw, yaw);

        rig.cycle_mode();
        assert_eq!(rig.mode(), CameraMode::Orbit);
        assert_eq!(rig.translation(), HOME);
        assert_eq!(rig.pose().yaw, 0.0);
    }

    #[test]
    fn test_back_to_automatic_restarts_tour() {
        let mut rig = rig();
        rig.select_preset(SpeedPreset::Fast);
        rig.update(700.0);
        rig.cycle_mode();
        rig.cycle_mode();
        rig.cycle_mode();
        assert_eq!(rig.mode(), CameraMode::Automatic);
        assert_eq!(rig.path().index(), 0);
        assert_eq!(rig.path().t(), 0.0);
        assert_eq!(rig.path().speed(), 1.0);
        assert_eq!(rig.translation(), HOME);
    }

    #[test]
    fn test_manual_modes_ignore_tour_keys() {
        let mut rig = rig();
        rig.cycle_mode();
        rig.toggle_pause();
        rig.invert_path();
        rig.select_preset(SpeedPreset::Slow);
        assert!(!rig.path().is_paused());
        assert_eq!(rig.path().direction(), PathDirection::Forward);
        assert_eq!(rig.path().speed(), 1.0);
    }

    #[test]
    fn test_tour_ignores_drag_and_fly() {
        let mut rig = rig();
        rig.press(0.0, 0.0);
        rig.drag_to(50.0, 50.0);
        rig.fly(FlyMove::Forward);
        rig.scroll(ScrollDirection::Up);
        assert_eq!(rig.manual().pose(), CameraPose::at(HOME));
        assert_eq!(rig.manual().fly_speed(), ManualSettings::default().fly_speed);
    }

    #[test]
    fn test_manual_modes_do_not_advance_tour() {
        let mut rig = rig();
        rig.cycle_mode();
        rig.update(400.0);
        assert_eq!(rig.path().t(), 0.0);
    }

    #[test]
    fn test_reset_returns_home() {
        let mut rig = rig();
        rig.cycle_mode();
        rig.fly(FlyMove::Forward);
        rig.scroll(ScrollDirection::Up);
        rig.reset();
        assert_eq!(rig.translation(), HOME);
        assert_eq!(rig.manual().fly_speed(), ManualSettings::default().fly_speed);
    }

    #[test]
    fn test_automatic_view_composition() {
        let mut rig = rig();
        rig.update(1500.0);
        let pose = rig.pose();
        let expected = Mat4::from_translation(pose.translation)
            * Mat4::from_rotation_y(pose.yaw.to_radians());
        assert!(rig.view_matrix().abs_diff_eq(expected, 1e-5));
    }
}
