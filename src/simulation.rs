//! One carousel scene: camera rig, animation clock, objects and lights.
//!
//! The driver calls [`Simulation::handle`] for each input event and
//! [`Simulation::tick`] once per frame. Nothing here fails after
//! construction.

use glam::Mat4;
use log::{debug, info, trace};

use crate::camera::{CameraPath, CameraRig, FlyMove, ManualCamera, SpeedPreset};
use crate::config::SceneConfig;
use crate::core::clock::AnimationClock;
use crate::error::ConfigError;
use crate::frame::{FrameInfo, FrameOutput, FrameReport};
use crate::input::{Control, InputEvent, KeyAction};
use crate::lighting::{LightRig, HUE_STEP, VALUE_STEP};
use crate::scene::SceneCompositor;
use crate::traits::CameraController;
use crate::types::LightUniform;

#[derive(Debug, Clone)]
pub struct Simulation {
    rig: CameraRig,
    clock: AnimationClock,
    scene: SceneCompositor,
    lights: LightRig,
    projection: Mat4,
    frame: FrameInfo,
}

impl Simulation {
    pub fn new(config: &SceneConfig) -> Result<Self, ConfigError> {
        config.projection.validate()?;
        config.animation.validate()?;

        let camera = &config.camera;
        let path = CameraPath::new(
            config.path.clone(),
            camera.segment_duration_ms,
            camera.default_speed,
        )?;
        let manual = ManualCamera::new(camera.home, camera.manual)?;
        let scene = SceneCompositor::new(&config.objects, config.animation.bob_amplitude)?;
        let lights = LightRig::new(config.lights.clone())?;
        let clock = AnimationClock::new(config.animation.ms_per_degree, config.animation.enabled);

        info!(
            "simulation ready: {} path segments, {} objects, {} lights",
            config.path.len(),
            config.objects.len(),
            config.lights.len()
        );

        let mut simulation = Self {
            rig: CameraRig::new(path, manual),
            clock,
            scene,
            lights,
            projection: config.projection.matrix(),
            frame: FrameInfo::default(),
        };
        simulation.scene.compose(&simulation.clock);
        Ok(simulation)
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn scene(&self) -> &SceneCompositor {
        &self.scene
    }

    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn frame(&self) -> FrameInfo {
        self.frame
    }

    /// Advance everything by `delta_ms` and return the frame to draw.
    ///
    /// Negative or non-finite deltas count as zero.
    pub fn tick(&mut self, delta_ms: f32) -> FrameOutput {
        let delta_ms = if delta_ms.is_finite() {
            delta_ms.max(0.0)
        } else {
            0.0
        };
        self.frame = self.frame.advance(delta_ms);
        self.clock.tick(delta_ms);
        self.rig.update(delta_ms);
        self.scene.compose(&self.clock);

        let output = self.output();
        trace!(
            "frame {} angle {:.2} camera {:?}",
            self.frame.number,
            self.clock.angle(),
            self.rig.translation()
        );
        output
    }

    /// The current frame without advancing time
    pub fn output(&self) -> FrameOutput {
        FrameOutput {
            frame: self.frame,
            view: self.rig.view_matrix(),
            projection: self.projection,
            models: self.scene.model_matrices(),
            lights: self.lights.lights().iter().map(LightUniform::from).collect(),
        }
    }

    pub fn report(&self) -> FrameReport {
        let path = self.rig.path();
        let pose = self.rig.pose();
        FrameReport {
            frame: self.frame.number,
            time_ms: self.frame.time_ms,
            mode: self.rig.mode(),
            segment: path.index(),
            t: path.t(),
            speed: path.speed(),
            translation: pose.translation,
            yaw: pose.yaw,
            angle: self.clock.angle(),
            selected_light: self.lights.selected(),
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> Control {
        match event {
            InputEvent::Key(action) => return self.key(action),
            InputEvent::PointerPressed { x, y } => self.rig.press(x, y),
            InputEvent::PointerDragged { x, y } => self.rig.drag_to(x, y),
            InputEvent::Scroll(direction) => self.rig.scroll(direction),
        }
        Control::Continue
    }

    fn key(&mut self, action: KeyAction) -> Control {
        match action {
            KeyAction::CycleCameraMode => self.rig.cycle_mode(),
            KeyAction::ResetCamera => self.rig.reset(),
            KeyAction::ResetObjects => {
                self.clock.reset();
                self.scene.compose(&self.clock);
                debug!("objects reset");
            }
            KeyAction::ToggleAnimation => {
                self.clock.toggle();
                debug!("animation enabled: {}", self.clock.is_enabled());
            }
            KeyAction::SpeedSlow => self.rig.select_preset(SpeedPreset::Slow),
            KeyAction::SpeedMedium => self.rig.select_preset(SpeedPreset::Medium),
            KeyAction::SpeedFast => self.rig.select_preset(SpeedPreset::Fast),
            KeyAction::TogglePause => self.rig.toggle_pause(),
            KeyAction::InvertPath => self.rig.invert_path(),
            KeyAction::MoveForward => self.rig.fly(FlyMove::Forward),
            KeyAction::MoveBackward => self.rig.fly(FlyMove::Backward),
            KeyAction::StrafeLeft => self.rig.fly(FlyMove::StrafeLeft),
            KeyAction::StrafeRight => self.rig.fly(FlyMove::StrafeRight),
            KeyAction::ElevateUp => self.rig.fly(FlyMove::Up),
            KeyAction::ElevateDown => self.rig.fly(FlyMove::Down),
            KeyAction::CycleLight => self.lights.cycle_selected(),
            KeyAction::HueUp => self.lights.shift_hue(HUE_STEP),
            KeyAction::HueDown => self.lights.shift_hue(-HUE_STEP),
            KeyAction::ValueUp => self.lights.shift_value(VALUE_STEP),
            KeyAction::ValueDown => self.lights.shift_value(-VALUE_STEP),
            KeyAction::Quit => {
                info!("quit requested");
                return Control::Quit;
            }
        }
        Control::Continue
    }
}
