use merry_go_round::input::{Control, InputEvent, KeyAction};
use merry_go_round::traits::RenderBackend;
use merry_go_round::frame::FrameOutput;
use merry_go_round::{SceneConfig, Simulation};

/// Keeps every submitted frame
#[derive(Default)]
struct Recorder {
    frames: Vec<FrameOutput>,
}

impl RenderBackend for Recorder {
    fn submit(&mut self, frame: &FrameOutput) -> Result<(), Box<dyn std::error::Error>> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

#[cfg(test)]
mod end_to_end_tests {
    use super::*;

    #[test]
    fn test_one_lap_of_frames() {
        let mut sim = Simulation::new(&SceneConfig::default()).unwrap();
        let mut recorder = Recorder::default();
        for _ in 0..1000 {
            let frame = sim.tick(16.0);
            recorder.submit(&frame).unwrap();
        }
        assert_eq!(recorder.frames.len(), 1000);
        let last = recorder.frames.last().unwrap();
        assert_eq!(last.frame.number, 1000);
        assert_eq!(last.models.len(), 11);
        assert!(last.view.is_finite());
        assert_eq!(last.projection, sim.projection());
        // 16 s is one lap of the default tour
        assert!(sim
            .rig()
            .pose()
            .translation
            .abs_diff_eq(merry_go_round::config::HOME, 1e-2));
    }

    #[test]
    fn test_projection_is_constant() {
        let mut sim = Simulation::new(&SceneConfig::default()).unwrap();
        let first = sim.tick(10.0).projection;
        sim.handle(InputEvent::Key(KeyAction::CycleCameraMode));
        let later = sim.tick(5000.0).projection;
        assert_eq!(first, later);
        assert_eq!(
            first,
            glam::Mat4::perspective_rh_gl(45f32.to_radians(), 1.0, 1.0, 50.0)
        );
    }

    #[test]
    fn test_report_serializes() {
        let mut sim = Simulation::new(&SceneConfig::default()).unwrap();
        sim.tick(100.0);
        let json = serde_json::to_value(sim.report()).unwrap();
        assert_eq!(json["frame"], 1);
        assert_eq!(json["mode"], "Automatic");
        assert_eq!(json["segment"], 0);
    }

    #[test]
    fn test_quit_key() {
        let mut sim = Simulation::new(&SceneConfig::default()).unwrap();
        assert_eq!(sim.handle(InputEvent::Key(KeyAction::Quit)), Control::Quit);
    }
}
