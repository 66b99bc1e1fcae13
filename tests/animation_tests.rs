use glam::Vec3;
use merry_go_round::config::{AnimationConfig, SceneConfig};
use merry_go_round::core::AnimationClock;
use merry_go_round::scene::{bob_offset, ObjectConfig, ObjectMotion, Placement, SceneCompositor};
use merry_go_round::Simulation;

#[cfg(test)]
mod angle_tests {
    use super::*;

    #[test]
    fn test_angle_in_range_for_large_deltas() {
        let mut clock = AnimationClock::default();
        let mut delta = 0.5f32;
        for _ in 0..200 {
            clock.tick(delta);
            assert!(
                clock.angle() >= 0.0 && clock.angle() < 360.0,
                "angle {} after delta {}",
                clock.angle(),
                delta
            );
            delta = (delta * 1.7).min(f32::MAX / 2.0);
        }
    }

    #[test]
    fn test_angle_matches_rate() {
        let mut clock = AnimationClock::new(10.0, true);
        clock.tick(450.0);
        assert!((clock.angle() - 45.0).abs() < 1e-4);
    }
}

#[cfg(test)]
mod bob_tests {
    use super::*;

    const OFFSETS: [f32; 6] = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];

    #[test]
    fn test_bob_at_ninety_degrees() {
        let objects: Vec<ObjectConfig> = OFFSETS
            .iter()
            .enumerate()
            .map(|(i, &phase)| {
                ObjectConfig::new(
                    format!("horse_{i}"),
                    Placement::default(),
                    ObjectMotion::SpinAndBob { phase },
                )
            })
            .collect();
        let config = SceneConfig {
            objects,
            animation: AnimationConfig {
                ms_per_degree: 20.0,
                bob_amplitude: 1.0,
                enabled: true,
            },
            ..SceneConfig::default()
        };
        let mut sim = Simulation::new(&config).unwrap();
        let output = sim.tick(1800.0);
        assert!((sim.clock().angle() - 90.0).abs() < 1e-4);

        for (model, offset) in output.models.iter().zip(OFFSETS) {
            let expected = ((90.0 + offset) * std::f32::consts::PI / 180.0).sin().abs();
            let lift = model.w_axis.y;
            assert!(
                (lift - expected).abs() < 1e-4,
                "offset {offset}: expected {expected}, got {lift}"
            );
            assert!(lift >= 0.0);
        }
    }

    #[test]
    fn test_bob_non_negative_everywhere() {
        for angle in 0..360 {
            for phase in (-720..720).step_by(13) {
                assert!(bob_offset(0.75, angle as f32, phase as f32) >= 0.0);
            }
        }
    }

    #[test]
    fn test_translated_object_spins_about_origin() {
        let objects = vec![ObjectConfig::new(
            "rider",
            Placement {
                translation: Vec3::new(2.0, 0.0, 0.0),
                ..Placement::default()
            },
            ObjectMotion::Spin,
        )];
        let mut scene = SceneCompositor::new(&objects, 1.0).unwrap();
        let mut clock = AnimationClock::default();
        clock.tick(90.0 * 20.0);
        scene.compose(&clock);
        let position = scene.objects()[0].model().w_axis.truncate();
        // RotY(-90) carries +x onto +z
        assert!(position.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-4));
    }
}
