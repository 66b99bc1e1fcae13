use glam::Vec3;
use merry_go_round::config::default_path;
use merry_go_round::camera::SegmentMotion;
use merry_go_round::math::{cubic_bezier, CubicBezier};

fn control_sets() -> Vec<[Vec3; 4]> {
    let mut sets: Vec<[Vec3; 4]> = default_path()
        .iter()
        .filter_map(|s| match &s.motion {
            SegmentMotion::Curve { curve, .. } => Some(curve.points),
            SegmentMotion::Pivot { .. } => None,
        })
        .collect();
    sets.push([
        Vec3::new(-3.0, 7.5, 0.25),
        Vec3::new(100.0, -40.0, 2.0),
        Vec3::new(0.001, 0.0, -9.0),
        Vec3::new(5.0, 5.0, 5.0),
    ]);
    sets
}

#[cfg(test)]
mod endpoint_tests {
    use super::*;

    #[test]
    fn test_starts_at_first_control_point() {
        for points in control_sets() {
            assert_eq!(cubic_bezier(&points, 0.0), points[0]);
        }
    }

    #[test]
    fn test_ends_at_last_control_point() {
        for points in control_sets() {
            let end = cubic_bezier(&points, 1.0);
            assert!(
                end.abs_diff_eq(points[3], 1e-5),
                "expected {:?}, got {:?}",
                points[3],
                end
            );
        }
    }
}

#[cfg(test)]
mod continuity_tests {
    use super::*;

    #[test]
    fn test_small_steps_give_small_moves() {
        for points in control_sets() {
            let curve = CubicBezier { points };
            let scale = points.iter().map(|p| p.abs().max_element()).fold(1.0, f32::max);
            for i in 0..100 {
                let t = i as f32 / 100.0;
                let eps = 1e-4;
                let step = curve.point_at(t + eps) - curve.point_at(t);
                assert!(
                    step.length() < scale * 1e-2,
                    "jump of {} at t = {}",
                    step.length(),
                    t
                );
            }
        }
    }

    #[test]
    fn test_step_shrinks_with_epsilon() {
        let curve = CubicBezier {
            points: control_sets()[0],
        };
        let t = 0.37;
        let big = (curve.point_at(t + 1e-2) - curve.point_at(t)).length();
        let small = (curve.point_at(t + 1e-3) - curve.point_at(t)).length();
        assert!(small < big);
    }
}
