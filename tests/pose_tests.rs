// Host-side tests for pose interpolation and damping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod showcase {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod pose {
        include!("../src/core/pose.rs");
    }
}

use showcase::constants::*;
use showcase::error::ConfigError;
use showcase::pose::*;
use std::f32::consts::PI;

fn desktop() -> KeyframeTable {
    KeyframeTable::from_arrays(&DESKTOP_POSES).unwrap()
}

#[test]
fn endpoints_return_first_and_last_pose_exactly() {
    let table = desktop();
    assert_eq!(target_pose(0.0, &table), Pose::from_array(DESKTOP_POSES[0]));
    assert_eq!(target_pose(1.0, &table), Pose::from_array(DESKTOP_POSES[4]));
}

#[test]
fn quarter_progress_lands_on_second_keyframe() {
    // Five entries give four segments; 0.25 is the start of segment 1
    let table = desktop();
    let p = target_pose(0.25, &table);
    assert!((p.yaw - PI * 1.3).abs() < 1e-5);
    assert!((p.pitch - 0.1).abs() < 1e-5);
    assert_eq!(p.roll, 0.0);
    assert_eq!(p.vertical_offset, 0.0);
}

#[test]
fn midpoint_of_a_segment_is_halfway() {
    let table = desktop();
    // progress 0.125 is halfway through segment 0
    let p = target_pose(0.125, &table);
    assert!((p.yaw - PI * 0.65).abs() < 1e-5);
    assert!((p.pitch - (PI / 2.0 + 0.1) / 2.0).abs() < 1e-5);
}

#[test]
fn out_of_range_progress_is_clamped() {
    let table = desktop();
    assert_eq!(target_pose(-3.0, &table), target_pose(0.0, &table));
    assert_eq!(target_pose(7.5, &table), target_pose(1.0, &table));
    assert_eq!(target_pose(f32::NAN, &table), target_pose(0.0, &table));
}

#[test]
fn interpolation_is_monotonic_within_each_segment() {
    let table = desktop();
    let steps = 400;
    let mut prev = target_pose(0.0, &table);
    for i in 1..=steps {
        let progress = i as f32 / steps as f32;
        let (segment, _) = segment_at(progress, table.len());
        let (prev_segment, _) = segment_at((i - 1) as f32 / steps as f32, table.len());
        let cur = target_pose(progress, &table);
        if segment == prev_segment {
            let a = table.frames()[segment];
            let b = table.frames()[segment + 1];
            let rising = b.yaw >= a.yaw;
            if rising {
                assert!(cur.yaw >= prev.yaw - 1e-5, "yaw fell at {}", progress);
            } else {
                assert!(cur.yaw <= prev.yaw + 1e-5, "yaw rose at {}", progress);
            }
        }
        prev = cur;
    }
}

#[test]
fn segment_index_never_exceeds_last_segment() {
    assert_eq!(segment_at(1.0, 5), (3, 1.0));
    assert_eq!(segment_at(0.0, 5), (0, 0.0));
    assert_eq!(segment_at(0.5, 2).0, 0);
    let (idx, t) = segment_at(0.999_999, 5);
    assert_eq!(idx, 3);
    assert!(t < 1.0 + f32::EPSILON);
}

#[test]
fn two_entry_table_is_a_single_segment() {
    let table =
        KeyframeTable::new(vec![Pose::default(), Pose::new(2.0, 0.0, 0.0, 1.0)]).unwrap();
    let p = target_pose(0.5, &table);
    assert!((p.yaw - 1.0).abs() < 1e-6);
    assert!((p.vertical_offset - 0.5).abs() < 1e-6);
}

#[test]
fn tables_with_fewer_than_two_entries_are_rejected() {
    assert_eq!(
        KeyframeTable::new(vec![Pose::default()]),
        Err(ConfigError::TooFewEntries {
            table: "keyframe",
            found: 1
        })
    );
    assert!(KeyframeTable::new(Vec::new()).is_err());
}

#[test]
fn repeated_calls_are_pure() {
    let table = desktop();
    for progress in [0.0, 0.13, 0.5, 0.77, 1.0] {
        assert_eq!(target_pose(progress, &table), target_pose(progress, &table));
    }
}

#[test]
fn damper_converges_within_predicted_frames() {
    let target = Pose::new(PI * 2.5, 0.2, 0.0, -0.3);
    let mut damper = PoseDamper::new(Pose::default(), POSE_DAMPING_PER_FRAME).unwrap();
    let eps = 1e-3;
    let steps = settle_steps(Pose::default().distance(&target), eps, POSE_DAMPING_PER_FRAME);
    assert!(steps > 0 && steps < 200);
    for frame in 0..steps as u64 {
        damper.step(frame, target);
    }
    assert!(damper.live().distance(&target) <= eps * 1.01);
}

#[test]
fn damper_moves_six_percent_per_frame() {
    let target = Pose::new(1.0, 0.0, 0.0, 0.0);
    let mut damper = PoseDamper::new(Pose::default(), 0.06).unwrap();
    let live = damper.step(1, target);
    assert!((live.yaw - 0.06).abs() < 1e-6);
    let live = damper.step(2, target);
    assert!((live.yaw - (0.06 + 0.94 * 0.06)).abs() < 1e-6);
}

#[test]
fn damper_step_is_a_no_op_for_the_same_frame() {
    let target = Pose::new(1.0, 1.0, 1.0, 1.0);
    let mut damper = PoseDamper::new(Pose::default(), 0.06).unwrap();
    let first = damper.step(10, target);
    let again = damper.step(10, target);
    assert_eq!(first, again);
    let next = damper.step(11, target);
    assert!(next.yaw > first.yaw);
}

#[test]
fn damper_never_overshoots_a_fixed_target() {
    let target = Pose::new(-2.0, 3.0, 0.5, 1.0);
    let mut damper = PoseDamper::new(Pose::default(), 0.06).unwrap();
    for frame in 0..500 {
        let live = damper.step(frame, target);
        assert!(live.yaw >= target.yaw && live.pitch <= target.pitch);
    }
}

#[test]
fn damping_factor_must_lie_strictly_between_zero_and_one() {
    for bad in [0.0, 1.0, -0.1, 1.5, f32::NAN] {
        assert!(PoseDamper::new(Pose::default(), bad).is_err(), "{}", bad);
    }
    assert!(PoseDamper::new(Pose::default(), 0.5).is_ok());
}

#[test]
fn settle_steps_edge_cases() {
    assert_eq!(settle_steps(0.5, 1.0, 0.06), 0);
    assert_eq!(settle_steps(1.0, 0.0, 0.06), u32::MAX);
    // 0.5^1 = 0.5 <= 0.5
    assert_eq!(settle_steps(1.0, 0.5, 0.5), 1);
}

#[test]
fn model_matrix_translates_by_vertical_offset() {
    let pose = Pose::new(0.0, 0.0, 0.0, -0.3);
    let m = pose.model_matrix(0.5);
    let origin = m.transform_point3(glam::Vec3::ZERO);
    assert!((origin.y + 0.3).abs() < 1e-6);
    let x = m.transform_vector3(glam::Vec3::X);
    assert!((x.length() - 0.5).abs() < 1e-6);
}
