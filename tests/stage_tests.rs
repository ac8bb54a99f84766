// Host-side tests for the stage facade: progress, damping, scale and lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod showcase {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod placement {
        include!("../src/core/placement.rs");
    }
    pub mod pose {
        include!("../src/core/pose.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod stage {
        include!("../src/core/stage.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}

use showcase::constants::*;
use showcase::error::ConfigError;
use showcase::placement::{Anchor, ElementMover, MoveRequest};
use showcase::pose::{KeyframeTable, Pose};
use showcase::scroll::{Direction, ScrollListener};
use showcase::stage::*;
use showcase::viewport::{ScaleRule, ViewportClass};

#[derive(Default)]
struct CountingMover {
    placed: Vec<Anchor>,
    moves: Vec<MoveRequest>,
    cancels: usize,
}

impl ElementMover for CountingMover {
    fn place(&mut self, anchor: Anchor) {
        self.placed.push(anchor);
    }

    fn request_move(&mut self, request: MoveRequest) {
        self.moves.push(request);
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }
}

fn mounted(class: ViewportClass) -> Stage<CountingMover> {
    let mut stage = Stage::new(StageConfig::compiled().unwrap(), SECTION_COUNT, class).unwrap();
    stage.mount(CountingMover::default());
    stage
}

#[test]
fn compiled_config_validates() {
    let config = StageConfig::compiled().unwrap();
    assert_eq!(config.keyframes.desktop.len(), SECTION_COUNT);
    assert_eq!(config.anchors.mobile.len(), SECTION_COUNT);
    assert!(Stage::<CountingMover>::new(config, SECTION_COUNT, ViewportClass::Desktop).is_ok());
}

#[test]
fn keyframe_variant_mismatch_is_rejected() {
    let mut config = StageConfig::compiled().unwrap();
    config.keyframes.mobile = KeyframeTable::from_arrays(&MOBILE_POSES[..3]).unwrap();
    let err = Stage::<CountingMover>::new(config, SECTION_COUNT, ViewportClass::Desktop).err();
    assert_eq!(
        err.unwrap(),
        ConfigError::VariantLengthMismatch {
            table: "keyframe",
            desktop: 5,
            mobile: 3
        }
    );
}

#[test]
fn page_with_other_section_count_is_rejected() {
    let err = Stage::<CountingMover>::new(
        StageConfig::compiled().unwrap(),
        4,
        ViewportClass::Desktop,
    )
    .err();
    assert!(matches!(
        err,
        Some(ConfigError::SectionCountMismatch { expected: 4, .. })
    ));
}

#[test]
fn starts_at_first_pose_and_first_anchor() {
    let stage = mounted(ViewportClass::Desktop);
    assert_eq!(stage.read_pose(), Pose::from_array(DESKTOP_POSES[0]));
    let mover = stage.placement().mover().unwrap();
    assert_eq!(mover.placed, vec![Anchor::from_array(DESKTOP_ANCHORS[0])]);
}

#[test]
fn progress_is_clamped_on_the_way_in() {
    let mut stage = mounted(ViewportClass::Desktop);
    stage.on_scroll_progress(1.7);
    assert_eq!(stage.progress(), 1.0);
    stage.on_scroll_progress(-0.2);
    assert_eq!(stage.progress(), 0.0);
    stage.on_scroll_progress(f32::NAN);
    assert_eq!(stage.progress(), 0.0);
}

#[test]
fn frames_damp_toward_the_target() {
    let mut stage = mounted(ViewportClass::Desktop);
    stage.on_scroll_progress(1.0);
    let target = stage.target_pose();
    let start = stage.read_pose().distance(&target);
    let mut last = start;
    for frame in 1..=60 {
        let out = stage.frame(frame, 10.0);
        let d = out.pose.distance(&target);
        assert!(d < last);
        last = d;
    }
    assert!((last - start * 0.94f32.powi(60)).abs() < 1e-3);
}

#[test]
fn frame_is_idempotent_for_the_same_index() {
    let mut stage = mounted(ViewportClass::Desktop);
    stage.on_scroll_progress(0.5);
    let a = stage.frame(7, 10.0);
    let b = stage.frame(7, 10.0);
    assert_eq!(a, b);
    assert_eq!(stage.read_pose(), a.pose);
}

#[test]
fn scale_follows_visible_width_up_to_the_cap() {
    let mut stage = mounted(ViewportClass::Desktop);
    let narrow = stage.frame(1, 4.0);
    assert!((narrow.scale - 0.56).abs() < 1e-6);
    let wide = stage.frame(2, 50.0);
    assert_eq!(wide.scale, 0.8);

    let rule = ScaleRule::default();
    assert!((rule.scale(3.0, ViewportClass::Mobile) - 0.6).abs() < 1e-6);
    assert_eq!(rule.scale(10.0, ViewportClass::Mobile), 0.7);
    assert_eq!(rule.scale(-5.0, ViewportClass::Desktop), 0.0);
}

#[test]
fn viewport_flip_switches_pose_and_anchor_tables_together() {
    let mut stage = mounted(ViewportClass::Desktop);
    stage.on_scroll_progress(0.25);
    stage.on_section_enter(1, Direction::Forward);
    stage.on_viewport_change(ViewportClass::Mobile);

    assert_eq!(stage.class(), ViewportClass::Mobile);
    let target = stage.target_pose();
    assert!((target.vertical_offset - 0.6).abs() < 1e-6);

    let mover = stage.placement().mover().unwrap();
    assert_eq!(mover.cancels, 1);
    assert_eq!(mover.placed.last(), Some(&Anchor::from_array(MOBILE_ANCHORS[1])));

    stage.on_section_enter(3, Direction::Forward);
    let mover = stage.placement().mover().unwrap();
    assert_eq!(
        mover.moves.last().map(|m| m.anchor),
        Some(Anchor::from_array(MOBILE_ANCHORS[3]))
    );
}

#[test]
fn remounting_a_stage_cancels_the_old_mover() {
    let mut stage = mounted(ViewportClass::Desktop);
    let previous = stage.mount(CountingMover::default()).unwrap();
    assert_eq!(previous.cancels, 1);
    assert!(stage.is_mounted());
    assert_eq!(stage.placement().mover().unwrap().cancels, 0);
}

#[test]
fn events_after_unmount_change_nothing() {
    let mut stage = mounted(ViewportClass::Desktop);
    stage.on_scroll_progress(0.4);
    let mover = stage.unmount().unwrap();
    assert_eq!(mover.cancels, 1);
    assert!(!stage.is_mounted());

    stage.on_scroll_progress(0.9);
    stage.on_section_enter(2, Direction::Forward);
    stage.on_viewport_change(ViewportClass::Mobile);
    assert_eq!(stage.progress(), 0.4);
    assert_eq!(stage.class(), ViewportClass::Desktop);
    assert!(stage.unmount().is_none());
}
