// Host-side tests for page progress and section triggers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod showcase {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}

use showcase::scroll::*;
use showcase::viewport::ViewportClass;

const VH: f64 = 800.0;

/// Five stacked sections, each one viewport tall, with the page scrolled by `offset`.
fn spans(offset: f64) -> Vec<SectionSpan> {
    (0..5)
        .map(|i| {
            let top = i as f64 * VH - offset;
            SectionSpan::new(top, top + VH)
        })
        .collect()
}

#[test]
fn page_progress_spans_zero_to_one() {
    let height = 5.0 * VH;
    assert_eq!(page_progress(0.0, height, VH), 0.0);
    assert_eq!(page_progress(-(height - VH), height, VH), 1.0);
    assert!((page_progress(-1600.0, height, VH) - 0.5).abs() < 1e-6);
}

#[test]
fn page_progress_clamps_and_handles_short_pages() {
    assert_eq!(page_progress(200.0, 4000.0, VH), 0.0);
    assert_eq!(page_progress(-9000.0, 4000.0, VH), 1.0);
    assert_eq!(page_progress(0.0, VH, VH), 0.0);
    assert_eq!(page_progress(-10.0, 300.0, VH), 0.0);
}

#[test]
fn trigger_window_needs_top_past_start_and_bottom_before_end() {
    let window = TriggerWindow::default();
    assert!(window.contains(SectionSpan::new(480.0, 1280.0), VH));
    assert!(!window.contains(SectionSpan::new(481.0, 1281.0), VH));
    assert!(window.contains(SectionSpan::new(-480.0, 320.0), VH));
    assert!(!window.contains(SectionSpan::new(-481.0, 319.0), VH));
}

#[test]
fn first_update_reports_the_section_in_view_as_forward() {
    let mut tracker = SectionTracker::new(5, TriggerWindow::default());
    let enters = tracker.update(&spans(0.0), VH, 0.0);
    assert_eq!(
        enters.as_slice(),
        &[SectionEnter {
            index: 0,
            direction: Direction::Forward
        }]
    );
    assert!(tracker.is_inside(0));
}

#[test]
fn scrolling_down_enters_next_section_forward() {
    let mut tracker = SectionTracker::new(5, TriggerWindow::default());
    tracker.update(&spans(0.0), VH, 0.0);
    assert!(tracker.update(&spans(200.0), VH, 200.0).is_empty());
    let enters = tracker.update(&spans(400.0), VH, 400.0);
    assert_eq!(
        enters.as_slice(),
        &[SectionEnter {
            index: 1,
            direction: Direction::Forward
        }]
    );
}

#[test]
fn scrolling_up_reenters_previous_section_backward() {
    let mut tracker = SectionTracker::new(5, TriggerWindow::default());
    tracker.update(&spans(1600.0), VH, 1600.0);
    // Section 1 sits above the end line at 1600 and back inside it at 1100
    let enters = tracker.update(&spans(1100.0), VH, 1100.0);
    assert_eq!(
        enters.as_slice(),
        &[SectionEnter {
            index: 1,
            direction: Direction::Backward
        }]
    );
}

#[test]
fn staying_inside_a_window_reports_nothing() {
    let mut tracker = SectionTracker::new(5, TriggerWindow::default());
    tracker.update(&spans(1700.0), VH, 1700.0);
    for offset in [1720.0, 1750.0, 1730.0] {
        assert!(tracker.update(&spans(offset), VH, offset).is_empty());
    }
}

#[test]
fn jump_across_several_sections_reports_only_those_now_inside() {
    let mut tracker = SectionTracker::new(5, TriggerWindow::default());
    tracker.update(&spans(0.0), VH, 0.0);
    let enters = tracker.update(&spans(3200.0), VH, 3200.0);
    assert_eq!(enters.len(), 1);
    assert_eq!(enters[0].index, 4);
    assert!(!tracker.is_inside(0));
}

#[test]
fn extra_spans_beyond_section_count_are_ignored() {
    let mut tracker = SectionTracker::new(2, TriggerWindow::default());
    let enters = tracker.update(&spans(3200.0), VH, 3200.0);
    assert!(enters.is_empty());
    assert_eq!(tracker.section_count(), 2);
    assert!(!tracker.is_inside(7));
}

#[test]
fn class_flip_rebuilds_triggers_and_reports_sections_in_view() {
    let mut triggers = ClassTracker::new(ViewportClass::Desktop, 5, TriggerWindow::default());
    triggers.update(&spans(0.0), VH, 0.0);
    assert_eq!(triggers.update(&spans(1700.0), VH, 1700.0).len(), 1);
    assert!(triggers.tracker().is_inside(2));

    assert!(triggers.switch(ViewportClass::Mobile));
    assert_eq!(triggers.class(), ViewportClass::Mobile);
    assert!(!triggers.tracker().is_inside(2));
    assert_eq!(triggers.tracker().section_count(), 5);

    // Nothing scrolled, yet the fresh triggers fire for the section in view
    let enters = triggers.update(&spans(1700.0), VH, 1700.0);
    assert_eq!(
        enters.as_slice(),
        &[SectionEnter {
            index: 2,
            direction: Direction::Forward
        }]
    );
}

#[test]
fn switching_to_the_active_class_keeps_trigger_state() {
    let mut triggers = ClassTracker::new(ViewportClass::Mobile, 5, TriggerWindow::default());
    triggers.update(&spans(1700.0), VH, 1700.0);
    assert!(!triggers.switch(ViewportClass::Mobile));
    assert!(triggers.tracker().is_inside(2));
    assert!(triggers.update(&spans(1700.0), VH, 1700.0).is_empty());
    // Direction history survives too
    let enters = triggers.update(&spans(1100.0), VH, 1100.0);
    assert_eq!(enters[0].direction, Direction::Backward);
}
