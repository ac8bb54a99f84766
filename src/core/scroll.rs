use super::constants::{TRIGGER_END_FRACTION, TRIGGER_START_FRACTION};
use super::viewport::ViewportClass;
use smallvec::SmallVec;

/// Which way the page was moving when a section came into focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// Observer for the scroll-tracking host.
pub trait ScrollListener {
    /// Normalized progress through the whole scrollable page.
    fn on_scroll_progress(&mut self, progress: f32);
    fn on_section_enter(&mut self, index: usize, direction: Direction);
    fn on_viewport_change(&mut self, class: ViewportClass);
}

/// Progress of a container scrolled from "top at viewport top" to "bottom at
/// viewport bottom". `container_top` is viewport-relative (negative once
/// scrolled past). Containers no taller than the viewport report 0.
pub fn page_progress(container_top: f64, container_height: f64, viewport_height: f64) -> f32 {
    let scrollable = container_height - viewport_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    ((-container_top) / scrollable).clamp(0.0, 1.0) as f32
}

/// Vertical extent of a section, relative to the viewport top, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub bottom: f64,
}

impl SectionSpan {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// The band in which a section counts as in focus: its top has reached the
/// start line and its bottom has not yet passed the end line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerWindow {
    pub start_fraction: f64,
    pub end_fraction: f64,
}

impl Default for TriggerWindow {
    fn default() -> Self {
        Self {
            start_fraction: TRIGGER_START_FRACTION,
            end_fraction: TRIGGER_END_FRACTION,
        }
    }
}

impl TriggerWindow {
    #[inline]
    pub fn contains(&self, span: SectionSpan, viewport_height: f64) -> bool {
        span.top <= self.start_fraction * viewport_height
            && span.bottom >= self.end_fraction * viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionEnter {
    pub index: usize,
    pub direction: Direction,
}

pub type SectionEnters = SmallVec<[SectionEnter; 4]>;

/// Turns section geometry into enter / enter-back events.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    window: TriggerWindow,
    inside: SmallVec<[bool; 8]>,
    last_scroll: Option<f64>,
}

impl SectionTracker {
    pub fn new(section_count: usize, window: TriggerWindow) -> Self {
        Self {
            window,
            inside: SmallVec::from_elem(false, section_count),
            last_scroll: None,
        }
    }

    pub fn section_count(&self) -> usize {
        self.inside.len()
    }

    pub fn is_inside(&self, index: usize) -> bool {
        self.inside.get(index).copied().unwrap_or(false)
    }

    /// Report sections that moved into their window since the last update.
    /// Spans beyond the tracked section count are ignored.
    pub fn update(
        &mut self,
        spans: &[SectionSpan],
        viewport_height: f64,
        scroll_offset: f64,
    ) -> SectionEnters {
        let direction = match self.last_scroll {
            Some(prev) if scroll_offset < prev => Direction::Backward,
            _ => Direction::Forward,
        };
        self.last_scroll = Some(scroll_offset);

        let mut enters = SectionEnters::new();
        for (index, (inside, span)) in self.inside.iter_mut().zip(spans).enumerate() {
            let now_inside = self.window.contains(*span, viewport_height);
            if now_inside && !*inside {
                enters.push(SectionEnter { index, direction });
            }
            *inside = now_inside;
        }
        enters
    }
}

/// Section triggers scoped to one viewport class.
///
/// Switching class drops the tracker and every window state it held, so the
/// sections already in view report fresh enters against the new class's table.
#[derive(Clone, Debug)]
pub struct ClassTracker {
    class: ViewportClass,
    window: TriggerWindow,
    tracker: SectionTracker,
}

impl ClassTracker {
    pub fn new(class: ViewportClass, section_count: usize, window: TriggerWindow) -> Self {
        Self {
            class,
            window,
            tracker: SectionTracker::new(section_count, window),
        }
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    /// Rebuild the triggers for `class`. Returns false, keeping all state,
    /// when `class` is already active.
    pub fn switch(&mut self, class: ViewportClass) -> bool {
        if class == self.class {
            return false;
        }
        let section_count = self.tracker.section_count();
        self.class = class;
        self.tracker = SectionTracker::new(section_count, self.window);
        true
    }

    pub fn update(
        &mut self,
        spans: &[SectionSpan],
        viewport_height: f64,
        scroll_offset: f64,
    ) -> SectionEnters {
        self.tracker.update(spans, viewport_height, scroll_offset)
    }
}
