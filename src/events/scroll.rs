use super::registration::Registrations;
use crate::core::scroll::SectionEnters;
use crate::core::{page_progress, ClassTracker, ScrollListener, Stage, TriggerWindow, ViewportClass};
use crate::dom;
use crate::mover::DomMover;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedStage = Rc<RefCell<Stage<DomMover>>>;
pub type SharedTriggers = Rc<RefCell<Option<TriggerSet>>>;

/// Section triggers registered for one viewport class.
pub struct TriggerSet {
    sections: Vec<web::Element>,
    tracker: ClassTracker,
}

impl TriggerSet {
    pub fn new(class: ViewportClass, sections: Vec<web::Element>) -> Self {
        let tracker = ClassTracker::new(class, sections.len(), TriggerWindow::default());
        log::debug!(
            "[scroll] {} section triggers registered ({})",
            sections.len(),
            class.label()
        );
        Self { sections, tracker }
    }

    pub fn class(&self) -> ViewportClass {
        self.tracker.class()
    }

    /// Drop the triggers of the previous class and register fresh ones.
    pub fn switch(&mut self, class: ViewportClass) -> bool {
        let switched = self.tracker.switch(class);
        if switched {
            log::debug!("[scroll] section triggers re-registered ({})", class.label());
        }
        switched
    }

    fn poll(&mut self, viewport_height: f64) -> SectionEnters {
        let spans = dom::section_spans(&self.sections);
        self.tracker.update(&spans, viewport_height, dom::scroll_offset())
    }
}

/// Measure the page and forward progress plus any section enters to the stage.
pub fn dispatch(root: &web::Element, stage: &SharedStage, triggers: &SharedTriggers) {
    let vh = dom::viewport_height();
    let rect = root.get_bounding_client_rect();
    let progress = page_progress(rect.top(), rect.height(), vh);
    let enters = match triggers.borrow_mut().as_mut() {
        Some(set) => set.poll(vh),
        None => SectionEnters::new(),
    };
    let Ok(mut stage) = stage.try_borrow_mut() else {
        log::debug!("[scroll] stage busy; event dropped");
        return;
    };
    stage.on_scroll_progress(progress);
    for enter in enters {
        stage.on_section_enter(enter.index, enter.direction);
    }
}

pub fn wire_scroll(
    registrations: &mut Registrations,
    root: &web::Element,
    stage: &SharedStage,
    triggers: &SharedTriggers,
) {
    let Some(window) = web::window() else {
        return;
    };
    for kind in ["scroll", "resize"] {
        let root = root.clone();
        let stage = stage.clone();
        let triggers = triggers.clone();
        registrations.listen(&window, kind, move |_ev| {
            dispatch(&root, &stage, &triggers);
        });
    }
}
