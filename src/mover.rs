use crate::core::{Anchor, ElementMover, MoveRequest, TweenSlot};
use crate::dom;
use instant::Instant;
use web_sys as web;

/// Moves the fixed stage wrapper by writing its placement styles, tweened on
/// the frame clock.
pub struct DomMover {
    element: web::HtmlElement,
    slot: TweenSlot,
    clock: Instant,
}

impl DomMover {
    pub fn new(element: web::HtmlElement) -> Self {
        Self {
            element,
            slot: TweenSlot::new(Anchor::default()),
            clock: Instant::now(),
        }
    }

    #[inline]
    fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    /// Push the running tween's current value to the element. Called once per frame.
    pub fn advance(&mut self) {
        if !self.slot.is_active() {
            return;
        }
        let anchor = self.slot.advance(self.now_ms());
        dom::write_anchor(&self.element, anchor);
    }
}

impl ElementMover for DomMover {
    fn place(&mut self, anchor: Anchor) {
        self.slot.set(anchor);
        dom::write_anchor(&self.element, anchor);
    }

    fn request_move(&mut self, request: MoveRequest) {
        let now = self.now_ms();
        self.slot
            .start(request.anchor, request.duration_ms, request.ease, now);
        log::debug!(
            "[placement] tween to ({:.1}vh, {:.1}%) over {:.0}ms {}",
            request.anchor.top_percent,
            request.anchor.left_percent,
            request.duration_ms,
            request.ease.name()
        );
    }

    fn cancel(&mut self) {
        self.slot.kill();
    }
}
