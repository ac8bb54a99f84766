use super::registration::Registrations;
use crate::core::{Orbit, OrbitDrag};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedOrbit = Rc<RefCell<Orbit>>;

#[inline]
fn client_pos(ev: &web::PointerEvent) -> (f64, f64) {
    (ev.client_x() as f64, ev.client_y() as f64)
}

/// Drag on the canvas to orbit the camera around the model.
pub fn wire_orbit_drag(
    registrations: &mut Registrations,
    canvas: &web::HtmlCanvasElement,
    orbit: &SharedOrbit,
) {
    let drag = Rc::new(RefCell::new(OrbitDrag::default()));

    let drag_down = drag.clone();
    let canvas_down = canvas.clone();
    registrations.listen(canvas, "pointerdown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if ev.button() != 0 || !ev.is_primary() {
            return;
        }
        let (x, y) = client_pos(ev);
        if drag_down.borrow_mut().begin(ev.pointer_id(), x, y) {
            _ = canvas_down.set_pointer_capture(ev.pointer_id());
            log::debug!("[pointer] orbit drag started");
        }
    });

    let drag_move = drag.clone();
    let canvas_move = canvas.clone();
    let orbit = orbit.clone();
    registrations.listen(canvas, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let (x, y) = client_pos(ev);
        let Some((dx, dy)) = drag_move.borrow_mut().moved(ev.pointer_id(), x, y) else {
            return;
        };
        let height = canvas_move.client_height() as f64;
        if let Ok(mut orbit) = orbit.try_borrow_mut() {
            orbit.rotate(dx, dy, height);
        }
    });

    for kind in ["pointerup", "pointercancel"] {
        let drag_end = drag.clone();
        let canvas_end = canvas.clone();
        registrations.listen(canvas, kind, move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            if drag_end.borrow_mut().end(ev.pointer_id()) {
                _ = canvas_end.release_pointer_capture(ev.pointer_id());
            }
        });
    }
}
