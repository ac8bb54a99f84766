use smallvec::SmallVec;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// DOM listeners owned by one mount.
///
/// `release` removes every listener and drops its closure; dropping the handle
/// does the same.
#[derive(Default)]
pub struct Registrations {
    listeners: SmallVec<[Listener; 4]>,
}

impl Registrations {
    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] could not listen for '{}': {:?}", kind, e);
            return;
        }
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn release(&mut self) {
        let count = self.listeners.len();
        for l in self.listeners.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
        if count > 0 {
            log::debug!("[events] released {} listeners", count);
        }
    }
}

impl Drop for Registrations {
    fn drop(&mut self) {
        self.release();
    }
}
