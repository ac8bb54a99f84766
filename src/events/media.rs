use super::registration::Registrations;
use super::scroll::{dispatch, SharedStage, SharedTriggers};
use crate::core::{ScrollListener, ViewportClass, MOBILE_MEDIA_QUERY};
use crate::dom::Page;
use web_sys as web;

fn mobile_query() -> Option<web::MediaQueryList> {
    web::window()?.match_media(MOBILE_MEDIA_QUERY).ok().flatten()
}

/// Viewport class from the media query, falling back to the window width.
pub fn current_class() -> ViewportClass {
    match mobile_query() {
        Some(mql) => ViewportClass::from_media_match(mql.matches()),
        None => {
            let width = web::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(f64::MAX);
            ViewportClass::from_width(width)
        }
    }
}

/// Re-select tables for `class`: the wrapper is resized, the old section
/// triggers are released before new ones are registered, then the page is
/// measured once.
pub fn apply_viewport_class(
    class: ViewportClass,
    page: &Page,
    stage: &SharedStage,
    triggers: &SharedTriggers,
) {
    let switched = match triggers.borrow_mut().as_mut() {
        Some(set) => set.switch(class),
        None => return,
    };
    if !switched {
        return;
    }
    page.fit_wrapper(class.wrapper_size());
    match stage.try_borrow_mut() {
        Ok(mut stage) => stage.on_viewport_change(class),
        Err(_) => log::warn!("[media] stage busy during viewport change"),
    }
    log::info!("[media] viewport class -> {}", class.label());
    dispatch(&page.root, stage, triggers);
}

pub fn wire_viewport_class(
    registrations: &mut Registrations,
    page: &Page,
    stage: &SharedStage,
    triggers: &SharedTriggers,
) {
    let Some(mql) = mobile_query() else {
        log::warn!("[media] matchMedia unavailable; viewport class fixed");
        return;
    };
    let query = mql.clone();
    let page = page.clone();
    let stage = stage.clone();
    let triggers = triggers.clone();
    registrations.listen(&mql, "change", move |_ev| {
        let class = ViewportClass::from_media_match(query.matches());
        apply_viewport_class(class, &page, &stage, &triggers);
    });
}
