use crate::constants::{ROOT_ID, SECTION_SELECTOR, STAGE_CANVAS_ID, STAGE_WRAPPER_ID};
use crate::core::{Anchor, SectionSpan, WrapperSize};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements the showcase is mounted on.
#[derive(Clone)]
pub struct Page {
    pub root: web::Element,
    pub wrapper: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub sections: Vec<web::Element>,
}

impl Page {
    pub fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        let root: web::Element = element_by_id(document, ROOT_ID)?;
        let sections = query_all(&root, SECTION_SELECTOR);
        Ok(Self {
            wrapper: element_by_id(document, STAGE_WRAPPER_ID)?,
            canvas: element_by_id(document, STAGE_CANVAS_ID)?,
            root,
            sections,
        })
    }

    /// Size the wrapper for its viewport class, then match the canvas backing store.
    pub fn fit_wrapper(&self, size: WrapperSize) {
        write_wrapper_size(&self.wrapper, size);
        sync_canvas_backing_size(&self.canvas);
    }
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!(format!("#{} has unexpected type: {:?}", id, e)))
}

/// Direct and nested elements matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn scroll_offset() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn section_spans(sections: &[web::Element]) -> Vec<SectionSpan> {
    sections
        .iter()
        .map(|s| {
            let rect = s.get_bounding_client_rect();
            SectionSpan::new(rect.top(), rect.bottom())
        })
        .collect()
}

/// Write an anchor as fixed-position CSS on the hosting element.
pub fn write_anchor(element: &web::HtmlElement, anchor: Anchor) {
    let style = element.style();
    _ = style.set_property("top", &format!("{:.3}vh", anchor.top_percent));
    _ = style.set_property("left", &format!("{:.3}%", anchor.left_percent));
    _ = style.set_property(
        "transform",
        &format!("translateX({:.3}%)", anchor.centering_offset_percent),
    );
}

pub fn write_wrapper_size(element: &web::HtmlElement, size: WrapperSize) {
    let style = element.style();
    _ = style.set_property("width", &format!("{}vw", size.width_vw));
    _ = style.set_property("height", &format!("{}vh", size.height_vh));
}

/// The wrapper lets the page through; only the canvas takes drags.
/// Vertical touch drags keep scrolling the page.
pub fn enable_canvas_pointer(wrapper: &web::HtmlElement, canvas: &web::HtmlCanvasElement) {
    _ = wrapper.style().set_property("pointer-events", "none");
    let style = canvas.style();
    _ = style.set_property("pointer-events", "auto");
    _ = style.set_property("touch-action", "pan-y");
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().clamp(1.0, 2.0);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
