#![cfg(target_arch = "wasm32")]
use crate::core::{Orbit, Stage, StageConfig};
use crate::dom::Page;
use crate::events::{Registrations, SharedOrbit, SharedStage, SharedTriggers, TriggerSet};
use crate::mover::DomMover;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod mover;
mod render;

thread_local! {
    static MOUNTED: RefCell<Option<Mount>> = const { RefCell::new(None) };
    // Bumped on every unmount so an init still awaiting the GPU can tell it is stale
    static GENERATION: Cell<u32> = const { Cell::new(0) };
}

/// Everything one mounted showcase owns.
struct Mount {
    stage: SharedStage,
    triggers: SharedTriggers,
    registrations: Registrations,
    frame_loop: Option<frame::FrameLoop>,
}

impl Mount {
    fn release(mut self) {
        self.registrations.release();
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
        self.triggers.borrow_mut().take();
        match self.stage.try_borrow_mut() {
            Ok(mut stage) => {
                stage.unmount();
            }
            Err(_) => log::warn!("[stage] busy during teardown"),
        }
    }
}

fn wire_canvas_resize(registrations: &mut Registrations, canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let Some(window) = web::window() else {
        return;
    };
    let canvas_resize = canvas.clone();
    registrations.listen(&window, "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

#[inline]
fn is_current(generation: u32) -> bool {
    GENERATION.with(|g| g.get()) == generation
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");
    spawn_mount();
    Ok(())
}

/// Release every listener, the frame loop and pending tweens.
#[wasm_bindgen]
pub fn unmount() {
    GENERATION.with(|g| g.set(g.get().wrapping_add(1)));
    if let Some(mount) = MOUNTED.with(|m| m.borrow_mut().take()) {
        mount.release();
    }
}

#[wasm_bindgen]
pub fn remount() {
    unmount();
    spawn_mount();
}

/// Live pose as `[yaw, pitch, roll, vertical_offset]`; zeros when nothing is mounted.
#[wasm_bindgen]
pub fn read_pose() -> js_sys::Float32Array {
    let pose = MOUNTED
        .with(|m| {
            m.borrow()
                .as_ref()
                .and_then(|mount| mount.stage.try_borrow().ok().map(|s| s.read_pose()))
        })
        .unwrap_or_default();
    js_sys::Float32Array::from(&pose.to_array()[..])
}

fn spawn_mount() {
    let generation = GENERATION.with(|g| g.get());
    spawn_local(async move {
        if let Err(e) = mount(generation).await {
            log::error!("mount error: {:?}", e);
        }
    });
}

async fn mount(generation: u32) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let page = Page::lookup(&document)?;
    let class = events::current_class();

    let mut stage = Stage::new(StageConfig::compiled()?, page.sections.len(), class)?;
    stage.mount(DomMover::new(page.wrapper.clone()));
    let stage: SharedStage = Rc::new(RefCell::new(stage));
    let triggers: SharedTriggers = Rc::new(RefCell::new(Some(TriggerSet::new(
        class,
        page.sections.clone(),
    ))));
    let orbit: SharedOrbit = Rc::new(RefCell::new(Orbit::default()));

    dom::enable_canvas_pointer(&page.wrapper, &page.canvas);
    page.fit_wrapper(class.wrapper_size());

    let mut registrations = Registrations::default();
    events::wire_scroll(&mut registrations, &page.root, &stage, &triggers);
    events::wire_viewport_class(&mut registrations, &page, &stage, &triggers);
    events::wire_orbit_drag(&mut registrations, &page.canvas, &orbit);
    wire_canvas_resize(&mut registrations, &page.canvas);
    // Initial measurement: a page restored mid-scroll gets its section right away
    events::dispatch(&page.root, &stage, &triggers);
    log::info!(
        "[stage] {} listeners registered, viewport {}",
        registrations.len(),
        class.label()
    );

    // The loop runs before WebGPU is ready so placement tweens advance meanwhile
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        stage.clone(),
        orbit,
        page.canvas.clone(),
    )));
    let mount = Mount {
        stage,
        triggers,
        registrations,
        frame_loop: Some(frame::start_loop(frame_ctx.clone())),
    };
    if !is_current(generation) {
        mount.release();
        return Ok(());
    }
    if let Some(previous) = MOUNTED.with(|m| m.borrow_mut().replace(mount)) {
        previous.release();
    }

    let gpu = frame::init_gpu(&page.canvas).await;
    if !is_current(generation) {
        log::debug!("[stage] unmounted while WebGPU was initializing");
        return Ok(());
    }
    if let Some(gpu) = gpu {
        frame_ctx.borrow_mut().attach_gpu(gpu);
    }
    Ok(())
}
