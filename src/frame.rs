use crate::core::Camera;
use crate::events::{SharedOrbit, SharedStage};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Frames slower than this are logged (tab switches, GC pauses)
const LONG_FRAME: Duration = Duration::from_millis(250);

pub struct FrameContext {
    pub stage: SharedStage,
    pub orbit: SharedOrbit,
    pub canvas: web::HtmlCanvasElement,
    pub camera: Camera,
    pub gpu: Option<render::GpuState>,
    pub frame_index: u64,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Placement tweens and damping run from the first frame; drawing starts
    /// once a GPU is attached.
    pub fn new(stage: SharedStage, orbit: SharedOrbit, canvas: web::HtmlCanvasElement) -> Self {
        let mut camera = Camera::stage(1.0);
        camera.set_viewport_size(canvas.width(), canvas.height());
        Self {
            stage,
            orbit,
            canvas,
            camera,
            gpu: None,
            frame_index: 0,
            last_instant: Instant::now(),
        }
    }

    pub fn attach_gpu(&mut self, gpu: render::GpuState) {
        self.gpu = Some(gpu);
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        if dt > LONG_FRAME {
            log::debug!("[frame] long frame: {:.0}ms", dt.as_secs_f32() * 1000.0);
        }
        self.frame_index += 1;

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.set_viewport_size(w, h);
        if let Ok(orbit) = self.orbit.try_borrow() {
            self.camera.apply_orbit(&orbit);
        }

        let out = {
            let Ok(mut stage) = self.stage.try_borrow_mut() else {
                return;
            };
            if !stage.is_mounted() {
                return;
            }
            let out = stage.frame(self.frame_index, self.camera.visible_width());
            if let Some(mover) = stage.placement_mut().mover_mut() {
                mover.advance();
            }
            out
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            let model = out.pose.model_matrix(out.scale);
            match g.render(&self.camera, model) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    g.reconfigure();
                }
                Err(e) => log::error!("[render] frame error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Running requestAnimationFrame loop. `cancel` stops it and frees the callback.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn cancel(self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop cancelled");
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            raf_tick.set(request_frame(cb));
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(request_frame(cb));
    }
    FrameLoop {
        running,
        raf_id,
        tick,
    }
}
