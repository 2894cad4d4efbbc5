use crate::core::{Camera, ClockFace, OrbitControls, PointerState, WallTime};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub clock: ClockFace,
    pub pointer: Rc<RefCell<PointerState>>,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub camera: Camera,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        // (a) parallax from one pointer snapshot
        let pointer = *self.pointer.borrow();
        self.clock.smooth_rings(pointer);

        // (b)-(d) hands and ticks from the wall clock
        self.clock.place(local_wall_time());

        // (e) camera
        {
            let mut controls = self.controls.borrow_mut();
            controls.update();
            self.camera.eye = controls.eye();
            self.camera.target = controls.target;
        }

        // (f) draw
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        self.camera.aspect = self.gpu.aspect();
        match self.gpu.render(&self.clock, &self.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

fn local_wall_time() -> WallTime {
    let now = js_sys::Date::new_0();
    WallTime::new(now.get_hours(), now.get_minutes(), now.get_seconds())
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
