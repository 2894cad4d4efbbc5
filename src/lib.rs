#![cfg(target_arch = "wasm32")]
use crate::constants::SceneParams;
use crate::core::{Camera, ClockFace, OrbitControls, PointerState};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reflect-clock starting");

    // A failed init rejects this promise; nothing awaits it, so the host
    // reports it as an unhandled rejection.
    _ = future_to_promise(async move {
        match init(SceneParams::default()).await {
            Ok(()) => Ok(JsValue::UNDEFINED),
            Err(e) => {
                log::error!("init error: {:?}", e);
                Err(js_sys::Error::new(&format!("{:#}", e)).into())
            }
        }
    });
    Ok(())
}

async fn init(params: SceneParams) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, params.canvas_id)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Nothing is built or drawn until the reflection map is available
    let t0 = Instant::now();
    let env = assets::load_environment_map(params.env_map_path).await?;
    log::info!(
        "[env] {} {}x{} in {} ms",
        params.env_map_path,
        env.width,
        env.height,
        t0.elapsed().as_millis()
    );

    let clock = ClockFace::new();

    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas, &env, &clock, &params).await?;
    drop(env);

    let eye = Vec3::new(0.0, 0.0, params.camera_z);
    let camera = Camera {
        eye,
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: gpu.aspect(),
        fovy_radians: params.fovy_deg.to_radians(),
        znear: params.znear,
        zfar: params.zfar,
    };

    // ---------------- Interaction state ----------------
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let controls = Rc::new(RefCell::new(OrbitControls::new(eye, Vec3::ZERO)));
    let drag = Rc::new(RefCell::new(input::DragState::default()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
        controls: controls.clone(),
        drag,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        clock,
        pointer,
        controls,
        camera,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    log::info!("render loop started");

    Ok(())
}
