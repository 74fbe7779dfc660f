#![cfg(target_arch = "wasm32")]
use backdrop_core::{BackdropConfig, CursorFollower, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod loop_state;

use constants::{EVENT_DOM_READY, EVENT_RESIZE};
use frame::LoopHandle;

thread_local! {
    // Running loops, so `stop` can tear them down.
    static LOOPS: RefCell<Vec<LoopHandle>> = const { RefCell::new(Vec::new()) };
}

fn keep(handle: LoopHandle) {
    LOOPS.with(|l| l.borrow_mut().push(handle));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let mut fired = false;
        dom::add_listener(&document, EVENT_DOM_READY, move |_| {
            if !std::mem::replace(&mut fired, true) {
                run();
            }
        });
    } else {
        run();
    }
    Ok(())
}

/// Stop every animation loop started by this module.
#[wasm_bindgen]
pub fn stop() {
    LOOPS.with(|l| {
        for handle in l.borrow_mut().drain(..) {
            if handle.is_running() {
                handle.stop();
            }
        }
    });
}

fn run() {
    let config = BackdropConfig::default();
    if let Err(e) = init_canvas(&config) {
        log::error!("canvas init error: {:?}", e);
    }
    if let Err(e) = init_cursor(&config) {
        log::error!("cursor init error: {:?}", e);
    }
}

fn init_canvas(config: &BackdropConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let Some(canvas) = dom::find_canvas(&document) else {
        log::debug!("[scene] no #{} element, skipping backdrop", constants::CANVAS_ID);
        return Ok(());
    };
    let mut surface = canvas::CanvasSurface::new(&canvas)?;

    let viewport = dom::sync_canvas_to_viewport(&canvas)
        .ok_or_else(|| anyhow::anyhow!("no window"))?;
    let kind = dom::animation_kind(&document);
    let scene = Rc::new(RefCell::new(Scene::new(
        kind,
        viewport,
        config,
        StdRng::from_entropy(),
    )?));

    let scene_resize = scene.clone();
    let canvas_resize = canvas.clone();
    dom::add_listener(&window, EVENT_RESIZE, move |_| {
        if let Some(vp) = dom::sync_canvas_to_viewport(&canvas_resize) {
            scene_resize.borrow_mut().resize(vp);
        }
    });

    let scene_pointer = scene.clone();
    events::pointer::wire_pointer_move(&document, move |p| {
        scene_pointer.borrow_mut().set_pointer(p);
    });

    keep(frame::start_loop("backdrop", move || {
        scene.borrow_mut().frame(&mut surface);
    }));
    Ok(())
}

fn init_cursor(config: &BackdropConfig) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let follower = CursorFollower::new(config.cursor_ease.0);
    keep(cursor::init_cursor(&document, follower)?);
    Ok(())
}
