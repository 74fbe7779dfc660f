use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::loop_state::{LoopState, Stop};

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stop handle for a requestAnimationFrame loop.
#[derive(Clone)]
pub struct LoopHandle {
    name: &'static str,
    state: LoopState,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Cancel the pending frame; the loop will not re-arm itself.
    pub fn stop(&self) {
        let Stop::Stopped { cancel } = self.state.stop() else {
            return;
        };
        if let (Some(id), Some(w)) = (cancel, web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[loop] {} stopped", self.name);
    }
}

fn request_frame(tick: &TickSlot, state: &LoopState) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => state.armed(id),
            Err(e) => log::error!("[loop] requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// Run `frame` once per display refresh until the returned handle is stopped.
pub fn start_loop(name: &'static str, mut frame: impl FnMut() + 'static) -> LoopHandle {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let state = LoopState::new();

    let tick_clone = tick.clone();
    let state_tick = state.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !state_tick.begin_frame() {
            return;
        }
        frame();
        request_frame(&tick_clone, &state_tick);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &state);
    log::info!("[loop] {} started", name);
    LoopHandle { name, state }
}
