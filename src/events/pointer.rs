use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::EVENT_POINTER_MOVE;
use crate::dom;

/// Viewport coordinates of a mouse event.
#[inline]
pub fn client_position(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Report every pointer move on the document as raw client coordinates.
pub fn wire_pointer_move(document: &web::Document, mut on_move: impl FnMut(Vec2) + 'static) {
    dom::add_listener(document, EVENT_POINTER_MOVE, move |ev: web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            on_move(client_position(mouse));
        }
    });
}
