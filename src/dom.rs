use backdrop_core::{AnimationKind, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ANIMATION_ATTRIBUTE, CANVAS_ID};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size; falls back to 1x1 if the browser reports nothing usable.
pub fn viewport_size(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Viewport::new(w as f32, h as f32)
}

/// Match the canvas backing store to the window and return the new extents.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let window = web::window()?;
    let vp = viewport_size(&window);
    canvas.set_width(vp.width() as u32);
    canvas.set_height(vp.height() as u32);
    Some(vp)
}

/// The drawing surface, if the page has one.
pub fn find_canvas(document: &web::Document) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

pub fn animation_kind(document: &web::Document) -> AnimationKind {
    let attr = document
        .body()
        .and_then(|b| b.get_attribute(ANIMATION_ATTRIBUTE));
    AnimationKind::from_attribute(attr.as_deref())
}

/// Attach a listener for the lifetime of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}
