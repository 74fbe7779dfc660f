use backdrop_core::CursorFollower;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CURSOR_CLASS;
use crate::events::pointer;
use crate::frame::{self, LoopHandle};

/// The `div.cursor-dot` element and the eased position it is drawn at.
pub struct CursorDot {
    element: web::HtmlElement,
    follower: CursorFollower,
}

impl CursorDot {
    /// Create the element and append it to `<body>`.
    pub fn mount(document: &web::Document, follower: CursorFollower) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let element = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        element.set_class_name(CURSOR_CLASS);
        body.append_child(&element)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { element, follower })
    }

    fn tick(&mut self) {
        self.follower.step();
        let (left, top) = self.follower.css_offset();
        let style = self.element.style();
        _ = style.set_property("left", &left);
        _ = style.set_property("top", &top);
    }
}

/// Mount the follower, track the pointer and ease toward it every frame.
pub fn init_cursor(document: &web::Document, follower: CursorFollower) -> anyhow::Result<LoopHandle> {
    let dot = Rc::new(RefCell::new(CursorDot::mount(document, follower)?));

    let dot_move = dot.clone();
    pointer::wire_pointer_move(document, move |p| {
        dot_move.borrow_mut().follower.set_target(p);
    });

    log::info!("[cursor] follower mounted");
    Ok(frame::start_loop("cursor", move || dot.borrow_mut().tick()))
}
