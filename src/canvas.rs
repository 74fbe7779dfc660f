use backdrop_core::{Color, Stroke, Surface, Viewport};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::FULL_TURN;

/// [`Surface`] over a 2D canvas context. Holds nothing but the context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width() as f64, viewport.height() as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            FULL_TURN,
        );
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&stroke.color.css());
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.stroke();
    }
}
