//! Drawing seam between the simulation and whatever paints it.
//!
//! The web frontend implements [`Surface`] over a 2D canvas context;
//! [`RecordingSurface`] keeps the calls in memory for headless inspection.

use crate::color::Color;
use crate::viewport::Viewport;
use glam::Vec2;

/// Line style for a single link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

pub trait Surface {
    /// Erase the whole viewport.
    fn clear(&mut self, viewport: Viewport);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Viewport),
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.calls.iter().filter_map(|c| match *c {
            DrawCall::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Stroke)> + '_ {
        self.calls.iter().filter_map(|c| match *c {
            DrawCall::Line { from, to, stroke } => Some((from, to, stroke)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.calls.push(DrawCall::Clear(viewport));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.calls.push(DrawCall::Line { from, to, stroke });
    }
}
