use crate::color::Color;
use crate::surface::{Stroke, Surface};
use glam::Vec2;

/// How link strength `1 - d/radius` shows up in the stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Falloff {
    /// Strength becomes the colour alpha; width stays 1.
    Opacity,
    /// Strength becomes the line width; colour is used as-is.
    Width,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkRule {
    pub radius: f32,
    pub color: Color,
    pub falloff: Falloff,
}

/// Linear falloff factor for two points, `None` at or beyond `radius`.
#[inline]
pub fn strength(a: Vec2, b: Vec2, radius: f32) -> Option<f32> {
    let d = a.distance(b);
    (d < radius).then(|| 1.0 - d / radius)
}

impl LinkRule {
    pub fn stroke(&self, a: Vec2, b: Vec2) -> Option<Stroke> {
        let s = strength(a, b, self.radius)?;
        Some(match self.falloff {
            Falloff::Opacity => Stroke {
                color: self.color.with_alpha(s),
                width: 1.0,
            },
            Falloff::Width => Stroke {
                color: self.color,
                width: s,
            },
        })
    }

    /// Draw one line per unordered pair closer than the radius. O(n²); pools are capped.
    pub fn link_pairs(&self, points: &[Vec2], surface: &mut dyn Surface) -> usize {
        let mut drawn = 0;
        for (i, &a) in points.iter().enumerate() {
            for &b in &points[i + 1..] {
                if let Some(stroke) = self.stroke(a, b) {
                    surface.stroke_line(a, b, stroke);
                    drawn += 1;
                }
            }
        }
        drawn
    }

    /// Draw a line from every point within range to `pointer`.
    pub fn link_to(&self, points: &[Vec2], pointer: Vec2, surface: &mut dyn Surface) -> usize {
        let mut drawn = 0;
        for &p in points {
            if let Some(stroke) = self.stroke(p, pointer) {
                surface.stroke_line(p, pointer, stroke);
                drawn += 1;
            }
        }
        drawn
    }
}
