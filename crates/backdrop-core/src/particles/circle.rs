use super::Particle;
use crate::color::Color;
use crate::config::CircleConfig;
use crate::constants::{CIRCLE_LIGHTNESS, CIRCLE_SATURATION};
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// A stationary circle that slowly grows and is respawned once it outlives its lifespan.
#[derive(Clone, Debug)]
pub struct Circle {
    pub position: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Ticks since (re)spawn.
    pub age: u32,
    /// Ticks this circle lives; always positive.
    pub lifespan: f32,
}

impl Particle for Circle {
    type Config = CircleConfig;

    fn spawn(config: &CircleConfig, viewport: Viewport, rng: &mut StdRng) -> Self {
        let hue = config.hue_min + rng.gen::<f32>() * config.hue_span;
        let alpha = config.alpha_min + rng.gen::<f32>() * config.alpha_span;
        Self {
            position: viewport.random_point(rng),
            radius: config.radius_min + rng.gen::<f32>() * config.radius_span,
            color: Color::hsla(hue, CIRCLE_SATURATION, CIRCLE_LIGHTNESS, alpha),
            age: 0,
            lifespan: config.lifespan_min + rng.gen::<f32>() * config.lifespan_span,
        }
    }

    fn update(&mut self, config: &CircleConfig, viewport: Viewport, rng: &mut StdRng) {
        self.age += 1;
        self.radius += config.growth_per_tick;
        if self.age as f32 > self.lifespan {
            *self = Self::spawn(config, viewport, rng);
        }
    }

    fn confine(&mut self, viewport: Viewport) {
        self.position = viewport.wrap(self.position);
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn draw(&self, _config: &CircleConfig, surface: &mut dyn Surface) {
        surface.fill_circle(self.position, self.radius, self.color);
    }
}
