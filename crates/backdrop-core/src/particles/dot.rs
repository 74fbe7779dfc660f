use super::Particle;
use crate::color::Color;
use crate::config::DotConfig;
use crate::constants::ACCENT_RGB;
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Drifting dot that bounces off the viewport edges.
#[derive(Clone, Debug)]
pub struct Dot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
}

impl Particle for Dot {
    type Config = DotConfig;

    fn spawn(config: &DotConfig, viewport: Viewport, rng: &mut StdRng) -> Self {
        let vx = (rng.gen::<f32>() - 0.5) * config.speed_span;
        let vy = (rng.gen::<f32>() - 0.5) * config.speed_span;
        Self {
            position: viewport.random_point(rng),
            velocity: Vec2::new(vx, vy),
            color: Color::rgba(ACCENT_RGB, rng.gen::<f32>() * config.alpha_max),
        }
    }

    fn update(&mut self, _config: &DotConfig, viewport: Viewport, _rng: &mut StdRng) {
        let (p, v) = viewport.bounce(self.position + self.velocity, self.velocity);
        self.position = p;
        self.velocity = v;
    }

    fn confine(&mut self, viewport: Viewport) {
        let (p, v) = viewport.bounce(self.position, self.velocity);
        self.position = p;
        self.velocity = v;
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn draw(&self, config: &DotConfig, surface: &mut dyn Surface) {
        surface.fill_circle(self.position, config.radius, self.color);
    }
}
