use super::Particle;
use crate::config::NetworkConfig;
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Constellation point; wraps around the viewport edges.
#[derive(Clone, Debug)]
pub struct NetworkPoint {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl NetworkPoint {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }
}

impl Particle for NetworkPoint {
    type Config = NetworkConfig;

    fn spawn(config: &NetworkConfig, viewport: Viewport, rng: &mut StdRng) -> Self {
        let half = config.speed_span / 2.0;
        let vx = rng.gen::<f32>() * config.speed_span - half;
        let vy = rng.gen::<f32>() * config.speed_span - half;
        Self {
            position: viewport.random_point(rng),
            velocity: Vec2::new(vx, vy),
            radius: config.radius_min + rng.gen::<f32>() * config.radius_span,
        }
    }

    fn update(&mut self, _config: &NetworkConfig, viewport: Viewport, _rng: &mut StdRng) {
        self.position = viewport.wrap(self.position + self.velocity);
    }

    fn confine(&mut self, viewport: Viewport) {
        self.position = viewport.wrap(self.position);
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn draw(&self, config: &NetworkConfig, surface: &mut dyn Surface) {
        surface.fill_circle(self.position, self.radius, config.particle_color);
    }
}
