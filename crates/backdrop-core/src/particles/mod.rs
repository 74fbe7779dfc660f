mod circle;
mod dot;
mod network;

pub use circle::Circle;
pub use dot::Dot;
pub use network::NetworkPoint;

use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;

/// Behaviour shared by every animated entity.
pub trait Particle: Sized {
    type Config;

    fn spawn(config: &Self::Config, viewport: Viewport, rng: &mut StdRng) -> Self;
    /// Advance one tick. Afterwards the position lies inside `viewport`.
    fn update(&mut self, config: &Self::Config, viewport: Viewport, rng: &mut StdRng);
    /// Bring the position back inside after the viewport shrank.
    fn confine(&mut self, viewport: Viewport);
    fn position(&self) -> Vec2;
    fn draw(&self, config: &Self::Config, surface: &mut dyn Surface);
}

/// Owns a pool of one particle variant together with its config and RNG.
///
/// The pool never grows or shrinks on its own; only [`Pool::respawn_all`]
/// changes its size.
pub struct Pool<P: Particle> {
    particles: Vec<P>,
    config: P::Config,
    rng: StdRng,
}

impl<P: Particle> Pool<P> {
    pub fn new(config: P::Config, count: usize, viewport: Viewport, rng: StdRng) -> Self {
        let mut pool = Self {
            particles: Vec::with_capacity(count),
            config,
            rng,
        };
        pool.respawn_all(count, viewport);
        pool
    }

    /// Build a pool around already placed particles.
    pub fn from_particles(config: P::Config, particles: Vec<P>, rng: StdRng) -> Self {
        Self {
            particles,
            config,
            rng,
        }
    }

    pub fn respawn_all(&mut self, count: usize, viewport: Viewport) {
        self.particles.clear();
        for _ in 0..count {
            let p = P::spawn(&self.config, viewport, &mut self.rng);
            self.particles.push(p);
        }
    }

    pub fn update(&mut self, viewport: Viewport) {
        for p in &mut self.particles {
            p.update(&self.config, viewport, &mut self.rng);
        }
    }

    pub fn confine(&mut self, viewport: Viewport) {
        for p in &mut self.particles {
            p.confine(viewport);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for p in &self.particles {
            p.draw(&self.config, surface);
        }
    }

    pub fn positions(&self) -> Vec<Vec2> {
        self.particles.iter().map(Particle::position).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn config(&self) -> &P::Config {
        &self.config
    }
}
