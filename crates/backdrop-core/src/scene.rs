use crate::config::{AnimationKind, BackdropConfig, ConfigError, DotConfig, NetworkConfig};
use crate::constants::POINTER_OFFSCREEN;
use crate::link::{Falloff, LinkRule};
use crate::particles::{Circle, Dot, NetworkPoint, Pool};
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;

/// One animated background, chosen once at startup.
pub trait Backdrop {
    fn kind(&self) -> AnimationKind;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn resize(&mut self, viewport: Viewport);
    /// Advance every entity by one tick.
    fn step(&mut self, viewport: Viewport);
    fn render(&self, pointer: Vec2, surface: &mut dyn Surface);
}

pub struct CircleBackdrop {
    pool: Pool<Circle>,
}

impl CircleBackdrop {
    pub fn new(pool: Pool<Circle>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool<Circle> {
        &self.pool
    }
}

impl Backdrop for CircleBackdrop {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Circles
    }

    fn len(&self) -> usize {
        self.pool.len()
    }

    fn resize(&mut self, viewport: Viewport) {
        self.pool.confine(viewport);
    }

    fn step(&mut self, viewport: Viewport) {
        self.pool.update(viewport);
    }

    fn render(&self, _pointer: Vec2, surface: &mut dyn Surface) {
        self.pool.draw(surface);
    }
}

pub struct DotBackdrop {
    pool: Pool<Dot>,
    links: LinkRule,
}

impl DotBackdrop {
    pub fn new(pool: Pool<Dot>) -> Self {
        let links = dot_links(pool.config());
        Self { pool, links }
    }

    pub fn pool(&self) -> &Pool<Dot> {
        &self.pool
    }
}

fn dot_links(config: &DotConfig) -> LinkRule {
    LinkRule {
        radius: config.link_radius,
        color: config.link_color,
        falloff: Falloff::Opacity,
    }
}

impl Backdrop for DotBackdrop {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Dots
    }

    fn len(&self) -> usize {
        self.pool.len()
    }

    fn resize(&mut self, viewport: Viewport) {
        self.pool.confine(viewport);
    }

    fn step(&mut self, viewport: Viewport) {
        self.pool.update(viewport);
    }

    fn render(&self, _pointer: Vec2, surface: &mut dyn Surface) {
        self.pool.draw(surface);
        self.links.link_pairs(&self.pool.positions(), surface);
    }
}

pub struct NetworkBackdrop {
    pool: Pool<NetworkPoint>,
    links: LinkRule,
    pointer_links: LinkRule,
}

impl NetworkBackdrop {
    pub fn new(pool: Pool<NetworkPoint>) -> Self {
        let (links, pointer_links) = network_links(pool.config());
        Self {
            pool,
            links,
            pointer_links,
        }
    }

    pub fn pool(&self) -> &Pool<NetworkPoint> {
        &self.pool
    }
}

fn network_links(config: &NetworkConfig) -> (LinkRule, LinkRule) {
    (
        LinkRule {
            radius: config.link_radius,
            color: config.line_color,
            falloff: Falloff::Width,
        },
        LinkRule {
            radius: config.pointer_link_radius(),
            color: config.pointer_line_color,
            falloff: Falloff::Width,
        },
    )
}

impl Backdrop for NetworkBackdrop {
    fn kind(&self) -> AnimationKind {
        AnimationKind::Network
    }

    fn len(&self) -> usize {
        self.pool.len()
    }

    /// The point count follows the viewport width, so the pool is rebuilt.
    fn resize(&mut self, viewport: Viewport) {
        let count = self.pool.config().count_for_width(viewport.width());
        self.pool.respawn_all(count, viewport);
        log::debug!("[scene] network rebuilt with {} points", count);
    }

    fn step(&mut self, viewport: Viewport) {
        self.pool.update(viewport);
    }

    fn render(&self, pointer: Vec2, surface: &mut dyn Surface) {
        let positions = self.pool.positions();
        self.pool.draw(surface);
        self.links.link_pairs(&positions, surface);
        self.pointer_links.link_to(&positions, pointer, surface);
    }
}

/// Everything one page animates: the viewport, the pointer and the backdrop.
pub struct Scene {
    viewport: Viewport,
    pointer: Vec2,
    backdrop: Box<dyn Backdrop>,
}

impl Scene {
    pub fn new(
        kind: AnimationKind,
        viewport: Viewport,
        config: &BackdropConfig,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let backdrop: Box<dyn Backdrop> = match kind {
            AnimationKind::Circles => Box::new(CircleBackdrop::new(Pool::new(
                config.circles.clone(),
                config.circles.count,
                viewport,
                rng,
            ))),
            AnimationKind::Dots => Box::new(DotBackdrop::new(Pool::new(
                config.dots.clone(),
                config.dots.count,
                viewport,
                rng,
            ))),
            AnimationKind::Network => {
                let count = config.network.count_for_width(viewport.width());
                Box::new(NetworkBackdrop::new(Pool::new(
                    config.network.clone(),
                    count,
                    viewport,
                    rng,
                )))
            }
        };
        log::info!(
            "[scene] {} backdrop with {} particles at {}x{}",
            kind.name(),
            backdrop.len(),
            viewport.width(),
            viewport.height()
        );
        Ok(Self::with_backdrop(viewport, backdrop))
    }

    pub fn with_backdrop(viewport: Viewport, backdrop: Box<dyn Backdrop>) -> Self {
        Self {
            viewport,
            pointer: Vec2::from(POINTER_OFFSCREEN),
            backdrop,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn backdrop(&self) -> &dyn Backdrop {
        self.backdrop.as_ref()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.backdrop.resize(viewport);
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// One tick: update, clear, draw.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        self.backdrop.step(self.viewport);
        surface.clear(self.viewport);
        self.backdrop.render(self.pointer, surface);
    }
}
