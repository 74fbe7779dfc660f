use glam::Vec2;

/// Eases a rendered position toward the last pointer position.
///
/// Each [`step`](Self::step) covers a fixed fraction of the remaining
/// distance, so the position approaches the target geometrically and never
/// passes it.
#[derive(Clone, Copy, Debug)]
pub struct CursorFollower {
    target: Vec2,
    position: Vec2,
    ease: f32,
}

impl CursorFollower {
    pub fn new(ease: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            position: Vec2::ZERO,
            ease: ease.clamp(f32::EPSILON, 1.0),
        }
    }

    /// Record the raw pointer position; no smoothing here.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn step(&mut self) -> Vec2 {
        self.position += (self.target - self.position) * self.ease;
        self.position
    }

    /// `left`/`top` style values for the current position.
    pub fn css_offset(&self) -> (String, String) {
        (
            format!("{}px", self.position.x),
            format!("{}px", self.position.y),
        )
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(crate::constants::CURSOR_EASE)
    }
}
