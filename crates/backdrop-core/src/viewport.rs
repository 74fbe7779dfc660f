use glam::Vec2;
use rand::Rng;

/// Current canvas backing-store size in CSS pixels, never smaller than 1x1.
///
/// Also owns the two boundary policies: wrap and bounce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Dimensions are clamped to at least one pixel so every range below is non-empty.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }

    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            rng.gen_range(0.0..self.width),
            rng.gen_range(0.0..self.height),
        )
    }

    /// Toroidal wrap: a point leaving one edge re-enters from the opposite one.
    pub fn wrap(&self, p: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(p.x, self.width), wrap_axis(p.y, self.height))
    }

    /// Reflect a point that crossed an edge back inside and point the
    /// corresponding velocity component inward.
    pub fn bounce(&self, p: Vec2, v: Vec2) -> (Vec2, Vec2) {
        let (x, vx) = bounce_axis(p.x, v.x, self.width);
        let (y, vy) = bounce_axis(p.y, v.y, self.height);
        (Vec2::new(x, y), Vec2::new(vx, vy))
    }
}

fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(1.0)
    } else {
        1.0
    }
}

/// Largest representable value strictly below a positive `limit`; 0 otherwise.
#[inline]
fn just_below(limit: f32) -> f32 {
    if limit > 0.0 && limit.is_finite() {
        f32::from_bits(limit.to_bits() - 1)
    } else {
        0.0
    }
}

#[inline]
fn wrap_axis(x: f32, extent: f32) -> f32 {
    let r = x.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if r >= extent || !r.is_finite() {
        0.0
    } else {
        r
    }
}

#[inline]
fn bounce_axis(x: f32, v: f32, extent: f32) -> (f32, f32) {
    if x < 0.0 {
        ((-x).min(just_below(extent)), v.abs())
    } else if x >= extent {
        let reflected = (2.0 * extent - x).clamp(0.0, just_below(extent));
        (reflected, -v.abs())
    } else {
        (x, v)
    }
}
