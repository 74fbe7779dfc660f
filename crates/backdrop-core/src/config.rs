use crate::color::Color;
use crate::constants::*;
use thiserror::Error;

/// Which backdrop to run, read once from the page at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationKind {
    #[default]
    Circles,
    Dots,
    Network,
}

impl AnimationKind {
    /// Absent or unrecognised selectors fall back to circles.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("dots") => AnimationKind::Dots,
            Some(v)
                if v.eq_ignore_ascii_case("network") || v.eq_ignore_ascii_case("constellation") =>
            {
                AnimationKind::Network
            }
            _ => AnimationKind::Circles,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimationKind::Circles => "circles",
            AnimationKind::Dots => "dots",
            AnimationKind::Network => "network",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must stay within [0, 1], spans {min}..={max}")]
    AlphaOutOfRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{field} must not be zero")]
    EmptyPool { field: &'static str },
    #[error("cursor ease must be in (0, 1], got {0}")]
    EaseOutOfRange(f32),
}

#[derive(Clone, Debug)]
pub struct CircleConfig {
    pub count: usize,
    pub radius_min: f32,
    pub radius_span: f32,
    pub growth_per_tick: f32,
    pub lifespan_min: f32,
    pub lifespan_span: f32,
    pub hue_min: f32,
    pub hue_span: f32,
    pub alpha_min: f32,
    pub alpha_span: f32,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            count: CIRCLE_COUNT,
            radius_min: CIRCLE_RADIUS_MIN,
            radius_span: CIRCLE_RADIUS_SPAN,
            growth_per_tick: CIRCLE_GROWTH_PER_TICK,
            lifespan_min: CIRCLE_LIFESPAN_MIN,
            lifespan_span: CIRCLE_LIFESPAN_SPAN,
            hue_min: CIRCLE_HUE_MIN,
            hue_span: CIRCLE_HUE_SPAN,
            alpha_min: CIRCLE_ALPHA_MIN,
            alpha_span: CIRCLE_ALPHA_SPAN,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DotConfig {
    pub count: usize,
    pub radius: f32,
    pub speed_span: f32,
    pub alpha_max: f32,
    pub link_radius: f32,
    pub link_color: Color,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            count: DOT_COUNT,
            radius: DOT_RADIUS,
            speed_span: DOT_SPEED_SPAN,
            alpha_max: DOT_ALPHA_MAX,
            link_radius: DOT_LINK_RADIUS,
            link_color: Color::rgba(ACCENT_RGB, 1.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NetworkConfig {
    pub particle_color: Color,
    pub line_color: Color,
    pub pointer_line_color: Color,
    pub density_px: f32,
    pub max_points: usize,
    pub speed_span: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub link_radius: f32,
    pub pointer_link_bonus: f32,
}

impl NetworkConfig {
    /// Responsive pool size: one point per `density_px` of width, capped.
    pub fn count_for_width(&self, width: f32) -> usize {
        let n = (width / self.density_px).min(self.max_points as f32).ceil();
        if n.is_finite() && n > 0.0 {
            n as usize
        } else {
            0
        }
    }

    pub fn pointer_link_radius(&self) -> f32 {
        self.link_radius + self.pointer_link_bonus
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            particle_color: Color::rgba(ACCENT_RGB, NETWORK_POINT_ALPHA),
            line_color: Color::rgba(ACCENT_RGB, NETWORK_LINK_ALPHA),
            pointer_line_color: Color::rgba(POINTER_LINK_RGB, NETWORK_POINTER_LINK_ALPHA),
            density_px: NETWORK_DENSITY_PX,
            max_points: NETWORK_MAX_POINTS,
            speed_span: NETWORK_SPEED_SPAN,
            radius_min: NETWORK_RADIUS_MIN,
            radius_span: NETWORK_RADIUS_SPAN,
            link_radius: NETWORK_LINK_RADIUS,
            pointer_link_bonus: NETWORK_POINTER_LINK_BONUS,
        }
    }
}

/// All tunables, defaulted from [`crate::constants`].
#[derive(Clone, Debug, Default)]
pub struct BackdropConfig {
    pub circles: CircleConfig,
    pub dots: DotConfig,
    pub network: NetworkConfig,
    pub cursor_ease: CursorEase,
}

#[derive(Clone, Copy, Debug)]
pub struct CursorEase(pub f32);

impl Default for CursorEase {
    fn default() -> Self {
        CursorEase(CURSOR_EASE)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn alpha_range(field: &'static str, min: f32, span: f32) -> Result<(), ConfigError> {
    let max = min + span;
    if span >= 0.0 && min >= 0.0 && max <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::AlphaOutOfRange { field, min, max })
    }
}

impl BackdropConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.circles.count == 0 {
            return Err(ConfigError::EmptyPool {
                field: "circles.count",
            });
        }
        positive("circles.radius_min", self.circles.radius_min)?;
        non_negative("circles.radius_span", self.circles.radius_span)?;
        non_negative("circles.growth_per_tick", self.circles.growth_per_tick)?;
        positive("circles.lifespan_min", self.circles.lifespan_min)?;
        non_negative("circles.lifespan_span", self.circles.lifespan_span)?;
        alpha_range(
            "circles.alpha",
            self.circles.alpha_min,
            self.circles.alpha_span,
        )?;
        if self.dots.count == 0 {
            return Err(ConfigError::EmptyPool { field: "dots.count" });
        }
        positive("dots.radius", self.dots.radius)?;
        non_negative("dots.speed_span", self.dots.speed_span)?;
        alpha_range("dots.alpha", 0.0, self.dots.alpha_max)?;
        positive("dots.link_radius", self.dots.link_radius)?;
        if self.network.max_points == 0 {
            return Err(ConfigError::EmptyPool {
                field: "network.max_points",
            });
        }
        positive("network.density_px", self.network.density_px)?;
        positive("network.radius_min", self.network.radius_min)?;
        non_negative("network.radius_span", self.network.radius_span)?;
        non_negative("network.speed_span", self.network.speed_span)?;
        positive("network.link_radius", self.network.link_radius)?;
        positive(
            "network.pointer_link_radius",
            self.network.pointer_link_radius(),
        )?;
        let ease = self.cursor_ease.0;
        if !(ease > 0.0 && ease <= 1.0) {
            return Err(ConfigError::EaseOutOfRange(ease));
        }
        Ok(())
    }
}
