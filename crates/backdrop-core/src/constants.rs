// Tunables for the three backdrop variants and the cursor follower.

// Circles
pub const CIRCLE_COUNT: usize = 30;
pub const CIRCLE_RADIUS_MIN: f32 = 2.0;
pub const CIRCLE_RADIUS_SPAN: f32 = 10.0;
pub const CIRCLE_GROWTH_PER_TICK: f32 = 0.05;
pub const CIRCLE_LIFESPAN_MIN: f32 = 100.0; // ticks
pub const CIRCLE_LIFESPAN_SPAN: f32 = 200.0;
pub const CIRCLE_HUE_MIN: f32 = 200.0; // degrees, blue band
pub const CIRCLE_HUE_SPAN: f32 = 60.0;
pub const CIRCLE_SATURATION: f32 = 70.0; // percent
pub const CIRCLE_LIGHTNESS: f32 = 50.0; // percent
pub const CIRCLE_ALPHA_MIN: f32 = 0.1;
pub const CIRCLE_ALPHA_SPAN: f32 = 0.5;

// Dots
pub const DOT_COUNT: usize = 50;
pub const DOT_RADIUS: f32 = 2.0;
pub const DOT_SPEED_SPAN: f32 = 1.0; // each axis in [-span/2, span/2)
pub const DOT_ALPHA_MAX: f32 = 0.5;
pub const DOT_LINK_RADIUS: f32 = 150.0;

// Network
pub const NETWORK_DENSITY_PX: f32 = 15.0; // one point per this many px of width
pub const NETWORK_MAX_POINTS: usize = 100;
pub const NETWORK_SPEED_SPAN: f32 = 0.5;
pub const NETWORK_RADIUS_MIN: f32 = 1.0;
pub const NETWORK_RADIUS_SPAN: f32 = 2.0;
pub const NETWORK_LINK_RADIUS: f32 = 150.0;
pub const NETWORK_POINTER_LINK_BONUS: f32 = 50.0; // added to link radius for pointer links
pub const NETWORK_LINK_ALPHA: f32 = 0.15;
pub const NETWORK_POINT_ALPHA: f32 = 0.5;
pub const NETWORK_POINTER_LINK_ALPHA: f32 = 0.2;

// Shared palette (sky blue)
pub const ACCENT_RGB: [u8; 3] = [100, 200, 255];
pub const POINTER_LINK_RGB: [u8; 3] = [255, 255, 255];

// Pointer position before the first move event; far enough off-canvas that
// nothing can link to it.
pub const POINTER_OFFSCREEN: [f32; 2] = [-9999.0, -9999.0];

// Cursor follower: fraction of the remaining distance covered per tick
pub const CURSOR_EASE: f32 = 0.2;
