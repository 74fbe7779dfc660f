/// DOM hooks the frontend looks for or creates.
///
/// Styling of these elements is left to the host page.
pub const CANVAS_ID: &str = "canvas";
pub const CURSOR_CLASS: &str = "cursor-dot";

// `<body data-animation="circles|dots|network">`
pub const ANIMATION_ATTRIBUTE: &str = "data-animation";

// Event names
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_POINTER_MOVE: &str = "mousemove";
pub const EVENT_DOM_READY: &str = "DOMContentLoaded";

// Full circle for CanvasRenderingContext2d::arc
pub const FULL_TURN: f64 = std::f64::consts::PI * 2.0;
