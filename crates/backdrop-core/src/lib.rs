pub mod color;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod link;
pub mod particles;
pub mod scene;
pub mod surface;
pub mod viewport;

pub use color::Color;
pub use config::*;
pub use cursor::CursorFollower;
pub use link::{Falloff, LinkRule};
pub use scene::*;
pub use surface::*;
pub use viewport::Viewport;
