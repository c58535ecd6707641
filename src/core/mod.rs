pub mod config;
pub mod constants;
pub mod damping;
pub mod easing;
pub mod engine;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod title;
pub mod tween;

pub use config::*;
pub use engine::*;
