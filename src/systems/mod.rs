//! Application systems
//!
//! Window and GPU state kept out of main.rs.

mod render;
mod window;

pub use render::RenderSystem;
pub use window::{format_error_title, format_title, WindowError, WindowSystem};
