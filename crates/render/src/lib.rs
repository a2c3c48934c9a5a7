//! Rendering Adapter: renderer-agnostic interface over the world.
//!
//! # Invariants
//! - Renderer cannot mutate world truth directly.
//! - The player view never shows a hazard or the gold; only the reveal view does.

mod messages;
mod renderer;

pub use messages::{error_message, signal_message};
pub use renderer::{RenderView, Renderer, TextRenderer};
