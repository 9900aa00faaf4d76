//! Cauldron TUI - terminal form for effect weights.
//!
//! Provides the interactive form around `cauldron_core::SliderPanel`:
//! - Diploma count input (commits on Enter or when focus leaves it)
//! - Bounds sliders for the optimizer settings
//! - One weight slider per active effect
//! - Live view of the hidden field the weights are submitted through

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::{AppState, Focus, StatusLevel};
pub use input::handle_key;
pub use theme::Theme;
