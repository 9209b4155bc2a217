//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Page layout with header, body, footer and optional log panel
//! - Theme management
//! - Widget helpers (spinner, styling)
//! - Page rendering (home, about, apply) and the alert modal

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::Theme;
