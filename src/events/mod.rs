//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: delivering the application form
//! - Terminal events: key presses and the tick that drives transitions

pub mod network;
pub mod terminal;
