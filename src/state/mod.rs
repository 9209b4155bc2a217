//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that owns the router, the form and UI flags
//! - Page navigation and the fade transition router
//! - Application form data, validation and submission lifecycle
//! - State error handling

mod error;
mod form;
mod navigation;
mod router;

pub use form::{ApplicationForm, FormCursor, FormField, FormPhase};
pub use navigation::Page;

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
