//! UI rendering module for the TUI application.
//!
//! This module provides the example page, the runtime event loop, the
//! components and the theme.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
