//! # Measure TUI Library
//!
//! A numeric input widget with interchangeable percent and pixel units for
//! Ratatui applications, plus the example page that hosts it.
//!
//! ## Key Features
//!
//! - Unit toggle that saturates percentages at 100 when switching units
//! - Step buttons disabled at the unit's bounds, with advisory tooltips
//! - Text field that stages edits and resolves them on commit
//! - Change observer fired once per committed change
//!
//! ## Architecture
//!
//! [`UnitInputState`] owns the value, the unit, the shared hover/focus
//! flags and each sub-element's local state. [`UnitInputComponent`] maps
//! `crossterm` events onto the state and renders it. Hosts keep the state,
//! hand events to the component and read values through the observer.
//!
//! ```no_run
//! use measure_tui::{UnitInputState, Unit};
//!
//! let state = UnitInputState::new(50.0, Unit::Percent)
//!     .with_on_change(|value, unit| println!("{value}{unit}"));
//! ```

mod app;
mod ui;

use anyhow::Result;

pub use app::PageOptions;
pub use measure_types::{Unit, UnitValue};
pub use ui::components::unit_input::{
    Capability, ChangeObserver, FieldPhase, FieldState, InputEffect, StepButton, StepDirection, UiState, UnitInputComponent, UnitInputState,
    UnitToggle, ValueState,
};
pub use ui::theme::{DraculaTheme, NordTheme, Theme, load as load_theme};

/// Runs the example page until the user quits.
///
/// # Returns
///
/// The last value the page received from the widget (or the initial value
/// when nothing changed).
///
/// # Errors
///
/// Terminal setup failures (raw mode, alternate screen) and I/O errors while
/// drawing.
pub async fn run(options: PageOptions) -> Result<UnitValue> {
    ui::runtime::run_app(options).await
}
