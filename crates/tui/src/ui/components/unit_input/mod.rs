//! Numeric input with interchangeable percent and pixel units.
//!
//! The widget is composed of an optional unit toggle, a decrease button, a
//! text field and an increase button. [`UnitInputState`] owns everything
//! logical; [`UnitInputComponent`] maps terminal input onto it and renders
//! it.

pub mod field;
pub mod state;
pub mod step_buttons;
pub mod ui_state;
pub mod unit_input_component;
pub mod unit_toggle;
pub mod value_state;

use measure_types::Unit;

pub use field::{FieldPhase, FieldState};
pub use state::UnitInputState;
pub use step_buttons::{StepButton, StepDirection};
pub use ui_state::UiState;
pub use unit_input_component::UnitInputComponent;
pub use unit_toggle::UnitToggle;
pub use value_state::{ChangeObserver, ValueState};

/// A value write requested by a sub-element and applied by the root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEffect {
    SetValue(f64),
    SetUnit(Unit),
}

/// Whether the root accepts value writes. Fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Capability {
    #[default]
    Editable,
    DisplayOnly,
}
