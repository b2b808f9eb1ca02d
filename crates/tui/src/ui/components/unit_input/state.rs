use measure_types::{Unit, UnitValue};
use tracing::{debug, trace};

use super::{
    Capability, InputEffect,
    field::FieldState,
    step_buttons::{StepButton, StepDirection},
    ui_state::UiState,
    unit_toggle::UnitToggle,
    value_state::ValueState,
};

/// Root state of a unit input: owns the value state, the shared UI flags
/// and every sub-element's local state.
///
/// Sub-elements never write the value directly. They return
/// [`InputEffect`]s which [`UnitInputState::apply`] funnels through
/// `set_value` / `set_unit`, so every committed change reaches the
/// observer exactly once.
#[derive(Debug)]
pub struct UnitInputState {
    value: ValueState,
    ui: UiState,
    field: FieldState,
    decrease: StepButton,
    increase: StepButton,
    toggle: UnitToggle,
    capability: Capability,
}

impl Default for UnitInputState {
    fn default() -> Self {
        Self::new(0.0, Unit::default())
    }
}

impl UnitInputState {
    /// Editable input starting at `value` in `unit`.
    pub fn new(value: f64, unit: Unit) -> Self {
        Self::with_capability(value, unit, Capability::Editable)
    }

    /// Input that renders the value but accepts no changes.
    pub fn display_only(value: f64, unit: Unit) -> Self {
        Self::with_capability(value, unit, Capability::DisplayOnly)
    }

    fn with_capability(value: f64, unit: Unit, capability: Capability) -> Self {
        let value = ValueState::new(value, unit);
        let field = FieldState::new(value.value());
        Self {
            value,
            ui: UiState::default(),
            field,
            decrease: StepButton::new(StepDirection::Decrease),
            increase: StepButton::new(StepDirection::Increase),
            toggle: UnitToggle::default(),
            capability,
        }
    }

    pub fn with_on_change(mut self, on_change: impl FnMut(f64, Unit) + 'static) -> Self {
        self.value.set_observer(Box::new(on_change));
        self
    }

    pub fn with_decrease_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.decrease.set_tooltip(tooltip);
        self
    }

    pub fn with_increase_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.increase.set_tooltip(tooltip);
        self
    }

    pub fn with_unit_toggle(mut self, shown: bool) -> Self {
        self.toggle.set_shown(shown);
        self
    }

    // ----- Getters -----
    pub fn value(&self) -> f64 {
        self.value.value()
    }
    pub fn unit(&self) -> Unit {
        self.value.unit()
    }
    pub fn snapshot(&self) -> UnitValue {
        self.value.snapshot()
    }
    pub fn last_valid(&self) -> f64 {
        self.value.last_valid()
    }
    pub fn ui(&self) -> UiState {
        self.ui
    }
    pub fn field(&self) -> &FieldState {
        &self.field
    }
    pub fn toggle(&self) -> UnitToggle {
        self.toggle
    }
    pub fn capability(&self) -> Capability {
        self.capability
    }
    pub fn is_editable(&self) -> bool {
        self.capability == Capability::Editable
    }
    pub fn button(&self, direction: StepDirection) -> &StepButton {
        match direction {
            StepDirection::Decrease => &self.decrease,
            StepDirection::Increase => &self.increase,
        }
    }
    pub fn is_step_disabled(&self, direction: StepDirection) -> bool {
        direction.is_disabled(self.value(), self.unit())
    }
    pub fn visible_tooltip(&self, direction: StepDirection) -> Option<&str> {
        self.button(direction).visible_tooltip(self.value(), self.unit())
    }

    // ----- Value operations -----

    /// Applies a requested change. Returns `false` when the input is
    /// display-only and the request was dropped.
    ///
    /// When the committed value or unit actually changed, the field's
    /// staged text is resynchronized.
    pub fn apply(&mut self, effect: InputEffect) -> bool {
        if self.capability == Capability::DisplayOnly {
            trace!(?effect, "display-only unit input dropped change");
            return false;
        }
        let before = self.value.snapshot();
        let after = match effect {
            InputEffect::SetValue(value) => self.value.set_value(value),
            InputEffect::SetUnit(unit) => self.value.set_unit(unit),
        };
        debug!(?effect, %before, %after, "unit input change applied");
        if after != before {
            self.field.sync(after.value);
        }
        true
    }

    pub fn set_value(&mut self, value: f64) -> bool {
        self.apply(InputEffect::SetValue(value))
    }

    pub fn set_unit(&mut self, unit: Unit) -> bool {
        self.apply(InputEffect::SetUnit(unit))
    }

    /// Presses a step button; disabled buttons do nothing.
    pub fn step(&mut self, direction: StepDirection) -> bool {
        match self.button(direction).activate(self.value(), self.unit()) {
            Some(effect) => self.apply(effect),
            None => false,
        }
    }

    pub fn select_unit(&mut self, target: Unit) -> bool {
        let effect = self.toggle.select(target);
        self.apply(effect)
    }

    pub fn flip_unit(&mut self) -> bool {
        let effect = self.toggle.flip(self.unit());
        self.apply(effect)
    }

    // ----- Field operations -----

    /// Focuses the field for editing. Display-only inputs cannot be focused.
    pub fn focus_field(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.field.move_end();
        self.ui.set_focused(true)
    }

    /// Commits the staged text and clears focus.
    pub fn commit_field(&mut self) -> bool {
        if !self.ui.focused() {
            return false;
        }
        let effect = self.field.commit(self.unit(), self.last_valid());
        self.apply(effect);
        self.ui.set_focused(false);
        true
    }

    /// Leaving the field commits it.
    pub fn blur_field(&mut self) -> bool {
        self.commit_field()
    }

    /// Edits are ignored unless the field is focused.
    pub fn edit_field(&mut self, edit: impl FnOnce(&mut FieldState)) -> bool {
        if !self.ui.focused() {
            return false;
        }
        edit(&mut self.field);
        true
    }

    // ----- Pointer tracking -----

    pub fn set_field_hovered(&mut self, hovered: bool) -> bool {
        self.ui.set_hovered(hovered)
    }

    pub fn set_button_hovered(&mut self, direction: StepDirection, hovered: bool) -> bool {
        let disabled = self.is_step_disabled(direction);
        match direction {
            StepDirection::Decrease => self.decrease.set_hovered(hovered, disabled),
            StepDirection::Increase => self.increase.set_hovered(hovered, disabled),
        }
    }
}
