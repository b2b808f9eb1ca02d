//! Increase/decrease buttons with boundary disabling and advisory tooltips.

use measure_types::{PERCENT_MAX, Unit};

use super::InputEffect;

pub const DEFAULT_DECREASE_TOOLTIP: &str = "Value must greater than 0";
pub const DEFAULT_INCREASE_TOOLTIP: &str = "Value must smaller than 100";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepDirection {
    Decrease,
    Increase,
}

impl StepDirection {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Decrease => "−",
            Self::Increase => "+",
        }
    }

    /// Whether a button stepping in this direction is disabled at `value`.
    ///
    /// Zero is the floor for both units; only percent has a ceiling.
    pub fn is_disabled(self, value: f64, unit: Unit) -> bool {
        match self {
            Self::Decrease => value <= 0.0,
            Self::Increase => unit == Unit::Percent && value >= PERCENT_MAX,
        }
    }

    /// The value one step away from `value`, kept inside the unit's range.
    pub fn next_value(self, value: f64, unit: Unit) -> f64 {
        match (self, unit) {
            (Self::Decrease, _) => (value - 1.0).max(0.0),
            (Self::Increase, Unit::Percent) => (value + 1.0).min(PERCENT_MAX),
            (Self::Increase, Unit::Pixel) => value + 1.0,
        }
    }
}

/// One step button and its local tooltip state.
#[derive(Clone, Debug)]
pub struct StepButton {
    direction: StepDirection,
    tooltip: String,
    hovered: bool,
    tooltip_open: bool,
}

impl StepButton {
    pub fn new(direction: StepDirection) -> Self {
        let tooltip = match direction {
            StepDirection::Decrease => DEFAULT_DECREASE_TOOLTIP,
            StepDirection::Increase => DEFAULT_INCREASE_TOOLTIP,
        };
        Self {
            direction,
            tooltip: tooltip.to_string(),
            hovered: false,
            tooltip_open: false,
        }
    }

    pub fn direction(&self) -> StepDirection {
        self.direction
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = tooltip.into();
    }

    pub fn is_disabled(&self, value: f64, unit: Unit) -> bool {
        self.direction.is_disabled(value, unit)
    }

    /// The value write for a press, or `None` while disabled.
    pub fn activate(&self, value: f64, unit: Unit) -> Option<InputEffect> {
        if self.is_disabled(value, unit) {
            return None;
        }
        Some(InputEffect::SetValue(self.direction.next_value(value, unit)))
    }

    /// Tracks pointer presence. The tooltip opens only when the pointer
    /// enters a disabled button and closes when it leaves.
    pub fn set_hovered(&mut self, hovered: bool, disabled: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        self.tooltip_open = hovered && disabled;
        true
    }

    /// Tooltip text to show, if any.
    pub fn visible_tooltip(&self, value: f64, unit: Unit) -> Option<&str> {
        (self.tooltip_open && self.is_disabled(value, unit)).then_some(self.tooltip.as_str())
    }
}
