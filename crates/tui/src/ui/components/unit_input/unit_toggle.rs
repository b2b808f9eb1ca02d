use measure_types::Unit;

use super::InputEffect;

/// Two-way unit switch. Selecting a target always requests the unit
/// change, even when the target is already active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitToggle {
    shown: bool,
}

impl Default for UnitToggle {
    fn default() -> Self {
        Self { shown: true }
    }
}

impl UnitToggle {
    /// Targets in display order.
    pub const TARGETS: [Unit; 2] = [Unit::Percent, Unit::Pixel];

    pub fn shown(&self) -> bool {
        self.shown
    }

    pub fn set_shown(&mut self, shown: bool) {
        self.shown = shown;
    }

    pub fn select(&self, target: Unit) -> InputEffect {
        InputEffect::SetUnit(target)
    }

    pub fn flip(&self, current: Unit) -> InputEffect {
        InputEffect::SetUnit(current.toggled())
    }
}
