//! Application state for the example page.
//!
//! The page hosts one unit input and records every value the input reports
//! through its change observer, the way a host application would keep its
//! own copy of the widget's value.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use measure_types::{Unit, UnitValue};
use tracing::info;

use crate::ui::{components::UnitInputState, theme::Theme};

/// Number of reported changes the page keeps for display.
const CHANGE_LOG_CAPACITY: usize = 8;

/// Side effects components report back to the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Leave the event loop.
    Quit,
}

/// Caller-supplied configuration for the example page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub value: f64,
    pub unit: Unit,
    /// Theme identifier; `None` selects the default palette.
    pub theme: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            value: 50.0,
            unit: Unit::Percent,
            theme: None,
        }
    }
}

/// Values reported by the widget's change observer, newest last.
///
/// Shared between the observer closure and the page; everything runs on
/// the event loop thread.
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    entries: Rc<RefCell<VecDeque<UnitValue>>>,
}

impl ChangeLog {
    pub fn record(&self, value: f64, unit: Unit) {
        let change = UnitValue::new(value, unit);
        info!(%change, "unit input reported change");
        let mut entries = self.entries.borrow_mut();
        if entries.len() == CHANGE_LOG_CAPACITY {
            entries.pop_front();
        }
        entries.push_back(change);
    }

    pub fn entries(&self) -> Vec<UnitValue> {
        self.entries.borrow().iter().copied().collect()
    }

    pub fn latest(&self) -> Option<UnitValue> {
        self.entries.borrow().back().copied()
    }
}

pub struct App {
    pub theme: Box<dyn Theme>,
    pub unit_input: UnitInputState,
    pub changes: ChangeLog,
    /// The value the page was opened with.
    pub initial: UnitValue,
}

impl App {
    pub fn new(options: &PageOptions, theme: Box<dyn Theme>) -> Self {
        let changes = ChangeLog::default();
        let observer = changes.clone();
        let unit_input = UnitInputState::new(options.value, options.unit).with_on_change(move |value, unit| observer.record(value, unit));
        let initial = unit_input.snapshot();
        Self {
            theme,
            unit_input,
            changes,
            initial,
        }
    }

    /// The host's view of the value: the latest report, or the initial value.
    pub fn current(&self) -> UnitValue {
        self.changes.latest().unwrap_or(self.initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{components::unit_input::StepDirection, theme::DraculaTheme};

    #[test]
    fn observer_feeds_change_log() {
        let mut app = App::new(&PageOptions::default(), Box::new(DraculaTheme::new()));
        assert_eq!(app.current(), UnitValue::new(50.0, Unit::Percent));

        app.unit_input.step(StepDirection::Increase);
        app.unit_input.select_unit(Unit::Pixel);
        assert_eq!(
            app.changes.entries(),
            vec![UnitValue::new(51.0, Unit::Percent), UnitValue::new(51.0, Unit::Pixel)]
        );
        assert_eq!(app.current(), UnitValue::new(51.0, Unit::Pixel));
    }

    #[test]
    fn change_log_is_bounded() {
        let log = ChangeLog::default();
        for step in 0..20 {
            log.record(f64::from(step), Unit::Pixel);
        }
        let entries = log.entries();
        assert_eq!(entries.len(), CHANGE_LOG_CAPACITY);
        assert_eq!(entries.first().map(|change| change.value), Some(12.0));
        assert_eq!(log.latest().map(|change| change.value), Some(19.0));
    }
}
