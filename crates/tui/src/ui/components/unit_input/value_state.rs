//! Authoritative value/unit state of a unit input.

use std::fmt;

use measure_types::{PERCENT_MAX, Unit, UnitValue};
use tracing::warn;

/// Observer invoked after every committed value or unit change.
pub type ChangeObserver = Box<dyn FnMut(f64, Unit)>;

/// Current value, current unit, and the most recent value that satisfied
/// the active unit's range.
///
/// The only mutations are [`ValueState::set_unit`] and
/// [`ValueState::set_value`]; each notifies the observer exactly once,
/// synchronously, with the post-mutation pair.
pub struct ValueState {
    value: f64,
    unit: Unit,
    last_valid: f64,
    on_change: Option<ChangeObserver>,
}

impl ValueState {
    /// Creates the state from caller-supplied initial values.
    ///
    /// Values outside the unit's range are normalized (NaN and negatives to
    /// 0, percentages above 100 to 100). Normalization does not notify.
    pub fn new(value: f64, unit: Unit) -> Self {
        let normalized = normalize_initial(value, unit);
        if normalized != value {
            warn!(initial = value, normalized, %unit, "initial value outside unit range; normalized");
        }
        Self {
            value: normalized,
            unit,
            last_valid: normalized,
            on_change: None,
        }
    }

    pub fn set_observer(&mut self, observer: ChangeObserver) {
        self.on_change = Some(observer);
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn last_valid(&self) -> f64 {
        self.last_valid
    }

    pub fn snapshot(&self) -> UnitValue {
        UnitValue::new(self.value, self.unit)
    }

    /// Switches the unit. Moving to percent saturates values above 100.
    pub fn set_unit(&mut self, next: Unit) -> UnitValue {
        if next == Unit::Percent && self.value > PERCENT_MAX {
            self.value = PERCENT_MAX;
        }
        self.unit = next;
        self.refresh_last_valid();
        self.notify()
    }

    /// Replaces the value verbatim. Range policy is applied by callers.
    pub fn set_value(&mut self, value: f64) -> UnitValue {
        self.value = value;
        self.refresh_last_valid();
        self.notify()
    }

    fn refresh_last_valid(&mut self) {
        if self.unit.accepts(self.value) {
            self.last_valid = self.value;
        }
    }

    fn notify(&mut self) -> UnitValue {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(self.value, self.unit);
        }
        self.snapshot()
    }
}

impl fmt::Debug for ValueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueState")
            .field("value", &self.value)
            .field("unit", &self.unit)
            .field("last_valid", &self.last_valid)
            .field("observed", &self.on_change.is_some())
            .finish()
    }
}

fn normalize_initial(value: f64, unit: Unit) -> f64 {
    if value.is_nan() || value <= 0.0 {
        return 0.0;
    }
    unit.max().map_or(value, |max| value.min(max))
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn observed(value: f64, unit: Unit) -> (ValueState, Rc<RefCell<Vec<UnitValue>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut state = ValueState::new(value, unit);
        state.set_observer(Box::new(move |value, unit| sink.borrow_mut().push(UnitValue::new(value, unit))));
        (state, calls)
    }

    #[test]
    fn set_unit_to_percent_saturates_at_100() {
        let (mut state, calls) = observed(120.0, Unit::Pixel);
        let result = state.set_unit(Unit::Percent);
        assert_eq!(result, UnitValue::new(100.0, Unit::Percent));
        assert_eq!(*calls.borrow(), vec![UnitValue::new(100.0, Unit::Percent)]);
        assert_eq!(state.last_valid(), 100.0);
    }

    #[test]
    fn set_unit_keeps_value_in_range() {
        let (mut state, calls) = observed(10.0, Unit::Pixel);
        state.set_unit(Unit::Percent);
        assert_eq!(*calls.borrow(), vec![UnitValue::new(10.0, Unit::Percent)]);
    }

    #[test]
    fn set_unit_same_unit_still_notifies() {
        let (mut state, calls) = observed(40.0, Unit::Percent);
        state.set_unit(Unit::Percent);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn set_value_is_verbatim_and_tracks_last_valid() {
        let (mut state, calls) = observed(50.0, Unit::Percent);
        state.set_value(70.0);
        assert_eq!(state.last_valid(), 70.0);

        state.set_value(150.0);
        assert_eq!(state.value(), 150.0);
        assert_eq!(state.last_valid(), 70.0);
        assert_eq!(
            *calls.borrow(),
            vec![UnitValue::new(70.0, Unit::Percent), UnitValue::new(150.0, Unit::Percent)]
        );
    }

    #[test]
    fn pixel_values_have_no_upper_bound() {
        let (mut state, _) = observed(0.0, Unit::Pixel);
        state.set_value(4096.0);
        assert_eq!(state.last_valid(), 4096.0);
    }

    #[test]
    fn initial_values_are_normalized_without_notifying() {
        let (state, calls) = observed(250.0, Unit::Percent);
        assert_eq!(state.value(), 100.0);
        assert_eq!(state.last_valid(), 100.0);
        assert!(calls.borrow().is_empty());

        assert_eq!(ValueState::new(-3.0, Unit::Pixel).value(), 0.0);
        assert_eq!(ValueState::new(f64::NAN, Unit::Pixel).value(), 0.0);
        assert_eq!(ValueState::new(250.0, Unit::Pixel).value(), 250.0);
    }
}
