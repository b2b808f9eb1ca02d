//! Shared value types for the measure widget.
//!
//! These types carry no UI dependencies so that hosts can depend on them
//! without pulling in the terminal stack.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of the percentage unit.
pub const PERCENT_MAX: f64 = 100.0;

/// The unit a widget value is expressed in.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Unit {
    /// Percentage, bounded to `0..=100`.
    #[default]
    #[serde(rename = "%", alias = "percent")]
    Percent,
    /// Pixels, bounded below by zero only.
    #[serde(rename = "px", alias = "pixel")]
    Pixel,
}

impl Unit {
    /// Short label shown on the unit toggle.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Pixel => "px",
        }
    }

    /// The other unit.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Percent => Self::Pixel,
            Self::Pixel => Self::Percent,
        }
    }

    /// Inclusive upper bound, if the unit has one.
    pub const fn max(self) -> Option<f64> {
        match self {
            Self::Percent => Some(PERCENT_MAX),
            Self::Pixel => None,
        }
    }

    /// Whether `value` lies inside this unit's range.
    ///
    /// Percent accepts `[0, 100]`, pixel accepts `[0, ∞)`. NaN is never in range.
    pub fn accepts(self, value: f64) -> bool {
        value >= 0.0 && self.max().is_none_or(|max| value <= max)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "%" | "percent" => Ok(Self::Percent),
            "px" | "pixel" => Ok(Self::Pixel),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid unit '{0}'; expected '%' or 'px'")]
pub struct ParseUnitError(pub String);

/// A value paired with its unit, as reported to change observers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitValue {
    pub value: f64,
    pub unit: Unit,
}

impl UnitValue {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_value(self.value), self.unit)
    }
}

/// Formats a value the way the text field displays it.
///
/// Integral values have no fractional part (`50`, not `50.0`) and negative
/// zero is printed as `0`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 { "0".to_string() } else { value.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parses_symbols_and_names() {
        assert_eq!("%".parse::<Unit>(), Ok(Unit::Percent));
        assert_eq!("Percent".parse::<Unit>(), Ok(Unit::Percent));
        assert_eq!(" px ".parse::<Unit>(), Ok(Unit::Pixel));
        assert_eq!("pixel".parse::<Unit>(), Ok(Unit::Pixel));
        assert_eq!("em".parse::<Unit>(), Err(ParseUnitError("em".to_string())));
    }

    #[test]
    fn unit_ranges() {
        assert!(Unit::Percent.accepts(0.0));
        assert!(Unit::Percent.accepts(100.0));
        assert!(!Unit::Percent.accepts(100.5));
        assert!(!Unit::Percent.accepts(-1.0));
        assert!(Unit::Pixel.accepts(10_000.0));
        assert!(!Unit::Pixel.accepts(-0.1));
        assert!(!Unit::Pixel.accepts(f64::NAN));
    }

    #[test]
    fn format_value_drops_trailing_zero_fraction() {
        assert_eq!(format_value(50.0), "50");
        assert_eq!(format_value(12.3), "12.3");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(0.5), "0.5");
    }

    #[test]
    fn unit_value_serializes_with_symbol() {
        let json = serde_json::to_string(&UnitValue::new(12.5, Unit::Pixel)).unwrap();
        assert_eq!(json, r#"{"value":12.5,"unit":"px"}"#);

        let parsed: UnitValue = serde_json::from_str(r#"{"value":40,"unit":"percent"}"#).unwrap();
        assert_eq!(parsed, UnitValue::new(40.0, Unit::Percent));
    }

    #[test]
    fn unit_value_display() {
        assert_eq!(UnitValue::new(100.0, Unit::Percent).to_string(), "100%");
        assert_eq!(UnitValue::new(12.3, Unit::Pixel).to_string(), "12.3px");
    }
}
