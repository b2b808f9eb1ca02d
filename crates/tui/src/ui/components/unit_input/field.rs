//! Text field that stages raw input and resolves it on commit.
//!
//! While editing, the only normalization is the decimal separator (`,`
//! becomes `.`). On commit the first numeric run is extracted and the unit's
//! range policy applied:
//!
//! | input                    | result               |
//! |--------------------------|----------------------|
//! | no numeric run, NaN      | `0`                  |
//! | negative                 | `0`                  |
//! | above 100 under percent  | last valid value     |
//! | overflow under pixel     | `f64::MAX`           |
//! | anything else            | the parsed number    |

use measure_types::{PERCENT_MAX, Unit, format_value};
use once_cell::sync::Lazy;
use regex::Regex;

use super::InputEffect;
use crate::ui::components::common::TextInputState;

static NUMBER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").expect("number regex should compile"));

/// Whether the staged text still mirrors the committed value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldPhase {
    #[default]
    Idle,
    Editing,
}

#[derive(Clone, Debug, Default)]
pub struct FieldState {
    staged: TextInputState,
    phase: FieldPhase,
}

impl FieldState {
    pub fn new(value: f64) -> Self {
        let mut field = Self::default();
        field.sync(value);
        field
    }

    pub fn text(&self) -> &str {
        self.staged.input()
    }

    pub fn cursor(&self) -> usize {
        self.staged.cursor()
    }

    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    pub fn insert_char(&mut self, c: char) {
        self.staged.insert_char(normalize_separator(c));
        self.phase = FieldPhase::Editing;
    }

    /// Inserts pasted text, normalizing every decimal separator.
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let normalized: String = text.chars().map(normalize_separator).collect();
        self.staged.insert_str(&normalized);
        self.phase = FieldPhase::Editing;
    }

    pub fn backspace(&mut self) {
        if self.staged.backspace() {
            self.phase = FieldPhase::Editing;
        }
    }

    pub fn delete(&mut self) {
        if self.staged.delete() {
            self.phase = FieldPhase::Editing;
        }
    }

    pub fn move_left(&mut self) {
        self.staged.move_left();
    }

    pub fn move_right(&mut self) {
        self.staged.move_right();
    }

    pub fn move_home(&mut self) {
        self.staged.move_home();
    }

    pub fn move_end(&mut self) {
        self.staged.move_end();
    }

    /// Resolves the staged text and returns the value write it requires.
    ///
    /// The staged text is rewritten to the resolved value immediately so the
    /// field shows it even when the committed value does not change.
    pub fn commit(&mut self, unit: Unit, last_valid: f64) -> InputEffect {
        let resolved = resolve_committed_value(parse_staged_text(self.staged.input()), unit, last_valid);
        self.sync(resolved);
        InputEffect::SetValue(resolved)
    }

    /// Discards any staged edit and mirrors `value`.
    pub fn sync(&mut self, value: f64) {
        self.staged.set_input(format_value(value));
        self.phase = FieldPhase::Idle;
    }
}

fn normalize_separator(c: char) -> char {
    if c == ',' { '.' } else { c }
}

/// Extracts the first numeric run from `text`.
///
/// Text without a numeric run parses as 0. Runs too long for `f64`
/// parse as `+∞` and are resolved by [`resolve_committed_value`].
pub fn parse_staged_text(text: &str) -> f64 {
    NUMBER_RUN
        .find(text)
        .and_then(|run| run.as_str().parse::<f64>().ok())
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0)
}

/// Applies the commit-time range policy for `unit`.
///
/// Percent overflow (including `+∞`) reverts to `last_valid` rather than
/// saturating at 100. Pixel values are unbounded but stay finite.
pub fn resolve_committed_value(parsed: f64, unit: Unit, last_valid: f64) -> f64 {
    if parsed.is_nan() || parsed <= 0.0 {
        return 0.0;
    }
    match unit {
        Unit::Percent if parsed > PERCENT_MAX => last_valid,
        Unit::Percent => parsed,
        Unit::Pixel => parsed.min(f64::MAX),
    }
}
