//! Theme styling module for the TUI UI layer.
//!
//! Two palettes are available (Dracula, Nord) behind semantic theme roles,
//! plus helper builders for the Ratatui styles the widget uses. Prefer these
//! helpers over hard-coding colors.

use tracing::debug;

pub mod dracula;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use dracula::DraculaTheme;
pub use nord::NordTheme;
pub use roles::Theme;

/// Identifier of the palette used when nothing else is requested.
pub const DEFAULT_THEME: &str = "dracula";

/// Resolves a theme by identifier. Unknown names fall back to Dracula.
pub fn load(preferred_theme: Option<&str>) -> Box<dyn Theme> {
    match preferred_theme.map(|name| name.trim().to_ascii_lowercase()).as_deref() {
        Some("nord") => Box::new(NordTheme::new()),
        Some("dracula") | None => Box::new(DraculaTheme::new()),
        Some(other) => {
            debug!(theme = other, "unknown theme requested; using {DEFAULT_THEME}");
            Box::new(DraculaTheme::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_resolves_known_names_and_falls_back() {
        assert_eq!(load(Some("Nord")).roles().surface, nord::N1);
        assert_eq!(load(Some("dracula")).roles().surface, dracula::BG_PANEL);
        assert_eq!(load(Some("solarized")).roles().surface, dracula::BG_PANEL);
        assert_eq!(load(None).roles().surface, dracula::BG_PANEL);
    }
}
