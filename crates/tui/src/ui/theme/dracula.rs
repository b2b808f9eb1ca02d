use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dracula palette (https://draculatheme.com/contribute)
// Core
pub const BG: Color = Color::Rgb(0x28, 0x2A, 0x36); // #282a36 - Background
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A); // #44475a - Current line / selection
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2); // #f8f8f2 - Foreground text
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4); // #6272a4 - Muted / comments

// Accents
pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD); // #8be9fd
pub const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6); // #ff79c6

pub const BG_PANEL: Color = Color::Rgb(0x21, 0x22, 0x2C); // Input surfaces sit below the page
pub const BG_TOOLTIP: Color = Color::Rgb(0x1D, 0x1F, 0x27);

/// Default Dracula theme tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BG,
                surface: BG_PANEL,
                surface_hover: CURRENT_LINE,
                border: CURRENT_LINE,

                text: FOREGROUND,
                text_secondary: COMMENT,
                text_muted: COMMENT,

                accent_primary: PINK,

                selection_bg: CURRENT_LINE,
                selection_fg: FOREGROUND,
                focus: CYAN, // Cyan for active/focused borders

                tooltip_bg: BG_TOOLTIP,
            },
        }
    }
}

impl Default for DraculaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
