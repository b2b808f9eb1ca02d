use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::Theme;
use crate::ui::theme::roles::ThemeRoles;

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(
            t,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for the page behind the widget.
pub fn page_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Surface of the content row (step buttons + field), tinted while hovered.
pub fn content_style<T: Theme + ?Sized>(theme: &T, hovered: bool) -> Style {
    let roles = theme.roles();
    let bg = if hovered { roles.surface_hover } else { roles.surface };
    Style::default().bg(bg).fg(roles.text)
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub(crate) fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let dr = (f32::from(r) * f).round().clamp(0.0, 255.0) as u8;
            let dg = (f32::from(g) * f).round().clamp(0.0, 255.0) as u8;
            let db = (f32::from(b) * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(dr, dg, db)
        }
        other => other,
    }
}

/// Style for a step button glyph.
///
/// Disabled buttons use muted text; a hovered enabled button picks up the
/// selection background.
pub fn step_button_style<T: Theme + ?Sized>(theme: &T, enabled: bool, hovered: bool) -> Style {
    if !enabled {
        return theme.text_muted_style();
    }
    let style = theme.text_primary_style().add_modifier(Modifier::BOLD);
    if hovered {
        return style.bg(theme.roles().surface_hover);
    }
    style
}

/// Style for one segment of the unit toggle.
pub fn unit_segment_style<T: Theme + ?Sized>(theme: &T, active: bool) -> Style {
    if active {
        theme.selection_style().add_modifier(Modifier::BOLD)
    } else {
        theme.text_muted_style()
    }
}

/// Style for advisory tooltips.
pub fn tooltip_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { tooltip_bg, text, .. } = *theme.roles();
    Style::default().bg(tooltip_bg).fg(text)
}

/// Builds `key description` hint spans, keys emphasized.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
