//! Terminal rendering and input routing for [`UnitInputState`].
//!
//! Layout (toggle row optional):
//!
//! ```text
//! ╭──────┬──────╮
//! │  %   │  px  │
//! ╰──────┴──────╯
//!    tooltip row
//! ╭───────────────╮
//! │ − │  50  │ + │
//! ╰───────────────╯
//! ```
//!
//! Hit areas are captured during `render` and used by the next mouse event.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use measure_types::Unit;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::Span,
    widgets::{Block, BorderType, Clear, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{FieldPhase, StepDirection, UnitInputState, UnitToggle};
use crate::ui::theme::{
    Theme,
    theme_helpers::{block, build_hint_spans, content_style, step_button_style, tooltip_style, unit_segment_style},
};

const SEGMENT_WIDTH: u16 = 6;
const BUTTON_WIDTH: u16 = 3;
const FIELD_WIDTH: u16 = 10;
const TOGGLE_HEIGHT: u16 = 3;
const TOOLTIP_HEIGHT: u16 = 1;
const CONTENT_HEIGHT: u16 = 3;

/// Hit areas from the last render.
#[derive(Clone, Debug, Default)]
struct UnitInputLayout {
    segments: [(Unit, Rect); 2],
    decrease: Rect,
    field: Rect,
    increase: Rect,
    tooltip_row: Rect,
}

impl UnitInputLayout {
    fn button(&self, direction: StepDirection) -> Rect {
        match direction {
            StepDirection::Decrease => self.decrease,
            StepDirection::Increase => self.increase,
        }
    }

    fn button_at(&self, position: Position) -> Option<StepDirection> {
        [StepDirection::Decrease, StepDirection::Increase]
            .into_iter()
            .find(|direction| self.button(*direction).contains(position))
    }

    fn segment_at(&self, position: Position) -> Option<Unit> {
        self.segments.iter().find(|(_, area)| area.contains(position)).map(|(unit, _)| *unit)
    }
}

#[derive(Clone, Debug, Default)]
pub struct UnitInputComponent {
    layout: UnitInputLayout,
}

impl UnitInputComponent {
    /// Width and height the widget needs.
    pub fn preferred_size(state: &UnitInputState) -> (u16, u16) {
        let content_width = BUTTON_WIDTH * 2 + FIELD_WIDTH + 2;
        let mut height = TOOLTIP_HEIGHT + CONTENT_HEIGHT;
        let mut width = content_width;
        if state.toggle().shown() {
            height += TOGGLE_HEIGHT;
            width = width.max(SEGMENT_WIDTH * 2 + 2);
        }
        (width, height)
    }

    /// Routes a key press. Returns `true` when the key was consumed.
    ///
    /// While the field is focused every printable key edits it; otherwise
    /// keys drive the buttons and the toggle.
    pub fn handle_key(&mut self, state: &mut UnitInputState, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press || !state.is_editable() {
            return false;
        }
        if state.ui().focused() {
            return Self::handle_field_key(state, key);
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char('i') => state.focus_field(),
            KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => state.step(StepDirection::Decrease),
            KeyCode::Char('+' | '=') | KeyCode::Right | KeyCode::Up => state.step(StepDirection::Increase),
            KeyCode::Char('%') => state.select_unit(Unit::Percent),
            KeyCode::Char('p') => state.select_unit(Unit::Pixel),
            KeyCode::Char('u') => state.flip_unit(),
            _ => false,
        }
    }

    fn handle_field_key(state: &mut UnitInputState, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => state.commit_field(),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                state.edit_field(|field| field.insert_char(c))
            }
            KeyCode::Backspace => state.edit_field(|field| field.backspace()),
            KeyCode::Delete => state.edit_field(|field| field.delete()),
            KeyCode::Left => state.edit_field(|field| field.move_left()),
            KeyCode::Right => state.edit_field(|field| field.move_right()),
            KeyCode::Home => state.edit_field(|field| field.move_home()),
            KeyCode::End => state.edit_field(|field| field.move_end()),
            _ => false,
        }
    }

    /// Routes pasted text into the focused field.
    pub fn handle_paste(&mut self, state: &mut UnitInputState, text: &str) -> bool {
        state.edit_field(|field| field.insert_text(text))
    }

    /// Routes a mouse event. Returns `true` when anything changed.
    pub fn handle_mouse(&mut self, state: &mut UnitInputState, mouse: MouseEvent) -> bool {
        let MouseEvent { kind, column, row, .. } = mouse;
        let position = Position::new(column, row);
        match kind {
            MouseEventKind::Moved | MouseEventKind::Up(MouseButton::Left) => self.track_pointer(state, position),
            MouseEventKind::Down(MouseButton::Left) => {
                let hover_changed = self.track_pointer(state, position);
                self.press(state, position) || hover_changed
            }
            _ => false,
        }
    }

    fn track_pointer(&self, state: &mut UnitInputState, position: Position) -> bool {
        let mut changed = state.set_field_hovered(self.layout.field.contains(position));
        for direction in [StepDirection::Decrease, StepDirection::Increase] {
            changed |= state.set_button_hovered(direction, self.layout.button(direction).contains(position));
        }
        changed
    }

    fn press(&self, state: &mut UnitInputState, position: Position) -> bool {
        if self.layout.field.contains(position) {
            return state.focus_field();
        }
        // Any press outside the field blurs it before acting.
        let blurred = state.blur_field();
        let acted = if let Some(direction) = self.layout.button_at(position) {
            state.step(direction)
        } else if let Some(unit) = self.layout.segment_at(position) {
            state.select_unit(unit)
        } else {
            false
        };
        blurred || acted
    }

    pub fn hint_spans<'a>(&self, state: &UnitInputState, theme: &dyn Theme) -> Vec<Span<'a>> {
        if !state.is_editable() {
            return build_hint_spans(theme, &[("Read only", "")]);
        }
        if state.ui().focused() {
            build_hint_spans(theme, &[("Enter", " commit  "), ("Esc/Tab", " leave  "), ("←/→", " move cursor")])
        } else {
            build_hint_spans(
                theme,
                &[("Enter", " edit  "), ("−/+", " step  "), ("%/p", " unit  "), ("u", " flip unit")],
            )
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &UnitInputState, theme: &dyn Theme) {
        let toggle_height = if state.toggle().shown() { TOGGLE_HEIGHT } else { 0 };
        let [toggle_area, tooltip_row, content_area] = Layout::vertical([
            Constraint::Length(toggle_height),
            Constraint::Length(TOOLTIP_HEIGHT),
            Constraint::Length(CONTENT_HEIGHT),
        ])
        .areas(area);

        self.layout.segments = if state.toggle().shown() {
            render_toggle(frame, toggle_area, state.unit(), theme)
        } else {
            Default::default()
        };
        self.layout.tooltip_row = tooltip_row;
        self.render_content(frame, content_area, state, theme);
        self.render_tooltips(frame, state, theme);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect, state: &UnitInputState, theme: &dyn Theme) {
        let ui = state.ui();
        let width = area.width.min(BUTTON_WIDTH * 2 + FIELD_WIDTH + 2);
        let area = Rect { width, ..area };
        let container = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(ui.focused()))
            .style(content_style(theme, ui.hovered()));
        let inner = container.inner(area);
        frame.render_widget(container, area);

        let [decrease, field, increase] =
            Layout::horizontal([Constraint::Length(BUTTON_WIDTH), Constraint::Min(1), Constraint::Length(BUTTON_WIDTH)]).areas(inner);

        for (direction, button_area) in [(StepDirection::Decrease, decrease), (StepDirection::Increase, increase)] {
            let enabled = state.is_editable() && !state.is_step_disabled(direction);
            let hovered = state.button(direction).hovered();
            frame.render_widget(
                Paragraph::new(direction.glyph()).centered().style(step_button_style(theme, enabled, hovered)),
                button_area,
            );
        }

        let view = field_view(state.field().text(), state.field().cursor(), field.width);
        let text_area = Rect {
            x: field.x + view.offset,
            width: field.width.saturating_sub(view.offset),
            ..field
        };
        // Uncommitted edits are emphasized until the field commits.
        let text_style = match state.field().phase() {
            FieldPhase::Editing => theme.accent_emphasis_style(),
            FieldPhase::Idle => theme.text_primary_style(),
        };
        frame.render_widget(Paragraph::new(view.text).style(text_style), text_area);
        if ui.focused() {
            frame.set_cursor_position(Position::new(field.x + view.cursor_column, field.y));
        }

        self.layout.decrease = decrease;
        self.layout.field = field;
        self.layout.increase = increase;
    }

    fn render_tooltips(&self, frame: &mut Frame, state: &UnitInputState, theme: &dyn Theme) {
        let row = self.layout.tooltip_row;
        if row.height == 0 {
            return;
        }
        let bounds = frame.area();
        for direction in [StepDirection::Decrease, StepDirection::Increase] {
            let Some(tooltip) = state.visible_tooltip(direction) else {
                continue;
            };
            let button = self.layout.button(direction);
            let width = (tooltip.width() as u16).saturating_add(2).min(bounds.width);
            let centered = (button.x + button.width / 2).saturating_sub(width / 2);
            let x = centered.max(bounds.x).min(bounds.right().saturating_sub(width));
            let area = Rect::new(x, row.y, width, 1);
            frame.render_widget(Clear, area);
            frame.render_widget(Paragraph::new(format!(" {tooltip} ")).style(tooltip_style(theme)), area);
        }
    }
}

fn render_toggle(frame: &mut Frame, area: Rect, active: Unit, theme: &dyn Theme) -> [(Unit, Rect); 2] {
    let area = Rect {
        width: area.width.min(SEGMENT_WIDTH * 2 + 2),
        ..area
    };
    let container = block(theme, None, false);
    let inner = container.inner(area);
    frame.render_widget(container, area);

    let [percent, pixel] = Layout::horizontal([Constraint::Length(SEGMENT_WIDTH); 2]).areas(inner);
    let segments = [(UnitToggle::TARGETS[0], percent), (UnitToggle::TARGETS[1], pixel)];
    for (unit, segment) in segments {
        frame.render_widget(
            Paragraph::new(unit.symbol()).centered().style(unit_segment_style(theme, unit == active)),
            segment,
        );
    }
    segments
}

/// The slice of staged text that fits the field, and where the cursor lands.
#[derive(Debug, PartialEq, Eq)]
struct FieldView {
    text: String,
    /// Left padding that centers short text.
    offset: u16,
    cursor_column: u16,
}

fn field_view(text: &str, cursor: usize, width: u16) -> FieldView {
    let width = usize::from(width);
    let text_width = text.width();
    let before_cursor = &text[..cursor];
    if text_width < width {
        let offset = (width - text_width) / 2;
        return FieldView {
            text: text.to_string(),
            offset: offset as u16,
            cursor_column: (offset + before_cursor.width()) as u16,
        };
    }

    // Scroll so the cursor stays visible with one column to spare.
    let mut start = 0;
    while start < cursor && text[start..cursor].width() >= width {
        start += text[start..].chars().next().map_or(1, char::len_utf8);
    }
    let mut visible = String::new();
    let mut used = 0;
    for c in text[start..].chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > width {
            break;
        }
        used += char_width;
        visible.push(c);
    }
    FieldView {
        text: visible,
        offset: 0,
        cursor_column: text[start..cursor].width() as u16,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};
    use measure_types::UnitValue;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::ui::theme::DraculaTheme;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn hover(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(component: &mut UnitInputComponent, state: &UnitInputState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = DraculaTheme::new();
        terminal
            .draw(|frame| component.render(frame, frame.area(), state, &theme))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, row: u16) -> String {
        (0..buffer.area.width).map(|x| buffer[(x, row)].symbol()).collect()
    }

    fn rect_center(area: Rect) -> (u16, u16) {
        (area.x + area.width / 2, area.y + area.height / 2)
    }

    #[test]
    fn renders_value_and_both_unit_labels() {
        let state = UnitInputState::new(10.0, Unit::Pixel);
        let mut component = UnitInputComponent::default();
        let buffer = draw(&mut component, &state, 30, 7);

        let toggle_row = row_text(&buffer, 1);
        assert!(toggle_row.contains('%'));
        assert!(toggle_row.contains("px"));
        let content_row = row_text(&buffer, 5);
        assert!(content_row.contains("10"));
        assert!(content_row.contains('−'));
        assert!(content_row.contains('+'));
    }

    #[test]
    fn clicking_percent_segment_clamps_pixel_value() {
        let mut state = UnitInputState::new(120.0, Unit::Pixel);
        let mut component = UnitInputComponent::default();
        draw(&mut component, &state, 30, 7);

        let (column, row) = rect_center(component.layout.segments[0].1);
        assert!(component.handle_mouse(&mut state, click(column, row)));
        assert_eq!(state.snapshot(), UnitValue::new(100.0, Unit::Percent));

        let buffer = draw(&mut component, &state, 30, 7);
        assert!(row_text(&buffer, 5).contains("100"));
    }

    #[test]
    fn typing_then_enter_commits() {
        let mut state = UnitInputState::new(0.0, Unit::Pixel);
        let mut component = UnitInputComponent::default();
        assert!(component.handle_key(&mut state, key(KeyCode::Enter)));
        assert!(state.ui().focused());

        component.handle_key(&mut state, key(KeyCode::Backspace));
        for c in "12,3a".chars() {
            component.handle_key(&mut state, key(KeyCode::Char(c)));
        }
        assert_eq!(state.field().text(), "12.3a");
        assert!(component.handle_key(&mut state, key(KeyCode::Enter)));
        assert_eq!(state.value(), 12.3);
        assert!(!state.ui().focused());
    }

    #[test]
    fn clicking_outside_focused_field_commits_before_acting() {
        let mut state = UnitInputState::new(5.0, Unit::Pixel);
        let mut component = UnitInputComponent::default();
        draw(&mut component, &state, 30, 7);

        let (column, row) = rect_center(component.layout.field);
        component.handle_mouse(&mut state, click(column, row));
        assert!(state.ui().focused());
        component.handle_paste(&mut state, "0");
        assert_eq!(state.field().text(), "50");

        let (column, row) = rect_center(component.layout.increase);
        assert!(component.handle_mouse(&mut state, click(column, row)));
        assert_eq!(state.value(), 51.0);
        assert!(!state.ui().focused());
    }

    #[test]
    fn keys_step_and_switch_units_when_not_focused() {
        let mut state = UnitInputState::new(100.0, Unit::Percent);
        let mut component = UnitInputComponent::default();
        assert!(!component.handle_key(&mut state, key(KeyCode::Char('+'))));
        assert!(component.handle_key(&mut state, key(KeyCode::Char('-'))));
        assert_eq!(state.value(), 99.0);
        assert!(component.handle_key(&mut state, key(KeyCode::Char('p'))));
        assert_eq!(state.unit(), Unit::Pixel);
        assert!(component.handle_key(&mut state, key(KeyCode::Char('u'))));
        assert_eq!(state.unit(), Unit::Percent);
        assert!(!component.handle_key(&mut state, key(KeyCode::Char('q'))));
    }

    #[test]
    fn display_only_ignores_input() {
        let mut state = UnitInputState::display_only(0.0, Unit::Pixel);
        let mut component = UnitInputComponent::default();
        draw(&mut component, &state, 30, 7);
        assert!(!component.handle_key(&mut state, key(KeyCode::Char('+'))));
        let (column, row) = rect_center(component.layout.increase);
        component.handle_mouse(&mut state, click(column, row));
        assert_eq!(state.value(), 0.0);
    }

    #[test]
    fn hovering_disabled_decrease_shows_tooltip() {
        let mut state = UnitInputState::new(0.0, Unit::Pixel);
        let mut component = UnitInputComponent::default();
        draw(&mut component, &state, 40, 7);

        let (column, row) = rect_center(component.layout.decrease);
        assert!(component.handle_mouse(&mut state, hover(column, row)));
        let buffer = draw(&mut component, &state, 40, 7);
        assert!(row_text(&buffer, 3).contains("Value must greater than 0"));

        component.handle_mouse(&mut state, hover(39, 0));
        let buffer = draw(&mut component, &state, 40, 7);
        assert!(!row_text(&buffer, 3).contains("Value must"));
    }

    #[test]
    fn hovering_field_sets_shared_hover_flag() {
        let mut state = UnitInputState::new(0.0, Unit::Pixel);
        let mut component = UnitInputComponent::default();
        draw(&mut component, &state, 30, 7);
        let (column, row) = rect_center(component.layout.field);
        component.handle_mouse(&mut state, hover(column, row));
        assert!(state.ui().hovered());
        component.handle_mouse(&mut state, hover(0, 0));
        assert!(!state.ui().hovered());
    }

    #[test]
    fn staged_edits_render_emphasized_until_commit() {
        let theme = DraculaTheme::new();
        let mut state = UnitInputState::new(4.0, Unit::Pixel);
        let mut component = UnitInputComponent::default();
        let digit_cell = |buffer: &Buffer, component: &UnitInputComponent| {
            let field = component.layout.field;
            (field.x..field.right())
                .map(|x| buffer[(x, field.y)].clone())
                .find(|cell| cell.symbol() == "4")
        };

        let buffer = draw(&mut component, &state, 30, 7);
        let idle = digit_cell(&buffer, &component).expect("value rendered");
        assert_eq!(idle.fg, theme.roles().text);

        component.handle_key(&mut state, key(KeyCode::Enter));
        component.handle_key(&mut state, key(KeyCode::Char('2')));
        let buffer = draw(&mut component, &state, 30, 7);
        let editing = digit_cell(&buffer, &component).expect("staged text rendered");
        assert_eq!(editing.fg, theme.roles().accent_primary);

        component.handle_key(&mut state, key(KeyCode::Enter));
        let buffer = draw(&mut component, &state, 30, 7);
        let committed = digit_cell(&buffer, &component).expect("value rendered");
        assert_eq!(committed.fg, theme.roles().text);
    }

    #[test]
    fn field_view_centers_short_text() {
        let view = field_view("50", 2, 10);
        assert_eq!(view.offset, 4);
        assert_eq!(view.cursor_column, 6);
        assert_eq!(view.text, "50");
    }

    #[test]
    fn field_view_scrolls_long_text_to_cursor() {
        let text = "1234567890123";
        let view = field_view(text, text.len(), 10);
        assert_eq!(view.offset, 0);
        assert_eq!(view.cursor_column, 9);
        assert_eq!(view.text, "567890123");
    }

    #[test]
    fn preferred_size_accounts_for_toggle() {
        let state = UnitInputState::default();
        assert_eq!(UnitInputComponent::preferred_size(&state), (18, 7));
        let state = UnitInputState::default().with_unit_toggle(false);
        assert_eq!(UnitInputComponent::preferred_size(&state), (18, 4));
    }
}
