//! The example page: one unit input on a card, the values the host has
//! received from it, and a hints footer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use measure_types::format_value;
use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Paragraph},
};

use super::components::{Component, UnitInputComponent};
use super::theme::theme_helpers as th;
use super::utils::centered_fixed;
use crate::app::{App, Effect};

const CARD_WIDTH: u16 = 44;
const CHANGE_ROWS: u16 = 8;

#[derive(Debug, Default)]
pub struct ExamplePage {
    unit_input: UnitInputComponent,
}

impl ExamplePage {
    fn card_height(app: &App) -> u16 {
        let (_, widget_height) = UnitInputComponent::preferred_size(&app.unit_input);
        // borders + label + widget + spacer + host value + history
        2 + 1 + widget_height + 1 + 1 + CHANGE_ROWS
    }
}

impl Component for ExamplePage {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if self.unit_input.handle_key(&mut app.unit_input, key) {
            return Vec::new();
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc if key.kind == KeyEventKind::Press => vec![Effect::Quit],
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.unit_input.handle_mouse(&mut app.unit_input, mouse);
        Vec::new()
    }

    fn handle_paste(&mut self, app: &mut App, text: &str) -> Vec<Effect> {
        self.unit_input.handle_paste(&mut app.unit_input, text);
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        frame.render_widget(Paragraph::new("").style(th::page_style(theme)), area);

        let [body, hints] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let card = centered_fixed(CARD_WIDTH, Self::card_height(app), body);
        let block = th::block(theme, Some(" Spacing "), false);
        let inner = block.inner(card).inner(Margin::new(1, 0));
        frame.render_widget(block, card);

        let (_, widget_height) = UnitInputComponent::preferred_size(&app.unit_input);
        let [label, widget, _, host_value, history] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(widget_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new("Padding").style(theme.text_secondary_style()), label);
        self.unit_input.render(frame, widget, &app.unit_input, theme);

        let current = app.current();
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Host value  ", theme.text_muted_style()),
                Span::styled(format!("{}{}", format_value(current.value), current.unit), theme.accent_emphasis_style()),
            ])),
            host_value,
        );

        let items: Vec<ListItem> = app
            .changes
            .entries()
            .iter()
            .rev()
            .map(|change| ListItem::new(format!("onChange({}, {})", format_value(change.value), change.unit)).style(theme.text_muted_style()))
            .collect();
        frame.render_widget(List::new(items), history);

        let hint_spans = self.get_hint_spans(app);
        frame.render_widget(Paragraph::new(Line::from(hint_spans)).style(theme.text_muted_style()), hints);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut spans = self.unit_input.hint_spans(&app.unit_input, &*app.theme);
        if !app.unit_input.ui().focused() {
            spans.extend(th::build_hint_spans(&*app.theme, &[("  q", " quit")]));
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};
    use measure_types::{Unit, UnitValue};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::PageOptions;
    use crate::ui::theme::DraculaTheme;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        App::new(&PageOptions::default(), Box::new(DraculaTheme::new()))
    }

    #[test]
    fn q_quits_only_when_field_is_not_focused() {
        let mut app = app();
        let mut page = ExamplePage::default();
        assert_eq!(page.handle_key_events(&mut app, press(KeyCode::Char('q'))), vec![Effect::Quit]);

        page.handle_key_events(&mut app, press(KeyCode::Enter));
        assert!(page.handle_key_events(&mut app, press(KeyCode::Char('q'))).is_empty());
        assert_eq!(app.unit_input.field().text(), "50q");
    }

    #[test]
    fn renders_card_with_host_value_and_reports() {
        let mut app = app();
        let mut page = ExamplePage::default();
        page.handle_key_events(&mut app, press(KeyCode::Char('+')));
        page.handle_key_events(&mut app, press(KeyCode::Char('p')));
        assert_eq!(app.current(), UnitValue::new(51.0, Unit::Pixel));

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| page.render(frame, frame.area(), &mut app)).unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");

        assert!(screen.contains("Spacing"));
        assert!(screen.contains("Host value  51px"));
        assert!(screen.contains("onChange(51, px)"));
        assert!(screen.contains("onChange(51, %)"));
    }
}
