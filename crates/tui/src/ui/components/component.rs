//! Component system for the example page.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while reporting side effects back to the runtime as
//! [`Effect`]s.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::{App, Effect};

/// A trait representing a UI component with its own state and behavior.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: components receive input through
///    `handle_key_events()`, `handle_mouse_events()` and `handle_paste()`.
/// 2. **Rendering**: `render()` draws the component into the provided area
///    and may capture hit areas for the next mouse event.
pub(crate) trait Component {
    /// Handle a key press.
    ///
    /// # Returns
    ///
    /// Vector of effects that the runtime should process
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event (moves, presses, releases).
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle bracketed paste.
    fn handle_paste(&mut self, _app: &mut App, _text: &str) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing,
    /// cursor placement and hit-area capture.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Keyboard hints for the footer.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
