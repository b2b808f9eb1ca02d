//! Runtime: event loop and input routing for the example page.
//!
//! Responsibilities
//! - Own the terminal lifecycle (alternate screen, raw mode, mouse capture,
//!   bracketed paste).
//! - Read terminal input on a dedicated blocking task and forward it over a
//!   channel so the loop itself never blocks.
//! - Route events to the page, execute returned `Effect`s and re-render
//!   after every handled event.
//!
//! Entry Point
//! - `run_app(options)` is called from `lib::run` and performs setup, event
//!   processing and teardown. The terminal is restored even when the loop
//!   fails.
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, Event, KeyCode, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use measure_types::UnitValue;
use ratatui::{Terminal, prelude::*};
use tokio::{signal, sync::mpsc};
use tracing::{debug, warn};

use crate::app::{App, Effect, PageOptions};
use crate::ui::components::component::Component;
use crate::ui::main_component::ExamplePage;
use crate::ui::theme;

type CrosstermTerminal = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Spawn a blocking reader that forwards `crossterm` events over a Tokio
/// channel.
///
/// Keeping `poll()` and `read()` on the same OS thread avoids lost or delayed
/// events in some terminals.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::task::spawn_blocking(move || {
        let sixteen_ms = Duration::from_millis(16);
        let mut last_mouse_move = Instant::now();
        loop {
            match event::poll(sixteen_ms) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                    continue;
                }
                Ok(true) => {}
                Err(e) => {
                    warn!("Failed to poll for events: {}", e);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    // Throttle mouse moves events to once per 16 ms.
                    let is_mouse_move = event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.elapsed() < sixteen_ms {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read event: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut CrosstermTerminal, app: &mut App, page: &mut ExamplePage) -> Result<()> {
    terminal.draw(|frame| page.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events.
fn handle_input_event(app: &mut App, page: &mut ExamplePage, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => page.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => page.handle_mouse_events(app, mouse_event),
        Event::Paste(text) => page.handle_paste(app, &text),
        Event::Resize(..) | Event::FocusGained | Event::FocusLost => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the event
/// producer, runs the event loop, and performs cleanup on exit.
///
/// Returns the host's view of the value when the page closes.
pub async fn run_app(options: PageOptions) -> Result<UnitValue> {
    let mut app = App::new(&options, theme::load(options.theme.as_deref()));
    let mut page = ExamplePage::default();
    let mut terminal = setup_terminal()?;
    let input_receiver = spawn_input_thread();

    let outcome = event_loop(&mut terminal, &mut app, &mut page, input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    outcome?;

    let result = app.current();
    debug!(%result, "example page closed");
    Ok(result)
}

async fn event_loop(terminal: &mut CrosstermTerminal, app: &mut App, page: &mut ExamplePage, mut input_receiver: mpsc::Receiver<Event>) -> Result<()> {
    render(terminal, app, page)?;

    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = &event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                let effects = handle_input_event(app, page, event);
                if effects.contains(&Effect::Quit) {
                    break;
                }
            }
            // Handle Ctrl+C delivered as a signal
            _ = signal::ctrl_c() => { break; }
        }
        render(terminal, app, page)?;
    }
    Ok(())
}
