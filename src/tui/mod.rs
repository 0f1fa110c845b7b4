//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps up to 250ms in
//! `poll_event_timeout` and only redraws when an event arrived. Both
//! controls are static between clicks, so idle frames cost nothing.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::CooFeedState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
pub use crate::tui::ui::{Focus, draw_ui, hit_test_button};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Which button has keyboard focus
    pub focus: Focus,
    /// Scroll and layout state for the coo feed
    pub coo_feed: CooFeedState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Reveal,
            coo_feed: CooFeedState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Map a focused button to its click action.
fn click_action(focus: Focus) -> Action {
    match focus {
        Focus::Reveal => Action::ClickReveal,
        Focus::Pet => Action::PetPigeon,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }

                TuiEvent::FocusNext => {
                    tui.focus = tui.focus.next();
                }

                // Enter/Space clicks whichever button has focus
                TuiEvent::Activate => {
                    update(&mut app, click_action(tui.focus));
                }

                // Direct hotkeys move focus to the button they click
                TuiEvent::Reveal => {
                    tui.focus = Focus::Reveal;
                    update(&mut app, Action::ClickReveal);
                }
                TuiEvent::Pet => {
                    tui.focus = Focus::Pet;
                    update(&mut app, Action::PetPigeon);
                }

                TuiEvent::MouseClick(column, row) => {
                    let frame_area = terminal.get_frame().area();
                    if let Some(focus) = hit_test_button(column, row, frame_area) {
                        tui.focus = focus;
                        update(&mut app, click_action(focus));
                    }
                }

                // Scroll events go to the coo feed
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.coo_feed.handle_event(&event);
                }
            }
        }

        if should_quit {
            break;
        }
    }

    info!(
        "Leaving the coop after {} pets, panel visible: {}",
        app.coo.clicks(),
        app.reveal.is_visible()
    );

    ratatui::restore();
    Ok(())
}
