//! Frame layout and mouse hit testing.
//!
//! `draw_ui` arranges the two control columns; `hit_test_button` recomputes
//! the same layout from the frame area so mouse clicks can be mapped back
//! to the button they landed on.

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Button, CooFeed, NumberPanel, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Which of the two buttons has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Reveal,
    Pet,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Reveal => Focus::Pet,
            Focus::Pet => Focus::Reveal,
        }
    }
}

/// Computed button and panel areas for one frame.
struct FrameLayout {
    title_area: Rect,
    reveal_button: Rect,
    number_panel: Rect,
    pet_button: Rect,
    coo_feed: Rect,
    help_area: Rect,
}

/// Split the frame into the fixed layout. Used by both rendering and hit
/// testing so the two can never disagree about where a button is.
fn frame_layout(frame_area: Rect) -> FrameLayout {
    use Constraint::{Length, Min, Percentage};

    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame_area);
    let [reveal_column, pigeon_column] =
        Layout::horizontal([Percentage(40), Percentage(60)]).areas(main_area);
    let [reveal_button, number_panel, _] =
        Layout::vertical([Length(3), Length(3), Min(0)]).areas(reveal_column);
    let [pet_button, coo_feed] = Layout::vertical([Length(3), Min(0)]).areas(pigeon_column);

    FrameLayout {
        title_area,
        reveal_button,
        number_panel,
        pet_button,
        coo_feed,
        help_area,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = frame_layout(frame.area());

    let mut title_bar = TitleBar::new(app.coo.clicks(), app.status_message.clone());
    title_bar.render(frame, layout.title_area);

    let mut reveal_button = Button::new(app.reveal.label(), tui.focus == Focus::Reveal);
    reveal_button.render(frame, layout.reveal_button);

    let mut number_panel = NumberPanel::new(app.reveal.display_text());
    number_panel.render(frame, layout.number_panel);

    let mut pet_button = Button::new("Pet the pigeon", tui.focus == Focus::Pet);
    pet_button.render(frame, layout.pet_button);

    let mut coo_feed = CooFeed::new(&mut tui.coo_feed, app.coo.entries());
    coo_feed.render(frame, layout.coo_feed);

    let help = Span::styled(
        " Tab focus  Enter/Space click  r reveal  p pet  ↑/↓ scroll  q quit ",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    );
    frame.render_widget(help, layout.help_area);
}

/// Hit test: given a click position, find which button (if any) it landed on.
pub fn hit_test_button(column: u16, row: u16, frame_area: Rect) -> Option<Focus> {
    let layout = frame_layout(frame_area);
    let position = Position::new(column, row);

    if layout.reveal_button.contains(position) {
        Some(Focus::Reveal)
    } else if layout.pet_button.contains(position) {
        Some(Focus::Pet)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::state::PLACEHOLDER_TEXT;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn test_app() -> App {
        App::new(None, PLACEHOLDER_TEXT.to_string())
    }

    fn draw_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, app, tui);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_fresh_state() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Reveal Number"));
        assert!(text.contains("Pet the pigeon"));
        assert!(!text.contains("Not yet live"));
    }

    #[test]
    fn test_draw_ui_revealed_state() {
        let mut app = test_app();
        update(&mut app, Action::ClickReveal);
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("Hide Number"));
        assert!(text.contains("Not yet live"));
    }

    #[test]
    fn test_draw_ui_coo_entries() {
        let mut app = test_app();
        update(&mut app, Action::PetPigeon);
        let mut tui = TuiState::new();
        let text = draw_to_text(&app, &mut tui);
        assert!(text.contains("pets: 1"));
        assert!(text.contains("coo"));
    }

    #[test]
    fn test_hit_test_reveal_button() {
        let frame_area = Rect::new(0, 0, 80, 24);
        let layout = frame_layout(frame_area);
        let hit = hit_test_button(layout.reveal_button.x + 1, layout.reveal_button.y + 1, frame_area);
        assert_eq!(hit, Some(Focus::Reveal));
    }

    #[test]
    fn test_hit_test_pet_button() {
        let frame_area = Rect::new(0, 0, 80, 24);
        let layout = frame_layout(frame_area);
        let hit = hit_test_button(layout.pet_button.x + 1, layout.pet_button.y + 1, frame_area);
        assert_eq!(hit, Some(Focus::Pet));
    }

    #[test]
    fn test_hit_test_miss() {
        let frame_area = Rect::new(0, 0, 80, 24);
        // Title bar row is not a button
        assert_eq!(hit_test_button(5, 0, frame_area), None);
        // Bottom of the coo feed is not a button
        assert_eq!(hit_test_button(60, 20, frame_area), None);
    }

    #[test]
    fn test_focus_next_cycles() {
        assert_eq!(Focus::Reveal.next(), Focus::Pet);
        assert_eq!(Focus::Pet.next(), Focus::Reveal);
    }
}
