//! # Button Component
//!
//! A clickable control rendered as a bordered, centered label. The label is
//! a prop — for the reveal button it comes from `RevealToggle::label()`, so
//! the rendered text can never drift from the visibility state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;

/// A stateless button. Focus styling is decided by the parent.
pub struct Button<'a> {
    pub label: &'a str,
    pub focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, focused: bool) -> Self {
        Self { label, focused }
    }
}

impl Component for Button<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (text_style, border_style) = if self.focused {
            (
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                Style::default().fg(Color::White),
            )
        } else {
            (
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::DarkGray),
            )
        };

        let button = Paragraph::new(self.label)
            .style(text_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));

        frame.render_widget(button, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(button: &mut Button) -> String {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                button.render(f, f.area());
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
    fn test_button_renders_label() {
        let mut button = Button::new("Reveal Number", false);
        let text = render_to_text(&mut button);
        assert!(text.contains("Reveal Number"));
    }

    #[test]
    fn test_focused_button_renders_label() {
        let mut button = Button::new("Pet the pigeon", true);
        let text = render_to_text(&mut button);
        assert!(text.contains("Pet the pigeon"));
    }
}
