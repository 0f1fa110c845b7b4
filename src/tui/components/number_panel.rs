//! # NumberPanel Component
//!
//! The reveal target element. While hidden the panel body is blank and the
//! border dimmed (the terminal analog of `visibility: hidden; opacity: 0`);
//! while visible it shows the revealed text at full intensity.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::component::Component;

/// Stateless render of the number panel. `text` is `Some` iff the panel is
/// visible (see `RevealToggle::display_text`).
pub struct NumberPanel<'a> {
    pub text: Option<&'a str>,
}

impl<'a> NumberPanel<'a> {
    pub fn new(text: Option<&'a str>) -> Self {
        Self { text }
    }
}

impl Component for NumberPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.text {
            Some(text) => {
                let panel = Paragraph::new(text)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(" number ")
                            .border_style(Style::default().fg(Color::Yellow)),
                    );
                frame.render_widget(panel, area);
            }
            None => {
                let panel = Block::default()
                    .borders(Borders::ALL)
                    .title(" number ")
                    .border_style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM));
                frame.render_widget(panel, area);
            }
        }
    }
}
