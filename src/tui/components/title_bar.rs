//! # TitleBar Component
//!
//! Top status line showing the pigeon's pet count and transient status text.
//!
//! TitleBar is purely presentational — it receives all data as props and has
//! no internal state. Both props come from core `App` state; the TitleBar
//! doesn't care where they come from, it just renders what it's given.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status line component.
///
/// # Props
///
/// - `pet_count`: Total clicks on the pet button this session
/// - `status_message`: Transient status (e.g. "Number revealed", "coo!")
pub struct TitleBar {
    pub pet_count: u64,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(pet_count: u64, status_message: String) -> Self {
        Self {
            pet_count,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Pigeon Coop (pets: {})", self.pet_count)
        } else {
            format!(
                "Pigeon Coop (pets: {}) | {}",
                self.pet_count, self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
