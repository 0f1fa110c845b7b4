//! # CooFeed Component
//!
//! Scrollable view of the appended coo entries.
//!
//! `CooFeed` is a transient component (created each frame) that wraps
//! `&'a mut CooFeedState` (persistent state, lives in `TuiState`) and the
//! entry slice (props, owned by `CooCounter` in core).
//!
//! Entry heights are predicted with `textwrap` using options that match
//! Ratatui's `Paragraph` wrapping, so scroll positions can be computed
//! without rendering every entry. Entries are append-only, so cached
//! heights stay valid and only new entries are measured — unless the
//! content width changes, which invalidates the whole cache.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll and layout state for the coo feed.
/// Must be persisted in the parent TuiState.
pub struct CooFeedState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached entry heights (append-only, invalidated on width change)
    pub heights: Vec<u16>,
    /// When true, auto-scroll to bottom on new entries
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Width the cached heights were measured at
    cached_width: u16,
}

impl Default for CooFeedState {
    fn default() -> Self {
        Self::new()
    }
}

impl CooFeedState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
            cached_width: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last entry.
    pub fn clamp_scroll(&mut self) {
        let total_content_height: u16 = self.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the
    /// bottom. Called on scroll-down events so that scrolling past the end
    /// re-pins to bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let total_content_height: u16 = self.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Refresh the height cache for the given entries and content width.
    /// Entries only ever append, so heights beyond the cache are measured;
    /// a width change throws the whole cache away.
    fn update_heights(&mut self, entries: &[String], content_width: u16) {
        if self.cached_width != content_width {
            self.heights.clear();
            self.cached_width = content_width;
        }
        for entry in entries.iter().skip(self.heights.len()) {
            self.heights.push(entry_height(entry, content_width));
        }
    }
}

/// Predict the rendered height of one entry at the given width.
///
/// The wrapping options must match the Ratatui default for `Paragraph` to
/// keep a 1:1 mapping between calculated and actual height.
fn entry_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        // Degenerate case: terminal too narrow. Return 1 row so the entry
        // still occupies space in the layout.
        return 1;
    }
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    (textwrap::wrap(text.trim(), options).len() as u16).max(1)
}

/// Scrollable coo feed component.
/// Created fresh each frame with references to state and data.
pub struct CooFeed<'a> {
    pub state: &'a mut CooFeedState,
    pub entries: &'a [String],
}

impl<'a> CooFeed<'a> {
    pub fn new(state: &'a mut CooFeedState, entries: &'a [String]) -> Self {
        Self { state, entries }
    }
}

impl Component for CooFeed<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" coos ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.entries.is_empty() {
            let empty = Paragraph::new("The pigeon waits.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        }

        let content_width = inner.width.saturating_sub(1); // -1 for scrollbar
        self.state.update_heights(self.entries, content_width);
        let total_height: u16 = self.state.heights.iter().sum();

        self.state.viewport_height = inner.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (entry, &height) in self.entries.iter().zip(self.state.heights.iter()) {
            let entry_rect = Rect::new(0, y_offset, content_width, height);
            let paragraph = Paragraph::new(entry.as_str())
                .style(Style::default().fg(Color::Green))
                .wrap(Wrap { trim: true });
            scroll_view.render_widget(paragraph, entry_rect);
            y_offset += height;
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// EventHandler is implemented on `CooFeedState` rather than `CooFeed`
/// because event handling requires persistent state (scroll position, the
/// stick_to_bottom flag), and `CooFeed` is recreated each frame.
impl EventHandler for CooFeedState {
    type Event = (); // The feed emits no events (scroll handled internally)

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_entry_height_single_line() {
        assert_eq!(entry_height(" coo", 40), 1);
        assert_eq!(entry_height(" coo coo coo", 40), 1);
    }

    #[test]
    fn test_entry_height_wraps() {
        // 10 coos at width 16: " coo" is 4 chars, 40 chars total, trimmed
        // to 39 — needs more than one line.
        let text = " coo".repeat(10);
        assert!(entry_height(&text, 16) > 1);
    }

    #[test]
    fn test_entry_height_zero_width() {
        assert_eq!(entry_height(" coo", 0), 1);
    }

    #[test]
    fn test_update_heights_appends_only_new_entries() {
        let mut state = CooFeedState::new();
        let mut entries = vec![" coo".to_string()];
        state.update_heights(&entries, 40);
        assert_eq!(state.heights.len(), 1);

        entries.push(" coo coo".to_string());
        state.update_heights(&entries, 40);
        assert_eq!(state.heights.len(), 2);
    }

    #[test]
    fn test_update_heights_invalidates_on_width_change() {
        let mut state = CooFeedState::new();
        let entries = vec![" coo".repeat(10)];
        state.update_heights(&entries, 80);
        let wide = state.heights[0];

        state.update_heights(&entries, 12);
        let narrow = state.heights[0];
        assert!(narrow > wide);
    }

    #[test]
    fn test_scroll_up_detaches_from_bottom() {
        let mut state = CooFeedState::new();
        assert!(state.stick_to_bottom);
        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);
    }

    #[test]
    fn test_scroll_down_repins_at_bottom() {
        let mut state = CooFeedState::new();
        state.stick_to_bottom = false;
        // No content: max scroll is 0, any scroll-down lands at the bottom
        state.handle_event(&TuiEvent::ScrollDown);
        assert!(state.stick_to_bottom);
    }

    #[test]
    fn test_render_shows_entries() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = CooFeedState::new();
        let entries = vec![" coo".to_string(), " coo coo".to_string()];

        terminal
            .draw(|f| {
                let mut feed = CooFeed::new(&mut state, &entries);
                feed.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("coo coo"));
    }

    #[test]
    fn test_render_empty_feed() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = CooFeedState::new();
        let entries: Vec<String> = Vec::new();

        terminal
            .draw(|f| {
                let mut feed = CooFeed::new(&mut state, &entries);
                feed.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("The pigeon waits."));
    }
}
