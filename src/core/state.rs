//! # Application State
//!
//! Core business state for coop. This module contains domain logic only -
//! no TUI-specific types. Presentation state (focus, scroll) lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── reveal: RevealToggle    // visibility state for the number panel
//! ├── coo: CooCounter         // click counter + appended coo entries
//! └── status_message: String  // title bar text
//! ```
//!
//! Each handler owns its state exclusively: `RevealToggle` is the only
//! owner of the visibility flag, `CooCounter` the only owner of the click
//! count. Fields are private, so nothing outside this module can mutate
//! them except through the click methods driven by `update(state, action)`
//! in action.rs.

use crate::core::config::ResolvedConfig;

/// Text shown in the number panel while no real number is configured.
pub const PLACEHOLDER_TEXT: &str = "Not yet live - check back later!";
/// Button label while the panel is hidden.
pub const LABEL_REVEAL: &str = "Reveal Number";
/// Button label while the panel is visible.
pub const LABEL_HIDE: &str = "Hide Number";
/// The unit of pigeon appreciation. Entry k of the feed is this, k times.
pub const COO: &str = " coo";

/// The two states of the number panel. Initial state is `Hidden`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Reveal/hide handler for the contact number panel.
///
/// A two-state machine that flips on every click. The button label is
/// derived from the state rather than stored, so label and visibility can
/// never disagree.
pub struct RevealToggle {
    visibility: Visibility,
    /// What the panel shows when revealed: a configured number, or the
    /// fixed placeholder.
    revealed_text: String,
}

impl RevealToggle {
    pub fn new(number: Option<String>, placeholder: String) -> Self {
        Self {
            visibility: Visibility::Hidden,
            revealed_text: number.unwrap_or(placeholder),
        }
    }

    /// One click on the reveal button: flip the state.
    pub fn click(&mut self) {
        self.visibility = match self.visibility {
            Visibility::Hidden => Visibility::Visible,
            Visibility::Visible => Visibility::Hidden,
        };
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Current button label. Reads "Hide Number" iff the panel is visible.
    pub fn label(&self) -> &'static str {
        match self.visibility {
            Visibility::Hidden => LABEL_REVEAL,
            Visibility::Visible => LABEL_HIDE,
        }
    }

    /// Panel text, present only while visible.
    pub fn display_text(&self) -> Option<&str> {
        match self.visibility {
            Visibility::Hidden => None,
            Visibility::Visible => Some(&self.revealed_text),
        }
    }
}

/// Click counter handler for the pet button.
///
/// Counts clicks starting at 0 and appends one feed entry per click whose
/// text is [`COO`] repeated `clicks` times. Entries accumulate for the
/// whole session; the counter never resets.
#[derive(Default)]
pub struct CooCounter {
    clicks: u64,
    entries: Vec<String>,
}

impl CooCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// One click on the pet button: increment, then append the new entry.
    /// Returns the entry that was just appended.
    pub fn pet(&mut self) -> &str {
        self.clicks += 1;
        self.entries.push(COO.repeat(self.clicks as usize));
        self.entries.last().expect("entry was just pushed")
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

pub struct App {
    pub reveal: RevealToggle,
    pub coo: CooCounter,
    pub status_message: String,
}

impl App {
    pub fn new(number: Option<String>, placeholder: String) -> Self {
        Self {
            reveal: RevealToggle::new(number, placeholder),
            coo: CooCounter::new(),
            status_message: String::from("Coo!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.number.clone(), config.placeholder_text.clone())
    }
}
