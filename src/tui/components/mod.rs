//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as struct fields:
//! - `TitleBar`: Top status line showing pet count and status text
//! - `Button`: A clickable control with a label and focus highlight
//! - `NumberPanel`: The reveal target — blank while hidden, text while visible
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and are recreated each frame around a
//! persistent state struct:
//! - `CooFeed`: Scrollable list of appended coo entries (`CooFeedState`
//!   persists scroll position and layout cache in `TuiState`)
//!
//! Components receive external data as props, not by reaching into global
//! state. This keeps dependencies explicit and each component testable on
//! its own with a `TestBackend`.

mod button;
pub use button::Button;
mod coo_feed;
pub use coo_feed::{CooFeed, CooFeedState};
mod number_panel;
pub use number_panel::NumberPanel;
mod title_bar;
pub use title_bar::TitleBar;
