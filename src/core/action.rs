//! # Actions
//!
//! Everything that can happen in coop becomes an `Action`.
//! Reveal button clicked? That's `Action::ClickReveal`.
//! Pigeon petted? That's `Action::PetPigeon`.
//!
//! The `update()` function takes the current state and an action, applies
//! the change, and returns an `Effect` telling the caller what to do next.
//! No side effects here. Terminal I/O happens in the `tui` adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: drive any click sequence through
//! `update()` and assert on the resulting state.

use log::debug;

use crate::core::state::App;

/// Everything the user can do to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A click on the reveal/hide button.
    ClickReveal,
    /// A click on the pet button.
    PetPigeon,
    /// Leave the coop.
    Quit,
}

/// What the caller should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// The reducer: applies one action to the app state.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::ClickReveal => {
            app.reveal.click();
            app.status_message = if app.reveal.is_visible() {
                String::from("Number revealed")
            } else {
                String::from("Number hidden")
            };
            Effect::None
        }
        Action::PetPigeon => {
            app.coo.pet();
            app.status_message = String::from("coo!");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
