//! Actions accepted by the state transition function.
//!
//! This module defines the [`Action`] type, the complete set of state
//! mutations the session supports. Actions are produced by the surrounding UI
//! layer (the REPL frontend in this crate) and consumed by
//! [`transition`](crate::app::transition::transition): the core never mutates state any
//! other way.
//!
//! # Example
//!
//! ```
//! use ticklist::{transition, Action, SessionState};
//!
//! let state = SessionState::new();
//! let state = transition(state, Action::SetInputText("buy milk".to_string()));
//! let state = transition(state, Action::Submit);
//! assert_eq!(state.items.len(), 1);
//! ```

use super::filter::Filter;

/// A single state mutation dispatched into the session core.
///
/// Every variant maps (current state, action) to the next state through
/// [`transition`](crate::app::transition::transition). Actions that address an item by id
/// silently do nothing when the id is absent; there is no error surface for
/// malformed dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the not-yet-submitted input buffer.
    SetInputText(String),

    /// Turns the input buffer into a new item.
    ///
    /// No-op when the buffer is empty. Whitespace-only text is accepted as
    /// valid content. The new item is prepended, so the list stays newest
    /// first, and the buffer is cleared.
    Submit,

    /// Replaces the text of the item with the given id.
    EditItem {
        /// Identifier of the item to edit.
        id: i64,
        /// New text content.
        text: String,
    },

    /// Sets the completion flag of the item with the given id.
    SetCompleted {
        /// Identifier of the item to update.
        id: i64,
        /// New completion state.
        completed: bool,
    },

    /// Flips the soft-delete flag of the item with the given id.
    ///
    /// Applying this twice returns the item to its original state, which is
    /// how the trash view restores items.
    ToggleDeleted {
        /// Identifier of the item to toggle.
        id: i64,
    },

    /// Permanently drops every item whose soft-delete flag is set.
    PurgeDeleted,

    /// Replaces the active view filter.
    SetFilter(Filter),
}
