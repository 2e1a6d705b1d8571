//! The state transition function.
//!
//! This module implements the single entry point through which session state
//! changes. The function is pure in the ownership-passing sense: it consumes
//! the current state, never observes anything but its arguments, and returns
//! a fully formed next state. When no change applies, the input value comes
//! back unchanged.
//!
//! # Update Discipline
//!
//! Actions that address an item by id follow an explicit immutable-update
//! pattern: locate the matching record, build a replacement with struct-update
//! syntax, and substitute it positionally. Non-matching records pass through
//! untouched. Lookups are plain linear scans; the list is small by design and
//! carries no index.
//!
//! # Defensive Defaults
//!
//! Malformed dispatches never fail loudly. Submitting an empty buffer and
//! addressing an id that is not in the list both return the state unchanged.
//!
//! # Example
//!
//! ```
//! use ticklist::{transition, Action, SessionState};
//!
//! let state = SessionState::new();
//! let state = transition(state, Action::SetInputText("water plants".to_string()));
//! let state = transition(state, Action::Submit);
//!
//! assert_eq!(state.items[0].text, "water plants");
//! assert_eq!(state.input_buffer, "");
//! ```

use super::actions::Action;
use super::state::SessionState;
use crate::domain::Item;

/// Maps (current state, action) to the next state.
///
/// Runs to completion synchronously on each dispatched action; there is no
/// queueing, no retry, and no asynchronous behavior. The caller owns the
/// returned state and decides when to re-render from it.
#[must_use]
pub fn transition(state: SessionState, action: Action) -> SessionState {
    let _span = tracing::debug_span!("transition", action = ?action).entered();

    let SessionState {
        input_buffer,
        items,
        active_filter,
    } = state;

    match action {
        Action::SetInputText(text) => SessionState {
            input_buffer: text,
            items,
            active_filter,
        },

        Action::Submit => {
            if input_buffer.is_empty() {
                tracing::debug!("empty input buffer, submit ignored");
                return SessionState {
                    input_buffer,
                    items,
                    active_filter,
                };
            }

            let item = Item::new(input_buffer);
            tracing::debug!(id = item.id, "item created");

            let mut next_items = Vec::with_capacity(items.len() + 1);
            next_items.push(item);
            next_items.extend(items);

            SessionState {
                input_buffer: String::new(),
                items: next_items,
                active_filter,
            }
        }

        Action::EditItem { id, text } => {
            let items = items
                .into_iter()
                .map(|item| {
                    if item.id == id {
                        Item {
                            text: text.clone(),
                            ..item
                        }
                    } else {
                        item
                    }
                })
                .collect();

            SessionState {
                input_buffer,
                items,
                active_filter,
            }
        }

        Action::SetCompleted { id, completed } => {
            let items = items
                .into_iter()
                .map(|item| {
                    if item.id == id {
                        Item { completed, ..item }
                    } else {
                        item
                    }
                })
                .collect();

            SessionState {
                input_buffer,
                items,
                active_filter,
            }
        }

        Action::ToggleDeleted { id } => {
            let items = items
                .into_iter()
                .map(|item| {
                    if item.id == id {
                        Item {
                            removed: !item.removed,
                            ..item
                        }
                    } else {
                        item
                    }
                })
                .collect();

            SessionState {
                input_buffer,
                items,
                active_filter,
            }
        }

        Action::PurgeDeleted => {
            let before = items.len();
            let items: Vec<Item> = items.into_iter().filter(|item| !item.removed).collect();

            tracing::debug!(purged = before - items.len(), "trash emptied");

            SessionState {
                input_buffer,
                items,
                active_filter,
            }
        }

        Action::SetFilter(filter) => SessionState {
            input_buffer,
            items,
            active_filter: filter,
        },
    }
}
