//! Session state container and view model computation.
//!
//! This module defines [`SessionState`], the single aggregate owned by the
//! frontend for the lifetime of a run, along with the derived-view helpers the
//! UI layer renders from. It is the single source of truth: the only way it
//! changes is through [`transition`](crate::app::transition::transition).
//!
//! # State Components
//!
//! - **Input buffer**: Text typed but not yet submitted
//! - **Items**: The full item list, newest first, including soft-deleted items
//! - **Active filter**: Which subset of items the current view shows
//!
//! # Derived Views
//!
//! The visible item list is never stored. [`SessionState::visible_items`]
//! recomputes it from the full list on every render, and
//! [`SessionState::compute_viewmodel`] turns the snapshot into a renderable
//! [`ListViewModel`] with header counts, footer hints, and per-row display
//! data.
//!
//! # Example
//!
//! ```
//! use ticklist::{Filter, SessionState};
//!
//! let state = SessionState::new();
//! assert!(state.items.is_empty());
//! assert_eq!(state.active_filter, Filter::All);
//! ```

use super::filter::Filter;
use crate::domain::Item;
use crate::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, ItemRow, ListViewModel, PromptInfo};
use serde::{Deserialize, Serialize};

/// The aggregate session state.
///
/// Created once at session start with an empty buffer, no items, and the
/// `All` filter. Lives only in memory; nothing is persisted across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Text entered but not yet submitted as an item.
    pub input_buffer: String,

    /// All items ever created this session, minus purged ones.
    ///
    /// Ordered newest first: `Submit` prepends. Soft-deleted items stay in
    /// the list until `PurgeDeleted` drops them.
    pub items: Vec<Item>,

    /// The filter the current view is computed from.
    pub active_filter: Filter,
}

impl SessionState {
    /// Creates the initial session state.
    ///
    /// # Examples
    ///
    /// ```
    /// use ticklist::SessionState;
    ///
    /// let state = SessionState::new();
    /// assert_eq!(state.input_buffer, "");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the items visible under the active filter, in list order.
    ///
    /// This is a derived view over the full item list; it borrows rather than
    /// clones, and calling it never changes stored state.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&Item> {
        let _span = tracing::debug_span!(
            "visible_items",
            total_items = self.items.len(),
            filter = ?self.active_filter
        )
        .entered();

        let visible: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| self.active_filter.matches(item))
            .collect();

        tracing::debug!(visible_count = visible.len(), "view filter applied");

        visible
    }

    /// Returns the number of soft-deleted items currently in the list.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.items.iter().filter(|item| item.removed).count()
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Produces one [`ItemRow`] per visible item (with a 1-based ordinal the
    /// REPL uses to address items), a header with the filter label and count,
    /// footer hints that vary with the active filter, a prompt section when
    /// the input buffer holds a draft, and an empty-state message when the
    /// view has nothing to show.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ListViewModel {
        let visible = self.visible_items();

        let rows: Vec<ItemRow> = visible
            .iter()
            .enumerate()
            .map(|(idx, item)| ItemRow {
                ordinal: idx + 1,
                id: item.id,
                text: item.text.clone(),
                completed: item.completed,
                removed: item.removed,
                age: item.time_ago(),
            })
            .collect();

        let empty_state = if rows.is_empty() {
            let (message, subtitle) = self.active_filter.empty_message();
            Some(EmptyState {
                message: message.to_string(),
                subtitle: subtitle.to_string(),
            })
        } else {
            None
        };

        let prompt = if self.input_buffer.is_empty() {
            None
        } else {
            Some(PromptInfo {
                buffer: self.input_buffer.clone(),
            })
        };

        ListViewModel {
            rows,
            header: self.compute_header(visible.len()),
            footer: self.compute_footer(),
            prompt,
            empty_state,
        }
    }

    /// Computes the header line from the active filter and visible count.
    fn compute_header(&self, visible_count: usize) -> HeaderInfo {
        HeaderInfo {
            title: format!(" {} ({visible_count}) ", self.active_filter.label()),
        }
    }

    /// Computes context-appropriate command hints for the footer.
    ///
    /// Mirrors what the view allows: the completed view offers no submit
    /// commands, and the trash view swaps them for restore and purge.
    fn compute_footer(&self) -> FooterInfo {
        let commands = match self.active_filter {
            Filter::All | Filter::Uncompleted => {
                "add <text>: new  check <n>: done  rm <n>: trash  filter <view>  q: quit"
                    .to_string()
            }
            Filter::Completed => {
                "uncheck <n>: reopen  rm <n>: trash  filter <view>  q: quit".to_string()
            }
            Filter::Deleted => {
                "rm <n>: restore  purge: empty trash  filter <view>  q: quit".to_string()
            }
        };

        FooterInfo { commands }
    }
}
