//! Filter modes determining which items are displayed.
//!
//! This module defines the [`Filter`] enum that selects the visible subset of
//! the item list. A filter is a view predicate only: it never alters stored
//! items, and the visible list is recomputed from the full item list on every
//! render.

use crate::domain::{Item, TicklistError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// View predicate selecting a subset of items for display.
///
/// The completion filters ignore the soft-delete flag on purpose: a completed
/// item that was moved to the trash still shows up under [`Filter::Completed`].
/// Only [`Filter::All`] hides removed items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item that has not been soft-deleted.
    #[default]
    All,

    /// Items with `completed == true`, regardless of deletion.
    Completed,

    /// Items with `completed == false`, regardless of deletion.
    Uncompleted,

    /// Items sitting in the trash (`removed == true`).
    Deleted,
}

impl Filter {
    /// Returns whether `item` belongs to this filter's visible subset.
    ///
    /// # Examples
    ///
    /// ```
    /// use ticklist::{Filter, Item};
    ///
    /// let mut item = Item::new("buy milk");
    /// item.completed = true;
    /// item.removed = true;
    ///
    /// assert!(!Filter::All.matches(&item));
    /// assert!(Filter::Completed.matches(&item));
    /// assert!(Filter::Deleted.matches(&item));
    /// ```
    #[must_use]
    pub const fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => !item.removed,
            Self::Completed => item.completed,
            Self::Uncompleted => !item.completed,
            Self::Deleted => item.removed,
        }
    }

    /// Returns the display label used in the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::Completed => "Completed",
            Self::Uncompleted => "Uncompleted",
            Self::Deleted => "Trash",
        }
    }

    /// Returns the empty-state message and subtitle for this view.
    #[must_use]
    pub const fn empty_message(self) -> (&'static str, &'static str) {
        match self {
            Self::All => ("No tasks yet", "Type 'add <text>' to create one"),
            Self::Completed => ("Nothing completed", "Finish a task with 'check <n>'"),
            Self::Uncompleted => ("All caught up", "Every task is completed"),
            Self::Deleted => ("Trash is empty", "Soft-delete a task with 'rm <n>'"),
        }
    }
}

impl FromStr for Filter {
    type Err = TicklistError;

    /// Parses a filter from its user-facing name.
    ///
    /// Accepts the canonical names plus the short aliases shown in the footer:
    /// `all`, `completed`/`done`, `uncompleted`/`todo`, `deleted`/`trash`.
    ///
    /// # Errors
    ///
    /// Returns [`TicklistError::Command`] for unrecognized names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" | "done" => Ok(Self::Completed),
            "uncompleted" | "todo" => Ok(Self::Uncompleted),
            "deleted" | "trash" => Ok(Self::Deleted),
            other => Err(TicklistError::Command(format!(
                "unknown filter '{other}' (expected all, done, todo, or trash)"
            ))),
        }
    }
}
