//! Todo item domain model.
//!
//! This module defines the core [`Item`] type representing a single todo entry.
//! Items carry a completion flag and a soft-deletion flag, so a deleted entry
//! stays restorable until the trash is purged. Each item gets a clock-derived
//! identifier at creation time and keeps it for its whole lifetime.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Nanoseconds per second, used to recover the creation time from an id.
const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Represents one todo entry.
///
/// An item is a piece of text plus two lifecycle flags. `completed` marks the
/// task as done; `removed` soft-deletes it without losing the data, so the
/// trash view can restore it later. Neither flag affects the other: a
/// completed item can sit in the trash.
///
/// # Fields
///
/// - `id`: Clock-derived identifier, assigned once at creation and never
///   reassigned. Used only as an equality key when actions address an item.
/// - `text`: Arbitrary non-empty content (whitespace-only counts as content).
/// - `completed`: Whether the task is done. Defaults to false.
/// - `removed`: Soft-delete flag. Toggled, never set, so re-applying deletion
///   restores the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub removed: bool,
}

impl Item {
    /// Creates a new item with the given text and default flags.
    ///
    /// The identifier is taken from the wall clock at nanosecond resolution.
    /// Identifiers created in the same session are unique unless two creations
    /// land on the same clock reading, which is accepted as a known edge case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ticklist::Item;
    ///
    /// let item = Item::new("buy milk");
    /// assert_eq!(item.text, "buy milk");
    /// assert!(!item.completed);
    /// assert!(!item.removed);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            text: text.into(),
            completed: false,
            removed: false,
        }
    }

    /// Returns the creation time as Unix seconds, recovered from the id.
    #[must_use]
    pub const fn created_at(&self) -> i64 {
        self.id / NANOS_PER_SECOND
    }

    /// Returns a human-readable string describing how long ago the item was
    /// created.
    ///
    /// The format varies with elapsed time:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    ///
    /// # Examples
    ///
    /// ```
    /// use ticklist::Item;
    ///
    /// let item = Item::new("water the plants");
    /// assert_eq!(item.time_ago(), "just now");
    /// ```
    #[must_use]
    pub fn time_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.created_at();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// Derives a fresh identifier from the wall clock.
///
/// Nanosecond timestamps stay representable in an `i64` until the year 2262;
/// past that point chrono reports overflow and we fall back to microseconds.
fn next_id() -> i64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros())
}
