//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from session state.
//! A view model contains no business logic, only display-ready data: the
//! renderer consumes it without ever touching `SessionState` fields directly.
//!
//! View models are created via
//! [`SessionState::compute_viewmodel`](crate::SessionState::compute_viewmodel).

/// Complete view model for one render of the list view.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    /// Rows to display, one per visible item, in list order.
    pub rows: Vec<ItemRow>,

    /// Header information (filter label, visible count).
    pub header: HeaderInfo,

    /// Footer information (context command hints).
    pub footer: FooterInfo,

    /// Pending input buffer, shown when a draft exists.
    pub prompt: Option<PromptInfo>,

    /// Empty-state message, shown when the view has no rows.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single item row.
#[derive(Debug, Clone)]
pub struct ItemRow {
    /// 1-based position within the visible list.
    ///
    /// REPL commands address items by this ordinal; the frontend resolves it
    /// back to the stable `id` before dispatching.
    pub ordinal: usize,

    /// Stable item identifier.
    pub id: i64,

    /// Item text content.
    pub text: String,

    /// Whether the item is completed (rendered struck through).
    pub completed: bool,

    /// Whether the item is soft-deleted (rendered dimmed).
    pub removed: bool,

    /// Human-readable creation age (e.g. "5m ago").
    pub age: String,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, e.g. " All Tasks (3) ".
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Command hints, e.g. "add <text>: new  check <n>: done".
    pub commands: String,
}

/// Pending-draft display information.
#[derive(Debug, Clone)]
pub struct PromptInfo {
    /// Current input buffer text.
    pub buffer: String,
}

/// Empty-state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "Trash is empty").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
