//! Ticklist: a terminal todo list with soft deletion and filtered views.
//!
//! Ticklist keeps a single in-memory session of todo items, each with a
//! completion flag and a restorable soft-delete flag, viewed through one of
//! four filters. The whole session is driven by a pure state transition
//! function; the interactive frontend only parses commands, dispatches
//! actions, and re-renders from the resulting snapshot.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Interactive frontend (main.rs)                     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  REPL layer (repl/)                                 │  ← Command parsing
//! │  - Line → Command                                   │  ← Ordinal → id
//! │  - Command → Vec<Action>                            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application layer (app/)                           │  ← State core
//! │  - SessionState + Action                            │
//! │  - transition(state, action) → state'               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐       ┌───────────────────┐
//! │ UI Layer (ui/)    │       │ Domain (domain/)  │
//! │ - View models     │       │ - Item model      │
//! │ - Theming         │       │ - Error types     │
//! │ - ANSI rendering  │       └───────────────────┘
//! └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # State Model
//!
//! [`SessionState`] holds the input buffer, the full item list (newest
//! first), and the active [`Filter`]. The only way it changes is through
//! [`transition`], which consumes the current state and an [`Action`] and
//! returns the next state. Filtered views are derived on render and never
//! stored. Nothing persists across runs; the session lives and dies with the
//! process.
//!
//! # Configuration
//!
//! An optional TOML file at `~/.config/ticklist/config.toml`:
//!
//! ```toml
//! theme = "catppuccin-latte"
//! # theme_file = "~/.config/ticklist/my-theme.toml"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```
//! use ticklist::{transition, Action, Filter, SessionState};
//!
//! let state = SessionState::new();
//! let state = transition(state, Action::SetInputText("buy milk".to_string()));
//! let state = transition(state, Action::Submit);
//! let state = transition(state, Action::SetFilter(Filter::Uncompleted));
//!
//! assert_eq!(state.visible_items().len(), 1);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod repl;
pub mod ui;

pub use app::{transition, Action, Filter, SessionState};
pub use domain::{Item, Result, TicklistError};
pub use ui::Theme;

use serde::Deserialize;

/// Application configuration.
///
/// Loaded from the optional config file; every field has a default, so a
/// missing or empty file yields a fully usable configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    ///
    /// Ignored when `theme_file` is set.
    #[serde(default)]
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme`.
    ///
    /// A leading `~` expands to the home directory.
    #[serde(default)]
    pub theme_file: Option<String>,

    /// Tracing level for span export (`trace` through `error`).
    ///
    /// Default: `"info"`.
    #[serde(default)]
    pub trace_level: Option<String>,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// Missing file and parse failures both fall back to defaults; a broken
    /// config should never keep the app from starting.
    #[must_use]
    pub fn load() -> Self {
        let path = infrastructure::paths::config_file();
        if !path.exists() {
            return Self::default();
        }

        Self::from_file(&path).unwrap_or_default()
    }

    /// Loads the configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TicklistError::Io`] when the file cannot be read and
    /// [`TicklistError::Config`] when its content does not parse.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| TicklistError::Config(format!("failed to parse config TOML: {e}")))
    }
}

/// Resolves the active theme from the configuration.
///
/// Resolution order: custom `theme_file`, then built-in `theme` by name, then
/// the default. Failures log at debug level and fall through rather than
/// abort; a typo in a theme name costs colors, not the session.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::paths::expand_tilde(theme_file);
        match Theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            }
        }
    } else if let Some(theme_name) = &config.theme {
        match Theme::from_name(theme_name) {
            Some(theme) => return theme,
            None => {
                tracing::debug!(theme_name = %theme_name, "unknown theme name, using default");
            }
        }
    }

    Theme::default()
}

/// Creates the initial session state.
///
/// One constructor call at startup; the frontend owns the returned value and
/// threads it through [`transition`] for the rest of the session. No ambient
/// globals are involved.
#[must_use]
pub fn initialize(config: &Config) -> SessionState {
    tracing::debug!(theme = ?config.theme, "initializing session");
    SessionState::new()
}
