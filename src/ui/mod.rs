//! User interface rendering layer.
//!
//! This module turns state snapshots into ANSI-styled terminal output through
//! a declarative pipeline:
//!
//! ```text
//! SessionState → compute_viewmodel → ListViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable component renderers (header, list, footer)
//! - [`helpers`]: Shared text utilities (centering, truncation)
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{EmptyState, FooterInfo, HeaderInfo, ItemRow, ListViewModel, PromptInfo};
