//! Domain layer for ticklist.
//!
//! This module contains the core domain types for the application, independent
//! of UI or infrastructure concerns. Business rules about items live here;
//! everything about how they are displayed or dispatched lives elsewhere.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Todo item model and lifecycle helpers
//!
//! # Examples
//!
//! ```
//! use ticklist::domain::{Item, Result};
//!
//! fn create_item() -> Result<Item> {
//!     Ok(Item::new("buy milk"))
//! }
//! ```

pub mod error;
pub mod item;

pub use error::{Result, TicklistError};
pub use item::Item;
