//! Application layer: session state, actions, and the transition function.
//!
//! This module holds the state core. The surrounding frontend dispatches
//! [`Action`] values into [`transition`] and re-renders from the resulting
//! [`SessionState`] snapshot; nothing else in the crate mutates state.
//!
//! # Organization
//!
//! - [`state`]: The [`SessionState`] aggregate and view model computation
//! - [`actions`]: The [`Action`] enum accepted by the core
//! - [`transition`](mod@transition): The pure (state, action) -> state mapping
//! - [`filter`]: The [`Filter`] view predicate

pub mod actions;
pub mod filter;
pub mod state;
pub mod transition;

pub use actions::Action;
pub use filter::Filter;
pub use state::SessionState;
pub use transition::transition;
