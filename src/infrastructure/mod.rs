//! Infrastructure layer.
//!
//! Platform-specific utilities with no domain knowledge. Currently just
//! filesystem path resolution.

pub mod paths;

pub use paths::{config_file, data_dir, expand_tilde, home_dir};
