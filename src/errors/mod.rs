//! Centralized error handling for the playlist regrouper
//!
//! Only conditions that must abort a run are represented here. Everything
//! the pipeline tolerates (missing favorites file, malformed favorite
//! patterns, headers without a display name) is logged and skipped instead.
//!
//! # Error Categories
//!
//! - **I/O Errors**: the input playlist cannot be read, or the output
//!   location cannot be created or written
//! - **Configuration Errors**: the TOML file is unreadable, malformed, or
//!   carries labels that cannot be spliced into a header
//!
//! # Usage
//!
//! ```rust
//! use m3u_regroup::errors::{AppError, AppResult};
//!
//! fn example_function(label: &str) -> AppResult<String> {
//!     if label.is_empty() {
//!         return Err(AppError::configuration("label must not be empty"));
//!     }
//!     Ok(label.to_string())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
