//! # Deskbot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the Deskbot application. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `DeskbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the two domains the application can fail in:
//! - Configuration errors (malformed config files)
//! - Response-resource errors (a data file missing or unreadable)
//!
//! Note what is *not* here: a failed keyword lookup is never an error — it is
//! the expected fallback path into the default-response pool — and a response
//! block that reaches end-of-file without a terminating blank line is
//! recovered inside the parser rather than surfaced. By the time
//! `Responder::generate` can be called, the store is valid (possibly
//! trivially, with zero mapped keywords and one synthetic default), so
//! `generate` itself has no error channel at all.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Report a data file that could not be opened, without aborting.
//! tracing::warn!(
//!     "{}",
//!     DeskbotError::ResourceUnavailable { path: path.to_path_buf(), source: err }
//! );
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Deskbot application.
#[derive(Error, Debug)]
pub enum DeskbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Response resource '{}' unavailable: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
