//! Core types for wikigen
//!
//! This module holds the run-level error type and the user-facing error
//! reporting used by the binary.
//!
//! # Error Management
//!
//! - **Strongly-typed errors** ([`WikigenError`]) for failures that stop a command
//! - **User-friendly contexts** ([`ErrorContext`]) with actionable suggestions
//! - [`user_friendly_error`] converts any `anyhow::Error` for terminal display
//!
//! Macro and page problems never surface here: they are logged where they
//! happen and the generator moves on to the next macro or page.

pub mod error;

pub use error::{ErrorContext, WikigenError, user_friendly_error};
