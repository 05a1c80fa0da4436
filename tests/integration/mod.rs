//! Integration test suite for wikigen
//!
//! End-to-end tests that run the `wikigen` binary against a fixture project
//! written into a temporary directory.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: Page rendering and writing, language selection, dry runs
//! - **list**: Page listing
//! - **validate**: Validation command and failure reporting

mod common;

mod generate;
mod list;
mod validate;
