//! Common component tests.
//!
//! This module contains unit tests for the shared building blocks: errors,
//! sign extension, and machine-wide constants.


/// Unit tests for error display, context wrapping, and source chains.
pub mod error;
