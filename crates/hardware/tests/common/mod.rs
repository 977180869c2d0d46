//! # Shared Test Infrastructure
//!
//! Utilities shared by the unit tests.

/// `TestContext` harness around a [`Machine`](legv8_core::Machine).
pub mod harness;
