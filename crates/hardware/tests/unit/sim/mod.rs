//! # Simulation Tests
//!
//! Tests for the machine wrapper and its diagnostic renderers.

/// Unit tests for register and memory dump rendering.
pub mod dump;
