//! # Error Tests
//!
//! This module contains unit tests for the error taxonomy: display text,
//! context wrapping, and source chains.

use std::error::Error;

use legv8_core::common::{RegisterAccess, SimError};

#[test]
fn test_invalid_register_index_display() {
    let err = SimError::InvalidRegisterIndex {
        index: 32,
        access: RegisterAccess::Write,
    };
    assert_eq!(err.to_string(), "invalid register index 32 on write");
}

#[test]
fn test_register_access_display() {
    assert_eq!(RegisterAccess::Read.to_string(), "read");
    assert_eq!(RegisterAccess::Write.to_string(), "write");
}

#[test]
fn test_negative_address_display() {
    let err = SimError::NegativeAddress { address: -8 };
    assert!(err.to_string().contains("-8"));
}

#[test]
fn test_invalid_bit_width_display_names_range() {
    let err = SimError::InvalidBitWidth { width: 33, max: 32 };
    assert_eq!(err.to_string(), "invalid bit width 33 (expected 1..=32)");
}

#[test]
fn test_division_by_zero_display() {
    let err = SimError::DivisionByZero {
        dividend: 10,
        divisor: 0,
    };
    assert!(err.to_string().contains("10 / 0"));
}

#[test]
fn test_invalid_program_counter_display_is_hex() {
    let err = SimError::InvalidProgramCounter { address: 0x1002 };
    assert!(err.to_string().contains("0x1002"));
}

#[test]
fn test_with_context_wraps_once() {
    let inner = SimError::NegativeAddress { address: -1 };
    let wrapped = inner.clone().with_context(0x40, 7);
    assert_eq!(
        wrapped,
        SimError::SimulationFailure {
            pc: 0x40,
            cycle: 7,
            source: Box::new(inner.clone()),
        }
    );

    // The innermost context wins; re-wrapping keeps pc 0x40 / cycle 7.
    let rewrapped = wrapped.clone().with_context(0x80, 9);
    assert_eq!(rewrapped, wrapped);
    assert_eq!(rewrapped.root(), &inner);
}

#[test]
fn test_simulation_failure_exposes_source() {
    let wrapped = SimError::DivisionByZero {
        dividend: 1,
        divisor: 0,
    }
    .with_context(0x10, 2);
    let source = wrapped.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("division by zero (1 / 0)"));
    assert!(wrapped.to_string().starts_with("simulation failure at pc 0x0000000000000010, cycle 2"));
}

#[test]
fn test_root_of_unwrapped_error_is_itself() {
    let err = SimError::InvalidBitWidth { width: 0, max: 64 };
    assert_eq!(err.root(), &err);
}
