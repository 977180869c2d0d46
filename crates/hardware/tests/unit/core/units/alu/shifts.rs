//! ALU Shift Operation Tests.
//!
//! LSL/LSR/ASR with amounts taken from the low 6 bits of operand B.

use legv8_core::core::units::alu::{Alu, AluOp};
use rstest::rstest;

fn shift(op: AluOp, a: i64, b: i64) -> i64 {
    Alu::compute(op, a, b).unwrap().result
}

#[rstest]
#[case(AluOp::Lsl, 1, 4, 0x10)]
#[case(AluOp::Lsl, 1, 63, i64::MIN)]
#[case(AluOp::Lsl, -1, 1, -2)]
#[case(AluOp::Lsl, 0x8000_0000_0000_0001_u64 as i64, 1, 2)]
#[case(AluOp::Lsr, 0x100, 4, 0x10)]
#[case(AluOp::Lsr, -1, 63, 1)]
#[case(AluOp::Lsr, i64::MIN, 1, 0x4000_0000_0000_0000)]
#[case(AluOp::Asr, i64::MIN, 1, 0xC000_0000_0000_0000_u64 as i64)]
#[case(AluOp::Asr, -16, 2, -4)]
#[case(AluOp::Asr, -1, 63, -1)]
#[case(AluOp::Asr, 0x100, 4, 0x10)]
fn shift_vectors(#[case] op: AluOp, #[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    assert_eq!(shift(op, a, b), expected);
}

#[test]
fn shift_by_zero_is_identity() {
    for op in [AluOp::Lsl, AluOp::Lsr, AluOp::Asr] {
        assert_eq!(shift(op, -12345, 0), -12345);
    }
}

#[test]
fn shift_amount_uses_low_six_bits() {
    // 64 masks to 0, 65 to 1, -1 to 63.
    assert_eq!(shift(AluOp::Lsl, 1, 64), 1);
    assert_eq!(shift(AluOp::Lsl, 1, 65), 2);
    assert_eq!(shift(AluOp::Lsr, i64::MIN, -1), 1);
    assert_eq!(shift(AluOp::Asr, i64::MIN, 127), -1);
}

#[test]
fn lsr_and_asr_differ_only_for_negative_values() {
    assert_eq!(shift(AluOp::Lsr, 0x7F00, 8), shift(AluOp::Asr, 0x7F00, 8));
    assert_ne!(shift(AluOp::Lsr, -256, 8), shift(AluOp::Asr, -256, 8));
}

#[test]
fn shifts_derive_n_and_z_only() {
    let out = Alu::compute(AluOp::Lsl, 1, 63).unwrap();
    assert!(out.negative);
    assert!(!out.zero);
    assert!(!out.carry);
    assert!(!out.overflow);

    let out = Alu::compute(AluOp::Lsr, 1, 1).unwrap();
    assert!(out.zero);
}
