//! # Statistics Tests
//!
//! Counters and the rendered summary.

use legv8_core::core::units::alu::AluOp;
use legv8_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::harness::TestContext;

#[test]
fn default_is_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.steps_retired, 0);
    assert_eq!(stats.faults, 0);
}

#[test]
fn summary_contains_every_section() {
    let stats = SimStats {
        cycles: 10,
        steps_retired: 9,
        alu_ops: 5,
        flag_setting_ops: 2,
        loads: 3,
        stores: 1,
        zero_reg_writes_discarded: 4,
        faults: 1,
    };
    let text = stats.summary();
    assert!(text.contains("sim_cycles               10"));
    assert!(text.contains("sim_steps                9"));
    assert!(text.contains("ops.alu_set_flags        2"));
    assert!(text.contains("xzr_writes_discarded     4"));
    assert_eq!(text.lines().count(), 8);
    assert_eq!(STATS_SECTIONS.len(), 3);
}

#[test]
fn summary_sections_filters() {
    let stats = SimStats::default();
    let text = stats.summary_sections(&["anomalies"]);
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("xzr_writes_discarded"));
    assert!(stats.summary_sections(&["nope"]).is_empty());
}

#[test]
fn machine_updates_counters() {
    let mut ctx = TestContext::new().with_word(0, 3);
    ctx.machine
        .step(|m| {
            let v = m.load(1, 0)?;
            let _ = m.execute_alu(AluOp::Add, 2, v, v, true)?;
            m.store(2, 8)
        })
        .unwrap();
    let stats = &ctx.machine.stats;
    assert_eq!(stats.cycles, 1);
    assert_eq!(stats.steps_retired, 1);
    assert_eq!(stats.loads, 1);
    assert_eq!(stats.alu_ops, 1);
    assert_eq!(stats.flag_setting_ops, 1);
    assert_eq!(stats.stores, 1);
    assert_eq!(ctx.word(8), 6);
}
