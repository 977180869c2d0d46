//! # Dump Rendering Tests
//!
//! Register and memory listings: layout, aliases, and filters.

use legv8_core::config::DumpConfig;
use legv8_core::core::arch::gpr::RegisterFile;
use legv8_core::sim::dump::{MemoryDump, RegisterDump, register_name};
use legv8_core::soc::memory::DataMemory;
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

const ZERO: &str = "0x0000000000000000";

#[test]
fn register_names_alias_sp_and_xzr() {
    assert_eq!(register_name(0), "X0");
    assert_eq!(register_name(27), "X27");
    assert_eq!(register_name(28), "SP");
    assert_eq!(register_name(29), "X29");
    assert_eq!(register_name(30), "X30");
    assert_eq!(register_name(31), "XZR");
}

#[test]
fn register_dump_has_sixteen_two_column_rows() {
    let regs = RegisterFile::new();
    let text = RegisterDump::new(&regs).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], format!("X0 : {ZERO}    X1 : {ZERO}"));
    assert_eq!(lines[14], format!("SP : {ZERO}    X29: {ZERO}"));
    assert_eq!(lines[15], format!("X30: {ZERO}    XZR: {ZERO}"));
}

#[test]
fn register_dump_prints_twos_complement_hex() {
    let mut regs = RegisterFile::new();
    regs.write(2, -1).unwrap();
    regs.write(3, 0x2A).unwrap();
    regs.write(31, 0x55).unwrap();
    let text = RegisterDump::new(&regs).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[1],
        "X2 : 0xffffffffffffffff    X3 : 0x000000000000002a"
    );
    assert!(lines[15].ends_with(&format!("XZR: {ZERO}")));
}

#[test]
fn memory_dump_default_filters() {
    let mut mem = DataMemory::new();
    mem.write(0x18, 7).unwrap();
    mem.write(0x08, -1).unwrap();
    mem.write(0x10, 0).unwrap();
    mem.write(0x0C, 3).unwrap();

    let filter = DumpConfig::default();
    let dump = MemoryDump::new(&mem, &filter);
    assert_eq!(dump.entries(), vec![(0x08, -1), (0x18, 7)]);
    assert_eq!(
        dump.to_string(),
        "0x0000000000000008: 0xffffffffffffffff\n\
         0x0000000000000018: 0x0000000000000007\n"
    );
}

#[test]
fn memory_dump_unfiltered_shows_everything() {
    let mut mem = DataMemory::new();
    mem.write(0x10, 0).unwrap();
    mem.write(0x0C, 3).unwrap();

    let filter = DumpConfig {
        nonzero_only: false,
        aligned_only: false,
    };
    assert_eq!(
        MemoryDump::new(&mem, &filter).entries(),
        vec![(0x0C, 3), (0x10, 0)]
    );
}

#[test]
fn empty_memory_dump() {
    let mem = DataMemory::new();
    let filter = DumpConfig::default();
    assert_eq!(MemoryDump::new(&mem, &filter).to_string(), "(empty)\n");
}

#[test]
fn machine_dumps_use_machine_state() {
    let ctx = TestContext::new().with_reg(28, 0x1000).with_word(0x20, 5);
    assert!(
        ctx.machine
            .register_dump()
            .to_string()
            .contains("SP : 0x0000000000001000")
    );
    assert_eq!(
        ctx.machine.memory_dump().to_string(),
        "0x0000000000000020: 0x0000000000000005\n"
    );
}
