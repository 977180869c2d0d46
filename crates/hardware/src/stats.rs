//! Simulation statistics collection and reporting.
//!
//! This module tracks execution counters for a [`Machine`](crate::sim::Machine). It provides:
//! 1. **Progress:** Cycles elapsed and steps retired.
//! 2. **Instruction mix:** ALU operations (and how many latched flags), loads, and stores.
//! 3. **Anomalies:** Discarded zero-register writes and faults surfaced by steps.

/// Section names for selective summary output.
///
/// Pass an empty slice to [`SimStats::summary_sections`] to render all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "anomalies"];

/// Execution counters for one machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total cycles elapsed, including cycles whose step failed.
    pub cycles: u64,
    /// Steps that completed without error.
    pub steps_retired: u64,
    /// ALU evaluations issued through the machine.
    pub alu_ops: u64,
    /// ALU evaluations that latched NZCV.
    pub flag_setting_ops: u64,
    /// Words loaded from data memory.
    pub loads: u64,
    /// Words stored to data memory.
    pub stores: u64,
    /// Architectural writes to `XZR` dropped by the write-back path.
    pub zero_reg_writes_discarded: u64,
    /// Steps that returned an error.
    pub faults: u64,
}

impl SimStats {
    /// Renders only the requested sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Unknown names
    /// are ignored; an empty slice renders everything.
    pub fn summary_sections(&self, sections: &[&str]) -> String {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let mut lines = Vec::new();

        if want("summary") {
            lines.push(format!("sim_cycles               {}", self.cycles));
            lines.push(format!("sim_steps                {}", self.steps_retired));
        }
        if want("instruction_mix") {
            lines.push(format!("ops.alu                  {}", self.alu_ops));
            lines.push(format!("ops.alu_set_flags        {}", self.flag_setting_ops));
            lines.push(format!("ops.load                 {}", self.loads));
            lines.push(format!("ops.store                {}", self.stores));
        }
        if want("anomalies") {
            lines.push(format!("xzr_writes_discarded     {}", self.zero_reg_writes_discarded));
            lines.push(format!("faults                   {}", self.faults));
        }

        lines.into_iter().map(|line| line + "\n").collect()
    }

    /// Renders every section.
    pub fn summary(&self) -> String {
        self.summary_sections(&[])
    }
}
