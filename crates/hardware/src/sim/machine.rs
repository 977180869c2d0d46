//! Machine: owns the architectural state a control unit drives.
//!
//! The machine bundles the register file, data memory, condition flags, program
//! counter and cycle counter. It provides:
//! 1. **Write-back:** The architectural register write path, which drops writes to `XZR`.
//! 2. **Execution helpers:** ALU evaluation with optional flag latching, loads and stores.
//! 3. **Control flow:** Program counter advance and validated branches.
//! 4. **Context:** [`Machine::step`] attaches pc and cycle to any failure it surfaces.

use crate::common::constants::{INSTRUCTION_BYTES, REG_SP, REG_ZERO};
use crate::common::error::{SimError, SimResult};
use crate::config::Config;
use crate::core::arch::flags::ConditionFlags;
use crate::core::arch::gpr::RegisterFile;
use crate::core::units::alu::{Alu, AluOp, AluOutcome};
use crate::sim::dump::{MemoryDump, RegisterDump};
use crate::soc::memory::DataMemory;
use crate::stats::SimStats;

/// Index of `XZR` in the signed form used by register accessors.
const XZR: i32 = REG_ZERO as i32;

/// Architectural machine state plus execution counters.
#[derive(Debug, Clone)]
pub struct Machine {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Data memory.
    pub memory: DataMemory,
    /// Condition flags latched by the last flag-setting operation.
    pub flags: ConditionFlags,
    /// Execution counters.
    pub stats: SimStats,
    pc: u64,
    cycle: u64,
    config: Config,
}

impl Default for Machine {
    fn default() -> Self {
        Self::blank(Config::default())
    }
}

impl Machine {
    /// Creates a machine with zeroed state, then applies the configured pc and stack pointer.
    ///
    /// # Returns
    ///
    /// `InvalidProgramCounter` if `start_pc` is above `i64::MAX` or not a multiple of 4.
    pub fn new(config: &Config) -> SimResult<Self> {
        let mut machine = Self::blank(config.clone());
        machine.apply_config()?;
        Ok(machine)
    }

    fn blank(config: Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            memory: DataMemory::new(),
            flags: ConditionFlags::default(),
            stats: SimStats::default(),
            pc: 0,
            cycle: 0,
            config,
        }
    }

    fn apply_config(&mut self) -> SimResult<()> {
        // Start addresses above i64::MAX wrap negative and are rejected.
        self.branch_to(self.config.general.start_pc as i64)?;
        if let Some(sp) = self.config.registers.initial_sp {
            self.regs.write(REG_SP as i32, sp)?;
        }
        Ok(())
    }

    /// Clears registers, memory, flags, counters and statistics, then re-applies the config.
    pub fn reset(&mut self) -> SimResult<()> {
        self.regs.clear();
        self.memory.clear();
        self.flags = ConditionFlags::default();
        self.stats = SimStats::default();
        self.cycle = 0;
        self.apply_config()?;
        tracing::debug!(pc = self.pc, "machine reset");
        Ok(())
    }

    /// The configuration this machine was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Address of the instruction currently being processed.
    pub const fn pc(&self) -> u64 {
        self.pc
    }

    /// Number of cycles started so far. During a step this is the step's own cycle number.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Moves the program counter to the next sequential instruction.
    pub const fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(INSTRUCTION_BYTES as u64);
    }

    /// Sets the program counter to `target`.
    ///
    /// Construction and reset apply the configured start address through the same check.
    ///
    /// # Arguments
    ///
    /// * `target` - Absolute byte address of the next instruction.
    ///
    /// # Returns
    ///
    /// `InvalidProgramCounter` if `target` is negative or not a multiple of 4.
    /// The program counter is unchanged on failure.
    pub fn branch_to(&mut self, target: i64) -> SimResult<()> {
        if target < 0 || target % INSTRUCTION_BYTES != 0 {
            return Err(SimError::InvalidProgramCounter { address: target });
        }
        self.pc = target as u64;
        Ok(())
    }

    /// Branches by `offset` instructions relative to the current program counter.
    ///
    /// `offset` is the sign-extended immediate of `B`, `B.cond` or `CBZ`/`CBNZ`.
    pub fn branch_relative(&mut self, offset: i64) -> SimResult<()> {
        let target = (self.pc as i64).wrapping_add(offset.wrapping_mul(INSTRUCTION_BYTES));
        self.branch_to(target)
    }

    /// Reads a register.
    pub fn read_reg(&self, idx: i32) -> SimResult<i64> {
        self.regs.read(idx)
    }

    /// Architectural register write.
    ///
    /// Writes to `XZR` have no effect and are counted in the statistics. Every
    /// other index goes to [`RegisterFile::write`].
    pub fn write_back(&mut self, idx: i32, value: i64) -> SimResult<()> {
        if idx == XZR {
            self.stats.zero_reg_writes_discarded += 1;
            tracing::trace!(value, "write to XZR discarded");
            return Ok(());
        }
        self.regs.write(idx, value)?;
        tracing::trace!(reg = idx, value, "write-back");
        Ok(())
    }

    /// Evaluates `op` on `a` and `b` and writes the result to `rd`.
    ///
    /// When `set_flags` is true the outcome's NZCV is latched into [`Machine::flags`].
    /// Nothing is written if the ALU or the destination index fails.
    ///
    /// `AluOp::Unknown` marks a decode defect: it logs a warning and returns the
    /// zero outcome, leaving `rd` and the flags untouched.
    pub fn execute_alu(
        &mut self,
        op: AluOp,
        rd: i32,
        a: i64,
        b: i64,
        set_flags: bool,
    ) -> SimResult<AluOutcome> {
        let outcome = Alu::compute(op, a, b)?;
        if op.signals_decode_defect() {
            tracing::warn!(pc = self.pc, cycle = self.cycle, rd, "ALU received an unknown operation");
            self.stats.alu_ops += 1;
            return Ok(outcome);
        }
        self.write_back(rd, outcome.result)?;
        self.stats.alu_ops += 1;
        if set_flags {
            self.flags = ConditionFlags::from(&outcome);
            self.stats.flag_setting_ops += 1;
        }
        Ok(outcome)
    }

    /// Loads the word at `address` into register `rt` (`LDUR`).
    ///
    /// Alignment is not checked: the word stored at exactly `address` is returned.
    pub fn load(&mut self, rt: i32, address: i64) -> SimResult<i64> {
        let value = self.memory.read(address)?;
        self.write_back(rt, value)?;
        self.stats.loads += 1;
        tracing::trace!(address, value, "load");
        Ok(value)
    }

    /// Stores register `rt` to `address` (`STUR`).
    pub fn store(&mut self, rt: i32, address: i64) -> SimResult<()> {
        let value = self.regs.read(rt)?;
        self.memory.write(address, value)?;
        self.stats.stores += 1;
        tracing::trace!(address, value, "store");
        Ok(())
    }

    /// Runs one instruction's worth of work.
    ///
    /// The cycle counter advances before `f` runs, whether or not it succeeds.
    /// A failure is wrapped in [`SimError::SimulationFailure`] carrying the pc and
    /// cycle at which `f` started. Effects `f` applied before failing are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use legv8_core::core::units::alu::AluOp;
    /// use legv8_core::sim::Machine;
    ///
    /// let mut m = Machine::default();
    /// m.step(|m| {
    ///     let out = m.execute_alu(AluOp::Add, 1, 40, 2, false)?;
    ///     assert!(!out.zero);
    ///     m.advance_pc();
    ///     Ok(())
    /// })
    /// .unwrap();
    /// assert_eq!(m.read_reg(1), Ok(42));
    /// assert_eq!(m.pc(), 4);
    /// ```
    pub fn step<F>(&mut self, f: F) -> SimResult<()>
    where
        F: FnOnce(&mut Self) -> SimResult<()>,
    {
        let pc = self.pc;
        self.cycle += 1;
        self.stats.cycles += 1;
        let cycle = self.cycle;

        match f(self) {
            Ok(()) => {
                self.stats.steps_retired += 1;
                if self.config.general.trace_steps {
                    tracing::debug!(pc, cycle, flags = %self.flags, "step retired");
                }
                Ok(())
            }
            Err(err) => {
                self.stats.faults += 1;
                Err(err.with_context(pc, cycle))
            }
        }
    }

    /// Register listing for diagnostics.
    pub const fn register_dump(&self) -> RegisterDump<'_> {
        RegisterDump::new(&self.regs)
    }

    /// Memory listing for diagnostics, filtered by the configured dump options.
    pub const fn memory_dump(&self) -> MemoryDump<'_> {
        MemoryDump::new(&self.memory, &self.config.dump)
    }
}
