//! Configuration system for the machine.
//!
//! This module defines the configuration structures used to parameterize a
//! [`Machine`](crate::sim::Machine). It provides:
//! 1. **Defaults:** Baseline values used when a field is omitted.
//! 2. **Structures:** Hierarchical config for general, register and dump settings.
//! 3. **Parsing:** JSON deserialization via `serde_json`.
//!
//! Every field is optional in JSON; use `Config::default()` for the baseline.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Initial program counter.
    pub const START_PC: u64 = 0;

    /// Memory dumps hide words holding zero.
    pub const DUMP_NONZERO_ONLY: bool = true;

    /// Memory dumps show only 8-byte aligned addresses.
    pub const DUMP_ALIGNED_ONLY: bool = true;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Register initialization.
    #[serde(default)]
    pub registers: RegisterConfig,

    /// Diagnostic dump filters.
    #[serde(default)]
    pub dump: DumpConfig,
}

impl Config {
    /// Parses a configuration from JSON. Omitted fields take their defaults.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a debug event for every retired step.
    #[serde(default)]
    pub trace_steps: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u64,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u64 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_steps: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Register initialization applied on construction and reset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterConfig {
    /// Initial stack pointer (`X28`). Left at zero when unset.
    #[serde(default)]
    pub initial_sp: Option<i64>,
}

/// Filters applied by [`MemoryDump`](crate::sim::dump::MemoryDump).
#[derive(Debug, Clone, Deserialize)]
pub struct DumpConfig {
    /// Skip entries whose value is zero.
    #[serde(default = "DumpConfig::default_nonzero_only")]
    pub nonzero_only: bool,

    /// Skip entries whose address is not a multiple of the word size.
    #[serde(default = "DumpConfig::default_aligned_only")]
    pub aligned_only: bool,
}

impl DumpConfig {
    const fn default_nonzero_only() -> bool {
        defaults::DUMP_NONZERO_ONLY
    }

    const fn default_aligned_only() -> bool {
        defaults::DUMP_ALIGNED_ONLY
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            nonzero_only: defaults::DUMP_NONZERO_ONLY,
            aligned_only: defaults::DUMP_ALIGNED_ONLY,
        }
    }
}
