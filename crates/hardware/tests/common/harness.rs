use legv8_core::Machine;
use legv8_core::config::Config;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestContext {
    pub machine: Machine,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Builds a machine from `config`. Panics if the config is rejected.
    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        Self {
            machine: Machine::new(config).unwrap(),
        }
    }

    /// Seeds a register through the low-level store. Panics on a bad index.
    pub fn with_reg(mut self, idx: i32, value: i64) -> Self {
        self.machine.regs.write(idx, value).unwrap();
        self
    }

    /// Seeds a memory word. Panics on a negative address.
    pub fn with_word(mut self, address: i64, value: i64) -> Self {
        self.machine.memory.write(address, value).unwrap();
        self
    }

    pub fn reg(&self, idx: i32) -> i64 {
        self.machine.read_reg(idx).unwrap()
    }

    pub fn word(&self, address: i64) -> i64 {
        self.machine.memory.read(address).unwrap()
    }
}
