use ads1115::{ConfigSnapshot, Observer, Register};

/// Forwards driver register traffic to `tracing`.
pub struct TracingObserver {
    addr: u8,
}

impl TracingObserver {
    pub fn new(addr: u8) -> Self {
        Self { addr }
    }
}

impl Observer for TracingObserver {
    fn register_read(&mut self, reg: Register, value: u16) {
        tracing::trace!(addr = self.addr, ?reg, value, "read");
    }

    fn register_written(&mut self, reg: Register, value: u16) {
        tracing::trace!(addr = self.addr, ?reg, value, "write");
    }

    fn config_dump(&mut self, snapshot: &ConfigSnapshot) {
        tracing::debug!(addr = self.addr, "config register\n{snapshot}");
    }
}
