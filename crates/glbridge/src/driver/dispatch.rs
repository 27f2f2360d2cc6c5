use crate::consts;
use crate::error::BridgeError;

use super::{GlCmd, GlDriver, GlReply, ModuleRegistry};

/// Routes commands to the driver through the module registry.
pub struct Dispatcher<D> {
    driver: D,
    modules: ModuleRegistry,
}

impl<D: GlDriver> Dispatcher<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            modules: ModuleRegistry::new(),
        }
    }

    /// Executes `cmd`, resolving its version module first.
    pub fn submit(&mut self, cmd: GlCmd) -> Result<GlReply, BridgeError> {
        if let Some(version) = cmd.module() {
            let driver = &mut self.driver;
            self.modules
                .resolve(version, cmd.name(), || driver.load_module(version))?;
        }
        Ok(self.driver.execute(cmd))
    }

    /// Executes a command from the core module.
    ///
    /// Gated commands still go through resolution; if that fails the call
    /// is skipped and the zero reply returned.
    pub fn call(&mut self, cmd: GlCmd) -> GlReply {
        match self.submit(cmd) {
            Ok(reply) => reply,
            Err(err) => {
                log::warn!("{err}");
                GlReply::Unit
            }
        }
    }

    /// Next driver error code, `NO_ERROR` when the queue is empty.
    pub fn error(&mut self) -> u32 {
        self.driver.execute(GlCmd::GetError).uint()
    }

    /// Reads and discards up to `limit` pending error codes.
    ///
    /// Returns how many were discarded.
    pub fn drain_errors(&mut self, limit: u32) -> u32 {
        let mut drained = 0;
        while drained < limit {
            let code = self.error();
            if code == consts::NO_ERROR {
                break;
            }
            log::trace!("discarding stale GL error 0x{code:04X}");
            drained += 1;
        }
        drained
    }

    pub fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }
}
