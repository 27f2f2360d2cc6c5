use crate::args::Arg;
use crate::args::normalize::{double, enum_or, handle, uint};
use crate::consts;
use crate::driver::{GlCmd, GlDriver, GlReply};
use crate::error::BridgeError;

use super::{Value, WebGl2};

/// Nanosecond timeout. Negative values mean "wait forever".
fn timeout_ns(arg: Arg<'_>, default: u64) -> u64 {
    if arg.is_nullish() {
        return default;
    }
    let ns = double(arg, 0.0);
    if ns < 0.0 { consts::TIMEOUT_IGNORED } else { ns as u64 }
}

impl<D: GlDriver> WebGl2<D> {
    /// Sync objects are named by small integers handed out by the driver
    /// binding, never by raw driver pointers.
    pub fn fence_sync(&mut self, condition: Arg<'_>, flags: Arg<'_>) -> Result<u32, BridgeError> {
        Ok(self
            .gl
            .submit(GlCmd::FenceSync {
                condition: enum_or(condition, consts::SYNC_GPU_COMMANDS_COMPLETE),
                flags: uint(flags, 0),
            })?
            .name())
    }

    pub fn delete_sync(&mut self, sync: Arg<'_>) -> Result<(), BridgeError> {
        match handle(sync) {
            0 => Ok(()),
            sync => self.gl.submit(GlCmd::DeleteSync(sync)).map(drop),
        }
    }

    pub fn is_sync(&mut self, sync: Arg<'_>) -> Result<bool, BridgeError> {
        match handle(sync) {
            0 => Ok(false),
            sync => Ok(self.gl.submit(GlCmd::IsSync(sync))?.bool()),
        }
    }

    /// Returns `ALREADY_SIGNALED`, `TIMEOUT_EXPIRED`, `CONDITION_SATISFIED`
    /// or `WAIT_FAILED`. Defaults: no flags, zero timeout (a poll).
    pub fn client_wait_sync(&mut self, sync: Arg<'_>, flags: Arg<'_>, timeout: Arg<'_>) -> Result<u32, BridgeError> {
        let reply = self.gl.submit(GlCmd::ClientWaitSync {
            sync: handle(sync),
            flags: uint(flags, 0),
            timeout: timeout_ns(timeout, 0),
        })?;
        Ok(match reply {
            GlReply::Unit => consts::WAIT_FAILED,
            reply => reply.uint(),
        })
    }

    /// Defaults: `TIMEOUT_IGNORED`, the only timeout drivers accept here.
    pub fn wait_sync(&mut self, sync: Arg<'_>, flags: Arg<'_>, timeout: Arg<'_>) -> Result<(), BridgeError> {
        self.gl
            .submit(GlCmd::WaitSync {
                sync: handle(sync),
                flags: uint(flags, 0),
                timeout: timeout_ns(timeout, consts::TIMEOUT_IGNORED),
            })
            .map(drop)
    }

    pub fn get_sync_parameter(&mut self, sync: Arg<'_>, pname: Arg<'_>) -> Result<Value, BridgeError> {
        let pname = uint(pname, 0);
        let reply = self.gl.submit(GlCmd::GetSyncParameter {
            sync: handle(sync),
            pname,
        })?;
        Ok(Value::from_reply(pname, reply))
    }
}
