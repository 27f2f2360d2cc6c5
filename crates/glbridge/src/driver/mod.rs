//! Driver boundary.
//!
//! The bridge never calls a native binding directly. Every target call is a
//! [`GlCmd`] routed through a [`Dispatcher`], which resolves the version
//! module the command needs before handing it to a [`GlDriver`].
//!
//! Responsibilities:
//! - describe target calls as plain data (`GlCmd`, `GlReply`)
//! - memoize version module resolution (`ModuleRegistry`)
//! - refuse gated commands whose module is unavailable

mod cmd;
mod dispatch;
mod reply;
mod resolver;
mod version;

#[cfg(test)]
pub(crate) mod recording;

pub use cmd::{GlCmd, ObjectKind};
pub use dispatch::Dispatcher;
pub use reply::{ActiveInfo, GlReply};
pub use resolver::{ModuleHandle, ModuleRegistry};
pub use version::GlVersion;

/// A desktop OpenGL binding able to execute [`GlCmd`]s.
///
/// Implementations run every command synchronously on the calling thread,
/// which must own the current context.
pub trait GlDriver {
    /// Reports whether every entry point of `version` can be called.
    ///
    /// Called at most once per version by the [`ModuleRegistry`].
    fn load_module(&mut self, version: GlVersion) -> bool;

    /// Performs exactly one target call.
    fn execute(&mut self, cmd: GlCmd) -> GlReply;
}

impl<D: GlDriver + ?Sized> GlDriver for Box<D> {
    fn load_module(&mut self, version: GlVersion) -> bool {
        (**self).load_module(version)
    }

    fn execute(&mut self, cmd: GlCmd) -> GlReply {
        (**self).execute(cmd)
    }
}
