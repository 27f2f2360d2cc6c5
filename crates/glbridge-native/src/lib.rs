//! glbridge-native crate.
//!
//! [`GlNative`] executes bridge commands against the desktop OpenGL context
//! current on the calling thread, through the `gl` crate's global function
//! table. Context creation and buffer swapping stay with the host.

mod exec;
mod modules;
mod strings;
mod sync;

use std::ffi::{CStr, c_void};

use anyhow::{Context, Result};
use gl::types::GLsync;
use glbridge::driver::{GlCmd, GlDriver, GlReply, GlVersion};

use sync::SyncTable;

/// Driver backed by a live OpenGL context.
///
/// Not `Send`: the context it talks to is bound to one thread.
pub struct GlNative {
    syncs: SyncTable<GLsync>,
    version: (u32, u32),
}

impl GlNative {
    /// Resolves every entry point through `loader` and checks that a context
    /// is current.
    ///
    /// `loader` is the host's `getProcAddress` (GLFW, SDL, glutin...).
    pub fn load_with<F>(loader: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        anyhow::ensure!(gl::GetString::is_loaded(), "the loader did not resolve glGetString");

        let raw = unsafe { gl::GetString(gl::VERSION) };
        anyhow::ensure!(!raw.is_null(), "no OpenGL context is current on this thread");
        let text = unsafe { CStr::from_ptr(raw.cast()) }.to_string_lossy().into_owned();
        let version =
            parse_version(&text).with_context(|| format!("unrecognized GL_VERSION string {text:?}"))?;

        log::info!("OpenGL {}.{} ({text})", version.0, version.1);
        Ok(Self {
            syncs: SyncTable::default(),
            version,
        })
    }

    /// `(major, minor)` reported by the context.
    pub fn version(&self) -> (u32, u32) {
        self.version
    }
}

impl GlDriver for GlNative {
    fn load_module(&mut self, version: GlVersion) -> bool {
        let loaded = modules::is_loaded(version);
        if !loaded {
            log::warn!(
                "OpenGL {version} entry points are missing on a {}.{} context",
                self.version.0,
                self.version.1
            );
        }
        loaded
    }

    fn execute(&mut self, cmd: GlCmd) -> GlReply {
        log::trace!("{}", cmd.name());
        exec::execute(&mut self.syncs, cmd)
    }
}

/// Leading `major.minor` of a `GL_VERSION` string, skipping any
/// `OpenGL ES` prefix.
fn parse_version(text: &str) -> Option<(u32, u32)> {
    let token = text
        .split_whitespace()
        .find(|t| t.starts_with(|c: char| c.is_ascii_digit()))?;
    let mut parts = token.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts
        .next()?
        .trim_end_matches(|c: char| !c.is_ascii_digit())
        .parse()
        .ok()?;
    Some((major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_suffixes_are_ignored() {
        assert_eq!(parse_version("4.6.0 NVIDIA 535.54.03"), Some((4, 6)));
        assert_eq!(parse_version("3.3 (Core Profile) Mesa 23.2.1"), Some((3, 3)));
        assert_eq!(parse_version("4.1 ATI-4.14.1"), Some((4, 1)));
    }

    #[test]
    fn es_prefix_is_skipped() {
        assert_eq!(parse_version("OpenGL ES 3.2 Mesa 23.0"), Some((3, 2)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_version(""), None);
        assert_eq!(parse_version("OpenGL"), None);
        assert_eq!(parse_version("4"), None);
    }

    #[test]
    fn unresolved_loader_is_an_error() {
        let err = GlNative::load_with(|_| std::ptr::null()).err();
        assert!(err.is_some_and(|e| e.to_string().contains("glGetString")));
    }
}
