//! glbridge crate.
//!
//! Runs code written against the WebGL2 calling convention on top of a desktop
//! OpenGL driver. The crate owns argument normalization, numeric buffer
//! marshalling, texture storage bookkeeping, shader dialect rewriting and the
//! lazy resolution of version-gated entry points.
//!
//! The native binding lives behind [`driver::GlDriver`]; see the
//! `glbridge-native` crate for the implementation backed by a live context.

pub mod args;
pub mod caps;
pub mod config;
pub mod consts;
pub mod driver;
pub mod error;
pub mod logging;
pub mod marshal;
pub mod shader;
pub mod surface;
pub mod texture;

pub use config::BridgeConfig;
pub use error::BridgeError;
pub use surface::WebGl2;
