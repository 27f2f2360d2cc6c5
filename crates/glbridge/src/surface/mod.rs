//! The WebGL2 call surface.
//!
//! [`WebGl2`] exposes one method per source-API function. Each method:
//! 1. normalizes its [`Arg`](crate::args::Arg)s to fixed driver types
//! 2. marshals numeric sequences into native buffers
//! 3. consults texture storage when the call touches texture images
//! 4. resolves the version module of gated calls
//! 5. executes the driver call and converts any read-back
//!
//! Methods backed by a version module return `Result`; everything else is
//! infallible and answers with zero values when the driver has nothing to
//! say.

#[cfg(test)]
mod absent;
mod attribs;
mod buffers;
mod draw;
mod framebuffers;
mod image;
mod info;
mod objects;
mod programs;
mod queries;
mod state;
mod sync;
mod textures;
mod uniforms;
mod value;

pub use image::ImageSource;
pub use value::Value;

use std::collections::HashMap;

use crate::config::BridgeConfig;
use crate::driver::{Dispatcher, GlDriver};
use crate::shader::ShaderStage;
use crate::texture::{PixelStore, TextureStorage};

/// WebGL2-style context running on a desktop OpenGL driver.
///
/// Single-threaded: the owning thread must hold the driver's context for
/// every call.
pub struct WebGl2<D> {
    gl: Dispatcher<D>,
    textures: TextureStorage,
    shader_stages: HashMap<u32, ShaderStage>,
    pixel_store: PixelStore,
    config: BridgeConfig,
}

impl<D: GlDriver> WebGl2<D> {
    pub fn new(driver: D) -> Self {
        Self::with_config(driver, BridgeConfig::default())
    }

    pub fn with_config(driver: D, config: BridgeConfig) -> Self {
        log::debug!(
            "webgl2 bridge ready (shader platform {:?}, error drain limit {})",
            config.platform,
            config.error_drain_limit
        );
        Self {
            gl: Dispatcher::new(driver),
            textures: TextureStorage::new(config.error_drain_limit),
            shader_stages: HashMap::new(),
            pixel_store: PixelStore::default(),
            config,
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Texture image bookkeeping, for diagnostics.
    pub fn textures(&self) -> &TextureStorage {
        &self.textures
    }

    pub fn dispatcher(&self) -> &Dispatcher<D> {
        &self.gl
    }

    pub fn into_driver(self) -> D {
        self.gl.into_driver()
    }
}
