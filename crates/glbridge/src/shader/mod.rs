//! Shader dialect rewriting.
//!
//! Source-API shaders are written in GLSL ES 3.00, sometimes still using
//! GLSL ES 1.00 keywords. Desktop drivers want a core-profile dialect whose
//! exact shape depends on the host platform. [`transpile`] bridges the two.

mod scan;
mod transpile;

pub use transpile::transpile;

use crate::consts;

/// Pipeline stage a shader object was created for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Stage for a `createShader` type enum. Unknown enums yield `None`.
    pub fn from_gl(kind: u32) -> Option<Self> {
        match kind {
            consts::VERTEX_SHADER => Some(ShaderStage::Vertex),
            consts::FRAGMENT_SHADER => Some(ShaderStage::Fragment),
            _ => None,
        }
    }
}

/// Host platform family, as far as shader dialects are concerned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl Platform {
    /// Platform this binary was built for.
    pub fn host() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    pub fn dialect(self) -> Dialect {
        match self {
            // Core profile 4.1 is the ceiling there and legacy keywords are rejected.
            Platform::MacOs => Dialect {
                version_directive: "#version 330 core",
                modern_io: true,
            },
            Platform::Linux | Platform::Windows | Platform::Other => Dialect {
                version_directive: "#version 430 core",
                modern_io: false,
            },
        }
    }
}

/// Target shading language dialect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dialect {
    /// Directive replacing `#version 300 es`.
    pub version_directive: &'static str,

    /// Rewrite `attribute`/`varying`/`gl_FragColor` to `in`/`out` declarations.
    pub modern_io: bool,
}
