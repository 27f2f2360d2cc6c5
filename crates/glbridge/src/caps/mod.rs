//! Capability answers.
//!
//! Upstream renderers query limits and extensions during start-up and bail
//! out or pick degraded paths on unexpected answers. The bridge answers
//! these queries from fixed tables instead of asking the driver, so every
//! desktop driver looks like the same WebGL2 implementation. The values are
//! plausible, not measured: hardware may not reach every advertised limit.

mod extensions;
mod params;

pub use extensions::{Extension, extension, supported_extensions};
pub use params::{ParamValue, parameter};

/// Result of `getContextAttributes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextAttributes {
    pub alpha: bool,
    pub antialias: bool,
    pub depth: bool,
    pub fail_if_major_performance_caveat: bool,
    pub power_preference: &'static str,
    pub premultiplied_alpha: bool,
    pub preserve_drawing_buffer: bool,
    pub stencil: bool,
    pub desynchronized: bool,
}

pub const CONTEXT_ATTRIBUTES: ContextAttributes = ContextAttributes {
    alpha: true,
    antialias: true,
    depth: true,
    fail_if_major_performance_caveat: false,
    power_preference: "default",
    premultiplied_alpha: true,
    preserve_drawing_buffer: false,
    stencil: false,
    desynchronized: false,
};

/// Result of `getShaderPrecisionFormat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionFormat {
    pub range_min: i32,
    pub range_max: i32,
    pub precision: i32,
}

/// Every stage and precision reports IEEE single precision.
pub const PRECISION_FORMAT: PrecisionFormat = PrecisionFormat {
    range_min: 127,
    range_max: 127,
    precision: 23,
};
