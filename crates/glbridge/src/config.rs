use crate::shader::Platform;

/// Construction parameters for [`crate::WebGl2`].
///
/// Keep this structure small. Every field has a default that matches the
/// behavior upstream renderers expect.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Platform whose shading language dialect shader sources are rewritten to.
    pub platform: Platform,

    /// Upper bound on stale driver errors discarded before an allocation.
    pub error_drain_limit: u32,

    /// Set `UNPACK_ALIGNMENT` to 1 before byte and half-float uploads.
    ///
    /// Typed arrays coming from the source API are tightly packed.
    pub tight_unpack_alignment: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            platform: Platform::host(),
            error_drain_limit: 16,
            tight_unpack_alignment: true,
        }
    }
}
