use std::fmt;

use crate::driver::GlVersion;

/// Failure surfaced to the caller of a [`crate::WebGl2`] entry point.
///
/// Argument shape problems never show up here; they normalize to defaults.
/// Driver errors raised during texture allocation are recovered locally and
/// only escape as [`BridgeError::AllocationFailed`] once the mutable fallback
/// has failed too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The driver does not expose the version module backing this entry point.
    CapabilityUnavailable {
        entry_point: &'static str,
        version: GlVersion,
    },

    /// Both the requested allocation and its mutable fallback raised a driver error.
    AllocationFailed { target: u32, level: i32, code: u32 },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::CapabilityUnavailable {
                entry_point,
                version,
            } => write!(
                f,
                "{entry_point} is unavailable: the driver does not provide OpenGL {version}"
            ),
            BridgeError::AllocationFailed {
                target,
                level,
                code,
            } => write!(
                f,
                "texture allocation failed for target 0x{target:04X} level {level} (GL error 0x{code:04X})"
            ),
        }
    }
}

impl std::error::Error for BridgeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_version() {
        let err = BridgeError::CapabilityUnavailable {
            entry_point: "drawArraysInstanced",
            version: GlVersion::Gl31,
        };
        assert_eq!(
            err.to_string(),
            "drawArraysInstanced is unavailable: the driver does not provide OpenGL 3.1"
        );
    }

    #[test]
    fn display_formats_allocation_codes_as_hex() {
        let err = BridgeError::AllocationFailed {
            target: 0x0DE1,
            level: 2,
            code: 0x0505,
        };
        assert_eq!(
            err.to_string(),
            "texture allocation failed for target 0x0DE1 level 2 (GL error 0x0505)"
        );
    }
}
