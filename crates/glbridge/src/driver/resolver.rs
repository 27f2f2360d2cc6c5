use state::InitCell;

use crate::error::BridgeError;

use super::GlVersion;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Binding {
    Bound,
    Unavailable,
}

/// Proof that a version module was resolved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ModuleHandle {
    version: GlVersion,
}

impl ModuleHandle {
    pub fn version(self) -> GlVersion {
        self.version
    }
}

/// Lazily resolved version modules, one init-once slot per [`GlVersion`].
///
/// The registry lives as long as the driver binding it describes. A slot is
/// filled on the first entry point that needs it and never cleared, so a
/// module that failed to load keeps failing without probing the driver
/// again.
pub struct ModuleRegistry {
    slots: [InitCell<Binding>; GlVersion::ALL.len()],
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| InitCell::new()),
        }
    }

    /// Resolves `version`, running `load` only the first time.
    pub fn resolve(
        &self,
        version: GlVersion,
        entry_point: &'static str,
        load: impl FnOnce() -> bool,
    ) -> Result<ModuleHandle, BridgeError> {
        let binding = self.slots[version.index()].get_or_init(|| {
            if load() {
                log::debug!("bound OpenGL {version} entry points");
                Binding::Bound
            } else {
                log::warn!("OpenGL {version} entry points are unavailable; features using them are disabled");
                Binding::Unavailable
            }
        });

        match binding {
            Binding::Bound => Ok(ModuleHandle { version }),
            Binding::Unavailable => Err(BridgeError::CapabilityUnavailable {
                entry_point,
                version,
            }),
        }
    }

    /// `Some(true)` once bound, `Some(false)` once known unavailable.
    pub fn is_bound(&self, version: GlVersion) -> Option<bool> {
        self.slots[version.index()]
            .try_get()
            .map(|b| *b == Binding::Bound)
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_runs_once_per_version() {
        let registry = ModuleRegistry::new();
        let mut loads = 0;

        for _ in 0..3 {
            let handle = registry.resolve(GlVersion::Gl31, "drawArraysInstanced", || {
                loads += 1;
                true
            });
            assert_eq!(handle.map(ModuleHandle::version), Ok(GlVersion::Gl31));
        }
        assert_eq!(loads, 1);
        assert_eq!(registry.is_bound(GlVersion::Gl31), Some(true));
        assert_eq!(registry.is_bound(GlVersion::Gl32), None);
    }

    #[test]
    fn unavailable_module_stays_unavailable() {
        let registry = ModuleRegistry::new();
        let first = registry.resolve(GlVersion::Gl43, "invalidateFramebuffer", || false);
        let second = registry.resolve(GlVersion::Gl43, "invalidateSubFramebuffer", || true);

        assert_eq!(
            first,
            Err(BridgeError::CapabilityUnavailable {
                entry_point: "invalidateFramebuffer",
                version: GlVersion::Gl43,
            })
        );
        assert_eq!(
            second,
            Err(BridgeError::CapabilityUnavailable {
                entry_point: "invalidateSubFramebuffer",
                version: GlVersion::Gl43,
            })
        );
    }
}
