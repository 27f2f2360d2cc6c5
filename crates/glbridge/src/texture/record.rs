/// Allocation state of one texture image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StorageState {
    Unallocated,
    /// Defined by `glTexImage*`; may be redefined.
    Mutable,
    /// Defined by `glTexStorage*`; only sub-region updates are allowed.
    Immutable,
}

/// What the bridge knows about one texture image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StorageRecord {
    pub width: i32,
    pub height: i32,
    /// `1` for two-dimensional images.
    pub depth: i32,
    pub internal_format: u32,
    pub immutable: bool,
    pub allocated: bool,
}

impl StorageRecord {
    pub fn state(&self) -> StorageState {
        match (self.allocated, self.immutable) {
            (false, _) => StorageState::Unallocated,
            (true, false) => StorageState::Mutable,
            (true, true) => StorageState::Immutable,
        }
    }
}
