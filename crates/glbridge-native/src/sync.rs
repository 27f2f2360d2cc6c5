use std::collections::HashMap;

/// Maps the small integer names handed to callers onto driver sync handles.
///
/// Names start at 1 and are never reused within one driver.
#[derive(Debug)]
pub(crate) struct SyncTable<S> {
    live: HashMap<u32, S>,
    last: u32,
}

impl<S> Default for SyncTable<S> {
    fn default() -> Self {
        Self {
            live: HashMap::new(),
            last: 0,
        }
    }
}

impl<S: Copy> SyncTable<S> {
    pub(crate) fn insert(&mut self, handle: S) -> u32 {
        self.last += 1;
        self.live.insert(self.last, handle);
        self.last
    }

    pub(crate) fn get(&self, name: u32) -> Option<S> {
        self.live.get(&name).copied()
    }

    pub(crate) fn remove(&mut self, name: u32) -> Option<S> {
        self.live.remove(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_not_reused() {
        let mut table = SyncTable::default();
        let a = table.insert(10usize);
        let b = table.insert(20usize);
        assert_eq!((a, b), (1, 2));
        assert_eq!(table.remove(a), Some(10));
        assert_eq!(table.insert(30), 3);
        assert_eq!(table.get(a), None);
        assert_eq!(table.get(3), Some(30));
    }

    #[test]
    fn unknown_names_miss() {
        let mut table: SyncTable<usize> = SyncTable::default();
        assert_eq!(table.get(0), None);
        assert_eq!(table.remove(7), None);
    }
}
