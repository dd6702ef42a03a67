//! Item Id Generator

use crate::item::ItemId;

/// Issues item ids from a millisecond clock reading.
///
/// Ids follow the clock but never repeat or go backwards: two items created
/// within the same millisecond (or after the clock stepped back) get `last + 1`.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for an item created at `now_ms`
    pub fn next(&mut self, now_ms: u64) -> ItemId {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        ItemId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_clock() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next(1000), ItemId(1000));
        assert_eq!(ids.next(2500), ItemId(2500));
    }

    #[test]
    fn test_same_millisecond_still_unique() {
        let mut ids = IdGenerator::new();
        let a = ids.next(1000);
        let b = ids.next(1000);
        let c = ids.next(1000);
        assert_eq!(a, ItemId(1000));
        assert_eq!(b, ItemId(1001));
        assert_eq!(c, ItemId(1002));
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut ids = IdGenerator::new();
        ids.next(5000);
        assert_eq!(ids.next(10), ItemId(5001));
    }
}
