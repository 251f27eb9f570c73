use std::collections::VecDeque;

use tracing::trace;

use crate::model::HistoryEntry;
use crate::repository::traits::HistoryStore;

pub const DEFAULT_CAPACITY: usize = 50;

/// Session-scoped history kept in a bounded ring buffer. Once `capacity`
/// entries are held, each append evicts the oldest one. Nothing is written
/// to disk; the history lives exactly as long as the store.
#[derive(Debug, Clone)]
pub struct InMemoryHistoryStore {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl InMemoryHistoryStore {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn append(&mut self, entry: HistoryEntry) {
        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                trace!(id = %evicted.id, "evicting oldest history entry");
            }
        }
        self.entries.push_back(entry);
    }

    fn recent_entries(&self, limit: usize) -> Vec<HistoryEntry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvestmentParameters;

    fn entry(years: u32) -> HistoryEntry {
        HistoryEntry::new(InvestmentParameters::new(1000.0, 0.0, 0.0, years), 1000.0)
    }

    #[test]
    fn test_recent_entries_most_recent_first() {
        let mut store = InMemoryHistoryStore::new(10);
        for years in 1..=3 {
            store.append(entry(years));
        }

        let recent = store.recent_entries(10);
        let years: Vec<u32> = recent.iter().map(|e| e.params.years).collect();
        assert_eq!(years, vec![3, 2, 1]);

        let limited = store.recent_entries(2);
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].params.years, 3);
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let mut store = InMemoryHistoryStore::new(3);
        for years in 1..=5 {
            store.append(entry(years));
        }
        assert_eq!(store.len(), 3);

        let years: Vec<u32> = store.recent_entries(10).iter().map(|e| e.params.years).collect();
        assert_eq!(years, vec![5, 4, 3]);
    }

    #[test]
    fn test_zero_capacity_still_holds_latest() {
        let mut store = InMemoryHistoryStore::new(0);
        assert_eq!(store.capacity(), 1);
        assert!(store.is_empty());
        store.append(entry(1));
        store.append(entry(2));
        assert_eq!(store.len(), 1);
        assert_eq!(store.recent_entries(5)[0].params.years, 2);
    }

    #[test]
    fn test_zero_limit_returns_nothing() {
        let mut store = InMemoryHistoryStore::default();
        store.append(entry(1));
        assert!(store.recent_entries(0).is_empty());
    }
}
