use crate::model::HistoryEntry;

pub trait HistoryStore {
    fn append(&mut self, entry: HistoryEntry);
    /// Up to `limit` entries, most recent first.
    fn recent_entries(&self, limit: usize) -> Vec<HistoryEntry>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
