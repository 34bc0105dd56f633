use crate::query::CompiledQuery;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Maximum number of entries reached! Will not add more.")]
    Full,

    #[error("No entries to delete!")]
    Empty,

    #[error("Entry number out of range!")]
    OutOfRange,
}

/// Bounded, ordered, in-memory collection of text entries
#[derive(Debug, Clone)]
pub struct EntryStore {
    entries: Vec<String>,
    max_entries: usize,
}

impl EntryStore {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_entries
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Appends an entry and returns its index
    pub fn add(&mut self, text: String) -> Result<usize, StoreError> {
        if self.is_full() {
            return Err(StoreError::Full);
        }
        self.entries.push(text);
        Ok(self.entries.len() - 1)
    }

    /// Removes entry `index`; the last entry takes its place.
    pub fn remove(&mut self, index: usize) -> Result<String, StoreError> {
        if self.entries.is_empty() {
            return Err(StoreError::Empty);
        }
        if index >= self.entries.len() {
            return Err(StoreError::OutOfRange);
        }
        Ok(self.entries.swap_remove(index))
    }

    /// Entries satisfying `query`, with their indices
    pub fn search<'a>(&'a self, query: &'a CompiledQuery) -> impl Iterator<Item = (usize, &'a str)> {
        query.filter(self.iter())
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new(crate::config::StoreConfig::default().max_entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;

    fn store_with(entries: &[&str]) -> EntryStore {
        let mut store = EntryStore::new(10);
        for entry in entries {
            store.add(entry.to_string()).unwrap();
        }
        store
    }

    #[test]
    fn test_add_returns_index() {
        let mut store = EntryStore::new(10);
        assert_eq!(store.add("first".to_string()), Ok(0));
        assert_eq!(store.add("second".to_string()), Ok(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_respects_limit() {
        let mut store = EntryStore::new(2);
        store.add("a".to_string()).unwrap();
        store.add("b".to_string()).unwrap();
        assert!(store.is_full());
        assert_eq!(store.add("c".to_string()), Err(StoreError::Full));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_moves_last_entry_into_slot() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        assert_eq!(store.remove(1), Ok("b".to_string()));
        assert_eq!(store.iter().collect::<Vec<_>>(), vec!["a", "d", "c"]);
    }

    #[test]
    fn test_remove_last_entry() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.remove(1), Ok("b".to_string()));
        assert_eq!(store.iter().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_remove_from_empty_store() {
        let mut store = EntryStore::new(10);
        assert_eq!(store.remove(0), Err(StoreError::Empty));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.remove(1), Err(StoreError::OutOfRange));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_search_reports_original_indices() {
        let store = store_with(&["Alice", "Bob", "Bob and Charlie", "Dan"]);
        let query = parse_query("Alice | Bob & Charlie").unwrap();
        let hits: Vec<_> = store.search(&query).collect();
        assert_eq!(hits, vec![(0, "Alice"), (2, "Bob and Charlie")]);
    }

    #[test]
    fn test_default_uses_configured_limit() {
        assert_eq!(EntryStore::default().max_entries(), 100);
    }
}
