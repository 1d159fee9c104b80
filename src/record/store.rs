//! # Record Store
//!
//! The authoritative in-memory collection.
//!
//! Every operation takes the single collection-wide lock for its whole
//! check-then-act sequence, so no caller ever observes a partial write and
//! two racing creates cannot both pass the existence check.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::errors::{RecordError, RecordResult};
use super::model::Record;

/// Concurrency-safe keyed record collection
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Mutex<HashMap<String, Record>>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the collection lock.
    ///
    /// Poisoning is recovered: every operation applies at most one map
    /// mutation, so a panicking holder cannot leave the map half-modified.
    fn records(&self) -> MutexGuard<'_, HashMap<String, Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a new record.
    ///
    /// Fails with [`RecordError::AlreadyExists`] if the key is taken; the
    /// existing record is left untouched.
    pub fn create(&self, candidate: Record) -> RecordResult<Record> {
        let mut records = self.records();

        if records.contains_key(&candidate.id) {
            return Err(RecordError::AlreadyExists(candidate.id));
        }

        records.insert(candidate.id.clone(), candidate.clone());
        Ok(candidate)
    }

    /// Current value for `id`
    pub fn get(&self, id: &str) -> RecordResult<Record> {
        self.records()
            .get(id)
            .cloned()
            .ok_or_else(|| RecordError::NotFound(id.to_string()))
    }

    /// Snapshot of every record, ordered by key
    pub fn get_all(&self) -> Vec<Record> {
        let mut snapshot: Vec<Record> = self.records().values().cloned().collect();
        snapshot.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot
    }

    /// Replace an existing record and return the value it replaced.
    ///
    /// Fails with [`RecordError::NotFound`] if the key is absent and with
    /// [`RecordError::NoChange`] if the candidate equals the stored value.
    pub fn update(&self, candidate: Record) -> RecordResult<Record> {
        let mut records = self.records();

        let Some(current) = records.get_mut(&candidate.id) else {
            return Err(RecordError::NotFound(candidate.id));
        };

        if *current == candidate {
            return Err(RecordError::NoChange(candidate.id));
        }

        Ok(std::mem::replace(current, candidate))
    }

    /// Remove a record, returning it
    pub fn delete(&self, id: &str) -> RecordResult<Record> {
        self.records()
            .remove(id)
            .ok_or_else(|| RecordError::NotFound(id.to_string()))
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn record(id: &str, message: &str) -> Record {
        Record::new(id, message)
    }

    #[test]
    fn test_create_then_get() {
        let store = RecordStore::new();
        let stored = store.create(record("a1", "hello")).unwrap();
        assert_eq!(stored, record("a1", "hello"));
        assert_eq!(store.get("a1").unwrap(), record("a1", "hello"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_create_never_overwrites() {
        let store = RecordStore::new();
        store.create(record("a1", "hello")).unwrap();

        let err = store.create(record("a1", "world")).unwrap_err();
        assert_eq!(err, RecordError::AlreadyExists("a1".to_string()));
        assert_eq!(store.get("a1").unwrap().message, "hello");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let store = RecordStore::new();
        assert_eq!(
            store.get("nope").unwrap_err(),
            RecordError::NotFound("nope".to_string())
        );
    }

    #[test]
    fn test_update_returns_previous_value() {
        let store = RecordStore::new();
        store.create(record("a1", "hello")).unwrap();

        let previous = store.update(record("a1", "world")).unwrap();
        assert_eq!(previous, record("a1", "hello"));
        assert_eq!(store.get("a1").unwrap(), record("a1", "world"));
    }

    #[test]
    fn test_identical_update_rejected() {
        let store = RecordStore::new();
        store.create(record("a1", "hello")).unwrap();

        let err = store.update(record("a1", "hello")).unwrap_err();
        assert_eq!(err, RecordError::NoChange("a1".to_string()));
        assert_eq!(store.get("a1").unwrap(), record("a1", "hello"));
    }

    #[test]
    fn test_update_missing() {
        let store = RecordStore::new();
        let err = store.update(record("ghost", "boo")).unwrap_err();
        assert_eq!(err, RecordError::NotFound("ghost".to_string()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_twice() {
        let store = RecordStore::new();
        store.create(record("a1", "hello")).unwrap();

        assert_eq!(store.delete("a1").unwrap(), record("a1", "hello"));
        assert!(matches!(store.get("a1"), Err(RecordError::NotFound(_))));
        assert!(matches!(store.delete("a1"), Err(RecordError::NotFound(_))));
    }

    #[test]
    fn test_get_all_is_ordered_snapshot() {
        let store = RecordStore::new();
        store.create(record("b", "2")).unwrap();
        store.create(record("a", "1")).unwrap();

        let snapshot = store.get_all();
        store.create(record("c", "3")).unwrap();
        store.update(record("a", "changed")).unwrap();
        store.delete("b").unwrap();

        assert_eq!(snapshot, vec![record("a", "1"), record("b", "2")]);
        assert_eq!(store.get_all(), vec![record("a", "changed"), record("c", "3")]);
    }

    #[test]
    fn test_stores_are_independent() {
        let first = RecordStore::new();
        let second = RecordStore::new();
        first.create(record("a", "1")).unwrap();
        assert!(second.get("a").is_err());
    }

    #[test]
    fn test_concurrent_create_single_winner() {
        const WRITERS: usize = 16;
        let store = Arc::new(RecordStore::new());

        let handles: Vec<_> = (0..WRITERS)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.create(record("race", &format!("writer-{}", i))))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(RecordError::AlreadyExists(_))))
            .count();

        assert_eq!(winners, 1);
        assert_eq!(conflicts, WRITERS - 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_readers_never_see_torn_update() {
        let store = Arc::new(RecordStore::new());
        store.create(record("k", "v0")).unwrap();

        thread::scope(|scope| {
            let writer = Arc::clone(&store);
            scope.spawn(move || {
                for i in 1..200 {
                    writer.update(record("k", &format!("v{}", i))).unwrap();
                }
            });
            for _ in 0..4 {
                let reader = Arc::clone(&store);
                scope.spawn(move || {
                    for _ in 0..200 {
                        let current = reader.get("k").unwrap();
                        assert_eq!(current.id, "k");
                        assert!(current.message.starts_with('v'));
                    }
                });
            }
        });

        assert_eq!(store.get("k").unwrap().message, "v199");
    }
}
