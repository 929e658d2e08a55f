use std::fmt;
use std::sync::{Mutex, MutexGuard};

use tracing::info;

use super::{ResultsBackend, StoreError};
use crate::tournament::{MatchResult, RoomCode};

/// Owns the persisted result collection and enforces the one-result-per-room
/// invariant. Every operation is a full load-modify-store cycle over the
/// backend, serialized by an internal mutex so two command invocations cannot
/// interleave their writes.
pub struct ResultStore {
    backend: Box<dyn ResultsBackend>,
    cycle_guard: Mutex<()>,
}

impl ResultStore {
    pub fn new(backend: impl ResultsBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            cycle_guard: Mutex::new(()),
        }
    }

    /// Create the backing store empty if it does not exist yet. Idempotent.
    pub fn initialize(&self) -> Result<(), StoreError> {
        let _guard = self.lock_cycle();
        if !self.backend.exists() {
            self.backend.save(&[])?;
            info!("Created empty results store");
        }
        Ok(())
    }

    /// Append a result, rejecting a room that already has one.
    pub fn add(&self, result: MatchResult) -> Result<(), StoreError> {
        let _guard = self.lock_cycle();
        let mut results = self.backend.load()?;

        if results.iter().any(|r| r.room == result.room) {
            return Err(StoreError::DuplicateRoom(result.room));
        }

        results.push(result);
        self.backend.save(&results)
    }

    /// Full collection in insertion order. Empty is not an error.
    pub fn list(&self) -> Result<Vec<MatchResult>, StoreError> {
        let _guard = self.lock_cycle();
        self.backend.load()
    }

    /// Remove the result registered for a room, if any.
    pub fn remove(&self, room: &RoomCode) -> Result<(), StoreError> {
        let _guard = self.lock_cycle();
        let mut results = self.backend.load()?;

        let before = results.len();
        results.retain(|r| &r.room != room);
        if results.len() == before {
            return Err(StoreError::NotFound(room.clone()));
        }

        self.backend.save(&results)
    }

    fn lock_cycle(&self) -> MutexGuard<'_, ()> {
        self.cycle_guard
            .lock()
            .expect("result store cycle guard poisoned")
    }
}

impl fmt::Debug for ResultStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::super::backend::MemoryBackend;
    use super::super::JsonFileBackend;
    use super::*;
    use crate::tournament::parse_opponents;

    fn sample_result(room: &str, winner: &str) -> MatchResult {
        MatchResult {
            room: RoomCode::parse(room).unwrap(),
            winner: winner.to_string(),
            opponents: vec!["Bob".to_string()],
            uma: "Special Week".to_string(),
        }
    }

    fn memory_store() -> ResultStore {
        ResultStore::new(MemoryBackend::new())
    }

    #[test]
    fn test_add_then_list_returns_the_added_entry() {
        let store = memory_store();
        let result = sample_result("A-1", "u1");

        store.add(result.clone()).unwrap();
        assert_eq!(store.list().unwrap(), vec![result]);
    }

    #[test]
    fn test_add_duplicate_room_is_rejected_and_keeps_first_entry() {
        let store = memory_store();
        store.add(sample_result("A-1", "u1")).unwrap();

        let err = store.add(sample_result("A-1", "u2")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateRoom(room) if room.as_str() == "A-1"));

        let results = store.list().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].winner, "u1");
    }

    #[test]
    fn test_remove_missing_room_is_not_found_and_leaves_collection_unchanged() {
        let store = memory_store();
        store.add(sample_result("A-1", "u1")).unwrap();

        let room = RoomCode::parse("B-2").unwrap();
        let err = store.remove(&room).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(room) if room.as_str() == "B-2"));

        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_add_then_remove_leaves_no_entry_for_the_room() {
        let store = memory_store();
        let room = RoomCode::parse("C-3").unwrap();
        store.add(sample_result("C-3", "u1")).unwrap();

        store.remove(&room).unwrap();
        assert!(store.list().unwrap().iter().all(|r| r.room != room));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = memory_store();
        store.add(sample_result("B-2", "u1")).unwrap();
        store.add(sample_result("A-1", "u2")).unwrap();
        store.add(sample_result("H-15", "u3")).unwrap();

        let results = store.list().unwrap();
        let rooms: Vec<&str> = results.iter().map(|r| r.room.as_str()).collect();
        assert_eq!(rooms, vec!["B-2", "A-1", "H-15"]);
    }

    #[test]
    fn test_initialize_is_idempotent_and_preserves_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(JsonFileBackend::new(dir.path().join("results.json")));

        store.initialize().unwrap();
        store.initialize().unwrap();
        assert!(store.list().unwrap().is_empty());

        store.add(sample_result("A-1", "u1")).unwrap();
        store.initialize().unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_full_reporting_flow_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResultStore::new(JsonFileBackend::new(dir.path().join("results.json")));
        store.initialize().unwrap();
        assert!(store.list().unwrap().is_empty());

        let room = RoomCode::parse("A-1").unwrap();
        store
            .add(MatchResult {
                room: room.clone(),
                winner: "u1".to_string(),
                opponents: parse_opponents("Bob"),
                uma: "Special Week".to_string(),
            })
            .unwrap();

        let results = store.list().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].room, room);
        assert_eq!(results[0].winner, "u1");
        assert_eq!(results[0].opponents, vec!["Bob"]);
        assert_eq!(results[0].uma, "Special Week");

        store.remove(&room).unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
