mod backend;
mod results_store;

pub use backend::{JsonFileBackend, ResultsBackend};
pub use results_store::ResultStore;

use crate::tournament::RoomCode;

/// Errors from the result store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a result is already registered for room {0}")]
    DuplicateRoom(RoomCode),
    #[error("no result is registered for room {0}")]
    NotFound(RoomCode),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
