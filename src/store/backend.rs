use std::fs;
use std::path::PathBuf;

use super::StoreError;
use crate::tournament::MatchResult;

/// Storage abstraction behind [`super::ResultStore`]. Implementations own the
/// full collection; every mutation goes through a whole-collection save.
pub trait ResultsBackend: Send + Sync {
    fn exists(&self) -> bool;
    fn load(&self) -> Result<Vec<MatchResult>, StoreError>;
    fn save(&self, results: &[MatchResult]) -> Result<(), StoreError>;
}

/// Single pretty-printed JSON file holding the full result collection.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ResultsBackend for JsonFileBackend {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<Vec<MatchResult>, StoreError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, results: &[MatchResult]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(results)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) struct MemoryBackend {
    results: std::sync::Mutex<Vec<MatchResult>>,
}

#[cfg(test)]
impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            results: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl ResultsBackend for MemoryBackend {
    fn exists(&self) -> bool {
        true
    }

    fn load(&self) -> Result<Vec<MatchResult>, StoreError> {
        Ok(self.results.lock().unwrap().clone())
    }

    fn save(&self, results: &[MatchResult]) -> Result<(), StoreError> {
        *self.results.lock().unwrap() = results.to_vec();
        Ok(())
    }
}
