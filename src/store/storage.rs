use super::types::{StoreState, StudentRecord, STORE_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

/// Keyed access to saved student records.
pub trait RecordStore {
    fn get(&self, id: &str) -> Result<Option<StudentRecord>>;
    fn put(&mut self, record: StudentRecord) -> Result<()>;
    /// Returns true if a record was removed.
    fn remove(&mut self, id: &str) -> Result<bool>;
    /// All records ordered by id.
    fn list(&self) -> Result<Vec<StudentRecord>>;
}

/// Get the default store path (~/.config/bac-compass/students.json)
pub fn get_store_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("students.json"))
}

/// Load store state from a JSON file
///
/// If the file doesn't exist, returns a new empty state.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_store_state(path: &Path) -> Result<StoreState> {
    if !path.exists() {
        return Ok(StoreState::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open student store at {}", path.display()))?;

    let state: StoreState =
        serde_json::from_reader(file).context("Failed to load student store")?;

    if state.version != STORE_VERSION {
        anyhow::bail!("Unsupported student store version: {}", state.version);
    }

    Ok(state)
}

/// Save store state to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_store_state(path: &Path, state: &StoreState) -> Result<()> {
    crate::config::ensure_parent_dir(path)?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, state).context("Failed to serialize student store")?;

    file.commit().context("Failed to save student store")?;

    Ok(())
}

/// In-memory store, for tests and one-shot sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: StoreState,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Option<StudentRecord>> {
        Ok(self.state.students.get(id).cloned())
    }

    fn put(&mut self, record: StudentRecord) -> Result<()> {
        self.state.students.insert(record.id.clone(), record);
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<bool> {
        Ok(self.state.students.remove(id).is_some())
    }

    fn list(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.state.students.values().cloned().collect())
    }
}

/// Store backed by a JSON file; every mutation rewrites the file atomically.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: StoreState,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = load_store_state(&path)?;
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn get(&self, id: &str) -> Result<Option<StudentRecord>> {
        Ok(self.state.students.get(id).cloned())
    }

    fn put(&mut self, record: StudentRecord) -> Result<()> {
        let id = record.id.clone();
        self.state.students.insert(id.clone(), record);
        save_store_state(&self.path, &self.state)?;
        info!(%id, path = %self.path.display(), "saved student record");
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<bool> {
        if self.state.students.remove(id).is_none() {
            return Ok(false);
        }
        save_store_state(&self.path, &self.state)?;
        info!(%id, path = %self.path.display(), "removed student record");
        Ok(true)
    }

    fn list(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.state.students.values().cloned().collect())
    }
}
