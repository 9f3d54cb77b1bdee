//! JSON-file-backed store of named grid snapshots.
//!
//! Records are `{ index, grid }` pairs in a single JSON file; index
//! assignment is `max(existing) + 1`. Cell-level gaps in a persisted
//! grid are healed by `set_values`' default-to-dead rule, but a record
//! with no grid payload at all is reported on load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// One persisted snapshot record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGrid {
    pub index: u32,
    /// Row-major live/dead values; absent in malformed records.
    #[serde(default)]
    pub grid: Option<Vec<Vec<bool>>>,
}

/// Store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed store file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No saved grid with index {index}")]
    NotFound { index: u32 },
    #[error("Saved grid {index} has no grid payload")]
    MissingPayload { index: u32 },
}

/// Ordered key-value store of saved grids in one JSON file.
///
/// A missing file reads as an empty store; every write rewrites the
/// whole file.
pub struct GridStore {
    path: PathBuf,
}

impl GridStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_all(&self) -> Result<Vec<SavedGrid>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, records: &[SavedGrid]) -> Result<(), StoreError> {
        fs::write(&self.path, serde_json::to_string(records)?)?;
        Ok(())
    }

    /// Indices of all saved grids, in storage order.
    pub fn list(&self) -> Result<Vec<u32>, StoreError> {
        Ok(self.read_all()?.iter().map(|record| record.index).collect())
    }

    /// Append a snapshot; the new record gets `max(existing) + 1`.
    pub fn save(&self, values: Vec<Vec<bool>>) -> Result<u32, StoreError> {
        let mut records = self.read_all()?;
        let index = records
            .iter()
            .map(|record| record.index)
            .max()
            .map_or(0, |max| max + 1);
        records.push(SavedGrid {
            index,
            grid: Some(values),
        });
        self.write_all(&records)?;
        info!("saved grid {} to {}", index, self.path.display());
        Ok(index)
    }

    /// Load a snapshot by index.
    pub fn load(&self, index: u32) -> Result<Vec<Vec<bool>>, StoreError> {
        let records = self.read_all()?;
        let record = records
            .into_iter()
            .find(|record| record.index == index)
            .ok_or(StoreError::NotFound { index })?;
        match record.grid {
            Some(values) => Ok(values),
            None => {
                warn!("saved grid {} has no payload", index);
                Err(StoreError::MissingPayload { index })
            }
        }
    }

    /// Delete a snapshot by index.
    pub fn delete(&self, index: u32) -> Result<(), StoreError> {
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|record| record.index != index);
        if records.len() == before {
            return Err(StoreError::NotFound { index });
        }
        self.write_all(&records)?;
        info!("deleted grid {} from {}", index, self.path.display());
        Ok(())
    }
}
