use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the installed-modules table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRow {
    pub name: String,
    pub active: bool,
}

impl ModuleRow {
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            active,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read module store {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse module store {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Read access to installed modules.
pub trait ModuleStore {
    /// All rows, ordered by name ascending.
    fn modules(&self) -> Result<Vec<ModuleRow>, StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryModuleStore {
    rows: Vec<ModuleRow>,
}

impl InMemoryModuleStore {
    pub fn new(mut rows: Vec<ModuleRow>) -> Self {
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Self { rows }
    }
}

impl ModuleStore for InMemoryModuleStore {
    fn modules(&self) -> Result<Vec<ModuleRow>, StoreError> {
        Ok(self.rows.clone())
    }
}

/// Module table kept as a RON list of rows.
#[derive(Debug, Clone)]
pub struct RonModuleStore {
    path: PathBuf,
}

impl RonModuleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ModuleStore for RonModuleStore {
    fn modules(&self) -> Result<Vec<ModuleRow>, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut rows: Vec<ModuleRow> =
            ron::from_str(&content).map_err(|err| StoreError::Parse {
                path: self.path.clone(),
                message: err.to_string(),
            })?;
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}
