use crate::core::{Result, Store, Tables};
use crate::utils::error::ModelError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Keeps all three tables in one JSON document. Commits write a sibling
/// temp file and rename it over the original.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| ModelError::storage("file store lock poisoned"))
    }

    fn load(&self) -> Result<Tables> {
        if !self.path.exists() {
            tracing::debug!("{} does not exist yet, starting empty", self.path.display());
            return Ok(Tables::default());
        }
        let data = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn save(&self, tables: &Tables) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_vec_pretty(tables)?)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!("Saved tables to {}", self.path.display());
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tables) -> Result<T>,
    {
        let _guard = self.guard()?;
        let mut tables = self.load()?;
        let value = f(&mut tables)?;
        self.save(&tables)?;
        Ok(value)
    }

    fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables) -> Result<T>,
    {
        let _guard = self.guard()?;
        let tables = self.load()?;
        f(&tables)
    }
}
