use crate::core::{Result, Store, Tables};
use crate::utils::error::ModelError;
use std::sync::{Mutex, MutexGuard};

/// Process-local store. A transaction works on a copy of the tables and
/// swaps it in only on success.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the committed state.
    pub fn snapshot(&self) -> Result<Tables> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| ModelError::storage("in-memory tables lock poisoned"))
    }
}

impl Store for InMemoryStore {
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tables) -> Result<T>,
    {
        let mut guard = self.lock()?;
        let mut working = guard.clone();
        let value = f(&mut working)?;
        *guard = working;
        Ok(value)
    }

    fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables) -> Result<T>,
    {
        let guard = self.lock()?;
        f(&*guard)
    }
}
