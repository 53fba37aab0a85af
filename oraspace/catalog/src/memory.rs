//! In-memory catalog used by tests and harnesses.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use smol_str::SmolStr;

use crate::error::CatalogResult;
use crate::provider::CatalogProvider;
use crate::record::{DatafileRecord, TablespaceRecord};

/// A tablespace plus its backing files, as a memory catalog stores them.
#[derive(Debug, Clone)]
pub struct MemoryTablespace {
    pub record: TablespaceRecord,
    pub datafiles: Vec<DatafileRecord>,
}

/// Mutable in-memory [`CatalogProvider`]. Lookups are keyed by uppercase
/// tablespace name, matching the dictionary's canonicalization.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    tablespaces: RwLock<BTreeMap<SmolStr, MemoryTablespace>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a tablespace.
    pub fn put(&self, tablespace: MemoryTablespace) {
        let key = SmolStr::new(tablespace.record.name.to_uppercase());
        self.tablespaces.write().insert(key, tablespace);
    }

    /// Removes a tablespace, returning whether it existed.
    pub fn remove(&self, name: &str) -> bool {
        let key = SmolStr::new(name.to_uppercase());
        self.tablespaces.write().remove(&key).is_some()
    }
}

impl CatalogProvider for MemoryCatalog {
    fn get_tablespace(&self, name: &str) -> CatalogResult<Option<TablespaceRecord>> {
        let key = name.to_uppercase();
        Ok(self
            .tablespaces
            .read()
            .get(key.as_str())
            .map(|tablespace| tablespace.record.clone()))
    }

    fn get_datafiles(&self, name: &str) -> CatalogResult<Vec<DatafileRecord>> {
        let key = name.to_uppercase();
        Ok(self
            .tablespaces
            .read()
            .get(key.as_str())
            .map(|tablespace| tablespace.datafiles.clone())
            .unwrap_or_default())
    }
}
