use std::fmt::Debug;
use std::sync::Arc;

use crate::error::CatalogResult;
use crate::record::{DatafileRecord, TablespaceRecord};

pub type CatalogRef = Arc<dyn CatalogProvider>;

/// Read-only view of the data dictionary.
///
/// The reconciler re-reads through this trait at the start of every pass;
/// implementations must answer from live state, not from a cache of a
/// previous pass.
pub trait CatalogProvider: Debug + Send + Sync {
    /// Looks up a tablespace by name. `None` means no tablespace of that
    /// name exists.
    fn get_tablespace(&self, name: &str) -> CatalogResult<Option<TablespaceRecord>>;

    /// Returns every backing file of the named tablespace. Empty when the
    /// tablespace does not exist.
    fn get_datafiles(&self, name: &str) -> CatalogResult<Vec<DatafileRecord>>;
}
