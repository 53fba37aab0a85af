pub mod error;
pub mod memory;
pub mod provider;
pub mod record;

pub use error::{CatalogError, CatalogResult};
pub use memory::{MemoryCatalog, MemoryTablespace};
pub use provider::{CatalogProvider, CatalogRef};
pub use record::{DatafileRecord, TablespaceRecord};
