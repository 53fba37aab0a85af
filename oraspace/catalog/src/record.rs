//! Typed rows returned by catalog providers.
//!
//! Providers translate whatever row shape the dictionary hands back into
//! these records at the boundary, so the reconciler never sees positional
//! fields.

use oraspace_common::{ContentKind, FileLayout, TablespaceState};
use smol_str::SmolStr;

/// Tablespace-level facts as observed in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablespaceRecord {
    /// Tablespace name, uppercase.
    pub name: SmolStr,
    pub state: TablespaceState,
    pub read_only: bool,
    pub layout: FileLayout,
    pub content: ContentKind,
    /// Whether this is the database default tablespace for its content
    /// kind.
    pub default: bool,
}

/// One backing file as observed in the dictionary. Sizes are raw byte
/// counts; `next_bytes` and `max_bytes` are absent when the dictionary
/// reports no autoextend policy for the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatafileRecord {
    pub path: String,
    pub bytes: u128,
    pub autoextend: bool,
    pub next_bytes: Option<u128>,
    pub max_bytes: Option<u128>,
}
