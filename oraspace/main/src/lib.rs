//! Declarative management of Oracle tablespaces.
//!
//! Callers describe the tablespace they want; a [`Session`] reconciles that
//! description against the live dictionary and applies (or, in dry-run,
//! records) the DDL needed to converge.

pub mod session;

pub use oraspace_catalog as catalog;
pub use oraspace_common::{ContentKind, FileLayout, Size, SizeParseError, TablespaceState};
pub use oraspace_reconcile::{
    DatafileSpec, DdlEntry, Outcome, ReconcileError, ReconcileResult, RecordingExecutor,
    StatementError, StatementExecutor, TablespaceSpec,
};
pub use session::{DesiredState, Session, SessionOptions};
