//! Tablespace reconciliation core.
//!
//! Given a desired tablespace description and a [`CatalogProvider`] view of
//! the live dictionary, the [`Reconciler`] computes and applies the minimal
//! ordered sequence of DDL statements needed to converge. Convergence never
//! shrinks a file, never touches an immutable attribute, and is safe to
//! re-run: every pass re-reads the dictionary and re-diffs.
//!
//! [`CatalogProvider`]: oraspace_catalog::CatalogProvider

pub mod datafile;
pub mod diff;
pub mod error;
pub mod executor;
pub mod reconciler;
pub mod spec;

pub use datafile::{Datafile, DatafileFacts};
pub use diff::{PresenceState, TablespaceDiff, TablespaceFacts};
pub use error::{ReconcileError, ReconcileResult};
pub use executor::{DdlEntry, RecordingExecutor, StatementError, StatementExecutor};
pub use reconciler::{Outcome, Reconciler};
pub use spec::{DatafileSpec, TablespaceSpec};
