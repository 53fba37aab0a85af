use miette::Diagnostic;
use oraspace_catalog::error::CatalogError;
use smol_str::SmolStr;
use thiserror::Error;

use crate::executor::StatementError;

pub type ReconcileResult<T> = std::result::Result<T, ReconcileError>;

/// Fatal outcomes of a reconciliation pass. None of these are retried
/// internally; the pass stops and reports with enough context to diagnose.
#[derive(Debug, Error, Diagnostic)]
pub enum ReconcileError {
    /// The desired configuration asks for a different value of an attribute
    /// that is fixed at creation. Raised before any statement is emitted.
    #[error("cannot convert tablespace {name} from {current} to {requested}")]
    #[diagnostic(code(reconcile::immutable_attribute))]
    ImmutableAttribute {
        name: SmolStr,
        current: String,
        requested: String,
    },

    /// The desired configuration names no backing files for a tablespace
    /// that should exist.
    #[error("tablespace {name} requires at least one datafile")]
    #[diagnostic(code(reconcile::missing_datafiles))]
    MissingDatafiles { name: SmolStr },

    /// The dictionary could not be read. Raised before any statement is
    /// emitted.
    #[error(transparent)]
    #[diagnostic(code(reconcile::catalog))]
    Catalog(#[from] CatalogError),

    /// A planned statement failed when applied. Statements already executed
    /// remain in effect; `applied` lists them in execution order.
    #[error("ddl failed: {ddl}")]
    #[diagnostic(
        code(reconcile::statement),
        help("statements already applied remain in effect")
    )]
    Statement {
        ddl: String,
        #[source]
        source: StatementError,
        applied: Vec<String>,
    },
}
