//! Error types for data dictionary access.

use thiserror::Error;

/// Result type for catalog lookups.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while inspecting the live data dictionary. A failed read
/// is always fatal for the pass that issued it; nothing is mutated before
/// the state of the tablespace is known.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A dictionary query failed on the server side.
    #[error("catalog query failed with code {code}: {message} (query: {request})")]
    Query {
        message: String,
        code: i32,
        request: String,
    },
}
