//! The statement execution boundary.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Failure reported by an executor for a single statement.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} (code {code})")]
pub struct StatementError {
    pub message: String,
    pub code: i32,
}

/// Applies one DDL statement to the live system. In dry-run mode the
/// reconciler never calls this; statements are only recorded.
pub trait StatementExecutor {
    fn run(&mut self, ddl: &str) -> Result<(), StatementError>;
}

/// One entry of the convergence plan, in emission order. Entries recorded
/// during a dry run carry `executed = false` and render comment-marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DdlEntry {
    pub text: String,
    pub executed: bool,
}

impl fmt::Display for DdlEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.executed {
            f.write_str(&self.text)
        } else {
            write!(f, "-- {}", self.text)
        }
    }
}

/// Executor double that records every statement it is handed, optionally
/// failing on the nth one. Used in tests and harnesses.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    statements: Vec<String>,
    fail_on: Option<(usize, StatementError)>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the statement at `index` (zero-based) with the given error;
    /// every other statement succeeds.
    pub fn failing_at(index: usize, message: impl Into<String>, code: i32) -> Self {
        Self {
            statements: Vec::new(),
            fail_on: Some((
                index,
                StatementError {
                    message: message.into(),
                    code,
                },
            )),
        }
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }
}

impl StatementExecutor for RecordingExecutor {
    fn run(&mut self, ddl: &str) -> Result<(), StatementError> {
        if let Some((index, error)) = &self.fail_on {
            if *index == self.statements.len() {
                return Err(error.clone());
            }
        }
        self.statements.push(ddl.to_string());
        Ok(())
    }
}
