//! One backing file of a tablespace, with its change-detection rules.

use std::fmt::Write as _;

use oraspace_catalog::record::DatafileRecord;
use oraspace_common::{FileLayout, Size};
use serde::Serialize;

/// Smallfile datafiles top out just below 32G, so a configured max size
/// within this tolerance of the ceiling means "as large as the platform
/// allows" and is treated as unlimited.
const SMALLFILE_CEILING: u128 = 32 * 1024 * 1024 * 1024;
const CEILING_TOLERANCE: u128 = 100 * 1024;

/// A backing file's desired (or previously observed) configuration.
///
/// Instances are built fresh on every reconciliation pass and never mutated
/// in place; change detection always compares a desired instance against a
/// freshly read previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datafile {
    path: String,
    size: Size,
    autoextend: bool,
    next_size: Option<Size>,
    max_size: Option<Size>,
}

impl Datafile {
    pub fn new(
        path: impl Into<String>,
        size: Size,
        autoextend: bool,
        next_size: Option<Size>,
        max_size: Option<Size>,
        layout: FileLayout,
    ) -> Self {
        let max_size = max_size.map(|max| coerce_max_size(max, layout));
        Self {
            path: path.into(),
            size,
            autoextend,
            next_size,
            max_size,
        }
    }

    /// Builds the "previous" instance from a dictionary row.
    pub fn from_record(record: &DatafileRecord, layout: FileLayout) -> Self {
        Self::new(
            record.path.clone(),
            Size::from_bytes(record.bytes),
            record.autoextend,
            record.next_bytes.map(Size::from_bytes),
            record.max_bytes.map(Size::from_bytes),
            layout,
        )
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn autoextend(&self) -> bool {
        self.autoextend
    }

    pub fn next_size(&self) -> Option<Size> {
        self.next_size
    }

    pub fn max_size(&self) -> Option<Size> {
        self.max_size
    }

    /// A resize fires only for a static file that must grow. Shrinking and
    /// resizing an autoextending file are never attempted.
    pub fn needs_resize(&self, previous: &Datafile) -> bool {
        !self.autoextend && previous.size < self.size
    }

    /// An autoextend change fires when the flag flips in either direction,
    /// or when autoextend stays on and a specified max or next increment
    /// differs from the previous file. An unspecified desired max or next
    /// never triggers a change by itself.
    pub fn needs_autoextend_change(&self, previous: &Datafile) -> bool {
        self.autoextend != previous.autoextend
            || (self.autoextend
                && (self
                    .max_size
                    .is_some_and(|max| Some(max) != previous.max_size)
                    || self
                        .next_size
                        .is_some_and(|next| Some(next) != previous.next_size)))
    }

    /// `autoextend off` or `autoextend on [next <s>] [maxsize <s>]`.
    pub fn autoextend_clause(&self) -> String {
        if !self.autoextend {
            return "autoextend off".to_string();
        }
        let mut clause = String::from("autoextend on");
        if let Some(next) = self.next_size {
            let _ = write!(clause, " next {next}");
        }
        if let Some(max) = self.max_size {
            let _ = write!(clause, " maxsize {max}");
        }
        clause
    }

    /// `size <s> reuse autoextend ...`
    pub fn file_specification_clause(&self) -> String {
        format!("size {} reuse {}", self.size, self.autoextend_clause())
    }

    /// `'<path>' size <s> reuse autoextend ...`
    pub fn datafile_clause(&self) -> String {
        format!("'{}' {}", self.path, self.file_specification_clause())
    }

    /// Summary for the before/after diff. Next and max sizes only carry
    /// meaning while autoextend is on, so they are dropped otherwise.
    pub fn facts(&self) -> DatafileFacts {
        DatafileFacts {
            path: self.path.clone(),
            size: self.size,
            autoextend: self.autoextend,
            next_size: if self.autoextend { self.next_size } else { None },
            max_size: if self.autoextend { self.max_size } else { None },
        }
    }
}

fn coerce_max_size(max: Size, layout: FileLayout) -> Size {
    if layout.is_bigfile() {
        return max;
    }
    match max.as_bytes() {
        Some(bytes) if bytes.abs_diff(SMALLFILE_CEILING) <= CEILING_TOLERANCE => Size::UNLIMITED,
        _ => max,
    }
}

/// Diff-facing summary of one datafile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatafileFacts {
    pub path: String,
    pub size: Size,
    pub autoextend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<Size>,
}
