//! Tablespace attribute enums shared across the workspace.

use std::fmt;

use serde::Serialize;

/// Whether a tablespace is backed by one large file or several smaller ones.
/// Fixed once the tablespace is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileLayout {
    Smallfile,
    Bigfile,
}

impl FileLayout {
    pub const fn is_bigfile(&self) -> bool {
        matches!(self, Self::Bigfile)
    }
}

impl fmt::Display for FileLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Smallfile => "smallfile",
            Self::Bigfile => "bigfile",
        })
    }
}

/// Functional class of a tablespace. Fixed once the tablespace is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentKind {
    #[serde(rename = "permanent")]
    Permanent,
    #[serde(rename = "undo")]
    Undo,
    #[serde(rename = "temp")]
    Temporary,
}

impl ContentKind {
    /// Keyword inserted between `create` and `tablespace`, empty for
    /// permanent tablespaces.
    pub const fn create_clause(&self) -> &'static str {
        match self {
            Self::Permanent => "",
            Self::Undo => "undo",
            Self::Temporary => "temporary",
        }
    }

    /// Keyword naming the backing files in DDL.
    pub const fn file_keyword(&self) -> &'static str {
        match self {
            Self::Permanent | Self::Undo => "datafile",
            Self::Temporary => "tempfile",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Permanent => "permanent",
            Self::Undo => "undo",
            Self::Temporary => "temp",
        })
    }
}

/// Operational state of a tablespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TablespaceState {
    Online,
    Offline,
}

impl fmt::Display for TablespaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Online => "online",
            Self::Offline => "offline",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!("smallfile", FileLayout::Smallfile.to_string());
        assert_eq!("bigfile", FileLayout::Bigfile.to_string());
        assert_eq!("permanent", ContentKind::Permanent.to_string());
        assert_eq!("temp", ContentKind::Temporary.to_string());
        assert_eq!("online", TablespaceState::Online.to_string());
        assert_eq!("offline", TablespaceState::Offline.to_string());
    }

    #[test]
    fn ddl_keywords() {
        assert_eq!("", ContentKind::Permanent.create_clause());
        assert_eq!("undo", ContentKind::Undo.create_clause());
        assert_eq!("temporary", ContentKind::Temporary.create_clause());
        assert_eq!("datafile", ContentKind::Permanent.file_keyword());
        assert_eq!("datafile", ContentKind::Undo.file_keyword());
        assert_eq!("tempfile", ContentKind::Temporary.file_keyword());
    }
}
