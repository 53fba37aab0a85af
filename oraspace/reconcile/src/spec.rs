//! Desired tablespace descriptions, as supplied by the caller.

use oraspace_common::{ContentKind, FileLayout, Size, TablespaceState};
use smol_str::SmolStr;

use crate::datafile::Datafile;

/// Desired configuration of one backing file. The layout-dependent max
/// size coercion is applied when the owning [`TablespaceSpec`] materializes
/// its [`Datafile`]s, so the same spec can be reused across layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatafileSpec {
    path: String,
    size: Size,
    autoextend: bool,
    next_size: Option<Size>,
    max_size: Option<Size>,
}

impl DatafileSpec {
    pub fn new(path: impl Into<String>, size: Size) -> Self {
        Self {
            path: path.into(),
            size,
            autoextend: false,
            next_size: None,
            max_size: None,
        }
    }

    pub fn autoextend(mut self, autoextend: bool) -> Self {
        self.autoextend = autoextend;
        self
    }

    pub fn next_size(mut self, next_size: Size) -> Self {
        self.next_size = Some(next_size);
        self
    }

    pub fn max_size(mut self, max_size: Size) -> Self {
        self.max_size = Some(max_size);
        self
    }
}

/// Desired description of a tablespace: the immutable creation attributes,
/// the mutable attributes, and the full set of backing files.
///
/// The name is canonicalized to uppercase on construction, matching the
/// dictionary. Defaults are a smallfile permanent tablespace, online,
/// read-write, not the database default.
#[derive(Debug, Clone)]
pub struct TablespaceSpec {
    name: SmolStr,
    layout: FileLayout,
    content: ContentKind,
    state: TablespaceState,
    read_only: bool,
    default: bool,
    datafiles: Vec<DatafileSpec>,
}

impl TablespaceSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: SmolStr::new(name.to_uppercase()),
            layout: FileLayout::Smallfile,
            content: ContentKind::Permanent,
            state: TablespaceState::Online,
            read_only: false,
            default: false,
            datafiles: Vec::new(),
        }
    }

    pub fn with_layout(mut self, layout: FileLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_content(mut self, content: ContentKind) -> Self {
        self.content = content;
        self
    }

    pub fn with_state(mut self, state: TablespaceState) -> Self {
        self.state = state;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn as_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn with_datafile(mut self, datafile: DatafileSpec) -> Self {
        self.datafiles.push(datafile);
        self
    }

    pub fn name(&self) -> &SmolStr {
        &self.name
    }

    pub fn layout(&self) -> FileLayout {
        self.layout
    }

    pub fn content(&self) -> ContentKind {
        self.content
    }

    pub fn state(&self) -> TablespaceState {
        self.state
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_default(&self) -> bool {
        self.default
    }

    pub fn has_datafiles(&self) -> bool {
        !self.datafiles.is_empty()
    }

    /// Materializes the desired [`Datafile`]s, applying the layout-dependent
    /// max size coercion. Called once per reconciliation pass.
    pub fn datafiles(&self) -> Vec<Datafile> {
        self.datafiles
            .iter()
            .map(|file| {
                Datafile::new(
                    file.path.clone(),
                    file.size,
                    file.autoextend,
                    file.next_size,
                    file.max_size,
                    self.layout,
                )
            })
            .collect()
    }
}
