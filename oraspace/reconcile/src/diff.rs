//! Before/after diff of one reconciliation pass.

use oraspace_common::{ContentKind, FileLayout, TablespaceState};
use serde::Serialize;
use smol_str::SmolStr;

use crate::datafile::DatafileFacts;

/// Presence-aware state: the `before` side of a diff can be `absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceState {
    Online,
    Offline,
    Absent,
}

impl From<TablespaceState> for PresenceState {
    fn from(state: TablespaceState) -> Self {
        match state {
            TablespaceState::Online => Self::Online,
            TablespaceState::Offline => Self::Offline,
        }
    }
}

/// Every attribute the reconciler examines, as observed before the pass or
/// as intended after it. Attribute fields are absent for a tablespace that
/// does not exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablespaceFacts {
    pub tablespace: SmolStr,
    pub state: PresenceState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<FileLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub datafiles: Vec<DatafileFacts>,
}

impl TablespaceFacts {
    pub fn absent(name: &str) -> Self {
        Self {
            tablespace: SmolStr::new(name),
            state: PresenceState::Absent,
            read_only: None,
            layout: None,
            content: None,
            default: None,
            datafiles: Vec::new(),
        }
    }
}

/// The full diff handed back with every outcome, whether or not anything
/// changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablespaceDiff {
    pub before: TablespaceFacts,
    pub after: TablespaceFacts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_facts_serialize_sparsely() {
        let facts = TablespaceFacts::absent("TEST");
        let json = serde_json::to_value(&facts).unwrap();
        assert_eq!(
            serde_json::json!({"tablespace": "TEST", "state": "absent"}),
            json
        );
    }
}
