//! The diff/convergence algorithm.

use itertools::Itertools;
use oraspace_catalog::provider::CatalogProvider;
use oraspace_catalog::record::TablespaceRecord;
use serde::Serialize;
use smol_str::SmolStr;
use tracing::{debug, info};

use crate::datafile::Datafile;
use crate::diff::{TablespaceDiff, TablespaceFacts};
use crate::error::{ReconcileError, ReconcileResult};
use crate::executor::{DdlEntry, StatementExecutor};
use crate::spec::TablespaceSpec;

/// Result of one reconciliation pass. `changed` is true iff at least one
/// statement was (or, in dry-run, would be) emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub changed: bool,
    pub message: String,
    pub ddls: Vec<DdlEntry>,
    pub diff: TablespaceDiff,
}

/// One reconciliation pass over one tablespace.
///
/// The reconciler owns no state beyond the plan it accumulates: the
/// dictionary view and the executor are borrowed from the caller, and each
/// pass re-reads and re-diffs, so a pass is safe to re-run after a failure.
/// Exclusive logical ownership of the target tablespace for the duration of
/// the pass is assumed; serialization across callers is not provided here.
pub struct Reconciler<'a> {
    catalog: &'a dyn CatalogProvider,
    executor: &'a mut dyn StatementExecutor,
    dry_run: bool,
    ddls: Vec<DdlEntry>,
}

struct CurrentTablespace {
    record: TablespaceRecord,
    datafiles: Vec<Datafile>,
}

impl<'a> Reconciler<'a> {
    pub fn new(
        catalog: &'a dyn CatalogProvider,
        executor: &'a mut dyn StatementExecutor,
        dry_run: bool,
    ) -> Self {
        Self {
            catalog,
            executor,
            dry_run,
            ddls: Vec::new(),
        }
    }

    /// Converges the tablespace toward `spec`: creates it when absent,
    /// otherwise alters whatever differs, in an order where capacity
    /// changes land before drops and container attributes follow the files.
    pub fn ensure_present(mut self, spec: &TablespaceSpec) -> ReconcileResult<Outcome> {
        if !spec.has_datafiles() {
            return Err(ReconcileError::MissingDatafiles {
                name: spec.name().clone(),
            });
        }
        let desired_files = spec.datafiles();
        let current = self.read_current(spec.name())?;
        let after = desired_facts(spec, &desired_files);

        let Some(current) = current else {
            let before = TablespaceFacts::absent(spec.name());
            return self.create(spec, &desired_files, before, after);
        };
        let before = current_facts(spec.name(), &current);

        // Immutable-attribute guards: these can never be altered, so a
        // mismatch is fatal before anything is emitted.
        if current.record.layout != spec.layout() {
            return Err(ReconcileError::ImmutableAttribute {
                name: spec.name().clone(),
                current: current.record.layout.to_string(),
                requested: spec.layout().to_string(),
            });
        }
        if current.record.content != spec.content() {
            return Err(ReconcileError::ImmutableAttribute {
                name: spec.name().clone(),
                current: current.record.content.to_string(),
                requested: spec.content().to_string(),
            });
        }

        self.converge_datafiles(spec, &desired_files, &current)?;

        // Container attributes follow the files, so the tablespace comes
        // online only once its files are in shape; read-only follows the
        // state change; default promotion applies to the converged result.
        if current.record.state != spec.state() {
            self.execute(format!("alter tablespace {} {}", spec.name(), spec.state()))?;
        }
        if current.record.read_only != spec.is_read_only() {
            let mode = if spec.is_read_only() {
                "read only"
            } else {
                "read write"
            };
            self.execute(format!("alter tablespace {} {}", spec.name(), mode))?;
        }
        // Promotion is one-directional: an existing default is never
        // demoted here.
        if spec.is_default() && !current.record.default {
            self.execute(default_promotion_ddl(spec))?;
        }

        let message = if self.ddls.is_empty() {
            format!("Tablespace {} already exists.", spec.name())
        } else {
            format!("Tablespace {} changed.", spec.name())
        };
        Ok(self.into_outcome(message, before, after))
    }

    /// Drops the tablespace with everything it holds, or does nothing if it
    /// is already absent.
    pub fn ensure_absent(mut self, name: &str) -> ReconcileResult<Outcome> {
        let name = SmolStr::new(name.to_uppercase());
        let current = self.read_current(&name)?;
        let after = TablespaceFacts::absent(&name);
        match current {
            Some(current) => {
                let before = current_facts(&name, &current);
                self.execute(format!(
                    "drop tablespace {name} including contents and datafiles"
                ))?;
                let message = format!("Tablespace {name} dropped.");
                Ok(self.into_outcome(message, before, after))
            }
            None => {
                let before = TablespaceFacts::absent(&name);
                let message = format!("Tablespace {name} doesn't exist.");
                Ok(self.into_outcome(message, before, after))
            }
        }
    }

    fn read_current(&self, name: &str) -> ReconcileResult<Option<CurrentTablespace>> {
        let Some(record) = self.catalog.get_tablespace(name)? else {
            return Ok(None);
        };
        let datafiles = self
            .catalog
            .get_datafiles(name)?
            .iter()
            .map(|row| Datafile::from_record(row, record.layout))
            .collect();
        Ok(Some(CurrentTablespace { record, datafiles }))
    }

    fn create(
        mut self,
        spec: &TablespaceSpec,
        desired_files: &[Datafile],
        before: TablespaceFacts,
        after: TablespaceFacts,
    ) -> ReconcileResult<Outcome> {
        let files = desired_files
            .iter()
            .map(Datafile::datafile_clause)
            .join(", ");
        let kind = spec.content().create_clause();
        let ddl = if kind.is_empty() {
            format!(
                "create {} tablespace {} {} {}",
                spec.layout(),
                spec.name(),
                spec.content().file_keyword(),
                files
            )
        } else {
            format!(
                "create {} {} tablespace {} {} {}",
                spec.layout(),
                kind,
                spec.name(),
                spec.content().file_keyword(),
                files
            )
        };
        self.execute(ddl)?;
        if spec.is_default() {
            self.execute(default_promotion_ddl(spec))?;
        }
        // A fresh tablespace starts online and read-write, so only a
        // read-only request needs a follow-up statement.
        if spec.is_read_only() {
            self.execute(format!("alter tablespace {} read only", spec.name()))?;
        }
        let message = format!("Tablespace {} created.", spec.name());
        Ok(self.into_outcome(message, before, after))
    }

    /// Per-file reconciliation over the path union of desired and current.
    /// Resizes and additions are emitted first; drops of no-longer-wanted
    /// files are collected and emitted last, so growth is never starved by
    /// a drop in the same pass.
    fn converge_datafiles(
        &mut self,
        spec: &TablespaceSpec,
        desired_files: &[Datafile],
        current: &CurrentTablespace,
    ) -> ReconcileResult<()> {
        let file_keyword = spec.content().file_keyword();
        for datafile in desired_files {
            match current
                .datafiles
                .iter()
                .find(|previous| previous.path() == datafile.path())
            {
                Some(previous) => {
                    // Resize and autoextend changes are orthogonal; both may
                    // fire for the same file in the same pass.
                    if datafile.needs_resize(previous) {
                        self.execute(format!(
                            "alter database datafile '{}' resize {}",
                            datafile.path(),
                            datafile.size()
                        ))?;
                    }
                    if datafile.needs_autoextend_change(previous) {
                        self.execute(format!(
                            "alter database {} '{}' {}",
                            file_keyword,
                            datafile.path(),
                            datafile.autoextend_clause()
                        ))?;
                    }
                }
                None => {
                    self.execute(format!(
                        "alter tablespace {} add {} {}",
                        spec.name(),
                        file_keyword,
                        datafile.datafile_clause()
                    ))?;
                }
            }
        }
        for previous in &current.datafiles {
            if desired_files
                .iter()
                .all(|datafile| datafile.path() != previous.path())
            {
                self.execute(format!(
                    "alter tablespace {} drop {} '{}'",
                    spec.name(),
                    file_keyword,
                    previous.path()
                ))?;
            }
        }
        Ok(())
    }

    fn execute(&mut self, ddl: String) -> ReconcileResult<()> {
        if self.dry_run {
            debug!(%ddl, "dry run, recording only");
            self.ddls.push(DdlEntry {
                text: ddl,
                executed: false,
            });
            return Ok(());
        }
        debug!(%ddl, "executing");
        match self.executor.run(&ddl) {
            Ok(()) => {
                self.ddls.push(DdlEntry {
                    text: ddl,
                    executed: true,
                });
                Ok(())
            }
            Err(source) => Err(ReconcileError::Statement {
                ddl,
                source,
                applied: self.ddls.iter().map(|entry| entry.text.clone()).collect(),
            }),
        }
    }

    fn into_outcome(
        self,
        message: String,
        before: TablespaceFacts,
        after: TablespaceFacts,
    ) -> Outcome {
        let changed = !self.ddls.is_empty();
        info!(changed, %message, statements = self.ddls.len(), "pass finished");
        Outcome {
            changed,
            message,
            ddls: self.ddls,
            diff: TablespaceDiff { before, after },
        }
    }
}

fn current_facts(name: &str, current: &CurrentTablespace) -> TablespaceFacts {
    TablespaceFacts {
        tablespace: SmolStr::new(name),
        state: current.record.state.into(),
        read_only: Some(current.record.read_only),
        layout: Some(current.record.layout),
        content: Some(current.record.content),
        default: Some(current.record.default),
        datafiles: current.datafiles.iter().map(Datafile::facts).collect(),
    }
}

fn desired_facts(spec: &TablespaceSpec, desired_files: &[Datafile]) -> TablespaceFacts {
    TablespaceFacts {
        tablespace: spec.name().clone(),
        state: spec.state().into(),
        read_only: Some(spec.is_read_only()),
        layout: Some(spec.layout()),
        content: Some(spec.content()),
        default: Some(spec.is_default()),
        datafiles: desired_files.iter().map(Datafile::facts).collect(),
    }
}

fn default_promotion_ddl(spec: &TablespaceSpec) -> String {
    let kind = spec.content().create_clause();
    if kind.is_empty() {
        format!("alter database default tablespace {}", spec.name())
    } else {
        format!("alter database default {} tablespace {}", kind, spec.name())
    }
}
