use oraspace_catalog::provider::CatalogRef;
use oraspace_common::TablespaceState;
use oraspace_reconcile::error::ReconcileResult;
use oraspace_reconcile::executor::StatementExecutor;
use oraspace_reconcile::reconciler::{Outcome, Reconciler};
use oraspace_reconcile::spec::TablespaceSpec;

/// Requested terminal state for a tablespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DesiredState {
    /// Synonym for [`DesiredState::Online`].
    #[default]
    Present,
    Online,
    Offline,
    Absent,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Compute the full plan but execute nothing.
    pub dry_run: bool,
}

/// Binds a dictionary view and an executor together for a series of
/// reconciliation passes. Each call to [`Session::ensure`] is one complete
/// pass: re-read, re-diff, apply.
pub struct Session<E> {
    catalog: CatalogRef,
    executor: E,
    options: SessionOptions,
}

impl<E: StatementExecutor> Session<E> {
    pub fn new(catalog: CatalogRef, executor: E, options: SessionOptions) -> Self {
        Self {
            catalog,
            executor,
            options,
        }
    }

    pub fn ensure(&mut self, spec: &TablespaceSpec, state: DesiredState) -> ReconcileResult<Outcome> {
        let reconciler = Reconciler::new(
            self.catalog.as_ref(),
            &mut self.executor,
            self.options.dry_run,
        );
        match state {
            DesiredState::Absent => reconciler.ensure_absent(spec.name()),
            DesiredState::Present | DesiredState::Online => {
                let spec = spec.clone().with_state(TablespaceState::Online);
                reconciler.ensure_present(&spec)
            }
            DesiredState::Offline => {
                let spec = spec.clone().with_state(TablespaceState::Offline);
                reconciler.ensure_present(&spec)
            }
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }
}
