//! # Collector Hooks
//!
//! Named accessors that hand out a cursor's phase collectors.
//!
//! A producer resolves the hooks it needs by name once, then uses them for
//! every cursor it fills. `CollectorHooks::get` performs that resolution a
//! single time per process and memoises the outcome. A failed resolution is
//! memoised too and handed back on every later call.

use crate::collector::PhaseCollector;
use crate::cursor::StatementResult;
use crate::FixtureError;
use std::fmt;
use std::sync::OnceLock;

/// Name of the hook that yields the run-phase collector.
pub const RUN_RESPONSE_COLLECTOR: &str = "runResponseCollector";

/// Name of the hook that yields the pull-phase collector.
pub const PULL_ALL_RESPONSE_COLLECTOR: &str = "pullAllResponseCollector";

/// Accessor for one of a cursor's phase collectors.
pub type CollectorHook =
    for<'a> fn(&'a mut StatementResult) -> Result<&'a mut dyn PhaseCollector, FixtureError>;

static HOOKS: OnceLock<Result<CollectorHooks, FixtureError>> = OnceLock::new();

/// The resolved run and pull hooks.
#[derive(Clone, Copy)]
pub struct CollectorHooks {
    run: CollectorHook,
    pull: CollectorHook,
}

impl CollectorHooks {
    /// Resolve both hooks by name.
    ///
    /// Returns `PrivilegedAccessFailure` naming the first hook that the
    /// cursor type does not expose.
    pub fn resolve(run: &str, pull: &str) -> Result<Self, FixtureError> {
        let lookup = |name: &str| {
            StatementResult::hook(name).ok_or_else(|| {
                FixtureError::PrivilegedAccessFailure(format!(
                    "StatementResult exposes no collector hook named '{}'",
                    name
                ))
            })
        };

        Ok(Self {
            run: lookup(run)?,
            pull: lookup(pull)?,
        })
    }

    /// The process-wide hooks, resolved on first use.
    pub fn get() -> Result<Self, FixtureError> {
        Self::resolve_once(&HOOKS, RUN_RESPONSE_COLLECTOR, PULL_ALL_RESPONSE_COLLECTOR)
    }

    /// Resolve into `cell` unless it already holds an outcome.
    ///
    /// Whatever the first call produced, success or failure, is returned
    /// to every later caller; the names passed afterwards are ignored.
    pub(crate) fn resolve_once(
        cell: &OnceLock<Result<Self, FixtureError>>,
        run: &str,
        pull: &str,
    ) -> Result<Self, FixtureError> {
        cell.get_or_init(|| {
            let resolved = Self::resolve(run, pull);
            match &resolved {
                Ok(_) => tracing::debug!(run, pull, "collector hooks resolved"),
                Err(e) => tracing::error!(error = %e, "collector hooks unavailable"),
            }
            resolved
        })
        .clone()
    }

    /// Borrow the run-phase collector of `cursor`.
    pub fn run_collector<'a>(
        &self,
        cursor: &'a mut StatementResult,
    ) -> Result<&'a mut dyn PhaseCollector, FixtureError> {
        (self.run)(cursor)
    }

    /// Borrow the pull-phase collector of `cursor`.
    ///
    /// Fails with `ProtocolViolation` until the run phase is done.
    pub fn pull_collector<'a>(
        &self,
        cursor: &'a mut StatementResult,
    ) -> Result<&'a mut dyn PhaseCollector, FixtureError> {
        (self.pull)(cursor)
    }
}

impl fmt::Debug for CollectorHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectorHooks").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{Phase, PhaseState};
    use crate::connection::NullConnection;
    use std::sync::Arc;

    #[test]
    fn unknown_hook_is_privileged_access_failure() {
        let err = CollectorHooks::resolve(RUN_RESPONSE_COLLECTOR, "pull_all_response_collector")
            .expect_err("snake-case name is not exposed");
        assert_eq!(
            err,
            FixtureError::PrivilegedAccessFailure(
                "StatementResult exposes no collector hook named 'pull_all_response_collector'"
                    .to_string()
            )
        );
    }

    #[test]
    fn published_hook_names_resolve() {
        assert!(CollectorHooks::resolve("runResponseCollector", "pullAllResponseCollector").is_ok());
        assert!(StatementResult::hook(RUN_RESPONSE_COLLECTOR).is_some());
        assert!(StatementResult::hook(PULL_ALL_RESPONSE_COLLECTOR).is_some());
    }

    #[test]
    fn failed_resolution_is_never_retried() {
        let cell = OnceLock::new();

        let first = CollectorHooks::resolve_once(&cell, "recordCollector", PULL_ALL_RESPONSE_COLLECTOR)
            .expect_err("unknown run hook");
        assert!(matches!(first, FixtureError::PrivilegedAccessFailure(_)));

        // Valid names are ignored once the cell holds the failure.
        let second =
            CollectorHooks::resolve_once(&cell, RUN_RESPONSE_COLLECTOR, PULL_ALL_RESPONSE_COLLECTOR)
                .expect_err("failure is memoised");
        assert_eq!(first, second);
        assert!(matches!(cell.get(), Some(Err(_))));
    }

    #[test]
    fn successful_resolution_is_reused() {
        let cell = OnceLock::new();
        CollectorHooks::resolve_once(&cell, RUN_RESPONSE_COLLECTOR, PULL_ALL_RESPONSE_COLLECTOR)
            .expect("first resolution");

        // A bad name cannot disturb an already resolved cell.
        let again = CollectorHooks::resolve_once(&cell, "recordCollector", "recordCollector");
        assert!(again.is_ok());
        assert!(CollectorHooks::get().is_ok());
    }

    #[test]
    fn hooks_drive_a_cursor() {
        let hooks = CollectorHooks::get().expect("hooks");
        let mut cursor = StatementResult::new(Arc::new(NullConnection));

        let run = hooks.run_collector(&mut cursor).expect("run");
        assert_eq!(run.phase(), Phase::Run);
        run.keys(vec!["k".to_string()]).expect("keys");
        run.done().expect("done");

        let pull = hooks.pull_collector(&mut cursor).expect("pull");
        assert_eq!(pull.phase(), Phase::Pull);
        pull.done().expect("done");

        assert_eq!(cursor.keys(), ["k"]);
        assert_eq!(cursor.run_state(), PhaseState::Done);
        assert_eq!(cursor.pull_state(), PhaseState::Done);
    }
}
