//! # Result Builder
//!
//! Turns `(keys, rows)` into a fully populated `StatementResult`.
//!
//! The builder plays the server's part of the exchange:
//!
//! 1. Run phase: publish the key list, signal done.
//! 2. Pull phase: wrap each row into values, publish it as a record,
//!    signal done after the last row.
//! 3. Issue `run` and `pull_all` against the backing connection, as a
//!    cursor obtained from a live exchange would have done.
//!
//! Row arity is never checked against the key count.

use crate::connection::{Connection, NullConnection, Parameters, UNKNOWN_STATEMENT};
use crate::cursor::StatementResult;
use crate::hooks::CollectorHooks;
use crate::literal::{Row, wrap_row};
use crate::FixtureError;
use std::sync::Arc;

// =============================================================================
// RESULT SPEC
// =============================================================================

/// Keys and rows of one synthetic result.
///
/// Immutable once built; `build` only borrows it, so the same spec can
/// produce any number of independent cursors.
#[derive(Debug, Default)]
pub struct ResultSpec {
    keys: Vec<String>,
    rows: Vec<Row>,
}

impl ResultSpec {
    pub fn new<K, S>(keys: K, rows: Vec<Row>) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Build a cursor backed by a `NullConnection`.
    pub fn build(&self) -> Result<StatementResult, FixtureError> {
        build(&self.keys, &self.rows)
    }
}

// =============================================================================
// BUILD
// =============================================================================

/// Build a cursor backed by a `NullConnection`.
pub fn build<K: AsRef<str>>(keys: &[K], rows: &[Row]) -> Result<StatementResult, FixtureError> {
    build_with(Arc::new(NullConnection), keys, rows)
}

/// Build a cursor backed by `connection`.
///
/// The connection only sees the trailing `run`/`pull_all` calls; the phases
/// are already complete by then.
pub fn build_with<K: AsRef<str>>(
    connection: Arc<dyn Connection>,
    keys: &[K],
    rows: &[Row],
) -> Result<StatementResult, FixtureError> {
    let hooks = CollectorHooks::get()?;
    let mut cursor = StatementResult::new(Arc::clone(&connection));

    let run = hooks.run_collector(&mut cursor)?;
    run.keys(keys.iter().map(|k| k.as_ref().to_string()).collect())?;
    run.done()?;

    let pull = hooks.pull_collector(&mut cursor)?;
    for row in rows {
        pull.record(wrap_row(row)?)?;
    }
    pull.done()?;

    connection.run(UNKNOWN_STATEMENT, &Parameters::new())?;
    connection.pull_all()?;

    tracing::debug!(
        keys = cursor.keys().len(),
        records = cursor.records().len(),
        "synthetic statement result built"
    );
    Ok(cursor)
}

// =============================================================================
// TESTS
// =============================================================================
