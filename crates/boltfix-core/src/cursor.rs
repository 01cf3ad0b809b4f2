//! # Statement Result Cursor
//!
//! `StatementResult` is what a consumer sees: the column keys and a
//! single forward pass over the records.
//!
//! The cursor owns its two phase collectors. They are not reachable through
//! its public API; producers obtain them via named collector hooks (see
//! [`crate::hooks`]). The pull hook refuses to hand out the pull collector
//! until the run phase is done, so keys are always known before any record
//! can be published.

use crate::collector::{Phase, PhaseCollector, PhaseState, PullCollector, RunCollector};
use crate::connection::Connection;
use crate::hooks::{CollectorHook, PULL_ALL_RESPONSE_COLLECTOR, RUN_RESPONSE_COLLECTOR};
use crate::record::Record;
use crate::FixtureError;
use std::sync::Arc;

/// Cursor over the keys and records of one statement.
#[derive(Debug)]
pub struct StatementResult {
    connection: Arc<dyn Connection>,
    run: RunCollector,
    pull: PullCollector,
    position: usize,
}

impl StatementResult {
    /// Create an empty cursor fed by `connection`. Both phases start `Open`.
    #[must_use]
    pub fn new(connection: Arc<dyn Connection>) -> Self {
        Self {
            connection,
            run: RunCollector::new(),
            pull: PullCollector::new(),
            position: 0,
        }
    }

    /// The connection this cursor was produced by.
    #[must_use]
    pub fn connection(&self) -> &Arc<dyn Connection> {
        &self.connection
    }

    /// Column keys published in the run phase.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        self.run.published_keys()
    }

    #[must_use]
    pub fn run_state(&self) -> PhaseState {
        self.run.state()
    }

    #[must_use]
    pub fn pull_state(&self) -> PhaseState {
        self.pull.state()
    }

    /// Whether `next` would return a record.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.position < self.pull.records().len()
    }

    /// The next record, without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<&Record> {
        self.pull.records().get(self.position)
    }

    /// Consume the only remaining record.
    ///
    /// Fails with `NoSuchRecord` if nothing remains, or if more than one
    /// record remains (the first is consumed in that case).
    pub fn single(&mut self) -> Result<Record, FixtureError> {
        let record = self.next().ok_or_else(|| {
            FixtureError::NoSuchRecord(
                "cannot retrieve a single record, because this result is empty".to_string(),
            )
        })?;
        if self.has_next() {
            return Err(FixtureError::NoSuchRecord(
                "expected a result with a single record, but this result contains at least one more"
                    .to_string(),
            ));
        }
        Ok(record)
    }

    /// Drain every remaining record.
    pub fn list(&mut self) -> Vec<Record> {
        self.by_ref().collect()
    }

    /// Discard every remaining record. Returns how many were skipped.
    pub fn consume(&mut self) -> usize {
        let total = self.pull.records().len();
        let skipped = total.saturating_sub(self.position);
        self.position = total;
        skipped
    }

    /// Every published record, independent of the iteration position.
    ///
    /// Read-only; safe to share across threads once the cursor is built.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        self.pull.records()
    }

    /// Look up a collector hook by name.
    #[must_use]
    pub fn hook(name: &str) -> Option<CollectorHook> {
        match name {
            RUN_RESPONSE_COLLECTOR => Some(run_response_collector as CollectorHook),
            PULL_ALL_RESPONSE_COLLECTOR => Some(pull_all_response_collector as CollectorHook),
            _ => None,
        }
    }
}

impl Iterator for StatementResult {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        let record = self.pull.records().get(self.position)?.clone();
        self.position += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pull.records().len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

// =============================================================================
// COLLECTOR HOOKS
// =============================================================================

fn run_response_collector(
    cursor: &mut StatementResult,
) -> Result<&mut dyn PhaseCollector, FixtureError> {
    Ok(&mut cursor.run)
}

fn pull_all_response_collector(
    cursor: &mut StatementResult,
) -> Result<&mut dyn PhaseCollector, FixtureError> {
    let run_state = cursor.run.state();
    if run_state != PhaseState::Done {
        return Err(FixtureError::violation(
            Phase::Run,
            run_state,
            "open the pull phase before keys are complete",
        ));
    }
    cursor
        .pull
        .bind_keys(Arc::clone(cursor.run.published_keys()));
    Ok(&mut cursor.pull)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::NullConnection;
    use crate::value::Value;

    fn cursor_with(keys: &[&str], rows: &[i64]) -> StatementResult {
        let mut cursor = StatementResult::new(Arc::new(NullConnection));
        let run = run_response_collector(&mut cursor).expect("run hook");
        run.keys(keys.iter().map(|k| k.to_string()).collect())
            .expect("keys");
        run.done().expect("done");

        let pull = pull_all_response_collector(&mut cursor).expect("pull hook");
        for value in rows {
            pull.record(vec![Value::from(*value)]).expect("record");
        }
        pull.done().expect("done");
        cursor
    }

    #[test]
    fn pull_hook_refused_while_run_phase_open() {
        let mut cursor = StatementResult::new(Arc::new(NullConnection));
        let err = pull_all_response_collector(&mut cursor).expect_err("run still open");
        assert!(matches!(
            err,
            FixtureError::ProtocolViolation {
                phase: Phase::Run,
                state: PhaseState::Open,
                ..
            }
        ));

        let run = run_response_collector(&mut cursor).expect("run hook");
        run.keys(vec!["a".to_string()]).expect("keys");
        assert!(pull_all_response_collector(&mut cursor).is_err());
    }

    #[test]
    fn records_carry_published_keys() {
        let mut cursor = cursor_with(&["x"], &[1]);
        let record = cursor.next().expect("record");
        assert_eq!(record.keys(), ["x"]);
        assert_eq!(record.get_by_key("x"), Some(&Value::Integer(1)));
    }

    #[test]
    fn forward_pass_then_exhausted() {
        let mut cursor = cursor_with(&["n"], &[1, 2]);
        assert_eq!(cursor.size_hint(), (2, Some(2)));
        assert!(cursor.next().is_some());
        assert!(cursor.next().is_some());
        assert!(cursor.next().is_none());
        assert!(cursor.next().is_none());
        assert!(!cursor.has_next());
        assert_eq!(cursor.records().len(), 2);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut cursor = cursor_with(&["n"], &[5, 6]);
        let peeked = cursor.peek().cloned().expect("peek");
        assert_eq!(cursor.next(), Some(peeked));
        assert_eq!(
            cursor.peek().and_then(|r| r.get(0)),
            Some(&Value::Integer(6))
        );
    }

    #[test]
    fn single_requires_exactly_one() {
        let mut one = cursor_with(&["n"], &[1]);
        assert_eq!(
            one.single().expect("single").get(0),
            Some(&Value::Integer(1))
        );

        let mut none = cursor_with(&["n"], &[]);
        assert!(matches!(none.single(), Err(FixtureError::NoSuchRecord(_))));

        let mut many = cursor_with(&["n"], &[1, 2]);
        assert!(matches!(many.single(), Err(FixtureError::NoSuchRecord(_))));
    }

    #[test]
    fn consume_and_list() {
        let mut cursor = cursor_with(&["n"], &[1, 2, 3]);
        let _ = cursor.next();
        assert_eq!(cursor.list().len(), 2);
        assert_eq!(cursor.consume(), 0);

        let mut fresh = cursor_with(&["n"], &[1, 2, 3]);
        assert_eq!(fresh.consume(), 3);
        assert!(fresh.next().is_none());
    }

    #[test]
    fn unknown_hook_name_resolves_to_nothing() {
        assert!(StatementResult::hook(RUN_RESPONSE_COLLECTOR).is_some());
        assert!(StatementResult::hook(PULL_ALL_RESPONSE_COLLECTOR).is_some());
        assert!(StatementResult::hook("discard_collector").is_none());
    }
}
