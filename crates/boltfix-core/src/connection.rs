//! # Backing Connection
//!
//! A statement result is normally produced by a request/response exchange
//! over a connection: the statement is sent with `run`, then the records are
//! requested with `pull_all`. The cursor keeps a handle to the connection
//! that produced it.
//!
//! Synthetic results have no server behind them. `NullConnection` accepts
//! both calls and discards them.

use crate::value::Value;
use crate::FixtureError;
use std::collections::BTreeMap;
use std::fmt;

/// Statement parameters.
pub type Parameters = BTreeMap<String, Value>;

/// Statement text used when a result has no real statement behind it.
pub const UNKNOWN_STATEMENT: &str = "<unknown>";

/// The two calls a cursor makes against the connection that feeds it.
pub trait Connection: fmt::Debug + Send + Sync {
    /// Issue a statement.
    fn run(&self, statement: &str, parameters: &Parameters) -> Result<(), FixtureError>;

    /// Request every remaining record of the last statement.
    fn pull_all(&self) -> Result<(), FixtureError>;
}

/// Connection that accepts every call and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullConnection;

impl Connection for NullConnection {
    fn run(&self, statement: &str, parameters: &Parameters) -> Result<(), FixtureError> {
        tracing::trace!(
            statement,
            parameters = parameters.len(),
            "null connection: run discarded"
        );
        Ok(())
    }

    fn pull_all(&self) -> Result<(), FixtureError> {
        tracing::trace!("null connection: pull_all discarded");
        Ok(())
    }
}
