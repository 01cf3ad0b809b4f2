//! # Phase Collectors
//!
//! A statement result is populated in two phases, each fed through a
//! `PhaseCollector`:
//!
//! - **Run**: the column keys are published once, then the phase completes.
//! - **Pull**: zero or more records are published in order, then the phase
//!   completes.
//!
//! Both phases follow `Open -> Emitting -> Done`. Any call that does not fit
//! the current state is a `ProtocolViolation`; the collector state is left
//! unchanged when a call is rejected.

use crate::record::Record;
use crate::value::Value;
use crate::FixtureError;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// PHASE & STATE
// =============================================================================

/// Which half of the protocol a collector serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Key announcement.
    Run,
    /// Record streaming.
    Pull,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Run => write!(f, "run"),
            Self::Pull => write!(f, "pull"),
        }
    }
}

/// Lifecycle of one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PhaseState {
    /// Nothing published yet.
    #[default]
    Open,
    /// At least one publication seen, completion pending.
    Emitting,
    /// Completion signalled. Terminal.
    Done,
}

impl fmt::Display for PhaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Emitting => write!(f, "emitting"),
            Self::Done => write!(f, "done"),
        }
    }
}

// =============================================================================
// COLLECTOR SEAM
// =============================================================================

/// Sink for one phase of a response stream.
///
/// The cursor owns one collector per phase. Producers (a live connection,
/// or the fixture builder) reach them through collector hooks.
pub trait PhaseCollector: fmt::Debug {
    /// Publish the column keys.
    fn keys(&mut self, keys: Vec<String>) -> Result<(), FixtureError>;

    /// Publish one record.
    fn record(&mut self, values: Vec<Value>) -> Result<(), FixtureError>;

    /// Signal phase completion.
    fn done(&mut self) -> Result<(), FixtureError>;

    /// Current lifecycle state.
    fn state(&self) -> PhaseState;

    /// The phase this collector serves.
    fn phase(&self) -> Phase;
}

// =============================================================================
// RUN COLLECTOR
// =============================================================================

/// Collects the key list of a result.
#[derive(Debug, Clone)]
pub struct RunCollector {
    keys: Arc<[String]>,
    state: PhaseState,
}

impl RunCollector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: Arc::from(Vec::new()),
            state: PhaseState::Open,
        }
    }

    /// Keys published so far (empty until `keys` is called).
    #[must_use]
    pub fn published_keys(&self) -> &Arc<[String]> {
        &self.keys
    }
}

impl Default for RunCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseCollector for RunCollector {
    fn keys(&mut self, keys: Vec<String>) -> Result<(), FixtureError> {
        if self.state != PhaseState::Open {
            return Err(FixtureError::violation(
                Phase::Run,
                self.state,
                "publish keys",
            ));
        }
        tracing::debug!(count = keys.len(), "run phase: keys published");
        self.keys = Arc::from(keys);
        self.state = PhaseState::Emitting;
        Ok(())
    }

    fn record(&mut self, _values: Vec<Value>) -> Result<(), FixtureError> {
        Err(FixtureError::violation(
            Phase::Run,
            self.state,
            "publish a record",
        ))
    }

    fn done(&mut self) -> Result<(), FixtureError> {
        if self.state != PhaseState::Emitting {
            return Err(FixtureError::violation(Phase::Run, self.state, "complete"));
        }
        tracing::debug!("run phase: done");
        self.state = PhaseState::Done;
        Ok(())
    }

    fn state(&self) -> PhaseState {
        self.state
    }

    fn phase(&self) -> Phase {
        Phase::Run
    }
}

// =============================================================================
// PULL COLLECTOR
// =============================================================================

/// Collects the records of a result, in publication order.
#[derive(Debug, Clone)]
pub struct PullCollector {
    keys: Arc<[String]>,
    records: Vec<Record>,
    state: PhaseState,
}

impl PullCollector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: Arc::from(Vec::new()),
            records: Vec::new(),
            state: PhaseState::Open,
        }
    }

    /// Attach the key list every subsequent record will carry.
    pub(crate) fn bind_keys(&mut self, keys: Arc<[String]>) {
        self.keys = keys;
    }

    /// Records published so far.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl Default for PullCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseCollector for PullCollector {
    fn keys(&mut self, _keys: Vec<String>) -> Result<(), FixtureError> {
        Err(FixtureError::violation(
            Phase::Pull,
            self.state,
            "publish keys",
        ))
    }

    fn record(&mut self, values: Vec<Value>) -> Result<(), FixtureError> {
        if self.state == PhaseState::Done {
            return Err(FixtureError::violation(
                Phase::Pull,
                self.state,
                "publish a record",
            ));
        }
        tracing::trace!(
            index = self.records.len(),
            width = values.len(),
            "pull phase: record published"
        );
        self.records
            .push(Record::new(Arc::clone(&self.keys), values));
        self.state = PhaseState::Emitting;
        Ok(())
    }

    fn done(&mut self) -> Result<(), FixtureError> {
        if self.state == PhaseState::Done {
            return Err(FixtureError::violation(Phase::Pull, self.state, "complete"));
        }
        tracing::debug!(records = self.records.len(), "pull phase: done");
        self.state = PhaseState::Done;
        Ok(())
    }

    fn state(&self) -> PhaseState {
        self.state
    }

    fn phase(&self) -> Phase {
        Phase::Pull
    }
}

// =============================================================================
// TESTS
// =============================================================================
