//! # boltfix-core
//!
//! Synthetic graph-database statement results - THE LOGIC.
//!
//! This crate builds, entirely in memory, the kind of cursor a graph
//! database driver hands back after running a query: a list of column keys
//! followed by a stream of records whose values may be scalars, nodes or
//! relationships. No server and no network are involved.
//!
//! ## Protocol
//!
//! A cursor is filled in two phases, each driven through a
//! [`PhaseCollector`]:
//!
//! - **Run**: keys are published once, then the phase is marked done.
//! - **Pull**: records are published in order, then the phase is marked done.
//!
//! The pull phase cannot start before the run phase is done.
//!
//! ## Example
//!
//! ```
//! use boltfix_core::{build, row, Value};
//!
//! let rows = vec![row!["valueA1", "valueB1"], row!["valueA2", "valueB2"]];
//! let mut cursor = build(&["columnA", "columnB"], &rows).expect("build");
//!
//! assert_eq!(cursor.keys(), ["columnA", "columnB"]);
//! let first = cursor.next().expect("record");
//! assert_eq!(first.get_by_key("columnB"), Some(&Value::from("valueB1")));
//! ```
//!
//! ## Architectural Constraints
//!
//! - No async, no I/O
//! - Closed value model; unknown literal types are rejected
//! - No row/key arity validation: malformed rows reach the consumer as given

// =============================================================================
// MODULES
// =============================================================================

pub mod builder;
pub mod collector;
pub mod connection;
pub mod cursor;
pub mod error;
pub mod fixtures;
pub mod hooks;
pub mod literal;
pub mod record;
pub mod value;

// =============================================================================
// RE-EXPORTS: Value Model
// =============================================================================

pub use error::FixtureError;
pub use literal::{Literal, Row, wrap, wrap_row};
pub use value::{Node, Properties, Relationship, Value, node, properties, relationship};

// =============================================================================
// RE-EXPORTS: Streaming Result Builder
// =============================================================================

pub use builder::{ResultSpec, build, build_with};
pub use collector::{Phase, PhaseCollector, PhaseState, PullCollector, RunCollector};
pub use connection::{Connection, NullConnection, Parameters, UNKNOWN_STATEMENT};
pub use cursor::StatementResult;
pub use fixtures::Fixture;
pub use hooks::{CollectorHook, CollectorHooks};
pub use record::Record;
