//! # Fixture Catalogue
//!
//! The canonical result sets used to exercise result-set consumers.
//!
//! | Fixture             | Keys                                   | Rows |
//! |---------------------|----------------------------------------|------|
//! | `empty`             | none                                   | 0    |
//! | `one-element`       | columnA, columnB                       | 1    |
//! | `more-elements`     | columnA, columnB                       | 3    |
//! | `more-elements-diff`| columnA, columnB, columnC              | 2 (arity 2 and 3) |
//! | `mixed`             | columnInt .. columnDouble              | 2    |
//! | `nodes`             | node                                   | 2    |
//! | `relations`         | relation                               | 2    |

use crate::builder::ResultSpec;
use crate::row;
use crate::value::{Node, Relationship, Value, properties};
use crate::FixtureError;
use std::fmt;
use std::str::FromStr;

pub const KEYS_EMPTY: [&str; 0] = [];
pub const KEYS_ONE_ELEMENT: [&str; 2] = ["columnA", "columnB"];
pub const KEYS_MORE_ELEMENTS: [&str; 2] = KEYS_ONE_ELEMENT;
pub const KEYS_MORE_ELEMENTS_DIFF: [&str; 3] = ["columnA", "columnB", "columnC"];
pub const KEYS_MIXED: [&str; 5] = [
    "columnInt",
    "columnString",
    "columnFloat",
    "columnShort",
    "columnDouble",
];
pub const KEYS_NODES: [&str; 1] = ["node"];
pub const KEYS_RELATIONS: [&str; 1] = ["relation"];

// =============================================================================
// DATASETS
// =============================================================================

pub fn empty() -> ResultSpec {
    ResultSpec::new(KEYS_EMPTY, Vec::new())
}

pub fn one_element() -> ResultSpec {
    ResultSpec::new(KEYS_ONE_ELEMENT, vec![row!["valueA1", "valueB1"]])
}

pub fn more_elements() -> ResultSpec {
    ResultSpec::new(
        KEYS_MORE_ELEMENTS,
        vec![
            row!["valueA1", "valueB1"],
            row!["valueA2", "valueB2"],
            row!["valueA3", "valueB3"],
        ],
    )
}

/// Rows whose arity differs from the key count and from each other.
pub fn more_elements_diff() -> ResultSpec {
    ResultSpec::new(
        KEYS_MORE_ELEMENTS_DIFF,
        vec![
            row!["valueA", "valueB"],
            row!["valueA", "valueB", "valueC"],
        ],
    )
}

/// One column per scalar kind: integer, string, float32, short, float64.
pub fn mixed() -> ResultSpec {
    ResultSpec::new(
        KEYS_MIXED,
        vec![
            row![1, "value1", 0.1f32, 1i16, 2.29f64],
            row![2, "value2", 0.2f32, 2i16, 20.16f64],
        ],
    )
}

pub fn nodes() -> ResultSpec {
    ResultSpec::new(
        KEYS_NODES,
        vec![
            row![Node::new(
                1,
                ["label1", "label2"],
                properties([
                    ("property1", Value::from("value1")),
                    ("property2", Value::from(1)),
                ]),
            )],
            row![Node::new(
                2,
                ["label"],
                properties([("property", 1.6f32)]),
            )],
        ],
    )
}

pub fn relations() -> ResultSpec {
    ResultSpec::new(
        KEYS_RELATIONS,
        vec![
            row![Relationship::new(
                1,
                0,
                0,
                "type1",
                properties([
                    ("property1", Value::from("value")),
                    ("property2", Value::from(100)),
                ]),
            )],
            row![Relationship::new(
                2,
                0,
                0,
                "type2",
                properties([("property", 2.6f32)]),
            )],
        ],
    )
}

// =============================================================================
// NAMED LOOKUP
// =============================================================================

/// The built-in fixtures, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixture {
    Empty,
    OneElement,
    MoreElements,
    MoreElementsDiff,
    Mixed,
    Nodes,
    Relations,
}

impl Fixture {
    pub const ALL: [Self; 7] = [
        Self::Empty,
        Self::OneElement,
        Self::MoreElements,
        Self::MoreElementsDiff,
        Self::Mixed,
        Self::Nodes,
        Self::Relations,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::OneElement => "one-element",
            Self::MoreElements => "more-elements",
            Self::MoreElementsDiff => "more-elements-diff",
            Self::Mixed => "mixed",
            Self::Nodes => "nodes",
            Self::Relations => "relations",
        }
    }

    /// Fresh copy of the fixture's keys and rows.
    #[must_use]
    pub fn spec(self) -> ResultSpec {
        match self {
            Self::Empty => empty(),
            Self::OneElement => one_element(),
            Self::MoreElements => more_elements(),
            Self::MoreElementsDiff => more_elements_diff(),
            Self::Mixed => mixed(),
            Self::Nodes => nodes(),
            Self::Relations => relations(),
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fixture {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fixture| fixture.name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|f| f.name()).collect();
                FixtureError::Config(format!(
                    "unknown fixture '{}' (known: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}
