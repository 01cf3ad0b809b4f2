//! # Value Model
//!
//! The closed set of values a synthetic record can carry.
//!
//! - Scalars: string, integer, short, float32, float64, boolean, null
//! - Graph entities: `Node` and `Relationship`
//!
//! Property maps use `BTreeMap` so that iteration order is deterministic.
//! Relationship endpoints are plain identifiers and are never checked
//! against any node.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Property map of a node or relationship.
pub type Properties = BTreeMap<String, Value>;

// =============================================================================
// VALUE
// =============================================================================

/// A single value inside a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean scalar.
    Boolean(bool),
    /// UTF-8 string scalar.
    String(String),
    /// 64-bit signed integer.
    Integer(i64),
    /// 16-bit signed integer.
    Short(i16),
    /// Single-precision float.
    Float32(f32),
    /// Double-precision float.
    Float64(f64),
    /// Graph node.
    Node(Node),
    /// Graph relationship.
    Relationship(Relationship),
}

impl Value {
    /// Type name as the driver's type system reports it.
    ///
    /// `Short` reports as `INTEGER` and both float widths as `FLOAT`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Boolean(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Integer(_) | Self::Short(_) => "INTEGER",
            Self::Float32(_) | Self::Float64(_) => "FLOAT",
            Self::Node(_) => "NODE",
            Self::Relationship(_) => "RELATIONSHIP",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view; a `Short` widens losslessly.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Short(s) => Some(i64::from(*s)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_short(&self) -> Option<i16> {
        match self {
            Self::Short(s) => Some(*s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float32(&self) -> Option<f32> {
        match self {
            Self::Float32(f) => Some(*f),
            _ => None,
        }
    }

    /// Double view; a `Float32` widens losslessly.
    #[must_use]
    pub fn as_float64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            Self::Float32(f) => Some(f64::from(*f)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_relationship(&self) -> Option<&Relationship> {
        match self {
            Self::Relationship(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::String(s) => write!(f, "{:?}", s),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Short(s) => write!(f, "{}", s),
            Self::Float32(v) => write!(f, "{}", v),
            Self::Float64(v) => write!(f, "{}", v),
            Self::Node(n) => write!(f, "node<{}>", n.id),
            Self::Relationship(r) => write!(f, "relationship<{}>", r.id),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<i16> for Value {
    fn from(s: i16) -> Self {
        Self::Short(s)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float32(f)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float64(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Node> for Value {
    fn from(n: Node) -> Self {
        Self::Node(n)
    }
}

impl From<Relationship> for Value {
    fn from(r: Relationship) -> Self {
        Self::Relationship(r)
    }
}

// =============================================================================
// GRAPH ENTITIES
// =============================================================================

/// A graph node: identifier, labels and properties.
///
/// Labels keep their insertion order. Duplicates are kept as given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    id: i64,
    labels: Vec<String>,
    properties: Properties,
}

impl Node {
    pub fn new<L, S>(id: i64, labels: L, properties: Properties) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            labels: labels.into_iter().map(Into::into).collect(),
            properties,
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Look up a single property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// A graph relationship between two node identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationship {
    id: i64,
    start: i64,
    end: i64,
    #[serde(rename = "type")]
    rel_type: String,
    properties: Properties,
}

impl Relationship {
    pub fn new(
        id: i64,
        start: i64,
        end: i64,
        rel_type: impl Into<String>,
        properties: Properties,
    ) -> Self {
        Self {
            id,
            start,
            end,
            rel_type: rel_type.into(),
            properties,
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Identifier of the start node.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Identifier of the end node.
    #[must_use]
    pub fn end(&self) -> i64 {
        self.end
    }

    #[must_use]
    pub fn rel_type(&self) -> &str {
        &self.rel_type
    }

    #[must_use]
    pub fn has_type(&self, rel_type: &str) -> bool {
        self.rel_type == rel_type
    }

    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Build a `Value::Node`.
pub fn node<L, S>(id: i64, labels: L, properties: Properties) -> Value
where
    L: IntoIterator<Item = S>,
    S: Into<String>,
{
    Value::Node(Node::new(id, labels, properties))
}

/// Build a `Value::Relationship`. `start` and `end` are not resolved.
pub fn relationship(
    id: i64,
    start: i64,
    end: i64,
    rel_type: impl Into<String>,
    properties: Properties,
) -> Value {
    Value::Relationship(Relationship::new(id, start, end, rel_type, properties))
}

/// Collect `(key, value)` pairs into a property map.
///
/// A repeated key keeps the last value.
pub fn properties<K, V, I>(pairs: I) -> Properties
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_constructor_keeps_fields() {
        let value = node(
            7,
            ["Person", "Person"],
            properties([("name", Value::from("Ada")), ("age", Value::from(36))]),
        );

        let n = value.as_node().expect("node");
        assert_eq!(n.id(), 7);
        assert_eq!(n.labels(), ["Person", "Person"]);
        assert!(n.has_label("Person"));
        assert!(!n.has_label("Robot"));
        assert_eq!(n.get("age"), Some(&Value::Integer(36)));
        assert_eq!(value.type_name(), "NODE");
    }

    #[test]
    fn relationship_endpoints_are_not_resolved() {
        let value = relationship(3, 99, -4, "KNOWS", Properties::new());

        let r = value.as_relationship().expect("relationship");
        assert_eq!((r.start(), r.end()), (99, -4));
        assert!(r.has_type("KNOWS"));
        assert!(r.properties().is_empty());
    }

    #[test]
    fn narrow_scalars_widen_through_accessors() {
        assert_eq!(Value::from(5i16).as_integer(), Some(5));
        assert_eq!(Value::from(5i16).as_short(), Some(5));
        assert_eq!(Value::from(0.5f32).as_float64(), Some(0.5));
        assert_eq!(Value::from(7i64).as_short(), None);
        assert_eq!(Value::from("x").as_integer(), None);
    }

    #[test]
    fn type_names_follow_driver_type_system() {
        assert_eq!(Value::Null.type_name(), "NULL");
        assert_eq!(Value::from(true).type_name(), "BOOLEAN");
        assert_eq!(Value::from(1i16).type_name(), "INTEGER");
        assert_eq!(Value::from(1.0f32).type_name(), "FLOAT");
        assert_eq!(Value::from(1.0f64).type_name(), "FLOAT");
    }

    #[test]
    fn display_formats() {
        assert_eq!(Value::from("a").to_string(), "\"a\"");
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(
            node(2, ["L"], Properties::new()).to_string(),
            "node<2>"
        );
        assert_eq!(
            relationship(5, 0, 0, "T", Properties::new()).to_string(),
            "relationship<5>"
        );
    }

    #[test]
    fn repeated_property_key_keeps_last() {
        let props = properties([("k", 1), ("k", 2)]);
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("k"), Some(&Value::Integer(2)));
    }
}
