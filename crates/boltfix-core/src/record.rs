//! # Record
//!
//! One published row: the column keys announced in the run phase plus the
//! values of the row, positionally.
//!
//! Key and value counts may differ. Lookups past either end return `None`;
//! nothing is padded or truncated.

use crate::value::Value;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::sync::Arc;

/// A single record of a statement result.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    keys: Arc<[String]>,
    values: Vec<Value>,
}

impl Record {
    pub(crate) fn new(keys: Arc<[String]>, values: Vec<Value>) -> Self {
        Self { keys, values }
    }

    /// Column keys shared by every record of the same result.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value at a column position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Value under a column key.
    ///
    /// Resolves the key's position, then reads that position. A key with
    /// no value at its position (short row) yields `None`.
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&Value> {
        let index = self.keys.iter().position(|k| k == key)?;
        self.values.get(index)
    }

    /// `(key, value)` pairs, up to the shorter of the two sequences.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.keys
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Number of values in this record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Record", 2)?;
        state.serialize_field("keys", &*self.keys)?;
        state.serialize_field("values", &self.values)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Arc<[String]> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lookup_by_index_and_key() {
        let record = Record::new(
            keys(&["columnA", "columnB"]),
            vec![Value::from("valueA1"), Value::from("valueB1")],
        );

        assert_eq!(record.get(1), Some(&Value::from("valueB1")));
        assert_eq!(record.get_by_key("columnA"), Some(&Value::from("valueA1")));
        assert_eq!(record.get_by_key("columnZ"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn short_row_leaves_trailing_key_empty() {
        let record = Record::new(
            keys(&["columnA", "columnB", "columnC"]),
            vec![Value::from("valueA"), Value::from("valueB")],
        );

        assert_eq!(record.get_by_key("columnC"), None);
        assert_eq!(record.fields().count(), 2);
        assert_eq!(record.keys().len(), 3);
    }

    #[test]
    fn long_row_keeps_extra_values() {
        let record = Record::new(keys(&["only"]), vec![Value::from(1), Value::from(2)]);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get(1), Some(&Value::Integer(2)));
        assert_eq!(record.fields().count(), 1);
    }
}
