//! # Literal Conversion Boundary
//!
//! Rows are supplied as heterogeneous native Rust values. Each one is boxed
//! into a `Literal` together with its type name, and classified into the
//! closed `Value` set by `wrap` when the row is published.
//!
//! Classification is by runtime type. A literal whose type is not part of
//! the value model fails immediately with `UnsupportedValueKind`.

use crate::value::{Node, Relationship, Value};
use crate::FixtureError;
use std::any::Any;
use std::fmt;

/// One row of native literals, in column order.
pub type Row = Vec<Literal>;

/// A native value awaiting classification.
pub struct Literal {
    inner: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Literal {
    /// Box any `'static` value as a literal.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Rust type name of the boxed value.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Literal").field(&self.type_name).finish()
    }
}

/// Build a [`Row`] from heterogeneous expressions.
///
/// ```
/// use boltfix_core::{row, wrap, Value};
///
/// let r = row![1, "value1", 0.1f32, 1i16, 2.29f64];
/// assert_eq!(r.len(), 5);
/// assert_eq!(wrap(&r[3]).ok(), Some(Value::Short(1)));
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Literal::new($value)),*]
    };
}

/// Classify a literal into the value model.
///
/// Recognised: `Value`, `Node`, `Relationship`, `String`, `&'static str`,
/// `i64`, `i32`, `i16`, `f32`, `f64`, `bool`.
pub fn wrap(literal: &Literal) -> Result<Value, FixtureError> {
    if let Some(v) = literal.downcast_ref::<Value>() {
        return Ok(v.clone());
    }
    if let Some(n) = literal.downcast_ref::<Node>() {
        return Ok(Value::Node(n.clone()));
    }
    if let Some(r) = literal.downcast_ref::<Relationship>() {
        return Ok(Value::Relationship(r.clone()));
    }
    if let Some(s) = literal.downcast_ref::<String>() {
        return Ok(Value::String(s.clone()));
    }
    if let Some(s) = literal.downcast_ref::<&'static str>() {
        return Ok(Value::from(*s));
    }
    if let Some(i) = literal.downcast_ref::<i64>() {
        return Ok(Value::Integer(*i));
    }
    if let Some(i) = literal.downcast_ref::<i32>() {
        return Ok(Value::from(*i));
    }
    if let Some(s) = literal.downcast_ref::<i16>() {
        return Ok(Value::Short(*s));
    }
    if let Some(f) = literal.downcast_ref::<f32>() {
        return Ok(Value::Float32(*f));
    }
    if let Some(f) = literal.downcast_ref::<f64>() {
        return Ok(Value::Float64(*f));
    }
    if let Some(b) = literal.downcast_ref::<bool>() {
        return Ok(Value::Boolean(*b));
    }

    Err(FixtureError::UnsupportedValueKind {
        type_name: literal.type_name().to_string(),
    })
}

/// Classify every literal of a row, stopping at the first unsupported one.
pub fn wrap_row(row: &[Literal]) -> Result<Vec<Value>, FixtureError> {
    row.iter().map(wrap).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{node, properties};

    #[test]
    fn scalars_classify_by_runtime_type() {
        let r = row![1, 2i64, "s", String::from("t"), 3i16, 0.5f32, 0.25f64, true];
        let values = wrap_row(&r).expect("wrap");

        assert_eq!(
            values,
            vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::String("s".into()),
                Value::String("t".into()),
                Value::Short(3),
                Value::Float32(0.5),
                Value::Float64(0.25),
                Value::Boolean(true),
            ]
        );
    }

    #[test]
    fn values_pass_through_unchanged() {
        let n = node(1, ["a"], properties([("k", 1)]));
        let literal = Literal::new(n.clone());
        assert_eq!(wrap(&literal).expect("wrap"), n);
        assert_eq!(wrap(&Literal::new(Value::Null)).expect("wrap"), Value::Null);
    }

    #[test]
    fn unsupported_literal_names_its_type() {
        let literal = Literal::new('x');
        let err = wrap(&literal).expect_err("char is not a value kind");
        assert_eq!(
            err,
            FixtureError::UnsupportedValueKind {
                type_name: "char".to_string()
            }
        );
    }

    #[test]
    fn row_stops_at_first_unsupported_literal() {
        let r = row!["ok", 7u8, vec![1, 2]];
        let err = wrap_row(&r).expect_err("u8 is not a value kind");
        assert_eq!(
            err,
            FixtureError::UnsupportedValueKind {
                type_name: "u8".to_string()
            }
        );
    }

    #[test]
    fn debug_shows_type_name() {
        assert_eq!(format!("{:?}", Literal::new(1i16)), "Literal(\"i16\")");
    }
}
