//! # Result Spec Files
//!
//! Declares a synthetic result in TOML:
//!
//! ```toml
//! keys = ["person", "since"]
//! rows = [
//!     [{ id = 1, labels = ["Person"], properties = { name = "Ada" } }, 1843],
//!     [{ id = 7, start = 1, end = 2, type = "KNOWS" }],
//! ]
//! ```
//!
//! Strings, integers, floats and booleans become the matching literal.
//! Integers are 64-bit and floats 64-bit unless written as a single-key
//! table: `{ short = 7 }` is a 16-bit integer, `{ float32 = 0.1 }` a
//! single-precision float. Both forms work in cells and in properties.
//!
//! An inline table with `labels` is a node; one with `type` is a
//! relationship. Anything else (arrays, datetimes, other tables) is passed
//! through untouched and rejected when the result is built.

use boltfix_core::{FixtureError, Literal, Node, Properties, Relationship, ResultSpec, Row, Value};
use serde::Deserialize;
use std::path::Path;

/// Maximum spec file size (10 MB).
const MAX_SPEC_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpecFile {
    #[serde(default)]
    keys: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<toml::Value>>,
}

/// Read and parse a spec file.
pub fn load(path: &Path) -> Result<ResultSpec, FixtureError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        FixtureError::Config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    if metadata.len() > MAX_SPEC_FILE_SIZE {
        return Err(FixtureError::Config(format!(
            "Spec file size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_SPEC_FILE_SIZE
        )));
    }

    let text = std::fs::read_to_string(path).map_err(|e| {
        FixtureError::Config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    tracing::debug!("Loaded spec file {:?}", path);
    parse(&text)
}

/// Parse spec text.
pub fn parse(text: &str) -> Result<ResultSpec, FixtureError> {
    let file: SpecFile = toml::from_str(text)
        .map_err(|e| FixtureError::Config(format!("Invalid spec file: {}", e)))?;

    let rows = file
        .rows
        .iter()
        .map(|row| row.iter().map(literal).collect::<Result<Row, _>>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResultSpec::new(file.keys, rows))
}

fn literal(value: &toml::Value) -> Result<Literal, FixtureError> {
    Ok(match value {
        toml::Value::String(s) => Literal::new(s.clone()),
        toml::Value::Integer(i) => Literal::new(*i),
        toml::Value::Float(f) => Literal::new(*f),
        toml::Value::Boolean(b) => Literal::new(*b),
        toml::Value::Table(table) => match narrow_scalar(table)? {
            Some(narrow) => Literal::new(narrow),
            None if table.contains_key("labels") => Literal::new(node(table)?),
            None if table.contains_key("type") => Literal::new(relationship(table)?),
            None => Literal::new(value.clone()),
        },
        other => Literal::new(other.clone()),
    })
}

/// `{ short = n }` or `{ float32 = x }`; `None` for any other table.
fn narrow_scalar(table: &toml::Table) -> Result<Option<Value>, FixtureError> {
    if table.len() != 1 {
        return Ok(None);
    }
    if let Some(raw) = table.get("short") {
        let short = raw
            .as_integer()
            .and_then(|i| i16::try_from(i).ok())
            .ok_or_else(|| {
                FixtureError::Config(format!(
                    "'short' must be an integer between {} and {}",
                    i16::MIN,
                    i16::MAX
                ))
            })?;
        return Ok(Some(Value::Short(short)));
    }
    if let Some(raw) = table.get("float32") {
        let float = match raw {
            toml::Value::Float(f) => *f as f32,
            toml::Value::Integer(i) => *i as f32,
            other => {
                return Err(FixtureError::Config(format!(
                    "'float32' must be a number, got {}",
                    other.type_str()
                )));
            }
        };
        return Ok(Some(Value::Float32(float)));
    }
    Ok(None)
}

fn node(table: &toml::Table) -> Result<Node, FixtureError> {
    let labels = table
        .get("labels")
        .and_then(toml::Value::as_array)
        .ok_or_else(|| FixtureError::Config("node 'labels' must be an array".to_string()))?
        .iter()
        .map(|label| {
            label.as_str().map(str::to_string).ok_or_else(|| {
                FixtureError::Config(format!(
                    "node label must be a string, got {}",
                    label.type_str()
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Node::new(
        integer(table, "id", "node")?,
        labels,
        properties(table)?,
    ))
}

fn relationship(table: &toml::Table) -> Result<Relationship, FixtureError> {
    let rel_type = table
        .get("type")
        .and_then(toml::Value::as_str)
        .ok_or_else(|| FixtureError::Config("relationship 'type' must be a string".to_string()))?;

    Ok(Relationship::new(
        integer(table, "id", "relationship")?,
        integer(table, "start", "relationship")?,
        integer(table, "end", "relationship")?,
        rel_type,
        properties(table)?,
    ))
}

fn integer(table: &toml::Table, field: &str, entity: &str) -> Result<i64, FixtureError> {
    table
        .get(field)
        .and_then(toml::Value::as_integer)
        .ok_or_else(|| FixtureError::Config(format!("{} '{}' must be an integer", entity, field)))
}

fn properties(table: &toml::Table) -> Result<Properties, FixtureError> {
    let Some(raw) = table.get("properties") else {
        return Ok(Properties::new());
    };
    let raw = raw
        .as_table()
        .ok_or_else(|| FixtureError::Config("'properties' must be a table".to_string()))?;

    raw.iter()
        .map(|(key, value)| -> Result<(String, Value), FixtureError> {
            let value = match value {
                toml::Value::String(s) => Some(Value::from(s.as_str())),
                toml::Value::Integer(i) => Some(Value::Integer(*i)),
                toml::Value::Float(f) => Some(Value::Float64(*f)),
                toml::Value::Boolean(b) => Some(Value::Boolean(*b)),
                toml::Value::Table(table) => narrow_scalar(table)?,
                _ => None,
            }
            .ok_or_else(|| {
                FixtureError::Config(format!(
                    "property '{}' must be a scalar, got {}",
                    key,
                    value.type_str()
                ))
            })?;
            Ok((key.clone(), value))
        })
        .collect()
}
