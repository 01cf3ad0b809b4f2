//! # Cursor Rendering
//!
//! Text and JSON views of a built statement result. Both drain the cursor
//! through its public forward-pass API, exactly as a consumer would.

use boltfix_core::{Properties, StatementResult, Value};

/// Cypher-like description of a value.
///
/// Nodes print as `(id:Label {k: v})`, relationships as
/// `[id:TYPE start->end {k: v}]`; scalars use their `Display` form.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Node(node) => {
            let labels: String = node.labels().iter().map(|l| format!(":{}", l)).collect();
            format!(
                "({}{}{})",
                node.id(),
                labels,
                describe_properties(node.properties())
            )
        }
        Value::Relationship(rel) => format!(
            "[{}:{} {}->{}{}]",
            rel.id(),
            rel.rel_type(),
            rel.start(),
            rel.end(),
            describe_properties(rel.properties())
        ),
        other => other.to_string(),
    }
}

fn describe_properties(properties: &Properties) -> String {
    if properties.is_empty() {
        return String::new();
    }
    let fields: Vec<String> = properties
        .iter()
        .map(|(k, v)| format!("{}: {}", k, describe(v)))
        .collect();
    format!(" {{{}}}", fields.join(", "))
}

/// Render as a plain table: a key header, then one line per record.
///
/// Rows are printed with the width they were published with.
pub fn table(cursor: &mut StatementResult, limit: Option<usize>) -> String {
    let mut out = String::new();
    out.push_str(&cursor.keys().join(" | "));
    out.push('\n');
    out.push_str(&"-".repeat(out.len().saturating_sub(1).max(3)));
    out.push('\n');

    let mut shown = 0usize;
    for record in cursor.by_ref().take(limit.unwrap_or(usize::MAX)) {
        let cells: Vec<String> = record.values().iter().map(describe).collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
        shown += 1;
    }

    let skipped = cursor.consume();
    out.push_str(&format!("({} records", shown));
    if skipped > 0 {
        out.push_str(&format!(", {} more not shown", skipped));
    }
    out.push_str(")\n");
    out
}

/// Render as pretty JSON: `{"keys": [...], "records": [[...], ...]}`.
pub fn json(cursor: &mut StatementResult, limit: Option<usize>) -> String {
    let keys = cursor.keys().to_vec();
    let records: Vec<Vec<Value>> = cursor
        .by_ref()
        .take(limit.unwrap_or(usize::MAX))
        .map(|record| record.into_values())
        .collect();
    let skipped = cursor.consume();

    let output = serde_json::json!({
        "keys": keys,
        "records": records,
        "skipped": skipped,
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}
