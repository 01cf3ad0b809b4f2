//! # CLI Command Implementations

use crate::{render, spec_file};
use boltfix_core::{Fixture, FixtureError, ResultSpec};
use std::path::Path;

// =============================================================================
// LIST COMMAND
// =============================================================================

/// Print the built-in fixture names with their key lists.
pub fn cmd_list(json_mode: bool) -> Result<(), FixtureError> {
    if json_mode {
        let fixtures: Vec<_> = Fixture::ALL
            .iter()
            .map(|fixture| {
                let spec = fixture.spec();
                serde_json::json!({
                    "name": fixture.name(),
                    "keys": spec.keys(),
                    "rows": spec.rows().len(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&fixtures).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Built-in fixtures");
    println!("=================");
    for fixture in Fixture::ALL {
        let spec = fixture.spec();
        println!(
            "  {:<20} {} row(s)  [{}]",
            fixture.name(),
            spec.rows().len(),
            spec.keys().join(", ")
        );
    }
    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Build a fixture or spec file and print the resulting cursor.
pub fn cmd_show(
    fixture: Option<&str>,
    file: Option<&Path>,
    json_mode: bool,
    limit: Option<usize>,
) -> Result<(), FixtureError> {
    let spec = resolve_spec(fixture, file)?;
    let mut cursor = spec.build()?;

    tracing::info!(
        "Built result: {} key(s), {} record(s)",
        cursor.keys().len(),
        cursor.records().len()
    );

    let output = if json_mode {
        render::json(&mut cursor, limit)
    } else {
        render::table(&mut cursor, limit)
    };
    print!("{}", output);
    if json_mode {
        println!();
    }
    Ok(())
}

/// Pick the result to build: a spec file wins over a fixture name.
pub fn resolve_spec(
    fixture: Option<&str>,
    file: Option<&Path>,
) -> Result<ResultSpec, FixtureError> {
    match (fixture, file) {
        (_, Some(path)) => {
            tracing::info!("Loading result spec from {:?}", path);
            spec_file::load(path)
        }
        (Some(name), None) => Ok(name.parse::<Fixture>()?.spec()),
        (None, None) => Err(FixtureError::Config(
            "either a fixture name or --file is required".to_string(),
        )),
    }
}
