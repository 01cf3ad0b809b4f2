//! Tests for the CLI command layer.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use boltfix::cli::{Cli, Commands, cmd_list, cmd_show, execute, resolve_spec};
use boltfix_core::{Fixture, FixtureError};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

fn spec_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =============================================================================
// SPEC RESOLUTION
// =============================================================================

#[test]
fn test_resolve_fixture_by_name() {
    let spec = resolve_spec(Some("more-elements-diff"), None).unwrap();
    assert_eq!(spec.keys(), Fixture::MoreElementsDiff.spec().keys());
    assert_eq!(spec.rows().len(), 2);
}

#[test]
fn test_resolve_unknown_fixture() {
    let err = resolve_spec(Some("no-such-fixture"), None).unwrap_err();
    assert!(matches!(err, FixtureError::Config(ref msg) if msg.contains("no-such-fixture")));
}

#[test]
fn test_resolve_requires_a_source() {
    let err = resolve_spec(None, None).unwrap_err();
    assert_eq!(
        err,
        FixtureError::Config("either a fixture name or --file is required".to_string())
    );
}

#[test]
fn test_resolve_file_wins_over_fixture() {
    let file = spec_file("keys = [\"only\"]\nrows = [[1]]\n");
    let spec = resolve_spec(Some("nodes"), Some(file.path())).unwrap();
    assert_eq!(spec.keys(), ["only"]);
}

// =============================================================================
// COMMANDS
// =============================================================================

#[test]
fn test_list_text_and_json() {
    assert!(cmd_list(false).is_ok());
    assert!(cmd_list(true).is_ok());
}

#[test]
fn test_show_every_fixture() {
    for fixture in Fixture::ALL {
        assert!(cmd_show(Some(fixture.name()), None, false, None).is_ok());
        assert!(cmd_show(Some(fixture.name()), None, true, Some(1)).is_ok());
    }
}

#[test]
fn test_show_file() {
    let file = spec_file("keys = [\"a\", \"b\"]\nrows = [[1, \"x\"], [2, \"y\"]]\n");
    assert!(cmd_show(None, Some(file.path()), false, Some(1)).is_ok());
}

#[test]
fn test_show_unsupported_cell_fails_at_build() {
    let file = spec_file("keys = [\"list\"]\nrows = [[[1, 2]]]\n");
    let err = cmd_show(None, Some(file.path()), false, None).unwrap_err();
    assert!(matches!(err, FixtureError::UnsupportedValueKind { .. }));
}

#[test]
fn test_show_missing_file() {
    let path = PathBuf::from("/nonexistent/boltfix/result.toml");
    let err = cmd_show(None, Some(&path), false, None).unwrap_err();
    assert!(matches!(err, FixtureError::Config(_)));
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn test_parse_show_arguments() {
    let cli = Cli::try_parse_from(["boltfix", "--json-mode", "show", "nodes", "--limit", "1"])
        .unwrap();
    assert!(cli.json_mode);
    match cli.command {
        Some(Commands::Show {
            fixture,
            file,
            limit,
        }) => {
            assert_eq!(fixture.as_deref(), Some("nodes"));
            assert!(file.is_none());
            assert_eq!(limit, Some(1));
        }
        other => panic!("expected show, got {:?}", other),
    }
}

#[test]
fn test_fixture_and_file_conflict() {
    let result = Cli::try_parse_from(["boltfix", "show", "nodes", "--file", "result.toml"]);
    assert!(result.is_err());
}

#[test]
fn test_no_subcommand_lists() {
    let cli = Cli::try_parse_from(["boltfix"]).unwrap();
    assert!(cli.command.is_none());
    assert!(execute(cli).is_ok());
}
