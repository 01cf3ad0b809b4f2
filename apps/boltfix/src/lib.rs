//! # boltfix
//!
//! Library half of the fixture inspector: commands, spec-file loading and
//! cursor rendering, shared by the binary and its tests.

pub mod cli;
pub mod render;
pub mod spec_file;
