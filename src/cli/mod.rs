//! Command implementations for the `ganim` binary.

pub mod commands;
