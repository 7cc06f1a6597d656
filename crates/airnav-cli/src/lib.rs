//! Airnav CLI library.
//!
//! This crate provides the command handlers and output formatting behind the
//! `airnav-cli` binary. Graph construction and pathfinding live in
//! `airnav-lib`; the handlers here only wire configuration to those calls.

pub mod commands;
pub mod output;
