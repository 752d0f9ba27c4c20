//! Command line front end for swiftcheck: config loading, the `pw-rs`
//! binding for the page seam, and the `run` / `list` / `translate` commands.

pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
