//! Command handlers, one module per subcommand.
//!
//! Each handler translates parsed arguments into core types, drives the
//! appropriate service, and renders results through the
//! [`OutputManager`](crate::output::OutputManager).

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;
