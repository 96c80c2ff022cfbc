//! # CLI Layer
//!
//! One possible UI client for phonebook. This is the only place that parses
//! arguments, reads stdin, writes stdout/stderr or installs the log
//! subscriber.
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context setup and per-command handlers
//! - `prompt.rs`: the interactive menu, pager and field prompts
//! - `print.rs`: record and message formatting

mod commands;
mod print;
mod prompt;
mod setup;

pub use commands::run;
