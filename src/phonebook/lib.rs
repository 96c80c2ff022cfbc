//! # Phonebook Architecture
//!
//! Phonebook is a small contact directory: person records with a name, an
//! organization and two phone numbers, each with an id the store assigns.
//! Like most of its kind it is a library with a CLI client, not the other way
//! around.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, applies config defaults       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates caller input (page numbers), builds messages   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (book.rs)                                     │
//! │  - Ordered records, id assignment, binary search, paging    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load all / save all                     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>`, and never touches the terminal. Collecting field
//! values from a user is a separate step from applying them to the store.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`book`]: The record store and its invariants
//! - [`commands`]: Per-operation logic and result types
//! - [`store`]: Persistence gateway trait and implementations
//! - [`model`]: `Record`, `RecordFields`
//! - [`paging`]: Page arithmetic and the pager state machine
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod paging;
pub mod store;
