//! # Catena Architecture
//!
//! Catena looks up patristic commentary on Bible passages. A user types a reference such as
//! `John 3:16-18` and gets back every commentary whose verse span overlaps it, oldest first.
//!
//! Like any UI-agnostic library, the core never touches the terminal; the `catena` binary is
//! one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Reference parsing, lookup, book listing, config          │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CommentaryStore trait                           │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Location Codes
//!
//! Verses are stored as a single integer, `chapter * 1_000_000 + verse`, so a range query is
//! two integer comparisons. See [`reference::location`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`reference`]: Reference validation and parsing, book catalogue, location codes
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Commentary` record
//! - [`markdown`]: Markdown rendering of commentary lists
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod markdown;
pub mod model;
pub mod reference;
pub mod store;
