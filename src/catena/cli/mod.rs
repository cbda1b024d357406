//! # CLI
//!
//! One UI client for catena, not the application itself. For the overall architecture see the
//! crate-level documentation of the `catena` library.
//!
//! ## Module Structure
//!
//! - `commands`: context setup, dispatch and per-command handlers
//! - `render`: terminal rendering of Markdown, messages and listings
//! - `setup`: argument parsing via clap
//! - `styles`: the named style theme
//! - `templates`: output templates

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
