//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! catena operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, never formats Markdown and never decides on exit codes. Rendering a
//! `CmdResult` is the client's job.
//!
//! ## Generic Over CommentaryStore
//!
//! `CatenaApi<S: CommentaryStore>` is generic over the storage backend:
//! - Production: `CatenaApi<SqliteStore>`
//! - Testing: `CatenaApi<InMemoryStore>`
//!
//! Operations that never touch storage (`parse`, `books`, `config`) are free functions so a
//! client can run them without opening a database.

use crate::commands;
use crate::error::Result;
use crate::store::CommentaryStore;
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for catena operations.
pub struct CatenaApi<S: CommentaryStore> {
    store: S,
}

impl<S: CommentaryStore> CatenaApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Parses `raw` and returns every commentary overlapping the referenced range.
    pub fn lookup(&self, raw: &str) -> Result<CmdResult> {
        commands::lookup::run(&self.store, raw)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

/// Parses a reference into its storage form.
pub fn parse(raw: &str) -> Result<CmdResult> {
    commands::parse::run(raw)
}

pub fn books(filter: Option<&str>) -> CmdResult {
    commands::books::run(filter)
}

pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Commentary;
    use crate::reference::LocationCode;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lookup_dispatches_to_the_store() {
        let mut api = CatenaApi::new(InMemoryStore::new());
        api.store_mut()
            .add_commentary(&Commentary::new(
                "c1",
                "Bede",
                "mark",
                LocationCode::encode(1, 1),
                LocationCode::encode(1, 8),
                "On the beginning of the gospel.",
            ))
            .unwrap();

        let result = api.lookup("Mk 1:4").unwrap();
        assert_eq!(result.commentaries.len(), 1);
        assert_eq!(result.reference.unwrap().book, "mark");
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn free_functions_need_no_store() {
        assert!(parse("Romans 8:28").unwrap().reference.is_some());
        assert_eq!(books(Some("romans")).books.len(), 1);
    }
}
