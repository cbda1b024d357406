//! # Storage Layer
//!
//! The [`CommentaryStore`] trait hides where commentaries live. Commands take any
//! store, so the same lookup logic runs against the SQLite database in production
//! and against [`memory::InMemoryStore`] in tests.
//!
//! ## Matching Rule
//!
//! A commentary covers the closed interval `[location_start, location_end]`. It
//! matches a query when it is on the same book and the two intervals intersect:
//!
//! ```text
//! commentary.location_end >= query.start  &&  commentary.location_start <= query.end
//! ```
//!
//! Results are ordered by year, then by start location. The author's wiki link is
//! joined in from father metadata by exact name.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: the `commentaries.db` SQLite file
//!   ```text
//!   commentary(id, father_name, file_name, append_to_author_name, ts, book,
//!              location_start, location_end, txt, source_url, source_title)
//!   father_meta(name, wiki_url)
//!   ```
//! - [`memory::InMemoryStore`]: no persistence, for tests

use crate::error::Result;
use crate::model::Commentary;
use crate::reference::ParsedReference;

pub mod memory;
pub mod sqlite;

pub trait CommentaryStore {
    /// Commentaries overlapping the referenced range, in display order.
    fn commentaries(&self, query: &ParsedReference) -> Result<Vec<Commentary>>;

    /// Stores a commentary. Its `wiki_url` is ignored; see [`CommentaryStore::add_father`].
    fn add_commentary(&mut self, commentary: &Commentary) -> Result<()>;

    /// Records the biography link for a father, replacing any previous one.
    fn add_father(&mut self, name: &str, wiki_url: &str) -> Result<()>;
}

/// True when `commentary` should be returned for `query`.
pub fn overlaps(commentary: &Commentary, query: &ParsedReference) -> bool {
    commentary.book == query.book
        && commentary.location_end >= query.start
        && commentary.location_start <= query.end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{reference, LocationCode};

    fn spanning(start: (u32, u32), end: (u32, u32)) -> Commentary {
        Commentary::new(
            "c",
            "Origen",
            "john",
            LocationCode::encode(start.0, start.1),
            LocationCode::encode(end.0, end.1),
            "",
        )
    }

    #[test]
    fn test_overlap_rules() {
        let query = reference("John 3:16-18").unwrap();

        assert!(overlaps(&spanning((3, 16), (3, 16)), &query));
        assert!(overlaps(&spanning((3, 1), (3, 16)), &query));
        assert!(overlaps(&spanning((3, 18), (4, 2)), &query));
        assert!(overlaps(&spanning((2, 1), (5, 1)), &query));

        assert!(!overlaps(&spanning((3, 1), (3, 15)), &query));
        assert!(!overlaps(&spanning((3, 19), (3, 30)), &query));
    }

    #[test]
    fn test_overlap_requires_same_book() {
        let query = reference("Mark 3:16").unwrap();
        assert!(!overlaps(&spanning((3, 16), (3, 16)), &query));
    }
}
