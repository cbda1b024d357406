use super::{overlaps, CommentaryStore};
use crate::error::Result;
use crate::model::Commentary;
use crate::reference::ParsedReference;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    commentaries: Vec<Commentary>,
    fathers: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commentaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commentaries.is_empty()
    }
}

impl CommentaryStore for InMemoryStore {
    fn commentaries(&self, query: &ParsedReference) -> Result<Vec<Commentary>> {
        let mut matches: Vec<Commentary> = self
            .commentaries
            .iter()
            .filter(|c| overlaps(c, query))
            .map(|c| Commentary {
                wiki_url: self.fathers.get(&c.father_name).cloned(),
                ..c.clone()
            })
            .collect();

        // Stable, so insertion order breaks remaining ties.
        matches.sort_by_key(|c| (c.year, c.location_start));
        Ok(matches)
    }

    fn add_commentary(&mut self, commentary: &Commentary) -> Result<()> {
        self.commentaries.push(Commentary {
            wiki_url: None,
            ..commentary.clone()
        });
        Ok(())
    }

    fn add_father(&mut self, name: &str, wiki_url: &str) -> Result<()> {
        self.fathers.insert(name.to_string(), wiki_url.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::reference::LocationCode;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: usize,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        /// Adds a commentary on `book` spanning `start..=end` as `(chapter, verse)`.
        pub fn with_commentary(
            mut self,
            father: &str,
            year: i64,
            book: &str,
            start: (u32, u32),
            end: (u32, u32),
        ) -> Self {
            let commentary = Commentary::new(
                format!("c{}", self.next_id),
                father,
                book,
                LocationCode::encode(start.0, start.1),
                LocationCode::encode(end.0, end.1),
                format!("{father} on {book} {}:{}", start.0, start.1),
            )
            .with_year(year);
            self.next_id += 1;
            self.store.add_commentary(&commentary).unwrap();
            self
        }

        pub fn with_father(mut self, name: &str, wiki_url: &str) -> Self {
            self.store.add_father(name, wiki_url).unwrap();
            self
        }
    }
}
