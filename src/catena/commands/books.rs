use crate::commands::{CmdMessage, CmdResult};
use crate::reference::books::{catalogue, BookEntry};

/// Lists the book catalogue, optionally narrowed to books whose name, identifier or
/// any alias contains `filter` (case-insensitive).
pub fn run(filter: Option<&str>) -> CmdResult {
    let books: Vec<BookEntry> = match filter {
        None => catalogue(),
        Some(term) => {
            let term = term.trim().to_lowercase();
            catalogue()
                .into_iter()
                .filter(|book| matches_term(book, &term))
                .collect()
        }
    };

    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::warning("No books match."));
    }
    result.with_books(books)
}

fn matches_term(book: &BookEntry, term: &str) -> bool {
    book.name.to_lowercase().contains(term)
        || book.id.contains(term)
        || book
            .aliases
            .iter()
            .any(|alias| alias.to_lowercase().contains(term))
}
