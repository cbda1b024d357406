//! # Reference Parsing
//!
//! Turns a human-typed citation into something storage can answer:
//!
//! ```text
//! "1 Jn 1:4-2:1"  ──►  ParsedReference { book: "1john", start: 1000004, end: 2000001 }
//! ```
//!
//! ## Grammar
//!
//! A reference is `<book name><space><locator>`. Book names may contain spaces
//! ("Song of Solomon", "1 Kgs"), so the input is split at the **last** space: everything
//! before it is the book, the final token is the locator.
//!
//! The locator is `chapter[:verse[-[chapter:]verse]]`. A bare chapter (`John 3`) selects
//! the whole chapter, expanded to verses `1-99999` so no chapter lengths are needed.
//!
//! Validation only anchors the *beginning* of the input: `<anything><space><1-2 digits>`
//! optionally followed by `:<digits>[-[<digits>]]`. Whatever follows that prefix is left
//! for the locator parser, which is what lets `Mark 3:16-14:17` and
//! `Mark 900000:9321` through.
//!
//! ## Normalisation
//!
//! Reversed ranges are swapped rather than rejected: `Mark 3:16-14` covers 3:14 to 3:16.
//!
//! Parsing is a pure function of the input and the static book catalogue, safe to call
//! from any thread.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub mod books;
pub mod locator;
pub mod location;

pub use location::{format_code_range, format_range, LocationCode};
pub use locator::{parse_locator, LocatorError, VerseRange};

/// Locator appended to a bare chapter number.
const WHOLE_CHAPTER: &str = ":1-99999";

static REFERENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*?)\s([0-9]{1,2})(?::([0-9]{1,2})(?:-([0-9]{1,2})?)?)?")
        .expect("reference pattern is valid")
});

/// Why a reference could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// The input does not look like a reference at all.
    #[error(
        "`{raw}` did not conform to standard reference style BookName Chapter[:Verse][-[Chapter:]Verse]"
    )]
    Style { raw: String },

    /// The locator is fine but the book name is unknown.
    #[error("book `{name}` not found, run `catena books` for available names")]
    BookNotFound { name: String },

    /// The locator passed validation but has an impossible shape, such as five
    /// numbers. Not something the user can fix by rephrasing.
    #[error("malformed locator `{locator}`: {source}")]
    Malformed {
        locator: String,
        #[source]
        source: LocatorError,
    },
}

impl ReferenceError {
    /// True for the kinds caused by what the user typed.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ReferenceError::Style { .. } | ReferenceError::BookNotFound { .. }
        )
    }
}

/// A resolved reference: storage book key plus an ordered range of location codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedReference {
    pub book: String,
    pub start: LocationCode,
    pub end: LocationCode,
}

impl ParsedReference {
    /// `(book, start, end)` as plain values.
    pub fn as_tuple(&self) -> (&str, u64, u64) {
        (&self.book, self.start.get(), self.end.get())
    }

    /// Short citation form of the range, e.g. `3:16-17`.
    pub fn range_label(&self) -> String {
        format_code_range(self.start, self.end)
    }

    /// Canonical book name followed by the range, e.g. `Song of Solomon 1:1`.
    pub fn label(&self) -> String {
        let book = books::display_name(&self.book).unwrap_or(&self.book);
        format!("{} {}", book, self.range_label())
    }
}

/// Checks the citation grammar without resolving anything.
pub fn validate(raw: &str) -> bool {
    REFERENCE_RE.is_match(raw)
}

/// Parses a reference such as `John 1:13`, `John 1:13-14` or `1 Jn 1:4-2:1`.
pub fn reference(raw: &str) -> Result<ParsedReference, ReferenceError> {
    let trimmed = raw.trim();
    if !validate(trimmed) {
        return Err(ReferenceError::Style {
            raw: trimmed.to_string(),
        });
    }

    let citation = if trimmed.contains(':') {
        trimmed.to_string()
    } else {
        format!("{trimmed}{WHOLE_CHAPTER}")
    };

    // Validation accepts any whitespace before the chapter; splitting needs a space.
    let (book_name, locator) = citation
        .rsplit_once(' ')
        .ok_or_else(|| ReferenceError::Style {
            raw: trimmed.to_string(),
        })?;

    let canonical = books::resolve(book_name).ok_or_else(|| ReferenceError::BookNotFound {
        name: book_name.to_string(),
    })?;
    let book = books::canonical_id(canonical);

    let range = parse_locator(locator).map_err(|source| match source {
        LocatorError::Numeral(_) => ReferenceError::Style {
            raw: trimmed.to_string(),
        },
        LocatorError::PieceCount(_) => {
            tracing::error!(locator, %source, "locator passed validation but has no known shape");
            ReferenceError::Malformed {
                locator: locator.to_string(),
                source,
            }
        }
    })?;

    let start = LocationCode::encode(range.start_chapter, range.start_verse);
    let end = LocationCode::encode(range.end_chapter, range.end_verse);
    let (start, end) = if start > end { (end, start) } else { (start, end) };

    tracing::debug!(input = trimmed, %book, %start, %end, "resolved reference");
    Ok(ParsedReference { book, start, end })
}
