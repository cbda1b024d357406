use crate::reference::{books, format_code_range, LocationCode};
use serde::{Deserialize, Serialize};

/// Years at or beyond this are placeholders in the source data.
const UNKNOWN_YEAR_SENTINEL: i64 = 9_999_999;

/// One stored commentary on a passage.
///
/// `wiki_url` is not stored with the commentary itself; stores fill it in from the
/// father's metadata when the commentary is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    pub id: String,
    pub father_name: String,
    pub file_name: String,
    pub append_to_author_name: String,
    /// Negative for BC, 0 when unknown.
    pub year: i64,
    /// Storage book key, e.g. `1john`.
    pub book: String,
    pub location_start: LocationCode,
    pub location_end: LocationCode,
    pub text: String,
    pub source_url: String,
    pub source_title: String,
    pub wiki_url: Option<String>,
}

impl Commentary {
    /// A commentary with only the fields needed for lookups set.
    pub fn new(
        id: impl Into<String>,
        father_name: impl Into<String>,
        book: impl Into<String>,
        location_start: LocationCode,
        location_end: LocationCode,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            father_name: father_name.into(),
            file_name: String::new(),
            append_to_author_name: String::new(),
            year: 0,
            book: book.into(),
            location_start,
            location_end,
            text: text.into(),
            source_url: String::new(),
            source_title: String::new(),
            wiki_url: None,
        }
    }

    pub fn with_year(mut self, year: i64) -> Self {
        self.year = year;
        self
    }

    pub fn with_source(mut self, title: impl Into<String>, url: impl Into<String>) -> Self {
        self.source_title = title.into();
        self.source_url = url.into();
        self
    }

    pub fn with_author_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.append_to_author_name = suffix.into();
        self
    }

    pub fn year_label(&self) -> String {
        year_label(self.year)
    }

    /// Father name plus the optional suffix, e.g. `Augustine of Hippo`.
    pub fn author_display(&self) -> String {
        let name = self.father_name.trim();
        let suffix = self.append_to_author_name.trim();
        if suffix.is_empty() {
            name.to_string()
        } else {
            format!("{name} {suffix}")
        }
    }

    /// Canonical book name, falling back to the stored key for unknown books.
    pub fn book_display(&self) -> &str {
        books::display_name(&self.book).unwrap_or(&self.book)
    }

    pub fn verse_range(&self) -> String {
        format_code_range(self.location_start, self.location_end)
    }
}

/// `AD 354`, `150 BC` or `Unknown Year`.
pub fn year_label(year: i64) -> String {
    if 0 < year && year < UNKNOWN_YEAR_SENTINEL {
        format!("AD {year}")
    } else if year < 0 {
        format!("{} BC", year.unsigned_abs())
    } else {
        "Unknown Year".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Commentary {
        Commentary::new(
            "c1",
            " Augustine ",
            "songofsolomon",
            LocationCode::encode(1, 1),
            LocationCode::encode(1, 4),
            "Text",
        )
    }

    #[test]
    fn test_year_labels() {
        assert_eq!(year_label(354), "AD 354");
        assert_eq!(year_label(1), "AD 1");
        assert_eq!(year_label(-150), "150 BC");
        assert_eq!(year_label(0), "Unknown Year");
        assert_eq!(year_label(9_999_999), "Unknown Year");
    }

    #[test]
    fn test_author_display_trims_and_appends_suffix() {
        let c = sample();
        assert_eq!(c.author_display(), "Augustine");

        let c = sample().with_author_suffix(" of Hippo ");
        assert_eq!(c.author_display(), "Augustine of Hippo");
    }

    #[test]
    fn test_book_display() {
        assert_eq!(sample().book_display(), "Song of Solomon");

        let mut c = sample();
        c.book = "enoch".to_string();
        assert_eq!(c.book_display(), "enoch");
    }

    #[test]
    fn test_verse_range() {
        assert_eq!(sample().verse_range(), "1:1-4");
    }
}
