//! Parsing of the `chapter:verse[-[chapter:]verse]` part of a reference.
//!
//! `:` and `-` are treated alike as separators. The number of pieces decides the shape:
//!
//! | pieces | input        | meaning                 |
//! |--------|--------------|-------------------------|
//! | 2      | `3:16`       | single verse            |
//! | 3      | `3:16-18`    | range within a chapter  |
//! | 4      | `3:16-4:2`   | range across chapters   |
//!
//! Magnitudes are not checked against real book lengths: `900000:9321` parses fine and
//! simply matches nothing in storage.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorError {
    #[error("expected 2 to 4 numbers separated by ':' or '-', found {0}")]
    PieceCount(usize),

    #[error("`{0}` is not a chapter or verse number")]
    Numeral(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRange {
    pub start_chapter: u32,
    pub start_verse: u32,
    pub end_chapter: u32,
    pub end_verse: u32,
}

impl VerseRange {
    pub fn single(chapter: u32, verse: u32) -> Self {
        Self {
            start_chapter: chapter,
            start_verse: verse,
            end_chapter: chapter,
            end_verse: verse,
        }
    }
}

/// Parses a locator such as `1:57`, `1:57-58` or `1:57-2:32`.
pub fn parse_locator(text: &str) -> Result<VerseRange, LocatorError> {
    let pieces: Vec<&str> = text.split([':', '-']).collect();

    if !(2..=4).contains(&pieces.len()) {
        return Err(LocatorError::PieceCount(pieces.len()));
    }

    let numbers = pieces
        .iter()
        .map(|piece| parse_numeral(piece))
        .collect::<Result<Vec<u32>, _>>()?;

    let range = match numbers.as_slice() {
        [chapter, verse] => VerseRange::single(*chapter, *verse),
        [chapter, verse, end_verse] => VerseRange {
            start_chapter: *chapter,
            start_verse: *verse,
            end_chapter: *chapter,
            end_verse: *end_verse,
        },
        [chapter, verse, end_chapter, end_verse] => VerseRange {
            start_chapter: *chapter,
            start_verse: *verse,
            end_chapter: *end_chapter,
            end_verse: *end_verse,
        },
        other => return Err(LocatorError::PieceCount(other.len())),
    };

    Ok(range)
}

fn parse_numeral(piece: &str) -> Result<u32, LocatorError> {
    // `u32::from_str` would also take a leading '+'.
    if piece.is_empty() || !piece.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LocatorError::Numeral(piece.to_string()));
    }
    piece
        .parse()
        .map_err(|_| LocatorError::Numeral(piece.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_verse() {
        assert_eq!(parse_locator("1:56"), Ok(VerseRange::single(1, 56)));
    }

    #[test]
    fn test_same_chapter_range() {
        assert_eq!(
            parse_locator("1:57-58"),
            Ok(VerseRange {
                start_chapter: 1,
                start_verse: 57,
                end_chapter: 1,
                end_verse: 58,
            })
        );
    }

    #[test]
    fn test_cross_chapter_range() {
        assert_eq!(
            parse_locator("1:57-2:32"),
            Ok(VerseRange {
                start_chapter: 1,
                start_verse: 57,
                end_chapter: 2,
                end_verse: 32,
            })
        );
    }

    #[test]
    fn test_separators_are_interchangeable() {
        // Only the piece count matters, not which separator was used.
        assert_eq!(parse_locator("3-16"), parse_locator("3:16"));
        assert_eq!(parse_locator("3-5:1-99999"), parse_locator("3:5-1:99999"));
    }

    #[test]
    fn test_large_numerals_accepted() {
        assert_eq!(
            parse_locator("900000:9321"),
            Ok(VerseRange::single(900_000, 9321))
        );
    }

    #[test]
    fn test_wrong_piece_count() {
        assert_eq!(parse_locator("3"), Err(LocatorError::PieceCount(1)));
        assert_eq!(parse_locator("1:2-3:4-5"), Err(LocatorError::PieceCount(5)));
    }

    #[test]
    fn test_trailing_dash_is_an_empty_numeral() {
        assert_eq!(
            parse_locator("3:16-"),
            Err(LocatorError::Numeral(String::new()))
        );
    }

    #[test]
    fn test_non_numeric_piece() {
        assert_eq!(
            parse_locator("3:abc"),
            Err(LocatorError::Numeral("abc".to_string()))
        );
        assert_eq!(
            parse_locator("3:+4"),
            Err(LocatorError::Numeral("+4".to_string()))
        );
    }

    #[test]
    fn test_numeral_beyond_u32() {
        assert_eq!(
            parse_locator("3:99999999999"),
            Err(LocatorError::Numeral("99999999999".to_string()))
        );
    }
}
