//! # Book Catalogue
//!
//! Canonical book names with their abbreviations and alternative names, after
//! <https://catholic-resources.org/Bible/Abbreviations-Abreviaciones.htm>.
//!
//! Two lookup tables are derived from [`BOOKS`] on first use and never change:
//!
//! - alias (lowercased) → canonical name, used to resolve what the user typed.
//!   Every canonical name is also its own alias.
//! - book identifier → canonical name, used to turn a storage key such as
//!   `songofsolomon` back into `Song of Solomon` for display.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// `(canonical name, aliases)` in canonical order.
pub static BOOKS: &[(&str, &[&str])] = &[
    ("Genesis", &["Gen"]),
    ("Exodus", &["Exod"]),
    ("Leviticus", &["Lev"]),
    ("Numbers", &["Num"]),
    ("Deuteronomy", &["Deut"]),
    ("Joshua", &["Josh"]),
    ("Judges", &["Judg"]),
    ("Ruth", &["Ruth"]),
    ("1 Samuel", &["1 Sam"]),
    ("2 Samuel", &["2 Sam"]),
    ("1 Kings", &["1 Kgs"]),
    ("2 Kings", &["2 Kgs"]),
    ("1 Chronicles", &["1 Chr"]),
    ("2 Chronicles", &["2 Chr"]),
    ("Ezra", &["Ezra"]),
    ("Nehemiah", &["Neh"]),
    ("Tobit", &["Tob"]),
    ("Judith", &["Jud"]),
    ("Esther", &["Esth"]),
    ("1 Maccabees", &["1 Macc"]),
    ("2 Maccabees", &["2 Macc"]),
    ("Job", &["Job"]),
    ("Psalms", &["Ps"]),
    ("Proverbs", &["Prov"]),
    ("Ecclesiastes", &["Eccel", "Qoheleth", "Qoh"]),
    (
        "Song of Solomon",
        &["Song", "Song of Songs", "Canticle of Canticles", "Cant"],
    ),
    ("Wisdom", &["Wisdom of Solomon", "Wis"]),
    ("Sirach", &["Sir", "Ecclesiasticus", "Ecclus"]),
    ("Isaiah", &["Isa"]),
    ("Jeremiah", &["Jer"]),
    ("Lamentations", &["Lam"]),
    ("Baruch", &["Bar"]),
    ("Ezekiel", &["Ezek"]),
    ("Daniel", &["Dan"]),
    ("Hosea", &["Hos"]),
    ("Joel", &["Joel"]),
    ("Amos", &["Amos"]),
    ("Obadiah", &["Obad"]),
    ("Jonah", &["Jonah"]),
    ("Micah", &["Mic"]),
    ("Nahum", &["Nah"]),
    ("Habakkuk", &["Hab"]),
    ("Zephaniah", &["Zeph"]),
    ("Haggai", &["Hag"]),
    ("Zechariah", &["Zech"]),
    ("Malachi", &["Mal"]),
    ("Matthew", &["Matt", "Mat", "Mt"]),
    ("Mark", &["Mark", "Mk"]),
    ("Luke", &["Luke", "Lu", "Lk"]),
    ("John", &["John", "Jn"]),
    ("Acts", &["Acts of the Apostles", "Acts"]),
    ("Romans", &["Rom"]),
    ("1 Corinthians", &["1 Cor", "I Cor", "I Corinthians"]),
    ("2 Corinthians", &["2 Cor", "II Cor", "II Corinthians"]),
    ("Galatians", &["Gal"]),
    ("Ephesians", &["Eph"]),
    ("Philippians", &["Phil"]),
    ("Colossians", &["Col"]),
    ("1 Thessalonians", &["1 Thess", "I Thess", "I Thessalonians"]),
    ("2 Thessalonians", &["2 Thess", "II Thess", "II Thessalonians"]),
    ("1 Timothy", &["1 Tim", "I Tim", "I Timothy"]),
    ("2 Timothy", &["2 Tim", "II Tim", "II Timothy"]),
    ("Titus", &["Titus"]),
    ("Philemon", &["Phlm", "Philem"]),
    ("Hebrews", &["Heb"]),
    ("James", &["Jas"]),
    ("1 Peter", &["1 Pet", "1 Pt"]),
    ("2 Peter", &["2 Pet", "2 Pt"]),
    ("1 John", &["1 John", "1 Jn", "I Jn", "I John"]),
    ("2 John", &["2 John", "2 Jn", "II Jn", "II John"]),
    ("3 John", &["3 John", "3 Jn", "III Jn", "III John"]),
    ("Jude", &["Jude"]),
    ("Revelation", &["Rev", "Apocalypse", "Apoc"]),
];

static ALIASES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut table: HashMap<String, &'static str> = BOOKS
        .iter()
        .flat_map(|(canonical, aliases)| {
            aliases
                .iter()
                .map(move |alias| (alias.to_lowercase(), *canonical))
        })
        .collect();
    table.extend(
        BOOKS
            .iter()
            .map(|(canonical, _)| (canonical.to_lowercase(), *canonical)),
    );
    table
});

static BY_ID: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    BOOKS
        .iter()
        .map(|(canonical, _)| (canonical_id(canonical), *canonical))
        .collect()
});

/// A catalogue entry as listed to users.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BookEntry {
    pub name: &'static str,
    pub id: String,
    pub aliases: Vec<&'static str>,
}

/// Resolves a user-typed book name or abbreviation, ignoring case.
pub fn resolve(name: &str) -> Option<&'static str> {
    ALIASES.get(&name.to_lowercase()).copied()
}

/// The storage key for a canonical name: lowercase, spaces removed.
/// `Song of Solomon` → `songofsolomon`, `1 John` → `1john`.
pub fn canonical_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

/// The canonical name for a storage key, e.g. `1john` → `1 John`.
pub fn display_name(book_id: &str) -> Option<&'static str> {
    BY_ID.get(book_id).copied()
}

/// All books in canonical order. Aliases equal to the canonical name are omitted.
pub fn catalogue() -> Vec<BookEntry> {
    BOOKS
        .iter()
        .map(|(canonical, aliases)| BookEntry {
            name: *canonical,
            id: canonical_id(canonical),
            aliases: aliases
                .iter()
                .copied()
                .filter(|alias| !alias.eq_ignore_ascii_case(canonical))
                .collect(),
        })
        .collect()
}
