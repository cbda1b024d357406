use super::CommentaryStore;
use crate::error::{CatenaError, Result};
use crate::model::Commentary;
use crate::reference::{LocationCode, ParsedReference};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, Row, ToSql};
use std::path::Path;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS commentary (
    id TEXT PRIMARY KEY,
    father_name TEXT NOT NULL,
    file_name TEXT,
    append_to_author_name TEXT,
    ts INTEGER,
    book TEXT NOT NULL,
    location_start INTEGER NOT NULL,
    location_end INTEGER NOT NULL,
    txt TEXT,
    source_url TEXT,
    source_title TEXT
);
CREATE INDEX IF NOT EXISTS commentary_book_location
    ON commentary (book, location_start, location_end);
CREATE TABLE IF NOT EXISTS father_meta (
    name TEXT PRIMARY KEY,
    wiki_url TEXT
);
";

const LOOKUP: &str = "
SELECT c.id, c.father_name, c.file_name, c.append_to_author_name, c.ts, c.book,
       c.location_start, c.location_end, c.txt, c.source_url, c.source_title, fm.wiki_url
FROM commentary c LEFT JOIN father_meta fm ON c.father_name = fm.name
WHERE c.book = ?1
  AND c.location_end >= ?2
  AND c.location_start <= ?3
ORDER BY c.ts ASC, c.location_start ASC
";

const INSERT_COMMENTARY: &str = "
INSERT INTO commentary (id, father_name, file_name, append_to_author_name, ts, book,
                        location_start, location_end, txt, source_url, source_title)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
";

/// Commentaries kept in a SQLite database file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens an existing database. Never creates one.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CatenaError::DatabaseNotFound(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), "opening commentary database");
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    /// Opens or creates a database file and ensures the schema exists.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

impl CommentaryStore for SqliteStore {
    fn commentaries(&self, query: &ParsedReference) -> Result<Vec<Commentary>> {
        let mut stmt = self.conn.prepare_cached(LOOKUP)?;
        let rows = stmt.query_map(params![query.book, query.start, query.end], row_to_commentary)?;
        let commentaries = rows.collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(
            book = %query.book,
            start = %query.start,
            end = %query.end,
            found = commentaries.len(),
            "queried commentaries"
        );
        Ok(commentaries)
    }

    fn add_commentary(&mut self, commentary: &Commentary) -> Result<()> {
        self.conn.execute(
            INSERT_COMMENTARY,
            params![
                commentary.id,
                commentary.father_name,
                commentary.file_name,
                commentary.append_to_author_name,
                commentary.year,
                commentary.book,
                commentary.location_start,
                commentary.location_end,
                commentary.text,
                commentary.source_url,
                commentary.source_title,
            ],
        )?;
        Ok(())
    }

    fn add_father(&mut self, name: &str, wiki_url: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO father_meta (name, wiki_url) VALUES (?1, ?2)",
            params![name, wiki_url],
        )?;
        Ok(())
    }
}

fn row_to_commentary(row: &Row<'_>) -> rusqlite::Result<Commentary> {
    Ok(Commentary {
        id: text_column(row, 0)?,
        father_name: text_column(row, 1)?,
        file_name: text_column(row, 2)?,
        append_to_author_name: text_column(row, 3)?,
        year: row.get::<_, Option<i64>>(4)?.unwrap_or(0),
        book: text_column(row, 5)?,
        location_start: row.get(6)?,
        location_end: row.get(7)?,
        text: text_column(row, 8)?,
        source_url: text_column(row, 9)?,
        source_title: text_column(row, 10)?,
        wiki_url: row.get::<_, Option<String>>(11)?.filter(|url| !url.is_empty()),
    })
}

/// Reads a loosely typed text column: NULL becomes empty, integers are stringified.
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(String::new()),
        ValueRef::Integer(i) => Ok(i.to_string()),
        ValueRef::Real(f) => Ok(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

impl ToSql for LocationCode {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let raw = i64::try_from(self.get())
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        Ok(ToSqlOutput::from(raw))
    }
}

impl FromSql for LocationCode {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = i64::column_result(value)?;
        u64::try_from(raw)
            .map(LocationCode::from_raw)
            .map_err(|_| FromSqlError::OutOfRange(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::reference;

    fn commentary(id: &str, father: &str, year: i64, start: (u32, u32), end: (u32, u32)) -> Commentary {
        Commentary::new(
            id,
            father,
            "john",
            LocationCode::encode(start.0, start.1),
            LocationCode::encode(end.0, end.1),
            format!("{father} says"),
        )
        .with_year(year)
    }

    fn seeded() -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .add_commentary(&commentary("1", "Augustine", 410, (3, 1), (3, 21)))
            .unwrap();
        store
            .add_commentary(&commentary("2", "Origen", 230, (3, 16), (3, 16)))
            .unwrap();
        store
            .add_commentary(&commentary("3", "Chrysostom", 390, (4, 1), (4, 3)))
            .unwrap();
        store
            .add_father("Origen", "https://en.wikipedia.org/wiki/Origen")
            .unwrap();
        store
    }

    #[test]
    fn test_lookup_filters_and_orders() {
        let store = seeded();
        let found = store
            .commentaries(&reference("John 3:16").unwrap())
            .unwrap();

        let ids: Vec<_> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(found[0].location_start, LocationCode::encode(3, 16));
        assert_eq!(found[0].text, "Origen says");
    }

    #[test]
    fn test_lookup_joins_wiki_url() {
        let store = seeded();
        let found = store
            .commentaries(&reference("John 3").unwrap())
            .unwrap();

        let origen = found.iter().find(|c| c.father_name == "Origen").unwrap();
        assert_eq!(
            origen.wiki_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Origen")
        );
        let augustine = found.iter().find(|c| c.father_name == "Augustine").unwrap();
        assert_eq!(augustine.wiki_url, None);
    }

    #[test]
    fn test_lookup_cross_chapter() {
        let store = seeded();
        let found = store
            .commentaries(&reference("John 3:20-4:1").unwrap())
            .unwrap();
        let ids: Vec<_> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_nullable_columns_read_as_empty() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO commentary (id, father_name, book, location_start, location_end)
                 VALUES (7, 'Ambrose', 'mark', 3000016, 3000016)",
                [],
            )
            .unwrap();

        let found = store
            .commentaries(&reference("Mk 3:16").unwrap())
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "7");
        assert_eq!(found[0].year, 0);
        assert_eq!(found[0].source_title, "");
        assert_eq!(found[0].text, "");
    }

    #[test]
    fn test_open_missing_database() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("commentaries.db");
        assert!(matches!(
            SqliteStore::open(&missing),
            Err(CatenaError::DatabaseNotFound(path)) if path == missing
        ));
    }

    #[test]
    fn test_create_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commentaries.db");
        {
            let mut store = SqliteStore::create(&path).unwrap();
            store
                .add_commentary(&commentary("1", "Origen", 230, (1, 1), (1, 1)))
                .unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let found = store
            .commentaries(&reference("John 1:1").unwrap())
            .unwrap();
        assert_eq!(found.len(), 1);
    }
}
