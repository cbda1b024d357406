//! # Markdown Rendering
//!
//! Turns commentaries into a Markdown document, one section per commentary:
//!
//! ```text
//! # [AD 407] [John Chrysostom](https://...) on John 3:16
//! <commentary text>
//! `<source title>`
//!
//!
//!  ---
//! ```
//!
//! The heading layout lives in `templates/commentary.md.tmp`; year labels, author names
//! and verse ranges are computed in Rust and handed to the template ready to print.

use crate::error::Result;
use crate::model::Commentary;
use minijinja::Environment;
use serde::Serialize;

pub const COMMENTARY_TEMPLATE: &str = include_str!("templates/commentary.md.tmp");

/// Placed between (and after) commentaries.
pub const SEPARATOR: &str = "\n\n ---";

pub const NO_RESULTS: &str = "# No results found!";

#[derive(Serialize)]
struct CommentaryView<'a> {
    year: String,
    author: String,
    wiki_url: Option<&'a str>,
    book: &'a str,
    verse_range: String,
    text: &'a str,
    source_title: &'a str,
}

impl<'a> From<&'a Commentary> for CommentaryView<'a> {
    fn from(c: &'a Commentary) -> Self {
        Self {
            year: c.year_label(),
            author: c.author_display(),
            wiki_url: c.wiki_url.as_deref(),
            book: c.book_display(),
            verse_range: c.verse_range(),
            text: &c.text,
            source_title: c.source_title.trim(),
        }
    }
}

/// Renders one commentary section, without the trailing separator.
pub fn commentary_to_markdown(commentary: &Commentary) -> Result<String> {
    let env = environment()?;
    render_one(&env, commentary)
}

/// Renders all commentaries, or [`NO_RESULTS`] when there are none.
pub fn commentaries_to_markdown(commentaries: &[Commentary]) -> Result<String> {
    if commentaries.is_empty() {
        return Ok(NO_RESULTS.to_string());
    }

    let env = environment()?;
    let mut sections = Vec::with_capacity(commentaries.len() * 2);
    for commentary in commentaries {
        sections.push(render_one(&env, commentary)?);
        sections.push(SEPARATOR.to_string());
    }
    Ok(sections.join("\n"))
}

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template("commentary.md", COMMENTARY_TEMPLATE)?;
    Ok(env)
}

fn render_one(env: &Environment<'static>, commentary: &Commentary) -> Result<String> {
    let template = env.get_template("commentary.md")?;
    Ok(template.render(CommentaryView::from(commentary))?)
}
