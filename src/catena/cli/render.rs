//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text. Two paths:
//!
//! - Commentary output is Markdown (built by the library's `markdown` module). For the terminal
//!   format it is parsed with `pulldown-cmark` and each span is styled by what it is: heading,
//!   author link, source tag, rule.
//! - Messages, book listings and parsed references go through minijinja templates with a `style`
//!   filter backed by [`CATENA_THEME`].
//!
//! Every function takes `use_color` explicitly so tests can render plain text.

use super::styles::{names, CATENA_THEME};
use super::templates::{BOOKS_TEMPLATE, MESSAGES_TEMPLATE, REFERENCE_TEMPLATE};
use catena::api::{CmdMessage, MessageLevel};
use catena::error::Result;
use catena::reference::books::BookEntry;
use catena::reference::ParsedReference;
use minijinja::{Environment, Value};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use serde::Serialize;

const RULE_WIDTH: usize = 40;

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct BookLine {
    name: String,
    aliases: String,
}

#[derive(Serialize)]
struct BooksData {
    books: Vec<BookLine>,
}

#[derive(Serialize)]
struct ReferenceData {
    label: String,
    book: String,
    start: u64,
    end: u64,
}

/// Renders an inline template with the `style` filter registered.
fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> Result<String> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        CATENA_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("_inline", template)?;
    let output = env.get_template("_inline")?.render(data)?;
    Ok(output)
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> Result<String> {
    if messages.is_empty() {
        return Ok(String::new());
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color)
}

/// One book per line, names padded into a column, aliases after.
pub fn render_books(books: &[BookEntry], use_color: bool) -> Result<String> {
    let width = books.iter().map(|b| b.name.chars().count()).max().unwrap_or(0);

    let data = BooksData {
        books: books
            .iter()
            .map(|book| BookLine {
                name: if book.aliases.is_empty() {
                    book.name.to_string()
                } else {
                    format!("{:<width$}", book.name)
                },
                aliases: book.aliases.join(", "),
            })
            .collect(),
    };
    render_template(BOOKS_TEMPLATE, &data, use_color)
}

pub fn render_reference(parsed: &ParsedReference, use_color: bool) -> Result<String> {
    let data = ReferenceData {
        label: parsed.label(),
        book: parsed.book.clone(),
        start: parsed.start.get(),
        end: parsed.end.get(),
    };
    render_template(REFERENCE_TEMPLATE, &data, use_color)
}

/// Renders Markdown for the terminal.
///
/// Only the constructs commentary output uses get dedicated styling; anything else falls back
/// to its plain text. Lists keep their bullets and numbers, block quotes get a bar in front.
pub fn render_markdown(markdown: &str, use_color: bool) -> String {
    let mut out = String::new();
    let mut styles: Vec<&'static str> = vec![names::REGULAR];
    // One entry per open list: the next item number, or None for bullets.
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut quote_depth = 0usize;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { .. }) => styles.push(names::HEADING),
            Event::End(TagEnd::Heading(_)) => {
                styles.pop();
                out.push_str("\n\n");
            }
            Event::Start(Tag::Link { .. }) => styles.push(names::AUTHOR),
            Event::Start(Tag::Emphasis) => styles.push(names::EMPHASIS),
            Event::Start(Tag::Strong) => styles.push(names::STRONG),
            Event::End(TagEnd::Link) | Event::End(TagEnd::Emphasis) | Event::End(TagEnd::Strong) => {
                styles.pop();
            }
            Event::Start(Tag::Paragraph) => push_quote_bar(&mut out, quote_depth, use_color),
            Event::End(TagEnd::Paragraph) => out.push_str("\n\n"),
            Event::Start(Tag::List(first)) => {
                end_line(&mut out);
                lists.push(first);
            }
            Event::End(TagEnd::List(_)) => {
                lists.pop();
                if lists.is_empty() {
                    end_line(&mut out);
                    out.push('\n');
                }
            }
            Event::Start(Tag::Item) => {
                end_line(&mut out);
                let indent = "  ".repeat(lists.len().saturating_sub(1));
                let marker = match lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}.");
                        *n += 1;
                        marker
                    }
                    _ => "•".to_string(),
                };
                out.push_str(&indent);
                out.push_str(&CATENA_THEME.apply(names::MUTED, &marker, use_color));
                out.push(' ');
            }
            Event::End(TagEnd::Item) => end_line(&mut out),
            Event::Start(Tag::BlockQuote(_)) => {
                end_line(&mut out);
                quote_depth += 1;
            }
            Event::End(TagEnd::BlockQuote(_)) => {
                quote_depth = quote_depth.saturating_sub(1);
                if !out.ends_with("\n\n") {
                    end_line(&mut out);
                    out.push('\n');
                }
            }
            Event::Text(text) => {
                let style = styles.last().copied().unwrap_or(names::REGULAR);
                out.push_str(&CATENA_THEME.apply(style, &text, use_color));
            }
            Event::Code(code) => out.push_str(&CATENA_THEME.apply(names::SOURCE, &code, use_color)),
            Event::SoftBreak | Event::HardBreak => {
                out.push('\n');
                push_quote_bar(&mut out, quote_depth, use_color);
            }
            Event::Rule => {
                out.push_str(&CATENA_THEME.apply(names::RULE, &"─".repeat(RULE_WIDTH), use_color));
                out.push_str("\n\n");
            }
            _ => {}
        }
    }

    out
}

/// Starts a new line unless the output is empty or already at one.
fn end_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn push_quote_bar(out: &mut String, depth: usize, use_color: bool) {
    if depth > 0 {
        out.push_str(&CATENA_THEME.apply(names::RULE, &"│ ".repeat(depth), use_color));
    }
}
