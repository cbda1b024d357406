//! Output templates, kept as standalone `.tmp` files and included here as string constants.
//!
//! Templates are minijinja and style their values with the `style` filter, e.g.
//! `{{ name | style("book-name") }}`. Layout math (column widths) is done in Rust before
//! rendering; templates only decide what goes where and which style applies.
//!
//! Line breaks are explicit: each loop body ends with its own newline, and the trailing newline
//! of the file itself is dropped by minijinja.

pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const BOOKS_TEMPLATE: &str = include_str!("templates/books.tmp");
pub const REFERENCE_TEMPLATE: &str = include_str!("templates/reference.tmp");
