//! Styles for the catena CLI.
//!
//! Templates and the Markdown walker refer to styles by semantic name only (`author`, `year`,
//! `source`...). The names resolve to `console` styles through [`CATENA_THEME`], so the look can
//! change without touching a template.
//!
//! A name with no registered style renders with a `(!?)` marker in front of the text, which makes
//! typos in templates visible instead of silently unstyled.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    // Commentary output
    pub const HEADING: &str = "heading";
    pub const AUTHOR: &str = "author";
    pub const SOURCE: &str = "source";
    pub const EMPHASIS: &str = "emphasis";
    pub const STRONG: &str = "strong";
    pub const RULE: &str = "rule";
    // Listings
    pub const BOOK_NAME: &str = "book-name";
    pub const LABEL: &str = "label";
}

const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A named collection of styles.
#[derive(Clone)]
pub struct Theme {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: MISSING_STYLE_INDICATOR.to_string(),
        }
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style, or returns the text untouched (apart from the missing marker)
    /// when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None if self.missing_indicator.is_empty() => text.to_string(),
            None => format!("{} {}", self.missing_indicator, text),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub static CATENA_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let regular = Style::new();
    let muted = Style::new().color256(245);

    Theme::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::HEADING, Style::new().yellow().bold())
        .add(names::AUTHOR, Style::new().cyan().bold().underlined())
        .add(names::SOURCE, muted.clone().italic())
        .add(names::EMPHASIS, regular.clone().italic())
        .add(names::STRONG, regular.bold())
        .add(names::RULE, muted.clone())
        .add(names::BOOK_NAME, Style::new().yellow())
        .add(names::LABEL, muted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_keeps_text() {
        assert_eq!(CATENA_THEME.apply(names::AUTHOR, "Origen", false), "Origen");
    }

    #[test]
    fn color_mode_emits_ansi() {
        let styled = CATENA_THEME.apply(names::ERROR, "boom", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("boom"));
    }

    #[test]
    fn unknown_names_are_flagged() {
        assert_eq!(CATENA_THEME.apply("autor", "Origen", false), "(!?) Origen");
        assert_eq!(CATENA_THEME.apply("autor", "Origen", true), "(!?) Origen");
    }
}
