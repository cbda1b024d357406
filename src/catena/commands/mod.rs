use crate::config::CatenaConfig;
use crate::model::Commentary;
use crate::reference::books::BookEntry;
use crate::reference::ParsedReference;

pub mod books;
pub mod config;
pub mod lookup;
pub mod parse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub reference: Option<ParsedReference>,
    pub commentaries: Vec<Commentary>,
    pub books: Vec<BookEntry>,
    pub config: Option<CatenaConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_reference(mut self, reference: ParsedReference) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_commentaries(mut self, commentaries: Vec<Commentary>) -> Self {
        self.commentaries = commentaries;
        self
    }

    pub fn with_books(mut self, books: Vec<BookEntry>) -> Self {
        self.books = books;
        self
    }

    pub fn with_config(mut self, config: CatenaConfig) -> Self {
        self.config = Some(config);
        self
    }
}
