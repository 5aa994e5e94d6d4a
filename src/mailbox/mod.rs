//! Access to the email that is currently open.
//!
//! The analysis flow talks to the mail host only through [`Mailbox`]. Every
//! retrieval is its own request returning a result or an error, so one failed
//! attachment never poisons the others.

mod eml;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::MailItem;

pub use eml::EmlMailbox;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Text,
    Html,
}

impl fmt::Display for BodyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyFormat::Text => f.write_str("text"),
            BodyFormat::Html => f.write_str("html"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Base64,
    Eml,
    ICalendar,
}

impl ContentFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentFormat::Base64 => "base64",
            ContentFormat::Eml => "eml",
            ContentFormat::ICalendar => "iCalendar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentContent {
    pub format: ContentFormat,
    pub content: String,
}

#[derive(Debug, Error)]
pub enum MailboxError {
    #[error("failed to read {format} body: {reason}")]
    Body { format: BodyFormat, reason: String },
    #[error("attachment {0} not found")]
    AttachmentNotFound(String),
    #[error("failed to read attachment {id}: {reason}")]
    Attachment { id: String, reason: String },
    #[error("message could not be parsed")]
    Unparseable,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait Mailbox: Send + Sync {
    /// The selected item, if any.
    fn item(&self) -> Option<&MailItem>;

    async fn body(&self, format: BodyFormat) -> Result<String, MailboxError>;

    async fn attachment_content(&self, id: &str) -> Result<AttachmentContent, MailboxError>;
}
