use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmailAddress {
    pub name: String,
    pub address: String,
}

impl EmailAddress {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Attachment metadata as exposed by the mailbox, before any content is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentDetails {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub content_type: String,
    pub is_inline: bool,
}

/// The currently open email.
#[derive(Debug, Clone, Default)]
pub struct MailItem {
    pub subject: String,
    pub from: Option<EmailAddress>,
    pub to: Vec<EmailAddress>,
    pub cc: Vec<EmailAddress>,
    pub bcc: Vec<EmailAddress>,
    pub item_id: String,
    pub internet_message_id: String,
    pub date_time_created: Option<DateTime<Utc>>,
    pub attachments: Vec<AttachmentDetails>,
}

/// One attachment as sent to the analysis endpoint. `content` is `None` and
/// `error` is set when retrieval of this attachment failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRecord {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub content_type: String,
    pub is_inline: bool,
    pub content: Option<String>,
    pub content_format: Option<String>,
    pub error: Option<String>,
}

impl AttachmentRecord {
    pub fn fetched(details: &AttachmentDetails, content: String, format: &str) -> Self {
        Self {
            content: Some(content),
            content_format: Some(format.to_string()),
            error: None,
            ..Self::without_content(details)
        }
    }

    pub fn failed(details: &AttachmentDetails, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::without_content(details)
        }
    }

    /// Metadata only: no content and no error.
    pub fn without_content(details: &AttachmentDetails) -> Self {
        Self {
            id: details.id.clone(),
            name: details.name.clone(),
            size: details.size,
            content_type: details.content_type.clone(),
            is_inline: details.is_inline,
            content: None,
            content_format: None,
            error: None,
        }
    }
}
