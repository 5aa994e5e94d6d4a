use std::{collections::HashMap, path::Path};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use mail_parser::{Address, Message, MessageParser, MessagePart, MimeHeaders, PartType};
use tracing::debug;

use super::{AttachmentContent, BodyFormat, ContentFormat, Mailbox, MailboxError};
use crate::domain::{AttachmentDetails, EmailAddress, MailItem};

/// A mailbox holding a single RFC 822 message, fully decoded up front.
#[derive(Debug, Clone)]
pub struct EmlMailbox {
    item: MailItem,
    text: String,
    html: String,
    contents: HashMap<String, AttachmentContent>,
}

impl EmlMailbox {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, MailboxError> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path).await?;
        let mut mailbox = Self::from_bytes(&raw)?;
        mailbox.item.item_id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(
            target: "mailbox",
            path = %path.display(),
            attachments = mailbox.item.attachments.len(),
            "message loaded"
        );
        Ok(mailbox)
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self, MailboxError> {
        let message = MessageParser::default()
            .parse(raw)
            .ok_or(MailboxError::Unparseable)?;

        let mut attachments = Vec::new();
        let mut contents = HashMap::new();
        for (idx, part) in message.attachments().enumerate() {
            let id = format!("attachment-{}", idx + 1);
            attachments.push(attachment_details(&id, idx, part));
            contents.insert(id, attachment_content(part));
        }

        let item = MailItem {
            subject: message.subject().unwrap_or_default().to_string(),
            from: message
                .from()
                .and_then(|addr| addresses(addr).into_iter().next()),
            to: message.to().map(addresses).unwrap_or_default(),
            cc: message.cc().map(addresses).unwrap_or_default(),
            bcc: message.bcc().map(addresses).unwrap_or_default(),
            item_id: String::new(),
            internet_message_id: message
                .message_id()
                .map(|id| format!("<{id}>"))
                .unwrap_or_default(),
            date_time_created: message
                .date()
                .and_then(|date| DateTime::<Utc>::from_timestamp(date.to_timestamp(), 0)),
            attachments,
        };

        Ok(Self {
            item,
            text: text_body(&message),
            html: html_body(&message),
            contents,
        })
    }
}

#[async_trait]
impl Mailbox for EmlMailbox {
    fn item(&self) -> Option<&MailItem> {
        Some(&self.item)
    }

    async fn body(&self, format: BodyFormat) -> Result<String, MailboxError> {
        Ok(match format {
            BodyFormat::Text => self.text.clone(),
            BodyFormat::Html => self.html.clone(),
        })
    }

    async fn attachment_content(&self, id: &str) -> Result<AttachmentContent, MailboxError> {
        self.contents
            .get(id)
            .cloned()
            .ok_or_else(|| MailboxError::AttachmentNotFound(id.to_string()))
    }
}

// Only parts of the requested type count; mail-parser's body_text() would
// otherwise convert an HTML part to text on its own.
fn text_body(message: &Message<'_>) -> String {
    match message.text_part(0).map(|part| &part.body) {
        Some(PartType::Text(text)) => text.to_string(),
        _ => String::new(),
    }
}

fn html_body(message: &Message<'_>) -> String {
    match message.html_part(0).map(|part| &part.body) {
        Some(PartType::Html(html)) => html.to_string(),
        _ => String::new(),
    }
}

fn addresses(addr: &Address<'_>) -> Vec<EmailAddress> {
    addr.iter()
        .map(|a| {
            EmailAddress::new(
                a.name().unwrap_or_default(),
                a.address().unwrap_or_default(),
            )
        })
        .collect()
}

fn content_type(part: &MessagePart<'_>) -> String {
    part.content_type()
        .map(|ct| match ct.subtype() {
            Some(sub) => format!("{}/{}", ct.ctype(), sub),
            None => ct.ctype().to_string(),
        })
        .unwrap_or_else(|| "application/octet-stream".to_string())
}

fn attachment_details(id: &str, idx: usize, part: &MessagePart<'_>) -> AttachmentDetails {
    AttachmentDetails {
        id: id.to_string(),
        name: part
            .attachment_name()
            .map(String::from)
            .unwrap_or_else(|| format!("attachment_{}", idx + 1)),
        size: part.contents().len() as u64,
        content_type: content_type(part),
        is_inline: part
            .content_disposition()
            .is_some_and(|d| d.ctype().eq_ignore_ascii_case("inline")),
    }
}

fn attachment_content(part: &MessagePart<'_>) -> AttachmentContent {
    let bytes = part.contents();
    if matches!(part.body, PartType::Message(_)) {
        return AttachmentContent {
            format: ContentFormat::Eml,
            content: String::from_utf8_lossy(bytes).into_owned(),
        };
    }
    if content_type(part).eq_ignore_ascii_case("text/calendar") {
        return AttachmentContent {
            format: ContentFormat::ICalendar,
            content: String::from_utf8_lossy(bytes).into_owned(),
        };
    }
    AttachmentContent {
        format: ContentFormat::Base64,
        content: STANDARD.encode(bytes),
    }
}
