use futures::future::join_all;
use tracing::warn;

use crate::{
    domain::{AttachmentDetails, AttachmentRecord},
    mailbox::Mailbox,
};

/// Fetches every attachment concurrently. A failed or oversized attachment
/// becomes an error record; the others are unaffected.
pub async fn collect_attachments<M>(
    mailbox: &M,
    details: &[AttachmentDetails],
    max_bytes: u64,
) -> Vec<AttachmentRecord>
where
    M: Mailbox + ?Sized,
{
    join_all(details.iter().map(|d| fetch_one(mailbox, d, max_bytes))).await
}

async fn fetch_one<M>(mailbox: &M, details: &AttachmentDetails, max_bytes: u64) -> AttachmentRecord
where
    M: Mailbox + ?Sized,
{
    if details.size > max_bytes {
        warn!(
            target: "mailbox",
            id = %details.id,
            size = details.size,
            max_bytes,
            "attachment skipped: too large"
        );
        return AttachmentRecord::failed(
            details,
            format!("attachment exceeds the {max_bytes} byte limit"),
        );
    }

    match mailbox.attachment_content(&details.id).await {
        Ok(content) => AttachmentRecord::fetched(details, content.content, content.format.as_str()),
        Err(err) => {
            warn!(target: "mailbox", id = %details.id, error = %err, "attachment fetch failed");
            AttachmentRecord::failed(details, err.to_string())
        }
    }
}
