use serde::Serialize;

use crate::domain::{AttachmentRecord, EmailAddress, EmailBody, MailItem, NormalizedContent};

/// JSON document POSTed to the analysis endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub subject: String,
    pub from: Option<EmailAddress>,
    pub to: Vec<EmailAddress>,
    pub cc: Vec<EmailAddress>,
    pub bcc: Vec<EmailAddress>,
    pub item_id: String,
    pub internet_message_id: String,
    pub body_text: String,
    pub body_html: String,
    pub links: Vec<String>,
    pub attachments: Vec<AttachmentRecord>,
    pub received_date_time: String,
}

pub fn build_payload(
    item: &MailItem,
    body: &EmailBody,
    normalized: &NormalizedContent,
    attachments: Vec<AttachmentRecord>,
) -> AnalysisPayload {
    AnalysisPayload {
        subject: item.subject.clone(),
        from: item.from.clone(),
        to: item.to.clone(),
        cc: item.cc.clone(),
        bcc: item.bcc.clone(),
        item_id: item.item_id.clone(),
        internet_message_id: item.internet_message_id.clone(),
        body_text: normalized.text.clone(),
        body_html: body.html().to_string(),
        links: normalized.links.clone(),
        attachments,
        received_date_time: item
            .date_time_created
            .map(|created| created.to_rfc3339())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::domain::AttachmentDetails;

    #[test]
    fn serializes_with_camel_case_keys() {
        let item = MailItem {
            subject: "Reset your password".into(),
            from: None,
            to: vec![EmailAddress::new("Alice", "alice@corp.test")],
            item_id: "item-1".into(),
            internet_message_id: "<m1@corp.test>".into(),
            date_time_created: Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).single(),
            ..Default::default()
        };
        let details = AttachmentDetails {
            id: "attachment-1".into(),
            name: "a.zip".into(),
            size: 3,
            content_type: "application/zip".into(),
            is_inline: false,
        };
        let body = EmailBody::new("", "<a href='https://r.test'>reset</a>");
        let normalized = NormalizedContent {
            text: "reset".into(),
            links: vec!["https://r.test".into()],
        };

        let payload = build_payload(
            &item,
            &body,
            &normalized,
            vec![AttachmentRecord::failed(&details, "denied")],
        );
        let value = serde_json::to_value(&payload).expect("serialize payload");

        assert_eq!(value["from"], json!(null));
        assert_eq!(value["to"], json!([{ "name": "Alice", "address": "alice@corp.test" }]));
        assert_eq!(value["itemId"], "item-1");
        assert_eq!(value["internetMessageId"], "<m1@corp.test>");
        assert_eq!(value["bodyText"], "reset");
        assert_eq!(value["bodyHtml"], "<a href='https://r.test'>reset</a>");
        assert_eq!(value["links"], json!(["https://r.test"]));
        assert_eq!(value["receivedDateTime"], "2024-05-02T08:30:00+00:00");
        assert_eq!(
            value["attachments"][0],
            json!({
                "id": "attachment-1",
                "name": "a.zip",
                "size": 3,
                "contentType": "application/zip",
                "isInline": false,
                "content": null,
                "contentFormat": null,
                "error": "denied",
            })
        );
    }

    #[test]
    fn missing_timestamp_is_empty_string() {
        let payload = build_payload(
            &MailItem::default(),
            &EmailBody::default(),
            &NormalizedContent::default(),
            Vec::new(),
        );
        assert_eq!(payload.received_date_time, "");
    }
}
