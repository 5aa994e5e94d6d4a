use tracing::{info, warn};

use super::{
    attachments::collect_attachments, client::AnalysisClient, payload::build_payload,
    AnalysisError,
};
use crate::{
    config::AnalysisConfig,
    content::normalize,
    domain::{AttachmentRecord, EmailBody, Verdict},
    mailbox::{BodyFormat, Mailbox},
    panel::Panel,
    verdict::{classify_result, AnalysisResponse},
};

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub response: AnalysisResponse,
    pub verdict: Verdict,
    pub links: usize,
    pub attachments: usize,
}

/// One user-triggered analysis of the mailbox's current item.
pub struct AnalysisSession<M> {
    mailbox: M,
    client: AnalysisClient,
    config: AnalysisConfig,
    idle_label: String,
}

impl<M: Mailbox> AnalysisSession<M> {
    pub fn new(
        mailbox: M,
        client: AnalysisClient,
        config: AnalysisConfig,
        idle_label: impl Into<String>,
    ) -> Self {
        Self {
            mailbox,
            client,
            config,
            idle_label: idle_label.into(),
        }
    }

    pub fn mailbox(&self) -> &M {
        &self.mailbox
    }

    /// Runs the analysis and mirrors every step onto `panel`.
    pub async fn analyze(&self, panel: &mut Panel) -> Result<AnalysisReport, AnalysisError> {
        match self.run(panel).await {
            Ok(report) => {
                panel.show_report(&report);
                Ok(report)
            }
            Err(err) => {
                warn!(target: "analysis", error = %err, "analysis failed");
                panel.show_error(&err);
                Err(err)
            }
        }
    }

    async fn run(&self, panel: &mut Panel) -> Result<AnalysisReport, AnalysisError> {
        let api_url = self.config.api_url.trim();
        if api_url.is_empty() {
            return Err(AnalysisError::MissingApiUrl);
        }
        let item = self.mailbox.item().ok_or(AnalysisError::NoItem)?;

        panel.set_status("Collecting email content...", false);
        panel.reset();

        let body = self.read_body().await?;
        let normalized = normalize(&body);

        let attachments = if self.config.include_attachments {
            collect_attachments(
                &self.mailbox,
                &item.attachments,
                self.config.attachment_max_bytes,
            )
            .await
        } else {
            item.attachments
                .iter()
                .map(AttachmentRecord::without_content)
                .collect()
        };

        let payload = build_payload(item, &body, &normalized, attachments);

        panel.set_status("Sending for analysis...", false);
        let response = self.client.submit(api_url, &payload).await?;

        let verdict = match response.result() {
            Some(result) => classify_result(result, &self.idle_label),
            None => Verdict::idle(self.idle_label.clone()),
        };
        info!(
            target: "analysis",
            category = %verdict.category,
            label = %verdict.display_label,
            score = ?verdict.display_score,
            "analysis complete"
        );

        Ok(AnalysisReport {
            response,
            verdict,
            links: payload.links.len(),
            attachments: payload.attachments.len(),
        })
    }

    /// Reads both coercions concurrently. One failing is tolerated; both
    /// failing stops the analysis.
    async fn read_body(&self) -> Result<EmailBody, AnalysisError> {
        let (text, html) = futures::join!(
            self.mailbox.body(BodyFormat::Text),
            self.mailbox.body(BodyFormat::Html)
        );

        match (text, html) {
            (Err(err), Err(_)) => Err(AnalysisError::Body(err)),
            (text, html) => {
                let text = text.unwrap_or_else(|err| {
                    warn!(target: "mailbox", error = %err, "text body unavailable");
                    String::new()
                });
                let html = html.unwrap_or_else(|err| {
                    warn!(target: "mailbox", error = %err, "html body unavailable");
                    String::new()
                });
                Ok(EmailBody::new(text, html))
            }
        }
    }
}
