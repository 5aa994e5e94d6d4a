use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use super::{payload::AnalysisPayload, AnalysisError};
use crate::verdict::AnalysisResponse;

#[derive(Clone)]
pub struct AnalysisClient {
    http: Client,
    timeout: Duration,
}

impl AnalysisClient {
    pub fn new(http: Client, timeout: Duration) -> Self {
        Self { http, timeout }
    }

    /// POSTs the payload and reads the reply as text. Non-success statuses
    /// keep the body so it can be shown to the user.
    pub async fn submit(
        &self,
        api_url: &str,
        payload: &AnalysisPayload,
    ) -> Result<AnalysisResponse, AnalysisError> {
        debug!(
            target: "analysis",
            url = api_url,
            links = payload.links.len(),
            attachments = payload.attachments.len(),
            "posting analysis payload"
        );

        let response = self
            .http
            .post(api_url)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        info!(target: "analysis", status = status.as_u16(), bytes = body.len(), "analysis received");
        Ok(AnalysisResponse::from_body(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{build_payload, test_server};
    use crate::domain::{EmailBody, MailItem, NormalizedContent};

    fn client() -> AnalysisClient {
        AnalysisClient::new(Client::new(), Duration::from_secs(5))
    }

    fn payload() -> AnalysisPayload {
        build_payload(
            &MailItem {
                subject: "hello".into(),
                ..Default::default()
            },
            &EmailBody::default(),
            &NormalizedContent::default(),
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn posts_json_and_parses_reply() {
        let (url, server) =
            test_server::serve_once(200, r#"{"verdict":"Phishing","score":91}"#).await;

        let response = client().submit(&url, &payload()).await.expect("submit");
        let result = response.result().cloned().unwrap_or_default();
        assert_eq!(result.verdict_label.as_deref(), Some("Phishing"));

        let sent: serde_json::Value =
            serde_json::from_str(&server.await.expect("server task")).expect("json request");
        assert_eq!(sent["subject"], "hello");
        assert_eq!(sent["links"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn error_status_keeps_body() {
        let (url, _server) = test_server::serve_once(502, "upstream down").await;
        match client().submit(&url, &payload()).await {
            Err(AnalysisError::Api { status, body }) => {
                assert_eq!(status, 502);
                assert_eq!(body, "upstream down");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let url = test_server::closed_url().await;
        let err = client().submit(&url, &payload()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Network(_)));
        assert_eq!(err.status_message(), "Network error sending to API.");
    }
}
