mod attachments;
mod client;
mod payload;
mod session;
#[cfg(test)]
pub(crate) mod test_server;

use thiserror::Error;

use crate::mailbox::MailboxError;

pub use attachments::collect_attachments;
pub use client::AnalysisClient;
pub use payload::{build_payload, AnalysisPayload};
pub use session::{AnalysisReport, AnalysisSession};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no analysis API URL configured")]
    MissingApiUrl,
    #[error("no email is selected")]
    NoItem,
    #[error("could not read email body: {0}")]
    Body(#[source] MailboxError),
    #[error("analysis API returned status {status}")]
    Api { status: u16, body: String },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl AnalysisError {
    /// The line shown in the panel's status area.
    pub fn status_message(&self) -> String {
        match self {
            AnalysisError::MissingApiUrl => "Add the API URL in preferences first.".to_string(),
            AnalysisError::NoItem => "No email is selected.".to_string(),
            AnalysisError::Body(_) => "Could not read email body.".to_string(),
            AnalysisError::Api { status, .. } => format!("API error ({status})."),
            AnalysisError::Network(_) => "Network error sending to API.".to_string(),
        }
    }

    /// Text shown in the result area, if the failure carries any.
    pub fn result_text(&self) -> Option<String> {
        match self {
            AnalysisError::Api { body, .. } => Some(body.clone()),
            AnalysisError::Network(err) => Some(err.to_string()),
            _ => None,
        }
    }
}
