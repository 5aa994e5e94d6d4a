mod gauge;

use std::fmt;

use crate::{
    analysis::{AnalysisError, AnalysisReport},
    domain::Verdict,
};

pub use gauge::render_gauge;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SentSummary {
    links: usize,
    attachments: usize,
}

/// Terminal rendition of the analysis side panel.
#[derive(Debug, Clone)]
pub struct Panel {
    status: StatusLine,
    result: String,
    verdict: Verdict,
    sent: Option<SentSummary>,
    idle_label: String,
}

impl Panel {
    pub fn new(idle_label: impl Into<String>) -> Self {
        let idle_label = idle_label.into();
        Self {
            status: StatusLine {
                message: "Ready.".to_string(),
                is_error: false,
            },
            result: String::new(),
            verdict: Verdict::idle(idle_label.clone()),
            sent: None,
            idle_label,
        }
    }

    /// Analysis needs both a selected item and a non-blank endpoint.
    pub fn analyze_enabled(has_item: bool, api_url: &str) -> bool {
        has_item && !api_url.trim().is_empty()
    }

    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status = StatusLine {
            message: message.into(),
            is_error,
        };
        tracing::debug!(target: "panel", status = %self.status.message, is_error, "status changed");
    }

    pub fn set_result(&mut self, value: impl Into<String>) {
        self.result = value.into();
    }

    /// Clears the previous run's output before a new analysis starts.
    pub fn reset(&mut self) {
        self.set_result("");
        self.verdict = Verdict::idle(self.idle_label.clone());
        self.sent = None;
    }

    pub fn show_report(&mut self, report: &AnalysisReport) {
        self.set_status("Analysis complete.", false);
        self.set_result(report.response.display_text());
        self.verdict = report.verdict.clone();
        self.sent = Some(SentSummary {
            links: report.links,
            attachments: report.attachments,
        });
    }

    pub fn show_error(&mut self, err: &AnalysisError) {
        self.set_status(err.status_message(), true);
        if let Some(text) = err.result_text() {
            self.set_result(text);
        }
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.status.is_error { "error" } else { "status" };
        writeln!(f, "{marker}: {}", self.status.message)?;
        writeln!(f)?;
        writeln!(f, "  Verdict : {}", self.verdict.display_label)?;
        writeln!(f, "  Risk    : {}", render_gauge(&self.verdict))?;
        if let Some(sent) = self.sent {
            writeln!(
                f,
                "  Sent    : {} link(s), {} attachment(s)",
                sent.links, sent.attachments
            )?;
        }
        if !self.result.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.result)?;
        }
        Ok(())
    }
}
