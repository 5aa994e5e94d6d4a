use std::fmt;

use serde::Serialize;

/// Plaintext and HTML renditions of an email body. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailBody {
    pub html: Option<String>,
    pub text: Option<String>,
}

impl EmailBody {
    pub fn new(text: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            text: non_empty(text.into()),
            html: non_empty(html.into()),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn html(&self) -> &str {
        self.html.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedContent {
    pub text: String,
    pub links: Vec<String>,
}

/// Numeric and textual signals pulled out of an analysis response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    pub score: Option<f64>,
    pub verdict_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Idle,
    Safe,
    Warning,
    Danger,
}

impl RiskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Idle => "idle",
            RiskCategory::Safe => "safe",
            RiskCategory::Warning => "warning",
            RiskCategory::Danger => "danger",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub category: RiskCategory,
    pub display_label: String,
    pub display_score: Option<f64>,
}

impl Verdict {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            category: RiskCategory::Idle,
            display_label: label.into(),
            display_score: None,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
