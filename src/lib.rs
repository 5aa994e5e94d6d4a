pub mod analysis;
pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod domain;
pub mod infrastructure;
pub mod mailbox;
pub mod panel;
pub mod verdict;

pub use content::normalize;
pub use domain::{AnalysisResult, EmailBody, NormalizedContent, RiskCategory, Verdict};
pub use verdict::classify;
