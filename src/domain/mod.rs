pub mod message;
pub mod types;

pub use message::{AttachmentDetails, AttachmentRecord, EmailAddress, MailItem};
pub use types::{AnalysisResult, EmailBody, NormalizedContent, RiskCategory, Verdict};
