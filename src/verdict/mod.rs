mod classifier;
mod response;

pub use classifier::{classify, classify_result, clamp_score, threshold_label};
pub use response::{coerce_score, extract_result, AnalysisResponse};
