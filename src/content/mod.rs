mod links;
mod normalizer;

pub use links::{dedup_preserving_order, extract_text_urls};
pub use normalizer::normalize;
