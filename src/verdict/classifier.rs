use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{AnalysisResult, RiskCategory, Verdict};

const SUSPICIOUS_FROM: f64 = 35.0;
const PHISHING_FROM: f64 = 70.0;

static SAFE_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)safe").expect("valid safe regex"));
static WARNING_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)suspicious|warning").expect("valid warning regex"));

/// One row of the category table: a label pattern OR'd with a score ceiling.
struct Tier {
    category: RiskCategory,
    label: &'static Lazy<Regex>,
    score_below: f64,
}

impl Tier {
    fn matches(&self, label: &str, score: Option<f64>) -> bool {
        self.label.is_match(label) || score.is_some_and(|s| s < self.score_below)
    }
}

/// Rows are checked top to bottom. Anything that falls through is Danger.
static TIERS: [Tier; 2] = [
    Tier {
        category: RiskCategory::Safe,
        label: &SAFE_LABEL,
        score_below: SUSPICIOUS_FROM,
    },
    Tier {
        category: RiskCategory::Warning,
        label: &WARNING_LABEL,
        score_below: PHISHING_FROM,
    },
];

/// Maps a score and/or verdict label to the displayed risk indicator.
///
/// A non-empty label is displayed as given; without one the label comes from
/// the score thresholds. With neither signal the verdict is Idle and shows
/// `idle_label`. This never fails: a non-finite score counts as absent.
pub fn classify(score: Option<f64>, label: Option<&str>, idle_label: &str) -> Verdict {
    let score = score.and_then(clamp_score);
    let label = label.filter(|l| !l.is_empty());

    let display_label = match (label, score) {
        (Some(label), _) => label.to_string(),
        (None, Some(score)) => threshold_label(score).to_string(),
        (None, None) => return Verdict::idle(idle_label),
    };

    let category = TIERS
        .iter()
        .find(|tier| tier.matches(&display_label, score))
        .map(|tier| tier.category)
        .unwrap_or(RiskCategory::Danger);

    Verdict {
        category,
        display_label,
        display_score: score,
    }
}

pub fn classify_result(result: &AnalysisResult, idle_label: &str) -> Verdict {
    classify(result.score, result.verdict_label.as_deref(), idle_label)
}

/// Clamps into `[0, 100]`; `None` for NaN and infinities.
pub fn clamp_score(score: f64) -> Option<f64> {
    score.is_finite().then(|| score.clamp(0.0, 100.0))
}

pub fn threshold_label(score: f64) -> &'static str {
    if score < SUSPICIOUS_FROM {
        "Safe"
    } else if score < PHISHING_FROM {
        "Suspicious"
    } else {
        "Phishing"
    }
}
