use serde_json::Value;

use crate::domain::AnalysisResult;

const MODEL_CONFIDENCE: &[&str] = &[
    "/model_confidence",
    "/modelConfidence",
    "/model/confidence",
    "/confidence",
];
const RULES_SCORE: &[&str] = &[
    "/rules_score",
    "/rulesScore",
    "/rules/score",
    "/risk_score",
    "/riskScore",
    "/score",
];
const FINAL_VERDICT: &[&str] = &["/final_verdict", "/finalVerdict", "/verdict"];
const RULES_VERDICT: &[&str] = &["/rules_verdict", "/rulesVerdict", "/rules/verdict"];
const MODEL_VERDICT: &[&str] = &["/model_verdict", "/modelVerdict", "/model/verdict"];

/// Body returned by the analysis endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResponse {
    Json { pretty: String, result: AnalysisResult },
    Raw(String),
}

impl AnalysisResponse {
    /// JSON objects are pretty-printed and mined for signals; anything else is
    /// kept as raw diagnostic text.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value @ Value::Object(_)) => {
                let pretty =
                    serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string());
                let result = extract_result(&value);
                AnalysisResponse::Json { pretty, result }
            }
            _ => AnalysisResponse::Raw(body.to_string()),
        }
    }

    pub fn display_text(&self) -> &str {
        match self {
            AnalysisResponse::Json { pretty, .. } => pretty,
            AnalysisResponse::Raw(text) => text,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisResponse::Json { result, .. } => Some(result),
            AnalysisResponse::Raw(_) => None,
        }
    }
}

/// Picks the score and label out of a response object using the fixed
/// precedence chains: model confidence before rules score, and final verdict
/// before rules verdict before model verdict.
pub fn extract_result(value: &Value) -> AnalysisResult {
    let score = first_score(value, MODEL_CONFIDENCE).or_else(|| first_score(value, RULES_SCORE));
    let verdict_label = [FINAL_VERDICT, RULES_VERDICT, MODEL_VERDICT]
        .into_iter()
        .find_map(|chain| first_label(value, chain));

    AnalysisResult {
        score,
        verdict_label,
    }
}

/// Numbers and numeric strings are accepted. Everything else is treated as
/// absent, as are non-finite values.
pub fn coerce_score(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn first_score(value: &Value, pointers: &[&str]) -> Option<f64> {
    pointers
        .iter()
        .filter_map(|p| value.pointer(p))
        .find_map(coerce_score)
}

fn first_label(value: &Value, pointers: &[&str]) -> Option<String> {
    pointers
        .iter()
        .filter_map(|p| value.pointer(p))
        .filter_map(Value::as_str)
        .find(|label| !label.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn model_confidence_beats_rules_score() {
        let result = extract_result(&json!({ "rules_score": 80, "model_confidence": 12.5 }));
        assert_eq!(result.score, Some(12.5));

        let result = extract_result(&json!({ "rules": { "score": "64" } }));
        assert_eq!(result.score, Some(64.0));
    }

    #[test]
    fn unusable_model_confidence_falls_back_to_rules() {
        let result = extract_result(&json!({ "confidence": null, "score": 40 }));
        assert_eq!(result.score, Some(40.0));

        let result = extract_result(&json!({ "modelConfidence": "n/a", "riskScore": 71 }));
        assert_eq!(result.score, Some(71.0));
    }

    #[test]
    fn verdict_precedence_is_final_rules_model() {
        let value = json!({
            "model_verdict": "Safe",
            "rules_verdict": "Suspicious",
            "final_verdict": "Phishing",
        });
        assert_eq!(extract_result(&value).verdict_label.as_deref(), Some("Phishing"));

        let value = json!({ "final_verdict": "", "rules": { "verdict": "Suspicious" }, "model": { "verdict": "Safe" } });
        assert_eq!(extract_result(&value).verdict_label.as_deref(), Some("Suspicious"));

        let value = json!({ "modelVerdict": "Safe" });
        assert_eq!(extract_result(&value).verdict_label.as_deref(), Some("Safe"));
    }

    #[test]
    fn whitespace_final_verdict_still_wins() {
        let value = json!({ "final_verdict": " ", "rules_verdict": "Safe" });
        assert_eq!(extract_result(&value).verdict_label.as_deref(), Some(" "));
    }

    #[test]
    fn coercion_rejects_non_numbers() {
        assert_eq!(coerce_score(&json!(" 42 ")), Some(42.0));
        assert_eq!(coerce_score(&json!("")), None);
        assert_eq!(coerce_score(&json!(true)), None);
        assert_eq!(coerce_score(&json!("NaN")), None);
        assert_eq!(coerce_score(&json!("inf")), None);
        assert_eq!(coerce_score(&json!({ "value": 1 })), None);
    }

    #[test]
    fn non_object_bodies_are_raw() {
        assert_eq!(
            AnalysisResponse::from_body("queued"),
            AnalysisResponse::Raw("queued".to_string())
        );
        assert!(matches!(AnalysisResponse::from_body("[1, 2]"), AnalysisResponse::Raw(_)));
    }

    #[test]
    fn json_bodies_are_pretty_printed() {
        let response = AnalysisResponse::from_body(r#"{"verdict":"Phishing","score":91}"#);
        let result = response.result().cloned().unwrap_or_default();
        assert_eq!(result.score, Some(91.0));
        assert_eq!(result.verdict_label.as_deref(), Some("Phishing"));
        assert!(response.display_text().contains("\n  \"score\": 91"));
    }
}
