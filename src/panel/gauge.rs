use crate::domain::{RiskCategory, Verdict};

const CELLS: usize = 20;

/// Renders `[#########-----------]  45/100  warning`.
pub fn render_gauge(verdict: &Verdict) -> String {
    let (filled, score) = match verdict.display_score {
        Some(score) => {
            let filled = ((score / 100.0) * CELLS as f64).round() as usize;
            (filled.min(CELLS), format!("{:>3.0}", score))
        }
        None => (0, " --".to_string()),
    };
    let empty = if verdict.category == RiskCategory::Idle { '.' } else { '-' };

    format!(
        "[{}{}] {}/100  {}",
        "#".repeat(filled),
        empty.to_string().repeat(CELLS - filled),
        score,
        verdict.category
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_in_proportion_to_score() {
        let verdict = Verdict {
            category: RiskCategory::Warning,
            display_label: "Suspicious".into(),
            display_score: Some(45.0),
        };
        assert_eq!(render_gauge(&verdict), "[#########-----------]  45/100  warning");
    }

    #[test]
    fn idle_gauge_is_empty() {
        assert_eq!(
            render_gauge(&Verdict::idle("Awaiting analysis")),
            "[....................]  --/100  idle"
        );
    }

    #[test]
    fn full_score_fills_every_cell() {
        let verdict = Verdict {
            category: RiskCategory::Danger,
            display_label: "Phishing".into(),
            display_score: Some(100.0),
        };
        assert_eq!(render_gauge(&verdict), format!("[{}] 100/100  danger", "#".repeat(20)));
    }
}
