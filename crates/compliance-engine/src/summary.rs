use shared_types::{ComplianceResult, ComplianceSummary, RiskLevel};

/// Reduce per-claim results to project-level statistics.
///
/// The average is rounded to the nearest integer; an empty input averages to 0.
pub fn summarize(results: &[ComplianceResult]) -> ComplianceSummary {
    let mut summary = ComplianceSummary {
        total_claims: results.len(),
        ..ComplianceSummary::default()
    };
    let mut score_total: u64 = 0;

    for result in results {
        match result.risk_level {
            RiskLevel::High => summary.high_risk += 1,
            RiskLevel::Medium => summary.medium_risk += 1,
            RiskLevel::Low => summary.low_risk += 1,
            RiskLevel::Compliant => summary.compliant += 1,
        }
        score_total += u64::from(result.compliance_score);
        summary.total_issues += result.issues.len();
        summary.critical_issues += result.error_count();
    }

    let denominator = results.len().max(1) as f64;
    summary.average_compliance_score = (score_total as f64 / denominator).round() as u8;

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{ComplianceIssue, IssueKind};

    fn result(level: RiskLevel, score: u8, kinds: &[IssueKind]) -> ComplianceResult {
        ComplianceResult {
            claim_id: "c".to_string(),
            claim_text: String::new(),
            issues: kinds
                .iter()
                .map(|&kind| ComplianceIssue {
                    kind,
                    category: "Test".to_string(),
                    message: String::new(),
                    matched_text: String::new(),
                    suggestion: None,
                })
                .collect(),
            risk_level: level,
            compliance_score: score,
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(summarize(&[]), ComplianceSummary::default());
    }

    #[test]
    fn test_counts_and_totals() {
        let results = vec![
            result(
                RiskLevel::High,
                20,
                &[IssueKind::Error, IssueKind::Error, IssueKind::Info],
            ),
            result(RiskLevel::Medium, 55, &[IssueKind::Error, IssueKind::Warning]),
            result(RiskLevel::Low, 85, &[IssueKind::Warning]),
            result(RiskLevel::Compliant, 100, &[]),
        ];

        assert_eq!(
            summarize(&results),
            ComplianceSummary {
                total_claims: 4,
                high_risk: 1,
                medium_risk: 1,
                low_risk: 1,
                compliant: 1,
                average_compliance_score: 65,
                total_issues: 6,
                critical_issues: 3,
            }
        );
    }

    #[test]
    fn test_average_rounds_half_up() {
        // (85 + 100) / 2 = 92.5
        let results = vec![
            result(RiskLevel::Low, 85, &[IssueKind::Warning]),
            result(RiskLevel::Compliant, 100, &[]),
        ];
        assert_eq!(summarize(&results).average_compliance_score, 93);
    }
}
