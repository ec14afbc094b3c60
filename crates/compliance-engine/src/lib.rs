//! Rule-based compliance review for pharmaceutical promotional claims
//!
//! A claim is checked against an ordered table of regulatory-risk rules
//! (see [`rules`]). Every distinct match becomes a [`ComplianceIssue`], and
//! the counts of error- and warning-kind issues decide the risk tier and the
//! 0-100 score. Evaluation is pure and never fails.

pub mod patterns;
pub mod rules;
pub mod scoring;
pub mod summary;

use shared_types::{Claim, ComplianceIssue, ComplianceResult, IssueKind, ProjectReport};
use tracing::{debug, info};

pub use rules::{rules, suggestion_for, Rule, RuleInfo};
pub use summary::summarize;

/// Evaluate one claim against every rule.
///
/// Issues appear in rule order, then in order of first occurrence within
/// each pattern. A substring matched twice by the same pattern yields one
/// issue; matches from different patterns are kept even if identical.
pub fn evaluate_claim(claim_text: &str, claim_id: &str) -> ComplianceResult {
    let mut issues = Vec::new();

    for rule in rules() {
        for pattern in &rule.patterns {
            for matched in patterns::unique_matches(pattern.regex, pattern.guard, claim_text) {
                issues.push(ComplianceIssue {
                    kind: rule.kind,
                    category: rule.category.to_string(),
                    message: rule.message.to_string(),
                    matched_text: matched.to_string(),
                    suggestion: rule.suggestion().map(str::to_string),
                });
            }
        }
    }

    let errors = issues.iter().filter(|i| i.kind == IssueKind::Error).count();
    let warnings = issues.iter().filter(|i| i.kind == IssueKind::Warning).count();
    let (risk_level, compliance_score) = scoring::assess(errors, warnings, issues.is_empty());

    debug!(
        claim_id,
        issues = issues.len(),
        errors,
        warnings,
        risk = risk_level.as_str(),
        score = compliance_score,
        "evaluated claim"
    );

    ComplianceResult {
        claim_id: claim_id.to_string(),
        claim_text: claim_text.to_string(),
        issues,
        risk_level,
        compliance_score,
    }
}

/// ComplianceEngine entry point
pub struct ComplianceEngine;

impl ComplianceEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate_claim(&self, claim: &Claim) -> ComplianceResult {
        evaluate_claim(&claim.text, &claim.id)
    }

    /// Evaluate a project's claims in order and aggregate the results
    pub fn evaluate_claims(&self, claims: &[Claim]) -> ProjectReport {
        let results: Vec<_> = claims.iter().map(|c| self.evaluate_claim(c)).collect();
        let summary = summarize(&results);

        info!(
            "Evaluated {} claims: {} high, {} medium, {} low, {} compliant (avg score {})",
            summary.total_claims,
            summary.high_risk,
            summary.medium_risk,
            summary.low_risk,
            summary.compliant,
            summary.average_compliance_score
        );

        ProjectReport { results, summary }
    }

    /// Check raw text without an identifier (for testing)
    pub fn check_text(&self, text: &str) -> Vec<ComplianceIssue> {
        evaluate_claim(text, "").issues
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
