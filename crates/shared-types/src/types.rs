use serde::{Deserialize, Serialize};

/// A claim submitted for review, as persisted by the project workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    pub text: String,
}

impl Claim {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Severity tier of a single flagged match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Info,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Error => "error",
            IssueKind::Warning => "warning",
            IssueKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceIssue {
    pub kind: IssueKind,
    pub category: String,
    pub message: String,
    pub matched_text: String, // Exact substring that triggered the rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Coarse risk classification of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Compliant,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::Compliant => "compliant",
        }
    }
}

/// Evaluation of one claim. `risk_level` and `compliance_score` are derived
/// from `issues` by the engine and never set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub claim_id: String,
    pub claim_text: String,
    pub issues: Vec<ComplianceIssue>,
    pub risk_level: RiskLevel,
    pub compliance_score: u8, // 0..=100, lower is worse
}

impl ComplianceResult {
    pub fn error_count(&self) -> usize {
        self.count_kind(IssueKind::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_kind(IssueKind::Warning)
    }

    fn count_kind(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSummary {
    pub total_claims: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    pub compliant: usize,
    pub average_compliance_score: u8,
    pub total_issues: usize,
    pub critical_issues: usize, // Error-kind issues across all claims
}

/// Per-claim results for a project together with their aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReport {
    pub results: Vec<ComplianceResult>,
    pub summary: ComplianceSummary,
}
