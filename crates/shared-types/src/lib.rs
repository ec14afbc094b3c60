pub mod types;

pub use types::{
    Claim, ComplianceIssue, ComplianceResult, ComplianceSummary, IssueKind, ProjectReport,
    RiskLevel,
};
