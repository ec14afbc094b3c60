//! Risk tier and score from issue counts
//!
//! | condition           | tier      | score                     |
//! |---------------------|-----------|---------------------------|
//! | errors >= 2         | high      | max(0, 40 - errors * 10)  |
//! | errors == 1         | medium    | 60 - warnings * 5         |
//! | warnings >= 2       | medium    | 75 - warnings * 5         |
//! | warnings == 1       | low       | 85                        |
//! | otherwise           | compliant | 95, or 100 with no issues |
//!
//! Rows are tried top to bottom. Info-kind issues only affect the last row.

use shared_types::RiskLevel;

pub fn assess(errors: usize, warnings: usize, no_issues: bool) -> (RiskLevel, u8) {
    let errors = i64::try_from(errors).unwrap_or(i64::MAX);
    let warnings = i64::try_from(warnings).unwrap_or(i64::MAX);

    let (level, score) = if errors >= 2 {
        (RiskLevel::High, (40 - errors.saturating_mul(10)).max(0))
    } else if errors == 1 {
        (RiskLevel::Medium, 60 - warnings.saturating_mul(5))
    } else if warnings >= 2 {
        (RiskLevel::Medium, 75 - warnings.saturating_mul(5))
    } else if warnings == 1 {
        (RiskLevel::Low, 85)
    } else {
        (RiskLevel::Compliant, if no_issues { 100 } else { 95 })
    };

    (level, clamp_score(score))
}

fn clamp_score(score: i64) -> u8 {
    score.clamp(0, 100) as u8
}
