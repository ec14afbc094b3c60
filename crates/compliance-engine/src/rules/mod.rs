//! Ordered rule table for promotional-claim review
//!
//! Rules are evaluated in table order and their issues are emitted in that
//! order, so the position of an entry here is observable in every result.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use shared_types::IssueKind;

use crate::patterns::*;

/// One detection pattern of a rule, with an optional forward guard
pub struct Pattern {
    pub regex: &'static Regex,
    pub guard: Option<&'static Regex>,
}

impl Pattern {
    fn plain(regex: &'static Regex) -> Self {
        Self { regex, guard: None }
    }

    fn guarded(regex: &'static Regex, guard: &'static Regex) -> Self {
        Self {
            regex,
            guard: Some(guard),
        }
    }
}

/// A regulatory-risk rule: every match of any of its patterns yields an issue
pub struct Rule {
    pub category: &'static str,
    pub kind: IssueKind,
    pub message: &'static str,
    pub patterns: Vec<Pattern>,
}

impl Rule {
    pub fn suggestion(&self) -> Option<&'static str> {
        suggestion_for(self.category)
    }

    pub fn describe(&self) -> RuleInfo {
        RuleInfo {
            category: self.category,
            kind: self.kind,
            message: self.message,
            suggestion: self.suggestion(),
            patterns: self
                .patterns
                .iter()
                .map(|p| p.regex.as_str().to_string())
                .collect(),
            guards: self
                .patterns
                .iter()
                .filter_map(|p| p.guard.map(|g| g.as_str().to_string()))
                .collect(),
        }
    }
}

/// Serializable view of a [`Rule`]
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    pub category: &'static str,
    pub kind: IssueKind,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'static str>,
    pub patterns: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub guards: Vec<String>,
}

pub const ABSOLUTE_CLAIMS: &str = "Absolute Claims";
pub const SUPERLATIVE_CLAIMS: &str = "Superlative Claims";
pub const OFF_LABEL_PROMOTION: &str = "Off-Label Promotion";
pub const MISSING_QUALIFIERS: &str = "Missing Qualifiers";
pub const OUTCOME_PROMISES: &str = "Outcome Promises";
pub const EMOTIONAL_APPEALS: &str = "Emotional Appeals";
pub const SAFETY_BALANCE: &str = "Safety Balance";
pub const STATISTICS_WITHOUT_CONTEXT: &str = "Statistics Without Context";
pub const MISSING_REFERENCE: &str = "Missing Reference";

lazy_static! {
    static ref RULES: Vec<Rule> = vec![
        Rule {
            category: ABSOLUTE_CLAIMS,
            kind: IssueKind::Error,
            message: "Absolute language implies certainty that clinical evidence rarely supports",
            patterns: vec![
                Pattern::plain(&ABSOLUTE_WORDS),
                Pattern::plain(&ABSOLUTE_HUNDRED_PERCENT),
                Pattern::plain(&ABSOLUTE_ALL_PATIENTS),
                Pattern::plain(&ABSOLUTE_NO_SIDE_EFFECTS),
            ],
        },
        Rule {
            category: SUPERLATIVE_CLAIMS,
            kind: IssueKind::Error,
            message: "Superlative or comparative claims require head-to-head substantiation",
            patterns: vec![
                Pattern::plain(&SUPERLATIVE_WORDS),
                Pattern::plain(&SUPERLATIVE_COMPARATIVE),
                Pattern::plain(&SUPERLATIVE_NUMBER_ONE),
            ],
        },
        Rule {
            category: OFF_LABEL_PROMOTION,
            kind: IssueKind::Error,
            message: "Promotion must stay within the approved indication",
            patterns: vec![
                Pattern::plain(&OFF_LABEL),
                Pattern::plain(&OFF_LABEL_UNAPPROVED),
                Pattern::plain(&OFF_LABEL_NOT_APPROVED),
            ],
        },
        Rule {
            category: MISSING_QUALIFIERS,
            kind: IssueKind::Warning,
            message: "Efficacy statement is not qualified",
            patterns: vec![Pattern::guarded(&OUTCOME_VERBS, &QUALIFIER_GUARD)],
        },
        Rule {
            category: OUTCOME_PROMISES,
            kind: IssueKind::Error,
            message: "Claims must not promise a treatment outcome to the reader",
            patterns: vec![
                Pattern::plain(&PROMISE_YOU_WILL),
                Pattern::plain(&PROMISE_GUARANTEED_TO),
                Pattern::plain(&PROMISE_ENSURES),
                Pattern::plain(&PROMISE_GET_RID_OF),
            ],
        },
        Rule {
            category: EMOTIONAL_APPEALS,
            kind: IssueKind::Warning,
            message: "Hype or urgency language is inappropriate in medical promotion",
            patterns: vec![Pattern::plain(&HYPE_WORDS), Pattern::plain(&URGENCY)],
        },
        Rule {
            category: SAFETY_BALANCE,
            kind: IssueKind::Error,
            message: "Safety claims must not suggest the product is free of risk",
            patterns: vec![
                Pattern::plain(&SAFETY_NO_RISK),
                Pattern::plain(&SAFETY_PERFECTLY_SAFE),
                Pattern::plain(&SAFETY_HARMLESS),
            ],
        },
        Rule {
            category: STATISTICS_WITHOUT_CONTEXT,
            kind: IssueKind::Warning,
            message: "Statistic is quoted without its population or comparator",
            patterns: vec![Pattern::guarded(&PERCENTAGE, &STATISTIC_CONTEXT_GUARD)],
        },
        Rule {
            category: MISSING_REFERENCE,
            kind: IssueKind::Info,
            message: "Evidence statement needs a supporting reference",
            patterns: vec![
                Pattern::plain(&EVIDENCE_ASSERTION),
                Pattern::plain(&CLINICAL_DATA),
            ],
        },
    ];
}

/// The rule table in evaluation order
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Remediation text for a category. Only five categories define one.
pub fn suggestion_for(category: &str) -> Option<&'static str> {
    match category {
        ABSOLUTE_CLAIMS => Some(
            "Replace absolute terms with qualified language such as \"may help\" or \"in clinical studies\"",
        ),
        SUPERLATIVE_CLAIMS => {
            Some("Remove the superlative or cite head-to-head comparative data")
        }
        OUTCOME_PROMISES => {
            Some("Describe results observed in studies instead of promising an outcome")
        }
        MISSING_QUALIFIERS => Some("Add a qualifier such as \"may\" or \"in clinical studies\""),
        SAFETY_BALANCE => Some(
            "Balance efficacy with the safety profile and refer to the prescribing information",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_order() {
        let categories: Vec<_> = rules().iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                ABSOLUTE_CLAIMS,
                SUPERLATIVE_CLAIMS,
                OFF_LABEL_PROMOTION,
                MISSING_QUALIFIERS,
                OUTCOME_PROMISES,
                EMOTIONAL_APPEALS,
                SAFETY_BALANCE,
                STATISTICS_WITHOUT_CONTEXT,
                MISSING_REFERENCE,
            ]
        );
    }

    #[test]
    fn test_severities() {
        let kind_of = |category: &str| {
            rules()
                .iter()
                .find(|r| r.category == category)
                .map(|r| r.kind)
        };
        assert_eq!(kind_of(ABSOLUTE_CLAIMS), Some(IssueKind::Error));
        assert_eq!(kind_of(MISSING_QUALIFIERS), Some(IssueKind::Warning));
        assert_eq!(kind_of(EMOTIONAL_APPEALS), Some(IssueKind::Warning));
        assert_eq!(kind_of(STATISTICS_WITHOUT_CONTEXT), Some(IssueKind::Warning));
        assert_eq!(kind_of(MISSING_REFERENCE), Some(IssueKind::Info));
    }

    #[test]
    fn test_only_five_categories_have_suggestions() {
        let with_suggestion: Vec<_> = rules()
            .iter()
            .filter(|r| r.suggestion().is_some())
            .map(|r| r.category)
            .collect();
        assert_eq!(
            with_suggestion,
            vec![
                ABSOLUTE_CLAIMS,
                SUPERLATIVE_CLAIMS,
                MISSING_QUALIFIERS,
                OUTCOME_PROMISES,
                SAFETY_BALANCE,
            ]
        );
        assert_eq!(suggestion_for("Unknown"), None);
    }

    #[test]
    fn test_describe_lists_guards_for_guarded_rules() {
        let info = rules()
            .iter()
            .find(|r| r.category == MISSING_QUALIFIERS)
            .map(Rule::describe)
            .unwrap();
        assert_eq!(info.patterns.len(), 1);
        assert_eq!(info.guards.len(), 1);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["kind"], "warning");
    }
}
