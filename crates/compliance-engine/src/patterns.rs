//! Regex patterns for promotional-claim review
//!
//! Every pattern is case-insensitive and compiled once. The `regex` crate has
//! no look-around, so rules that must ignore a match when a qualifying phrase
//! follows it pair the pattern with a guard regex (see [`unique_matches`]).

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Absolute Claims
    pub static ref ABSOLUTE_WORDS: Regex = Regex::new(
        r"(?i)\b(?:always|never|guaranteed|cures?|completely|totally|permanently)\b"
    )
    .unwrap();
    pub static ref ABSOLUTE_HUNDRED_PERCENT: Regex = Regex::new(r"(?i)\b100\s?%").unwrap();
    pub static ref ABSOLUTE_ALL_PATIENTS: Regex =
        Regex::new(r"(?i)\b(?:all|every)\s+patients?\b").unwrap();
    pub static ref ABSOLUTE_NO_SIDE_EFFECTS: Regex =
        Regex::new(r"(?i)\bno\s+side[\s-]effects?\b").unwrap();

    // Superlative Claims
    pub static ref SUPERLATIVE_WORDS: Regex = Regex::new(
        r"(?i)\b(?:best|safest|strongest|fastest|most\s+effective|superior|unmatched)\b"
    )
    .unwrap();
    pub static ref SUPERLATIVE_COMPARATIVE: Regex =
        Regex::new(r"(?i)\b(?:better|more\s+effective|safer|faster)\s+than\b").unwrap();
    pub static ref SUPERLATIVE_NUMBER_ONE: Regex =
        Regex::new(r"(?i)#\s?1\b|\bnumber\s+one\b").unwrap();

    // Off-Label Promotion
    pub static ref OFF_LABEL: Regex = Regex::new(r"(?i)\boff[\s-]label\b").unwrap();
    pub static ref OFF_LABEL_UNAPPROVED: Regex =
        Regex::new(r"(?i)\b(?:investigational|unapproved|experimental)\b").unwrap();
    pub static ref OFF_LABEL_NOT_APPROVED: Regex =
        Regex::new(r"(?i)\bnot\s+(?:yet\s+)?approved\b").unwrap();

    // Missing Qualifiers
    pub static ref OUTCOME_VERBS: Regex =
        Regex::new(r"(?i)\b(?:reduces?|improves?|prevents?|treats?|helps?)\b").unwrap();
    pub static ref QUALIFIER_GUARD: Regex =
        Regex::new(r"(?i)\b(?:may|can|in\s+clinical\s+(?:studies|trials))\b").unwrap();

    // Outcome Promises
    pub static ref PROMISE_YOU_WILL: Regex = Regex::new(r"(?i)\byou\s+will\b").unwrap();
    pub static ref PROMISE_GUARANTEED_TO: Regex =
        Regex::new(r"(?i)\bguaranteed\s+to\b").unwrap();
    pub static ref PROMISE_ENSURES: Regex = Regex::new(r"(?i)\bensures?\b").unwrap();
    pub static ref PROMISE_GET_RID_OF: Regex = Regex::new(r"(?i)\bget\s+rid\s+of\b").unwrap();

    // Emotional Appeals
    pub static ref HYPE_WORDS: Regex = Regex::new(
        r"(?i)\b(?:breakthrough|miracle|revolutionary|amazing|incredible|life[\s-]changing)\b"
    )
    .unwrap();
    pub static ref URGENCY: Regex =
        Regex::new(r"(?i)\b(?:act\s+now|limited\s+time|don'?t\s+wait|hurry)\b").unwrap();

    // Safety Balance
    pub static ref SAFETY_NO_RISK: Regex = Regex::new(r"(?i)\bno\s+risks?\b").unwrap();
    pub static ref SAFETY_PERFECTLY_SAFE: Regex =
        Regex::new(r"(?i)\b(?:perfectly|completely|totally)\s+safe\b").unwrap();
    pub static ref SAFETY_HARMLESS: Regex =
        Regex::new(r"(?i)\b(?:harmless|risk[\s-]free)\b").unwrap();

    // Statistics Without Context
    pub static ref PERCENTAGE: Regex = Regex::new(r"\b\d+(?:\.\d+)?\s?%").unwrap();
    pub static ref STATISTIC_CONTEXT_GUARD: Regex = Regex::new(
        r"(?i)\b(?:of\s+(?:patients|subjects|participants)|in\s+the\s+(?:study|trial)|vs\.?|versus|compared\s+(?:to|with))"
    )
    .unwrap();

    // Missing Reference
    pub static ref EVIDENCE_ASSERTION: Regex = Regex::new(
        r"(?i)\b(?:studies|research|trials?)\s+(?:show|shows|demonstrate[sd]?|prove[sd]?)\b"
    )
    .unwrap();
    pub static ref CLINICAL_DATA: Regex =
        Regex::new(r"(?i)\bclinical(?:ly)?\s+(?:data|evidence|proven)\b").unwrap();
}

/// Collect the distinct substrings `pattern` matches in `text`, in order of
/// first occurrence.
///
/// When `guard` is set, a match is dropped if the guard matches anywhere
/// after the end of that match. Text before the match is never consulted, so
/// a qualifier that precedes the flagged phrase does not suppress it.
pub fn unique_matches<'t>(pattern: &Regex, guard: Option<&Regex>, text: &'t str) -> Vec<&'t str> {
    let mut seen = HashSet::new();
    let mut matches = Vec::new();

    for m in pattern.find_iter(text) {
        if let Some(guard) = guard {
            // find_at keeps the surrounding text visible to `\b`
            if guard.find_at(text, m.end()).is_some() {
                continue;
            }
        }
        if seen.insert(m.as_str()) {
            matches.push(m.as_str());
        }
    }

    matches
}
