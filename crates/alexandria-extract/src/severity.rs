use std::sync::LazyLock;

use alexandria_core::models::record::MAX_SEVERITY;
use regex::Regex;

/// The severity patterns, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityRule {
    /// "7/10"
    SlashTen,
    /// "7 out of 10"
    OutOfTen,
    /// Any bare number 0–10, optionally after "about", "around" or "roughly".
    /// Also picks up counts and dates that have nothing to do with severity.
    BareNumber,
}

impl SeverityRule {
    pub const ALL: [SeverityRule; 3] = [Self::SlashTen, Self::OutOfTen, Self::BareNumber];

    pub fn name(self) -> &'static str {
        match self {
            Self::SlashTen => "slash_ten",
            Self::OutOfTen => "out_of_ten",
            Self::BareNumber => "bare_number",
        }
    }

    fn pattern(self) -> &'static Regex {
        &RULE_PATTERNS[self as usize]
    }
}

/// A severity value together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityMatch {
    pub value: u8,
    pub rule: SeverityRule,
}

/// Compiled in the same order as [`SeverityRule::ALL`].
static RULE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        compile(r"\b([0-9]|10)\s*/\s*10\b"),
        compile(r"\b([0-9]|10)\s+out of\s+10\b"),
        compile(r"\b(?:about|around|roughly)?\s*([0-9]|10)\b"),
    ]
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("severity pattern must compile")
}

/// Find the first severity value in already-lowercased text.
///
/// Rules are tried in priority order; within a rule, matches are scanned
/// left to right and the first one whose number is in `0..=10` wins.
pub fn find_severity(lowered: &str) -> Option<SeverityMatch> {
    SeverityRule::ALL
        .into_iter()
        .find_map(|rule| first_in_rule(rule, lowered).map(|value| SeverityMatch { value, rule }))
}

fn first_in_rule(rule: SeverityRule, lowered: &str) -> Option<u8> {
    rule.pattern()
        .captures_iter(lowered)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<u8>().ok())
        .find(|value| *value <= MAX_SEVERITY)
}
