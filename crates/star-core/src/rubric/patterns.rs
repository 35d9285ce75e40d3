//! Quantitative-result patterns.
//!
//! A result counts as measurable when a number is followed by a percentage
//! sign, a multiplier, a currency marker or a counting unit. These patterns
//! are fixed; the learned metric keywords are matched separately as literals.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Percentage, e.g. `30%`, `12.5%`
    pub static ref PERCENT_PATTERN: Regex = Regex::new(r"[0-9]+(\.[0-9]+)?%").unwrap();

    /// Multiplier, e.g. `3배`, `1.5배`
    pub static ref MULTIPLIER_PATTERN: Regex = Regex::new(r"[0-9]+(\.[0-9]+)?배").unwrap();

    /// Currency, e.g. `500원`
    pub static ref CURRENCY_PATTERN: Regex = Regex::new(r"[0-9]+(\.[0-9]+)?원").unwrap();

    /// Number followed by a counting unit (people, items, cases, times,
    /// hours, days, months, years)
    pub static ref COUNT_UNIT_PATTERN: Regex =
        Regex::new(r"[0-9]+(명|개|건|회|시간|일|개월|년)").unwrap();
}

fn quantity_patterns() -> [&'static Regex; 4] {
    [
        &*PERCENT_PATTERN,
        &*MULTIPLIER_PATTERN,
        &*CURRENCY_PATTERN,
        &*COUNT_UNIT_PATTERN,
    ]
}

/// First quantitative expression in `content`, if any.
pub fn find_quantity(content: &str) -> Option<&str> {
    quantity_patterns()
        .into_iter()
        .find_map(|pattern| pattern.find(content))
        .map(|m| m.as_str())
}

/// First needle that occurs in `content` as a literal substring.
pub fn find_literal<'a>(content: &str, needles: &'a [String]) -> Option<&'a str> {
    needles
        .iter()
        .map(String::as_str)
        .find(|needle| !needle.is_empty() && content.contains(needle))
}

/// Total non-overlapping occurrences of every needle in `content`.
pub fn count_literals(content: &str, needles: &[String]) -> usize {
    needles
        .iter()
        .filter(|needle| !needle.is_empty())
        .map(|needle| content.matches(needle.as_str()).count())
        .sum()
}
