//! Salary range extraction for listings that only publish free text,
//! e.g. `"от 150 000 до 250 000 ₽"`.
//!
//! Every function here is total: unparseable input degrades to `(0, 0)`.

use regex::Regex;
use std::sync::OnceLock;

fn digit_runs() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"))
}

fn lower_marker() -> &'static Regex {
    static FROM: OnceLock<Regex> = OnceLock::new();
    FROM.get_or_init(|| marker_pattern("от"))
}

fn upper_marker() -> &'static Regex {
    static TO: OnceLock<Regex> = OnceLock::new();
    TO.get_or_init(|| marker_pattern("до"))
}

// The marker must stand alone: "работа" contains "от" but is not a bound.
fn marker_pattern(word: &str) -> Regex {
    Regex::new(&format!(r"(?i)(?:^|[^\p{{L}}]){}(?:[^\p{{L}}]|$)", word))
        .expect("marker pattern is valid")
}

/// Parses a salary string into `(from, to)`.
///
/// `to` is taken from the last number when the text carries "до", `from` from the
/// first number when it carries "от". A bound whose marker is missing stays 0, and
/// `to` is raised to `from` whenever it would otherwise be smaller.
pub fn parse_salary(text: Option<&str>) -> (i64, i64) {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return (0, 0);
    };

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let numbers: Vec<i64> = digit_runs()
        .find_iter(&compact)
        .map(|run| run.as_str().parse().unwrap_or(i64::MAX))
        .collect();

    let (Some(&first), Some(&last)) = (numbers.first(), numbers.last()) else {
        return (0, 0);
    };

    let salary_to = if upper_marker().is_match(text) { last } else { 0 };
    let salary_from = if lower_marker().is_match(text) { first } else { 0 };

    ordered_range(salary_from, salary_to)
}

/// Enforces `to >= from` by raising `to`.
pub fn ordered_range(salary_from: i64, salary_to: i64) -> (i64, i64) {
    (salary_from, salary_to.max(salary_from))
}

/// Maps a currency symbol found in salary text to the ISO-like code HH uses.
pub fn detect_currency(text: &str) -> Option<String> {
    let code = if text.contains('₽') || text.contains("руб") {
        "RUR"
    } else if text.contains('$') {
        "USD"
    } else if text.contains('€') {
        "EUR"
    } else if text.contains('₸') {
        "KZT"
    } else {
        return None;
    };
    Some(code.to_string())
}
