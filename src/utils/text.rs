use regex::Regex;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

/// Joins runs of any whitespace (including non-breaking spaces) into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes markup tags such as HH's `<highlighttext>` and tidies the spacing.
pub fn strip_tags(text: &str) -> String {
    collapse_whitespace(&tag_pattern().replace_all(text, ""))
}

/// Cleans a scraped or API string, mapping blank values to `None`.
pub fn non_blank(text: &str) -> Option<String> {
    let cleaned = collapse_whitespace(text);
    (!cleaned.is_empty()).then_some(cleaned)
}
