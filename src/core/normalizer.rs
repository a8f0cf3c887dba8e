use once_cell::sync::Lazy;
use regex::Regex;

static SUITE_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)suite.*").expect("suite pattern is valid"));
static COMMA_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(,\s*)+").expect("comma run pattern is valid"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*$").expect("trailing comma pattern is valid"));

/// Rewrite an address into the canonical form sent to the geocoder
///
/// Everything from the first "suite" (any case) onwards is dropped, including
/// any city or state that followed it. Comma runs become a single ", ",
/// whitespace runs a single space, and a trailing comma is removed before
/// trimming. Applying this twice gives the same result as applying it once.
pub fn clean_address(text: &str) -> String {
    let cleaned = SUITE_TAIL.replace(text, "");
    let cleaned = COMMA_RUN.replace_all(&cleaned, ", ");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    let cleaned = TRAILING_COMMA.replace(&cleaned, "");
    cleaned.trim().to_string()
}
