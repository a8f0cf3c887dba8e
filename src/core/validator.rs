use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum trimmed length of an address in the canonical policy
pub const DEFAULT_MIN_LENGTH: usize = 8;

static LETTER_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]{2,}").expect("letter run pattern is valid"));

/// Two ASCII letters, optionally followed by a 5-digit postal code
static STATE_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2}(\s*[0-9]{5})?$").expect("state segment pattern is valid")
});

/// Heuristic rules deciding whether free-form text looks like a
/// "street, city, state[ zip]" mailing address.
///
/// This is a cheap pre-filter in front of the geocoder: it rejects text that
/// a permissive geocoder would otherwise resolve to an arbitrary location.
/// Some valid but oddly formatted addresses are rejected too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPolicy {
    pub min_length: usize,
}

impl Default for AddressPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl AddressPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Check whether `text` is address-shaped under this policy
    pub fn is_valid(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.chars().count() < self.min_length {
            return false;
        }

        // Plausible street number
        if !trimmed.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }

        // Plausible street or city name
        if !LETTER_RUN.is_match(trimmed) {
            return false;
        }

        if !trimmed.contains(',') {
            return false;
        }

        let segments: Vec<&str> = trimmed
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if segments.len() < 2 {
            return false;
        }

        segments
            .last()
            .is_some_and(|last| STATE_SEGMENT.is_match(last))
    }
}

/// Check `text` against the canonical address policy
pub fn is_valid_address(text: &str) -> bool {
    AddressPolicy::default().is_valid(text)
}
