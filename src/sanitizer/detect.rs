use regex::Regex;
use std::sync::LazyLock;

// Scanned against the original text, before any scrubbing. Detection feeds
// counters and warnings only; it never changes what gets relayed.
static INJECTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)<script[^>]*>").expect("invalid script pattern"),
        Regex::new(r"(?i)javascript:").expect("invalid protocol pattern"),
        Regex::new(r"(?i)on\w+=").expect("invalid event-handler pattern"),
        Regex::new(r"(?i)<iframe[^>]*>").expect("invalid iframe pattern"),
        Regex::new(r"(?i)<object[^>]*>").expect("invalid object pattern"),
        Regex::new(r"(?i)<embed[^>]*>").expect("invalid embed pattern"),
    ]
});

/// True if the raw text carries any known executable-content pattern.
pub fn detect_injection_attempt(input: &str) -> bool {
    INJECTION_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(input))
}
