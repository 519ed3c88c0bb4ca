use regex::Regex;
use std::sync::LazyLock;

/// An ordered denylist of removal rules applied to untrusted text.
///
/// The rule table is data, not logic: callers only see `scrub`, so the
/// denylist can be replaced by an allowlist-based implementation without
/// touching any call site.
pub struct RuleSet {
    rules: Vec<Regex>,
}

impl RuleSet {
    /// Applies every rule once, in order, each over the output of the
    /// previous one. A single linear pass per rule; no re-scanning.
    pub fn scrub(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |text, rule| {
                rule.replace_all(&text, "").into_owned()
            })
    }

}

// Order matters: later rules can uncover patterns the earlier removal created.
static DENYLIST: LazyLock<RuleSet> = LazyLock::new(|| RuleSet {
    rules: vec![
        // Full script blocks, shortest span, attributes allowed in the tag
        Regex::new(r"(?i)<script[^>]*>.*?</script>").expect("invalid script-block rule"),
        // Any remaining tag, opening or closing
        Regex::new(r"<[^>]*>").expect("invalid tag rule"),
        // Protocol marker, anywhere in the string
        Regex::new(r"(?i)javascript:").expect("invalid protocol rule"),
        // Inline event-handler attributes (onerror=, onclick=, ...)
        Regex::new(r"(?i)on\w+=").expect("invalid event-handler rule"),
    ],
});

pub fn denylist() -> &'static RuleSet {
    &DENYLIST
}
