//! Denylist scrubbing of untrusted chat text.
//!
//! Everything here is a pure, total function: no state, no I/O, no failure
//! path. The relay hands in raw strings and gets safe strings back.

mod detect;
mod rules;
mod text;

pub use detect::detect_injection_attempt;
pub use rules::{RuleSet, denylist};
pub use text::{
    ANONYMOUS_NAME, BODY_MAX_GRAPHEMES, NAME_MAX_GRAPHEMES, sanitize_body, sanitize_name,
};
