// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_sanitize_body
// Purpose: sanitize_body/sanitize_name must be total and never panic on
// arbitrary UTF-8. Idempotence is NOT asserted here: crafted nesting can
// leave a residual pattern that a second pass removes.
#![no_main]

use chatrelay::sanitizer::{sanitize_body, sanitize_name};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = sanitize_body(text);

        let name = sanitize_name(text);
        assert!(!name.is_empty());
    }
});
