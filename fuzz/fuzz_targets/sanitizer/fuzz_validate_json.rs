// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_validate_json
// Purpose: validate_message is the total entry point; whatever bytes arrive,
// it must produce a record with a well-formed color and no panic.
#![no_main]

use chatrelay::domain::validate_message;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let out = validate_message(raw);
        assert!(out.color.starts_with('#') && out.color.len() == 7);
    }
});
