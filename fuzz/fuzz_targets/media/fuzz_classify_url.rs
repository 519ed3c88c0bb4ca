// IDE: cargo-fuzz target
// Run with: cargo fuzz run fuzz_classify_url
// Purpose: classification and embed synthesis over arbitrary strings; the
// synthesizer must only ever emit one of its fixed tag shapes.
#![no_main]

use chatrelay::media::{classify, is_media_url, synthesize_embed, MediaClass};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let class = classify(text);
        assert_eq!(class.is_media(), is_media_url(text));

        if class != MediaClass::None {
            let markup = synthesize_embed(text);
            assert!(
                markup.starts_with("<img ")
                    || markup.starts_with("<video ")
                    || markup.starts_with("<iframe ")
                    || markup.starts_with("<a ")
            );
        }
    }
});
