#![no_main]
use libfuzzer_sys::fuzz_target;

use sift_json::from_json;

fuzz_target!(|data: &[u8]| {
    // The fuzzer gives us raw bytes; the decoder takes &str, so only
    // valid UTF-8 inputs are interesting.
    if let Ok(s) = std::str::from_utf8(data) {
        // We are looking for panics, so the result itself is discarded.
        let _ = from_json(s);
    }
});
