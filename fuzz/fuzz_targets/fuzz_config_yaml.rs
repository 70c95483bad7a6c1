#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and validation must reject bad input, never panic
        if let Ok((document, _warnings)) =
            promstack::config::parse_document(content, Path::new("config.yml"))
        {
            let _ = promstack::config::validate(&document);
        }
    }
});
