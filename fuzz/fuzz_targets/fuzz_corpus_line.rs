#![no_main]
use cvss2_tools::corpus::parse_line;
use libfuzzer_sys::fuzz_target;

/// Fuzz the corpus line parser.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_line(1, s);
    }
});
