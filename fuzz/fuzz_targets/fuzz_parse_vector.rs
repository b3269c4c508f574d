#![no_main]
use cvss2_tools::Cvss2;
use libfuzzer_sys::fuzz_target;

/// Fuzz the vector parser and scorer.
///
/// Accepted vectors must survive a round trip through their clean form
/// with identical scores.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(cvss) = Cvss2::new(s) {
            let clean = cvss.clean_vector();
            let reparsed = Cvss2::new(clean.as_str()).expect("clean vector must parse");
            assert_eq!(reparsed.score_result(), cvss.score_result());
            assert_eq!(reparsed.clean_vector(), clean);
        }
    }
});
