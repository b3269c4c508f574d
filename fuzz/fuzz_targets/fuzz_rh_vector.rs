#![no_main]
use cvss2_tools::Cvss2;
use libfuzzer_sys::fuzz_target;

/// Fuzz the Red Hat `<score>/<vector>` parser.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(cvss) = Cvss2::from_rh_vector(s) {
            let rh = cvss.rh_vector();
            assert!(Cvss2::from_rh_vector(&rh).is_ok(), "{rh}");
        }
    }
});
