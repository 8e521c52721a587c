#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz format identification.
///
/// Matching must be total: arbitrary bytes may never panic, and a detected
/// format must accept its own aliases.
fuzz_target!(|data: &[u8]| {
    if let Some(aliases) = imgsig::identify(data) {
        for alias in aliases.iter() {
            assert!(imgsig::matches_extension(data, alias));
        }
    }
});
