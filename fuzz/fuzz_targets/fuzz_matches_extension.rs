#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz extension matching with an arbitrary claimed extension.
///
/// The first byte selects how much of the input is the extension.
fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let split = usize::from(split).min(rest.len());
    let (ext, buf) = rest.split_at(split);
    if let Ok(ext) = std::str::from_utf8(ext) {
        let _ = imgsig::matches_extension(buf, ext);
    }
});
