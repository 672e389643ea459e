#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = defang_schemes::defang::uri::defang_uri(data);
});
