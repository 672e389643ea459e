#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(out) = defang_schemes::defang(data) {
        assert_ne!(out, data);
    }
});
