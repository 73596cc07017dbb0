#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(program) = f77parse::parse(s) {
            let tree = f77parse::render(&program);
            assert!(tree.starts_with("Program "));
        }
    }
});
