#![no_main]

use f77parse::lexer::{self, Scanner};
use f77parse::parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The iterator and the batch scanner must agree
        let streamed: Result<Vec<_>, _> = Scanner::new(s).collect();
        let batch = lexer::lex(s);
        assert_eq!(streamed, batch);

        // If scanning succeeds, fuzz the parser
        if let Ok(tokens) = batch {
            let _ = parser::parse(&tokens);
        }
    }
});
