#[cfg(test)]
/// Parser unit tests.
///
/// These tests cover operator precedence and associativity, each statement form, and the position reported by the
/// first error.
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<Program, ParseError> {
        let tokens = lexer::lex(source).expect("test source should scan");
        parse(&tokens)
    }

    /// Parse `X = <expr>` inside a minimal program and return the expression.
    fn parse_expr(expr: &str) -> Expr {
        let program = parse_str(&format!("PROGRAM T\nX = {expr}\nEND\n")).unwrap();
        match program.statements.into_iter().next() {
            Some(Statement::Assignment(a)) => a.value,
            other => panic!("expected assignment, got {other:?}"),
        }
    }

    fn num(text: &str) -> Expr {
        Expr::number(text)
    }

    fn var(name: &str) -> Expr {
        Expr::variable(name)
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(
            parse_expr("2**3**2"),
            Expr::power(num("2"), Expr::power(num("3"), num("2")))
        );
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        assert_eq!(
            parse_expr("1 - 2 - 3"),
            Expr::binary(Expr::binary(num("1"), BinaryOp::Sub, num("2")), BinaryOp::Sub, num("3"))
        );
    }

    #[test]
    fn test_division_is_left_associative() {
        assert_eq!(
            parse_expr("A / B * C"),
            Expr::binary(Expr::binary(var("A"), BinaryOp::Div, var("B")), BinaryOp::Mul, var("C"))
        );
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        assert_eq!(
            parse_expr("1 + 2 * 3"),
            Expr::binary(num("1"), BinaryOp::Add, Expr::binary(num("2"), BinaryOp::Mul, num("3")))
        );
    }

    #[test]
    fn test_power_binds_tighter_than_multiplication() {
        assert_eq!(
            parse_expr("2 * X**2"),
            Expr::binary(num("2"), BinaryOp::Mul, Expr::power(var("X"), num("2")))
        );
    }

    #[test]
    fn test_parenthesized_base_of_power() {
        assert_eq!(
            parse_expr("(1+2)**2"),
            Expr::power(Expr::binary(num("1"), BinaryOp::Add, num("2")), num("2"))
        );
    }

    #[test]
    fn test_parentheses_leave_no_node() {
        assert_eq!(parse_expr("((A))"), var("A"));
    }

    #[test]
    fn test_declarations() {
        let program = parse_str("PROGRAM P\nINTEGER A, B\nreal x\nEND\n").unwrap();
        assert_eq!(
            program.statements,
            vec![
                Statement::Declaration(Declaration {
                    kind: DeclKind::Integer,
                    names: vec!["A".to_string(), "B".to_string()],
                }),
                Statement::Declaration(Declaration {
                    kind: DeclKind::Real,
                    names: vec!["x".to_string()],
                }),
            ]
        );
    }

    #[test]
    fn test_demo_program() {
        let source = "PROGRAM DEMO\nINTEGER A, B\nA = 3\nB = A**2 + 1\nEND\n";
        let program = parse_str(source).unwrap();
        assert_eq!(
            program,
            Program {
                name: "DEMO".to_string(),
                statements: vec![
                    Statement::Declaration(Declaration {
                        kind: DeclKind::Integer,
                        names: vec!["A".to_string(), "B".to_string()],
                    }),
                    Statement::Assignment(Assignment {
                        target: "A".to_string(),
                        value: num("3"),
                    }),
                    Statement::Assignment(Assignment {
                        target: "B".to_string(),
                        value: Expr::binary(Expr::power(var("A"), num("2")), BinaryOp::Add, num("1")),
                    }),
                ],
            }
        );
    }

    #[test]
    fn test_loop_header_has_no_body() {
        let source = "PROGRAM L\nDO J = 1, 10\nX = J\nEND\n";
        let program = parse_str(source).unwrap();
        assert_eq!(program.statements.len(), 2);
        assert_eq!(
            program.statements[0],
            Statement::CountedLoop(CountedLoop {
                variable: "J".to_string(),
                start: num("1"),
                end: num("10"),
            })
        );
        assert!(matches!(program.statements[1], Statement::Assignment(_)));
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        let source = "PROGRAM P\n\nC setup\nX = 1\n\n\nEND\n";
        let program = parse_str(source).unwrap();
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn test_statements_may_share_a_line() {
        let program = parse_str("PROGRAM P\nA = 1 B = 2\nEND\n").unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_end_without_trailing_newline() {
        let program = parse_str("PROGRAM P\nEND").unwrap();
        assert_eq!(program.name, "P");
        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_missing_factor_reports_line_end() {
        let err = parse_str("PROGRAM X\nA = \nEND\n").unwrap_err();
        assert_eq!(err.expected, Expected::FactorStart);
        assert_eq!(err.found, TokenKind::Newline);
        assert_eq!((err.line, err.column), (2, 5));
        assert!(err.to_string().contains("expected a valid factor start"));
    }

    #[test]
    fn test_missing_assign_operator() {
        let err = parse_str("PROGRAM X\nA 1\nEND\n").unwrap_err();
        assert_eq!(err.expected, Expected::Token(TokenKind::Operator(OperatorId::Assign)));
        assert_eq!(err.found, TokenKind::Number);
        assert_eq!(err.text, "1");
    }

    #[test]
    fn test_unclosed_parenthesis() {
        let err = parse_str("PROGRAM X\nA = (1 + 2\nEND\n").unwrap_err();
        assert_eq!(err.expected, Expected::Token(TokenKind::Punctuation(PunctuationId::RParen)));
        assert_eq!((err.line, err.column), (2, 11));
    }

    #[test]
    fn test_loop_header_needs_comma() {
        let err = parse_str("PROGRAM X\nDO J = 1 10\nEND\n").unwrap_err();
        assert_eq!(err.expected, Expected::Token(TokenKind::Punctuation(PunctuationId::Comma)));
    }

    #[test]
    fn test_missing_end_reports_end_of_input() {
        let err = parse_str("PROGRAM X\nA = 1\n").unwrap_err();
        assert_eq!(err.expected, Expected::Token(TokenKind::Keyword(KeywordId::End)));
        assert_eq!(err.found, TokenKind::Eof);
    }

    #[test]
    fn test_text_after_end_is_rejected() {
        let err = parse_str("PROGRAM X\nEND\nA = 1\n").unwrap_err();
        assert_eq!(err.expected, Expected::Token(TokenKind::Eof));
        assert_eq!(err.found, TokenKind::Ident);
    }

    #[test]
    fn test_program_header_requires_line_end() {
        let err = parse_str("PROGRAM X A = 1\nEND\n").unwrap_err();
        assert_eq!(err.expected, Expected::Token(TokenKind::Newline));
    }

    #[test]
    fn test_keyword_cannot_be_assignment_target() {
        let err = parse_str("PROGRAM X\nREAL = 1\nEND\n").unwrap_err();
        assert_eq!(err.expected, Expected::Token(TokenKind::Ident));
        assert_eq!(err.found, TokenKind::Operator(OperatorId::Assign));
    }

    fn nested_parens(levels: usize) -> String {
        format!("PROGRAM P\nX = {}1{}\nEND\n", "(".repeat(levels), ")".repeat(levels))
    }

    #[test]
    fn test_parentheses_up_to_depth_limit() {
        let program = parse_str(&nested_parens(MAX_EXPR_DEPTH)).unwrap();
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn test_parentheses_past_depth_limit_are_rejected() {
        let err = parse_str(&nested_parens(MAX_EXPR_DEPTH + 1)).unwrap_err();
        assert_eq!(err.expected, Expected::ShallowerNesting);
        assert_eq!(err.found, TokenKind::Punctuation(PunctuationId::LParen));
        assert_eq!((err.line, err.column), (2, 5 + MAX_EXPR_DEPTH));
    }

    #[test]
    fn test_hundred_thousand_parentheses_fail_without_overflow() {
        let err = parse_str(&nested_parens(100_000)).unwrap_err();
        assert_eq!(err.expected, Expected::ShallowerNesting);
        assert_eq!((err.line, err.column), (2, 5 + MAX_EXPR_DEPTH));
    }

    #[test]
    fn test_hundred_thousand_chained_powers_fail_without_overflow() {
        let source = format!("PROGRAM P\nX = {}2\nEND\n", "2**".repeat(100_000));
        let err = parse_str(&source).unwrap_err();
        assert_eq!(err.expected, Expected::ShallowerNesting);
        assert_eq!(err.found, TokenKind::Operator(OperatorId::StarStar));
        // The n-th `**` starts at column 3n + 3.
        assert_eq!(err.column, 3 * (MAX_EXPR_DEPTH + 1) + 3);
    }

    #[test]
    fn test_long_flat_sum_is_bounded_too() {
        let ok = format!("PROGRAM P\nX = 1{}\nEND\n", "+1".repeat(MAX_EXPR_DEPTH));
        assert!(parse_str(&ok).is_ok());

        let source = format!("PROGRAM P\nX = 1{}\nEND\n", "+1".repeat(100_000));
        let err = parse_str(&source).unwrap_err();
        assert_eq!(err.expected, Expected::ShallowerNesting);
        assert_eq!(err.found, TokenKind::Operator(OperatorId::Plus));
    }

    #[test]
    fn test_depth_resets_between_sibling_expressions() {
        let deep = format!("{}1{}", "(".repeat(MAX_EXPR_DEPTH), ")".repeat(MAX_EXPR_DEPTH));
        let source = format!("PROGRAM P\nX = {deep}\nDO J = {deep}, {deep}\nEND\n");
        let program = parse_str(&source).unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_empty_token_slice_reports_eof() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.expected, Expected::Token(TokenKind::Keyword(KeywordId::Program)));
        assert_eq!(err.found, TokenKind::Eof);
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn test_slice_without_eof_does_not_panic() {
        let mut tokens = lexer::lex("PROGRAM X\nA = 1 +").unwrap();
        tokens.pop();
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.expected, Expected::FactorStart);
        assert_eq!(err.found, TokenKind::Eof);
        assert_eq!((err.line, err.column), (2, 8));
    }
}
