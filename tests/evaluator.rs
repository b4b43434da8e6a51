#[cfg(test)]
mod evaluator_tests {
    use smart_calc as calc;

    use calc::cursor::TokenCursor;
    use calc::error::{EvalError, Result};
    use calc::evaluator::evaluate;
    use calc::scanner::tokenize;
    use calc::token::{Integer, Token, TokenType};

    fn eval(source: &str) -> Result<Integer> {
        let tokens: Vec<Token> = tokenize(source)?;
        evaluate(&tokens)
    }

    #[test]
    fn test_precedence_and_grouping() {
        assert_eq!(eval("2 + 3 * 4"), Ok(14));
        assert_eq!(eval("(2 + 3) * 4"), Ok(20));
        assert_eq!(eval("7 % 3"), Ok(1));
        assert_eq!(eval("-(-5)"), Ok(5));
        assert_eq!(eval("2 * (3 + (4 - 1)) - 10 / 5"), Ok(10));
        assert_eq!(eval("42"), Ok(42));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval("10 - 4 - 3"), Ok(3));
        assert_eq!(eval("100 / 10 / 5"), Ok(2));
        assert_eq!(eval("20 % 7 % 4"), Ok(2));
        assert_eq!(eval("8 - 2 + 1"), Ok(7));
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(eval("7 / 2"), Ok(3));
        assert_eq!(eval("-7 / 2"), Ok(-3));
        assert_eq!(eval("-7 % 3"), Ok(-1));
        assert_eq!(eval("7 % -3"), Ok(1));
    }

    #[test]
    fn test_unary_chains() {
        assert_eq!(eval("3 --- 2"), Ok(1));
        assert_eq!(eval("3 ++ 2"), Ok(5));
        assert_eq!(eval("2 - -2"), Ok(4));
        assert_eq!(eval("-(2 + 3) * 2"), Ok(-10));
        assert_eq!(eval("+(4)"), Ok(4));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("10 / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("(5+5) % (2-2)"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("1 + 2 * (3 / 0)"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("0 / 0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_malformed_expressions() {
        for source in ["(1+2", "1 )", "(1+2)3", "()", "3 * / 2", "", "4 = 2"] {
            assert_eq!(
                eval(source),
                Err(EvalError::InvalidExpression),
                "{:?}",
                source
            );
        }
    }

    #[test]
    fn test_unresolved_identifier_is_not_an_operand() {
        assert_eq!(eval("x + 1"), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(eval("9223372036854775807 + 1"), Ok(Integer::MIN));
        assert_eq!(eval("-9223372036854775808 / -1"), Ok(Integer::MIN));
        assert_eq!(eval("-9223372036854775808 % -1"), Ok(0));
        assert_eq!(eval("-(-9223372036854775807 - 1)"), Ok(Integer::MIN));
    }

    #[test]
    fn test_nesting_limit() {
        let shallow: String = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(eval(&shallow), Ok(1));

        let deep: String = format!("{}1{}", "(".repeat(300), ")".repeat(300));
        assert_eq!(eval(&deep), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn test_cursor_pushback_clamps_at_start() {
        let tokens: Vec<Token> = tokenize("1 + 2").unwrap();
        let mut cursor = TokenCursor::new(&tokens);

        cursor.put_back();
        assert_eq!(cursor.position(), 0);

        assert_eq!(cursor.get().and_then(Token::number), Some(1));
        assert_eq!(cursor.get().map(|t| t.token_type), Some(TokenType::PLUS));

        cursor.put_back();
        assert_eq!(cursor.get().map(|t| t.token_type), Some(TokenType::PLUS));
        assert_eq!(cursor.get().and_then(Token::number), Some(2));

        assert!(cursor.get().is_none());
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.position(), 3);

        cursor.put_back();
        cursor.put_back();
        assert_eq!(cursor.position(), 1);
    }
}
