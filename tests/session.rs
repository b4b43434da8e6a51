#[cfg(test)]
mod session_tests {
    use smart_calc as calc;

    use calc::error::EvalError;
    use calc::interpreter::evaluate_line;
    use calc::resolver::Statement;
    use calc::{process, Interpreter, SymbolTable};

    #[test]
    fn test_assignment_then_lookup() {
        let mut table = SymbolTable::new();

        assert_eq!(process("x = 5", &mut table), Ok(None));
        assert_eq!(process("x", &mut table), Ok(Some(5)));
        assert_eq!(process("y = x + 1", &mut table), Ok(None));
        assert_eq!(process("y", &mut table), Ok(Some(6)));
    }

    #[test]
    fn test_copy_assignment_semantics() {
        let mut table = SymbolTable::new();

        for line in ["x = 5", "y = x", "x = 9"] {
            assert_eq!(process(line, &mut table), Ok(None));
        }

        assert_eq!(process("y", &mut table), Ok(Some(5)));
        assert_eq!(process("x", &mut table), Ok(Some(9)));
    }

    #[test]
    fn test_unknown_variable() {
        let mut table = SymbolTable::new();

        assert_eq!(process("z", &mut table), Err(EvalError::UnknownVariable));
        assert_eq!(process("z + 1", &mut table), Err(EvalError::UnknownVariable));
    }

    #[test]
    fn test_malformed_input_keeps_bindings() {
        let mut table = SymbolTable::new();
        process("a = 7", &mut table).unwrap();
        process("b = -2", &mut table).unwrap();

        for line in ["1 == 2", "3 4", "(1+2", "1 +", "a = a +", "b = 1 / 0", "a = = 1"] {
            assert!(process(line, &mut table).is_err(), "{:?}", line);
        }

        assert_eq!(table.len(), 2);
        assert_eq!(process("a", &mut table), Ok(Some(7)));
        assert_eq!(process("b", &mut table), Ok(Some(-2)));
    }

    #[test]
    fn test_pure_expressions_are_idempotent() {
        let mut table = SymbolTable::new();
        process("n = 3", &mut table).unwrap();

        for _ in 0..5 {
            assert_eq!(process("n * 2 + 1", &mut table), Ok(Some(7)));
            assert_eq!(process("(n - 10) / 2", &mut table), Ok(Some(-3)));
        }

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("n"), Ok(3));
    }

    #[test]
    fn test_expression_results_surface() {
        let mut table = SymbolTable::new();

        assert_eq!(process("-5 + 2", &mut table), Ok(Some(-3)));
        assert_eq!(process("8", &mut table), Ok(Some(8)));
        assert_eq!(process("10 / 0", &mut table), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_line_reports_assignment_value() {
        let mut table = SymbolTable::new();

        let evaluation = evaluate_line("big = 6 * 7", &mut table).unwrap();

        assert!(matches!(evaluation.statement, Statement::Declaration(_)));
        assert_eq!(evaluation.value, 42);
    }

    #[test]
    fn test_interpreter_print_policy() {
        let mut quiet = Interpreter::new();
        assert_eq!(quiet.process_line("x = 4"), Ok(None));
        assert_eq!(quiet.process_line("x"), Ok(Some(4)));

        let mut echo = Interpreter::new().with_echo_assignments(true);
        assert_eq!(echo.process_line("x = 4"), Ok(Some(4)));
        assert_eq!(echo.process_line("x - 1"), Ok(Some(3)));
        assert_eq!(echo.symbols().get("x"), Ok(4));
    }

    #[test]
    fn test_separate_sessions_do_not_share_state() {
        let mut first = Interpreter::new();
        let mut second = Interpreter::new();

        first.process_line("shared = 1").unwrap();

        assert_eq!(second.process_line("shared"), Err(EvalError::UnknownVariable));
    }
}
