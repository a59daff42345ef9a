use calculator::{
    EvalError, add,
    error::{ParseError, RuntimeError, SyntaxError},
    evaluate, evaluate_lines,
    util::num::{ABS_TOLERANCE, REL_TOLERANCE, is_close},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn assert_value(src: &str, want: f64) {
    match evaluate(src) {
        Ok(got) => assert_eq!(got, want, "({src}) evaluated to {got}, want {want}"),
        Err(e) => panic!("({src}) returned an unexpected error: {e}"),
    }
}

fn assert_failure(src: &str) -> EvalError {
    match evaluate(src) {
        Ok(got) => panic!("({src}) evaluated to {got} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn one_operator_expressions() {
    assert_value("1 + 1", 2.0);
    assert_value(" 1 - 1 ", 0.0);
    assert_value("  2  *  2  ", 4.0);
    assert_value("10/2", 5.0);
    assert_value("\t0.5 * 8\n", 4.0);
}

#[test]
fn missing_operator_is_a_syntax_error() {
    assert!(matches!(assert_failure("2 plus 2"),
                     EvalError::Syntax(SyntaxError::MissingOperator { .. })));
}

#[test]
fn missing_operand_is_a_parse_error() {
    assert!(matches!(assert_failure("2 +"),
                     EvalError::Parse(ParseError::EmptyOperand { .. })));
}

#[test]
fn non_numeric_operands_are_parse_errors() {
    assert!(matches!(assert_failure("2 - not_a_number"),
                     EvalError::Parse(ParseError::InvalidNumber { .. })));
    assert!(matches!(assert_failure("1 one wun + 1"),
                     EvalError::Parse(ParseError::InvalidNumber { .. })));
}

#[test]
fn too_many_operands_is_a_syntax_error() {
    assert!(matches!(assert_failure("1 * 2 * 3"),
                     EvalError::Syntax(SyntaxError::OperandCount { found: 3, .. })));
}

#[test]
fn division_by_zero_propagates() {
    assert_eq!(assert_failure("10      /0"),
               EvalError::Runtime(RuntimeError::DivisionByZero { index: 1 }));
    assert_eq!(assert_failure("10 / 0"),
               EvalError::Runtime(RuntimeError::DivisionByZero { index: 1 }));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(assert_failure("2 plus 2").to_string(),
               "Syntax error: No operator found in '2 plus 2'. Expected one of +, -, * or /.");
    assert_eq!(assert_failure("2 +").to_string(),
               "Parse error: The right operand is missing.");
}

#[test]
fn addition_round_trips_through_text() {
    let mut rng = StdRng::seed_from_u64(0x00ca_1c);

    for _ in 0..500 {
        let a: f64 = rng.random_range(0.0..1_000_000.0);
        let b: f64 = rng.random_range(0.0..1_000_000.0);
        let src = format!("{a} + {b}");
        let got = evaluate(&src).unwrap_or_else(|e| panic!("({src}) failed: {e}"));
        let want = add(&[a, b]);
        assert!(is_close(got, want, ABS_TOLERANCE, REL_TOLERANCE),
                "({src}) evaluated to {got}, want {want}");
    }
}

#[test]
fn lines_report_where_they_fail() {
    let source = "1 + 1\n# comment\n\n4 * 4\n9 / 0\n";
    let err = evaluate_lines(source).unwrap_err();
    assert_eq!(err.line, 5);
    assert_eq!(err.to_string(),
               "Error on line 5: Runtime error: Division by zero (operand 1).");

    assert_eq!(evaluate_lines("1 + 1\n  # indented comment\n4 * 4").unwrap(),
               vec![2.0, 16.0]);
    assert!(evaluate_lines("").unwrap().is_empty());
}
