use exprcalc::{EvaluationError, Expression, ParseError, parse};
use rstest::rstest;

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
            "got {actual}, expected {expected}");
}

fn value_of(source: &str, values: &[f64]) -> f64 {
    parse(source).unwrap_or_else(|e| panic!("{source}: {e}"))
                 .evaluate(values)
                 .unwrap_or_else(|e| panic!("{source}: {e}"))
}

#[rstest]
#[case("1 + 2 * 3", 7.0)]
#[case("(1 + 2) * 3", 9.0)]
#[case("7 / 2", 3.5)]
#[case("5 - 3 - 1", 1.0)]
#[case("2 * 3 / 4 * 2", 3.0)]
#[case("--5", 5.0)]
#[case("+5", 5.0)]
#[case("-2 * -2", 4.0)]
#[case("Sqr(2)", 4.0)]
#[case("(e)", std::f64::consts::E)]
#[case("pi / 2", std::f64::consts::FRAC_PI_2)]
#[case("pow(2, 3) - factorial(3)", 2.0)]
#[case("1.5e1 + 0.5", 15.5)]
#[case("pow(2, 0 - 3)", 0.125)]
#[case("pow(2, (-3))", 0.125)]
#[case("factorial(21)", 51_090_942_171_709_440_000.0)]
fn constant_expressions_match_closed_form(#[case] source: &str, #[case] expected: f64) {
    assert_close(value_of(source, &[]), expected);
}

#[rstest]
#[case("(x0 + x1) * x2", 3)]
#[case("Sqrt(x0 + x1)", 2)]
#[case("Exp(Ln(x0 + x1))", 2)]
#[case("x0 * x0 - x0", 1)]
#[case("x2 + x0", 2)]
#[case("x7", 1)]
#[case("(e)", 0)]
#[case("Sqr(2)", 0)]
fn variable_count_ignores_repetition(#[case] source: &str, #[case] expected: usize) {
    assert_eq!(parse(source).unwrap().variable_count(), expected);
}

#[test]
fn repeated_evaluation_uses_new_bindings() {
    let expr = parse("Exp(Ln(x0 + x1))").unwrap();
    assert_close(expr.evaluate(&[123.0, 4567.0]).unwrap(), 4690.0);
    assert_close(expr.evaluate(&[1.0, 2.0]).unwrap(), 3.0);

    let expr = parse("Sqrt(x0 + x1)").unwrap();
    assert_close(expr.evaluate(&[13.0, 12.0]).unwrap(), 5.0);
}

#[rstest]
#[case("(1+2")]
#[case("1 + + *")]
#[case("abc123")]
#[case("")]
#[case("x")]
#[case("pi(3)")]
#[case("pi()")]
#[case("sqrt")]
#[case("pow(1, 2, 3)")]
#[case("1 2")]
#[case(")1(")]
#[case("pow(2, -3)")]
#[case("pow(2, +3)")]
#[case("1e400")]
#[case("x0 * 1e400")]
fn malformed_input_fails_construction(#[case] source: &str) {
    assert!(parse(source).is_err(), "{source} should not parse");
}

#[test]
fn parse_errors_keep_their_cause() {
    assert_eq!(parse("2 * abc"),
               Err(ParseError::UnrecognizedToken { token:    "abc".to_string(),
                                                   position: 4, }));
    assert_eq!(parse(""), Err(ParseError::Empty));
    assert!(matches!(parse("pi(3)"), Err(ParseError::ArityMismatch { expected: 0, .. })));
    assert!(matches!(parse("1 +"), Err(ParseError::Syntax { position: 2, .. })));
}

#[test]
fn long_flat_sums_parse_and_evaluate() {
    let source = format!("{}1", "1+".repeat(100_000));
    let expr = parse(&source).unwrap();
    assert_eq!(expr.postfix().len(), 200_001);
    assert_close(expr.evaluate(&[]).unwrap(), 100_001.0);
}

#[test]
fn missing_variable_values_fail_evaluation() {
    let expr = parse("x0 + x3").unwrap();
    assert_eq!(expr.evaluate(&[1.0, 2.0]),
               Err(EvaluationError::UnboundVariable { index:    3,
                                                      supplied: 2, }));
    assert_close(expr.evaluate(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 5.0);
}

#[test]
fn negative_factorial_fails_evaluation() {
    let expr = parse("factorial(x0)").unwrap();
    assert!(matches!(expr.evaluate(&[-2.0]), Err(EvaluationError::InvalidArgument { .. })));
    assert_close(expr.evaluate(&[6.0]).unwrap(), 720.0);
}

#[rstest]
#[case("(x0 + x1) * x2")]
#[case("--5 + -x0")]
#[case("+x1 * - (x0 - 3)")]
#[case("Pow(x0, 2) / Sqrt(Abs(-x1)) - pi")]
#[case("factorial(3) + log(100) + ln(e)")]
#[case("0.1 + 0.2")]
#[case("1.7e308 / x1")]
#[case("pow(x1, 0 - 2)")]
fn canonical_text_reparses_to_the_same_value(#[case] source: &str) {
    let values = [1.25, 4.0];
    let original = parse(source).unwrap();
    let reparsed = parse(original.canonical_text()).unwrap();

    assert_eq!(reparsed.variable_count(), original.variable_count());
    assert_eq!(reparsed.postfix(), original.postfix());
    assert_close(reparsed.evaluate(&values).unwrap(), original.evaluate(&values).unwrap());
}

#[test]
fn canonical_text_is_normalized() {
    let expr = parse("  SQRT( x0 )*+2.50-e ").unwrap();
    assert_eq!(expr.canonical_text(), "Sqrt ( X0 ) * 2.5 - e");
    assert_eq!(expr.to_string(), expr.canonical_text());
}

#[test]
fn construction_entry_points_agree() {
    let a = parse("x0 * 2").unwrap();
    let b: Expression = "x0 * 2".parse().unwrap();
    let c = Expression::try_from("x0 * 2").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn expressions_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expression>();

    let expr = parse("x0 * x0").unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|i| {
                                        let expr = &expr;
                                        scope.spawn(move || expr.evaluate(&[f64::from(i)]))
                                    })
                                    .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let value = handle.join().unwrap().unwrap();
            assert_close(value, f64::from(u32::try_from(i * i).unwrap()));
        }
    });
}
