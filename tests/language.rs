use std::fs;

use linecalc::{
    Error,
    config::{Config, DEFAULT_MAX_DEPTH, FloatDivision},
    error::{LexError, ParseError, RuntimeError},
    interpreter::value::Value,
    parse_source, run, run_with_config,
};
use walkdir::WalkDir;

/// Runs a line of input the way a case file expects it rendered.
fn render(source: &str) -> String {
    match run(source, "case") {
        Ok(value) => value.to_string(),
        Err(e) => format!("error: {e}"),
    }
}

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let (source, expected) = line.rsplit_once("=>")
                                         .unwrap_or_else(|| panic!("{path:?}:{} has no '=>'", i + 1));
            let source = source.trim_end_matches(' ');
            count += 1;
            assert_eq!(render(source), expected.trim(), "{path:?}:{} `{source}`", i + 1);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_value(src: &str, expected: Value) {
    match run(src, "test") {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src, "test") {
        Ok(value) => panic!("`{src}` succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn binary_operators_fold_left() {
    assert_value("10 - 3 - 2", Value::Integer(5));
    assert_value("100 / 10 / 5", Value::Integer(2));
    assert_value("2 * 3 - 4 * 5", Value::Integer(-14));
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", Value::Integer(14));
    assert_value("(2 + 3) * 4", Value::Integer(20));
    assert_value("2 * (3 + 4) - (1)", Value::Integer(13));
}

#[test]
fn unary_plus_is_absolute_value() {
    assert_value("+(-5)", Value::Integer(5));
    assert_value("-(-5)", Value::Integer(5));
    assert_ne!(run("+-5", "test").unwrap(), run("-5", "test").unwrap());
}

#[test]
fn integer_and_float_division() {
    assert_value("3 / 2", Value::Integer(1));
    assert_value("3.0 / 2", Value::Floating(1.5));
    assert_value("3 / 2.0", Value::Floating(1.5));
}

#[test]
fn results_render_with_their_kind() {
    assert_eq!(run("4 / 2", "test").unwrap().to_string(), "2");
    assert_eq!(run("4.0 / 2", "test").unwrap().to_string(), "2.0");
}

#[test]
fn errors_stop_at_the_first_failing_stage() {
    assert!(matches!(assert_failure("1 / 0 $"), Error::Lex(LexError::IllegalCharacter { character: '$', .. })));
    assert!(matches!(assert_failure("1 / 0 +"), Error::Parse(ParseError::ExpectedFactor { .. })));
    assert!(matches!(assert_failure("1 / 0"), Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn error_kinds_name_the_stage() {
    assert_eq!(assert_failure("a").kind(), "LexError");
    assert_eq!(assert_failure("(").kind(), "SyntaxError");
    assert_eq!(assert_failure("1 / 0").kind(), "DivisionByZero");
    assert_eq!(assert_failure("-2147483647 - 2").kind(), "EvalError");
}

#[test]
fn missing_factor_points_past_trailing_whitespace() {
    let err = assert_failure("2 + ");
    assert_eq!(err.to_string(), "expected factor at line 0, col 4 in file test");
    assert_eq!(assert_failure("2 +").position().map(|p| p.column), Some(3));
}

#[test]
fn source_name_appears_in_positions() {
    let err = run("2 $ 3", "stdin").unwrap_err();
    assert_eq!(err.to_string(), "illegal character '$' at line 0, col 3 in file stdin");
    assert_eq!(err.position().map(|p| p.column), Some(3));
}

#[test]
fn float_division_policy_is_configurable() {
    let strict = Config::default();
    assert!(run_with_config("1.0 / 0", "test", &strict).is_err());

    let ieee = Config::default().with_float_division(FloatDivision::Ieee);
    assert_eq!(run_with_config("-1 / 0.0", "test", &ieee).unwrap(), Value::Floating(f64::NEG_INFINITY));
    assert!(run_with_config("1 / 0", "test", &ieee).is_err());
}

#[test]
fn deep_nesting_is_rejected_not_overflowed() {
    let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert!(matches!(assert_failure(&deep), Error::Parse(ParseError::NestingTooDeep { .. })));

    let signs = format!("{}1", "-".repeat(100_000));
    assert!(matches!(assert_failure(&signs), Error::Parse(ParseError::NestingTooDeep { .. })));

    let at_limit = format!("{}1{}", "(".repeat(DEFAULT_MAX_DEPTH), ")".repeat(DEFAULT_MAX_DEPTH));
    let handle = std::thread::Builder::new().stack_size(2 << 20)
                                            .spawn(move || run(&at_limit, "thread"))
                                            .unwrap();
    assert_eq!(handle.join().unwrap().unwrap(), Value::Integer(1));

    let config = Config::default().with_max_depth(4);
    assert!(run_with_config("(((((1)))))", "test", &config).is_err());
    assert_eq!(run_with_config("((((1))))", "test", &config).unwrap(), Value::Integer(1));
}

#[test]
fn long_flat_chains_are_bounded_too() {
    let chain = vec!["1"; 10_000].join(" + ");
    assert!(matches!(assert_failure(&chain), Error::Parse(ParseError::NestingTooDeep { .. })));

    let chain = vec!["1"; 100].join(" + ");
    assert_value(&chain, Value::Integer(100));
}

#[test]
fn parsing_is_deterministic() {
    let source = "-(1 + 2.5) * +3 / (4 - -5)";
    let first = parse_source(source, "test", &Config::default()).unwrap();
    let second = parse_source(source, "test", &Config::default()).unwrap();
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(run(source, "test").unwrap(), run(source, "test").unwrap());
}

#[test]
fn runs_are_independent_across_threads() {
    let handles: Vec<_> = (0..4).map(|i| std::thread::spawn(move || run(&format!("{i} * 2"), "thread")))
                                .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = i32::try_from(i).unwrap() * 2;
        assert_eq!(handle.join().unwrap().unwrap(), Value::Integer(expected));
    }
}
