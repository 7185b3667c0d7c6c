use std::fs::{self};

use engcalc::{Environment, ErrorKind, Value, evaluate, parse, parse_number};
use walkdir::WalkDir;

/// Every `tests/cases/*.calc` line is `query => expected`, where `expected`
/// is the rendered value or `!Kind` for an expected error kind. `x` is bound
/// to 4.
#[test]
fn case_files_evaluate_as_expected() {
    let mut environment = Environment::new();
    environment.insert("x".to_string(), Value::Integer(4));

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
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (query, expected) = line.rsplit_once(" => ")
                                        .unwrap_or_else(|| panic!("{path:?}:{}: malformed case", i + 1));
            count += 1;

            let result = evaluate(query, &environment);
            match expected.strip_prefix('!') {
                Some(kind) => match result {
                    Ok((value, _)) => {
                        panic!("{path:?}:{}: '{query}' evaluated to {value}, expected {kind}",
                               i + 1)
                    },
                    Err(e) => assert_eq!(e.kind().to_string(),
                                         kind,
                                         "{path:?}:{}: '{query}' failed with {e}",
                                         i + 1),
                },
                None => match result {
                    Ok((value, _)) => assert_eq!(value.to_string(),
                                                 expected,
                                                 "{path:?}:{}: '{query}'",
                                                 i + 1),
                    Err(e) => panic!("{path:?}:{}: '{query}' failed: {e}", i + 1),
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn eval(query: &str) -> Value {
    let (value, _) =
        evaluate(query, &Environment::new()).unwrap_or_else(|e| panic!("'{query}' failed: {e}"));
    value
}

fn eval_real(query: &str) -> f64 {
    match eval(query) {
        Value::Real(r) => r,
        Value::Integer(n) => n as f64,
        other => panic!("'{query}' produced {other}, expected a real number"),
    }
}

fn assert_close(query: &str, expected: f64) {
    let actual = eval_real(query);
    assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "'{query}' evaluated to {actual}, expected {expected}");
}

fn assert_kind(query: &str, kind: ErrorKind) {
    match evaluate(query, &Environment::new()) {
        Ok((value, _)) => panic!("'{query}' evaluated to {value}, expected {kind}"),
        Err(e) => assert_eq!(e.kind(), kind, "'{query}' failed with {e}"),
    }
}

#[test]
fn percentages_depend_on_context() {
    assert_close("11+2%", 11.22);
    assert_close("11*2%", 0.22);
    assert_close("2%+3", 3.02);
    assert_close("(11+2)%", 0.13);
}

#[test]
fn engineering_suffixes_scale_literals() {
    assert_close("3.4n", 3.4e-9);
    assert_close("10u", 1e-5);
    assert_close("5f * 1G", 5e-6);
    assert_close("1p", 1e-12);
}

#[test]
fn integral_results_stay_integers() {
    assert_eq!(eval("2+3"), Value::Integer(5));
    assert_eq!(eval("2**10"), Value::Integer(1024));
    assert_eq!(eval("20!"), Value::Integer(2_432_902_008_176_640_000));
    assert!(matches!(eval("21!"), Value::Real(_)));
    assert!(matches!(eval("4/2"), Value::Real(_)));
}

#[test]
fn logarithms() {
    assert_close("log(8, 2)", 3.0);
    assert_close("log(e)", 1.0);
    assert_close("log10(1000)", 3.0);
    assert!(matches!(eval("log(-8, 2)"), Value::Complex(_)));
    assert_kind("log(8, 1)", ErrorKind::Domain);
}

#[test]
fn gamma_extends_the_factorial() {
    assert_close("gamma(5)", 24.0);
    assert_close("gamma(0.5)**2", std::f64::consts::PI);
    assert_kind("gamma(-2)", ErrorKind::Domain);
}

#[test]
fn parallel_matches_the_closed_form() {
    let (a, b, c) = (3.3, 4.7, 10.0);

    assert_eq!(eval("3.3 // 4.7"), Value::Real(a * b / (a + b)));
    assert_eq!(eval("3.3 // 4.7 // 10.0"),
               Value::Real(a * b * c / (a * b + a * c + b * c)));
}

#[test]
fn parallel_chains_flatten_into_one_node() {
    assert_eq!(parse("1 // 2 // 3").unwrap().to_string(), "(1 // 2 // 3)");
    assert_eq!(parse("(1 // 2) // 3").unwrap().to_string(), "((1 // 2) // 3)");
    assert_eq!(parse("1 // 2 * 3").unwrap().to_string(), "((1 // 2) * 3)");
}

#[test]
fn variables_come_from_the_environment() {
    let mut environment = Environment::new();
    environment.insert("a".to_string(), Value::Integer(5));
    environment.insert("b".to_string(), Value::Integer(2));
    environment.insert("x".to_string(), Value::Real(1.5));

    let (value, canonical) = evaluate("a+b", &environment).unwrap();
    assert_eq!(value, Value::Integer(7));
    assert_eq!(canonical, "(a + b)");

    let (value, canonical) = evaluate("2x", &environment).unwrap();
    assert_eq!(value, Value::Real(3.0));
    assert_eq!(canonical, "(2 * x)");

    assert_eq!(environment.len(), 3);
    assert_kind("a+b", ErrorKind::Name);
}

#[test]
fn canonical_rendering() {
    let cases = [("2 + 3 * 4", "(2 + (3 * 4))"),
                 ("1+5&1", "(1 + (5 & 1))"),
                 ("6 xor 3", "(6 xor 3)"),
                 ("-2^2", "(-(2 ** 2))"),
                 ("5!", "factorial(5)"),
                 ("2%+3", "((2%) + 3)"),
                 ("50-10%", "(50 * (1 - (10%)))"),
                 ("1k", "1000.0"),
                 ("4j", "4.0j"),
                 ("2pi", "(2 * 3.141592653589793)"),
                 ("max(1, 2)", "max(1, 2)")];

    for (query, expected) in cases {
        assert_eq!(parse(query).unwrap().to_string(), expected, "{query}");
    }
}

#[test]
fn canonical_rendering_parses_back_to_the_same_tree() {
    let queries = ["sin(2*pi*4k)! + 3M + 5//6",
                   "3+11+2%",
                   "11*2%",
                   "200/50%",
                   "(2%)*3",
                   "1 // 2 // 3 + (4 // 5)",
                   "5 xor 1 & 3",
                   "-x ** -2",
                   "(1+2j) * 3.4n",
                   "round(x, -2) % 7",
                   "1e-20 + 1e300",
                   "pi() + e"];

    for query in queries {
        let expr = parse(query).unwrap();
        let rendered = expr.to_string();
        assert_eq!(parse(&rendered).unwrap(), expr, "{query} rendered as {rendered}");
    }
}

#[test]
fn empty_queries_pass_through() {
    for query in ["", "   "] {
        assert_eq!(evaluate(query, &Environment::new()).unwrap(),
                   (Value::Text(String::new()), String::new()));
    }
}

#[test]
fn errors_name_the_failing_fragment() {
    let err = evaluate("1 + 2/(3-3)", &Environment::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert_eq!(err.to_string(), "DomainError: Division by zero in (2 / (3 - 3)).");

    let err = evaluate("max()", &Environment::new()).unwrap_err();
    assert_eq!(err.to_string(),
               "ArityError: Function 'max' takes at least 1 argument(s), but 0 were given.");
}

#[test]
fn numbers_parse_like_literals() {
    assert_eq!(parse_number("42").unwrap(), Value::Integer(42));
    assert_eq!(parse_number("2.5e3").unwrap(), Value::Real(2500.0));

    let (value, _) = evaluate("(1-2j) * 2", &Environment::new()).unwrap();
    assert_eq!(parse_number(&value.to_string()).unwrap(), value);

    assert_eq!(parse_number("2+").unwrap_err().kind(), ErrorKind::Syntax);
}
