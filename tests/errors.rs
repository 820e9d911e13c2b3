use bean::{
    Engine, EngineOptions, Error, Value,
    error::{ParseError, RuntimeError},
    evaluate,
    interpreter::engine::read_script,
};
use pretty_assertions::assert_eq;

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error from {src:?}, got {other:?}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match evaluate(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("expected a runtime error from {src:?}, got {other:?}"),
    }
}

#[test]
fn undefined_names() {
    assert_eq!(runtime_error("var x = 1;\ny = 2;"),
               RuntimeError::UndefinedVariable { name: "y".into(),
                                                 line: 2, });
    assert_eq!(parse_error("missing()"),
               ParseError::UnresolvedSymbol { symbol: "missing".into(),
                                              line:   1, });
    assert_eq!(parse_error("1 +\n\nghost"),
               ParseError::UnresolvedSymbol { symbol: "ghost".into(),
                                              line:   3, });
}

#[test]
fn malformed_forms() {
    assert_eq!(parse_error("fun f\nreturn 1"), ParseError::ExpectedOpeningBrace { line: 1 });
    assert_eq!(parse_error("fun f { 1"), ParseError::ExpectedClosingBrace { line: 1 });
    assert_eq!(parse_error("var x : 1"), ParseError::ExpectedEquals { line: 1 });
    assert_eq!(parse_error("var fun = 1"),
               ParseError::IdentifierReserved { name: "fun".into(),
                                                line: 1, });
    assert_eq!(parse_error("1 2"),
               ParseError::UnexpectedTrailingTokens { token: "symbol(2)".into(),
                                                      line:  1, });
    assert_eq!(parse_error("99999999999"), ParseError::LiteralTooLarge { line: 1 });
    assert_eq!(parse_error("return"), ParseError::UnexpectedEndOfInput { line: 1 });
}

#[test]
fn kind_mismatches() {
    let err = runtime_error("fun nothing { var unused = 1 } nothing() + 1");
    assert!(matches!(err, RuntimeError::TypeMismatch { line: 1, .. }));
    assert_eq!(err.to_string(), "Error on line 1: Type mismatch: cannot apply '+' to none and int.");
}

#[test]
fn integer_overflow_is_an_error() {
    assert_eq!(runtime_error("2147483647 + 1"), RuntimeError::Overflow { line: 1 });
    assert_eq!(runtime_error("65536 * 65536"), RuntimeError::Overflow { line: 1 });
    assert_eq!(evaluate("2147483647 + 1.0").unwrap(), Value::Double(2_147_483_648.0));
}

#[test]
fn script_functions_take_no_arguments() {
    assert_eq!(runtime_error("fun f { 1 }\nf(2, 3)"),
               RuntimeError::ArgumentCountMismatch { name:     "f".into(),
                                                     expected: 0,
                                                     found:    2,
                                                     line:     2, });
}

#[test]
fn runaway_recursion_is_bounded() {
    let mut engine = Engine::with_options(EngineOptions { max_call_depth: 16 });

    let err = engine.evaluate("fun forever { forever() } forever()").unwrap_err();
    assert_eq!(err.to_string(),
               "Error on line 1: Call to 'forever' exceeds the maximum call depth of 16.");
    assert_eq!(engine.environment().call_depth(), 0);
}

#[test]
fn failed_parses_keep_their_declarations() {
    let mut engine = Engine::new();

    assert!(engine.evaluate("fun later { 1 } var y = 2; (").is_err());
    assert_eq!(engine.function_count(), 0);

    assert!(engine.evaluate("fun later { 1 } var y = 2; 1 +").is_err());
    assert_eq!(engine.function_count(), 1);
    assert_eq!(engine.get_variable("y"), Some(Value::None));

    let err = engine.evaluate("later()").unwrap_err();
    assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedFunction { .. })));
}

#[test]
fn missing_files() {
    let err = Engine::new().evaluate_file("demos/does-not-exist.bean").unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.line(), None);
    assert!(err.to_string().starts_with("Failed to read script file 'demos/does-not-exist.bean'"));
}

#[test]
fn reading_missing_scripts() {
    let err = read_script("demos/does-not-exist.bean").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));

    let source = read_script("demos/precedence.bean").unwrap();
    assert!(!source.is_empty());
}

#[test]
fn errors_report_their_stage() {
    let parse = evaluate("(").unwrap_err();
    let runtime = evaluate("y = 1").unwrap_err();

    assert!(parse.is_parse() && !parse.is_runtime());
    assert!(runtime.is_runtime() && !runtime.is_parse());
}
