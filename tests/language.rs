use bean::{Engine, Value, evaluate};
use pretty_assertions::assert_eq;

fn eval(src: &str) -> Value {
    evaluate(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_failure(src: &str) {
    if evaluate(src).is_ok() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
}

#[test]
fn integer_arithmetic_stays_integer() {
    assert_eq!(eval("1 + 2"), Value::Int(3));
    assert_eq!(eval("8 - 5"), Value::Int(3));
    assert_eq!(eval("7 * 9"), Value::Int(63));
    assert_eq!(eval("2 - 7"), Value::Int(-5));
}

#[test]
fn division_and_power_are_always_double() {
    assert_eq!(eval("10 / 2"), Value::Double(5.0));
    assert_eq!(eval("1 / 2"), Value::Double(0.5));
    assert_eq!(eval("2 ^ 10"), Value::Double(1024.0));
    assert_eq!(eval("3 pow 2"), Value::Double(9.0));
    assert_eq!(eval("3pow2"), Value::Double(9.0));
}

#[test]
fn mixed_operands_promote() {
    assert_eq!(eval("1 + 0.5"), Value::Double(1.5));
    assert_eq!(eval("2.5 * 2"), Value::Double(5.0));
    assert_eq!(eval("4 - .5"), Value::Double(3.5));
}

#[test]
fn precedence() {
    assert_eq!(eval("3 + 3 * 6"), Value::Int(21));
    assert_eq!(eval("7 + 4 * 9 - 1"), Value::Int(42));
    assert_eq!(eval("9 * 7 / 4"), Value::Double(15.75));
    assert_eq!(eval("2 * 3 ^ 2"), Value::Double(18.0));
    assert_eq!(eval("10 - 4 - 3"), Value::Int(3));
}

#[test]
fn power_groups_to_the_left() {
    assert_eq!(eval("2 ^ 3 ^ 2"), Value::Double(64.0));
}

#[test]
fn parentheses_are_transparent() {
    assert_eq!(eval("(((3)))"), eval("3"));
    assert_eq!(eval("(3 + 3) * 6"), Value::Int(36));
    assert_eq!(eval("2 * (3 + (4 - 1))"), Value::Int(12));
    assert_eq!(eval("{ 1 + 1 }"), Value::Int(2));
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(eval("   3   "), eval("3"));
    assert_eq!(eval(" 1  +3"), Value::Int(4));
    assert_eq!(eval("1\t*\r\n2"), Value::Int(2));
}

#[test]
fn variable_lifecycle() {
    let mut engine = Engine::new();
    engine.evaluate("var x = (1 + 2); var y = x + 1;").unwrap();

    assert_eq!(engine.variable_count(), 2);
    assert_eq!(engine.get_variable("x"), Some(Value::Int(3)));
    assert_eq!(engine.get_variable("y"), Some(Value::Int(4)));
}

#[test]
fn reassignment_overwrites() {
    assert_eq!(eval("var x = 1; x = x + 41; x"), Value::Int(42));
    assert_eq!(eval("var x = 1; var x = 2.5; x"), Value::Double(2.5));
}

#[test]
fn declarations_evaluate_to_none() {
    assert_eq!(eval("var x = 1"), Value::None);
    assert_eq!(eval("fun f { 1 }"), Value::None);
    assert_eq!(eval(""), Value::None);
}

#[test]
fn function_round_trip() {
    let mut engine = Engine::new();
    engine.evaluate("fun get_pi { return 3.14159265 }").unwrap();

    assert_eq!(engine.evaluate("get_pi()").unwrap(), Value::Double(3.141_592_65));
    assert_eq!(engine.function_count(), 1);
}

#[test]
fn function_bodies_share_the_global_table() {
    let src = "var counter = 0;
               fun bump { counter = counter + 1; return counter }
               bump(); bump(); bump()";
    assert_eq!(eval(src), Value::Int(3));
}

#[test]
fn return_does_not_stop_a_body() {
    let src = "var x = 1;
               fun f { return 10; x = 2 }
               f(); x";
    assert_eq!(eval(src), Value::Int(2));
}

#[test]
fn functions_in_expressions() {
    let src = "fun two { 2 }
               fun three { return two() + 1 }
               two() * three() + 1";
    assert_eq!(eval(src), Value::Int(7));
}

#[test]
fn statements_span_lines() {
    let src = "var a = 2;
               var b = a *
                   3;
               b";
    assert_eq!(eval(src), Value::Int(6));
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(eval("1 / 0"), Value::Double(f64::INFINITY));
    assert!(matches!(eval("0 / 0"), Value::Double(d) if d.is_nan()));
}

#[test]
fn evaluation_is_repeatable() {
    let src = "var x = 2; fun sq { x * x } sq() + 1 / 4";
    assert_eq!(eval(src), eval(src));
    assert_eq!(eval(src), Value::Double(4.25));
}

#[test]
fn engines_keep_state_between_scripts() {
    let mut engine = Engine::new();
    engine.evaluate("var base = 10").unwrap();
    engine.evaluate("fun twice { base * 2 }").unwrap();

    assert_eq!(engine.evaluate("twice() + base").unwrap(), Value::Int(30));
}

#[test]
fn failures() {
    assert_failure("y = 3");
    assert_failure("missing()");
    assert_failure("var x = ; 1");
    assert_failure("1 + ");
    assert_failure("(1 + 2");
    assert_failure("fun f { 1 } f(1)");
}

#[test]
fn describe_leaves_the_engine_untouched() {
    let engine = Engine::new();
    let tree = engine.describe("var x = 1 + 2").unwrap();

    assert_eq!(tree["type"], "DeclareAndAssign");
    assert_eq!(tree["identifier"], "x");
    assert_eq!(tree["children"][0]["identifier"], "+");
    assert_eq!(engine.variable_count(), 0);
}

#[test]
fn describe_evaluated_runs_against_the_engine() {
    let mut engine = Engine::new();
    let tree = engine.describe_evaluated("var x = 4; x * 2.5").unwrap();

    assert_eq!(tree[0]["value"], serde_json::Value::Null);
    assert_eq!(tree[1]["type"], "BinaryOp");
    assert_eq!(tree[1]["value"], 10.0);
    assert_eq!(engine.get_variable("x"), Some(Value::Int(4)));
}
