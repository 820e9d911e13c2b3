use std::{cell::RefCell, rc::Rc};

use bean::{Engine, Error, Value, error::RuntimeError};
use pretty_assertions::assert_eq;

#[test]
fn two_ints() {
    let mut engine = Engine::new();
    engine.bind("add_two_ints", |a: i32, b: i32| a + b);

    assert_eq!(engine.evaluate("add_two_ints(1,2)").unwrap(), Value::Int(3));
}

#[test]
fn int_and_double() {
    let mut engine = Engine::new();
    engine.bind("add_int_double", |a: i32, b: f64| f64::from(a) + b);

    assert_eq!(engine.evaluate("add_int_double(1, 2.1)").unwrap(), Value::Double(3.1));
}

#[test]
fn arguments_are_expressions() {
    let mut engine = Engine::new();
    engine.bind("sub", |a: i32, b: i32| a - b);

    assert_eq!(engine.evaluate("var x = 10; sub(x * 2, (1 + 2)) + 1").unwrap(), Value::Int(18));
    assert_eq!(engine.evaluate("sub(sub(9, 1) , 3)").unwrap_err().to_string(),
               "Error on line 1: Unmatched parenthesis.");
}

#[test]
fn nested_single_argument_calls() {
    let mut engine = Engine::new();
    engine.bind("double", |a: i32| a * 2);

    assert_eq!(engine.evaluate("double(double(double(1)))").unwrap(), Value::Int(8));
}

#[test]
fn void_functions_see_their_arguments() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();

    let mut engine = Engine::new();
    engine.bind("record", move |a: i32, b: f64| sink.borrow_mut().push((a, b)));

    assert_eq!(engine.evaluate("record(1, 0.5); record(2, 1.5)").unwrap(), Value::None);
    assert_eq!(*seen.borrow(), [(1, 0.5), (2, 1.5)]);
    assert!(engine.environment().parameter_stack.is_empty());
}

#[test]
fn no_implicit_conversion_at_the_boundary() {
    let mut engine = Engine::new();
    engine.bind("half", |a: f64| a / 2.0);

    let err = engine.evaluate("half(3)").unwrap_err();
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { line: 1, .. })));
    assert_eq!(engine.evaluate("half(3.0)").unwrap(), Value::Double(1.5));
}

#[test]
fn argument_count_must_match() {
    let mut engine = Engine::new();
    engine.bind("pair", |a: i32, b: i32| a * b);

    let err = engine.evaluate("\npair(1)").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 2: Function 'pair' expects 2 argument(s) but got 1.");
    assert!(engine.environment().parameter_stack.is_empty());
}

#[test]
fn rebinding_replaces() {
    let mut engine = Engine::new();
    engine.bind("f", || 1);
    engine.bind("f", || 2.5);

    assert_eq!(engine.evaluate("f()").unwrap(), Value::Double(2.5));
    assert_eq!(engine.function_count(), 1);
}

#[test]
fn script_definitions_replace_bindings() {
    let mut engine = Engine::new();
    engine.bind("f", || 1);

    assert_eq!(engine.evaluate("fun f { 7 } f()").unwrap(), Value::Int(7));
}

#[test]
fn host_references_observe_script_writes() {
    let mut engine = Engine::new();
    let boxed = Value::reference(Value::Int(1));
    engine.set_variable("shared", boxed.clone());

    engine.evaluate("shared = shared * 10").unwrap();
    assert_eq!(boxed.get(), Value::Int(10));
    assert_eq!(engine.evaluate("shared + 1").unwrap(), Value::Int(11));
}

#[test]
fn self_assignment_through_a_reference() {
    let mut engine = Engine::new();
    let boxed = Value::reference(Value::Int(1));
    engine.set_variable("x", boxed.clone());

    engine.evaluate("x = x").unwrap();
    assert_eq!(boxed.get(), Value::Int(1));
    assert_eq!(engine.evaluate("x + 1").unwrap(), Value::Int(2));
}

#[test]
fn aliased_reference_assigned_back() {
    let mut engine = Engine::new();
    let boxed = Value::reference(Value::Int(1));
    engine.set_variable("x", boxed.clone());

    assert_eq!(engine.evaluate("var y = x; x = y; x + 1").unwrap(), Value::Int(2));
    assert_eq!(boxed.to_string(), "1");

    engine.evaluate("y = 5").unwrap();
    assert_eq!(boxed.get(), Value::Int(5));
}

#[test]
fn references_are_not_unwrapped_for_host_arguments() {
    let mut engine = Engine::new();
    engine.bind("double_it", |a: i32| a * 2);
    engine.set_variable("shared", Value::reference(Value::Int(4)));

    assert_eq!(engine.evaluate("shared + 0").unwrap(), Value::Int(4));

    let err = engine.evaluate("double_it(shared)").unwrap_err();
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(err.to_string().contains("argument 1 of 'double_it' must be int, found reference"));
}

#[test]
fn native_handles_pass_through() {
    struct Window {
        id: u32,
    }

    let mut engine = Engine::new();
    engine.set_variable("window", Value::native(Window { id: 7 }));

    let value = engine.evaluate("window").unwrap();
    assert_eq!(value.downcast_native::<Window>().map(|w| w.id), Some(7));
    assert!(engine.evaluate("window + 1").is_err());
}

#[test]
fn six_parameters() {
    let mut engine = Engine::new();
    engine.bind("mix", |a: i32, b: f64, c: i32, d: f64, e: i32, f: f64| {
                    f64::from(a + c + e) * (b + d + f)
                });

    assert_eq!(engine.evaluate("mix(1, 0.5, 2, 0.25, 3, 0.25)").unwrap(), Value::Double(6.0));
}
