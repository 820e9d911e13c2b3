use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::{Environment, Function, NativeCallable},
        evaluator::core::EvalResult,
        value::core::{Value, ValueKind},
    },
};

/// A host type that can be read out of a runtime value.
///
/// Conversion is exact: an `Int` is never widened to `f64` and a `Double` is
/// never truncated to `i32`. Reference boxes are not read through either, so
/// a boxed host variable passed as an argument is a `TypeMismatch` even
/// though arithmetic on it works.
pub trait FromValue: Sized {
    /// The value kind this type accepts.
    const KIND: ValueKind;

    /// Extracts the host value, or `None` if the kind does not match.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for i32 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl FromValue for f64 {
    const KIND: ValueKind = ValueKind::Double;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_double()
    }
}

/// A host type that can be returned to a script.
pub trait IntoValue {
    /// Wraps the host value.
    fn into_value(self) -> Value;
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Double(self)
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::None
    }
}

/// A host callable that can be bound into an environment.
///
/// Implemented for every `Fn` of up to six parameters whose parameter types
/// implement [`FromValue`] and whose return type implements [`IntoValue`].
/// `Args` is the tuple of parameter types; it only disambiguates the
/// implementations.
pub trait NativeFunction<Args>: 'static {
    /// Number of parameters the callable takes.
    const ARITY: usize;

    /// Reads the arguments off `env.parameter_stack`, invokes the callable
    /// and wraps its result.
    ///
    /// # Errors
    /// - `RuntimeError::ArgumentCountMismatch` if the stack does not hold
    ///   exactly `ARITY` values.
    /// - `RuntimeError::TypeMismatch` if an argument has the wrong kind.
    fn invoke(&self, env: &mut Environment, name: &str, line: usize) -> EvalResult<Value>;
}

/// Reads one argument, checking its kind exactly.
fn argument<T: FromValue>(value: &Value, index: usize, name: &str, line: usize) -> EvalResult<T> {
    T::from_value(value).ok_or_else(|| {
        let details = format!("argument {} of '{name}' must be {}, found {}",
                              index + 1,
                              T::KIND,
                              value.kind());
        RuntimeError::TypeMismatch { details, line }
    })
}

/// Implements [`NativeFunction`] for one arity.
///
/// The arguments sit on the stack in call order, so the last parameter is the
/// top of the stack.
macro_rules! impl_native_function {
    ($arity:literal $(, $param:ident $arg:ident => $index:literal)*) => {
        impl<Func, Ret $(, $param)*> NativeFunction<($($param,)*)> for Func
            where Func: Fn($($param),*) -> Ret + 'static,
                  Ret: IntoValue
                  $(, $param: FromValue)*
        {
            const ARITY: usize = $arity;

            #[allow(unused_variables)]
            fn invoke(&self, env: &mut Environment, name: &str, line: usize) -> EvalResult<Value> {
                let found = env.parameter_stack.len();
                if found != Self::ARITY {
                    return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                     expected: Self::ARITY,
                                                                     found,
                                                                     line });
                }

                let stack = std::mem::take(&mut env.parameter_stack);
                $(let $arg = argument::<$param>(&stack[$index], $index, name, line)?;)*

                Ok(self($($arg),*).into_value())
            }
        }
    };
}

impl_native_function!(0);
impl_native_function!(1, A a => 0);
impl_native_function!(2, A a => 0, B b => 1);
impl_native_function!(3, A a => 0, B b => 1, C c => 2);
impl_native_function!(4, A a => 0, B b => 1, C c => 2, D d => 3);
impl_native_function!(5, A a => 0, B b => 1, C c => 2, D d => 3, E e => 4);
impl_native_function!(6, A a => 0, B b => 1, C c => 2, D d => 3, E e => 4, G g => 5);

/// Registers a host callable under `name`, replacing any prior function of
/// that name.
///
/// # Example
/// ```
/// use bean::interpreter::{binding::bind, environment::Environment};
///
/// let mut env = Environment::new();
/// bind(&mut env, "add_two_ints", |a: i32, b: i32| a + b);
///
/// assert!(env.is_function("add_two_ints"));
/// ```
pub fn bind<F, Args>(env: &mut Environment, name: impl Into<String>, function: F)
    where F: NativeFunction<Args>,
          Args: 'static
{
    let name = name.into();
    let label = name.clone();
    let callable: NativeCallable = Rc::new(move |env: &mut Environment, line: usize| {
                                               function.invoke(env, &label, line)
                                           });

    tracing::debug!(%name, arity = F::ARITY, "binding native function");
    env.define_function(name, Function::Native(callable));
}
