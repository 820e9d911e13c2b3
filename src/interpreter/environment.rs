use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Node,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Default limit on nested script function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// The uniform calling convention of host functions.
///
/// The callable reads its arguments from [`Environment::parameter_stack`] and
/// receives the line of the call for error reporting.
pub type NativeCallable = Rc<dyn Fn(&mut Environment, usize) -> EvalResult<Value>>;

/// An entry of the function table.
#[derive(Clone)]
pub enum Function {
    /// The name was seen by the parser but the definition has not been
    /// evaluated yet.
    Declared,
    /// A script function and its shared body.
    Script(Rc<Node>),
    /// A bound host function.
    Native(NativeCallable),
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared => f.write_str("Declared"),
            Self::Script(body) => f.debug_tuple("Script").field(body).finish(),
            Self::Native(_) => f.write_str("Native(..)"),
        }
    }
}

/// The mutable interpreter state shared by every evaluation in one engine.
///
/// There is a single flat variable table. Function bodies read and write the
/// same table as their caller; no frame is pushed for a call.
///
/// The parser registers names here as it sees declarations so later
/// statements can refer to them; the evaluator fills in their values.
#[derive(Clone)]
pub struct Environment {
    /// Global variables.
    pub variables:       HashMap<String, Value>,
    /// Script and host functions.
    pub functions:       HashMap<String, Function>,
    /// Scratch space for marshalling arguments into a host call. Empty
    /// outside of a host call.
    pub parameter_stack: Vec<Value>,
    call_depth:          usize,
    max_call_depth:      usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
         .field("variables", &self.variables)
         .field("functions", &self.functions)
         .field("call_depth", &self.call_depth)
         .field("max_call_depth", &self.max_call_depth)
         .finish_non_exhaustive()
    }
}

impl Environment {
    /// Creates an empty environment with the default call depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_call_depth(DEFAULT_MAX_CALL_DEPTH)
    }

    /// Creates an empty environment that allows at most `max_call_depth`
    /// nested script function calls.
    #[must_use]
    pub fn with_max_call_depth(max_call_depth: usize) -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               parameter_stack: Vec::new(),
               call_depth: 0,
               max_call_depth }
    }

    /// Returns `true` if `name` is a known variable.
    #[must_use]
    pub fn is_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Returns `true` if `name` is a known function, defined or not.
    #[must_use]
    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Makes `name` known as a variable without changing an existing value.
    pub fn declare_variable(&mut self, name: &str) {
        if !self.is_variable(name) {
            self.variables.insert(name.to_string(), Value::None);
        }
    }

    /// Makes `name` known as a function without replacing an existing entry.
    pub fn declare_function(&mut self, name: &str) {
        if !self.is_function(name) {
            self.functions.insert(name.to_string(), Function::Declared);
        }
    }

    /// Returns the value of a variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Stores a variable, overwriting any prior value.
    pub fn set_variable(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Returns the function registered under `name`.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Registers a function, overwriting any prior entry.
    pub fn define_function(&mut self, name: impl Into<String>, function: Function) {
        let name = name.into();
        tracing::debug!(%name, ?function, "registering function");
        self.functions.insert(name, function);
    }

    /// Number of known variables.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of known functions.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Current number of nested script function calls.
    #[must_use]
    pub const fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// The configured limit on nested script function calls.
    #[must_use]
    pub const fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Enters a script function call.
    ///
    /// # Returns
    /// `false` if the call would exceed the limit; the depth is unchanged in
    /// that case.
    pub(crate) fn enter_call(&mut self) -> bool {
        if self.call_depth >= self.max_call_depth {
            return false;
        }
        self.call_depth += 1;
        true
    }

    /// Leaves a script function call.
    pub(crate) fn leave_call(&mut self) {
        self.call_depth = self.call_depth.saturating_sub(1);
    }
}
