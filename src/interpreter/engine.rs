use std::{fs, path::Path};

use crate::{
    ast::{Node, json},
    error::Error,
    interpreter::{
        binding::{NativeFunction, bind},
        environment::{DEFAULT_MAX_CALL_DEPTH, Environment},
        lexer::tokenize,
        parser::core::parse,
        value::core::Value,
    },
};

/// Reads a script file into memory.
///
/// # Errors
/// `Error::Io` carrying the path if the file cannot be read.
pub fn read_script(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(),
                                                          source })
}

/// Tunable limits of an [`Engine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum number of nested script function calls.
    pub max_call_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

/// The embedding entry point.
///
/// An engine owns one [`Environment`] for its whole lifetime. Every script
/// evaluated through it shares the same variables and functions, so a later
/// script sees what an earlier one declared.
///
/// # Example
/// ```
/// use bean::{Engine, interpreter::value::core::Value};
///
/// let mut engine = Engine::new();
/// engine.bind("add_int_double", |a: i32, b: f64| f64::from(a) + b);
///
/// assert_eq!(engine.evaluate("add_int_double(1, 2.1)").unwrap(), Value::Double(3.1));
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    env: Environment,
}

impl Engine {
    /// Creates an engine with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Creates an engine with the given options.
    #[must_use]
    pub fn with_options(options: EngineOptions) -> Self {
        Self { env: Environment::with_max_call_depth(options.max_call_depth) }
    }

    /// Tokenizes, parses and evaluates `source`.
    ///
    /// # Returns
    /// The value of the last statement.
    ///
    /// # Errors
    /// The first parse or runtime error. Names registered before a parse
    /// error stay registered.
    pub fn evaluate(&mut self, source: &str) -> Result<Value, Error> {
        let ast = self.parse(source)?;
        tracing::debug!(root = ast.type_name(), "evaluating script");
        Ok(ast.eval(&mut self.env)?)
    }

    /// Reads a script from disk and evaluates it.
    ///
    /// # Errors
    /// `Error::Io` if the file cannot be read, otherwise as
    /// [`evaluate`](Self::evaluate).
    pub fn evaluate_file(&mut self, path: impl AsRef<Path>) -> Result<Value, Error> {
        let source = read_script(path)?;
        self.evaluate(&source)
    }

    /// Parses `source` without evaluating it.
    ///
    /// Declared names are registered exactly as they would be by
    /// [`evaluate`](Self::evaluate).
    pub fn parse(&mut self, source: &str) -> Result<Node, Error> {
        Ok(parse(tokenize(source), &mut self.env)?)
    }

    /// Parses `source` against a copy of the environment and renders the tree
    /// as JSON. The engine itself is left untouched.
    pub fn describe(&self, source: &str) -> Result<serde_json::Value, Error> {
        let mut scratch = self.env.clone();
        let ast = parse(tokenize(source), &mut scratch)?;
        Ok(json::to_json(&ast))
    }

    /// Parses and evaluates `source`, rendering each top-level statement as
    /// JSON together with the value it produced.
    ///
    /// Unlike [`describe`](Self::describe) this runs the script against the
    /// engine's own environment.
    pub fn describe_evaluated(&mut self, source: &str) -> Result<serde_json::Value, Error> {
        let ast = self.parse(source)?;
        Ok(json::describe_evaluated(&ast, &mut self.env)?)
    }

    /// Exposes a host function to scripts under `name`.
    ///
    /// Parameters may be `i32` or `f64`; the return type may be `i32`, `f64`
    /// or `()`. Binding a name again replaces the previous function.
    pub fn bind<F, Args>(&mut self, name: impl Into<String>, function: F)
        where F: NativeFunction<Args>,
              Args: 'static
    {
        bind(&mut self.env, name, function);
    }

    /// Returns the value of a variable, if it is known.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<Value> {
        self.env.variable(name).cloned()
    }

    /// Creates or overwrites a variable from the host side.
    pub fn set_variable(&mut self, name: impl Into<String>, value: Value) {
        self.env.set_variable(name, value);
    }

    /// Number of registered functions, including ones only declared.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.env.function_count()
    }

    /// Number of known variables.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.env.variable_count()
    }

    /// Read access to the underlying environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }
}
