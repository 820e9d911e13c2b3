use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, Function, NativeCallable},
        evaluator::core::EvalResult,
        value::core::Value,
    },
};

impl Environment {
    /// Calls the function registered under `name`.
    ///
    /// Script functions run their body against this same environment; no
    /// frame is pushed, so the body reads and writes the caller's variables.
    /// Host functions receive their evaluated arguments through the parameter
    /// stack.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedFunction` if nothing callable is registered
    ///   under `name`.
    /// - `RuntimeError::ArgumentCountMismatch` if a script function is given
    ///   arguments.
    /// - `RuntimeError::RecursionLimit` if script calls nest too deeply.
    /// - Any error raised by the arguments or the callee.
    pub fn call_function(&mut self,
                         name: &str,
                         arguments: &[Node],
                         line: usize)
                         -> EvalResult<Value> {
        match self.function(name).cloned() {
            Some(Function::Script(body)) => self.call_script(name, &body, arguments, line),
            Some(Function::Native(callable)) => self.call_native(name, &callable, arguments, line),
            Some(Function::Declared) | None => {
                Err(RuntimeError::UndefinedFunction { name: name.to_string(),
                                                      line })
            },
        }
    }

    fn call_script(&mut self,
                   name: &str,
                   body: &Node,
                   arguments: &[Node],
                   line: usize)
                   -> EvalResult<Value> {
        if !arguments.is_empty() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: 0,
                                                             found: arguments.len(),
                                                             line });
        }

        if !self.enter_call() {
            return Err(RuntimeError::RecursionLimit { name: name.to_string(),
                                                      limit: self.max_call_depth(),
                                                      line });
        }

        tracing::trace!(name, depth = self.call_depth(), "calling script function");
        let result = body.eval(self);
        self.leave_call();
        result
    }

    fn call_native(&mut self,
                   name: &str,
                   callable: &NativeCallable,
                   arguments: &[Node],
                   line: usize)
                   -> EvalResult<Value> {
        // Arguments may contain host calls of their own, which reset the stack.
        let values = arguments.iter()
                              .map(|argument| argument.eval(self))
                              .collect::<EvalResult<Vec<_>>>()?;

        tracing::debug!(name, arguments = values.len(), "calling native function");

        self.parameter_stack.clear();
        self.parameter_stack.extend(values);
        let result = callable(self, line);
        self.parameter_stack.clear();
        result
    }
}
