use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, Function},
        value::core::Value,
    },
    util::num::{NumericText, classify, parse_double_text},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Node {
    /// Evaluates the node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The environment is
    /// threaded through by reference and mutated by declarations,
    /// assignments and function definitions.
    ///
    /// # Parameters
    /// - `env`: The interpreter state to evaluate against.
    ///
    /// # Returns
    /// The value of the node. Declarations and definitions produce
    /// `Value::None`; a statement list produces the value of its last
    /// statement.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by this node or any of its children.
    ///
    /// # Example
    /// ```
    /// use bean::{
    ///     ast::{BinaryOperator, Node},
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let node = Node::BinaryOp { op:    BinaryOperator::Mul,
    ///                             left:  Box::new(Node::IntLiteral { text: "6".into(),
    ///                                                                line: 1, }),
    ///                             right: Box::new(Node::IntLiteral { text: "7".into(),
    ///                                                                line: 1, }),
    ///                             line:  1, };
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(node.eval(&mut env).unwrap(), Value::Int(42));
    /// ```
    pub fn eval(&self, env: &mut Environment) -> EvalResult<Value> {
        match self {
            Self::IntLiteral { text, line } => eval_int_literal(text, *line),
            Self::DoubleLiteral { text, line } => eval_double_literal(text, *line),
            Self::VariableRef { name, .. } => Ok(env.variable(name).cloned().unwrap_or_default()),
            Self::DeclareAndAssign { name, value, .. } => {
                let value = value.eval(env)?;
                env.set_variable(name.as_str(), value);
                Ok(Value::None)
            },
            Self::Assign { name, value, line } => {
                if !env.is_variable(name) {
                    return Err(RuntimeError::UndefinedVariable { name: name.clone(),
                                                                 line: *line, });
                }

                let value = value.eval(env)?;
                if let Some(slot) = env.variables.get_mut(name) {
                    if matches!(slot, Value::Reference(_)) {
                        slot.set(value, *line)?;
                    } else {
                        *slot = value;
                    }
                }
                Ok(Value::None)
            },
            Self::BinaryOp { op, left, right, line } => {
                let left = left.eval(env)?;
                let right = right.eval(env)?;
                left.apply(*op, &right, *line)
            },
            Self::FunctionDef { name, body, .. } => {
                env.define_function(name.as_str(), Function::Script(body.clone()));
                Ok(Value::None)
            },
            Self::FunctionCall { name, arguments, line } => {
                env.call_function(name, arguments, *line)
            },
            Self::Return { value, .. } => value.eval(env),
            Self::StatementList { statements, .. } => {
                let mut result = Value::None;
                for statement in statements {
                    tracing::trace!(kind = statement.type_name(),
                                    line = statement.line(),
                                    "evaluating statement");
                    result = statement.eval(env)?;
                }
                Ok(result)
            },
        }
    }
}

/// Converts the text of an integer literal.
fn eval_int_literal(text: &str, line: usize) -> EvalResult<Value> {
    match classify(text) {
        NumericText::Int(n) => Ok(Value::Int(n)),
        _ => Err(RuntimeError::TypeMismatch { details: format!("'{text}' is not an integer literal"),
                                              line }),
    }
}

/// Converts the text of a floating literal.
fn eval_double_literal(text: &str, line: usize) -> EvalResult<Value> {
    match parse_double_text(text) {
        Some(d) => Ok(Value::Double(d)),
        None => Err(RuntimeError::TypeMismatch { details: format!("'{text}' is not a floating literal"),
                                                 line }),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::ast::BinaryOperator;

    fn int(text: &str) -> Box<Node> {
        Box::new(Node::IntLiteral { text: text.into(),
                                    line: 1, })
    }

    #[test]
    fn statement_lists_yield_their_last_value() {
        let mut env = Environment::new();
        let node = Node::StatementList { statements: vec![Node::DeclareAndAssign { name:  "x".into(),
                                                                                   value: int("4"),
                                                                                   line:  1, },
                                                          Node::Return { value: int("5"),
                                                                         line:  1, },
                                                          Node::VariableRef { name: "x".into(),
                                                                              line: 1, }],
                                         line:       1, };

        assert_eq!(node.eval(&mut env), Ok(Value::Int(4)));
        assert_eq!(Node::StatementList { statements: Vec::new(),
                                         line:       1, }.eval(&mut env),
                   Ok(Value::None));
    }

    #[test]
    fn unknown_variables_read_as_none() {
        let mut env = Environment::new();
        let node = Node::VariableRef { name: "ghost".into(),
                                       line: 3, };

        assert_eq!(node.eval(&mut env), Ok(Value::None));
        assert_eq!(env.variable_count(), 0);
    }

    #[test]
    fn assignment_writes_through_references() {
        let mut env = Environment::new();
        let boxed = Value::reference(Value::Int(1));
        env.set_variable("x", boxed.clone());

        let node = Node::Assign { name:  "x".into(),
                                  value: Box::new(Node::BinaryOp { op:    BinaryOperator::Add,
                                                                   left:  Box::new(Node::VariableRef { name: "x".into(),
                                                                                                       line: 1, }),
                                                                   right: int("1"),
                                                                   line:  1, }),
                                  line:  1, };

        assert_eq!(node.eval(&mut env), Ok(Value::None));
        assert_eq!(boxed.get(), Value::Int(2));
    }

    #[test]
    fn assignment_requires_a_declaration() {
        let mut env = Environment::new();
        let node = Node::Assign { name:  "y".into(),
                                  value: int("2"),
                                  line:  2, };

        assert_eq!(node.eval(&mut env),
                   Err(RuntimeError::UndefinedVariable { name: "y".into(),
                                                         line: 2, }));
    }

    #[test]
    fn definitions_register_the_shared_body() {
        let mut env = Environment::new();
        let body = Rc::new(Node::DoubleLiteral { text: "2.5".into(),
                                                 line: 1, });
        let node = Node::FunctionDef { name: "f".into(),
                                       body: body.clone(),
                                       line: 1, };

        assert_eq!(node.eval(&mut env), Ok(Value::None));
        assert!(matches!(env.function("f"), Some(Function::Script(b)) if Rc::ptr_eq(b, &body)));
    }
}
