use std::{fmt, rc::Rc};

use crate::interpreter::lexer::TokenKind;

/// JSON rendering of syntax trees.
pub mod json;

/// An arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Exponentiation (`^` or `pow`).
    Pow,
}

impl BinaryOperator {
    /// Maps an operator token to its operator, if it is one.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Caret | TokenKind::Pow => Some(Self::Pow),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                        Self::Pow => "^",
                    })
    }
}

/// A node of the syntax tree.
///
/// Every node records the source line it was built from. Nodes are immutable
/// once the parser returns them. Function bodies are shared through an `Rc`
/// so the environment can keep them alive after the tree that defined them
/// is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An integer literal, kept as its source text.
    IntLiteral {
        /// The literal text.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A floating literal, kept as its source text.
    DoubleLiteral {
        /// The literal text.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A read of a variable.
    VariableRef {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `var NAME = expr`.
    DeclareAndAssign {
        /// Name being declared.
        name:  String,
        /// Initial value.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `NAME = expr` for an already declared name.
    Assign {
        /// Name being assigned.
        name:  String,
        /// New value.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `fun NAME { body }`.
    FunctionDef {
        /// Name of the function.
        name: String,
        /// The function body.
        body: Rc<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `NAME(args...)`.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Argument expressions, in call order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `return expr`. Evaluates to its value; it does not leave the
    /// enclosing body early.
    Return {
        /// The returned expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A sequence of statements. Evaluates to the value of the last one.
    StatementList {
        /// The statements, in source order.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Node {
    /// Returns the source line this node was built from.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IntLiteral { line, .. }
            | Self::DoubleLiteral { line, .. }
            | Self::VariableRef { line, .. }
            | Self::DeclareAndAssign { line, .. }
            | Self::Assign { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionDef { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::Return { line, .. }
            | Self::StatementList { line, .. } => *line,
        }
    }

    /// Returns the name of the node type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::IntLiteral { .. } => "IntLiteral",
            Self::DoubleLiteral { .. } => "DoubleLiteral",
            Self::VariableRef { .. } => "VariableRef",
            Self::DeclareAndAssign { .. } => "DeclareAndAssign",
            Self::Assign { .. } => "Assign",
            Self::BinaryOp { .. } => "BinaryOp",
            Self::FunctionDef { .. } => "FunctionDef",
            Self::FunctionCall { .. } => "FunctionCall",
            Self::Return { .. } => "Return",
            Self::StatementList { .. } => "StatementList",
        }
    }

    /// Returns the identifier-like text of the node: a literal's text, a
    /// variable or function name, or an operator symbol.
    #[must_use]
    pub fn identifier(&self) -> Option<String> {
        match self {
            Self::IntLiteral { text, .. } | Self::DoubleLiteral { text, .. } => Some(text.clone()),
            Self::VariableRef { name, .. }
            | Self::DeclareAndAssign { name, .. }
            | Self::Assign { name, .. }
            | Self::FunctionDef { name, .. }
            | Self::FunctionCall { name, .. } => Some(name.clone()),
            Self::BinaryOp { op, .. } => Some(op.to_string()),
            Self::Return { .. } | Self::StatementList { .. } => None,
        }
    }

    /// Returns the direct children of the node, in evaluation order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::IntLiteral { .. } | Self::DoubleLiteral { .. } | Self::VariableRef { .. } => {
                Vec::new()
            },
            Self::DeclareAndAssign { value, .. }
            | Self::Assign { value, .. }
            | Self::Return { value, .. } => vec![value.as_ref()],
            Self::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Self::FunctionDef { body, .. } => vec![body.as_ref()],
            Self::FunctionCall { arguments, .. } => arguments.iter().collect(),
            Self::StatementList { statements, .. } => statements.iter().collect(),
        }
    }
}
