use std::fmt;

/// An abstract syntax tree (AST) node representing a Monna expression.
///
/// `Expression` covers everything that produces a value when evaluated, from
/// literals and identifiers to operator applications, conditionals, function
/// literals, and calls. The parser builds these nodes once; the evaluator
/// only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(String),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// A string literal. Holds the interior bytes of the quoted source text.
    StringLiteral(String),
    /// A boolean literal value: `true` or `false`.
    Boolean(bool),
    /// A prefix operator applied to an operand (e.g. `!ok` or `-x`).
    Prefix {
        /// The unary operator to apply.
        operator: UnaryOperator,
        /// The operand expression.
        right:    Box<Expression>,
    },
    /// A binary operation (addition, comparison, etc.).
    Infix {
        /// Left operand.
        left:     Box<Expression>,
        /// The operator.
        operator: BinaryOperator,
        /// Right operand.
        right:    Box<Expression>,
    },
    /// Conditional expression with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Box<Expression>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, when present.
        alternative: Option<BlockStatement>,
    },
    /// An anonymous function literal (e.g. `fn(x, y) { x + y }`).
    FunctionLiteral {
        /// Parameter names, in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
    },
    /// A call applying arguments to a callee expression.
    Call {
        /// The expression being called; an identifier or function literal.
        function:  Box<Expression>,
        /// Argument expressions, in source order.
        arguments: Vec<Expression>,
    },
}

/// A top-level unit of execution.
///
/// Statements are what a [`Program`] and a [`BlockStatement`] are made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Expression,
    },
    /// An early exit from the nearest function (or program) boundary.
    Return {
        /// The returned expression.
        value: Expression,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expression: Expression,
    },
}

/// A brace-delimited statement sequence.
///
/// Blocks are only reachable as the consequence or alternative of an
/// [`Expression::If`] or as the body of an [`Expression::FunctionLiteral`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockStatement {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
}

/// The root of a parsed source text: an ordered list of statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        f.write_str(operator)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        f.write_str(operator)
    }
}

// The Display forms below are the canonical pretty-printed shapes. Grouping
// decided by precedence is made explicit with parentheses, so the printed
// form of an operator expression re-parses to the same tree.

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => f.write_str(value),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments } => {
                let arguments = arguments.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "{function}({arguments})")
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expression } => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
