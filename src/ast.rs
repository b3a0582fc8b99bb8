/// A location in the source text.
///
/// Lines and columns are both 1-based. Columns count characters, not bytes, so
/// an identifier such as `π` occupies a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number in the source code.
    pub line:   usize,
    /// Column number in the source code.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every expression evaluates to a single number. Booleans are encoded as `0`
/// and `1`, so `true` and `false` are parsed into plain literals.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, or `true`/`false`.
    Literal {
        /// The constant value.
        value: f64,
        /// Position in the source code.
        pos:   Position,
    },
    /// Reference to a variable, constant or function parameter by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Position in the source code.
        pos:  Position,
    },
    /// A prefix operation (`-x`, `!x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Position of the operator.
        pos:  Position,
    },
    /// An arithmetic or relational operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position of the left operand.
        pos:   Position,
    },
    /// A logical operation (`&&`, `||`). Both operands must be `0` or `1`.
    LogicalOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position of the left operand.
        pos:   Position,
    },
    /// The ternary conditional `condition ? then_branch : else_branch`.
    Conditional {
        /// The selector, which must be `0` or `1`.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is `1`.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is `0`.
        else_branch: Box<Self>,
        /// Position of the condition.
        pos:         Position,
    },
    /// Function call expression (e.g. `hypot(3, 4)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Position of the function name.
        pos:       Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use bella::ast::{Expr, Position};
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             pos:  Position::new(5, 3), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 3));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { pos, .. }
            | Self::Variable { pos, .. }
            | Self::UnaryOp { pos, .. }
            | Self::BinaryOp { pos, .. }
            | Self::LogicalOp { pos, .. }
            | Self::Conditional { pos, .. }
            | Self::Call { pos, .. } => *pos,
        }
    }
}

/// Represents a user-defined function declaration.
///
/// A function binds its parameter names to a single body expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names (e.g. `x`, `y`).
    pub params: Vec<String>,
    /// The body expression, specialized once at declaration time.
    pub body:   Expr,
    /// Position of the function name.
    pub pos:    Position,
}

/// A brace-delimited sequence of statements.
///
/// Blocks do not introduce a scope; they share the single global environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Position of the opening brace.
    pub pos:        Position,
}

/// A complete parsed program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `let`.
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Position of the variable name.
        pos:   Position,
    },
    /// A user-defined function declaration using `function`.
    Function(FunctionDef),
    /// A plain assignment to an existing variable.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Position of the variable name.
        pos:   Position,
    },
    /// A `print` statement.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Position of the `print` keyword.
        pos:  Position,
    },
    /// A `while` loop.
    While {
        /// The guard, which must evaluate to `0` or `1` on every iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
        /// Position of the `while` keyword.
        pos:       Position,
    },
}

/// Represents an arithmetic or relational binary operator.
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
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Greater than (`>`)
    Greater,
}

/// Represents a logical operator over `0`/`1` operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`). The operand must be `0` or `1`.
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            Less => "<",
            LessEqual => "<=",
            Equal => "==",
            NotEqual => "!=",
            GreaterEqual => ">=",
            Greater => ">",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "&&"),
            Self::Or => write!(f, "||"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
