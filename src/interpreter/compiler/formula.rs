use crate::{
    ast::{BinaryOperator, LogicalOperator, Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{output::render_number, value::callable::Callable},
};

/// A symbolic value produced while a function body is specialized.
///
/// Every operator that meets a symbolic operand composes a new node instead
/// of computing a number. Concrete operands are embedded as constants. Checks
/// that depend on a value, such as the truthy/falsy invariant, keep the
/// position of the node they guard so they can be reported at call time.
#[derive(Debug, Clone)]
pub enum Formula {
    /// A number known at declaration time.
    Const(f64),
    /// A placeholder for a parameter.
    Param {
        /// Position of the parameter in the declaration.
        index: usize,
        /// The parameter name.
        name:  String,
    },
    /// A prefix operation.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// Position of the operand expression.
        pos:     Position,
    },
    /// An arithmetic or relational operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A logical operation; both operands are validated when it runs.
    Logical {
        /// The operator.
        op:        LogicalOperator,
        /// Left operand.
        left:      Box<Self>,
        /// Right operand.
        right:     Box<Self>,
        /// Position of the left operand expression.
        left_pos:  Position,
        /// Position of the right operand expression.
        right_pos: Position,
    },
    /// A ternary conditional whose selector depends on a parameter.
    Conditional {
        /// The selector.
        condition:   Box<Self>,
        /// Taken when the selector is `1`.
        then_branch: Box<Self>,
        /// Taken when the selector is `0`.
        else_branch: Box<Self>,
        /// Position of the selector expression.
        pos:         Position,
    },
    /// A call deferred to call time, because an argument depends on a
    /// parameter or because the callee has an effect.
    Call {
        /// The function, captured at declaration time.
        callee:    Callable,
        /// The argument formulas.
        arguments: Vec<Self>,
    },
    /// An error that is only raised if evaluation reaches this point.
    ///
    /// Produced for a branch of a conditional whose selector is symbolic,
    /// where evaluating the branch eagerly would fail. The effects the branch
    /// performed before failing run first, in order, and their results are
    /// discarded.
    Fail {
        /// Impure parts of the branch that completed before the error.
        effects: Vec<Self>,
        /// The error raised once the effects have run.
        error:   RuntimeError,
    },
}

impl Formula {
    /// Returns `true` if evaluating the formula has no effect besides its
    /// result.
    #[must_use]
    pub fn is_pure(&self) -> bool {
        match self {
            Self::Const(_) | Self::Param { .. } => true,
            Self::Unary { operand, .. } => operand.is_pure(),
            Self::Binary { left, right, .. } | Self::Logical { left, right, .. } => {
                left.is_pure() && right.is_pure()
            },
            Self::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                condition.is_pure() && then_branch.is_pure() && else_branch.is_pure()
            },
            Self::Call { callee, arguments } => {
                callee.is_pure() && arguments.iter().all(Self::is_pure)
            },
            Self::Fail { effects, .. } => effects.iter().all(Self::is_pure),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Const(value) => write!(f, "{}", render_number(*value)),
            Self::Param { name, .. } => write!(f, "{name}"),
            Self::Unary { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Logical { op, left, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                write!(f, "({condition} ? {then_branch} : {else_branch})")
            },
            Self::Call { callee, arguments } => {
                write!(f, "{}(", callee.name())?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::Fail { effects, .. } => {
                for effect in effects {
                    write!(f, "{effect}; ")?;
                }
                write!(f, "<error>")
            },
        }
    }
}
