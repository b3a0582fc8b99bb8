use crate::{
    ast::{Expr, Position, UnaryOperator},
    interpreter::{
        compiler::formula::Formula,
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::{as_truthy, from_bool},
        },
        value::core::Operand,
    },
};

/// Applies a prefix operator to a concrete value.
///
/// `-` negates. `!` requires `0` or `1` and flips it.
///
/// # Errors
/// Returns `InvalidBooleanOperand` at `pos` if `!` is applied to anything
/// other than `0` or `1`.
///
/// # Example
/// ```
/// use bella::{
///     ast::{Position, UnaryOperator},
///     interpreter::evaluator::unary::apply_unary,
/// };
///
/// let pos = Position::new(1, 2);
///
/// assert_eq!(apply_unary(UnaryOperator::Negate, 4.0, pos), Ok(-4.0));
/// assert_eq!(apply_unary(UnaryOperator::Not, 0.0, pos), Ok(1.0));
/// assert!(apply_unary(UnaryOperator::Not, 0.5, pos).is_err());
/// ```
pub fn apply_unary(op: UnaryOperator, value: f64, pos: Position) -> EvalResult<f64> {
    match op {
        UnaryOperator::Negate => Ok(-value),
        UnaryOperator::Not => Ok(from_bool(!as_truthy(value, pos)?)),
    }
}

impl Evaluator<'_> {
    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// A symbolic operand produces a unary formula; the truthy/falsy check of
    /// `!` then runs at call time against the operand's position.
    pub(crate) fn eval_unary_op(&mut self, op: UnaryOperator, expr: &Expr) -> EvalResult<Operand> {
        let pos = expr.position();

        match self.eval(expr)? {
            Operand::Concrete(value) => Ok(Operand::Concrete(apply_unary(op, value, pos)?)),
            Operand::Symbolic(operand) => Ok(Operand::Symbolic(Formula::Unary { op,
                                                                                 operand:
                                                                                     Box::new(operand),
                                                                                 pos })),
        }
    }
}
