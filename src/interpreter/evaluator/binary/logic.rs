use crate::{
    ast::{Expr, LogicalOperator, Position},
    interpreter::{
        compiler::formula::Formula,
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::{as_truthy, from_bool},
        },
        value::core::Operand,
    },
};

/// Evaluates a logical operation between two truthy/falsy values.
///
/// Both operands are validated, so `0 && 5` is an error even though the left
/// operand alone decides the result.
///
/// # Errors
/// Returns `InvalidBooleanOperand` at the position of the first operand that
/// is neither `0` nor `1`.
///
/// # Example
/// ```
/// use bella::{
///     ast::{LogicalOperator, Position},
///     interpreter::evaluator::binary::logic::apply_logical,
/// };
///
/// let (l, r) = (Position::new(1, 1), Position::new(1, 6));
///
/// assert_eq!(apply_logical(LogicalOperator::Or, 0.0, 1.0, l, r), Ok(1.0));
/// assert_eq!(apply_logical(LogicalOperator::And, 1.0, 0.0, l, r), Ok(0.0));
/// assert!(apply_logical(LogicalOperator::And, 0.0, 5.0, l, r).is_err());
/// ```
pub fn apply_logical(op: LogicalOperator,
                     left: f64,
                     right: f64,
                     left_pos: Position,
                     right_pos: Position)
                     -> EvalResult<f64> {
    let left = as_truthy(left, left_pos)?;
    let right = as_truthy(right, right_pos)?;

    Ok(match op {
        LogicalOperator::And => from_bool(left && right),
        LogicalOperator::Or => from_bool(left || right),
    })
}

impl Evaluator<'_> {
    /// Evaluates `&&` or `||`.
    ///
    /// There is no short circuit: both operands are evaluated. When both are
    /// concrete they are validated and combined immediately. Otherwise the
    /// operation becomes a formula and both operands, concrete ones included,
    /// are validated when the compiled function runs.
    pub(crate) fn eval_logical_op(&mut self,
                                  left: &Expr,
                                  op: LogicalOperator,
                                  right: &Expr)
                                  -> EvalResult<Operand> {
        let left_pos = left.position();
        let right_pos = right.position();
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        match (left, right) {
            (Operand::Concrete(l), Operand::Concrete(r)) => {
                Ok(Operand::Concrete(apply_logical(op, l, r, left_pos, right_pos)?))
            },
            (left, right) => Ok(Operand::Symbolic(Formula::Logical { op,
                                                                     left:
                                                                         Box::new(left.into_formula()),
                                                                     right:
                                                                         Box::new(right.into_formula()),
                                                                     left_pos,
                                                                     right_pos })),
        }
    }
}
