use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        compiler::formula::Formula,
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::from_bool,
        },
        value::core::Operand,
    },
};

/// Applies an arithmetic or relational operator to two numbers.
///
/// Arithmetic follows IEEE 754: division by zero gives an infinity, `%` is
/// the truncated remainder and `**` is `powf`. Comparisons give `1` or `0`,
/// and any comparison involving `NaN` except `!=` gives `0`.
///
/// # Example
/// ```
/// use bella::{ast::BinaryOperator, interpreter::evaluator::binary::core::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Mod, -7.0, 3.0), -1.0);
/// assert_eq!(apply_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
/// assert_eq!(apply_binary(BinaryOperator::Pow, 2.0, -1.0), 0.5);
/// assert_eq!(apply_binary(BinaryOperator::Equal, f64::NAN, f64::NAN), 0.0);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
    };

    match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => left / right,
        Mod => left % right,
        Pow => left.powf(right),
        Less => from_bool(left < right),
        LessEqual => from_bool(left <= right),
        Equal => from_bool(left == right),
        NotEqual => from_bool(left != right),
        GreaterEqual => from_bool(left >= right),
        Greater => from_bool(left > right),
    }
}

impl Evaluator<'_> {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated left to right. If either is symbolic, the
    /// result is a binary formula with the concrete side embedded as a
    /// constant.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<Operand> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        match (left, right) {
            (Operand::Concrete(l), Operand::Concrete(r)) => {
                Ok(Operand::Concrete(apply_binary(op, l, r)))
            },
            (left, right) => Ok(Operand::Symbolic(Formula::Binary { op,
                                                                    left: Box::new(left.into_formula()),
                                                                    right:
                                                                        Box::new(right.into_formula()) })),
        }
    }
}
