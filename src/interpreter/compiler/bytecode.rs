use crate::{
    ast::{BinaryOperator, LogicalOperator, Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        compiler::formula::Formula,
        evaluator::{
            binary::{core::apply_binary, logic::apply_logical},
            core::EvalResult,
            unary::apply_unary,
            utils::as_truthy,
        },
        output::Output,
        value::{callable::Callable, core::Operand},
    },
};

/// One step of a specialized function.
///
/// Instructions operate on a value stack. Jump targets are indices into the
/// instruction list.
#[derive(Debug, Clone)]
pub enum Instruction {
    /// Pushes a constant.
    Push(f64),
    /// Pushes the argument in the given parameter slot.
    Load(usize),
    /// Pops one value and pushes the result of a prefix operator.
    Unary {
        /// The operator.
        op:  UnaryOperator,
        /// Position of the operand, for truthy/falsy errors.
        pos: Position,
    },
    /// Pops two values and pushes the result of an arithmetic or relational
    /// operator.
    Binary(BinaryOperator),
    /// Pops two values, validates both and pushes the logical result.
    Logical {
        /// The operator.
        op:    LogicalOperator,
        /// Position of the left operand.
        left:  Position,
        /// Position of the right operand.
        right: Position,
    },
    /// Pops a selector and jumps to `target` if it is `0`.
    JumpUnless {
        /// Index of the next instruction when the selector is `0`.
        target: usize,
        /// Position of the selector, for truthy/falsy errors.
        pos:    Position,
    },
    /// Continues at `target`.
    Jump(usize),
    /// Pops a value and drops it.
    Discard,
    /// Pops as many values as the callee's arity and pushes its result.
    Call(Callable),
    /// Raises an error deferred from declaration time.
    Fail(RuntimeError),
}

/// A user function compiled once, at declaration time.
///
/// The body was evaluated with its parameters unbound, giving either a number
/// or a closed-form formula over the parameters. That result is lowered into
/// bytecode which every call runs with the arguments in the parameter slots.
///
/// # Example
/// ```
/// use bella::{
///     ast::Position,
///     interpreter::{
///         compiler::{bytecode::SpecializedFunction, formula::Formula},
///         value::core::Operand,
///     },
/// };
/// use bella::ast::BinaryOperator;
///
/// let x = Formula::Param { index: 0,
///                          name:  "x".into(), };
/// let body = Formula::Binary { op:    BinaryOperator::Mul,
///                              left:  Box::new(x),
///                              right: Box::new(Formula::Const(2.0)), };
///
/// let double = SpecializedFunction::compile("double".into(),
///                                           vec!["x".into()],
///                                           Operand::Symbolic(body),
///                                           Position::new(1, 10));
///
/// assert_eq!(double.to_string(), "double(x) = (x * 2)");
/// assert_eq!(double.call(&[21.0], &mut bella::Capture::default()).unwrap(), 42.0);
/// ```
#[derive(Debug)]
pub struct SpecializedFunction {
    name:    String,
    params:  Vec<String>,
    formula: Formula,
    code:    Vec<Instruction>,
    pure:    bool,
    pos:     Position,
}

impl SpecializedFunction {
    /// Compiles the result of specializing a function body.
    ///
    /// # Parameters
    /// - `name`: The function name.
    /// - `params`: The parameter names, in slot order.
    /// - `body`: What the body evaluated to with its parameters unbound.
    /// - `pos`: Position of the declaration.
    ///
    /// Every `Param` in `body` must refer to a slot of `params`, and every
    /// `Call` must carry as many arguments as its callee expects; see
    /// [`SpecializedFunction::call`].
    #[must_use]
    pub fn compile(name: String, params: Vec<String>, body: Operand, pos: Position) -> Self {
        let formula = body.into_formula();
        let mut code = Vec::new();
        lower(&formula, &mut code);

        Self { name,
               params,
               pure: formula.is_pure(),
               formula,
               code,
               pos }
    }

    /// The function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter names.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The closed-form formula the body was specialized into.
    #[must_use]
    pub const fn formula(&self) -> &Formula {
        &self.formula
    }

    /// The compiled instructions.
    #[must_use]
    pub fn code(&self) -> &[Instruction] {
        &self.code
    }

    /// Returns `true` if calling the function has no effect besides its
    /// result.
    #[must_use]
    pub const fn is_pure(&self) -> bool {
        self.pure
    }

    /// Runs the compiled body with `args` in the parameter slots.
    ///
    /// # Errors
    /// - `ArityMismatch` if `args` does not match the parameter count.
    /// - Any error raised by the body, reported at the position of the
    ///   original expression.
    ///
    /// # Panics
    /// Panics if the formula was not produced by specializing a body with
    /// these parameters: a `Param` slot outside the parameter list, or a
    /// `Call` with fewer arguments than its callee's arity.
    pub fn call(&self, args: &[f64], output: &mut dyn Output) -> EvalResult<f64> {
        if args.len() != self.arity() {
            return Err(RuntimeError::ArityMismatch { name:     self.name.clone(),
                                                     expected: self.arity(),
                                                     found:    args.len(),
                                                     pos:      self.pos, });
        }

        let mut stack: Vec<f64> = Vec::with_capacity(self.code.len());
        let mut pc = 0;

        while let Some(instruction) = self.code.get(pc) {
            pc += 1;
            match instruction {
                Instruction::Push(value) => stack.push(*value),
                Instruction::Load(slot) => stack.push(args[*slot]),
                Instruction::Unary { op, pos } => {
                    let value = pop(&mut stack);
                    stack.push(apply_unary(*op, value, *pos)?);
                },
                Instruction::Binary(op) => {
                    let right = pop(&mut stack);
                    let left = pop(&mut stack);
                    stack.push(apply_binary(*op, left, right));
                },
                Instruction::Logical { op, left, right } => {
                    let rhs = pop(&mut stack);
                    let lhs = pop(&mut stack);
                    stack.push(apply_logical(*op, lhs, rhs, *left, *right)?);
                },
                Instruction::JumpUnless { target, pos } => {
                    if !as_truthy(pop(&mut stack), *pos)? {
                        pc = *target;
                    }
                },
                Instruction::Jump(target) => pc = *target,
                Instruction::Discard => {
                    pop(&mut stack);
                },
                Instruction::Call(callee) => {
                    let start = stack.len().saturating_sub(callee.arity());
                    let arguments = stack.split_off(start);
                    stack.push(callee.invoke(&arguments, output)?);
                },
                Instruction::Fail(error) => return Err(error.clone()),
            }
        }

        Ok(pop(&mut stack))
    }
}

impl std::fmt::Display for SpecializedFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}) = {}", self.name, self.params.join(", "), self.formula)
    }
}

/// Pops a value pushed by an earlier instruction.
///
/// Lowering emits every operand before the instruction consuming it, so the
/// stack never runs dry.
fn pop(stack: &mut Vec<f64>) -> f64 {
    let Some(value) = stack.pop() else {
        unreachable!("specialized function popped an empty stack")
    };
    value
}

/// Appends the postfix instructions for `formula` to `code`.
fn lower(formula: &Formula, code: &mut Vec<Instruction>) {
    match formula {
        Formula::Const(value) => code.push(Instruction::Push(*value)),
        Formula::Param { index, .. } => code.push(Instruction::Load(*index)),
        Formula::Unary { op, operand, pos } => {
            lower(operand, code);
            code.push(Instruction::Unary { op:  *op,
                                           pos: *pos, });
        },
        Formula::Binary { op, left, right } => {
            lower(left, code);
            lower(right, code);
            code.push(Instruction::Binary(*op));
        },
        Formula::Logical { op,
                           left,
                           right,
                           left_pos,
                           right_pos, } => {
            lower(left, code);
            lower(right, code);
            code.push(Instruction::Logical { op:    *op,
                                             left:  *left_pos,
                                             right: *right_pos, });
        },
        Formula::Conditional { condition,
                               then_branch,
                               else_branch,
                               pos, } => {
            lower(condition, code);
            let branch = code.len();
            code.push(Instruction::JumpUnless { target: 0,
                                                pos:    *pos, });
            lower(then_branch, code);
            let skip_else = code.len();
            code.push(Instruction::Jump(0));

            let else_start = code.len();
            lower(else_branch, code);
            let end = code.len();

            code[branch] = Instruction::JumpUnless { target: else_start,
                                                     pos:    *pos, };
            code[skip_else] = Instruction::Jump(end);
        },
        Formula::Call { callee, arguments } => {
            for argument in arguments {
                lower(argument, code);
            }
            code.push(Instruction::Call(callee.clone()));
        },
        Formula::Fail { effects, error } => {
            for effect in effects {
                lower(effect, code);
                code.push(Instruction::Discard);
            }
            code.push(Instruction::Fail(error.clone()));
        },
    }
}
