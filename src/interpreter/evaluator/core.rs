use tracing::trace;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        compiler::formula::Formula,
        environment::Environment,
        value::core::{Binding, Operand},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Whether the evaluator is running a program or specializing a function
/// body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Stage {
    /// Ordinary evaluation; every operand is concrete.
    #[default]
    Idle,
    /// A function body is being evaluated with these parameters unbound.
    Specializing(Vec<String>),
}

impl Stage {
    /// Returns the slot of `name` if it is a parameter of the function being
    /// specialized.
    #[must_use]
    pub fn parameter_slot(&self, name: &str) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Specializing(params) => params.iter().position(|param| param == name),
        }
    }

    /// Returns `true` while a function body is being specialized.
    #[must_use]
    pub const fn is_specializing(&self) -> bool {
        matches!(self, Self::Specializing(_))
    }
}

/// Walks a syntax tree against an environment.
///
/// ## Usage
///
/// An `Evaluator` borrows the environment for the duration of one program.
/// Most callers go through [`evaluate`] or [`crate::run`] instead of building
/// one directly.
pub struct Evaluator<'env> {
    pub(crate) env:     &'env mut Environment,
    pub(crate) stage:   Stage,
    /// Impure formulas completed so far while specializing, outermost only,
    /// in evaluation order.
    pub(crate) effects: Vec<Formula>,
}

/// Evaluates every statement of `program` in order.
///
/// Evaluation stops at the first runtime error. Statements executed before
/// the error keep their effects on `env`.
///
/// # Example
/// ```
/// use bella::{Capture, Environment, evaluate, parse};
///
/// let capture = Capture::default();
/// let mut env = Environment::with_output(capture.clone());
/// let program = parse("let x = 2; print x ** 10;").unwrap();
///
/// evaluate(&program, &mut env).unwrap();
/// assert_eq!(capture.values(), vec![1024.0]);
/// ```
pub fn evaluate(program: &Program, env: &mut Environment) -> EvalResult<()> {
    let mut evaluator = Evaluator::new(env);
    for statement in &program.statements {
        evaluator.eval_statement(statement)?;
    }
    Ok(())
}

impl<'env> Evaluator<'env> {
    /// Creates an idle evaluator over `env`.
    #[must_use]
    pub fn new(env: &'env mut Environment) -> Self {
        Self { env,
               stage: Stage::Idle,
               effects: Vec::new() }
    }

    /// Evaluates an expression.
    ///
    /// While a function body is specialized, the result may be symbolic. An
    /// impure symbolic result replaces the effects recorded while evaluating
    /// its parts, so a branch that later fails knows which effects it has
    /// already performed.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Operand> {
        let mark = self.effects.len();
        let operand = self.eval_node(expr)?;

        if let Operand::Symbolic(formula) = &operand
           && !formula.is_pure()
        {
            self.effects.truncate(mark);
            self.effects.push(formula.clone());
        }

        Ok(operand)
    }

    /// Dispatches on the expression variant.
    fn eval_node(&mut self, expr: &Expr) -> EvalResult<Operand> {
        match expr {
            Expr::Literal { value, .. } => Ok(Operand::Concrete(*value)),
            Expr::Variable { name, pos } => self.eval_variable(name, *pos),
            Expr::UnaryOp { op, expr, .. } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
            Expr::LogicalOp { left, op, right, .. } => self.eval_logical_op(left, *op, right),
            Expr::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => self.eval_conditional(condition, then_branch, else_branch),
            Expr::Call { name, arguments, pos } => self.eval_call(name, arguments, *pos),
        }
    }

    /// Evaluates an expression outside of specialization.
    pub(crate) fn eval_concrete(&mut self, expr: &Expr) -> EvalResult<f64> {
        match self.eval(expr)? {
            Operand::Concrete(value) => Ok(value),
            Operand::Symbolic(formula) => {
                unreachable!("statement produced the symbolic value {formula}")
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// Handles variable and function declarations, assignments, `print` and
    /// `while`.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::VariableDeclaration { name, value, pos } => {
                trace!(%pos, name = %name, "declaring variable");
                self.env.check_declarable(name, *pos)?;
                let value = self.eval_concrete(value)?;
                self.env.define(name.clone(),
                                Binding::Number { value,
                                                  mutable: true });
                Ok(())
            },
            Statement::Function(def) => self.declare_function(def),
            Statement::Assignment { name, value, pos } => {
                trace!(%pos, name = %name, "assigning");
                let value = self.eval_concrete(value)?;
                self.env.assign(name, value, *pos)
            },
            Statement::Print { expr, pos } => {
                trace!(%pos, "printing");
                let value = self.eval_concrete(expr)?;
                self.env.output().print(value);
                Ok(())
            },
            Statement::While { condition, body, pos } => self.eval_while(condition, body, *pos),
        }
    }
}
