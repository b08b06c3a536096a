use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::trace::CalcProcess,
        value::{Bindings, Bit},
    },
};

/// Reduces expression trees to a single [`Bit`].
///
/// The evaluator reads variables from caller-supplied bindings, collects
/// semantic errors, and records every operator application in an ordered
/// trace. Evaluation is eager and post-order: both operands of a binary
/// operation are always evaluated, even when one of them has already failed,
/// so every unbound variable in the tree is reported.
///
/// An evaluator is meant to be used for a single evaluation run; the trace
/// index keeps counting across calls to [`Evaluator::calculate`].
///
/// # Example
/// ```
/// use boolcalc::{
///     interpreter::{
///         evaluator::Evaluator,
///         lexer::Scanner,
///         parser::Parser,
///         value::{Bindings, Bit},
///     },
/// };
///
/// let expr = Parser::new(Scanner::new("X OR (NOT Y)")).parse().unwrap();
/// let bindings = Bindings::from([("X".to_string(), Bit::One), ("Y".to_string(), Bit::Zero)]);
///
/// let mut evaluator = Evaluator::new(&bindings);
/// assert_eq!(evaluator.calculate(&expr), Some(Bit::One));
///
/// let steps: Vec<String> = evaluator.calc_processes().iter().map(ToString::to_string).collect();
/// assert_eq!(steps, ["NOT 0 = 1", "1 OR 1 = 1"]);
/// ```
pub struct Evaluator<'b> {
    bindings:       &'b Bindings,
    calc_processes: Vec<CalcProcess>,
    errors:         Vec<EvalError>,
}

impl<'b> Evaluator<'b> {
    /// Creates an evaluator over `bindings` with an empty trace.
    #[must_use]
    pub const fn new(bindings: &'b Bindings) -> Self {
        Self { bindings,
               calc_processes: Vec::new(),
               errors: Vec::new() }
    }

    /// Evaluates an expression.
    ///
    /// Returns `None` when any variable the result depends on is unbound; the
    /// reasons are available from [`Evaluator::errors`]. Failed operations
    /// record no trace entry.
    pub fn calculate(&mut self, expression: &Expr) -> Option<Bit> {
        match expression {
            Expr::Variable { name } => self.eval_variable(name),
            Expr::UnaryOperation { operator, operand } => self.eval_unary_op(*operator, operand),
            Expr::BinaryOperation { operator, left, right } => {
                self.eval_binary_op(*operator, left, right)
            },
        }
    }

    /// Returns the operator applications recorded so far, in completion
    /// order.
    #[must_use]
    pub fn calc_processes(&self) -> &[CalcProcess] {
        &self.calc_processes
    }

    /// Returns the semantic errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[EvalError] {
        &self.errors
    }

    /// Returns the recorded errors as formatted messages.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Consumes the evaluator, returning its trace and its errors.
    #[must_use]
    pub fn finish(self) -> (Vec<CalcProcess>, Vec<EvalError>) {
        (self.calc_processes, self.errors)
    }

    fn eval_variable(&mut self, name: &str) -> Option<Bit> {
        if let Some(bit) = self.bindings.get(name) {
            return Some(*bit);
        }

        let error = EvalError::UnknownVariable { name: name.to_string() };
        tracing::debug!(%error, "evaluation error");
        self.errors.push(error);
        None
    }

    /// Appends a trace entry with the next index.
    pub(in crate::interpreter::evaluator) fn record(&mut self,
                                                    operator: impl ToString,
                                                    left: Option<Bit>,
                                                    right: Bit,
                                                    result: Bit) {
        let index = self.calc_processes.len();
        let process = CalcProcess { operator: operator.to_string(),
                                    left,
                                    right,
                                    result,
                                    index };
        tracing::debug!(%process, index, "calculation step");
        self.calc_processes.push(process);
    }
}
