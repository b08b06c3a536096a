/// The evaluator module reduces expression trees to a bit.
///
/// The evaluator walks the tree post-order, looks variables up in the
/// caller's bindings, applies the truth tables, and records each operator
/// application in an ordered trace.
///
/// # Responsibilities
/// - Evaluates variables, `NOT`, `AND`, `OR` and `XOR`.
/// - Records one trace entry per operator application, children first.
/// - Reports unbound variables without aborting sibling evaluation.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The scanner reads the raw text and produces tokens one at a time:
/// parentheses, the keywords `AND`, `OR`, `XOR` and `NOT` (matched
/// case-insensitively), identifiers, EOF, and illegal characters.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Keeps the original casing of identifier names.
/// - Turns unrecognized characters into `ILLEGAL` tokens instead of failing.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A precedence-climbing parser over six priority levels. Syntax errors are
/// collected rather than raised, each tagged with the position of the
/// offending token.
///
/// # Responsibilities
/// - Enforces grammar, precedence (`OR` < `XOR` < `AND` < `NOT`) and
///   left-associativity.
/// - Requires the whole input to form one expression.
pub mod parser;
/// The renderer module formats expression trees back into text.
///
/// Output is fully parenthesized, optionally with bound variables replaced by
/// their values.
pub mod renderer;
/// The value module defines the `Bit` type and variable bindings.
pub mod value;
