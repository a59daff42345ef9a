/// The evaluator module dispatches parsed expressions to arithmetic.
///
/// Takes an [`Expression`](crate::ast::Expression) produced by the parser and
/// applies the primitive matching its operator. Runtime failures such as
/// division by zero surface here.
pub mod evaluator;
/// The lexer module tokenizes an expression string.
///
/// Splits the raw text into operator tokens and runs of operand text. The
/// parser only ever inspects the operator tokens and slices operand text out
/// of the source by span.
pub mod lexer;
/// The parser module builds an [`Expression`](crate::ast::Expression) from a
/// string.
///
/// # Responsibilities
/// - Finds the first operator and checks it splits the text into exactly two
///   operands.
/// - Trims and parses each operand as `f64`, reporting which side failed.
pub mod parser;
