use logos::Logos;

use crate::ast::Operator;

/// Represents a lexical token in an expression string.
///
/// Every character is either an operator or part of a run of operand text, so
/// lexing never fails.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// One of `+`, `-`, `*` or `/`.
    #[token("+", parse_operator)]
    #[token("-", parse_operator)]
    #[token("*", parse_operator)]
    #[token("/", parse_operator)]
    Operator(Operator),
    /// Anything between operators, whitespace included.
    #[regex(r"[^+\-*/]+", allow_greedy = true)]
    Text,
}

/// Parses an operator from the current single-character token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(Operator)`: The operator written by the slice.
/// - `None`: If the slice is not an operator character.
fn parse_operator(lex: &logos::Lexer<Token>) -> Option<Operator> {
    let symbol = lex.slice().chars().next()?;
    Operator::try_from(symbol).ok()
}

/// An operator occurrence and its byte range in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorToken {
    /// The operator found.
    pub operator: Operator,
    /// Byte range of the operator character.
    pub span:     std::ops::Range<usize>,
}

/// Returns every operator in `source`, in order of appearance.
///
/// # Example
/// ```
/// use calculator::{ast::Operator, interpreter::lexer::operators};
///
/// let ops = operators("10 / 2 - 1");
/// assert_eq!(ops.len(), 2);
/// assert_eq!(ops[0].operator, Operator::Div);
/// assert_eq!(ops[0].span, 3..4);
/// ```
#[must_use]
pub fn operators(source: &str) -> Vec<OperatorToken> {
    Token::lexer(source).spanned()
                        .filter_map(|(token, span)| match token {
                            Ok(Token::Operator(operator)) => {
                                tracing::trace!(%operator, ?span, "lexed operator");
                                Some(OperatorToken { operator, span })
                            },
                            _ => None,
                        })
                        .collect()
}
