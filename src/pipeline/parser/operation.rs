use std::iter::Peekable;

use crate::{
    ast::{Expr, OpKind},
    error::SyntaxError,
    pipeline::{
        lexer::Token,
        parser::core::{ParseResult, parse_term},
    },
};

/// Parses the operands of a prefix operation.
///
/// The operator keyword has already been consumed. Terms are collected
/// greedily for as long as the next token is a number or an identifier;
/// there is no explicit operand count, so the collected list is then checked
/// against [`OpKind::arity`].
///
/// Grammar: `operation := operator_kw term+`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the operator keyword.
/// - `op`: The operator.
/// - `line`: Line number of the operator keyword.
///
/// # Errors
/// Returns `SyntaxError::ArityViolation` if the number of collected operands
/// is not accepted by the operator.
///
/// # Example
/// ```
/// use numscript::{
///     error::SyntaxError,
///     pipeline::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("PRINT POW 2").unwrap();
///
/// assert!(matches!(parse(&tokens),
///                  Err(SyntaxError::ArityViolation { found: 1, .. })));
/// ```
pub fn parse_operation<'a, I>(tokens: &mut Peekable<I>, op: OpKind, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut operands = Vec::new();

    while let Some((Token::Number(_) | Token::Identifier(_), _)) = tokens.peek() {
        operands.push(parse_term(tokens, line)?);
    }

    let expected = op.arity();
    if !expected.accepts(operands.len()) {
        return Err(SyntaxError::ArityViolation { op,
                                                 expected,
                                                 found: operands.len(),
                                                 line });
    }

    Ok(Expr::Operation { op,
                         operands,
                         line })
}
