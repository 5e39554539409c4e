use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::SyntaxError,
    pipeline::{
        lexer::Token,
        parser::{operation::parse_operation, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a full token stream into a program.
///
/// Statements are parsed one after another until the stream is exhausted.
/// The first error aborts parsing.
///
/// Grammar: `program := statement*`
///
/// # Example
/// ```
/// use numscript::{
///     ast::{Expr, OpKind, Statement},
///     pipeline::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("PRINT ADD 1 x").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// let Statement::Print { expr: Expr::Operation { op, operands, .. }, .. } = &program[0] else {
///     panic!("expected a print of an operation");
/// };
/// assert_eq!(*op, OpKind::Add);
/// assert_eq!(operands.len(), 2);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }

    log::debug!("parsed {} statement(s)", statements.len());
    Ok(statements)
}

/// Parses an expression.
///
/// An operator keyword starts a prefix operation; anything else must be a
/// single term.
///
/// Grammar: `expression := operator_kw term+ | term`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expression.
/// - `line`: Line of the enclosing statement, reported if input ends.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((tok, op_line)) = tokens.peek()
       && let Some(op) = tok.operator()
    {
        let op_line = *op_line;
        tokens.next();
        return parse_operation(tokens, op, op_line);
    }

    parse_term(tokens, line)
}

/// Parses a single term: a number or an identifier.
///
/// Grammar: `term := NUMBER | ID`
///
/// # Errors
/// - `UnexpectedTokenInTerm` for any other token.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), line)) => Ok(Expr::Number { value: *value,
                                                                line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Identifier { name: name.clone(),
                                                                       line: *line, }),
        Some((tok, line)) => Err(SyntaxError::UnexpectedTokenInTerm { token: tok.to_string(),
                                                                      line:  *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}
