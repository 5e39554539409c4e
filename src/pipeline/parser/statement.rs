use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::SyntaxError,
    pipeline::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// The leading token selects the statement form:
/// - `VAR` starts a declaration,
/// - `PRINT` starts a print statement,
/// - an identifier starts an assignment.
///
/// # Errors
/// Returns `SyntaxError::UnexpectedToken` for any other leading token.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Var, line)) => {
            let line = *line;
            tokens.next();
            parse_declaration(tokens, line)
        },
        Some((Token::Print, line)) => {
            let line = *line;
            tokens.next();
            parse_print(tokens, line)
        },
        Some((Token::Identifier(_), _)) => parse_assignment(tokens),
        Some((tok, line)) => Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                                line:  *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses `VAR <identifier> = <expression>`, positioned after `VAR`.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        Some((tok, line)) => {
            return Err(SyntaxError::ExpectedIdentifier { found: tok.to_string(),
                                                         line:  *line, });
        },
        None => return Err(SyntaxError::UnexpectedEndOfInput { line }),
    };

    expect_assign(tokens, &name, line)?;
    let expr = parse_expression(tokens, line)?;

    Ok(Statement::Declare { name, expr, line })
}

/// Parses `<identifier> = <expression>`, positioned at the identifier.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        Some((tok, line)) => {
            return Err(SyntaxError::UnexpectedToken { token: tok.to_string(),
                                                      line:  *line, });
        },
        None => return Err(SyntaxError::UnexpectedEndOfInput { line: 0 }),
    };

    expect_assign(tokens, &name, line)?;
    let expr = parse_expression(tokens, line)?;

    Ok(Statement::Assign { name, expr, line })
}

/// Parses `PRINT <expression>`, positioned after `PRINT`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, line)?;

    Ok(Statement::Print { expr, line })
}

/// Consumes the `=` that must follow a declared or assigned name.
fn expect_assign<'a, I>(tokens: &mut Peekable<I>, name: &str, line: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Assign, _)) => Ok(()),
        Some((tok, line)) => Err(SyntaxError::ExpectedAssign { name:  name.to_string(),
                                                               found: tok.to_string(),
                                                               line:  *line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}
