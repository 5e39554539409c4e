use crate::ast::{Arity, OpKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum SyntaxError {
    /// A statement started with a token that cannot begin a statement.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `VAR` was not followed by an identifier.
    ExpectedIdentifier {
        /// The token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A declared or assigned name was not followed by `=`.
    ExpectedAssign {
        /// The variable being declared or assigned.
        name:  String,
        /// The token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A term (number or identifier) was expected.
    UnexpectedTokenInTerm {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operator received the wrong number of operands.
    ArityViolation {
        /// The operator.
        op:       OpKind,
        /// The number of operands it accepts.
        expected: Arity,
        /// The number of operands collected.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while a token was still required.
    UnexpectedEndOfInput {
        /// The line of the last token read.
        line: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token in statement: {token}.")
            },
            Self::ExpectedIdentifier { found, line } => write!(f,
                                                               "Error on line {line}: Expected identifier after VAR, found: {found}."),
            Self::ExpectedAssign { name, found, line } => write!(f,
                                                                 "Error on line {line}: Expected '=' after identifier '{name}', found: {found}."),
            Self::UnexpectedTokenInTerm { token, line } => {
                write!(f, "Error on line {line}: Unexpected token in term: {token}.")
            },
            Self::ArityViolation { op,
                                   expected,
                                   found,
                                   line, } => write!(f,
                                                     "Error on line {line}: Operation '{op}' requires {expected} operand(s), found {found}."),
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
