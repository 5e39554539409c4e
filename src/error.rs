/// Lexical errors.
///
/// Raised when the source text contains a character that starts no token.
pub mod lex_error;
/// Syntax errors.
///
/// Defines all error types that can occur while parsing the token stream,
/// such as misplaced tokens, a missing `=` or an operator with the wrong
/// number of operands.
pub mod syntax_error;
/// Semantic errors.
///
/// Raised by the declaration checks that run between parsing and code
/// generation.
pub mod semantic_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating statements
/// and emitting code, such as undefined variables or invalid operands.
pub mod runtime_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

/// Any error raised by one of the pipeline stages.
///
/// Each stage error converts into this type with `?`, so a caller running
/// the whole pipeline handles a single error type.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Tokenizing failed.
    Lex(LexError),
    /// Parsing failed.
    Syntax(SyntaxError),
    /// Semantic analysis rejected the program.
    Semantic(SemanticError),
    /// Evaluation or code generation failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<SemanticError> for Error {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Semantic(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
