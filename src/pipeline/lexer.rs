use logos::Logos;

use crate::{
    ast::OpKind,
    error::LexError,
    pipeline::value::Number,
};

/// Represents a lexical token in the source input.
///
/// Keywords are matched case-sensitively. When a keyword and an identifier
/// match the same text the keyword wins, but a longer identifier always
/// wins, so `ADDER` is a single identifier.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `-7` or `3.14`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", parse_number)]
    Number(Number),
    /// `ADD`
    #[token("ADD")]
    Add,
    /// `SUB`
    #[token("SUB")]
    Sub,
    /// `MUL`
    #[token("MUL")]
    Mul,
    /// `DIV`
    #[token("DIV")]
    Div,
    /// `MOD`
    #[token("MOD")]
    Mod,
    /// `POW`
    #[token("POW")]
    Pow,
    /// `LOG`
    #[token("LOG")]
    Log,
    /// `SIN`
    #[token("SIN")]
    Sin,
    /// `COS`
    #[token("COS")]
    Cos,
    /// `TAN`
    #[token("TAN")]
    Tan,
    /// `VAR`
    #[token("VAR")]
    Var,
    /// `PRINT`
    #[token("PRINT")]
    Print,
    /// `=`
    #[token("=")]
    Assign,
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Line breaks are skipped but counted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the operator this token introduces, if it is an operator
    /// keyword.
    #[must_use]
    pub const fn operator(&self) -> Option<OpKind> {
        match self {
            Self::Add => Some(OpKind::Add),
            Self::Sub => Some(OpKind::Sub),
            Self::Mul => Some(OpKind::Mul),
            Self::Div => Some(OpKind::Div),
            Self::Mod => Some(OpKind::Mod),
            Self::Pow => Some(OpKind::Pow),
            Self::Log => Some(OpKind::Log),
            Self::Sin => Some(OpKind::Sin),
            Self::Cos => Some(OpKind::Cos),
            Self::Tan => Some(OpKind::Tan),
            _ => None,
        }
    }

    /// The upper-case kind name, e.g. `NUMBER`, `ID` or `ASSIGN`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Var => "VAR",
            Self::Print => "PRINT",
            Self::Assign => "ASSIGN",
            Self::Identifier(_) => "ID",
            Self::NewLine | Self::Ignored => "SKIP",
            other => match other.operator() {
                Some(op) => op.mnemonic(),
                None => "UNKNOWN",
            },
        }
    }
}

impl std::fmt::Display for Token {
    /// Formats the token as a `(KIND, value)` pair.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "({}, {n})", self.kind()),
            Self::Identifier(name) => write!(f, "({}, {name})", self.kind()),
            Self::Assign => write!(f, "({}, =)", self.kind()),
            _ => write!(f, "({0}, {0})", self.kind()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// Slices with a decimal point become reals. Integer slices that do not fit
/// in an `i64` are read as reals instead of failing.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<Number> {
    let slice = lex.slice();
    if slice.contains('.') {
        return slice.parse().ok().map(Number::Real);
    }
    slice.parse()
         .map(Number::Integer)
         .or_else(|_| slice.parse().map(Number::Real))
         .ok()
}

/// Converts source text into a sequence of `(Token, line)` pairs.
///
/// Scanning is strictly left to right and stops at the first character that
/// starts no token.
///
/// # Errors
/// Returns `LexError::UnexpectedCharacter` for an unrecognized character.
///
/// # Example
/// ```
/// use numscript::pipeline::{lexer::{Token, tokenize}, value::Number};
///
/// let tokens = tokenize("VAR x = 5\nPRINT x").unwrap();
///
/// assert_eq!(tokens[0], (Token::Var, 1));
/// assert_eq!(tokens[3], (Token::Number(Number::Integer(5)), 1));
/// assert_eq!(tokens[4], (Token::Print, 2));
///
/// assert!(tokenize("PRINT @").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(LexError::UnexpectedCharacter { character: lexer.slice().to_string(),
                                                       line:      lexer.extras.line, });
        }
    }

    log::debug!("tokenized {} tokens over {} line(s)", tokens.len(), lexer.extras.line);
    Ok(tokens)
}
