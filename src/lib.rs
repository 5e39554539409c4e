//! # numscript
//!
//! numscript is a small prefix-notation numeric scripting language written in
//! Rust. Programs declare and assign variables, compute with operators such as
//! `ADD 1 2 3` or `SIN 90`, and print results. Besides the printed output,
//! every run produces a three-address code listing and a pseudo-assembly
//! listing of the computation.
//!
//! Source text flows through four stages: lexer, parser, semantic analyzer
//! and code generator. [`run`] drives all of them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::Error,
    pipeline::{
        codegen::CodeGenerator,
        lexer::{Token, tokenize},
        parser::parse,
        semantic::SemanticAnalyzer,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent
/// programs as trees, along with the operator set and its arity rules. The
/// AST is built by the parser and consumed by the later stages.
///
/// # Responsibilities
/// - Defines statement, expression and operator types.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides error types for every pipeline stage.
///
/// Each stage has its own error enum; the umbrella `Error` type wraps them
/// so that a whole run can be handled uniformly.
///
/// # Responsibilities
/// - Defines lexical, syntax, semantic and runtime error enums.
/// - Attaches line numbers and human-readable messages.
pub mod error;
/// Runs source code through the four compilation stages.
///
/// # Responsibilities
/// - Tokenizes, parses, checks and evaluates programs.
/// - Emits three-address code and assembly listings.
pub mod pipeline;

/// Everything produced by one successful run of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    /// Tokens paired with their source line.
    pub tokens:   Vec<(Token, usize)>,
    /// The parsed program.
    pub ast:      Vec<Statement>,
    /// Printed output, one line per `PRINT`.
    pub output:   String,
    /// Three-address code listing.
    pub tac:      String,
    /// Pseudo-assembly listing.
    pub assembly: String,
}

/// Runs a program through every pipeline stage.
///
/// Each stage starts only after the previous one succeeded; the first error
/// aborts the run. The semantic analyzer and the code generator are created
/// fresh for every call, so separate runs share no state.
///
/// # Errors
/// Returns the error of the first stage that fails.
///
/// # Examples
/// ```
/// use numscript::{error::Error, run};
///
/// let result = run("VAR x = 5\nPRINT ADD x 1").unwrap();
/// assert_eq!(result.output, "6");
/// assert_eq!(result.assembly, "MOV x, 5\nADD T1, T1, 1\nMOV T2, 6\nOUT T2");
///
/// // Undeclared names inside expressions are only caught while generating.
/// assert!(matches!(run("PRINT y"), Err(Error::Runtime(_))));
/// ```
pub fn run(source: &str) -> Result<Compilation, Error> {
    let tokens = tokenize(source)?;
    let ast = parse(&tokens)?;
    SemanticAnalyzer::new().analyze(&ast)?;

    let mut generator = CodeGenerator::new();
    let output = generator.execute(&ast)?;

    Ok(Compilation { tac: generator.get_tac(),
                     assembly: generator.get_assembly(),
                     tokens,
                     ast,
                     output })
}
