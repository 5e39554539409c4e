use std::collections::BTreeMap;

use crate::{ast::Statement, error::SemanticError};

/// Checks declaration rules over the top-level statements of a program.
///
/// The analyzer only looks at statement targets: a `VAR` must introduce a
/// new name and an assignment must target a declared one. Identifiers used
/// inside expressions are not checked here; an undefined one surfaces during
/// code generation.
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    /// Declared names mapped to the line of their declaration.
    symbols: BTreeMap<String, usize>,
}

impl SemanticAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the declaration checks in a single pass, stopping at the first
    /// violation.
    ///
    /// # Errors
    /// - `AlreadyDeclared` if a `VAR` targets a declared name.
    /// - `NotDeclared` if an assignment targets an undeclared name.
    ///
    /// # Example
    /// ```
    /// use numscript::{
    ///     error::SemanticError,
    ///     pipeline::{lexer::tokenize, parser::parse, semantic::SemanticAnalyzer},
    /// };
    ///
    /// let program = parse(&tokenize("VAR x = 1\nVAR x = 2").unwrap()).unwrap();
    /// let err = SemanticAnalyzer::new().analyze(&program).unwrap_err();
    ///
    /// assert_eq!(err,
    ///            SemanticError::AlreadyDeclared { name:       "x".to_string(),
    ///                                             line:       2,
    ///                                             first_line: 1, });
    /// ```
    pub fn analyze(&mut self, program: &[Statement]) -> Result<(), SemanticError> {
        for statement in program {
            match statement {
                Statement::Declare { name, line, .. } => {
                    if let Some(first_line) = self.symbols.get(name) {
                        return Err(SemanticError::AlreadyDeclared { name:       name.clone(),
                                                                    line:       *line,
                                                                    first_line: *first_line, });
                    }
                    self.symbols.insert(name.clone(), *line);
                },
                Statement::Assign { name, line, .. } => {
                    if !self.symbols.contains_key(name) {
                        return Err(SemanticError::NotDeclared { name: name.clone(),
                                                                line: *line, });
                    }
                },
                Statement::Print { .. } => {},
            }
        }

        log::debug!("semantic analysis passed, {} variable(s) declared", self.symbols.len());
        Ok(())
    }

    /// Returns `true` if `name` has been declared by an analyzed statement.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }
}
