#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors detected by semantic analysis.
pub enum SemanticError {
    /// A `VAR` statement targets a name that is already declared.
    AlreadyDeclared {
        /// The name of the variable.
        name:       String,
        /// The source line of the second declaration.
        line:       usize,
        /// The source line of the first declaration.
        first_line: usize,
    },
    /// An assignment targets a name that was never declared.
    NotDeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyDeclared { name,
                                    line,
                                    first_line, } => write!(f,
                                                            "Error on line {line}: Variable '{name}' already declared on line {first_line}."),
            Self::NotDeclared { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' not declared.")
            },
        }
    }
}

impl std::error::Error for SemanticError {}
