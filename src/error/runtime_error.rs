#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation and code
/// generation.
pub enum RuntimeError {
    /// An expression referenced a variable with no value.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand lies outside the domain of its function.
    InvalidOperand {
        /// The operator.
        op:      crate::ast::OpKind,
        /// Details about why the operand is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An operation was evaluated without any operands.
    MissingOperand {
        /// The operator.
        op:   crate::ast::OpKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is not defined.")
            },
            Self::InvalidOperand { op, details, line } => {
                write!(f, "Error on line {line}: Invalid operand for {op}: {details}.")
            },
            Self::MissingOperand { op, line } => {
                write!(f, "Error on line {line}: Operation '{op}' has no operands.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
