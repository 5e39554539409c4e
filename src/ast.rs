use crate::pipeline::value::Number;

/// Represents one of the fixed prefix operators of the language.
///
/// Every operator is written as an upper-case keyword followed by its
/// operands, e.g. `ADD 1 2 3` or `SIN 90`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpKind {
    /// Addition (`ADD`)
    Add,
    /// Subtraction (`SUB`)
    Sub,
    /// Multiplication (`MUL`)
    Mul,
    /// Division (`DIV`)
    Div,
    /// Floored modulo (`MOD`)
    Mod,
    /// Exponentiation (`POW`)
    Pow,
    /// Base-10 logarithm (`LOG`)
    Log,
    /// Sine of an angle in degrees (`SIN`)
    Sin,
    /// Cosine of an angle in degrees (`COS`)
    Cos,
    /// Tangent of an angle in degrees (`TAN`)
    Tan,
}

/// Specifies how many operands an operator accepts.
///
/// - `Exact(n)` means the operator must receive exactly `n` operands.
/// - `AtLeast(n)` means the operator accepts `n` or more operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Returns `true` if `count` operands satisfy this arity.
    ///
    /// # Example
    /// ```
    /// use numscript::ast::Arity;
    ///
    /// assert!(Arity::AtLeast(2).accepts(5));
    /// assert!(!Arity::Exact(2).accepts(3));
    /// ```
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::AtLeast(n) => count >= n,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

impl OpKind {
    /// Returns the operand count this operator requires at parse time.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod => Arity::AtLeast(2),
            Self::Pow | Self::Log => Arity::Exact(2),
            Self::Sin | Self::Cos | Self::Tan => Arity::Exact(1),
        }
    }

    /// Returns the infix symbol used in three-address code for operators
    /// that fold their operands left to right, or `None` for the
    /// single-operand functions.
    #[must_use]
    pub const fn fold_symbol(self) -> Option<&'static str> {
        match self {
            Self::Add => Some("+"),
            Self::Sub => Some("-"),
            Self::Mul => Some("*"),
            Self::Div => Some("/"),
            Self::Mod => Some("%"),
            Self::Pow => Some("^"),
            Self::Log | Self::Sin | Self::Cos | Self::Tan => None,
        }
    }

    /// The keyword spelling, which doubles as the assembly mnemonic.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Pow => "POW",
            Self::Log => "LOG",
            Self::Sin => "SIN",
            Self::Cos => "COS",
            Self::Tan => "TAN",
        }
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are either a single term (number or identifier) or a prefix
/// operation over a flat list of terms.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The constant value.
        value: Number,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A grouped sub-expression, evaluated transparently.
    Group {
        /// The wrapped expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A prefix operation such as `ADD 1 2 3`.
    Operation {
        /// The operator.
        op:       OpKind,
        /// Operands in source order.
        operands: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Expr {
    /// Returns the source line of the expression.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Identifier { line, .. }
            | Self::Group { line, .. }
            | Self::Operation { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// A program is an ordered list of statements and is executed in that order.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `VAR`.
    Declare {
        /// The name of the variable.
        name: String,
        /// The initial value of the variable.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// An assignment to an already declared variable.
    Assign {
        /// The name of the variable.
        name: String,
        /// The value which is being assigned.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// Output of a value using `PRINT`.
    Print {
        /// The value to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Returns the source line of the statement.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Declare { line, .. } | Self::Assign { line, .. } | Self::Print { line, .. } => {
                *line
            },
        }
    }
}
