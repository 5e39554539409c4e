use std::collections::BTreeMap;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    pipeline::{
        codegen::emit::{Emitter, Listing},
        value::Number,
    },
};

/// Result type used by the code generator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a program while emitting three-address code and assembly.
///
/// Evaluation and emission happen in one pass: every statement is computed
/// against the live environment and the computed values are written into the
/// listings, so assignments appear constant-folded.
///
/// ## Usage
///
/// One generator corresponds to one program run. The environment, the
/// listings and the temporary counter (`T1`, `T2`, ...) start empty and are
/// never reset, so a fresh generator is needed for every run.
pub struct CodeGenerator<E: Emitter = Listing> {
    /// Variable names mapped to their current values.
    environment:  BTreeMap<String, Number>,
    emitter:      E,
    temp_counter: usize,
}

impl CodeGenerator<Listing> {
    /// Creates a generator that buffers its output in a [`Listing`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_emitter(Listing::default())
    }

    /// Returns the three-address code emitted so far, one instruction per
    /// line.
    #[must_use]
    pub fn get_tac(&self) -> String {
        self.emitter.tac().join("\n")
    }

    /// Returns the assembly emitted so far, one instruction per line.
    #[must_use]
    pub fn get_assembly(&self) -> String {
        self.emitter.assembly().join("\n")
    }
}

impl Default for CodeGenerator<Listing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> CodeGenerator<E> {
    /// Creates a generator that writes every emitted line to `emitter`.
    pub fn with_emitter(emitter: E) -> Self {
        Self { environment: BTreeMap::new(),
               emitter,
               temp_counter: 0 }
    }

    /// Returns the emitter, consuming the generator.
    pub fn into_emitter(self) -> E {
        self.emitter
    }

    /// Returns the current value of a variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Number> {
        self.environment.get(name).copied()
    }

    /// Executes every statement in order and returns the printed output.
    ///
    /// Each `PRINT` contributes one line. The first runtime error aborts the
    /// run.
    ///
    /// # Example
    /// ```
    /// use numscript::pipeline::{codegen::CodeGenerator, lexer::tokenize, parser::parse};
    ///
    /// let program = parse(&tokenize("VAR x = ADD 1 2\nPRINT MUL x 4").unwrap()).unwrap();
    /// let mut generator = CodeGenerator::new();
    ///
    /// assert_eq!(generator.execute(&program).unwrap(), "12");
    /// assert_eq!(generator.get_tac(), "T1 = T1 + 2\nx = 3\nT2 = T2 * 4\nT3 = 12");
    /// assert_eq!(generator.get_assembly(),
    ///            "ADD T1, T1, 2\nMOV x, 3\nMUL T2, T2, 4\nMOV T3, 12\nOUT T3");
    /// ```
    pub fn execute(&mut self, program: &[Statement]) -> EvalResult<String> {
        let mut output = Vec::new();

        for statement in program {
            if let Some(printed) = self.execute_statement(statement)? {
                output.push(printed.to_string());
            }
        }

        log::debug!("executed {} statement(s), {} temporaries used",
                    program.len(),
                    self.temp_counter);
        Ok(output.join("\n"))
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// `Some(value)` for a `PRINT` statement, `None` otherwise.
    pub fn execute_statement(&mut self, statement: &Statement) -> EvalResult<Option<Number>> {
        match statement {
            Statement::Declare { name, expr, .. } | Statement::Assign { name, expr, .. } => {
                let value = self.evaluate(expr)?;
                self.environment.insert(name.clone(), value);
                self.emitter.emit_tac(format!("{name} = {value}"));
                self.emitter.emit_asm(format!("MOV {name}, {value}"));
                Ok(None)
            },
            Statement::Print { expr, .. } => {
                let value = self.evaluate(expr)?;
                let temp = self.new_temp();
                self.emitter.emit_tac(format!("{temp} = {value}"));
                self.emitter.emit_asm(format!("MOV {temp}, {value}"));
                self.emitter.emit_asm(format!("OUT {temp}"));
                Ok(Some(value))
            },
        }
    }

    /// Evaluates an expression, emitting the instructions that compute it.
    ///
    /// # Errors
    /// - `UndefinedVariable` if an identifier has no value.
    /// - Any error raised by the operation being evaluated.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Number> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Identifier { name, line } => {
                self.variable(name)
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line, })
            },
            Expr::Group { expr, .. } => self.evaluate(expr),
            Expr::Operation { op, operands, line } => match op.fold_symbol() {
                Some(symbol) => self.eval_fold(*op, symbol, operands, *line),
                None => self.eval_function(*op, operands, *line),
            },
        }
    }

    /// Allocates the next temporary name.
    pub(super) fn new_temp(&mut self) -> String {
        self.temp_counter += 1;
        format!("T{}", self.temp_counter)
    }

    pub(super) fn emitter(&mut self) -> &mut E {
        &mut self.emitter
    }
}
