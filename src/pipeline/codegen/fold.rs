use crate::{
    ast::{Expr, OpKind},
    error::RuntimeError,
    pipeline::{
        codegen::{
            core::{CodeGenerator, EvalResult},
            emit::Emitter,
        },
        value::Number,
    },
};

impl<E: Emitter> CodeGenerator<E> {
    /// Evaluates an n-ary arithmetic operation by folding left to right.
    ///
    /// All operands are evaluated first, then a single temporary is
    /// allocated. The running result starts at the first operand; each
    /// further operand is combined into it and emits one instruction per
    /// listing, e.g. `T1 = T1 + 2` and `ADD T1, T1, 2`.
    ///
    /// # Parameters
    /// - `op`: The folding operator.
    /// - `symbol`: Its three-address code symbol.
    /// - `operands`: Operand expressions in source order.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use numscript::pipeline::{codegen::CodeGenerator, lexer::tokenize, parser::parse};
    ///
    /// let program = parse(&tokenize("PRINT SUB 10 3 2").unwrap()).unwrap();
    /// let mut generator = CodeGenerator::new();
    ///
    /// assert_eq!(generator.execute(&program).unwrap(), "5");
    /// assert_eq!(generator.get_tac(), "T1 = T1 - 3\nT1 = T1 - 2\nT2 = 5");
    /// ```
    pub(super) fn eval_fold(&mut self,
                            op: OpKind,
                            symbol: &str,
                            operands: &[Expr],
                            line: usize)
                            -> EvalResult<Number> {
        let values = operands.iter()
                             .map(|operand| self.evaluate(operand))
                             .collect::<EvalResult<Vec<_>>>()?;

        let Some((first, rest)) = values.split_first() else {
            return Err(RuntimeError::MissingOperand { op, line });
        };

        let temp = self.new_temp();
        let mut result = *first;

        for value in rest {
            result = result.apply(op, *value, line)?;
            self.emitter().emit_tac(format!("{temp} = {temp} {symbol} {value}"));
            self.emitter().emit_asm(format!("{op} {temp}, {temp}, {value}"));
        }

        Ok(result)
    }
}
