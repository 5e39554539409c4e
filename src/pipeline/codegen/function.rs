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
    /// Evaluates a single-operand function: `LOG`, `SIN`, `COS` or `TAN`.
    ///
    /// Only the first operand is evaluated. `LOG` is the base-10 logarithm;
    /// the trigonometric functions take their operand in degrees. The result
    /// is always real and is described by one instruction per listing, e.g.
    /// `T1 = SIN(90)` and `SIN T1, 90`.
    ///
    /// # Errors
    /// - `InvalidOperand` if the `LOG` operand is not positive.
    /// - `MissingOperand` if the operand list is empty.
    /// - `InvalidOperand` if `op` is a folding operator.
    ///
    /// # Example
    /// ```
    /// use numscript::pipeline::{codegen::CodeGenerator, lexer::tokenize, parser::parse};
    ///
    /// let program = parse(&tokenize("PRINT LOG 100 10").unwrap()).unwrap();
    /// let mut generator = CodeGenerator::new();
    ///
    /// assert_eq!(generator.execute(&program).unwrap(), "2.0");
    /// assert_eq!(generator.get_assembly(), "LOG T1, 100\nMOV T2, 2.0\nOUT T2");
    /// ```
    pub(super) fn eval_function(&mut self,
                                op: OpKind,
                                operands: &[Expr],
                                line: usize)
                                -> EvalResult<Number> {
        let operand = operands.first()
                              .ok_or(RuntimeError::MissingOperand { op, line })?;
        let value = self.evaluate(operand)?;
        let x = value.as_real();

        let result = match op {
            OpKind::Log => {
                if x <= 0.0 {
                    return Err(RuntimeError::InvalidOperand { op,
                                                              details: format!("logarithm operand must be positive, found {value}"),
                                                              line });
                }
                x.log10()
            },
            OpKind::Sin => x.to_radians().sin(),
            OpKind::Cos => x.to_radians().cos(),
            OpKind::Tan => x.to_radians().tan(),
            OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div | OpKind::Mod | OpKind::Pow => {
                return Err(RuntimeError::InvalidOperand { op,
                                                          details: "not a function operator".to_string(),
                                                          line });
            },
        };

        let temp = self.new_temp();
        self.emitter().emit_tac(format!("{temp} = {op}({value})"));
        self.emitter().emit_asm(format!("{op} {temp}, {value}"));

        Ok(Number::Real(result))
    }
}
