use crate::{ast::OpKind, error::RuntimeError, pipeline::codegen::core::EvalResult};

/// Represents a runtime numeric value.
///
/// Literals written with a decimal point are reals, all others are integers.
/// Both share one numeric domain: mixed operations promote to real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` round to the nearest representable real.
    ///
    /// # Example
    /// ```
    /// use numscript::pipeline::value::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_real(), 3.0);
    /// assert_eq!(Number::Real(0.5).as_real(), 0.5);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns `true` if the value is zero in either representation.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Applies a folding operator to `self` (the running result) and `rhs`.
    ///
    /// Integer operands stay integral for `ADD`, `SUB`, `MUL`, `MOD` and
    /// non-negative `POW` as long as the result fits in an `i64`; otherwise
    /// the result is computed as a real. `DIV` always yields a real. `MOD` is
    /// floored, so the result takes the sign of the divisor.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor, or zero raised to a negative
    ///   power.
    /// - `InvalidOperand` if `op` is not a folding operator.
    ///
    /// # Example
    /// ```
    /// use numscript::{ast::OpKind, pipeline::value::Number};
    ///
    /// let seven = Number::Integer(7);
    ///
    /// assert_eq!(seven.apply(OpKind::Mul, Number::Integer(6), 1).unwrap(),
    ///            Number::Integer(42));
    /// assert_eq!(seven.apply(OpKind::Div, Number::Integer(2), 1).unwrap(),
    ///            Number::Real(3.5));
    /// assert_eq!(Number::Integer(-7).apply(OpKind::Mod, Number::Integer(3), 1).unwrap(),
    ///            Number::Integer(2));
    /// assert_eq!(Number::Integer(i64::MAX).apply(OpKind::Add, Number::Integer(1), 1).unwrap(),
    ///            Number::Real(9_223_372_036_854_775_808.0));
    /// ```
    pub fn apply(self, op: OpKind, rhs: Self, line: usize) -> EvalResult<Self> {
        if matches!(op, OpKind::Div | OpKind::Mod) && rhs.is_zero() {
            return Err(RuntimeError::DivisionByZero { line });
        }

        if let (Self::Integer(a), Self::Integer(b)) = (self, rhs)
           && let Some(result) = Self::apply_integer(op, a, b)
        {
            return Ok(Self::Integer(result));
        }

        Self::apply_real(op, self.as_real(), rhs.as_real(), line).map(Self::Real)
    }

    /// Integer arithmetic. `None` means the result has no exact integer form
    /// and must be computed as a real.
    fn apply_integer(op: OpKind, a: i64, b: i64) -> Option<i64> {
        match op {
            OpKind::Add => a.checked_add(b),
            OpKind::Sub => a.checked_sub(b),
            OpKind::Mul => a.checked_mul(b),
            OpKind::Mod => {
                let rem = a.checked_rem(b)?;
                Some(if rem != 0 && (rem < 0) != (b < 0) { rem + b } else { rem })
            },
            OpKind::Pow => match u32::try_from(b) {
                Ok(exponent) => a.checked_pow(exponent),
                // Only 0, 1 and -1 stay integral beyond u32 exponents.
                Err(_) if b > 0 => match a {
                    0 | 1 => Some(a),
                    -1 => Some(if b % 2 == 0 { 1 } else { -1 }),
                    _ => None,
                },
                Err(_) => None,
            },
            OpKind::Div | OpKind::Log | OpKind::Sin | OpKind::Cos | OpKind::Tan => None,
        }
    }

    fn apply_real(op: OpKind, a: f64, b: f64, line: usize) -> EvalResult<f64> {
        match op {
            OpKind::Add => Ok(a + b),
            OpKind::Sub => Ok(a - b),
            OpKind::Mul => Ok(a * b),
            OpKind::Div => Ok(a / b),
            OpKind::Mod => {
                let rem = a % b;
                Ok(if rem != 0.0 && (rem < 0.0) != (b < 0.0) { rem + b } else { rem })
            },
            OpKind::Pow => {
                if a == 0.0 && b < 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Ok(a.powf(b))
            },
            OpKind::Log | OpKind::Sin | OpKind::Cos | OpKind::Tan => {
                Err(RuntimeError::InvalidOperand { op,
                                                   details: "not a folding operator".to_string(),
                                                   line })
            },
        }
    }
}

/// Formats a real so that it always reads as a real: integral values keep a
/// trailing `.0`, very large or very small magnitudes use an exponent with an
/// explicit sign and at least two digits.
fn format_real(r: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if r.is_nan() {
        return write!(f, "nan");
    }
    if r.is_infinite() {
        return write!(f, "{}", if r < 0.0 { "-inf" } else { "inf" });
    }

    let magnitude = r.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{r:e}");
        let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return write!(f, "{mantissa}e{sign}{digits:0>2}");
    }

    if r.fract() == 0.0 { write!(f, "{r:.1}") } else { write!(f, "{r}") }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => format_real(*r, f),
        }
    }
}
