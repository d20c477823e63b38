use crate::error::{EvalError, EvalResult};

/// The binary operations an expression can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*` or `x`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
}

impl TryFrom<char> for Sign {
    type Error = EvalError;

    fn try_from(sign: char) -> EvalResult<Self> {
        match sign {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' | 'x' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            '%' => Ok(Self::Rem),
            _ => Err(EvalError::InvalidOperator { sign }),
        }
    }
}

impl Sign {
    /// Applies the operation to two operands.
    ///
    /// Arithmetic follows IEEE-754 double precision. Division by zero is not
    /// an error: it yields an infinity, or `NaN` for `0 / 0`, and `%` uses the
    /// floating-point remainder whose sign follows the dividend.
    ///
    /// # Example
    /// ```
    /// use exprsolve::interpreter::operator::Sign;
    ///
    /// assert_eq!(Sign::Rem.apply(-7.0, 2.0), -1.0);
    /// assert!(Sign::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Rem => left % right,
        }
    }
}

/// Computes the result of one binary operation.
///
/// # Parameters
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `sign`: Operator character, one of `+ - * x / %`.
///
/// # Errors
/// Returns [`EvalError::InvalidOperator`] when `sign` is not a recognized
/// operator.
///
/// # Example
/// ```
/// use exprsolve::{error::EvalError, resolve};
///
/// assert_eq!(resolve(2.0, 3.0, 'x'), Ok(6.0));
/// assert_eq!(resolve(2.0, 3.0, 'a'), Err(EvalError::InvalidOperator { sign: 'a' }));
/// ```
pub fn resolve(left: f64, right: f64, sign: char) -> EvalResult<f64> {
    Ok(Sign::try_from(sign)?.apply(left, right))
}

/// Computes one reduction step on behalf of the reducer.
///
/// The reducer only talks to the resolver through this trait, which lets a
/// caller observe or replace individual steps. Any
/// `Fn(f64, f64, char) -> EvalResult<f64>` closure implements it.
pub trait Resolve {
    /// Applies `sign` to `left` and `right`.
    ///
    /// # Errors
    /// Implementations fail with [`EvalError::InvalidOperator`] for an
    /// operator they do not know.
    fn resolve(&self, left: f64, right: f64, sign: char) -> EvalResult<f64>;
}

/// The standard resolver, backed by [`resolve`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SignResolver;

impl Resolve for SignResolver {
    fn resolve(&self, left: f64, right: f64, sign: char) -> EvalResult<f64> {
        resolve(left, right, sign)
    }
}

impl<F> Resolve for F where F: Fn(f64, f64, char) -> EvalResult<f64>
{
    fn resolve(&self, left: f64, right: f64, sign: char) -> EvalResult<f64> {
        self(left, right, sign)
    }
}
