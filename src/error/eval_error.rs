#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can end the evaluation of an expression.
///
/// Every variant is terminal: the first one encountered becomes the result of
/// the evaluation and no further reduction is attempted.
pub enum EvalError {
    /// The expression does not contain as many `(` as `)`.
    ///
    /// Only the counts are compared, so `)(` is considered balanced.
    Unbalanced,
    /// A resolve step was asked to apply an operator outside of
    /// `+ - * x / %`.
    InvalidOperator {
        /// The offending operator character.
        sign: char,
    },
    /// Reduction finished but the residue is not a plain numeral.
    Invalid,
}

impl EvalError {
    /// Returns the fixed message associated with this error.
    ///
    /// # Example
    /// ```
    /// use exprsolve::error::EvalError;
    ///
    /// assert_eq!(EvalError::Unbalanced.message(), "unbalanced expression");
    /// assert_eq!(EvalError::InvalidOperator { sign: 'a' }.message(),
    ///            "invalid sign expression");
    /// assert_eq!(EvalError::Invalid.message(), "invalid expression");
    /// ```
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Unbalanced => "unbalanced expression",
            Self::InvalidOperator { .. } => "invalid sign expression",
            Self::Invalid => "invalid expression",
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for EvalError {}
