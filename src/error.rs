/// Evaluation errors.
///
/// Defines the three ways an evaluation can fail: a parenthesis count
/// mismatch, an unknown operator reaching the resolver, or a residue that is
/// not a numeral once reduction is done.
pub mod eval_error;

pub use eval_error::EvalError;

/// Result type used throughout the crate.
///
/// Every fallible operation returns either a value of type `T` or the
/// [`EvalError`] that ended the evaluation.
pub type EvalResult<T> = Result<T, EvalError>;
