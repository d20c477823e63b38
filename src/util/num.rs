/// Renders a computed value as the text spliced back into an expression.
///
/// Integral values print without a fractional part, so `5.0` becomes `5`.
/// Negative, fractional and non-finite values keep their sign, decimal point
/// or name (`-1`, `2.5`, `inf`, `NaN`) and therefore never read back as a
/// single operand.
///
/// ## Example
/// ```
/// use exprsolve::util::num::to_numeral;
///
/// assert_eq!(to_numeral(135.0), "135");
/// assert_eq!(to_numeral(-1.0), "-1");
/// assert_eq!(to_numeral(0.5), "0.5");
/// assert_eq!(to_numeral(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn to_numeral(value: f64) -> String {
    value.to_string()
}

/// Checks that `text` is a non-empty run of ASCII digits.
///
/// ## Example
/// ```
/// use exprsolve::util::num::is_numeral;
///
/// assert!(is_numeral("0042"));
/// assert!(!is_numeral(""));
/// assert!(!is_numeral("2.5"));
/// assert!(!is_numeral("-1"));
/// ```
#[must_use]
pub fn is_numeral(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
