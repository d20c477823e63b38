/// The lexer module tokenizes expressions for the reducer.
///
/// The lexer reads the whitespace-free expression and produces digit runs,
/// operator signs, parentheses and stray characters, each with its byte span
/// so that results can be written back into the text.
pub mod lexer;
/// The operator module computes a single binary operation.
///
/// # Responsibilities
/// - Maps the operator characters `+ - * x / %` to arithmetic.
/// - Rejects any other character with an invalid-operator error.
/// - Defines the `Resolve` seam the reducer calls through.
pub mod operator;
/// The reducer module drives the evaluation of a whole expression.
///
/// # Responsibilities
/// - Checks that parentheses are balanced by count.
/// - Repeatedly collapses the leftmost parenthesized pair, then one bare pair.
/// - Validates that what remains is a numeral.
pub mod reducer;
