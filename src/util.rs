/// Numeral helpers.
///
/// This module converts computed values back into the text that is spliced
/// into an expression, and recognizes the plain numerals that count as a
/// successful result.
pub mod num;
