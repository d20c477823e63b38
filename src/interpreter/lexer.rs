use std::ops::Range;

use logos::Logos;

/// Represents a lexical token of an expression.
///
/// The lexer runs on expressions that already had their whitespace removed,
/// so there is no token for blanks.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// A maximal run of ASCII digits, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// One of the operator characters `+ - * x / %`.
    #[regex(r"[+\-*x/%]", first_char)]
    Sign(char),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other character, such as `a` or the `.` of a fractional result.
    ///
    /// Stray characters are not an error while reducing; they only make the
    /// final residue invalid.
    #[regex(r"[^0-9+\-*x/%()]", first_char)]
    Stray(char),
}

/// A token together with its byte range in the scanned expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The recognized token.
    pub token: Token,
    /// Where the token sits in the source, used to splice results back in.
    pub span:  Range<usize>,
}

/// Splits an expression into lexemes.
///
/// Lexing never fails: a slice the lexer cannot classify is kept as a
/// [`Token::Stray`] so that later stages see every character of the input.
///
/// # Parameters
/// - `source`: The expression, without whitespace.
///
/// # Returns
/// The lexemes in source order.
///
/// # Example
/// ```
/// use exprsolve::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("(12x3)").into_iter().map(|l| l.token).collect();
/// assert_eq!(tokens,
///            vec![Token::LParen,
///                 Token::Number(12.0),
///                 Token::Sign('x'),
///                 Token::Number(3.0),
///                 Token::RParen]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let token = token.unwrap_or_else(|()| {
                             Token::Stray(lexer.slice().chars().next().unwrap_or('\u{fffd}'))
                         });
        lexemes.push(Lexeme { token, span });
    }

    log::trace!("lexed {source:?} into {} lexemes", lexemes.len());
    lexemes
}

/// Parses a digit run into its floating-point value.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Returns the single character matched by the current token.
fn first_char(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}
