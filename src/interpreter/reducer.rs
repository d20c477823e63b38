use std::ops::Range;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        lexer::{Lexeme, Token, tokenize},
        operator::{Resolve, SignResolver},
    },
    util::num::{is_numeral, to_numeral},
};

/// A binary operation found in the expression, ready to be resolved.
#[derive(Debug, Clone, PartialEq)]
struct Candidate {
    left:  f64,
    sign:  char,
    right: f64,
    /// Byte range of the matched text, parentheses included when grouped.
    span:  Range<usize>,
}

/// Reduces expressions to a single numeral by repeated substitution.
///
/// The expression text is the only state. Each step looks for the leftmost
/// `(<integer><operator><integer>)` group, resolves it and writes the result
/// back in place of the group. Once no group is left, a single bare
/// `<integer><operator><integer>` pair is reduced, and the residue must then
/// be a plain numeral.
///
/// ## Usage
///
/// `Reducer::new()` resolves with [`SignResolver`]. Use
/// [`Reducer::with_resolver`] to route every step through another
/// [`Resolve`] implementation.
#[derive(Debug, Clone, Default)]
pub struct Reducer<R = SignResolver> {
    resolver: R,
}

impl Reducer {
    /// Creates a reducer backed by the standard operator resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self { resolver: SignResolver }
    }
}

impl<R: Resolve> Reducer<R> {
    /// Creates a reducer that resolves every step through `resolver`.
    ///
    /// # Example
    /// ```
    /// use std::cell::Cell;
    ///
    /// use exprsolve::{interpreter::reducer::Reducer, resolve};
    ///
    /// let steps = Cell::new(0);
    /// let reducer = Reducer::with_resolver(|a: f64, b: f64, sign: char| {
    ///     steps.set(steps.get() + 1);
    ///     resolve(a, b, sign)
    /// });
    ///
    /// assert_eq!(reducer.reduce("((2+3)*(4-1))").unwrap(), "15");
    /// assert_eq!(steps.get(), 3);
    /// ```
    pub const fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Reduces `source` to its numeric result.
    ///
    /// The steps are, in order:
    /// 1. Remove all whitespace.
    /// 2. Compare the number of `(` and `)`; nesting order is not checked.
    /// 3. Resolve the leftmost parenthesized pair until none is left.
    /// 4. Resolve at most one bare pair.
    /// 5. Accept the residue only if it is made of ASCII digits.
    ///
    /// # Parameters
    /// - `source`: The expression to reduce.
    ///
    /// # Returns
    /// The residue numeral, such as `"135"`.
    ///
    /// # Errors
    /// - [`EvalError::Unbalanced`] if the parenthesis counts differ. This is
    ///   reported before any reduction happens.
    /// - Whatever the resolver returns for a step; reduction stops there.
    /// - [`EvalError::Invalid`] if the residue is not a numeral.
    pub fn reduce(&self, source: &str) -> EvalResult<String> {
        let mut expr: String = source.chars().filter(|c| !c.is_whitespace()).collect();

        check_balance(&expr)?;

        while let Some(candidate) = find_grouped(&tokenize(&expr)) {
            self.substitute(&mut expr, candidate)?;
        }

        if let Some(candidate) = find_flat(&tokenize(&expr)) {
            self.substitute(&mut expr, candidate)?;
        }

        if !is_numeral(&expr) {
            log::debug!("residue {expr:?} is not a numeral");
            return Err(EvalError::Invalid);
        }

        Ok(expr)
    }

    /// Resolves `candidate` and writes the result over its span.
    fn substitute(&self, expr: &mut String, candidate: Candidate) -> EvalResult<()> {
        let Candidate { left, sign, right, span } = candidate;

        let value = match self.resolver.resolve(left, right, sign) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("resolving {} failed: {e}", &expr[span]);
                return Err(e);
            },
        };
        let numeral = to_numeral(value);

        log::debug!("{} => {numeral}", &expr[span.clone()]);
        expr.replace_range(span, &numeral);
        log::debug!("expression is now {expr:?}");

        Ok(())
    }
}

/// Fails with [`EvalError::Unbalanced`] unless `(` and `)` occur equally
/// often.
fn check_balance(expr: &str) -> EvalResult<()> {
    let opening = expr.matches('(').count();
    let closing = expr.matches(')').count();

    if opening == closing {
        Ok(())
    } else {
        log::debug!("{opening} opening and {closing} closing parentheses");
        Err(EvalError::Unbalanced)
    }
}

/// Finds the leftmost `( Number Sign Number )` group.
///
/// A group cannot contain another group, so the leftmost match is always an
/// innermost one.
fn find_grouped(lexemes: &[Lexeme]) -> Option<Candidate> {
    lexemes.windows(5).find_map(|window| match window {
                          [Lexeme { token: Token::LParen, span: open },
                           Lexeme { token: Token::Number(left), .. },
                           Lexeme { token: Token::Sign(sign), .. },
                           Lexeme { token: Token::Number(right), .. },
                           Lexeme { token: Token::RParen, span: close }] => {
                              Some(Candidate { left:  *left,
                                               sign:  *sign,
                                               right: *right,
                                               span:  open.start..close.end, })
                          },
                          _ => None,
                      })
}

/// Finds the leftmost bare `Number Sign Number` sequence.
fn find_flat(lexemes: &[Lexeme]) -> Option<Candidate> {
    lexemes.windows(3).find_map(|window| match window {
                          [Lexeme { token: Token::Number(left), span: first },
                           Lexeme { token: Token::Sign(sign), .. },
                           Lexeme { token: Token::Number(right), span: last }] => {
                              Some(Candidate { left:  *left,
                                               sign:  *sign,
                                               right: *right,
                                               span:  first.start..last.end, })
                          },
                          _ => None,
                      })
}
