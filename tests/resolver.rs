use std::cell::{Cell, RefCell};

use exprsolve::{
    error::{EvalError, EvalResult},
    interpreter::reducer::Reducer,
    resolve,
};
use pretty_assertions::assert_eq;

#[test]
fn sum() {
    assert_eq!(resolve(2.0, 3.0, '+'), Ok(5.0));
}

#[test]
fn difference() {
    assert_eq!(resolve(2.0, 3.0, '-'), Ok(-1.0));
}

#[test]
fn product_with_either_sign() {
    assert_eq!(resolve(2.0, 3.0, '*'), Ok(6.0));
    assert_eq!(resolve(2.0, 3.0, 'x'), Ok(6.0));
}

#[test]
fn quotient() {
    assert_eq!(resolve(6.0, 3.0, '/'), Ok(2.0));
    assert_eq!(resolve(1.0, 4.0, '/'), Ok(0.25));
}

#[test]
fn remainder() {
    assert_eq!(resolve(5.0, 2.0, '%'), Ok(1.0));
    assert_eq!(resolve(-7.0, 2.0, '%'), Ok(-1.0));
    assert_eq!(resolve(7.5, 2.0, '%'), Ok(1.5));
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(resolve(1.0, 0.0, '/'), Ok(f64::INFINITY));
    assert!(resolve(0.0, 0.0, '/').unwrap().is_nan());
    assert!(resolve(1.0, 0.0, '%').unwrap().is_nan());
}

#[test]
fn invalid_sign_is_error() {
    let err = resolve(2.0, 3.0, 'a').unwrap_err();
    assert_eq!(err, EvalError::InvalidOperator { sign: 'a' });
    assert_eq!(err.to_string(), "invalid sign expression");

    for sign in ['X', '^', '(', ' ', '÷'] {
        assert!(resolve(2.0, 3.0, sign).is_err(), "sign {sign:?} was accepted");
    }
}

#[test]
fn steps_are_resolved_leftmost_and_innermost_first() {
    let calls = RefCell::new(Vec::new());
    let reducer = Reducer::with_resolver(|a: f64, b: f64, sign: char| {
        calls.borrow_mut().push((a, b, sign));
        resolve(a, b, sign)
    });

    assert_eq!(reducer.reduce("(3+2) * (3*(4+5))"), Ok("135".to_string()));
    assert_eq!(*calls.borrow(),
               vec![(3.0, 2.0, '+'), (4.0, 5.0, '+'), (3.0, 9.0, '*'), (5.0, 27.0, '*')]);
}

#[test]
fn resolved_values_are_substituted_verbatim() {
    let answers = [5.0, 9.0, 27.0, 135.0];
    let calls = Cell::new(0);
    let reducer = Reducer::with_resolver(|_: f64, _: f64, _: char| -> EvalResult<f64> {
        let answer = answers[calls.get()];
        calls.set(calls.get() + 1);
        Ok(answer)
    });

    assert_eq!(reducer.reduce("(3+2) * (3*(4+5))"), Ok("135".to_string()));
    assert_eq!(calls.get(), 4);
}

#[test]
fn single_group_resolves_once() {
    let calls = RefCell::new(Vec::new());
    let reducer = Reducer::with_resolver(|a: f64, b: f64, sign: char| {
        calls.borrow_mut().push((a, b, sign));
        resolve(a, b, sign)
    });

    assert_eq!(reducer.reduce("(2+3)"), Ok("5".to_string()));
    assert_eq!(*calls.borrow(), vec![(2.0, 3.0, '+')]);
}

#[test]
fn resolver_failure_short_circuits() {
    let calls = Cell::new(0);
    let reducer = Reducer::with_resolver(|a: f64, b: f64, sign: char| {
        calls.set(calls.get() + 1);
        if sign == '*' { Err(EvalError::InvalidOperator { sign }) } else { resolve(a, b, sign) }
    });

    assert_eq!(reducer.reduce("(2+3)+(4*1)+(5-1)"),
               Err(EvalError::InvalidOperator { sign: '*' }));
    assert_eq!(calls.get(), 2);
}

#[test]
fn resolver_failure_preempts_final_validation() {
    let reducer = Reducer::with_resolver(|_: f64, _: f64, sign: char| -> EvalResult<f64> {
        Err(EvalError::InvalidOperator { sign })
    });

    assert_eq!(reducer.reduce("(2x3) +"), Err(EvalError::InvalidOperator { sign: 'x' }));
    assert_eq!(reducer.reduce("2 - 3"), Err(EvalError::InvalidOperator { sign: '-' }));
}

#[test]
fn balance_is_checked_before_resolving() {
    let calls = Cell::new(0);
    let reducer = Reducer::with_resolver(|a: f64, b: f64, sign: char| {
        calls.set(calls.get() + 1);
        resolve(a, b, sign)
    });

    assert_eq!(reducer.reduce("((2+3)*(4-1)"), Err(EvalError::Unbalanced));
    assert_eq!(calls.get(), 0);
}
