//! Unit tests for `Trampoline<A>`.
//!
//! Tests cover:
//! - Basic construction (done, suspend)
//! - Accumulating recursion over a `Sequence`
//! - Mutual recursion (is_even, is_odd)
//! - Stack safety with deep recursion
//! - Single-step evaluation

#![cfg(feature = "control")]

use recursia::Sequence;
use recursia::control::Trampoline;
use rstest::rstest;

// =============================================================================
// Basic Construction
// =============================================================================

#[rstest]
fn done_returns_value() {
    assert_eq!(Trampoline::done(42).run(), 42);
}

#[rstest]
fn done_with_owned_value() {
    let trampoline = Trampoline::done("hello".to_string());
    assert!(trampoline.is_done());
    assert_eq!(trampoline.run(), "hello");
}

#[rstest]
fn nested_suspend() {
    let trampoline = Trampoline::suspend(|| {
        Trampoline::suspend(|| Trampoline::suspend(|| Trampoline::done(42)))
    });
    assert!(!trampoline.is_done());
    assert_eq!(trampoline.run(), 42);
}

#[rstest]
fn suspend_defers_side_effects() {
    use std::cell::Cell;
    use std::rc::Rc;

    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let trampoline = Trampoline::suspend(move || {
        counter.set(counter.get() + 1);
        Trampoline::done(())
    });
    assert_eq!(calls.get(), 0);
    trampoline.run();
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Recursion over a Sequence
// =============================================================================

fn maximum(sequence: Sequence<i32>, best: Option<i32>) -> Trampoline<Option<i32>> {
    match sequence.uncons() {
        None => Trampoline::done(best),
        Some((&head, rest)) => {
            let best = Some(best.map_or(head, |current| current.max(head)));
            let rest = rest.clone();
            Trampoline::suspend(move || maximum(rest, best))
        }
    }
}

#[rstest]
#[case(vec![], None)]
#[case(vec![3], Some(3))]
#[case(vec![3, 9, -2, 9, 4], Some(9))]
fn sequence_maximum(#[case] values: Vec<i32>, #[case] expected: Option<i32>) {
    assert_eq!(maximum(Sequence::from(values), None).run(), expected);
}

#[rstest]
fn sequence_maximum_is_stack_safe() {
    let sequence: Sequence<i32> = (0..250_000).collect();
    assert_eq!(maximum(sequence, None).run(), Some(249_999));
}

// =============================================================================
// Mutual Recursion (is_even, is_odd)
// =============================================================================

fn is_even(n: u64) -> Trampoline<bool> {
    if n == 0 {
        Trampoline::done(true)
    } else {
        Trampoline::suspend(move || is_odd(n - 1))
    }
}

fn is_odd(n: u64) -> Trampoline<bool> {
    if n == 0 {
        Trampoline::done(false)
    } else {
        Trampoline::suspend(move || is_even(n - 1))
    }
}

#[rstest]
#[case(0, true)]
#[case(1, false)]
#[case(2, true)]
#[case(101, false)]
#[case(1_000_000, true)]
fn mutual_is_even(#[case] input: u64, #[case] expected: bool) {
    assert_eq!(is_even(input).run(), expected);
    assert_eq!(is_odd(input).run(), !expected);
}

// =============================================================================
// Single Steps
// =============================================================================

#[rstest]
fn step_on_done_returns_value() {
    assert_eq!(Trampoline::done(5).step().ok(), Some(5));
}

#[rstest]
fn step_advances_one_suspension() {
    let trampoline = is_even(2);
    let after_one = trampoline.step().err().unwrap();
    let after_two = after_one.step().err().unwrap();
    assert!(after_two.is_done());
    assert!(after_two.run());
}
