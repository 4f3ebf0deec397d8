//! Unit tests for `Sequence<T>`.

use recursia::Sequence;
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
fn new_is_empty() {
    let sequence: Sequence<i32> = Sequence::new();
    assert!(sequence.is_empty());
    assert_eq!(sequence.len(), 0);
    assert_eq!(sequence.head(), None);
    assert_eq!(sequence, Sequence::default());
}

#[rstest]
fn singleton_has_one_element() {
    let sequence = Sequence::singleton("only");
    assert_eq!(sequence.len(), 1);
    assert_eq!(sequence.head(), Some(&"only"));
    assert!(sequence.tail().is_empty());
}

#[rstest]
fn constructors_agree() {
    let from_array = Sequence::from([1, 2, 3]);
    let from_vec = Sequence::from(vec![1, 2, 3]);
    let from_slice = Sequence::from_slice(&[1, 2, 3]);
    let from_cons = Sequence::new().cons(3).cons(2).cons(1);
    let collected: Sequence<i32> = (1..=3).collect();

    assert_eq!(from_array, from_vec);
    assert_eq!(from_vec, from_slice);
    assert_eq!(from_slice, from_cons);
    assert_eq!(from_cons, collected);
}

#[rstest]
fn tail_is_shared_and_original_kept() {
    let sequence = Sequence::from([1, 2, 3]);
    let tail = sequence.tail();
    assert_eq!(tail.to_vec(), vec![2, 3]);
    assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn iterators_report_exact_size() {
    let sequence = Sequence::from([1, 2, 3, 4]);
    let mut iter = sequence.iter();
    assert_eq!(iter.len(), 4);
    iter.next();
    assert_eq!(iter.len(), 3);
    assert_eq!(sequence.clone().into_iter().len(), 4);
}

#[rstest]
fn owning_iterator_yields_in_order() {
    let sequence = Sequence::from([String::from("a"), String::from("b")]);
    let collected: Vec<String> = sequence.into_iter().collect();
    assert_eq!(collected, vec!["a", "b"]);
}

#[rstest]
#[case(vec![1, 2], vec![1, 2], true)]
#[case(vec![1, 2], vec![2, 1], false)]
#[case(vec![1], vec![1, 1], false)]
#[case(vec![], vec![], true)]
fn equality_is_element_wise(#[case] left: Vec<i32>, #[case] right: Vec<i32>, #[case] equal: bool) {
    assert_eq!(Sequence::from(left) == Sequence::from(right), equal);
}

#[rstest]
fn equal_sequences_hash_equal() {
    let mut set = HashSet::new();
    set.insert(Sequence::from([1, 2, 3]));
    assert!(set.contains(&Sequence::new().cons(3).cons(2).cons(1)));
    assert!(!set.contains(&Sequence::from([3, 2, 1])));
}
