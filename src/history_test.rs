use super::*;

#[test]
fn new_is_empty() {
    let h: UndoHistory<u32> = UndoHistory::new(20);
    assert!(h.is_empty());
    assert_eq!(h.len(), 0);
    assert_eq!(h.capacity(), 20);
}

#[test]
fn zero_capacity_becomes_one() {
    let mut h = UndoHistory::new(0);
    assert_eq!(h.capacity(), 1);
    h.push(1);
    h.push(2);
    assert_eq!(h.len(), 1);
    assert_eq!(h.pop(), Some(2));
}

#[test]
fn pop_is_lifo() {
    let mut h = UndoHistory::new(5);
    h.push(1);
    h.push(2);
    h.push(3);
    assert_eq!(h.pop(), Some(3));
    assert_eq!(h.pop(), Some(2));
    assert_eq!(h.pop(), Some(1));
    assert_eq!(h.pop(), None);
}

#[test]
fn pop_empty_is_none() {
    let mut h: UndoHistory<u32> = UndoHistory::new(3);
    assert_eq!(h.pop(), None);
    assert_eq!(h.pop(), None);
}

#[test]
fn never_exceeds_capacity() {
    let mut h = UndoHistory::new(20);
    for i in 0..100 {
        h.push(i);
        assert!(h.len() <= 20);
    }
    assert_eq!(h.len(), 20);
}

#[test]
fn evicts_oldest_first() {
    let mut h = UndoHistory::new(20);
    for i in 0..25 {
        h.push(i);
    }
    let popped: Vec<_> = std::iter::from_fn(|| h.pop()).collect();
    let expected: Vec<_> = (5..25).rev().collect();
    assert_eq!(popped, expected);
}
