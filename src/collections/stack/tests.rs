#![cfg(test)]

use super::*;

#[test]
fn test_last_in_first_out() {
    let mut stack = Stack::new();
    for i in 1..=3 {
        stack.push(i);
    }

    assert_eq!(stack.peek(), Ok(&3));
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(2));
    stack.push(4);
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [4, 1]);
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_empty_errors() {
    let mut stack: Stack<String> = Stack::new();
    assert_eq!(stack.pop(), Err(EmptyCollection));
    assert_eq!(stack.peek(), Err(EmptyCollection));
    assert!(stack.peek_mut().is_err());
    assert_eq!(
        EmptyCollection.to_string(),
        "Unable to access the top of an empty collection!"
    );

    stack.push(String::from("a"));
    stack.peek_mut().unwrap().push('b');
    assert_eq!(stack.pop().as_deref(), Ok("ab"));
    assert!(stack.is_empty());
}

#[test]
fn test_collect_and_search() {
    let stack: Stack<u8> = (1..=5).collect();
    assert_eq!(stack.peek(), Ok(&5), "The last collected item should be on top.");
    assert_eq!(stack.search(&5), Some(1));
    assert_eq!(stack.search(&1), Some(5));
    assert_eq!(stack.search(&9), None);

    let mut copy = stack.clone();
    copy.clear();
    assert!(copy.is_empty());
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
}
