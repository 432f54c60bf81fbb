use bounded_queue::{CapacityError, Queue};

#[test]
fn new_queue_is_empty() {
    let queue: Queue<i32> = Queue::new(5);
    assert!(queue.is_empty());
    assert!(!queue.is_full());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.capacity(), 5);
}

#[test]
fn default_queue_has_zero_capacity() {
    let queue: Queue<i32> = Queue::default();
    assert_eq!(queue.capacity(), 0);
    assert!(queue.is_full());
}

#[test]
fn len_counts_each_successful_push() {
    let mut queue = Queue::new(4);
    for k in 1..=4 {
        assert!(queue.push(k).is_ok());
        assert_eq!(queue.len(), k as usize);
    }
}

#[test]
fn is_full_flips_exactly_at_capacity() {
    let mut queue = Queue::new(3);
    assert!(queue.push(1).is_ok());
    assert!(!queue.is_full());
    assert!(queue.push(2).is_ok());
    assert!(!queue.is_full());
    assert!(queue.push(3).is_ok());
    assert!(queue.is_full());
}

#[test]
fn pop_returns_values_in_fifo_order() {
    let mut queue = Queue::new(3);
    assert!(queue.push(1).is_ok());
    assert!(queue.push(2).is_ok());
    assert!(queue.push(3).is_ok());
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(3));
    assert_eq!(queue.pop(), None);
}

#[test]
fn push_to_full_queue_hands_the_value_back() {
    let mut queue = Queue::new(2);
    assert!(queue.push("a").is_ok());
    assert!(queue.push("b").is_ok());
    assert_eq!(queue.push("c"), Err(CapacityError("c")));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.front(), Some(&"a"));
    assert_eq!(queue.back(), Some(&"b"));
}

#[test]
fn zero_capacity_queue_rejects_the_first_push() {
    let mut queue = Queue::new(0);
    assert!(queue.is_full());
    assert_eq!(queue.push(7), Err(CapacityError(7)));
    assert_eq!(queue.len(), 0);
}

#[test]
fn pop_on_empty_queue_returns_none() {
    let mut queue: Queue<i32> = Queue::new(3);
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
}

#[test]
fn front_and_back_agree_on_a_single_element() {
    let mut queue = Queue::new(1);
    assert_eq!(queue.front(), None);
    assert_eq!(queue.back(), None);
    assert!(queue.push(42).is_ok());
    assert_eq!(queue.front(), Some(&42));
    assert_eq!(queue.back(), Some(&42));
}

#[test]
fn inspection_is_idempotent() {
    let mut queue = Queue::new(3);
    assert!(queue.push(1).is_ok());
    assert!(queue.push(2).is_ok());
    for _ in 0..3 {
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.back(), Some(&2));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![&1, &2]);
    }
    assert_eq!(queue.len(), 2);
}

#[test]
fn pop_frees_capacity_for_another_push() {
    let mut queue = Queue::new(1);
    assert!(queue.push(1).is_ok());
    assert_eq!(queue.pop(), Some(1));
    assert!(queue.push(2).is_ok());
    assert_eq!(queue.pop(), Some(2));
}

#[test]
fn interleaved_pushes_and_pops_keep_order() {
    let mut queue = Queue::new(3);
    assert!(queue.push(1).is_ok());
    assert!(queue.push(2).is_ok());
    assert_eq!(queue.pop(), Some(1));
    assert!(queue.push(3).is_ok());
    assert!(queue.push(4).is_ok());
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(3));
    assert_eq!(queue.pop(), Some(4));
    assert!(queue.is_empty());
}

#[test]
fn iter_walks_front_to_back_and_restarts() {
    let mut queue = Queue::new(5);
    for v in ["a", "b", "c"] {
        assert!(queue.push(v).is_ok());
    }
    let first: Vec<_> = queue.iter().collect();
    let second: Vec<_> = queue.iter().collect();
    assert_eq!(first, vec![&"a", &"b", &"c"]);
    assert_eq!(first, second);
}

#[test]
fn queue_reference_is_into_iterator() {
    let mut queue = Queue::new(3);
    assert!(queue.push(10).is_ok());
    assert!(queue.push(20).is_ok());
    let mut sum = 0;
    for value in &queue {
        sum += value;
    }
    assert_eq!(sum, 30);
}

#[test]
fn shrinking_capacity_evicts_nothing() {
    let mut queue = Queue::new(5);
    for v in 1..=5 {
        assert!(queue.push(v).is_ok());
    }
    queue.set_capacity(3);
    assert_eq!(queue.len(), 5);
    assert!(queue.is_full());
    assert_eq!(queue.push(6), Err(CapacityError(6)));
    // Pops still drain in order until the length fits the new bound.
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(2));
    assert!(queue.is_full());
    assert_eq!(queue.pop(), Some(3));
    assert!(queue.push(6).is_ok());
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec![&4, &5, &6]);
}

#[test]
fn growing_capacity_allows_more_pushes() {
    let mut queue = Queue::new(1);
    assert!(queue.push(1).is_ok());
    assert!(queue.push(2).is_err());
    queue.set_capacity(2);
    assert!(queue.push(2).is_ok());
    assert_eq!(queue.len(), 2);
}

#[test]
fn clear_empties_the_queue() {
    let mut queue = Queue::new(3);
    assert!(queue.push(1).is_ok());
    assert!(queue.push(2).is_ok());
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.front(), None);
    assert_eq!(queue.back(), None);
    assert!(queue.push(9).is_ok());
    assert_eq!(queue.pop(), Some(9));
}

#[test]
fn owned_values_are_released_on_pop() {
    let mut queue = Queue::new(2);
    assert!(queue.push(String::from("alpha")).is_ok());
    assert!(queue.push(String::from("beta")).is_ok());
    let owned = queue.pop();
    assert_eq!(owned.as_deref(), Some("alpha"));
    assert_eq!(queue.front().map(String::as_str), Some("beta"));
}

#[test]
fn capacity_error_displays_the_rejected_value() {
    let mut queue = Queue::new(0);
    let err = queue.push(5).unwrap_err();
    assert_eq!(err.to_string(), "container full, failed to push 5");
    assert_eq!(err.into_inner(), 5);
}
