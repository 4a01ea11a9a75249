use route_solver::data_structures::MinQueue;

#[test]
fn pops_entries_in_ascending_priority_order() {
    let mut queue: MinQueue<&str, u32> = MinQueue::new();
    queue.push("c", 30);
    queue.push("a", 10);
    queue.push("b", 20);

    assert_eq!(queue.pop(), Some(("a", 10)));
    assert_eq!(queue.pop(), Some(("b", 20)));
    assert_eq!(queue.pop(), Some(("c", 30)));
    assert_eq!(queue.pop(), None);
}

// Lazy deletion pushes the same vertex repeatedly; every entry must come
// back out, best priority first, so callers can discard the stale ones.
#[test]
fn stale_duplicates_coexist() {
    let mut queue: MinQueue<&str, u32> = MinQueue::new();
    queue.push("a", 50);
    queue.push("a", 10);
    queue.push("a", 30);

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.pop(), Some(("a", 10)));
    assert_eq!(queue.pop(), Some(("a", 30)));
    assert_eq!(queue.pop(), Some(("a", 50)));
    assert!(queue.is_empty());
}
