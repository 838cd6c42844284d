use minpath::data_structures::Frontier;

#[test]
fn pops_in_ascending_priority_order() {
    let mut frontier: Frontier<&str, i64> = Frontier::new();
    frontier.push("c", 30);
    frontier.push("a", 10);
    frontier.push("b", 20);

    assert_eq!(frontier.pop(), Some(("a", 10)));
    assert_eq!(frontier.pop(), Some(("b", 20)));
    assert_eq!(frontier.pop(), Some(("c", 30)));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn superseded_entries_stay_queued() {
    // An improved priority is a second entry, not a decrease-key; the old
    // entry surfaces later and it is the caller's job to discard it
    let mut frontier: Frontier<&str, i64> = Frontier::new();
    frontier.push("a", 50);
    frontier.push("a", 5);

    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(), Some(("a", 5)));
    assert_eq!(frontier.pop(), Some(("a", 50)));
}

#[test]
fn peek_does_not_remove() {
    let mut frontier: Frontier<&str, i64> = Frontier::new();
    frontier.push("a", 1);

    assert_eq!(frontier.peek(), Some(("a", 1)));
    assert_eq!(frontier.len(), 1);
    assert_eq!(frontier.pop(), Some(("a", 1)));
    assert!(frontier.is_empty());
}

#[test]
fn clear_discards_all_entries() {
    let mut frontier: Frontier<u32, i64> = Frontier::new();
    for v in 0..10 {
        frontier.push(v, i64::from(v));
    }

    frontier.clear();
    assert!(frontier.is_empty());
    assert_eq!(frontier.pop(), None);
}
