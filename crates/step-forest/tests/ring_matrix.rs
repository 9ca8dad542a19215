use step_forest::ring::{self, RingList};
use step_forest::{Outcome, Phase, Step, Trace};

fn build(values: &[i64]) -> RingList<i64> {
    let mut list = RingList::new();
    let mut trace = Trace::new();
    for &v in values {
        ring::insert_at_end(&mut list, v, &mut trace);
    }
    list
}

fn phases(steps: &[Step<i64>]) -> Vec<Phase> {
    steps.iter().map(|s| s.phase).collect()
}

fn values(list: &RingList<i64>) -> Vec<i64> {
    list.to_bounded_sequence(list.len())
        .iter()
        .map(|&i| list.node(i).value)
        .collect()
}

#[test]
fn ring_smoke() {
    let list = build(&[20, 30, 40]);
    list.assert_valid().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(values(&list), vec![20, 30, 40]);
}

#[test]
fn ring_first_insert_links_to_itself() {
    let mut list = RingList::new();
    let mut trace = Trace::new();
    ring::insert_at_beginning(&mut list, 7, &mut trace);

    assert!(phases(trace.steps()).contains(&Phase::LinkSelf));
    let head = list.head_index().unwrap();
    assert_eq!(list.node(head).next, head);
    list.assert_valid().unwrap();
}

#[test]
fn ring_insert_at_beginning_moves_head() {
    let mut list = build(&[20, 30, 40]);
    let mut trace = Trace::new();
    ring::insert_at_beginning(&mut list, 10, &mut trace);

    let ph = phases(trace.steps());
    assert!(ph.contains(&Phase::Traverse));
    assert!(ph.contains(&Phase::Splice));
    assert_eq!(values(&list), vec![10, 20, 30, 40]);
    list.assert_valid().unwrap();
}

#[test]
fn ring_insert_at_end_keeps_head() {
    let mut list = build(&[20, 30, 40]);
    let mut trace = Trace::new();
    ring::insert_at_end(&mut list, 50, &mut trace);

    assert_eq!(values(&list), vec![20, 30, 40, 50]);
    list.assert_valid().unwrap();
}

#[test]
fn ring_delete_head_relinks_tail() {
    let mut list = build(&[20, 30, 40]);
    let mut trace = Trace::new();
    let outcome = ring::delete(&mut list, &20, &mut trace);

    assert_eq!(outcome, Outcome::Deleted);
    assert!(phases(trace.steps()).contains(&Phase::RelinkTail));
    assert_eq!(values(&list), vec![30, 40]);
    list.assert_valid().unwrap();
}

#[test]
fn ring_delete_interior_splices() {
    let mut list = build(&[20, 30, 40]);
    let mut trace = Trace::new();
    let outcome = ring::delete(&mut list, &30, &mut trace);

    assert_eq!(outcome, Outcome::Deleted);
    assert!(phases(trace.steps()).contains(&Phase::Splice));
    assert_eq!(values(&list), vec![20, 40]);
    list.assert_valid().unwrap();
}

#[test]
fn ring_delete_only_node_empties_the_list() {
    let mut list = build(&[20]);
    let mut trace = Trace::new();
    let outcome = ring::delete(&mut list, &20, &mut trace);

    assert_eq!(outcome, Outcome::Deleted);
    assert!(phases(trace.steps()).contains(&Phase::Unlink));
    assert!(list.is_empty());
    assert_eq!(list.head_index(), None);
    list.assert_valid().unwrap();
}

#[test]
fn ring_delete_miss_stops_after_one_revolution() {
    let mut list = build(&[20, 30, 40]);
    let mut trace = Trace::new();
    let outcome = ring::delete(&mut list, &99, &mut trace);

    assert_eq!(outcome, Outcome::NotFound);
    assert_eq!(trace.last().unwrap().phase, Phase::NotFound);
    // One comparison per node, no more.
    let compares = trace
        .steps()
        .iter()
        .filter(|s| s.phase == Phase::Compare)
        .count();
    assert_eq!(compares, 3);
    assert_eq!(list.len(), 3);
    list.assert_valid().unwrap();
}

#[test]
fn ring_delete_on_empty_is_a_described_noop() {
    let mut list = RingList::<i64>::new();
    let mut trace = Trace::new();
    let outcome = ring::delete(&mut list, &1, &mut trace);
    assert_eq!(outcome, Outcome::Empty);
    assert_eq!(trace.last().unwrap().phase, Phase::Empty);
}

#[test]
fn ring_traverse_wraps_around() {
    let list = build(&[20, 30, 40]);
    let mut trace = Trace::new();
    let outcome = ring::traverse(&list, 5, &mut trace);

    assert_eq!(outcome, Outcome::Traversed);
    // Start step plus one per hop.
    assert_eq!(trace.len(), 6);
    let last = trace.last().unwrap();
    let at = last.current.unwrap();
    assert_eq!(list.node(at).value, 40);
}

#[test]
fn ring_traverse_on_empty_is_a_described_noop() {
    let list = RingList::<i64>::new();
    let mut trace = Trace::new();
    assert_eq!(ring::traverse(&list, 5, &mut trace), Outcome::Empty);
    assert_eq!(trace.last().unwrap().phase, Phase::Empty);
}

#[test]
fn ring_bounded_sequence_stops_at_cap_or_revolution() {
    let list = build(&[20, 30, 40]);

    let capped = list.to_bounded_sequence(2);
    assert_eq!(capped.len(), 2);

    let full = list.to_bounded_sequence(10);
    assert_eq!(full.len(), 3);

    assert!(RingList::<i64>::new().to_bounded_sequence(10).is_empty());
}

#[test]
fn ring_closure_after_every_mutation() {
    let mut list = RingList::new();
    let mut trace = Trace::new();
    for v in 0..12 {
        if v % 2 == 0 {
            ring::insert_at_end(&mut list, v, &mut trace);
        } else {
            ring::insert_at_beginning(&mut list, v, &mut trace);
        }
        list.assert_valid().unwrap();
    }
    for v in [0, 11, 4, 99] {
        ring::delete(&mut list, &v, &mut trace);
        list.assert_valid().unwrap();
    }

    // Following next exactly len times returns to the head, and never earlier.
    let head = list.head_index().unwrap();
    let mut curr = head;
    for hop in 1..=list.len() {
        curr = list.node(curr).next;
        if hop < list.len() {
            assert_ne!(curr, head, "ring closed prematurely after {hop} hops");
        }
    }
    assert_eq!(curr, head);
}
