//! Ring mutators.
//!
//! Both insertions locate the current tail by walking until `next` points
//! back at the head. Deletion distinguishes four cases: empty list, a single
//! self-linked node, the head (the tail must relink to the new head), and an
//! interior node found within one bounded revolution. A miss after a full
//! revolution is a distinct terminal outcome, not an error.

use std::fmt::Display;

use crate::trace::{Outcome, Phase, Step, Trace};

use super::list::RingList;

/// New node becomes the head; the tail relinks to it.
pub fn insert_at_beginning<T>(list: &mut RingList<T>, value: T, trace: &mut Trace<T>) -> Outcome
where
    T: Clone + PartialEq + Display,
{
    let Some(head) = list.head else {
        return insert_into_empty(list, value, trace);
    };

    let tail = list.tail_index().expect("non-empty ring has a tail");
    trace.record(
        Step::new(
            list.snapshot(),
            Phase::Traverse,
            format!(
                "Walked the ring to the tail {} (its next points back at the head)",
                list.node(tail).value,
            ),
        )
        .at(tail)
        .mark([tail])
        .edge(tail, head),
    );

    let n = list.alloc(value);
    list.node_mut(n).next = head;
    list.node_mut(tail).next = n;
    list.head = Some(n);
    list.len += 1;
    trace.record(
        Step::new(
            list.snapshot(),
            Phase::Splice,
            format!(
                "Inserted {} at the beginning — tail {} relinks to the new head",
                list.node(n).value,
                list.node(tail).value,
            ),
        )
        .at(n)
        .mark([n, tail])
        .edge(tail, n)
        .edge(n, head),
    );
    Outcome::Inserted
}

/// New node becomes the tail; the head stays put.
pub fn insert_at_end<T>(list: &mut RingList<T>, value: T, trace: &mut Trace<T>) -> Outcome
where
    T: Clone + PartialEq + Display,
{
    let Some(head) = list.head else {
        return insert_into_empty(list, value, trace);
    };

    let tail = list.tail_index().expect("non-empty ring has a tail");
    trace.record(
        Step::new(
            list.snapshot(),
            Phase::Traverse,
            format!(
                "Walked the ring to the tail {} (its next points back at the head)",
                list.node(tail).value,
            ),
        )
        .at(tail)
        .mark([tail])
        .edge(tail, head),
    );

    let n = list.alloc(value);
    list.node_mut(n).next = head;
    list.node_mut(tail).next = n;
    list.len += 1;
    trace.record(
        Step::new(
            list.snapshot(),
            Phase::Splice,
            format!(
                "Inserted {} at the end — it links back to the head {}",
                list.node(n).value,
                list.node(head).value,
            ),
        )
        .at(n)
        .mark([n, tail])
        .edge(tail, n)
        .edge(n, head),
    );
    Outcome::Inserted
}

fn insert_into_empty<T>(list: &mut RingList<T>, value: T, trace: &mut Trace<T>) -> Outcome
where
    T: Clone + Display,
{
    let n = list.alloc(value);
    list.head = Some(n);
    list.len = 1;
    trace.record(
        Step::new(
            list.snapshot(),
            Phase::LinkSelf,
            format!("List was empty — {} links to itself", list.node(n).value),
        )
        .at(n)
        .mark([n])
        .edge(n, n),
    );
    Outcome::Inserted
}

/// Removes the first node holding `target`, searching at most one revolution.
pub fn delete<T>(list: &mut RingList<T>, target: &T, trace: &mut Trace<T>) -> Outcome
where
    T: Clone + PartialEq + Display,
{
    let Some(head) = list.head else {
        trace.record(Step::new(
            list.snapshot(),
            Phase::Empty,
            "List is empty — nothing to delete",
        ));
        return Outcome::Empty;
    };

    trace.record(
        Step::new(
            list.snapshot(),
            Phase::Compare,
            format!("Compare {} with the head {}", target, list.node(head).value),
        )
        .at(head),
    );

    if list.node(head).value == *target {
        if list.node(head).next == head {
            // Lone self-linked node.
            list.head = None;
            list.len = 0;
            trace.record(
                Step::new(
                    list.snapshot(),
                    Phase::Unlink,
                    format!("Removed the only node {target} — the list is now empty"),
                ),
            );
            return Outcome::Deleted;
        }

        let tail = list.tail_index().expect("non-empty ring has a tail");
        let new_head = list.node(head).next;
        list.node_mut(tail).next = new_head;
        list.head = Some(new_head);
        list.len -= 1;
        trace.record(
            Step::new(
                list.snapshot(),
                Phase::RelinkTail,
                format!(
                    "Removed the head {} — tail {} relinks to the new head {}",
                    target,
                    list.node(tail).value,
                    list.node(new_head).value,
                ),
            )
            .at(new_head)
            .mark([tail, new_head])
            .edge(tail, new_head),
        );
        return Outcome::Deleted;
    }

    // Interior search, bounded to one revolution.
    let mut prev = head;
    let mut curr = list.node(head).next;
    let mut hops = 0;
    while curr != head && hops < list.arena.len() {
        trace.record(
            Step::new(
                list.snapshot(),
                Phase::Compare,
                format!("Compare {} with {}", target, list.node(curr).value),
            )
            .at(curr),
        );
        if list.node(curr).value == *target {
            let next = list.node(curr).next;
            list.node_mut(prev).next = next;
            list.len -= 1;
            trace.record(
                Step::new(
                    list.snapshot(),
                    Phase::Splice,
                    format!(
                        "Removed {} — {} now links to {}",
                        target,
                        list.node(prev).value,
                        list.node(next).value,
                    ),
                )
                .mark([prev, next])
                .edge(prev, next),
            );
            return Outcome::Deleted;
        }
        prev = curr;
        curr = list.node(curr).next;
        hops += 1;
    }

    trace.record(Step::new(
        list.snapshot(),
        Phase::NotFound,
        format!("{target} is not in the list — completed one full revolution"),
    ));
    Outcome::NotFound
}

/// Advances `count` hops around the ring from the head, recording each hop.
/// Pure demonstration; never mutates.
pub fn traverse<T>(list: &RingList<T>, count: usize, trace: &mut Trace<T>) -> Outcome
where
    T: Clone + Display,
{
    let Some(head) = list.head else {
        trace.record(Step::new(
            list.snapshot(),
            Phase::Empty,
            "List is empty — nothing to traverse",
        ));
        return Outcome::Empty;
    };

    let mut curr = head;
    trace.record(
        Step::new(
            list.snapshot(),
            Phase::Traverse,
            format!("Start at the head {}", list.node(head).value),
        )
        .at(head)
        .mark([head]),
    );
    for hop in 1..=count {
        let prev = curr;
        curr = list.node(curr).next;
        trace.record(
            Step::new(
                list.snapshot(),
                Phase::Traverse,
                format!("Hop {hop}: move to {}", list.node(curr).value),
            )
            .at(curr)
            .edge(prev, curr),
        );
    }
    Outcome::Traversed
}

/// Checks ring closure: following `next` exactly `len` hops from the head
/// returns to the head and visits `len` distinct nodes, with no premature
/// closure.
pub fn assert_ring<T>(list: &RingList<T>) -> Result<(), String> {
    let Some(head) = list.head else {
        if list.len() != 0 {
            return Err("Empty list has non-zero len".to_string());
        }
        return Ok(());
    };

    if list.len() == 0 {
        return Err("Non-empty list has len 0".to_string());
    }

    let mut seen = vec![false; list.arena().len()];
    let mut curr = head;
    for hop in 1..=list.len() {
        if seen[curr as usize] {
            return Err(format!("Premature ring closure after {hop} hops"));
        }
        seen[curr as usize] = true;
        curr = list.node(curr).next;
        if curr == head && hop != list.len() {
            return Err(format!("Ring closed after {hop} hops, expected {}", list.len()));
        }
    }
    if curr != head {
        return Err(format!(
            "Following next {} times did not return to the head",
            list.len()
        ));
    }
    Ok(())
}
