//! Snapshot independence: a recorded step owns its structure outright, so
//! tampering with one snapshot (or mutating the live structure afterwards)
//! never changes any other step.

use step_forest::avl::{self, AvlTree};
use step_forest::ring::{self, RingList};
use step_forest::{Snapshot, Trace};

#[test]
fn mutating_one_snapshot_leaves_the_others_alone() {
    let mut tree = AvlTree::new();
    let mut trace = Trace::new();
    for v in [50, 30, 70, 20, 40, 10] {
        avl::insert(&mut tree, v, &mut trace);
    }

    let mut steps = trace.into_steps();
    assert!(steps.len() >= 2);
    let pristine: Vec<_> = steps.clone();

    // Vandalize the first snapshot in place.
    let Snapshot::Avl { nodes, root } = &mut steps[0].snapshot else {
        panic!("AVL trace holds AVL snapshots");
    };
    *root = None;
    nodes.clear();

    for (i, step) in steps.iter().enumerate().skip(1) {
        assert_eq!(
            step.snapshot, pristine[i].snapshot,
            "step {i} changed when step 0 was mutated"
        );
    }
}

#[test]
fn later_mutations_do_not_reach_recorded_steps() {
    let mut tree = AvlTree::new();
    let mut trace = Trace::new();
    for v in [50, 30, 70] {
        avl::insert(&mut tree, v, &mut trace);
    }
    let recorded = trace.into_steps();
    let pristine = recorded.clone();

    // Keep mutating the live tree; the captured steps must not move.
    let mut scratch = Trace::new();
    for v in [20, 40, 10, 60, 80] {
        avl::insert(&mut tree, v, &mut scratch);
    }

    assert_eq!(recorded, pristine);
}

#[test]
fn ring_snapshots_are_independent_too() {
    let mut list = RingList::new();
    let mut trace = Trace::new();
    for v in [20, 30, 40] {
        ring::insert_at_end(&mut list, v, &mut trace);
    }

    let mut steps = trace.into_steps();
    let pristine = steps.clone();

    let last = steps.len() - 1;
    let Snapshot::Ring { nodes, head, len } = &mut steps[last].snapshot else {
        panic!("ring trace holds ring snapshots");
    };
    *head = None;
    *len = 0;
    nodes.clear();

    for i in 0..last {
        assert_eq!(steps[i].snapshot, pristine[i].snapshot);
    }
}
