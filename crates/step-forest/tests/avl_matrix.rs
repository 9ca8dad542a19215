use step_forest::avl::{self, AvlTree};
use step_forest::{Outcome, Phase, Step, Trace};

fn build(values: &[i64]) -> AvlTree<i64> {
    let mut tree = AvlTree::new();
    let mut trace = Trace::new();
    for &v in values {
        avl::insert(&mut tree, v, &mut trace);
    }
    tree
}

fn phases(steps: &[Step<i64>]) -> Vec<Phase> {
    steps.iter().map(|s| s.phase).collect()
}

fn values_in_order(tree: &AvlTree<i64>) -> Vec<i64> {
    tree.in_order().iter().map(|&i| tree.node(i).value).collect()
}

#[test]
fn avl_smoke() {
    let tree = build(&[50, 30, 70, 20, 40]);
    tree.assert_valid().unwrap();
    assert_eq!(tree.len(), 5);
    assert_eq!(values_in_order(&tree), vec![20, 30, 40, 50, 70]);

    let root = tree.root_index().unwrap();
    assert_eq!(tree.node(root).value, 50);
    assert_eq!(tree.node(root).height, 3);
}

#[test]
fn avl_duplicate_is_a_described_noop() {
    let mut tree = build(&[50, 30, 70]);
    let before = values_in_order(&tree);

    let mut trace = Trace::new();
    let outcome = avl::insert(&mut tree, 30, &mut trace);
    assert_eq!(outcome, Outcome::Duplicate);
    assert_eq!(tree.len(), 3);
    assert_eq!(values_in_order(&tree), before);
    assert!(phases(trace.steps()).contains(&Phase::Duplicate));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_ll_case() {
    let mut tree = build(&[30, 20]);
    let mut trace = Trace::new();
    avl::insert(&mut tree, 10, &mut trace);

    let ph = phases(trace.steps());
    assert!(ph.contains(&Phase::LeftLeftCase));
    assert!(ph.contains(&Phase::RotateRightLl));

    let root = tree.root_index().unwrap();
    assert_eq!(tree.node(root).value, 20);
    assert_eq!(tree.node(tree.node(root).l.unwrap()).value, 10);
    assert_eq!(tree.node(tree.node(root).r.unwrap()).value, 30);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_rr_case() {
    let mut tree = build(&[10, 20]);
    let mut trace = Trace::new();
    avl::insert(&mut tree, 30, &mut trace);

    let ph = phases(trace.steps());
    assert!(ph.contains(&Phase::RightRightCase));
    assert!(ph.contains(&Phase::RotateLeftRr));
    assert_eq!(tree.node(tree.root_index().unwrap()).value, 20);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_lr_case() {
    let mut tree = build(&[30, 10]);
    let mut trace = Trace::new();
    avl::insert(&mut tree, 20, &mut trace);

    let ph = phases(trace.steps());
    assert!(ph.contains(&Phase::LeftRightCase));
    assert!(ph.contains(&Phase::RotateLeftLr));
    assert!(ph.contains(&Phase::RotateRightLr));
    assert_eq!(tree.node(tree.root_index().unwrap()).value, 20);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_rl_case() {
    let mut tree = build(&[10, 30]);
    let mut trace = Trace::new();
    avl::insert(&mut tree, 20, &mut trace);

    let ph = phases(trace.steps());
    assert!(ph.contains(&Phase::RightLeftCase));
    assert!(ph.contains(&Phase::RotateRightRl));
    assert!(ph.contains(&Phase::RotateLeftRl));
    assert_eq!(tree.node(tree.root_index().unwrap()).value, 20);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_demo_insert_rebalances_at_root() {
    // Demo seeds, then 10: the left-left chain 30-20-10 unbalances the root.
    let mut tree = build(&[50, 30, 70, 20, 40]);
    let mut trace = Trace::new();
    avl::insert(&mut tree, 10, &mut trace);

    let rotation = trace
        .steps()
        .iter()
        .find(|s| s.phase == Phase::RotateRightLl)
        .expect("LL rotation step recorded");
    assert_eq!(rotation.phase.label(), "Right Rotation (LL)");

    let root = tree.root_index().unwrap();
    assert_eq!(tree.node(root).value, 30);
    assert_eq!(tree.node(tree.node(root).l.unwrap()).value, 20);
    assert_eq!(tree.node(tree.node(root).r.unwrap()).value, 50);
    assert!((-1..=1).contains(&tree.balance_factor(root)));
    assert_eq!(values_in_order(&tree), vec![10, 20, 30, 40, 50, 70]);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_ladder_insert() {
    let mut tree = AvlTree::new();
    let mut trace = Trace::new();
    for v in 0..100 {
        avl::insert(&mut tree, v, &mut trace);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 100);

    let mut tree = AvlTree::new();
    for v in (0..100).rev() {
        avl::insert(&mut tree, v, &mut trace);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 100);
    assert_eq!(tree.min_index().map(|i| tree.node(i).value), Some(0));
    assert_eq!(tree.max_index().map(|i| tree.node(i).value), Some(99));
}

#[test]
fn avl_search_narrates_both_outcomes() {
    let tree = build(&[50, 30, 70, 20, 40]);

    let mut trace = Trace::new();
    assert_eq!(avl::search(&tree, &40, &mut trace), Outcome::Found);
    assert_eq!(trace.last().unwrap().phase, Phase::Found);

    let mut trace = Trace::new();
    assert_eq!(avl::search(&tree, &99, &mut trace), Outcome::NotFound);
    assert_eq!(trace.last().unwrap().phase, Phase::NotFound);
    assert!(!trace.is_empty());

    let empty = AvlTree::<i64>::new();
    let mut trace = Trace::new();
    assert_eq!(avl::search(&empty, &1, &mut trace), Outcome::Empty);
    assert_eq!(trace.last().unwrap().phase, Phase::Empty);
}

#[test]
fn avl_every_insert_records_steps() {
    let mut tree = AvlTree::new();
    for v in [50, 30, 70, 20, 40, 10] {
        let mut trace = Trace::new();
        avl::insert(&mut tree, v, &mut trace);
        assert!(!trace.is_empty(), "insert of {v} recorded no steps");
    }
}
