//! AVL mutators.
//!
//! Insertion descends iteratively, keeping the ancestor path on an explicit
//! stack, then rebalances bottom-up. Rotations re-point the former parent's
//! child link (or the tree root) before returning, so the tree renders
//! correctly from the root at every step boundary: a recorded snapshot is
//! never mid-rewire.

use std::cmp::Ordering;
use std::fmt::Display;

use crate::trace::{Outcome, Phase, Step, Trace};

use super::tree::AvlTree;
use super::types::AvlNode;

fn update_height<T>(tree: &mut AvlTree<T>, i: u32) {
    let h = 1 + tree
        .height_of(tree.node(i).l)
        .max(tree.height_of(tree.node(i).r));
    tree.node_mut(i).height = h;
}

fn relink<T>(tree: &mut AvlTree<T>, parent: Option<u32>, old: u32, new: u32) {
    match parent {
        None => tree.root = Some(new),
        Some(p) => {
            if tree.node(p).l == Some(old) {
                tree.node_mut(p).l = Some(new);
            } else {
                tree.node_mut(p).r = Some(new);
            }
        }
    }
}

/// Single right rotation around `y`. Heights are updated `y` first, then the
/// new local root `x`, because `x`'s height depends on the corrected `y`.
pub fn rotate_right<T>(tree: &mut AvlTree<T>, y: u32, parent: Option<u32>) -> u32 {
    let x = tree.node(y).l.expect("left child exists for right rotation");
    let t2 = tree.node(x).r;

    tree.node_mut(y).l = t2;
    tree.node_mut(x).r = Some(y);
    relink(tree, parent, y, x);

    update_height(tree, y);
    update_height(tree, x);
    x
}

/// Mirror of [`rotate_right`].
pub fn rotate_left<T>(tree: &mut AvlTree<T>, x: u32, parent: Option<u32>) -> u32 {
    let y = tree.node(x).r.expect("right child exists for left rotation");
    let t2 = tree.node(y).l;

    tree.node_mut(x).r = t2;
    tree.node_mut(y).l = Some(x);
    relink(tree, parent, x, y);

    update_height(tree, x);
    update_height(tree, y);
    y
}

/// BST insert followed by bottom-up rebalancing. Duplicates leave the tree
/// unchanged and record a descriptive step.
pub fn insert<T>(tree: &mut AvlTree<T>, value: T, trace: &mut Trace<T>) -> Outcome
where
    T: Ord + Clone + Display,
{
    let Some(root) = tree.root else {
        let n = tree.alloc(value);
        tree.root = Some(n);
        tree.len = 1;
        trace.record(
            Step::new(
                tree.snapshot(),
                Phase::InsertNode,
                format!("Inserted {} as the root", tree.node(n).value),
            )
            .at(n)
            .mark([n]),
        );
        return Outcome::Inserted;
    };

    // Descend, recording each comparison and the ancestor path.
    let mut path: Vec<u32> = Vec::new();
    let mut curr = root;
    let parent;
    let went_left;
    loop {
        match value.cmp(&tree.node(curr).value) {
            Ordering::Equal => {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::Duplicate,
                        format!("{value} is already in the tree — nothing to insert"),
                    )
                    .at(curr)
                    .mark([curr]),
                );
                return Outcome::Duplicate;
            }
            Ordering::Less => {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::Compare,
                        format!("{} < {}: descend left", value, tree.node(curr).value),
                    )
                    .at(curr),
                );
                path.push(curr);
                match tree.node(curr).l {
                    Some(l) => curr = l,
                    None => {
                        parent = curr;
                        went_left = true;
                        break;
                    }
                }
            }
            Ordering::Greater => {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::Compare,
                        format!("{} > {}: descend right", value, tree.node(curr).value),
                    )
                    .at(curr),
                );
                path.push(curr);
                match tree.node(curr).r {
                    Some(r) => curr = r,
                    None => {
                        parent = curr;
                        went_left = false;
                        break;
                    }
                }
            }
        }
    }

    let n = tree.alloc(value.clone());
    if went_left {
        tree.node_mut(parent).l = Some(n);
    } else {
        tree.node_mut(parent).r = Some(n);
    }
    tree.len += 1;
    trace.record(
        Step::new(
            tree.snapshot(),
            Phase::InsertNode,
            format!(
                "Inserted {} as the {} child of {}",
                value,
                if went_left { "left" } else { "right" },
                tree.node(parent).value,
            ),
        )
        .at(n)
        .mark([n])
        .edge(parent, n),
    );

    // Walk back up: refresh heights, rebalance where the factor leaves
    // [-1, 1]. The case is keyed on where the inserted value went.
    for k in (0..path.len()).rev() {
        let i = path[k];
        let grand = if k == 0 { None } else { Some(path[k - 1]) };
        update_height(tree, i);
        let bf = tree.balance_factor(i);

        if bf > 1 {
            let l = tree.node(i).l.expect("left-heavy node has a left child");
            if value < tree.node(l).value {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::LeftLeftCase,
                        format!("Left-Left Case at {}", tree.node(i).value),
                    )
                    .at(i)
                    .mark([i, l])
                    .edge(i, l),
                );
                let x = rotate_right(tree, i, grand);
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateRightLl,
                        format!("Right Rotation (LL) around {}", tree.node(i).value),
                    )
                    .at(x)
                    .mark([x, i])
                    .edge(x, i),
                );
            } else {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::LeftRightCase,
                        format!("Left-Right Case at {}", tree.node(i).value),
                    )
                    .at(i)
                    .mark([i, l])
                    .edge(i, l),
                );
                let x = rotate_left(tree, l, Some(i));
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateLeftLr,
                        format!("Left Rotation (LR) around {}", tree.node(l).value),
                    )
                    .at(x)
                    .mark([x, l]),
                );
                let x = rotate_right(tree, i, grand);
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateRightLr,
                        format!("Right Rotation (LR) around {}", tree.node(i).value),
                    )
                    .at(x)
                    .mark([x, i]),
                );
            }
        } else if bf < -1 {
            let r = tree.node(i).r.expect("right-heavy node has a right child");
            if value > tree.node(r).value {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RightRightCase,
                        format!("Right-Right Case at {}", tree.node(i).value),
                    )
                    .at(i)
                    .mark([i, r])
                    .edge(i, r),
                );
                let y = rotate_left(tree, i, grand);
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateLeftRr,
                        format!("Left Rotation (RR) around {}", tree.node(i).value),
                    )
                    .at(y)
                    .mark([y, i])
                    .edge(y, i),
                );
            } else {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RightLeftCase,
                        format!("Right-Left Case at {}", tree.node(i).value),
                    )
                    .at(i)
                    .mark([i, r])
                    .edge(i, r),
                );
                let y = rotate_right(tree, r, Some(i));
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateRightRl,
                        format!("Right Rotation (RL) around {}", tree.node(r).value),
                    )
                    .at(y)
                    .mark([y, r]),
                );
                let y = rotate_left(tree, i, grand);
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateLeftRl,
                        format!("Left Rotation (RL) around {}", tree.node(i).value),
                    )
                    .at(y)
                    .mark([y, i]),
                );
            }
        }
    }

    Outcome::Inserted
}

/// Traced BST lookup. Never mutates; records one step per comparison.
pub fn search<T>(tree: &AvlTree<T>, target: &T, trace: &mut Trace<T>) -> Outcome
where
    T: Ord + Clone + Display,
{
    let Some(root) = tree.root else {
        trace.record(Step::new(
            tree.snapshot(),
            Phase::Empty,
            "Tree is empty — nothing to search",
        ));
        return Outcome::Empty;
    };

    let mut curr = root;
    loop {
        match target.cmp(&tree.node(curr).value) {
            Ordering::Equal => {
                trace.record(
                    Step::new(tree.snapshot(), Phase::Found, format!("Found {target}"))
                        .at(curr)
                        .mark([curr]),
                );
                return Outcome::Found;
            }
            Ordering::Less => {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::Compare,
                        format!("{} < {}: descend left", target, tree.node(curr).value),
                    )
                    .at(curr),
                );
                match tree.node(curr).l {
                    Some(l) => curr = l,
                    None => break,
                }
            }
            Ordering::Greater => {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::Compare,
                        format!("{} > {}: descend right", target, tree.node(curr).value),
                    )
                    .at(curr),
                );
                match tree.node(curr).r {
                    Some(r) => curr = r,
                    None => break,
                }
            }
        }
    }

    trace.record(Step::new(
        tree.snapshot(),
        Phase::NotFound,
        format!("{target} is not in the tree"),
    ));
    Outcome::NotFound
}

/// Recomputes every height independently and checks the AVL and BST
/// invariants.
pub fn assert_avl_tree<T: Ord>(tree: &AvlTree<T>) -> Result<(), String> {
    let Some(root) = tree.root_index() else {
        if tree.len() != 0 {
            return Err("Empty tree has non-zero len".to_string());
        }
        return Ok(());
    };

    fn check<T>(arena: &[AvlNode<T>], i: u32) -> Result<i32, String> {
        let n = &arena[i as usize];
        let lh = match n.l {
            Some(l) => check(arena, l)?,
            None => 0,
        };
        let rh = match n.r {
            Some(r) => check(arena, r)?,
            None => 0,
        };

        let computed = 1 + lh.max(rh);
        if n.height != computed {
            return Err(format!(
                "Height mismatch at node {i}: stored {}, computed {computed}",
                n.height
            ));
        }
        let bf = lh - rh;
        if !(-1..=1).contains(&bf) {
            return Err(format!("AVL balance violated at node {i}: factor {bf}"));
        }
        Ok(computed)
    }

    check(tree.arena(), root)?;

    let order = tree.in_order();
    if order.len() != tree.len() {
        return Err(format!(
            "Reachable node count {} does not match len {}",
            order.len(),
            tree.len()
        ));
    }
    for w in order.windows(2) {
        if tree.node(w[0]).value >= tree.node(w[1]).value {
            return Err("Node order violated".to_string());
        }
    }

    Ok(())
}
