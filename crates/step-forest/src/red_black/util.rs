//! Red-black mutators.
//!
//! Every rotation keeps all three parent links consistent (the two rotated
//! nodes and the moved subtree) and re-points the rotated node's former
//! parent, or the tree root, before returning, so every recorded snapshot
//! renders correctly from the root.
//!
//! Deletion of a node with two children copies the in-order successor's value
//! into the node and removes the successor from its original position; the
//! successor's original color decides whether the double-black fix-up runs.

use std::cmp::Ordering;
use std::fmt::Display;

use crate::trace::{Outcome, Phase, Step, Trace};

use super::tree::RbTree;
use super::types::{Color, RbNode};

/// Left rotation around `x`; returns the new local root.
pub fn rotate_left<T>(tree: &mut RbTree<T>, x: u32) -> u32 {
    let y = tree.node(x).r.expect("right child exists for left rotation");
    let yl = tree.node(y).l;

    tree.node_mut(x).r = yl;
    if let Some(yl) = yl {
        tree.node_mut(yl).p = Some(x);
    }

    let p = tree.node(x).p;
    tree.node_mut(y).p = p;
    match p {
        None => tree.root = Some(y),
        Some(p) => {
            if tree.node(p).l == Some(x) {
                tree.node_mut(p).l = Some(y);
            } else {
                tree.node_mut(p).r = Some(y);
            }
        }
    }

    tree.node_mut(y).l = Some(x);
    tree.node_mut(x).p = Some(y);
    y
}

/// Mirror of [`rotate_left`].
pub fn rotate_right<T>(tree: &mut RbTree<T>, x: u32) -> u32 {
    let y = tree.node(x).l.expect("left child exists for right rotation");
    let yr = tree.node(y).r;

    tree.node_mut(x).l = yr;
    if let Some(yr) = yr {
        tree.node_mut(yr).p = Some(x);
    }

    let p = tree.node(x).p;
    tree.node_mut(y).p = p;
    match p {
        None => tree.root = Some(y),
        Some(p) => {
            if tree.node(p).l == Some(x) {
                tree.node_mut(p).l = Some(y);
            } else {
                tree.node_mut(p).r = Some(y);
            }
        }
    }

    tree.node_mut(y).r = Some(x);
    tree.node_mut(x).p = Some(y);
    y
}

/// Replaces the subtree rooted at `u` with `v` in `u`'s parent (or the root).
fn transplant<T>(tree: &mut RbTree<T>, u: u32, v: Option<u32>) {
    let p = tree.node(u).p;
    match p {
        None => tree.root = v,
        Some(p) => {
            if tree.node(p).l == Some(u) {
                tree.node_mut(p).l = v;
            } else {
                tree.node_mut(p).r = v;
            }
        }
    }
    if let Some(v) = v {
        tree.node_mut(v).p = p;
    }
}

/// BST insert of a red leaf followed by the recolor/rotate fix-up loop.
/// Duplicates leave the tree unchanged and record a descriptive step.
pub fn insert<T>(tree: &mut RbTree<T>, value: T, trace: &mut Trace<T>) -> Outcome
where
    T: Ord + Clone + Display,
{
    let Some(root) = tree.root else {
        let n = tree.alloc(value);
        tree.node_mut(n).color = Color::Black;
        tree.root = Some(n);
        tree.len = 1;
        trace.record(
            Step::new(
                tree.snapshot(),
                Phase::InsertNode,
                format!("Inserted {} as the root (black)", tree.node(n).value),
            )
            .at(n)
            .mark([n]),
        );
        return Outcome::Inserted;
    };

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

    let n = tree.alloc(value);
    tree.node_mut(n).p = Some(parent);
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
                "Inserted {} as a red {} child of {}",
                tree.node(n).value,
                if went_left { "left" } else { "right" },
                tree.node(parent).value,
            ),
        )
        .at(n)
        .mark([n])
        .edge(parent, n),
    );

    insert_fixup(tree, n, trace);
    Outcome::Inserted
}

fn insert_fixup<T>(tree: &mut RbTree<T>, mut n: u32, trace: &mut Trace<T>)
where
    T: Ord + Clone + Display,
{
    loop {
        let Some(p) = tree.node(n).p else {
            break;
        };
        if tree.is_black(Some(p)) {
            break;
        }
        // A red parent is never the root, so the grandparent exists.
        let g = tree.node(p).p.expect("red parent has a grandparent");
        let p_is_left = tree.node(g).l == Some(p);
        let uncle = if p_is_left {
            tree.node(g).r
        } else {
            tree.node(g).l
        };

        if tree.is_red(uncle) {
            let u = uncle.expect("red uncle exists");
            tree.node_mut(p).color = Color::Black;
            tree.node_mut(u).color = Color::Black;
            tree.node_mut(g).color = Color::Red;
            trace.record(
                Step::new(
                    tree.snapshot(),
                    Phase::RecolorUncle,
                    format!(
                        "Case 1: Red Uncle — recolor {} and {} black, {} red",
                        tree.node(p).value,
                        tree.node(u).value,
                        tree.node(g).value,
                    ),
                )
                .at(n)
                .mark([p, u, g]),
            );
            n = g;
            continue;
        }

        if p_is_left {
            if tree.node(p).r == Some(n) {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::LeftRightCase,
                        format!(
                            "Left-Right Case at {}: rotate left around {} first",
                            tree.node(g).value,
                            tree.node(p).value,
                        ),
                    )
                    .at(n)
                    .mark([g, p, n]),
                );
                n = p;
                rotate_left(tree, n);
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateLeft,
                        format!("Left Rotation around {}", tree.node(n).value),
                    )
                    .at(n)
                    .mark([n]),
                );
            } else {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::LeftLeftCase,
                        format!("Left-Left Case at {}", tree.node(g).value),
                    )
                    .at(n)
                    .mark([g, p, n]),
                );
            }
            let p = tree.node(n).p.expect("parent exists in straight-line case");
            let g = tree.node(p).p.expect("grandparent exists in straight-line case");
            tree.node_mut(p).color = Color::Black;
            tree.node_mut(g).color = Color::Red;
            trace.record(
                Step::new(
                    tree.snapshot(),
                    Phase::Recolor,
                    format!(
                        "Recolor {} black and {} red before rotating",
                        tree.node(p).value,
                        tree.node(g).value,
                    ),
                )
                .mark([p, g]),
            );
            rotate_right(tree, g);
            trace.record(
                Step::new(
                    tree.snapshot(),
                    Phase::RotateRight,
                    format!("Right Rotation around {}", tree.node(g).value),
                )
                .at(p)
                .mark([p, g])
                .edge(p, g),
            );
        } else {
            if tree.node(p).l == Some(n) {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RightLeftCase,
                        format!(
                            "Right-Left Case at {}: rotate right around {} first",
                            tree.node(g).value,
                            tree.node(p).value,
                        ),
                    )
                    .at(n)
                    .mark([g, p, n]),
                );
                n = p;
                rotate_right(tree, n);
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateRight,
                        format!("Right Rotation around {}", tree.node(n).value),
                    )
                    .at(n)
                    .mark([n]),
                );
            } else {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RightRightCase,
                        format!("Right-Right Case at {}", tree.node(g).value),
                    )
                    .at(n)
                    .mark([g, p, n]),
                );
            }
            let p = tree.node(n).p.expect("parent exists in straight-line case");
            let g = tree.node(p).p.expect("grandparent exists in straight-line case");
            tree.node_mut(p).color = Color::Black;
            tree.node_mut(g).color = Color::Red;
            trace.record(
                Step::new(
                    tree.snapshot(),
                    Phase::Recolor,
                    format!(
                        "Recolor {} black and {} red before rotating",
                        tree.node(p).value,
                        tree.node(g).value,
                    ),
                )
                .mark([p, g]),
            );
            rotate_left(tree, g);
            trace.record(
                Step::new(
                    tree.snapshot(),
                    Phase::RotateLeft,
                    format!("Left Rotation around {}", tree.node(g).value),
                )
                .at(p)
                .mark([p, g])
                .edge(p, g),
            );
        }
    }

    let root = tree.root.expect("tree is non-empty after insert");
    if tree.is_red(Some(root)) {
        tree.node_mut(root).color = Color::Black;
        trace.record(
            Step::new(
                tree.snapshot(),
                Phase::RootBlack,
                format!("Recolor root {} black", tree.node(root).value),
            )
            .at(root)
            .mark([root]),
        );
    }
}

/// Traced delete. Not-found and empty-tree are descriptive no-op outcomes.
pub fn delete<T>(tree: &mut RbTree<T>, target: &T, trace: &mut Trace<T>) -> Outcome
where
    T: Ord + Clone + Display,
{
    if tree.root.is_none() {
        trace.record(Step::new(
            tree.snapshot(),
            Phase::Empty,
            "Tree is empty — nothing to delete",
        ));
        return Outcome::Empty;
    }

    let mut curr = tree.root;
    let z = loop {
        let Some(i) = curr else {
            trace.record(Step::new(
                tree.snapshot(),
                Phase::NotFound,
                format!("{target} is not in the tree"),
            ));
            return Outcome::NotFound;
        };
        match target.cmp(&tree.node(i).value) {
            Ordering::Equal => break i,
            Ordering::Less => {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::Compare,
                        format!("{} < {}: descend left", target, tree.node(i).value),
                    )
                    .at(i),
                );
                curr = tree.node(i).l;
            }
            Ordering::Greater => {
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::Compare,
                        format!("{} > {}: descend right", target, tree.node(i).value),
                    )
                    .at(i),
                );
                curr = tree.node(i).r;
            }
        }
    };
    trace.record(
        Step::new(tree.snapshot(), Phase::Found, format!("Found {target}"))
            .at(z)
            .mark([z]),
    );

    let mut y = z;
    if tree.node(z).l.is_some() && tree.node(z).r.is_some() {
        trace.record(
            Step::new(
                tree.snapshot(),
                Phase::TwoChildren,
                format!("{target} has two children — find its in-order successor"),
            )
            .at(z)
            .mark([z]),
        );
        let s = tree.min_of(tree.node(z).r.expect("right child exists"));
        let s_value = tree.node(s).value.clone();
        tree.node_mut(z).value = s_value;
        trace.record(
            Step::new(
                tree.snapshot(),
                Phase::Successor,
                format!(
                    "Copied successor {} into the deleted position; now remove the successor node",
                    tree.node(z).value,
                ),
            )
            .at(s)
            .mark([z, s])
            .edge(z, s),
        );
        y = s;
    }

    // y has at most one child.
    let y_color = tree.node(y).color;
    let child = tree.node(y).l.or(tree.node(y).r);
    let y_parent = tree.node(y).p;
    transplant(tree, y, child);
    tree.len -= 1;
    trace.record(
        Step::new(
            tree.snapshot(),
            Phase::Unlink,
            format!("Unlinked node {}", tree.node(y).value),
        )
        .mark(child)
    );

    if y_color == Color::Black {
        delete_fixup(tree, child, y_parent, trace);
    }
    Outcome::Deleted
}

/// Resolves the double black left behind by removing a black node. `x` may be
/// absent; `parent` is then the node whose child slot `x` occupies.
fn delete_fixup<T>(tree: &mut RbTree<T>, mut x: Option<u32>, mut parent: Option<u32>, trace: &mut Trace<T>)
where
    T: Ord + Clone + Display,
{
    while x != tree.root && tree.is_black(x) {
        let Some(p) = parent else {
            break;
        };
        // When x is absent, its side is the parent link that is now None; a
        // valid tree cannot have both child links None here, since the
        // double black requires a sibling.
        let x_is_left = tree.node(p).l == x;

        if x_is_left {
            let mut w = tree.node(p).r.expect("double-black node has a sibling");
            if tree.is_red(Some(w)) {
                tree.node_mut(w).color = Color::Black;
                tree.node_mut(p).color = Color::Red;
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::DeleteCase1,
                        format!(
                            "Case 1: Red Sibling — recolor {} black, {} red, rotate toward the gap",
                            tree.node(w).value,
                            tree.node(p).value,
                        ),
                    )
                    .at(w)
                    .mark([w, p]),
                );
                rotate_left(tree, p);
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateLeft,
                        format!("Left Rotation around {}", tree.node(p).value),
                    )
                    .mark([p, w]),
                );
                w = tree.node(p).r.expect("sibling exists after case 1 rotation");
            }

            let wl = tree.node(w).l;
            let wr = tree.node(w).r;
            if tree.is_black(wl) && tree.is_black(wr) {
                tree.node_mut(w).color = Color::Red;
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::DeleteCase2,
                        format!(
                            "Case 2: Black Sibling with black children — recolor {} red, move the extra black up",
                            tree.node(w).value,
                        ),
                    )
                    .at(p)
                    .mark([w, p]),
                );
                x = Some(p);
                parent = tree.node(p).p;
            } else {
                if tree.is_black(wr) {
                    // Near (left) child is red.
                    let near = wl.expect("near child is red in case 3");
                    tree.node_mut(near).color = Color::Black;
                    tree.node_mut(w).color = Color::Red;
                    trace.record(
                        Step::new(
                            tree.snapshot(),
                            Phase::DeleteCase3,
                            format!(
                                "Case 3: Black Sibling with red near child — recolor {} black, {} red, rotate the sibling",
                                tree.node(near).value,
                                tree.node(w).value,
                            ),
                        )
                        .at(w)
                        .mark([w, near]),
                    );
                    rotate_right(tree, w);
                    trace.record(
                        Step::new(
                            tree.snapshot(),
                            Phase::RotateRight,
                            format!("Right Rotation around {}", tree.node(w).value),
                        )
                        .mark([near, w]),
                    );
                    w = tree.node(p).r.expect("sibling exists after case 3 rotation");
                }
                let far = tree.node(w).r.expect("far child is red in case 4");
                tree.node_mut(w).color = tree.node(p).color;
                tree.node_mut(p).color = Color::Black;
                tree.node_mut(far).color = Color::Black;
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::DeleteCase4,
                        format!(
                            "Case 4: Black Sibling with red far child — {} takes the parent's color, rotate toward the gap",
                            tree.node(w).value,
                        ),
                    )
                    .at(w)
                    .mark([w, p, far]),
                );
                rotate_left(tree, p);
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateLeft,
                        format!("Left Rotation around {}", tree.node(p).value),
                    )
                    .mark([p, w]),
                );
                x = tree.root;
                parent = None;
            }
        } else {
            let mut w = tree.node(p).l.expect("double-black node has a sibling");
            if tree.is_red(Some(w)) {
                tree.node_mut(w).color = Color::Black;
                tree.node_mut(p).color = Color::Red;
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::DeleteCase1,
                        format!(
                            "Case 1: Red Sibling — recolor {} black, {} red, rotate toward the gap",
                            tree.node(w).value,
                            tree.node(p).value,
                        ),
                    )
                    .at(w)
                    .mark([w, p]),
                );
                rotate_right(tree, p);
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateRight,
                        format!("Right Rotation around {}", tree.node(p).value),
                    )
                    .mark([p, w]),
                );
                w = tree.node(p).l.expect("sibling exists after case 1 rotation");
            }

            let wl = tree.node(w).l;
            let wr = tree.node(w).r;
            if tree.is_black(wl) && tree.is_black(wr) {
                tree.node_mut(w).color = Color::Red;
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::DeleteCase2,
                        format!(
                            "Case 2: Black Sibling with black children — recolor {} red, move the extra black up",
                            tree.node(w).value,
                        ),
                    )
                    .at(p)
                    .mark([w, p]),
                );
                x = Some(p);
                parent = tree.node(p).p;
            } else {
                if tree.is_black(wl) {
                    // Near (right) child is red.
                    let near = wr.expect("near child is red in case 3");
                    tree.node_mut(near).color = Color::Black;
                    tree.node_mut(w).color = Color::Red;
                    trace.record(
                        Step::new(
                            tree.snapshot(),
                            Phase::DeleteCase3,
                            format!(
                                "Case 3: Black Sibling with red near child — recolor {} black, {} red, rotate the sibling",
                                tree.node(near).value,
                                tree.node(w).value,
                            ),
                        )
                        .at(w)
                        .mark([w, near]),
                    );
                    rotate_left(tree, w);
                    trace.record(
                        Step::new(
                            tree.snapshot(),
                            Phase::RotateLeft,
                            format!("Left Rotation around {}", tree.node(w).value),
                        )
                        .mark([near, w]),
                    );
                    w = tree.node(p).l.expect("sibling exists after case 3 rotation");
                }
                let far = tree.node(w).l.expect("far child is red in case 4");
                tree.node_mut(w).color = tree.node(p).color;
                tree.node_mut(p).color = Color::Black;
                tree.node_mut(far).color = Color::Black;
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::DeleteCase4,
                        format!(
                            "Case 4: Black Sibling with red far child — {} takes the parent's color, rotate toward the gap",
                            tree.node(w).value,
                        ),
                    )
                    .at(w)
                    .mark([w, p, far]),
                );
                rotate_right(tree, p);
                trace.record(
                    Step::new(
                        tree.snapshot(),
                        Phase::RotateRight,
                        format!("Right Rotation around {}", tree.node(p).value),
                    )
                    .mark([p, w]),
                );
                x = tree.root;
                parent = None;
            }
        }
    }

    if let Some(i) = x {
        if tree.is_red(Some(i)) {
            tree.node_mut(i).color = Color::Black;
            let phase = if Some(i) == tree.root {
                Phase::RootBlack
            } else {
                Phase::Recolor
            };
            trace.record(
                Step::new(
                    tree.snapshot(),
                    phase,
                    format!("Recolor {} black to absorb the extra black", tree.node(i).value),
                )
                .at(i)
                .mark([i]),
            );
        }
    }
}

/// Traced BST lookup. Never mutates; records one step per comparison.
pub fn search<T>(tree: &RbTree<T>, target: &T, trace: &mut Trace<T>) -> Outcome
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

/// Checks the red-black invariants: black root, consistent parent links, no
/// red node with a red child, equal black-height on every path, BST order.
pub fn assert_red_black_tree<T: Ord>(tree: &RbTree<T>) -> Result<(), String> {
    let Some(root) = tree.root_index() else {
        if tree.len() != 0 {
            return Err("Empty tree has non-zero len".to_string());
        }
        return Ok(());
    };

    if tree.node(root).p.is_some() {
        return Err("Root has parent".to_string());
    }
    if tree.is_red(Some(root)) {
        return Err("Root is not black".to_string());
    }

    fn black_height<T>(arena: &[RbNode<T>], node: Option<u32>) -> Result<usize, String> {
        let Some(i) = node else {
            return Ok(0);
        };
        let n = &arena[i as usize];

        if let Some(l) = n.l {
            if arena[l as usize].p != Some(i) {
                return Err("Broken parent link on left child".to_string());
            }
        }
        if let Some(r) = n.r {
            if arena[r as usize].p != Some(i) {
                return Err("Broken parent link on right child".to_string());
            }
        }

        if n.color == Color::Red {
            let red_child = |c: Option<u32>| {
                c.map(|i| arena[i as usize].color == Color::Red)
                    .unwrap_or(false)
            };
            if red_child(n.l) || red_child(n.r) {
                return Err(format!("Red node {i} has a red child"));
            }
        }

        let lh = black_height(arena, n.l)?;
        let rh = black_height(arena, n.r)?;
        if lh != rh {
            return Err(format!("Black height mismatch at node {i}"));
        }
        Ok(lh + usize::from(n.color == Color::Black))
    }

    black_height(tree.arena(), Some(root))?;

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
