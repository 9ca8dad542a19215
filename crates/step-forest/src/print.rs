//! Indented debug printer for binary-tree arenas.

use crate::types::{BinNode, Describe};

/// Renders the subtree under `node` one child per line, `∅` for an absent
/// child. Output is for test diagnostics and debugging, not for the renderer
/// contract.
pub fn print_tree<N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    N: BinNode + Describe,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print_tree(arena, n.l(), &format!("{tab}  "));
            let right = print_tree(arena, n.r(), &format!("{tab}  "));
            format!("[{i}] {}\n{tab}L={left}\n{tab}R={right}", n.describe())
        }
    }
}
