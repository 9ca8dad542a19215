use std::fmt::Display;

use serde::Serialize;

use crate::types::{BinNode, Describe};

/// AVL arena slot. `height` is the stored subtree height, 1 for a leaf;
/// an absent child counts as height 0.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AvlNode<T> {
    pub value: T,
    #[serde(rename = "left")]
    pub l: Option<u32>,
    #[serde(rename = "right")]
    pub r: Option<u32>,
    pub height: i32,
}

impl<T> AvlNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            l: None,
            r: None,
            height: 1,
        }
    }
}

impl<T> BinNode for AvlNode<T> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }
}

impl<T: Display> Describe for AvlNode<T> {
    fn describe(&self) -> String {
        format!("{} (h={})", self.value, self.height)
    }
}
