use std::fmt::Display;

use serde::Serialize;

use crate::types::{BinNode, Describe};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Black,
}

/// Red-black arena slot. `p` is the non-owning parent index, kept consistent
/// by every rotation and relink; it exists only for fix-up bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RbNode<T> {
    pub value: T,
    pub color: Color,
    #[serde(rename = "parent")]
    pub p: Option<u32>,
    #[serde(rename = "left")]
    pub l: Option<u32>,
    #[serde(rename = "right")]
    pub r: Option<u32>,
}

impl<T> RbNode<T> {
    /// Fresh nodes start red; insertion recolors as needed.
    pub fn new(value: T) -> Self {
        Self {
            value,
            color: Color::Red,
            p: None,
            l: None,
            r: None,
        }
    }
}

impl<T> BinNode for RbNode<T> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }
}

impl<T: Display> Describe for RbNode<T> {
    fn describe(&self) -> String {
        let c = match self.color {
            Color::Red => "R",
            Color::Black => "B",
        };
        format!("{} ({c})", self.value)
    }
}
