//! Capability traits shared by the arena node types.
//!
//! Tree-shape utilities (the debug printer, the validators' link walks) only
//! need child links and a render label, so the node structs expose exactly
//! that and nothing more. Mutation stays on the concrete types.

/// Binary child links of an arena slot.
pub trait BinNode {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
}

/// Human-readable label for one node, used by debug printers.
pub trait Describe {
    fn describe(&self) -> String;
}
