use serde::Serialize;

/// Ring arena slot. `next` is never dangling for a reachable node: a lone
/// node links to itself, and the last node links back to the head. The ring
/// has no null terminator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RingNode<T> {
    pub value: T,
    pub next: u32,
}
