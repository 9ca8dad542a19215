//! Demo seed values. Scenes build their initial structure by inserting these
//! in order, untraced.

pub const AVL_DEMO_SEEDS: [i64; 5] = [50, 30, 70, 20, 40];

pub const RED_BLACK_DEMO_SEEDS: [i64; 10] = [15, 10, 25, 5, 12, 20, 30, 8, 28, 35];

pub const RING_DEMO_SEEDS: [i64; 3] = [20, 30, 40];
