//! Sequence solver: exhaustive depth-bounded search over the 32-move space.
//!
//! Purpose
//! - Find the move sequences of a given length, starting from the landmark
//!   0.5, whose final landmark lies closest to a target ratio.
//! - Every one of the `32^depth` leaves is scored; a K-best list (sorted by
//!   absolute error, ties kept in search order) bounds memory, not time.
//!   Depth 4 is instant, depth 5 takes seconds, depth 6 and beyond is a
//!   caller decision (see `SolveCfg::max_leaves`).
//!
//! NaN leaves (degenerate constructions) order after every finite leaf and
//! never win while a finite candidate exists.

mod dfs;
mod types;

pub use dfs::{leaf_count, solve, solve_ranked};
pub use types::{Sequence, SolveCfg, DEFAULT_BEAM_WIDTH};
