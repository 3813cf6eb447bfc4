//! Fold sequences that construct an arbitrary length ratio on a unit square.
//!
//! Layout
//! - `landmark`: the sixteen base constructions and their complements (32 moves).
//! - `orient`: dihedral orientation state, coordinate transforms, corner/edge naming.
//! - `catalog`: per-move crease geometry and instruction text.
//! - `solver`: exhaustive depth-bounded search keeping the K best sequences.
//! - `plan`: caller-facing fold list and step-by-step diagram assembly.
//!
//! The solver and the catalog both index moves through `landmark::MoveIndex`,
//! so a move found by search renders as the same construction.

pub mod api;
pub mod catalog;
pub mod error;
pub mod landmark;
pub mod orient;
pub mod plan;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{FoldError, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::catalog::{lines_from_operation, FoldOutcome, FoldStep};
    pub use crate::landmark::{children, Formula, MoveIndex, START_LANDMARK};
    pub use crate::orient::{Arrow, Corner, Edge, Line, Marking, Orientation, Point};
    pub use crate::plan::{get_fold_list, instructions, FoldPlan, Instructions, StepFrame};
    pub use crate::solver::{solve, solve_ranked, Sequence, SolveCfg};
    pub use crate::{FoldError, Result};
}
