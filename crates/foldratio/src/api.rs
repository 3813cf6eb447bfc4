//! Curated surface for front ends (CLI, bindings, renderers).
//!
//! Names follow the renderer's vocabulary: a fold list from the solver,
//! lines from an operation, and the orientation helpers used to phrase
//! instructions.

// Search
pub use crate::plan::{fold_list_with, get_fold_list, FoldPlan};
pub use crate::solver::{leaf_count, solve, solve_ranked, Sequence, SolveCfg};
// Catalog
pub use crate::catalog::{fold_move, lines_from_operation, FoldOutcome, FoldStep, LINE_BREAK};
pub use crate::landmark::{children, lower_half, Formula, MoveIndex, MOVE_COUNT, START_LANDMARK};
// Orientation
pub use crate::orient::{
    flip_landmark, rotate_arrow, rotate_corner_description, rotate_edge_description, rotate_line,
    rotate_marking, rotate_point, Arrow, Line, Marking, Orientation,
};
// Diagram assembly
pub use crate::plan::{includes_line, instructions, Instructions, StepFrame};
