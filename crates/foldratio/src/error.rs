//! Argument errors surfaced by the public entry points.
//!
//! Numeric degeneracy (division by zero, square roots of negatives near the
//! edges of the sheet) is not an error: those values travel as NaN/Infinity
//! and lose every comparison in the solver.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FoldError {
    /// Target must be finite and strictly inside (0, 1).
    #[error("target ratio {0} must lie strictly between 0 and 1")]
    TargetOutOfRange(f64),
    /// At least one fold is needed to reach anything but the starting landmark.
    #[error("fold count must be at least 1")]
    ZeroDepth,
    #[error("beam width must be at least 1")]
    ZeroBeamWidth,
    /// Move indices live in `0..32`.
    #[error("move index {0} is outside 0..32")]
    MoveOutOfRange(usize),
    /// `leaves` is `None` when `32^depth` overflows `u64`.
    #[error("a depth-{depth} search visits {} leaves, above the budget of {budget}", leaf_text(.leaves))]
    BudgetExceeded {
        depth: usize,
        leaves: Option<u64>,
        budget: u64,
    },
}

pub type Result<T> = std::result::Result<T, FoldError>;

fn leaf_text(leaves: &Option<u64>) -> String {
    match leaves {
        Some(n) => n.to_string(),
        None => "more than u64::MAX".to_string(),
    }
}
