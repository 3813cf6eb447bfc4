//! Caller-facing API: solve for a target, then lay out the folds.
//!
//! `get_fold_list` runs the solver with default settings and wraps the best
//! sequence with a one-line summary. `instructions` replays a sequence
//! through the catalog, threading landmark and orientation, and returns
//! drawable frames in physical sheet coordinates.

mod diagram;

pub use diagram::{includes_line, instructions, Instructions, StepFrame, LINE_MATCH_DECIMALS};

use serde::Serialize;

use crate::error::Result;
use crate::solver::{solve, Sequence, SolveCfg};

/// Best fold sequence found for a target ratio.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FoldPlan {
    pub target: f64,
    pub sequence: Sequence,
    pub summary: String,
}

impl FoldPlan {
    /// Drawable frames for this plan.
    pub fn instructions(&self) -> Instructions {
        instructions(&self.sequence.moves)
    }
}

/// Best `fold_count`-move sequence for `target` with default search settings.
pub fn get_fold_list(target: f64, fold_count: usize) -> Result<FoldPlan> {
    fold_list_with(target, fold_count, &SolveCfg::default())
}

pub fn fold_list_with(target: f64, fold_count: usize, cfg: &SolveCfg) -> Result<FoldPlan> {
    let sequence = solve(target, fold_count, cfg)?;
    let summary = format!(
        "Resultant landmark is {}. Required landmark was {}. This gives an error of {}",
        display_number(sequence.landmark),
        display_number(target),
        display_number(sequence.difference)
    );
    tracing::debug!(%summary, "fold list");
    Ok(FoldPlan {
        target,
        sequence,
        summary,
    })
}

/// Shortest round-trip text, switching to exponent form below 1e-6 so
/// near-exact errors read as `5.551115123125783e-17`.
pub(crate) fn display_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if v != 0.0 && v.abs() < 1e-6 {
        format!("{v:e}")
    } else {
        format!("{v}")
    }
}
