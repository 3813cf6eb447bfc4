//! Move catalog: crease geometry and instruction text for every move.
//!
//! Purpose
//! - Turn a move found by the solver into drawable fold steps. Each of the
//!   sixteen base constructions has one entry; the two moves sharing it
//!   (`2k`, `2k + 1`) differ only in which complementary landmark is taken
//!   and in the flip they leave behind.
//! - Geometry is produced in the canonical frame (landmark `c` on the top
//!   edge, measured from the top-left corner). Text names corners and edges
//!   through the current `Orientation`, so it refers to the physical sheet.
//!   `FoldStep::rotated` carries the geometry onto the sheet.
//!
//! Dispatch goes through `MoveIndex::formula`, the same table the solver
//! enumerates, and the new landmark is `MoveIndex::apply`, never a copy of
//! the formula.

mod build;

use serde::Serialize;

use crate::error::Result;
use crate::landmark::MoveIndex;
use crate::orient::{
    rotate_arrow, rotate_line, rotate_marking, Arrow, Line, Marking, Orientation,
};

/// Manual line break inside descriptions; the renderer splits on it.
pub const LINE_BREAK: &str = "||";

/// One drawable fold: crease, arrows, reference marks, and text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FoldStep {
    pub line: Line,
    pub arrows: Vec<Arrow>,
    pub markings: Vec<Marking>,
    pub description: String,
}

impl FoldStep {
    /// Geometry mapped onto the physical sheet; the text is already physical.
    pub fn rotated(&self, o: Orientation) -> FoldStep {
        FoldStep {
            line: rotate_line(&self.line, o),
            arrows: self.arrows.iter().map(|a| rotate_arrow(a, o)).collect(),
            markings: self.markings.iter().map(|m| rotate_marking(m, o)).collect(),
            description: self.description.clone(),
        }
    }

    pub fn description_lines(&self) -> impl Iterator<Item = &str> {
        self.description.split(LINE_BREAK)
    }
}

/// Result of one move: where the landmark ends up, the folds that get it
/// there (canonical frame), and the orientation afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FoldOutcome {
    pub new_landmark: f64,
    pub steps: Vec<FoldStep>,
    pub orientation: Orientation,
}

/// Fold geometry for move `operation` applied to landmark `c`.
///
/// Fails only when `operation` is outside `0..32`.
pub fn lines_from_operation(operation: usize, c: f64, o: Orientation) -> Result<FoldOutcome> {
    Ok(fold_move(MoveIndex::new(operation)?, c, o))
}

/// Same as `lines_from_operation` for an already validated move.
pub fn fold_move(mv: MoveIndex, c: f64, o: Orientation) -> FoldOutcome {
    let built = build::construct(mv.formula(), c, o);
    FoldOutcome {
        new_landmark: mv.apply(c),
        steps: built.steps,
        orientation: o.advance(built.turn, built.mirror, mv.parity()),
    }
}

#[cfg(test)]
mod tests;
