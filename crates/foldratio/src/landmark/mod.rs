//! Landmark algebra: the sixteen base constructions and the 32-move space.
//!
//! A landmark is a position on the top edge, measured from the top-left
//! corner of the unit square. Each base construction reduces a landmark `p`
//! to a new one; every base value `v` yields two moves, `v` (index `2k`) and
//! `1 − v` (index `2k + 1`). Search and rendering both go through
//! `MoveIndex`, which owns that layout.
//!
//! Inputs at the edges of the sheet (e.g. `p = 0`) divide by zero or take
//! square roots of negatives. The resulting NaN/Infinity values are returned
//! as-is; the solver never prefers them over a finite candidate.

mod formula;

pub use formula::{lower_half, Formula, FORMULA_COUNT};

use serde::Serialize;
use std::fmt;

use crate::error::{FoldError, Result};
use crate::orient::flip_landmark;

/// Number of moves: every formula and its complement.
pub const MOVE_COUNT: usize = 2 * FORMULA_COUNT;

/// Landmark made by the opening fold in half; every search starts here.
pub const START_LANDMARK: f64 = 0.5;

/// Validated index into the 32-move space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MoveIndex(u8);

impl MoveIndex {
    pub fn new(index: usize) -> Result<Self> {
        if index < MOVE_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(FoldError::MoveOutOfRange(index))
        }
    }
    /// All moves in index order.
    pub fn all() -> impl Iterator<Item = MoveIndex> {
        (0..MOVE_COUNT as u8).map(MoveIndex)
    }
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
    #[inline]
    pub fn formula(self) -> Formula {
        Formula::ALL[self.index() / 2]
    }
    /// 0 targets the base value, 1 its complement.
    #[inline]
    pub fn parity(self) -> u8 {
        self.0 % 2
    }
    /// Landmark reached from `p` by this move.
    #[inline]
    pub fn apply(self, p: f64) -> f64 {
        flip_landmark(self.formula().eval(p), self.parity())
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All 32 landmarks one move away from `p`, in move-index order.
///
/// No sorting or deduplication: coinciding values keep their own indices.
pub fn children(p: f64) -> [f64; MOVE_COUNT] {
    let mut out = [0.0; MOVE_COUNT];
    for (k, formula) in Formula::ALL.iter().enumerate() {
        let v = formula.eval(p);
        out[2 * k] = v;
        out[2 * k + 1] = 1.0 - v;
    }
    out
}
