//! Search configuration, result records, and the K-best list.

use std::cmp::Ordering;

use serde::Serialize;

use crate::landmark::{MoveIndex, MOVE_COUNT};

/// Number of sequences kept during search unless configured otherwise.
pub const DEFAULT_BEAM_WIDTH: usize = 10;

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Size of the K-best list.
    pub beam_width: usize,
    /// Refuse searches visiting more than this many leaves. The leaf count is
    /// exactly `32^depth`, so the check happens before any work.
    pub max_leaves: Option<u64>,
    /// Search the 32 top-level subtrees on the rayon pool. Results, including
    /// tie order, match the sequential search.
    pub parallel: bool,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            beam_width: DEFAULT_BEAM_WIDTH,
            max_leaves: None,
            parallel: false,
        }
    }
}

/// A scored move sequence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sequence {
    pub moves: Vec<MoveIndex>,
    /// Landmark reached after the last move.
    pub landmark: f64,
    /// `|landmark − target|`.
    pub difference: f64,
}

/// Bounded list ordered by `difference` (total order, NaN last); equal
/// differences keep arrival order, so earlier sequences win ties.
#[derive(Clone, Debug)]
pub(crate) struct KBest {
    cap: usize,
    items: Vec<Sequence>,
}

impl KBest {
    /// `cap` may be far larger than any search fills; only a small
    /// reservation is made up front.
    pub(crate) fn new(cap: usize) -> Self {
        Self {
            cap,
            items: Vec::with_capacity(cap.min(MOVE_COUNT) + 1),
        }
    }

    #[inline]
    fn accepts(&self, difference: f64) -> bool {
        match self.items.last() {
            Some(worst) if self.items.len() >= self.cap => {
                difference.total_cmp(&worst.difference) == Ordering::Less
            }
            _ => self.cap > 0,
        }
    }

    pub(crate) fn offer(&mut self, moves: &[MoveIndex], landmark: f64, difference: f64) {
        if !self.accepts(difference) {
            return;
        }
        self.insert(Sequence {
            moves: moves.to_vec(),
            landmark,
            difference,
        });
    }

    fn insert(&mut self, seq: Sequence) {
        let at = self
            .items
            .partition_point(|s| s.difference.total_cmp(&seq.difference) != Ordering::Greater);
        self.items.insert(at, seq);
        self.items.truncate(self.cap);
    }

    /// Fold in a list gathered later in search order.
    pub(crate) fn merge(&mut self, later: KBest) {
        for seq in later.items {
            if self.accepts(seq.difference) {
                self.insert(seq);
            }
        }
    }

    pub(crate) fn into_vec(self) -> Vec<Sequence> {
        self.items
    }
}
