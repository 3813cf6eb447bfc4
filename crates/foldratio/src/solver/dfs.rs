//! Depth-first enumeration with a K-best list at the leaves.

use rayon::prelude::*;

use crate::error::{FoldError, Result};
use crate::landmark::{children, MoveIndex, MOVE_COUNT, START_LANDMARK};

use super::types::{KBest, Sequence, SolveCfg};

/// Leaves visited by a search of `depth` moves, `None` on overflow.
pub fn leaf_count(depth: usize) -> Option<u64> {
    u32::try_from(depth)
        .ok()
        .and_then(|d| (MOVE_COUNT as u64).checked_pow(d))
}

/// Best sequence of exactly `depth` moves for `target`.
pub fn solve(target: f64, depth: usize, cfg: &SolveCfg) -> Result<Sequence> {
    let mut ranked = solve_ranked(target, depth, cfg)?;
    // Validation guarantees at least one leaf and a beam of at least one.
    Ok(ranked.swap_remove(0))
}

/// The K best sequences of exactly `depth` moves, best first.
pub fn solve_ranked(target: f64, depth: usize, cfg: &SolveCfg) -> Result<Vec<Sequence>> {
    validate(target, depth, cfg)?;
    let _span = tracing::debug_span!("solve", target, depth).entered();
    tracing::debug!(leaves = ?leaf_count(depth), parallel = cfg.parallel, "solve start");
    let best = if cfg.parallel {
        solve_parallel(target, depth, cfg.beam_width)
    } else {
        let mut runner = DfsRunner::new(target, depth, cfg.beam_width);
        runner.recur(START_LANDMARK, 1);
        runner.best
    };
    let ranked = best.into_vec();
    if let Some(top) = ranked.first() {
        tracing::debug!(
            moves = ?top.moves,
            landmark = top.landmark,
            difference = top.difference,
            kept = ranked.len(),
            "solve finished"
        );
    }
    Ok(ranked)
}

fn validate(target: f64, depth: usize, cfg: &SolveCfg) -> Result<()> {
    if !(target > 0.0 && target < 1.0) {
        return Err(FoldError::TargetOutOfRange(target));
    }
    if depth == 0 {
        return Err(FoldError::ZeroDepth);
    }
    if cfg.beam_width == 0 {
        return Err(FoldError::ZeroBeamWidth);
    }
    if let Some(budget) = cfg.max_leaves {
        let leaves = leaf_count(depth);
        if leaves.map_or(true, |n| n > budget) {
            return Err(FoldError::BudgetExceeded {
                depth,
                leaves,
                budget,
            });
        }
    }
    Ok(())
}

/// One worker per top-level move; lists merge in move order.
fn solve_parallel(target: f64, depth: usize, width: usize) -> KBest {
    let start = START_LANDMARK;
    let top: Vec<MoveIndex> = MoveIndex::all().collect();
    let lists: Vec<KBest> = top
        .into_par_iter()
        .map(|mv| {
            let mut runner = DfsRunner::new(target, depth, width);
            runner.visit(mv, mv.apply(start), 1);
            runner.best
        })
        .collect();
    let mut merged = KBest::new(width);
    for list in lists {
        merged.merge(list);
    }
    merged
}

/// DFS runner carrying the target, the move stack, and the K-best list.
struct DfsRunner {
    target: f64,
    depth: usize,
    best: KBest,
    stack: Vec<MoveIndex>,
}

impl DfsRunner {
    fn new(target: f64, depth: usize, width: usize) -> Self {
        Self {
            target,
            depth,
            best: KBest::new(width),
            stack: Vec::with_capacity(depth),
        }
    }

    /// Expand all 32 children of `landmark`, which sits at `level − 1` moves.
    fn recur(&mut self, landmark: f64, level: usize) {
        for (mv, child) in MoveIndex::all().zip(children(landmark)) {
            self.visit(mv, child, level);
        }
    }

    fn visit(&mut self, mv: MoveIndex, child: f64, level: usize) {
        self.stack.push(mv);
        if level == self.depth {
            let difference = (child - self.target).abs();
            self.best.offer(&self.stack, child, difference);
        } else {
            self.recur(child, level + 1);
        }
        self.stack.pop();
    }
}
