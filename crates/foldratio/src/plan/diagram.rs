//! Step-by-step frames for the renderer.

use serde::Serialize;

use crate::catalog::{fold_move, FoldStep};
use crate::landmark::{MoveIndex, START_LANDMARK};
use crate::orient::{rotate_point, Arrow, Line, Marking, Orientation, Point};

/// Creases whose endpoints agree to this many decimal places are the same
/// crease; closer than that is not a distinct fold in practice.
pub const LINE_MATCH_DECIMALS: i32 = 5;

/// `None` for NaN, so a degenerate crease never matches a real one.
/// Infinities saturate to the ends of `i64`.
#[inline]
fn snap(v: f64) -> Option<i64> {
    if v.is_nan() {
        None
    } else {
        Some((v * 10f64.powi(LINE_MATCH_DECIMALS)).round() as i64)
    }
}

fn snapped(l: &Line) -> [Option<i64>; 4] {
    [snap(l.from.x), snap(l.from.y), snap(l.to.x), snap(l.to.y)]
}

/// Whether `target` is already in `lines`, in either endpoint order.
pub fn includes_line(lines: &[Line], target: &Line) -> bool {
    let fwd = snapped(target);
    let back = snapped(&target.reversed());
    lines.iter().any(|l| {
        let s = snapped(l);
        s == fwd || s == back
    })
}

/// One drawable frame: the fold in physical coordinates plus every distinct
/// crease made before it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepFrame {
    /// Move that produced this step; `None` for the opening half fold.
    pub source: Option<MoveIndex>,
    pub step: FoldStep,
    pub earlier_creases: Vec<Line>,
}

/// Frames for a whole sequence and where the final landmark sits.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Instructions {
    pub frames: Vec<StepFrame>,
    pub landmark: f64,
    /// Final landmark on the physical sheet.
    pub landmark_point: Point,
    pub orientation: Orientation,
}

/// Fold in half to make the starting landmark.
fn opening_fold() -> FoldStep {
    FoldStep {
        line: Line::new(START_LANDMARK, 0.0, START_LANDMARK, 1.0),
        arrows: vec![Arrow::new(0.0, 0.5, 1.0, 0.5)],
        markings: vec![Marking::point(0.0, 0.0), Marking::point(1.0, 0.0)],
        description: "Fold the square in half||and unfold".to_string(),
    }
}

/// Replay `moves` from the starting landmark and identity orientation.
///
/// Each step is drawn with the orientation in effect before its move.
pub fn instructions(moves: &[MoveIndex]) -> Instructions {
    let mut creases: Vec<Line> = Vec::new();
    let mut frames = Vec::new();
    let mut push = |source: Option<MoveIndex>, step: FoldStep| {
        let earlier = creases.clone();
        if !includes_line(&creases, &step.line) {
            creases.push(step.line);
        }
        frames.push(StepFrame {
            source,
            step,
            earlier_creases: earlier,
        });
    };

    push(None, opening_fold());
    let mut landmark = START_LANDMARK;
    let mut o = Orientation::IDENTITY;
    for &mv in moves {
        let outcome = fold_move(mv, landmark, o);
        tracing::trace!(
            %mv,
            landmark,
            steps = outcome.steps.len(),
            rotation = o.rotation(),
            flip = o.flip(),
            "fold move"
        );
        for step in &outcome.steps {
            push(Some(mv), step.rotated(o));
        }
        landmark = outcome.new_landmark;
        o = outcome.orientation;
    }

    Instructions {
        frames,
        landmark,
        landmark_point: rotate_point(landmark, 0.0, o),
        orientation: o,
    }
}
