//! Per-construction geometry, one function per base formula.

use std::f64::consts::FRAC_PI_2;

use crate::landmark::{lower_half, Formula};
use crate::orient::{Arrow, Corner, Edge, Line, Marking, Orientation, Turn};

use super::FoldStep;

/// Steps plus the orientation change they cause (before complement parity).
pub(super) struct Construction {
    pub steps: Vec<FoldStep>,
    pub turn: Turn,
    /// Extra flip on top of the move's parity.
    pub mirror: bool,
}

impl Construction {
    fn new(steps: Vec<FoldStep>, turn: Turn, mirror: bool) -> Self {
        Self {
            steps,
            turn,
            mirror,
        }
    }
}

fn step(line: Line, arrows: Vec<Arrow>, markings: Vec<Marking>, description: String) -> FoldStep {
    FoldStep {
        line,
        arrows,
        markings,
        description,
    }
}

pub(super) fn construct(formula: Formula, c: f64, o: Orientation) -> Construction {
    match formula {
        Formula::Quarter => quarter(c, o),
        Formula::Half => half(c, o),
        Formula::ThreeQuarters => three_quarters(c, o),
        Formula::CornerToLandmark => corner_to_landmark(c, o, Turn::ThreeQuarter),
        Formula::CornerToLandmarkFar => corner_to_landmark(c, o, Turn::Quarter),
        Formula::CornerToPerpendicular => corner_to_perpendicular(c, o),
        Formula::CornerToPerpendicularFar => corner_to_perpendicular_far(c, o),
        Formula::EdgeToDiagonal => edge_to_diagonal(c, o),
        Formula::EdgeToDiagonalFar => edge_to_diagonal_far(c, o),
        Formula::CornerToDiagonal => corner_to_diagonal(c, o),
        Formula::CornerToDiagonalFar => corner_to_diagonal_far(c, o),
        Formula::EdgeToEdge => edge_to_edge(c, o, Turn::None),
        Formula::EdgeToEdgeFar => edge_to_edge(c, o, Turn::Half),
        Formula::DiagonalIntersection => diagonal_intersection(c, o),
        Formula::AntiDiagonalIntersection => anti_diagonal_intersection(c, o),
        Formula::CornerToEdge => corner_to_edge(c, o),
    }
}

// Shared folds.

/// Top-left corner onto the landmark, crease perpendicular to the top edge.
fn fold_corner_onto_landmark(c: f64, o: Orientation) -> FoldStep {
    step(
        Line::new(c / 2.0, 0.0, c / 2.0, 1.0),
        vec![Arrow::new(0.0, 0.5, c, 0.5)],
        vec![Marking::point(0.0, 0.0), Marking::point(c, 0.0)],
        format!(
            "Fold the edge perpendicular to the sides||so that the {} corner||lies on the landmark you just made",
            o.corner(Corner::TopLeft)
        ),
    )
}

fn fold_perpendicular_at_landmark(c: f64) -> FoldStep {
    let arrow = if c < 0.5 {
        Arrow::new(0.0, 0.5, 2.0 * c, 0.5)
    } else {
        Arrow::new(1.0, 0.5, 2.0 * c - 1.0, 0.5)
    };
    step(
        Line::new(c, 0.0, c, 1.0),
        vec![arrow],
        vec![Marking::point(c, 0.0), Marking::point(c, 1.0)],
        "Fold perpendicular to the edge from the landmark".to_string(),
    )
}

/// Crease from the bottom-left corner through the landmark.
fn fold_diagonal_to_landmark(c: f64, o: Orientation) -> FoldStep {
    let q = 1.0 + c * c;
    step(
        Line::new(c, 0.0, 0.0, 1.0),
        vec![Arrow::new(0.0, 0.0, 2.0 * c / q, 2.0 - 2.0 / q)],
        vec![Marking::point(0.0, 1.0), Marking::point(c, 0.0)],
        format!(
            "Fold from the {} corner to the landmark",
            o.corner(Corner::BottomLeft)
        ),
    )
}

/// Height at which the top-left corner meets the perpendicular through `c`.
fn corner_height(c: f64) -> f64 {
    (2.0 - c * c - 2.0 * (1.0 - c * c).sqrt()).sqrt()
}

fn perpendicular_to_left_edge(at: f64, arrow: Arrow, mark: Marking, o: Orientation) -> FoldStep {
    step(
        Line::new(0.0, 1.0 - at, 1.0, 1.0 - at),
        vec![arrow],
        vec![mark],
        format!(
            "Fold perpendicular to the {} edge||from the intersection of the crease you||just made and the diagonal",
            o.edge(Edge::Left)
        ),
    )
}

// Constructions, in formula order.

fn quarter(c: f64, o: Orientation) -> Construction {
    let second = step(
        Line::new(c / 4.0, 0.0, c / 4.0, 1.0),
        vec![Arrow::new(0.0, 0.5, c / 2.0, 0.5)],
        vec![Marking::point(0.0, 0.0), Marking::point(c / 2.0, 0.0)],
        "Fold the edge to the crease you just made".to_string(),
    );
    Construction::new(
        vec![fold_corner_onto_landmark(c, o), second],
        Turn::None,
        false,
    )
}

fn half(c: f64, o: Orientation) -> Construction {
    Construction::new(vec![fold_corner_onto_landmark(c, o)], Turn::None, false)
}

fn three_quarters(c: f64, o: Orientation) -> Construction {
    let second = step(
        Line::new(3.0 * c / 4.0, 0.0, 3.0 * c / 4.0, 1.0),
        vec![Arrow::new(c / 2.0, 0.5, c, 0.5)],
        vec![Marking::point(c / 2.0, 0.0), Marking::point(c, 0.0)],
        "Fold halfway between the line you just made||and the landmark from the step before that"
            .to_string(),
    );
    Construction::new(
        vec![fold_corner_onto_landmark(c, o), second],
        Turn::None,
        false,
    )
}

/// Bottom-left corner onto the landmark. One crease serves both formulas:
/// it cuts the left edge at `(1 − c²)/2` from the top and the right edge at
/// `(1 − c)²/2` from the bottom; `turn` brings the relevant edge to the top.
fn corner_to_landmark(c: f64, o: Orientation, turn: Turn) -> Construction {
    let fold = step(
        Line::new(0.0, (1.0 - c * c) / 2.0, 1.0, (2.0 - (1.0 - c).powi(2)) / 2.0),
        vec![Arrow::new(0.0, 1.0, c, 0.0)],
        vec![Marking::point(0.0, 1.0), Marking::point(c, 0.0)],
        format!(
            "Fold the {} corner to the landmark",
            o.corner(Corner::BottomLeft)
        ),
    );
    Construction::new(vec![fold], turn, true)
}

fn corner_to_perpendicular(c: f64, o: Orientation) -> Construction {
    let h = corner_height(c);
    let second = step(
        Line::new((1.0 - (1.0 - c * c).sqrt()) / c, 0.0, 0.0, 1.0),
        vec![Arrow::new(0.0, 0.0, c, h)],
        vec![
            Marking::point(0.0, 1.0),
            Marking::point(0.0, 0.0),
            Marking::section(c, h, FRAC_PI_2),
        ],
        format!(
            "Fold from the {} corner|| so that the {} corner||lies on the crease you just made",
            o.corner(Corner::BottomLeft),
            o.corner(Corner::TopLeft)
        ),
    );
    Construction::new(
        vec![fold_perpendicular_at_landmark(c), second],
        Turn::None,
        false,
    )
}

fn corner_to_perpendicular_far(c: f64, o: Orientation) -> Construction {
    let h = corner_height(c);
    let second = step(
        Line::new(1.0, 1.0 - (1.0 - c * c).sqrt() / (c + 1.0), 0.0, 1.0),
        vec![Arrow::new(1.0, 1.0, c, h)],
        vec![
            Marking::point(c, 0.0),
            Marking::point(c, 1.0),
            Marking::point(1.0, 1.0),
            Marking::section(c, h, FRAC_PI_2),
        ],
        format!(
            "Fold from the {} corner|| so that the {} corner||lies on the crease you just made",
            o.corner(Corner::BottomLeft),
            o.corner(Corner::BottomRight)
        ),
    );
    Construction::new(
        vec![fold_perpendicular_at_landmark(c), second],
        Turn::Quarter,
        true,
    )
}

fn edge_to_diagonal(c: f64, o: Orientation) -> Construction {
    let second = step(
        Line::new(((c * c + 1.0).sqrt() - 1.0) / c, 0.0, 0.0, 1.0),
        vec![Arrow::new(0.0, 1.0 / 3.0, 2.0 * c / 3.0, 1.0 / 3.0)],
        vec![
            Marking::section(0.0, 1.0 / 3.0, FRAC_PI_2),
            Marking::section(2.0 * c / 3.0, 1.0 / 3.0, (1.0 / c).atan()),
        ],
        format!(
            "Fold the {} edge to the crease you just made",
            o.edge(Edge::Left)
        ),
    );
    Construction::new(
        vec![fold_diagonal_to_landmark(c, o), second],
        Turn::None,
        false,
    )
}

fn edge_to_diagonal_far(c: f64, o: Orientation) -> Construction {
    let second = step(
        Line::new(1.0, 1.0 - (c * c + 1.0).sqrt() + c, 0.0, 1.0),
        vec![Arrow::new(1.0, 1.0, c, corner_height(c))],
        vec![
            Marking::section(2.0 / 3.0, 1.0, 0.0),
            Marking::section(2.0 * c / 3.0, 1.0 / 3.0, (1.0 / c).atan()),
        ],
        format!(
            "Fold the {} edge to the crease you just made",
            o.edge(Edge::Bottom)
        ),
    );
    Construction::new(
        vec![fold_diagonal_to_landmark(c, o), second],
        Turn::Quarter,
        true,
    )
}

fn corner_to_diagonal(c: f64, o: Orientation) -> Construction {
    let s = (1.0 + c * c).sqrt();
    let (x, y) = (c - (c * c) / s, c / s);
    let second = step(
        Line::new(0.0, ((c * c + 1.0).sqrt() - c) * c, c, 0.0),
        vec![Arrow::new(0.0, 0.0, x, y)],
        vec![
            Marking::point(0.0, 0.0),
            Marking::point(c, 0.0),
            Marking::section(x, y, (1.0 / c).atan()),
        ],
        format!(
            "Fold the {} edge to the crease you just made so that the {} corner||lies on that crease",
            o.edge(Edge::Top),
            o.corner(Corner::TopLeft)
        ),
    );
    Construction::new(
        vec![fold_diagonal_to_landmark(c, o), second],
        Turn::ThreeQuarter,
        true,
    )
}

fn corner_to_diagonal_far(c: f64, o: Orientation) -> Construction {
    let s = (1.0 + c * c).sqrt();
    let (x, y) = (c - (c - c * c) / s, (1.0 - c) / s);
    let second = step(
        Line::new(1.0, ((c * c + 1.0).sqrt() + c) * (1.0 - c), c, 0.0),
        vec![Arrow::new(1.0, 0.0, x, y)],
        vec![
            Marking::point(1.0, 0.0),
            Marking::point(c, 0.0),
            Marking::section(x, y, (1.0 / c).atan()),
        ],
        format!(
            "Fold the {} edge to the crease you just made so that the {} corner||lies on that crease",
            o.edge(Edge::Top),
            o.corner(Corner::TopRight)
        ),
    );
    Construction::new(
        vec![fold_diagonal_to_landmark(c, o), second],
        Turn::Quarter,
        false,
    )
}

/// Left edge onto the landmark while the bottom-left corner lands on the
/// right edge. The crease meets the top edge at `2c²/(c+1)²` and the bottom
/// edge at `2c/(c+1)²` from the right; a half turn reads the latter.
fn edge_to_edge(c: f64, o: Orientation, turn: Turn) -> Construction {
    let sq = (c + 1.0).powi(2);
    let fold = step(
        Line::new((2.0 * c * c) / sq, 0.0, 1.0 - (2.0 * c) / sq, 1.0),
        vec![
            Arrow::new(0.0, c * (1.0 - c) / (c + 1.0), c, 0.0),
            Arrow::new(0.0, 1.0, 1.0, 2.0 * c / (c + 1.0)),
        ],
        vec![
            Marking::section(0.0, c * (1.0 - c) / (c + 1.0), FRAC_PI_2),
            Marking::point(c, 0.0),
            Marking::point(0.0, 1.0),
            Marking::section(1.0, 2.0 * c / (c + 1.0), FRAC_PI_2),
        ],
        format!(
            "Fold the {} edge to the landmark you just made so that the {} corner lies on the {} edge",
            o.edge(Edge::Left),
            o.corner(Corner::BottomLeft),
            o.edge(Edge::Right)
        ),
    );
    Construction::new(vec![fold], turn, false)
}

fn diagonal_intersection(c: f64, o: Orientation) -> Construction {
    let diagonal = step(
        Line::new(0.0, 0.0, 1.0, 1.0),
        vec![Arrow::new(0.0, 1.0, 1.0, 0.0)],
        vec![Marking::point(0.0, 0.0), Marking::point(1.0, 1.0)],
        "Fold the diagonal".to_string(),
    );
    let at = 1.0 / (c + 1.0);
    let x = c / (c + 1.0);
    let third = perpendicular_to_left_edge(
        at,
        Arrow::new(x, 0.0, x, 2.0 * c / (c + 1.0)),
        Marking::point(x, x),
        o,
    );
    Construction::new(
        vec![diagonal, fold_diagonal_to_landmark(c, o), third],
        Turn::ThreeQuarter,
        false,
    )
}

fn anti_diagonal_intersection(c: f64, o: Orientation) -> Construction {
    let diagonal = step(
        Line::new(0.0, 1.0, 1.0, 0.0),
        vec![Arrow::new(0.0, 0.0, 1.0, 1.0)],
        vec![Marking::point(1.0, 0.0), Marking::point(0.0, 1.0)],
        "Fold the diagonal".to_string(),
    );
    let q = 2.0 + c * c - 2.0 * c;
    let to_landmark = step(
        Line::new(c, 0.0, 1.0, 1.0),
        vec![Arrow::new(1.0, 0.0, 1.0 - 2.0 * (1.0 - c) / q, 2.0 - 2.0 / q)],
        vec![Marking::point(1.0, 1.0), Marking::point(c, 0.0)],
        format!(
            "Fold from the {} corner to the landmark",
            o.corner(Corner::BottomRight)
        ),
    );
    let at = 1.0 / (2.0 - c);
    let third = perpendicular_to_left_edge(
        at,
        Arrow::new(at, 0.0, at, (2.0 - 2.0 * c) / (2.0 - c)),
        Marking::point(at, (1.0 - c) / (2.0 - c)),
        o,
    );
    Construction::new(
        vec![diagonal, to_landmark, third],
        Turn::ThreeQuarter,
        false,
    )
}

/// Crease through the landmark carrying a corner onto the right edge; the
/// lower branch moves the bottom-left corner, the upper the top-left.
fn corner_to_edge(c: f64, o: Orientation) -> Construction {
    if lower_half(c) {
        let r = (c * 2.0).sqrt();
        let fold = step(
            Line::new(c, 0.0, 1.0 - r + c, 1.0),
            vec![Arrow::new(0.0, 1.0, 1.0, (2.0 * c).sqrt())],
            vec![
                Marking::point(c, 0.0),
                Marking::point(0.0, 1.0),
                Marking::section(1.0, (2.0 * c).sqrt(), FRAC_PI_2),
            ],
            format!(
                "Fold from the landmark so that the||{} corner lies on the {} edge",
                o.corner(Corner::BottomLeft),
                o.edge(Edge::Right)
            ),
        );
        Construction::new(vec![fold], Turn::Half, false)
    } else {
        let r = (c * 2.0 - 1.0).sqrt();
        let fold = step(
            Line::new(c, 0.0, c - r, 1.0),
            vec![Arrow::new(0.0, 0.0, 1.0, (2.0 * c - 1.0).sqrt())],
            vec![
                Marking::point(c, 0.0),
                Marking::point(0.0, 0.0),
                Marking::section(1.0, (2.0 * c - 1.0).sqrt(), FRAC_PI_2),
            ],
            format!(
                "Fold from the landmark so that the||{} corner lies on the {} edge",
                o.corner(Corner::TopLeft),
                o.edge(Edge::Right)
            ),
        );
        Construction::new(vec![fold], Turn::Half, true)
    }
}
