//! The sixteen base constructions.

use serde::Serialize;

pub const FORMULA_COUNT: usize = 16;

/// Which side of the split the piecewise construction takes. Shared by
/// `Formula::CornerToEdge` and its catalog entry.
#[inline]
pub fn lower_half(p: f64) -> bool {
    p <= 0.5
}

/// Base construction, in move order (`Formula::ALL[k]` backs moves `2k`, `2k+1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Formula {
    /// `p / 4`
    Quarter,
    /// `p / 2`
    Half,
    /// `3p / 4`
    ThreeQuarters,
    /// `(1 − p²) / 2`: bottom-left corner to the landmark, read on the left edge.
    CornerToLandmark,
    /// `(1 − p)² / 2`: same crease, read on the right edge.
    CornerToLandmarkFar,
    /// `(1 − √(1 − p²)) / p`
    CornerToPerpendicular,
    /// `√(1 − p²) / (p + 1)`
    CornerToPerpendicularFar,
    /// `(√(p² + 1) − 1) / p`
    EdgeToDiagonal,
    /// `√(p² + 1) − p`
    EdgeToDiagonalFar,
    /// `(√(p² + 1) − p) · p`
    CornerToDiagonal,
    /// `(√(p² + 1) + p) · (1 − p)`
    CornerToDiagonalFar,
    /// `2p² / (p + 1)²`
    EdgeToEdge,
    /// `2p / (p + 1)²`
    EdgeToEdgeFar,
    /// `1 / (p + 1)`
    DiagonalIntersection,
    /// `1 / (2 − p)`
    AntiDiagonalIntersection,
    /// `√(2p) − p` when `p ≤ 0.5`, else `p − √(2p − 1)`
    CornerToEdge,
}

impl Formula {
    pub const ALL: [Formula; FORMULA_COUNT] = [
        Formula::Quarter,
        Formula::Half,
        Formula::ThreeQuarters,
        Formula::CornerToLandmark,
        Formula::CornerToLandmarkFar,
        Formula::CornerToPerpendicular,
        Formula::CornerToPerpendicularFar,
        Formula::EdgeToDiagonal,
        Formula::EdgeToDiagonalFar,
        Formula::CornerToDiagonal,
        Formula::CornerToDiagonalFar,
        Formula::EdgeToEdge,
        Formula::EdgeToEdgeFar,
        Formula::DiagonalIntersection,
        Formula::AntiDiagonalIntersection,
        Formula::CornerToEdge,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn eval(self, p: f64) -> f64 {
        match self {
            Formula::Quarter => 0.25 * p,
            Formula::Half => 0.5 * p,
            Formula::ThreeQuarters => 0.75 * p,
            Formula::CornerToLandmark => (1.0 - p * p) / 2.0,
            Formula::CornerToLandmarkFar => (1.0 - p).powi(2) / 2.0,
            Formula::CornerToPerpendicular => (1.0 - (1.0 - p * p).sqrt()) / p,
            Formula::CornerToPerpendicularFar => (1.0 - p * p).sqrt() / (p + 1.0),
            Formula::EdgeToDiagonal => ((p * p + 1.0).sqrt() - 1.0) / p,
            Formula::EdgeToDiagonalFar => (p * p + 1.0).sqrt() - p,
            Formula::CornerToDiagonal => ((p * p + 1.0).sqrt() - p) * p,
            Formula::CornerToDiagonalFar => ((p * p + 1.0).sqrt() + p) * (1.0 - p),
            Formula::EdgeToEdge => (2.0 * p * p) / (p + 1.0).powi(2),
            Formula::EdgeToEdgeFar => (2.0 * p) / (p + 1.0).powi(2),
            Formula::DiagonalIntersection => 1.0 / (p + 1.0),
            Formula::AntiDiagonalIntersection => 1.0 / (2.0 - p),
            Formula::CornerToEdge => {
                if lower_half(p) {
                    (p * 2.0).sqrt() - p
                } else {
                    p - (p * 2.0 - 1.0).sqrt()
                }
            }
        }
    }
}
