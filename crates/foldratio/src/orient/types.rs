//! Drawing primitives on the unit square and the affine map type.
//!
//! Wire shapes follow what the renderer consumes: `Line`/`Arrow` serialize as
//! `[x1, y1, x2, y2]`, `Marking` as `[x, y]` (point) or `[x, y, angle]`
//! (short line section through the point).

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

/// Position on the unit square.
pub type Point = Vector2<f64>;

/// Crease segment between two points on the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        }
    }
    /// Same crease, endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl From<[f64; 4]> for Line {
    fn from(v: [f64; 4]) -> Self {
        Line::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Line> for [f64; 4] {
    fn from(l: Line) -> Self {
        [l.from.x, l.from.y, l.to.x, l.to.y]
    }
}

/// Directed arrow showing which part of the sheet moves where.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Arrow {
    pub from: Point,
    pub to: Point,
}

impl Arrow {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        }
    }
}

impl From<[f64; 4]> for Arrow {
    fn from(v: [f64; 4]) -> Self {
        Arrow::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Arrow> for [f64; 4] {
    fn from(a: Arrow) -> Self {
        [a.from.x, a.from.y, a.to.x, a.to.y]
    }
}

/// Reference mark drawn on a step: a dot, or a short line section through a
/// point at `angle` (radians).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub enum Marking {
    Point(Point),
    Section { at: Point, angle: f64 },
}

impl Marking {
    #[inline]
    pub fn point(x: f64, y: f64) -> Self {
        Marking::Point(Point::new(x, y))
    }
    #[inline]
    pub fn section(x: f64, y: f64, angle: f64) -> Self {
        Marking::Section {
            at: Point::new(x, y),
            angle,
        }
    }
    #[inline]
    pub fn position(&self) -> Point {
        match *self {
            Marking::Point(p) => p,
            Marking::Section { at, .. } => at,
        }
    }
}

impl TryFrom<Vec<f64>> for Marking {
    type Error = String;
    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        match v.as_slice() {
            [x, y] => Ok(Marking::point(*x, *y)),
            [x, y, angle] => Ok(Marking::section(*x, *y, *angle)),
            other => Err(format!(
                "marking needs 2 or 3 numbers, got {}",
                other.len()
            )),
        }
    }
}

impl From<Marking> for Vec<f64> {
    fn from(m: Marking) -> Self {
        match m {
            Marking::Point(p) => vec![p.x, p.y],
            Marking::Section { at, angle } => vec![at.x, at.y, angle],
        }
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.m * p + self.t
    }
    /// `other ∘ self`: apply `self` first.
    #[inline]
    pub fn then(&self, other: &Affine2) -> Affine2 {
        Affine2 {
            m: other.m * self.m,
            t: other.m * self.t + other.t,
        }
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
}
