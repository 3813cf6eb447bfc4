//! `Orientation` and the transforms it drives.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use nalgebra::{matrix, vector};
use serde::Serialize;

use super::types::{Affine2, Arrow, Line, Marking, Point};

/// Fraction of an arrow trimmed from each end once it is placed on the sheet,
/// so arrow heads stop short of the corner or crease they point at.
pub const ARROW_INSET: f64 = 0.1;

/// Element of the dihedral group of order 8 acting on the unit square.
///
/// `rotation` counts clockwise quarter turns of the abstract frame relative to
/// the physical sheet; `flip` adds a reflection applied after the rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Orientation {
    rotation: u8,
    flip: u8,
}

/// Rotation change contributed by one construction.
///
/// `Quarter` and `ThreeQuarter` describe the turn of the physical sheet; under
/// a flip the frame turns the opposite way, so their offsets swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    None,
    Quarter,
    Half,
    ThreeQuarter,
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation {
        rotation: 0,
        flip: 0,
    };

    /// Reduces `rotation` mod 4 and `flip` mod 2.
    #[inline]
    pub fn new(rotation: u32, flip: u32) -> Self {
        Self {
            rotation: (rotation % 4) as u8,
            flip: (flip % 2) as u8,
        }
    }
    #[inline]
    pub fn rotation(self) -> u8 {
        self.rotation
    }
    #[inline]
    pub fn flip(self) -> u8 {
        self.flip
    }
    #[inline]
    pub fn is_flipped(self) -> bool {
        self.flip == 1
    }

    /// All eight group elements, rotation-major.
    pub fn all() -> impl Iterator<Item = Orientation> {
        (0..4).flat_map(|r| (0..2).map(move |f| Orientation::new(r, f)))
    }

    /// Group inverse. Flipped elements are reflections and invert to themselves.
    #[inline]
    pub fn inverse(self) -> Orientation {
        if self.is_flipped() {
            self
        } else {
            Orientation::new(4 - u32::from(self.rotation), 0)
        }
    }

    /// State after a construction with the given turn, extra mirror, and
    /// complement parity (`move index % 2`).
    pub fn advance(self, turn: Turn, mirror: bool, parity: u8) -> Orientation {
        let f = u32::from(self.flip);
        let offset = match turn {
            Turn::None => 0,
            Turn::Quarter => 1 + 2 * f,
            Turn::Half => 2,
            Turn::ThreeQuarter => 3 - 2 * f,
        };
        Orientation::new(
            u32::from(self.rotation) + offset,
            f + u32::from(parity) + u32::from(mirror),
        )
    }

    /// The point map as `x ↦ M x + t`: rotate, then reflect across the axis
    /// picked by rotation parity.
    pub fn affine(self) -> Affine2 {
        let rot = match self.rotation {
            0 => Affine2::identity(),
            1 => Affine2 {
                m: matrix![0.0, -1.0; 1.0, 0.0],
                t: vector![1.0, 0.0],
            },
            2 => Affine2 {
                m: matrix![-1.0, 0.0; 0.0, -1.0],
                t: vector![1.0, 1.0],
            },
            _ => Affine2 {
                m: matrix![0.0, 1.0; -1.0, 0.0],
                t: vector![0.0, 1.0],
            },
        };
        if !self.is_flipped() {
            return rot;
        }
        let mirror = if self.rotation % 2 == 1 {
            Affine2 {
                m: matrix![1.0, 0.0; 0.0, -1.0],
                t: vector![0.0, 1.0],
            }
        } else {
            Affine2 {
                m: matrix![-1.0, 0.0; 0.0, 1.0],
                t: vector![1.0, 0.0],
            }
        };
        rot.then(&mirror)
    }

    /// Physical name of the corner that is `corner` in the canonical frame.
    pub fn corner(self, corner: Corner) -> Corner {
        let p = corner.index() as i64;
        let r = i64::from(self.rotation);
        let i = match (self.is_flipped(), r % 2 == 1) {
            (true, true) => p + r + 2 * (p % 2) + 3,
            (true, false) => p + r - 2 * (p % 2) + 1,
            (false, _) => p + r,
        };
        Corner::from_index(i.rem_euclid(4) as usize)
    }

    /// Physical name of the edge that is `edge` in the canonical frame.
    pub fn edge(self, edge: Edge) -> Edge {
        let e = edge.index() as i64;
        let r = i64::from(self.rotation);
        let i = match (self.is_flipped(), r % 2 == 1) {
            (true, true) => e + r + 2 * ((e + 1) % 2),
            (true, false) => e + r + 2 * (e % 2),
            (false, _) => e + r,
        };
        Edge::from_index(i.rem_euclid(4) as usize)
    }
}

/// Corners clockwise from top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
    /// Index taken mod 4.
    #[inline]
    pub fn from_index(i: usize) -> Corner {
        Self::ALL[i % 4]
    }
    pub fn name(self) -> &'static str {
        match self {
            Corner::TopLeft => "top left",
            Corner::TopRight => "top right",
            Corner::BottomRight => "bottom right",
            Corner::BottomLeft => "bottom left",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Edges clockwise from top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
    /// Index taken mod 4.
    #[inline]
    pub fn from_index(i: usize) -> Edge {
        Self::ALL[i % 4]
    }
    pub fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a canonical-frame point onto the physical sheet.
///
/// Evaluated coordinate-wise (not through `Orientation::affine`) so a NaN in
/// one coordinate stays in that coordinate.
pub fn rotate_point(x: f64, y: f64, o: Orientation) -> Point {
    let p = match o.rotation {
        0 => Point::new(x, y),
        1 => Point::new(1.0 - y, x),
        2 => Point::new(1.0 - x, 1.0 - y),
        _ => Point::new(y, 1.0 - x),
    };
    if !o.is_flipped() {
        p
    } else if o.rotation % 2 == 1 {
        Point::new(p.x, 1.0 - p.y)
    } else {
        Point::new(1.0 - p.x, p.y)
    }
}

#[inline]
fn rotate(p: Point, o: Orientation) -> Point {
    rotate_point(p.x, p.y, o)
}

pub fn rotate_line(line: &Line, o: Orientation) -> Line {
    Line {
        from: rotate(line.from, o),
        to: rotate(line.to, o),
    }
}

/// Places the arrow on the sheet and trims `ARROW_INSET` off both ends.
pub fn rotate_arrow(arrow: &Arrow, o: Orientation) -> Arrow {
    let from = rotate(arrow.from, o);
    let to = rotate(arrow.to, o);
    let d = (to - from) * ARROW_INSET;
    Arrow {
        from: from + d,
        to: to - d,
    }
}

/// Section angles follow their own rule: `angle + r·π/2` when flipped,
/// `−angle − r·π/2` otherwise.
pub fn rotate_marking(marking: &Marking, o: Orientation) -> Marking {
    match *marking {
        Marking::Point(p) => Marking::Point(rotate(p, o)),
        Marking::Section { at, angle } => {
            let turn = f64::from(o.rotation) * FRAC_PI_2;
            let angle = if o.is_flipped() {
                angle + turn
            } else {
                -angle - turn
            };
            Marking::Section {
                at: rotate(at, o),
                angle,
            }
        }
    }
}

pub fn rotate_corner_description(corner: usize, o: Orientation) -> &'static str {
    o.corner(Corner::from_index(corner)).name()
}

pub fn rotate_edge_description(edge: usize, o: Orientation) -> &'static str {
    o.edge(Edge::from_index(edge)).name()
}

/// `p` for even `f`, `1 − p` for odd `f`.
#[inline]
pub fn flip_landmark(p: f64, f: u8) -> f64 {
    if f % 2 == 0 {
        p
    } else {
        1.0 - p
    }
}
