//! Orientation algebra: the dihedral group of the square acting on the sheet.
//!
//! Purpose
//! - Every catalog construction is written once, in a canonical frame where the
//!   current landmark sits on the top edge measured from the top-left corner.
//!   After a few folds that frame no longer matches the physical sheet; an
//!   `Orientation` (rotation in 0..4, flip in 0..2) records the difference.
//! - Coordinates are carried back to the physical sheet with `rotate_point`
//!   and friends; instruction text names corners and edges through
//!   `Orientation::corner`/`Orientation::edge`, which are separate 4-cycle
//!   lookups and not derived from the point map.
//!
//! Conventions
//! - Unit square, origin at the top-left corner, y grows downwards.
//! - Corners are indexed clockwise from top-left, edges clockwise from top.

mod dihedral;
mod types;

pub use dihedral::{
    flip_landmark, rotate_arrow, rotate_corner_description, rotate_edge_description,
    rotate_line, rotate_marking, rotate_point, Corner, Edge, Orientation, Turn, ARROW_INSET,
};
pub use types::{Affine2, Arrow, Line, Marking, Point};

#[cfg(test)]
mod tests;
