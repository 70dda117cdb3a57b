//! Geometry module - piece shape table and validated lookup
//!
//! Defines the relative cell offsets for every piece kind and rotation state.
//! Each shape lives in a 4x4 bounding box anchored at the piece position, so
//! every offset component is in 0..=3. Kinds with 2-fold rotational symmetry
//! (the bar and the two skew pieces) store identical offsets for rotations
//! 0/2 and 1/3; the square stores the same offsets in all four slots. Those
//! duplicated entries are deliberate: rotating such a piece twice lands on a
//! state that looks the same but still counts as a distinct rotation index.

use std::error::Error;
use std::fmt;

use blockfall_types::{Point, KIND_COUNT, ROTATION_STATES};

/// Offsets of a shape's four cells relative to the piece anchor.
pub type ShapeOffsets = [Point; 4];

/// Bar piece kind (2-fold symmetry).
pub const KIND_I: u8 = 0;
/// Square piece kind (all rotations identical).
pub const KIND_O: u8 = 1;
/// T piece kind.
pub const KIND_T: u8 = 2;
/// Skew piece kind (2-fold symmetry).
pub const KIND_S: u8 = 3;
/// Reverse-skew piece kind (2-fold symmetry).
pub const KIND_Z: u8 = 4;
/// J piece kind.
pub const KIND_J: u8 = 5;
/// L piece kind.
///
/// Present in the table but outside the spawner's draw range; see
/// [`blockfall_types::SPAWN_KIND_COUNT`].
pub const KIND_L: u8 = 6;

const fn p(x: i8, y: i8) -> Point {
    Point::new(x, y)
}

/// Bar shapes: horizontal on row 1, vertical on column 2.
const I_SHAPES: [ShapeOffsets; 4] = [
    [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
    [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
    [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
    [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
];

/// Square shapes (same for all rotations).
const O_SHAPES: [ShapeOffsets; 4] = [
    [p(1, 0), p(2, 0), p(1, 1), p(2, 1)],
    [p(1, 0), p(2, 0), p(1, 1), p(2, 1)],
    [p(1, 0), p(2, 0), p(1, 1), p(2, 1)],
    [p(1, 0), p(2, 0), p(1, 1), p(2, 1)],
];

/// T shapes: the nub points up, right, down, left in rotation order.
const T_SHAPES: [ShapeOffsets; 4] = [
    [p(1, 0), p(0, 1), p(1, 1), p(2, 1)],
    [p(1, 0), p(1, 1), p(2, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(1, 2)],
    [p(1, 0), p(0, 1), p(1, 1), p(1, 2)],
];

/// Skew shapes.
const S_SHAPES: [ShapeOffsets; 4] = [
    [p(1, 0), p(2, 0), p(0, 1), p(1, 1)],
    [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
    [p(1, 0), p(2, 0), p(0, 1), p(1, 1)],
    [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
];

/// Reverse-skew shapes.
const Z_SHAPES: [ShapeOffsets; 4] = [
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
    [p(2, 0), p(1, 1), p(2, 1), p(1, 2)],
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
    [p(2, 0), p(1, 1), p(2, 1), p(1, 2)],
];

/// J shapes.
const J_SHAPES: [ShapeOffsets; 4] = [
    [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
    [p(1, 0), p(2, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
    [p(1, 0), p(1, 1), p(0, 2), p(1, 2)],
];

/// L shapes.
const L_SHAPES: [ShapeOffsets; 4] = [
    [p(2, 0), p(0, 1), p(1, 1), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(0, 2)],
    [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
];

/// The full shape table, indexed by kind then rotation.
pub static SHAPES: [[ShapeOffsets; ROTATION_STATES as usize]; KIND_COUNT as usize] = [
    I_SHAPES, O_SHAPES, T_SHAPES, S_SHAPES, Z_SHAPES, J_SHAPES, L_SHAPES,
];

/// Shape lookup was given a kind or rotation index outside the table.
///
/// The public engine API never produces these indices; this error is only
/// reachable by constructing pieces from raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgument {
    pub kind: u8,
    pub rotation: u8,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no shape for kind {} rotation {} (kind must be < {}, rotation < {})",
            self.kind, self.rotation, KIND_COUNT, ROTATION_STATES
        )
    }
}

impl Error for InvalidArgument {}

/// Look up the cell offsets for a piece kind and rotation state.
///
/// Fails with [`InvalidArgument`] if either index falls outside the table.
/// Rotation indices are not wrapped here; callers that advance a rotation are
/// responsible for reducing it modulo [`ROTATION_STATES`] first.
pub fn shape_offsets(kind: u8, rotation: u8) -> Result<&'static ShapeOffsets, InvalidArgument> {
    if kind >= KIND_COUNT || rotation >= ROTATION_STATES {
        return Err(InvalidArgument { kind, rotation });
    }
    Ok(&SHAPES[kind as usize][rotation as usize])
}
