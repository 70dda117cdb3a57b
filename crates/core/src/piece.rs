//! Piece module - the falling, player-controlled block
//!
//! A piece is just four numbers: kind, color, anchor position, rotation. Its
//! absolute cells are derived from the shape table on demand, never stored,
//! so they cannot drift out of sync with kind/rotation/pos.

use blockfall_types::{Cell, GameConfig, Point, ROTATION_STATES, SPAWN_KIND_COUNT};

use crate::geometry::{shape_offsets, InvalidArgument, SHAPES};
use crate::rng::SimpleRng;

/// The currently falling block.
///
/// Fields are private: construction goes through [`Piece::spawn`] or
/// [`Piece::new`], both of which guarantee kind and rotation index the shape
/// table. The anchor position is unconstrained; whether a piece actually fits
/// on a board is a separate placement check, not a piece invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: u8,
    color: u8,
    pos: Point,
    rotation: u8,
}

impl Piece {
    /// Spawn a random piece at the configured anchor, rotation 0.
    ///
    /// Kind is drawn from the spawn pool (`0..SPAWN_KIND_COUNT`, which is
    /// one kind short of the full table) and color from the configured
    /// palette.
    pub fn spawn(rng: &mut SimpleRng, config: &GameConfig) -> Self {
        let kind = rng.next_range(SPAWN_KIND_COUNT as u32) as u8;
        let color = rng.next_range(config.palette_size as u32) as u8;
        Self {
            kind,
            color,
            pos: config.spawn,
            rotation: 0,
        }
    }

    /// Construct a piece from explicit parts.
    ///
    /// This is the only way to obtain the kind the spawner never draws.
    /// Fails if kind or rotation fall outside the shape table.
    pub fn new(kind: u8, color: u8, pos: Point, rotation: u8) -> Result<Self, InvalidArgument> {
        shape_offsets(kind, rotation)?;
        Ok(Self {
            kind,
            color,
            pos,
            rotation,
        })
    }

    pub fn kind(&self) -> u8 {
        self.kind
    }

    pub fn color(&self) -> u8 {
        self.color
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// The four absolute cells this piece occupies.
    pub fn occupied_cells(&self) -> [Cell; 4] {
        // Construction validated both indices, so the lookup cannot miss.
        let offsets = SHAPES[self.kind as usize][self.rotation as usize];
        offsets.map(|offset| Cell::new(self.color, self.pos + offset))
    }

    /// The same piece with its anchor shifted by `delta`.
    pub fn translated(&self, delta: Point) -> Self {
        Self {
            pos: self.pos + delta,
            ..*self
        }
    }

    /// The same piece advanced one rotation state, wrapping at the modulus.
    pub fn rotated(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % ROTATION_STATES,
            ..*self
        }
    }
}
