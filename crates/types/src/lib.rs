//! Shared data types for the blockfall engine.
//!
//! This crate defines the fundamental value types used across the workspace.
//! Everything here is plain data with no dependencies, so the same types can
//! back the core rules, external observers, and whatever shell drives them.
//!
//! # Coordinate System
//!
//! The board origin is top-left: `x` is a column growing rightward, `y` is a
//! row growing downward. Coordinates are `i8`; candidate positions one step
//! outside the board (e.g. `x = -1` while probing a wall) must be
//! representable, so unsigned indices are not an option.
//!
//! # Default Configuration
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | `BOARD_COLS` | 9 | playfield columns |
//! | `BOARD_ROWS` | 20 | playfield rows |
//! | `SPAWN_ANCHOR` | (3, 0) | top-left of a fresh piece's 4x4 box |
//! | `PALETTE_SIZE` | 10 | number of cell colors |
//! | `SPAWN_BUFFER_ROWS` | 4 | reserved top rows; settled cells here mean loss |
//! | `ROTATION_STATES` | 4 | rotation indices per piece kind |
//! | `FALL_TICK_MS` | 370 | shell-side fall timer period |

use std::ops::Add;

/// Default number of board columns.
pub const BOARD_COLS: u8 = 9;

/// Default number of board rows.
pub const BOARD_ROWS: u8 = 20;

/// Where a freshly spawned piece's bounding box is anchored.
pub const SPAWN_ANCHOR: Point = Point::new(3, 0);

/// Number of colors in the cell palette.
pub const PALETTE_SIZE: u8 = 10;

/// Rows at the top of the board reserved for spawning.
///
/// A settled cell inside this band is the loss condition.
pub const SPAWN_BUFFER_ROWS: u8 = 4;

/// Rotation states stored per piece kind.
///
/// Rotation indices live in `[0, ROTATION_STATES)` and advance modulo this
/// value. The shape table stores exactly this many entries per kind, so the
/// two must not diverge.
pub const ROTATION_STATES: u8 = 4;

/// Piece kinds defined by the shape table.
pub const KIND_COUNT: u8 = 7;

/// Piece kinds the spawner actually draws from.
///
/// The table defines `KIND_COUNT` kinds but spawning only ever picks from the
/// first six; kind 6 is reachable solely through explicit construction. This
/// asymmetry is inherited behavior and is kept on purpose.
pub const SPAWN_KIND_COUNT: u8 = 6;

/// Fall timer period in milliseconds.
///
/// Owned by the presentation shell: the engine itself has no clock and only
/// ever learns "a tick happened". Exported so shells share one default.
pub const FALL_TICK_MS: u32 = 370;

/// A board coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column, counted from the left edge.
    pub x: i8,
    /// Row, counted from the top edge.
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    pub const fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::add(self, other)
    }
}

/// One settled, colored unit square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Palette index in `[0, palette_size)`.
    pub color: u8,
    pub pos: Point,
}

impl Cell {
    pub const fn new(color: u8, pos: Point) -> Self {
        Self { color, pos }
    }
}

/// Directions a falling piece can be nudged in.
///
/// There is no `Up`: pieces never move against gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// The unit translation this direction applies to a piece anchor.
    pub const fn offset(self) -> Point {
        match self {
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
        }
    }
}

/// External commands the engine reacts to.
///
/// `Down` is not a soft-drop modifier: it forces one immediate fall step,
/// identical to a timer tick. Input no key maps to is simply never turned
/// into a `Command`, which is how "any other command is a no-op" falls out
/// of the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Left,
    Right,
    Rotate,
    Down,
}

impl Command {
    /// Parse a command name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "rotate" => Some(Command::Rotate),
            "down" => Some(Command::Down),
            _ => None,
        }
    }

    /// Convert to the canonical command name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Rotate => "rotate",
            Command::Down => "down",
        }
    }
}

/// Per-game configuration.
///
/// Plain fields plus `Default` so call sites can override a single knob with
/// struct-update syntax:
///
/// ```
/// use blockfall_types::GameConfig;
///
/// let cfg = GameConfig { cols: 6, rows: 12, ..GameConfig::default() };
/// assert_eq!(cfg.palette_size, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub cols: u8,
    pub rows: u8,
    /// Anchor of a freshly spawned piece's 4x4 bounding box.
    pub spawn: Point,
    pub palette_size: u8,
    /// Height of the reserved top band checked by the overflow rule.
    pub spawn_buffer_rows: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_COLS,
            rows: BOARD_ROWS,
            spawn: SPAWN_ANCHOR,
            palette_size: PALETTE_SIZE,
            spawn_buffer_rows: SPAWN_BUFFER_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_add_is_component_wise() {
        let p = Point::new(3, 0) + Point::new(-1, 2);
        assert_eq!(p, Point::new(2, 2));
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Left.offset(), Point::new(-1, 0));
        assert_eq!(Direction::Right.offset(), Point::new(1, 0));
        assert_eq!(Direction::Down.offset(), Point::new(0, 1));
    }

    #[test]
    fn test_command_round_trips_through_names() {
        for cmd in [Command::Left, Command::Right, Command::Rotate, Command::Down] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("LEFT"), Some(Command::Left));
        assert_eq!(Command::from_str("harddrop"), None);
        assert_eq!(Command::from_str(""), None);
    }

    #[test]
    fn test_default_config_matches_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.cols, 9);
        assert_eq!(cfg.rows, 20);
        assert_eq!(cfg.spawn, Point::new(3, 0));
        assert_eq!(cfg.palette_size, 10);
        assert_eq!(cfg.spawn_buffer_rows, 4);
    }

    #[test]
    fn test_spawner_kind_pool_is_smaller_than_the_table() {
        // Deliberate inherited asymmetry, see SPAWN_KIND_COUNT docs.
        assert!(SPAWN_KIND_COUNT < KIND_COUNT);
        assert_eq!(SPAWN_KIND_COUNT, 6);
        assert_eq!(KIND_COUNT, 7);
    }

    #[test]
    fn test_shell_facing_defaults() {
        // Shells that drive the engine share these; the engine never reads
        // the timer period itself.
        assert_eq!(FALL_TICK_MS, 370);
        assert_eq!(ROTATION_STATES, 4);
    }
}
