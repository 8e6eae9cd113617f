//! Shared types module - data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they are usable
//! in any context (game logic, rendering, input mapping, tests).
//!
//! # Playfield Dimensions
//!
//! Standard falling-block playfield:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Input poll / frame interval (~60 FPS) |
//! | `FALL_INTERVAL_MS` | 1000 | Gravity interval (one row per second) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameCommand, PieceKind, Rotation, FIELD_WIDTH, FIELD_HEIGHT};
//!
//! let rotation = Rotation::North;
//! assert_eq!(rotation.rotate_cw(), Rotation::East);
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! assert_ne!(GameCommand::HardDrop, GameCommand::MoveDown);
//! ```

/// Playfield width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Playfield height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Input poll / frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval in milliseconds (one row per second)
pub const FALL_INTERVAL_MS: u32 = 1000;

/// The seven tetromino piece kinds
///
/// Each kind has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in spawn-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Rotation states
///
/// - **North**: Spawn orientation (0° rotation)
/// - **East**: Rotated 90° clockwise
/// - **South**: Rotated 180°
/// - **West**: Rotated 270° clockwise
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Game phase
///
/// - **NotStarted**: Before the first game; only `Start` is meaningful.
/// - **Playing**: A piece is falling and commands apply.
/// - **GameOver**: A spawn collided; only `Start` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Playing,
    GameOver,
}

/// Commands that can be applied to the game
///
/// Produced by the input mapping and dispatched to the engine. Commands
/// that do not apply in the current phase are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    MoveDown,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Instantly drop piece to the lowest valid position
    HardDrop,
    /// Start a fresh game (from NotStarted or GameOver)
    Start,
}

/// A cell on the playfield
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
///
/// Used by the playfield as a flat array of cells.
pub type Cell = Option<PieceKind>;

/// Engine construction parameters.
///
/// Defaults to the standard 10x20 field with one gravity step per second.
/// Tests use smaller fields to keep scenarios short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub fall_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            fall_interval_ms: FALL_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_cycle_returns_to_start() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::North);
    }

    #[test]
    fn all_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in PieceKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_config_matches_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.width, FIELD_WIDTH);
        assert_eq!(cfg.height, FIELD_HEIGHT);
        assert_eq!(cfg.fall_interval_ms, FALL_INTERVAL_MS);
    }
}
