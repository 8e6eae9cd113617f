//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every game rule
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the playfield grid with row clearing
//! - [`pieces`]: tetromino shape tables and spawn placement
//! - [`rng`]: deterministic uniform piece selection
//! - [`engine`]: the game state machine tying it all together
//!
//! # Game Rules
//!
//! - Pieces spawn centered on the top row, one of seven kinds drawn
//!   uniformly at random
//! - Rotation cycles clockwise through four states with no wall kicks
//! - Gravity takes at most one step per [`GameEngine::advance`] call; excess
//!   elapsed time stays banked
//! - Completed rows clear bottom-up and score one point each
//! - A spawn landing on occupied cells ends the game, with the colliding
//!   piece left recorded
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameEngine;
//! use blockfall_types::{GameCommand, Phase};
//!
//! let mut game = GameEngine::new(12345);
//! game.apply(GameCommand::Start);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::RotateCw);
//! game.apply(GameCommand::HardDrop);
//!
//! // The dropped piece locked into the field and the next one spawned.
//! assert!(game.board().cells().iter().any(|cell| cell.is_some()));
//! assert!(game.active().is_some());
//! ```

pub mod board;
pub mod engine;
pub mod pieces;
pub mod rng;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{ActivePiece, GameEngine};
pub use pieces::{bounding_width, shape, PieceShape};
pub use rng::SimpleRng;
