//! Engine module - the falling-block state machine
//!
//! Ties together the board, shape tables, and RNG. The engine is synchronous
//! and single-threaded: commands and gravity ticks mutate it directly, and
//! every operation is total. Commands that cannot apply in the current phase
//! are no-ops rather than errors.

use crate::board::Board;
use crate::pieces::{self, PieceShape};
use crate::rng::SimpleRng;
use crate::types::{GameCommand, GameConfig, Phase, PieceKind, Rotation};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
}

impl ActivePiece {
    /// Create a piece at its spawn position: top row, centered horizontally
    pub fn at_spawn(kind: PieceKind, field_width: u8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: pieces::spawn_x(kind, field_width),
            y: 0,
        }
    }

    /// Get the shape (cell offsets) for the current rotation
    pub fn shape(&self) -> PieceShape {
        pieces::shape(self.kind, self.rotation)
    }

    /// Get the absolute field coordinates of the piece's four cells
    pub fn cells(&self) -> [(i16, i16); 4] {
        let mut cells = self.shape();
        for (x, y) in &mut cells {
            *x += self.x;
            *y += self.y;
        }
        cells
    }
}

/// The complete game state machine
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active: Option<ActivePiece>,
    phase: Phase,
    /// Cumulative count of cleared lines
    score: u32,
    fall_interval_ms: u32,
    /// Elapsed milliseconds since the last gravity step
    fall_timer_ms: u32,
    rng: SimpleRng,
}

impl GameEngine {
    /// Create an engine on the standard field with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Create an engine with explicit dimensions and gravity interval
    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        Self {
            board: Board::new(config.width, config.height),
            active: None,
            phase: Phase::NotStarted,
            score: 0,
            fall_interval_ms: config.fall_interval_ms,
            fall_timer_ms: 0,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    /// Spawn a fresh piece at the top of the field
    ///
    /// The kind is drawn uniformly at random. If any in-field cell of the
    /// spawned piece is already occupied the phase flips to `GameOver`; the
    /// colliding piece stays recorded as the active piece.
    pub fn spawn_piece(&mut self) {
        let piece = ActivePiece::at_spawn(self.rng.next_kind(), self.board.width());
        let blocked = piece
            .cells()
            .iter()
            .any(|&(x, y)| self.board.is_occupied(x, y));

        self.active = Some(piece);
        if blocked {
            self.phase = Phase::GameOver;
        }
    }

    /// Check whether the active piece fits when displaced by `(dx, dy)` with
    /// the given rotation
    ///
    /// Every cell must stay inside the side walls and above the floor; cells
    /// in rows above the field are allowed. Returns false with no active
    /// piece. Never mutates the engine.
    pub fn can_place(&self, dx: i16, dy: i16, rotation: Rotation) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let width = self.board.width() as i16;
        let height = self.board.height() as i16;

        pieces::shape(active.kind, rotation).iter().all(|&(sx, sy)| {
            let x = active.x + sx + dx;
            let y = active.y + sy + dy;
            x >= 0 && x < width && y < height && !self.board.is_occupied(x, y)
        })
    }

    /// Move the active piece one cell left, if it fits
    pub fn move_left(&mut self) {
        self.shift(-1);
    }

    /// Move the active piece one cell right, if it fits
    pub fn move_right(&mut self) {
        self.shift(1);
    }

    fn shift(&mut self, dx: i16) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        if self.can_place(dx, 0, active.rotation) {
            self.active = Some(ActivePiece {
                x: active.x + dx,
                ..active
            });
        }
    }

    /// Move the active piece one cell down
    ///
    /// Returns true if the piece moved. A blocked move returns false and
    /// changes nothing; locking is left to the gravity tick and hard drop,
    /// so a rested piece can still slide sideways.
    pub fn move_down(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.can_place(0, 1, active.rotation) {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
            return true;
        }
        false
    }

    /// Rotate the active piece clockwise at its current origin
    ///
    /// There are no wall kicks: if the rotated footprint does not fit, the
    /// rotation is rejected outright.
    pub fn rotate_cw(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        let next = active.rotation.rotate_cw();
        if self.can_place(0, 0, next) {
            self.active = Some(ActivePiece {
                rotation: next,
                ..active
            });
        }
    }

    /// Drop the active piece to the lowest position it fits, then lock it,
    /// clear lines, and spawn the next piece, all synchronously
    pub fn hard_drop(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        let mut fall: i16 = 0;
        while self.can_place(0, fall + 1, active.rotation) {
            fall += 1;
        }

        if fall > 0 {
            self.active = Some(ActivePiece {
                y: active.y + fall,
                ..active
            });
        }

        self.lock_piece();
        self.clear_lines();
        self.spawn_piece();
    }

    /// Write the active piece's cells into the board and clear the active
    /// slot
    ///
    /// Cells in rows above the field are dropped silently.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.board
            .lock_piece(&active.shape(), active.x, active.y, active.kind);
    }

    /// Clear all full rows and add one point per row to the score
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows();
        self.score += cleared;
        cleared
    }

    /// Feed elapsed wall-clock time into the gravity timer
    ///
    /// Performs at most one gravity step per call: once the accumulated time
    /// reaches the gravity interval, the interval is subtracted and the piece
    /// moves down once. A piece that cannot move has landed: it locks, full
    /// lines clear, and the next piece spawns. Excess time stays banked for
    /// later calls.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.phase != Phase::Playing {
            return;
        }

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms >= self.fall_interval_ms {
            self.fall_timer_ms -= self.fall_interval_ms;
            if !self.move_down() {
                self.lock_piece();
                self.clear_lines();
                self.spawn_piece();
            }
        }
    }

    /// Start a fresh game: empty field, zero score, first piece spawned
    ///
    /// The gravity timer keeps whatever it held, so a restarted game may take
    /// its first gravity step early.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.phase = Phase::Playing;
        self.spawn_piece();
    }

    /// Apply a game command, ignoring it when the phase does not allow it
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::MoveDown => {
                self.move_down();
            }
            GameCommand::RotateCw => self.rotate_cw(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Start => {
                if self.phase != Phase::Playing {
                    self.reset();
                }
            }
        }
    }
}
