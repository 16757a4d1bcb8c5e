use std::path::Path;

use crate::ai::Planner;
use crate::cpu::Registers;
use crate::error::{MoveError, SaveError};
use crate::save::SaveData;

use super::board::{Board, Cell, SIZE};
use super::player::Owner;

/// Session phase. `PlayerWon`, `ComputerWon`, and `Draw` are terminal until
/// the next new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    PlayerWon,
    ComputerWon,
    Draw,
}

/// What a single applied move did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    PlayerWon,
    ComputerWon,
    Draw,
}

/// Result of a player's applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerMove {
    pub position: usize,
    pub product: i32,
    pub outcome: TurnOutcome,
}

/// Result of a computer's applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    pub factor: i32,
    pub position: usize,
    pub product: i32,
    pub outcome: TurnOutcome,
}

/// Read-only copy of session state for rendering.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub cells: [Cell; SIZE],
    pub player_score: i32,
    pub computer_score: i32,
    pub current_factor: Option<i32>,
    pub game_over: bool,
    pub registers: Registers,
}

/// Owns all mutable game state and drives the turn cycle. Front ends submit
/// moves and render [`Snapshot`]s; they never touch the board directly.
pub struct GameSession {
    board: Board,
    player_score: i32,
    computer_score: i32,
    /// Factor the previous mover just played; the next mover's multiplicand.
    current_factor: Option<i32>,
    state: SessionState,
    registers: Registers,
    planner: Planner,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_planner(Planner::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_planner(Planner::with_seed(seed))
    }

    pub fn with_planner(planner: Planner) -> Self {
        GameSession {
            board: Board::new(),
            player_score: 0,
            computer_score: 0,
            current_factor: None,
            state: SessionState::NotStarted,
            registers: Registers::default(),
            planner,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(
            self.state,
            SessionState::PlayerWon | SessionState::ComputerWon | SessionState::Draw
        )
    }

    /// Start a fresh round: clear the board, keep the scores, and draw the
    /// computer's opening factor. Returns that factor.
    pub fn new_game(&mut self) -> i32 {
        self.board = Board::new();
        let factor = self.planner.opening_factor();
        self.current_factor = Some(factor);
        self.state = SessionState::InProgress;
        factor
    }

    /// Apply the player's factor against the computer's previous factor.
    ///
    /// An illegal attempt (`InvalidProduct`, `CellTaken`) leaves the session
    /// unchanged and does not consume the turn.
    pub fn submit_player_factor(&mut self, factor: i32) -> Result<PlayerMove, MoveError> {
        if self.state != SessionState::InProgress {
            return Err(MoveError::GameOver);
        }
        let multiplicand = self.current_factor.ok_or(MoveError::GameOver)?;

        let placement = self.board.apply_move(Owner::Player, factor, multiplicand)?;
        self.registers = placement.registers;
        self.current_factor = Some(factor);

        let outcome = if self.board.check_win(Owner::Player) {
            self.player_score += 1;
            self.state = SessionState::PlayerWon;
            TurnOutcome::PlayerWon
        } else if self.board.is_full() {
            self.state = SessionState::Draw;
            TurnOutcome::Draw
        } else {
            TurnOutcome::Continue
        };

        Ok(PlayerMove {
            position: placement.position,
            product: placement.product,
            outcome,
        })
    }

    /// Let the planner pick and apply the computer's factor against the
    /// player's last factor.
    pub fn computer_turn(&mut self) -> Result<ComputerMove, MoveError> {
        if self.state != SessionState::InProgress {
            return Err(MoveError::GameOver);
        }
        let multiplicand = self.current_factor.ok_or(MoveError::GameOver)?;

        let factor = self
            .planner
            .choose_factor(&self.board, multiplicand)
            .ok_or(MoveError::NoLegalFactor)?;

        let placement = self
            .board
            .apply_move(Owner::Computer, factor, multiplicand)?;
        self.registers = placement.registers;
        self.current_factor = Some(factor);

        let outcome = if self.board.check_win(Owner::Computer) {
            self.computer_score += 1;
            self.state = SessionState::ComputerWon;
            TurnOutcome::ComputerWon
        } else if self.board.is_full() {
            self.state = SessionState::Draw;
            TurnOutcome::Draw
        } else {
            TurnOutcome::Continue
        };

        Ok(ComputerMove {
            factor,
            position: placement.position,
            product: placement.product,
            outcome,
        })
    }

    /// Read-only state copy for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: *self.board.cells(),
            player_score: self.player_score,
            computer_score: self.computer_score,
            current_factor: self.current_factor,
            game_over: self.is_over(),
            registers: self.registers,
        }
    }

    /// Write the full session record to `path`. In-memory state is never
    /// mutated, even on failure.
    pub fn save_game(&self, path: &Path) -> Result<(), SaveError> {
        SaveData {
            cells: *self.board.cells(),
            player_score: self.player_score,
            computer_score: self.computer_score,
            current_factor: self.current_factor.unwrap_or(-1),
            game_over: self.is_over(),
        }
        .write_to(path)
    }

    /// Replace the session with the record at `path`. The record is staged
    /// and decoded in full before anything is committed; a failed load
    /// leaves the previous game intact.
    pub fn load_game(&mut self, path: &Path) -> Result<(), SaveError> {
        let data = SaveData::read_from(path)?;

        let board = Board::from_cells(data.cells);
        self.state = if data.game_over {
            // The record stores only a flag; recover who won from the board.
            if board.check_win(Owner::Player) {
                SessionState::PlayerWon
            } else if board.check_win(Owner::Computer) {
                SessionState::ComputerWon
            } else {
                SessionState::Draw
            }
        } else if data.current_factor > 0 {
            SessionState::InProgress
        } else {
            SessionState::NotStarted
        };
        self.board = board;
        self.player_score = data.player_score;
        self.computer_score = data.computer_score;
        self.current_factor = (data.current_factor > 0).then_some(data.current_factor);
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
