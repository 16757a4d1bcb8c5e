use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::cpu;
use crate::game::{Board, Cell, Owner, HEIGHT, WIDTH};

/// Chooses the computer's factor with a four-tier cascade:
///
/// 1. Win — a tentative own placement completes four in a line.
/// 2. Block — the same cell, taken by the player instead, would complete
///    four for the player.
/// 3. Build — an own placement brings the cell's row or column to three or
///    more computer marks. Rows and columns only; diagonals are not
///    considered in this tier.
/// 4. Score — rate every remaining candidate by board position and pick the
///    best.
///
/// Within a tier, factors are scanned 1–9 ascending and the first qualifying
/// factor wins. Randomness (opening draw, scoring jitter) comes from an
/// injected seedable RNG so tests can pin the outcome.
pub struct Planner {
    rng: StdRng,
}

impl Planner {
    pub fn new() -> Self {
        Planner {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Planner {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Random opening factor for a fresh game.
    pub fn opening_factor(&mut self) -> i32 {
        self.rng.random_range(1..=9)
    }

    /// Choose a factor against the player's last factor, or `None` when no
    /// factor 1–9 reaches a free cell.
    pub fn choose_factor(&mut self, board: &Board, player_factor: i32) -> Option<i32> {
        if let Some(factor) = Self::winning_factor(board, player_factor) {
            return Some(factor);
        }
        if let Some(factor) = Self::blocking_factor(board, player_factor) {
            return Some(factor);
        }
        if let Some(factor) = Self::building_factor(board, player_factor) {
            return Some(factor);
        }
        self.best_scoring_factor(board, player_factor)
    }

    /// Factors 1–9 whose product with `player_factor` lands on a free cell,
    /// with that cell's position.
    fn candidates(board: &Board, player_factor: i32) -> Vec<(i32, usize)> {
        (1..=9)
            .filter_map(|factor| {
                let (product, _) = cpu::multiply(factor, player_factor);
                Board::position_of(product)
                    .filter(|&pos| board.get(pos) == Cell::Empty)
                    .map(|pos| (factor, pos))
            })
            .collect()
    }

    /// Tier 1: immediate win.
    fn winning_factor(board: &Board, player_factor: i32) -> Option<i32> {
        Self::candidates(board, player_factor)
            .into_iter()
            .find(|&(_, pos)| {
                board
                    .with_cell(pos, Cell::Computer)
                    .check_win(Owner::Computer)
            })
            .map(|(factor, _)| factor)
    }

    /// Tier 2: pre-empt the cell the player could win with.
    fn blocking_factor(board: &Board, player_factor: i32) -> Option<i32> {
        Self::candidates(board, player_factor)
            .into_iter()
            .find(|&(_, pos)| board.with_cell(pos, Cell::Player).check_win(Owner::Player))
            .map(|(factor, _)| factor)
    }

    /// Tier 3: build toward three in the cell's row or column.
    fn building_factor(board: &Board, player_factor: i32) -> Option<i32> {
        Self::candidates(board, player_factor)
            .into_iter()
            .find(|&(_, pos)| {
                let probe = board.with_cell(pos, Cell::Computer);
                probe.count_in_row(pos / WIDTH, Cell::Computer) >= 3
                    || probe.count_in_col(pos % WIDTH, Cell::Computer) >= 3
            })
            .map(|(factor, _)| factor)
    }

    /// Tier 4: highest positional score; first seen wins ties.
    fn best_scoring_factor(&mut self, board: &Board, player_factor: i32) -> Option<i32> {
        let mut best: Option<(i32, i32)> = None;
        for (factor, pos) in Self::candidates(board, player_factor) {
            let value = self.score_position(board, pos);
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((factor, value));
            }
        }
        best.map(|(factor, _)| factor)
    }

    /// Positional value of a free cell, measured over occupancy before
    /// placement: closeness to the board center, plus per-owner signed row
    /// and column counts, plus a diagonal bonus and a small random jitter.
    fn score_position(&mut self, board: &Board, pos: usize) -> i32 {
        let row = pos / WIDTH;
        let col = pos % WIDTH;

        let center_row = HEIGHT / 2;
        let center_col = WIDTH / 2;
        let mut value = 4 - (row.abs_diff(center_row) + col.abs_diff(center_col)) as i32;

        for owner in [Owner::Player, Owner::Computer] {
            // Prefer own lines, avoid the player's
            let sign = if owner == Owner::Computer { 1 } else { -1 };
            let cell = owner.to_cell();
            value += sign * board.count_in_row(row, cell) as i32;
            value += sign * board.count_in_col(col, cell) as i32;
            if row == col || row + col == WIDTH - 1 {
                value += sign * 2;
            }
        }

        value + self.rng.random_range(0..3)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}
