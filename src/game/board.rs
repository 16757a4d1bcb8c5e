use crate::cpu::{self, Registers};
use crate::error::MoveError;

use super::player::Owner;

pub const WIDTH: usize = 6;
pub const HEIGHT: usize = 6;
pub const SIZE: usize = WIDTH * HEIGHT;

/// The 36 distinct products reachable from factors 1–9, in board order.
/// Position `p` sits at row `p / WIDTH`, column `p % WIDTH`. Never mutated,
/// so value and position map one-to-one.
pub const CATALOG: [i32; SIZE] = [
    1, 2, 3, 4, 5, 6, //
    7, 8, 9, 10, 12, 14, //
    15, 16, 18, 20, 21, 24, //
    25, 27, 28, 30, 32, 35, //
    36, 40, 42, 45, 48, 49, //
    54, 56, 63, 64, 72, 81,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player,
    Computer,
}

impl Cell {
    /// Save-file owner code (0 = empty, 1 = player, 2 = computer).
    pub fn to_code(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Player => 1,
            Cell::Computer => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Player),
            2 => Some(Cell::Computer),
            _ => None,
        }
    }
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: usize,
    pub product: i32,
    pub registers: Registers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; SIZE],
        }
    }

    /// Rebuild a board from raw cells (used when committing a loaded save).
    pub fn from_cells(cells: [Cell; SIZE]) -> Self {
        Board { cells }
    }

    /// Get the cell at a position (0–35, row-major)
    pub fn get(&self, position: usize) -> Cell {
        self.cells[position]
    }

    pub fn cells(&self) -> &[Cell; SIZE] {
        &self.cells
    }

    /// Catalog value printed on a position
    pub fn value_at(position: usize) -> i32 {
        CATALOG[position]
    }

    /// Position holding `value`, if it is on the board. Catalog values are
    /// distinct, so at most one position matches.
    pub fn position_of(value: i32) -> Option<usize> {
        CATALOG.iter().position(|&v| v == value)
    }

    /// Copy of the board with one cell overwritten. Only for tentative
    /// placements during AI probing; real moves go through `apply_move`.
    pub(crate) fn with_cell(mut self, position: usize, cell: Cell) -> Board {
        self.cells[position] = cell;
        self
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Validate and apply a move: multiply the mover's factor by the
    /// opponent's previous factor and claim the cell holding the product.
    ///
    /// Fails with `InvalidProduct` when the factor is out of the 1–9 domain
    /// or the product is not a catalog value, and with `CellTaken` when the
    /// target cell is occupied. A claimed cell is never reassigned.
    pub fn apply_move(
        &mut self,
        owner: Owner,
        factor: i32,
        multiplicand: i32,
    ) -> Result<Placement, MoveError> {
        if !(1..=9).contains(&factor) {
            return Err(MoveError::InvalidProduct(
                factor.saturating_mul(multiplicand),
            ));
        }

        let (product, registers) = cpu::multiply(factor, multiplicand);
        let position = Self::position_of(product).ok_or(MoveError::InvalidProduct(product))?;

        if self.cells[position] != Cell::Empty {
            return Err(MoveError::CellTaken(position));
        }

        self.cells[position] = owner.to_cell();
        Ok(Placement {
            position,
            product,
            registers,
        })
    }

    /// Check for four in a line owned by `owner`.
    ///
    /// Scans every length-4 window fully inside the grid: 18 horizontal,
    /// 18 vertical, 9 falling-diagonal, and 9 rising-diagonal windows.
    /// Horizontal windows never wrap across row boundaries.
    pub fn check_win(&self, owner: Owner) -> bool {
        let target = owner.to_cell();

        // Rows
        for row in 0..HEIGHT {
            for col in 0..=WIDTH - 4 {
                let idx = row * WIDTH + col;
                if (0..4).all(|k| self.cells[idx + k] == target) {
                    return true;
                }
            }
        }
        // Columns
        for col in 0..WIDTH {
            for row in 0..=HEIGHT - 4 {
                let idx = row * WIDTH + col;
                if (0..4).all(|k| self.cells[idx + k * WIDTH] == target) {
                    return true;
                }
            }
        }
        // Diagonals (top-left to bottom-right)
        for row in 0..=HEIGHT - 4 {
            for col in 0..=WIDTH - 4 {
                let idx = row * WIDTH + col;
                if (0..4).all(|k| self.cells[idx + k * (WIDTH + 1)] == target) {
                    return true;
                }
            }
        }
        // Diagonals (top-right to bottom-left)
        for row in 0..=HEIGHT - 4 {
            for col in 3..WIDTH {
                let idx = row * WIDTH + col;
                if (0..4).all(|k| self.cells[idx + k * (WIDTH - 1)] == target) {
                    return true;
                }
            }
        }
        false
    }

    /// Number of `cell` marks in a row
    pub fn count_in_row(&self, row: usize, cell: Cell) -> usize {
        (0..WIDTH)
            .filter(|&col| self.cells[row * WIDTH + col] == cell)
            .count()
    }

    /// Number of `cell` marks in a column
    pub fn count_in_col(&self, col: usize, cell: Cell) -> usize {
        (0..HEIGHT)
            .filter(|&row| self.cells[row * WIDTH + col] == cell)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_36_distinct_values() {
        let mut seen = std::collections::HashSet::new();
        for &v in CATALOG.iter() {
            assert!(v > 0);
            assert!(seen.insert(v), "duplicate catalog value {}", v);
        }
        assert_eq!(seen.len(), SIZE);
    }

    #[test]
    fn test_value_position_bijection() {
        for (pos, &value) in CATALOG.iter().enumerate() {
            assert_eq!(Board::position_of(value), Some(pos));
            assert_eq!(Board::value_at(pos), value);
        }
        assert_eq!(Board::position_of(11), None);
        assert_eq!(Board::position_of(0), None);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for pos in 0..SIZE {
            assert_eq!(board.get(pos), Cell::Empty);
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_apply_move_marks_catalog_position() {
        let mut board = Board::new();
        let placement = board.apply_move(Owner::Player, 6, 5).unwrap();
        assert_eq!(placement.product, 30);
        assert_eq!(placement.position, 21); // catalog position of 30
        assert_eq!(board.get(21), Cell::Player);

        // Exactly one cell was marked
        let marked = (0..SIZE).filter(|&p| board.get(p) != Cell::Empty).count();
        assert_eq!(marked, 1);
    }

    #[test]
    fn test_apply_move_rejects_missing_product() {
        let mut board = Board::new();
        // 11 is not a catalog value
        let err = board.apply_move(Owner::Player, 1, 11).unwrap_err();
        assert_eq!(err, MoveError::InvalidProduct(11));
    }

    #[test]
    fn test_apply_move_rejects_out_of_domain_factor() {
        let mut board = Board::new();
        // 10 x 1 = 10 is on the board, but 10 is not a legal factor
        let err = board.apply_move(Owner::Player, 10, 1).unwrap_err();
        assert_eq!(err, MoveError::InvalidProduct(10));
        assert_eq!(board.get(9), Cell::Empty);

        let err = board.apply_move(Owner::Player, 0, 5).unwrap_err();
        assert_eq!(err, MoveError::InvalidProduct(0));
    }

    #[test]
    fn test_apply_move_rejects_taken_cell() {
        let mut board = Board::new();
        board.apply_move(Owner::Player, 6, 5).unwrap();
        let err = board.apply_move(Owner::Computer, 5, 6).unwrap_err();
        assert_eq!(err, MoveError::CellTaken(21));
        // Original mark untouched
        assert_eq!(board.get(21), Cell::Player);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        // Row 1, columns 0-3 (positions 6..=9)
        for pos in 6..=9 {
            board = board.with_cell(pos, Cell::Computer);
        }
        assert!(board.check_win(Owner::Computer));
        assert!(!board.check_win(Owner::Player));
    }

    #[test]
    fn test_horizontal_window_does_not_wrap_rows() {
        let mut board = Board::new();
        // Positions 3,4,5 end row 0 and 6 starts row 1; contiguous in the
        // flat array but not a line.
        for pos in 3..=6 {
            board = board.with_cell(pos, Cell::Player);
        }
        assert!(!board.check_win(Owner::Player));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        // Column 5, rows 0-3
        for row in 0..4 {
            board = board.with_cell(row * WIDTH + 5, Cell::Player);
        }
        assert!(board.check_win(Owner::Player));
    }

    #[test]
    fn test_falling_diagonal_win() {
        let mut board = Board::new();
        for &pos in &[0, 7, 14, 21] {
            board = board.with_cell(pos, Cell::Computer);
        }
        assert!(board.check_win(Owner::Computer));
    }

    #[test]
    fn test_rising_diagonal_win() {
        let mut board = Board::new();
        // (0,5) (1,4) (2,3) (3,2)
        for &pos in &[5, 10, 15, 20] {
            board = board.with_cell(pos, Cell::Player);
        }
        assert!(board.check_win(Owner::Player));
    }

    #[test]
    fn test_three_in_a_line_is_not_a_win() {
        let mut board = Board::new();
        for pos in 0..3 {
            board = board.with_cell(pos, Cell::Player);
        }
        assert!(!board.check_win(Owner::Player));
    }

    #[test]
    fn test_every_window_wins_in_isolation() {
        let mut windows: Vec<[usize; 4]> = Vec::new();
        for row in 0..HEIGHT {
            for col in 0..=WIDTH - 4 {
                let i = row * WIDTH + col;
                windows.push([i, i + 1, i + 2, i + 3]);
            }
        }
        for col in 0..WIDTH {
            for row in 0..=HEIGHT - 4 {
                let i = row * WIDTH + col;
                windows.push([i, i + WIDTH, i + 2 * WIDTH, i + 3 * WIDTH]);
            }
        }
        for row in 0..=HEIGHT - 4 {
            for col in 0..=WIDTH - 4 {
                let i = row * WIDTH + col;
                windows.push([i, i + 7, i + 14, i + 21]);
            }
        }
        for row in 0..=HEIGHT - 4 {
            for col in 3..WIDTH {
                let i = row * WIDTH + col;
                windows.push([i, i + 5, i + 10, i + 15]);
            }
        }
        assert_eq!(windows.len(), 54);

        for window in windows {
            let mut board = Board::new();
            for &pos in &window {
                board = board.with_cell(pos, Cell::Computer);
            }
            assert!(board.check_win(Owner::Computer), "window {:?}", window);
            assert!(!board.check_win(Owner::Player));
        }
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for pos in 0..SIZE - 1 {
            board = board.with_cell(pos, Cell::Player);
        }
        assert!(!board.is_full());
        board = board.with_cell(SIZE - 1, Cell::Computer);
        assert!(board.is_full());
    }

    #[test]
    fn test_row_and_column_counts() {
        let mut board = Board::new();
        board = board.with_cell(6, Cell::Computer); // (1,0)
        board = board.with_cell(8, Cell::Computer); // (1,2)
        board = board.with_cell(12, Cell::Player); // (2,0)
        assert_eq!(board.count_in_row(1, Cell::Computer), 2);
        assert_eq!(board.count_in_col(0, Cell::Computer), 1);
        assert_eq!(board.count_in_col(0, Cell::Player), 1);
        assert_eq!(board.count_in_row(0, Cell::Computer), 0);
    }

    #[test]
    fn test_owner_code_roundtrip() {
        for cell in [Cell::Empty, Cell::Player, Cell::Computer] {
            assert_eq!(Cell::from_code(cell.to_code()), Some(cell));
        }
        assert_eq!(Cell::from_code(3), None);
        assert_eq!(Cell::from_code(-1), None);
    }
}
