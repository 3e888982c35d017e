use crate::{ConnectFourPiece, NUM_COLUMNS, NUM_ROWS, WINNING_COUNT};
use thiserror::Error;

/// The grid is a list of columns; within a column, index 0 is the bottom row.
type Grid = [[Option<ConnectFourPiece>; NUM_ROWS]; NUM_COLUMNS];

/// Errors the board engine surfaces to its callers.
#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    #[error("column {0} is out of bounds (columns are 0-6)")]
    InvalidColumn(usize),
}

/// The Connect Four playing field, plus the bookkeeping needed to judge
/// the most recent move (the anchor position and puck identity the win
/// check radiates from).
#[derive(Clone)]
pub struct PuckBoard {
    columns: Grid,

    /// The row where the most recently placed puck came to rest.
    /// Win checks radiate from here.
    row: usize,

    /// The puck most recently placed.
    last_puck: Option<ConnectFourPiece>,

    /// Run length found by the most recent win check, capped at WINNING_COUNT.
    /// Exactly WINNING_COUNT is the win signal; any smaller value is not.
    puck_count: usize,
}

impl PuckBoard {
    pub fn new() -> Self {
        PuckBoard {
            columns: [[None; NUM_ROWS]; NUM_COLUMNS],
            row: 0,
            last_puck: None,
            puck_count: 0,
        }
    }

    /// Given a (column, row) within range of the board, return the puck
    /// present on that spot, or None if the position is empty.
    /// Note: (0,0) is the bottom-left position.
    pub fn piece_at(&self, column: usize, row: usize) -> Option<ConnectFourPiece> {
        self.columns[column][row]
    }

    /// True when the topmost cell of the column is occupied.
    /// A column outside the board has no capacity, so it reports full.
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= NUM_COLUMNS || self.columns[column][NUM_ROWS - 1].is_some()
    }

    /// True when no column can accept another puck.
    pub fn is_full(&self) -> bool {
        (0..NUM_COLUMNS).all(|column| self.is_column_full(column))
    }

    /// The row where the most recently placed puck landed.
    pub fn last_row(&self) -> usize {
        self.row
    }

    /// The puck most recently placed, or None on a freshly reset board.
    pub fn last_puck(&self) -> Option<ConnectFourPiece> {
        self.last_puck
    }

    /// The run length found by the most recent check_pucks() call.
    pub fn puck_count(&self) -> usize {
        self.puck_count
    }

    /// Drop a puck into the given column. The player identity comes from
    /// the turn counter: odd turns place X, even turns place O.
    ///
    /// Dropping into a full column changes nothing and is not an error;
    /// prompting surfaces are expected to check is_column_full() first
    /// and re-prompt.
    pub fn place_puck(&mut self, column: usize, player_turn: u32) -> Result<(), BoardError> {
        if column >= NUM_COLUMNS {
            return Err(BoardError::InvalidColumn(column));
        }

        // reset the row cursor before walking up the column
        self.row = 0;

        let puck = if player_turn % 2 != 0 {
            ConnectFourPiece::X
        } else {
            ConnectFourPiece::O
        };
        self.last_puck = Some(puck);

        // a full column swallows the move without complaint
        if self.columns[column][NUM_ROWS - 1].is_some() {
            return Ok(());
        }

        // starting from the bottom, walk up to the first open cell
        while self.columns[column][self.row].is_some() {
            self.row += 1;
        }

        self.columns[column][self.row] = Some(puck);

        Ok(())
    }

    /// Look for a four-in-a-row involving the most recent move: first
    /// vertically below it, then horizontally along its row, then along
    /// both diagonal orientations. Later checks are skipped as soon as a
    /// run of WINNING_COUNT is found.
    ///
    /// The horizontal scan counts the first contiguous run it meets and
    /// stops at the first break after that run began, so a four-in-a-row
    /// that is not the first run in its row can be missed. The vertical
    /// scan below the anchor stops at its first break as well.
    /// See DESIGN.md for why this stays as-is.
    ///
    /// The resulting count is returned, and stays readable afterwards
    /// via puck_count().
    pub fn check_pucks(&mut self, target_column: usize) -> Result<usize, BoardError> {
        if target_column >= NUM_COLUMNS {
            return Err(BoardError::InvalidColumn(target_column));
        }

        let puck = match self.last_puck {
            Some(p) => p,
            // no puck has been placed yet, so there is nothing to check
            None => return Ok(0),
        };

        self.puck_count = 0;

        // check vertically for 4 in a row;
        // only possible when at least 3 rows sit below the anchor
        if self.row >= WINNING_COUNT - 1 {
            // the scan below doesn't cover the puck just placed, so
            // start the count at 1 to account for it
            self.puck_count = 1;

            for i in (0..self.row).rev() {
                if self.columns[target_column][i] == Some(puck) && self.puck_count < WINNING_COUNT {
                    self.puck_count += 1;
                } else if self.puck_count == WINNING_COUNT {
                    break;
                } else {
                    // the run below the anchor is broken; no vertical win ends here
                    self.puck_count = 0;
                    break;
                }
            }
        }

        // check horizontally for 4 in a row along the anchor row
        if self.puck_count != WINNING_COUNT {
            for column in 0..NUM_COLUMNS {
                if self.columns[column][self.row] == Some(puck) && self.puck_count < WINNING_COUNT {
                    self.puck_count += 1;
                } else if self.puck_count == WINNING_COUNT {
                    break;
                } else if self.puck_count > 0 {
                    // a run started and broke before reaching 4;
                    // later runs in this row are not considered
                    self.puck_count = 0;
                    break;
                }
            }
        }

        // check diagonally, up and to the right: every four-cell window
        // whose origin sits in the lower-left region of the board
        if self.puck_count != WINNING_COUNT {
            for i in 0..=(NUM_COLUMNS - WINNING_COUNT) {
                for j in 0..=(NUM_ROWS - WINNING_COUNT) {
                    if self.columns[i][j] == Some(puck) && self.puck_count < WINNING_COUNT {
                        if self.columns[i + 1][j + 1] == Some(puck)
                            && self.columns[i + 2][j + 2] == Some(puck)
                            && self.columns[i + 3][j + 3] == Some(puck)
                        {
                            self.puck_count = WINNING_COUNT;
                        }
                    } else if self.puck_count == WINNING_COUNT {
                        break;
                    } else {
                        // this origin column is a bust; try the next one
                        self.puck_count = 0;
                        break;
                    }
                }
            }
        }

        // check diagonally, up and to the left, scanning origins from the
        // right edge of the board
        if self.puck_count != WINNING_COUNT {
            for i in ((WINNING_COUNT - 1)..NUM_COLUMNS).rev() {
                for j in 0..=(NUM_ROWS - WINNING_COUNT) {
                    if self.columns[i][j] == Some(puck) && self.puck_count < WINNING_COUNT {
                        if self.columns[i - 1][j + 1] == Some(puck)
                            && self.columns[i - 2][j + 2] == Some(puck)
                            && self.columns[i - 3][j + 3] == Some(puck)
                        {
                            self.puck_count = WINNING_COUNT;
                        }
                    } else if self.puck_count == WINNING_COUNT {
                        break;
                    } else {
                        self.puck_count = 0;
                        break;
                    }
                }
            }
        }

        Ok(self.puck_count)
    }

    /// Empty every cell and forget the last move, returning the board
    /// to its opening state. Lets one board host game after game
    /// without being recreated.
    pub fn reset(&mut self) {
        for column in self.columns.iter_mut() {
            for cell in column.iter_mut() {
                *cell = None;
            }
        }

        self.row = 0;
        self.last_puck = None;
        self.puck_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// How many pucks are stacked in the given column.
    fn fill_count(board: &PuckBoard, column: usize) -> usize {
        (0..NUM_ROWS)
            .filter(|&row| board.piece_at(column, row).is_some())
            .count()
    }

    #[test]
    fn new_board_is_empty() {
        let board = PuckBoard::new();

        for column in 0..NUM_COLUMNS {
            for row in 0..NUM_ROWS {
                assert_eq!(None, board.piece_at(column, row));
            }
        }

        assert_eq!(0, board.puck_count());
        assert_eq!(0, board.last_row());
        assert_eq!(None, board.last_puck());
    }

    #[test]
    fn place_puck_lands_at_lowest_open_row() {
        let mut board = PuckBoard::new();

        board.place_puck(0, 1).unwrap();
        board.place_puck(0, 2).unwrap();
        board.place_puck(0, 3).unwrap();

        assert_eq!(Some(ConnectFourPiece::X), board.piece_at(0, 0));
        assert_eq!(Some(ConnectFourPiece::O), board.piece_at(0, 1));
        assert_eq!(Some(ConnectFourPiece::X), board.piece_at(0, 2));

        for row in 3..NUM_ROWS {
            assert_eq!(None, board.piece_at(0, row));
        }

        assert_eq!(2, board.last_row());
    }

    #[test]
    fn place_puck_alternates_piece_by_turn_parity() {
        let mut board = PuckBoard::new();

        for turn in 1..=4 {
            board.place_puck(turn as usize, turn).unwrap();
        }

        assert_eq!(Some(ConnectFourPiece::X), board.piece_at(1, 0));
        assert_eq!(Some(ConnectFourPiece::O), board.piece_at(2, 0));
        assert_eq!(Some(ConnectFourPiece::X), board.piece_at(3, 0));
        assert_eq!(Some(ConnectFourPiece::O), board.piece_at(4, 0));
    }

    #[test]
    fn place_puck_into_full_column_changes_nothing() {
        let mut board = PuckBoard::new();

        for turn in 1..=6 {
            board.place_puck(2, turn).unwrap();
        }

        assert!(board.is_column_full(2));
        let before: Vec<_> = (0..NUM_ROWS).map(|row| board.piece_at(2, row)).collect();

        // the column is full, so this must be accepted and ignored
        board.place_puck(2, 7).unwrap();

        let after: Vec<_> = (0..NUM_ROWS).map(|row| board.piece_at(2, row)).collect();
        assert_eq!(before, after);
        assert_eq!(6, fill_count(&board, 2));

        // the rest of the board is untouched as well
        for column in (0..NUM_COLUMNS).filter(|&c| c != 2) {
            assert_eq!(0, fill_count(&board, column));
        }
    }

    #[test]
    fn place_puck_rejects_out_of_range_column() {
        let mut board = PuckBoard::new();

        let result = board.place_puck(NUM_COLUMNS, 1);

        assert_eq!(Err(BoardError::InvalidColumn(NUM_COLUMNS)), result);
    }

    #[test]
    fn check_pucks_rejects_out_of_range_column() {
        let mut board = PuckBoard::new();

        let result = board.check_pucks(99);

        assert_eq!(Err(BoardError::InvalidColumn(99)), result);
    }

    #[test]
    fn check_pucks_on_untouched_board_finds_nothing() {
        let mut board = PuckBoard::new();

        assert_eq!(Ok(0), board.check_pucks(0));
    }

    #[test]
    fn vertical_four_in_a_row_wins() {
        let mut board = PuckBoard::new();

        // X stacks column 0 on four odd turns
        for turn in &[1, 3, 5, 7] {
            board.place_puck(0, *turn).unwrap();
        }

        assert_eq!(3, board.last_row());
        assert_eq!(Ok(WINNING_COUNT), board.check_pucks(0));
    }

    #[test]
    fn vertical_three_is_not_a_win() {
        let mut board = PuckBoard::new();

        for turn in &[1, 3, 5] {
            board.place_puck(0, *turn).unwrap();
        }

        // fewer than 4 rows below the anchor rules a vertical win out
        assert_eq!(Ok(0), board.check_pucks(0));
    }

    #[test]
    fn vertical_broken_run_is_not_a_win() {
        let mut board = PuckBoard::new();

        // column 0 bottom-up: X O X X
        board.place_puck(0, 1).unwrap();
        board.place_puck(0, 2).unwrap();
        board.place_puck(0, 3).unwrap();
        board.place_puck(0, 5).unwrap();

        assert_eq!(3, board.last_row());
        assert_eq!(Ok(0), board.check_pucks(0));
    }

    #[test]
    fn horizontal_four_in_a_row_wins() {
        let mut board = PuckBoard::new();

        // X fills columns 3-6 at the bottom row; O stacks on top of X
        // so the bottom row stays X's
        board.place_puck(3, 1).unwrap();
        board.place_puck(3, 2).unwrap();
        board.place_puck(4, 3).unwrap();
        board.place_puck(4, 4).unwrap();
        board.place_puck(5, 5).unwrap();
        board.place_puck(5, 6).unwrap();
        board.place_puck(6, 7).unwrap();

        assert_eq!(0, board.last_row());
        assert_eq!(Ok(WINNING_COUNT), board.check_pucks(6));
    }

    #[test]
    fn horizontal_scan_stops_at_first_broken_run() {
        let mut board = PuckBoard::new();

        // bottom row: X X _ X X X X -- a real four-in-a-row at columns
        // 3-6, but the scan stops when the run at columns 0-1 breaks.
        // This pins the behavior described in DESIGN.md.
        for column in &[0, 1, 3, 4, 5, 6] {
            board.place_puck(*column, 1).unwrap();
        }

        assert_eq!(Ok(0), board.check_pucks(6));
    }

    #[test]
    fn diagonal_up_right_four_in_a_row_wins() {
        let mut board = PuckBoard::new();

        // staircase for X from (0,0) up to (3,3), propped up by O pucks
        board.place_puck(0, 1).unwrap(); // X at (0,0)

        board.place_puck(1, 2).unwrap(); // O at (1,0)
        board.place_puck(1, 3).unwrap(); // X at (1,1)

        board.place_puck(2, 2).unwrap(); // O at (2,0)
        board.place_puck(2, 4).unwrap(); // O at (2,1)
        board.place_puck(2, 5).unwrap(); // X at (2,2)

        board.place_puck(3, 2).unwrap(); // O at (3,0)
        board.place_puck(3, 4).unwrap(); // O at (3,1)
        board.place_puck(3, 6).unwrap(); // O at (3,2)
        board.place_puck(3, 7).unwrap(); // X at (3,3)

        assert_eq!(3, board.last_row());
        assert_eq!(Ok(WINNING_COUNT), board.check_pucks(3));
    }

    #[test]
    fn diagonal_up_left_four_in_a_row_wins() {
        let mut board = PuckBoard::new();

        // staircase for X from (6,0) up to (3,3)
        board.place_puck(6, 1).unwrap(); // X at (6,0)

        board.place_puck(5, 2).unwrap(); // O at (5,0)
        board.place_puck(5, 3).unwrap(); // X at (5,1)

        board.place_puck(4, 2).unwrap(); // O at (4,0)
        board.place_puck(4, 4).unwrap(); // O at (4,1)
        board.place_puck(4, 5).unwrap(); // X at (4,2)

        board.place_puck(3, 2).unwrap(); // O at (3,0)
        board.place_puck(3, 4).unwrap(); // O at (3,1)
        board.place_puck(3, 6).unwrap(); // O at (3,2)
        board.place_puck(3, 7).unwrap(); // X at (3,3)

        assert_eq!(Ok(WINNING_COUNT), board.check_pucks(3));
    }

    #[test]
    fn sparse_board_has_no_win() {
        let mut board = PuckBoard::new();

        board.place_puck(0, 1).unwrap();
        board.place_puck(3, 2).unwrap();
        board.place_puck(5, 3).unwrap();

        assert_eq!(Ok(0), board.check_pucks(5));
    }

    #[test]
    fn is_column_full_reports_capacity() {
        let mut board = PuckBoard::new();

        assert!(!board.is_column_full(4));

        for turn in 1..=6 {
            board.place_puck(4, turn).unwrap();
        }

        assert!(board.is_column_full(4));

        // a column that doesn't exist has no capacity either
        assert!(board.is_column_full(NUM_COLUMNS));
    }

    #[test]
    fn is_full_requires_every_column_full() {
        let mut board = PuckBoard::new();

        for column in 0..NUM_COLUMNS {
            assert!(!board.is_full());

            for turn in 1..=6 {
                board.place_puck(column, turn).unwrap();
            }
        }

        assert!(board.is_full());
    }

    #[test]
    fn reset_returns_board_to_opening_state() {
        let mut board = PuckBoard::new();

        for turn in &[1, 3, 5, 7] {
            board.place_puck(0, *turn).unwrap();
        }
        board.check_pucks(0).unwrap();
        assert_eq!(WINNING_COUNT, board.puck_count());

        board.reset();

        for column in 0..NUM_COLUMNS {
            for row in 0..NUM_ROWS {
                assert_eq!(None, board.piece_at(column, row));
            }
        }
        assert_eq!(0, board.puck_count());
        assert_eq!(0, board.last_row());
        assert_eq!(None, board.last_puck());
    }
}
