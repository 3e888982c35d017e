pub mod board;
pub mod connect_four;
pub mod connect_four_gamestate;

use lib_boardgame::PlayerColor;

/// The number of columns on the board.
pub const NUM_COLUMNS: usize = 7;

/// The number of rows in each column.
pub const NUM_ROWS: usize = 6;

/// The run length that wins the game.
pub const WINNING_COUNT: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConnectFourPiece {
    X,
    O,
}

impl ConnectFourPiece {
    pub fn player_color(self) -> PlayerColor {
        match self {
            ConnectFourPiece::X => PlayerColor::Black,
            ConnectFourPiece::O => PlayerColor::White,
        }
    }
}

impl From<PlayerColor> for ConnectFourPiece {
    fn from(color: PlayerColor) -> ConnectFourPiece {
        match color {
            PlayerColor::Black => ConnectFourPiece::X,
            PlayerColor::White => ConnectFourPiece::O,
        }
    }
}
