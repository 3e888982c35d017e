use crate::board::PuckBoard;
use crate::{ConnectFourPiece, NUM_COLUMNS, NUM_ROWS, WINNING_COUNT};
use lib_boardgame::{GameMove, GameResult, GameState, PlayerColor};
use lib_printer::{out, out_impl};
use std::fmt;

/// The complete state of a Connect Four game: the board itself plus the
/// turn counter. The counter only ever increases; odd turns belong to
/// X (Black) and even turns to O (White).
#[derive(Clone)]
pub struct ConnectFourState {
    board: PuckBoard,
    player_turn: u32,
}

/// A move in Connect Four: dropping a puck into one column.
#[derive(Copy, Clone, PartialEq)]
pub struct ConnectFourAction(usize);

impl ConnectFourAction {
    pub fn new(column: usize) -> Self {
        ConnectFourAction(column)
    }

    /// The 0-based column this action drops into.
    pub fn column(self) -> usize {
        self.0
    }
}

impl GameMove for ConnectFourAction {}

impl fmt::Debug for ConnectFourAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // columns are shown 1-based, matching the console prompts
        write!(f, "(column {})", self.0 + 1)
    }
}

impl fmt::Display for ConnectFourAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::str::FromStr for ConnectFourAction {
    type Err = usize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let column = match s.trim().parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                out!("Didn't recognize input as a column number: {}", s.trim());
                return Err(9);
            }
        };

        if column < 1 || column > NUM_COLUMNS {
            out!("Input must be an integer 1-{}. Please reenter.", NUM_COLUMNS);
            return Err(9);
        }

        Ok(ConnectFourAction::new(column - 1))
    }
}

impl ConnectFourState {
    pub fn new() -> Self {
        ConnectFourState {
            board: PuckBoard::new(),
            player_turn: 1,
        }
    }

    /// A read-only view of the board, for rendering and inspection.
    /// Collaborators never mutate the board directly.
    pub fn board(&self) -> &PuckBoard {
        &self.board
    }

    /// The current value of the turn counter.
    pub fn player_turn(&self) -> u32 {
        self.player_turn
    }

    /// The player who completed a four-in-a-row, or None if nobody has.
    pub fn get_winner(&self) -> Option<PlayerColor> {
        if self.board.puck_count() == WINNING_COUNT {
            self.board.last_puck().map(ConnectFourPiece::player_color)
        } else {
            None
        }
    }

    /// Since the human-friendly output is always the same size,
    /// might as well pre-compute it so we can reserve the space ahead of time.
    /// (A test exists to confirm this is accurate.)
    const fn friendly_print_size() -> usize {
        (NUM_COLUMNS * 4 + 2) * NUM_ROWS
    }
}

impl GameState for ConnectFourState {
    type Move = ConnectFourAction;

    /// Returns a human-friendly string for representing the state.
    fn human_friendly(&self) -> String {
        let mut result = String::with_capacity(Self::friendly_print_size());

        for row in (0..NUM_ROWS).rev() {
            result.push('|');

            for column in 0..NUM_COLUMNS {
                let symbol = match self.board.piece_at(column, row) {
                    None => ' ',
                    Some(ConnectFourPiece::X) => 'X',
                    Some(ConnectFourPiece::O) => 'O',
                };

                result.push(' ');
                result.push(symbol);
                result.push_str(" |");
            }

            result.push('\n');
        }

        result
    }

    /// Gives the implementation a chance to initialize the starting state of a game
    /// before gameplay begins.  Between games, this is the full-board reset:
    /// every cell empty again and the turn counter back to 1.
    fn initialize_board(&mut self) {
        self.board.reset();
        self.player_turn = 1;
    }

    /// Returns a fresh, ready-to-play game state for this game.
    fn initial_state() -> Self {
        let mut uninitialized = Self::new();
        uninitialized.initialize_board();

        uninitialized
    }

    /// Returns the possible moves the given player can make for the current state.
    /// In Connect Four, any column that isn't full is a legal target for either player.
    fn legal_moves(&self, _player: PlayerColor) -> Vec<Self::Move> {
        let mut actions = Vec::with_capacity(NUM_COLUMNS);

        for column in 0..NUM_COLUMNS {
            if !self.board.is_column_full(column) {
                actions.push(ConnectFourAction::new(column));
            }
        }

        actions
    }

    /// Apply the given move (or 'action') to this state, mutating this state
    /// and advancing it to the resulting state.
    fn apply_move(&mut self, action: ConnectFourAction) {
        let column = action.column();

        if let Err(err) = self.board.place_puck(column, self.player_turn) {
            panic!("The provided action is illegal: {}", err);
        }

        self.board
            .check_pucks(column)
            .expect("place_puck already validated the column");

        self.player_turn += 1;
    }

    /// Returns the current player whose turn it currently is.
    fn current_player_turn(&self) -> PlayerColor {
        if self.player_turn % 2 != 0 {
            PlayerColor::Black
        } else {
            PlayerColor::White
        }
    }

    /// True if the game is over (i.e. a four-in-a-row exists, or the board is full).
    fn is_game_over(&self) -> bool {
        self.board.puck_count() == WINNING_COUNT || self.board.is_full()
    }

    /// The GameResult, or None if the game is not yet over.
    /// A win on the final puck is still a win; only a full board
    /// with no four-in-a-row is a tie.
    fn game_result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }

        match self.get_winner() {
            Some(PlayerColor::Black) => Some(GameResult::BlackWins),
            Some(PlayerColor::White) => Some(GameResult::WhiteWins),
            None => Some(GameResult::Tie),
        }
    }
}
