use crate::connect_four_gamestate::ConnectFourState;
use lib_boardgame::{Game, GameAgent, GameResult, GameState};
use std::borrow::Borrow;

/// A game of Connect Four between two agents: White plays O,
/// Black plays X, and Black moves first.
pub struct ConnectFour {
    white_agent: Box<dyn GameAgent<ConnectFourState>>,
    black_agent: Box<dyn GameAgent<ConnectFourState>>,
    game_state: ConnectFourState,
}

impl ConnectFour {
    pub fn new(
        white_agent: Box<dyn GameAgent<ConnectFourState>>,
        black_agent: Box<dyn GameAgent<ConnectFourState>>,
    ) -> Self {
        Self {
            white_agent,
            black_agent,
            game_state: ConnectFourState::initial_state(),
        }
    }
}

impl Game for ConnectFour {
    type State = ConnectFourState;

    fn white_agent(&self) -> &dyn GameAgent<ConnectFourState> {
        self.white_agent.borrow()
    }

    fn black_agent(&self) -> &dyn GameAgent<ConnectFourState> {
        self.black_agent.borrow()
    }

    /// The game's current state.
    fn game_state(&self) -> &Self::State {
        &self.game_state
    }

    /// The game's current state.
    fn game_state_mut(&mut self) -> &mut Self::State {
        &mut self.game_state
    }

    /// True if the the game has ended, either due to a forced win,
    /// draw, or forfeit.
    fn is_game_over(&self) -> bool {
        self.game_state.is_game_over()
    }

    /// The GameResult, or None if the game is not yet over.
    fn game_result(&self) -> Option<GameResult> {
        self.game_state.game_result()
    }
}
