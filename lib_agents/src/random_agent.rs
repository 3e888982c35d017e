use crate::util::{get_rng, random_choice};
use lib_boardgame::{GameAgent, GameState};

/// An agent that plays any legal move, uniformly at random.
/// Since it only ever picks from the legal moves it is handed,
/// it never selects a column without remaining capacity.
pub struct RandomAgent;

impl<TState: GameState> GameAgent<TState> for RandomAgent {
    fn pick_move(&self, _state: &TState, legal_moves: &[TState::Move]) -> TState::Move {
        random_choice(legal_moves, &mut get_rng())
    }
}
