use lib_boardgame::{GameAgent, GameState, PlayerColor};
use lib_printer::{out, out_impl, prompt, prompt_impl};
use std::marker::PhantomData;
use std::str::FromStr;

/// An agent that picks moves by prompting the person at the keyboard.
/// Bad input never escapes this agent; it re-prompts in place until
/// it has a move the game will accept.
pub struct HumanAgent<TState: GameState>
where
    TState::Move: FromStr,
{
    player_color: PlayerColor,
    _phantom: PhantomData<TState>,
}

impl<TState: GameState> HumanAgent<TState>
where
    TState::Move: FromStr,
    <TState::Move as FromStr>::Err: std::fmt::Debug,
{
    pub fn new(player_color: PlayerColor) -> Self {
        Self {
            player_color,
            _phantom: Default::default(),
        }
    }

    fn player_name(&self) -> &'static str {
        match self.player_color {
            PlayerColor::Black => "PlayerX",
            PlayerColor::White => "PlayerO",
        }
    }

    fn prompt_input(&self) -> TState::Move {
        use std::io::stdin;

        prompt!("{}-your turn. Choose a column from 1-7: ", self.player_name());

        let mut input = String::new();

        stdin()
            .read_line(&mut input)
            .expect("Couldn't capture user input.");

        let result = TState::Move::from_str(input.trim());

        match result {
            Ok(r) => r,
            _ => {
                out!("Invalid input. Try again.");
                self.prompt_input()
            }
        }
    }
}

impl<TState: GameState> GameAgent<TState> for HumanAgent<TState>
where
    TState::Move: FromStr,
    <TState::Move as FromStr>::Err: std::fmt::Debug,
{
    fn pick_move(&self, _state: &TState, legal_moves: &[TState::Move]) -> TState::Move {
        loop {
            let user_input = self.prompt_input();

            if legal_moves.iter().find(|&&m| m == user_input).is_none() {
                out!("This column is full. Please choose another column 1-7.");
            } else {
                return user_input;
            }
        }
    }
}
