use lib_agents::{HumanAgent, RandomAgent};
use lib_boardgame::{Game, GameResult, PlayerColor};
use lib_connect_four::connect_four::ConnectFour;
use lib_connect_four::connect_four_gamestate::ConnectFourState;
use lib_printer::{out, out_impl};
use std::io::stdin;

#[derive(Copy, Clone, Debug, PartialEq)]
enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

/// Parse a game-mode selection: 'P' plays another person,
/// 'C' plays the computer. Case doesn't matter.
fn parse_game_mode(input: &str) -> Option<GameMode> {
    if input.trim().eq_ignore_ascii_case("p") {
        Some(GameMode::PlayerVsPlayer)
    } else if input.trim().eq_ignore_ascii_case("c") {
        Some(GameMode::PlayerVsComputer)
    } else {
        None
    }
}

fn select_game_mode() -> GameMode {
    out!("Begin game. Enter 'P' if you want to play against another player; enter 'C' to play against computer.");

    loop {
        let mut input = String::new();

        stdin()
            .read_line(&mut input)
            .expect("Couldn't capture user input.");

        match parse_game_mode(&input) {
            Some(mode) => return mode,
            None => out!("Invalid input. Enter 'P' if you want to play against another player; enter 'C' to play against computer."),
        }
    }
}

/// The endgame announcement. When a person plays the computer,
/// the computer holds the White (O) seat.
fn result_announcement(result: GameResult, mode: GameMode) -> &'static str {
    match result {
        GameResult::Tie => "Draw/tie game. Nobody wins.",
        GameResult::BlackWins => "Player X won the game.",
        GameResult::WhiteWins => match mode {
            GameMode::PlayerVsPlayer => "Player O won the game.",
            GameMode::PlayerVsComputer => "Computer won the game.",
        },
    }
}

/// Select a game mode on stdin, play a full game, announce the result.
pub fn run_from_stdin() {
    let mode = select_game_mode();

    let mut game = match mode {
        GameMode::PlayerVsPlayer => {
            let black = HumanAgent::<ConnectFourState>::new(PlayerColor::Black);
            let white = HumanAgent::<ConnectFourState>::new(PlayerColor::White);

            ConnectFour::new(Box::new(white), Box::new(black))
        }
        GameMode::PlayerVsComputer => {
            // the person plays X and moves first, as always
            let black = HumanAgent::<ConnectFourState>::new(PlayerColor::Black);
            let white = RandomAgent;

            ConnectFour::new(Box::new(white), Box::new(black))
        }
    };

    let result = game.play_to_end();

    out!("{}", result_announcement(result, mode));
}
