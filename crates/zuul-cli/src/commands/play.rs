use std::io::{self, BufRead, Write};

use colored::Colorize;

use zuul_engine::{FAREWELL, Game, GameConfig, Outcome, Parser};

pub fn run(config: &GameConfig) -> Result<(), String> {
    let mut game =
        Game::from_config(config).map_err(|e| format!("failed to start game: {e}"))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut game, stdin.lock(), &mut stdout.lock(), &config.prompt)
}

/// Drive `game` from `input` until the player quits or the input runs out.
fn play<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    out: &mut W,
    prompt: &str,
) -> Result<(), String> {
    let welcome = game.welcome().map_err(|e| e.to_string())?;
    writeln!(out, "{welcome}").map_err(|e| e.to_string())?;

    let mut parser = Parser::new(input);

    while game.is_running() {
        write!(out, "{prompt}").map_err(|e| e.to_string())?;
        out.flush().map_err(|e| e.to_string())?;

        let Some(command) = parser.get_command().map_err(|e| e.to_string())? else {
            // EOF
            game.terminate();
            writeln!(out).map_err(|e| e.to_string())?;
            break;
        };

        let written = match game.execute(&command) {
            Ok(Outcome::Continue(text)) => writeln!(out, "{text}"),
            Ok(Outcome::Quit) => Ok(()),
            Err(e) if e.is_input_error() => writeln!(out, "{}", e.to_string().yellow()),
            Err(e) => return Err(e.to_string()),
        };
        written.map_err(|e| e.to_string())?;
    }

    writeln!(out, "{FAREWELL}").map_err(|e| e.to_string())?;
    Ok(())
}
