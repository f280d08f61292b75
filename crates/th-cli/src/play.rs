//! The interactive game loop.

use std::io::{BufRead, Write};

use th_core::{Ending, GameConfig, Mode, Phase, Session};

use crate::render;

/// Play one game, reading choices from `input` until the game ends or input
/// runs out.
pub fn run<R: BufRead, W: Write>(mut input: R, mut out: W, seed: u64) -> Result<(), String> {
    play(&mut input, &mut out, seed).map_err(|e| e.to_string())
}

fn play<R: BufRead, W: Write>(input: &mut R, out: &mut W, seed: u64) -> std::io::Result<()> {
    writeln!(out, "Welcome to TREASURE HUNTER!")?;
    writeln!(out, "Going hunting for the big treasure, eh?")?;

    render::prompt(out, "What's your name, Hunter? ")?;
    let Some(name) = read_line(input)? else {
        writeln!(out)?;
        return Ok(());
    };

    render::prompt(out, "Hard mode? (y/n, test or samurai): ")?;
    let mode = Mode::parse(&read_line(input)?.unwrap_or_default());

    let config = GameConfig::for_mode(mode).with_seed(seed);
    let mut session = Session::new(&name, config);

    while !session.is_over() {
        writeln!(out)?;
        render::narration(out, &session.report())?;

        match session.phase() {
            Phase::Shopping(_) => {
                render::catalog(out, session.shop())?;
                render::prompt(out, "Item: ")?;
            }
            _ => {
                render::menu(out)?;
                writeln!(out)?;
                render::prompt(out, "What's your next move? ")?;
            }
        }

        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            break;
        };

        match session.process(&line) {
            Ok(lines) => render::narration(out, &lines)?,
            Err(e) => render::error(out, &e.to_string())?,
        }
    }

    if session.ending() == Some(Ending::Broke) {
        writeln!(out)?;
        render::narration(out, &session.report())?;
    }
    writeln!(out, "Game Over!")?;
    out.flush()
}

/// Read one line without its line ending. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_script(script: &str, seed: u64) -> String {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out, seed).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quit_right_away() {
        let out = play_script("Ann\nn\nx\n", 1);
        assert!(out.contains("Welcome to TREASURE HUNTER!"));
        assert!(out.contains("Welcome to town, Ann."));
        assert!(out.contains("Fare thee well, Ann!"));
        assert!(out.trim_end().ends_with("Game Over!"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let out = play_script("Ann\nn\nq\nx\n", 1);
        assert!(out.contains("'q' is not a valid option"));
        assert_eq!(out.matches("What's your next move?").count(), 2);
    }

    #[test]
    fn eof_ends_the_game() {
        let out = play_script("Ann\nn\nl\n", 1);
        assert!(out.contains("Game Over!"));
    }

    #[test]
    fn eof_before_name() {
        let out = play_script("", 1);
        assert!(out.contains("What's your name, Hunter?"));
        assert!(!out.contains("Game Over!"));
    }

    #[test]
    fn shop_shows_catalog() {
        let out = play_script("Ann\nn\nb\nwater\nx\n", 1);
        assert!(out.contains("Item: "));
        assert!(out.contains("Ye' got yerself a Water"));
        assert!(out.contains("You left the shop."));
        assert!(out.contains("Ann has 8 gold"));
    }

    #[test]
    fn test_mode_search_twice() {
        let out = play_script("Ann\ntest\nh\nh\nx\n", 3);
        assert!(out.contains("Ann has 107 gold"));
        assert!(out.contains("You have already searched this town."));
    }

    #[test]
    fn windows_line_endings() {
        let out = play_script("Ann\r\nn\r\nx\r\n", 1);
        assert!(out.contains("Fare thee well, Ann!"));
    }
}
