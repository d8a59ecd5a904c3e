//! Simple interactive CLI mode
//!
//! Text-based play without the TUI. Moves are typed as `move <from> <to>`
//! with 1-based slots and fed to the list surface as a drag gesture.

use crate::output::{copy_to_clipboard, print_board, print_guess_result, print_share};
use crate::session::{
    DragUpdate, ListSurface, PuzzleSession, ReorderSurface, SessionError, Status,
};
use crate::store::KeyValueStore;
use anyhow::Result;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    /// Move the word in slot `from` to slot `to` (0-based)
    Move { from: usize, to: usize },
    Guess,
    Hint,
    Share,
    Help,
    Quit,
}

/// Parse a line of input
///
/// # Errors
///
/// Returns a message describing what was wrong with the input.
pub fn parse_command(input: &str) -> Result<LineCommand, String> {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Type 'help' for commands".to_string());
    };

    match head.to_lowercase().as_str() {
        "move" | "m" => {
            let mut slot = || -> Result<usize, String> {
                parts
                    .next()
                    .and_then(|s| s.parse::<usize>().ok())
                    .filter(|&n| n > 0)
                    .map(|n| n - 1)
                    .ok_or_else(|| "Usage: move <from> <to> (slots start at 1)".to_string())
            };
            let from = slot()?;
            let to = slot()?;
            Ok(LineCommand::Move { from, to })
        }
        "guess" | "g" => Ok(LineCommand::Guess),
        "hint" | "h" => Ok(LineCommand::Hint),
        "share" | "s" => Ok(LineCommand::Share),
        "help" | "?" => Ok(LineCommand::Help),
        "quit" | "q" | "exit" => Ok(LineCommand::Quit),
        other => Err(format!("Unknown command '{other}'. Type 'help' for commands")),
    }
}

/// Drag the word in slot `from` to slot `to` and hand the settled order to the session
///
/// Returns whether the order changed.
///
/// # Errors
///
/// Returns `SessionError` if the session rejects the order or cannot persist it.
pub fn drag_slot<S: KeyValueStore>(
    session: &mut PuzzleSession<S>,
    surface: &mut ListSurface,
    from: usize,
    to: usize,
) -> Result<bool, SessionError> {
    let Some(&item) = surface.order().as_slice().get(from) else {
        return Ok(false);
    };
    let displacement = to as f32 - from as f32;

    surface.drag(DragUpdate::moving(item, displacement));
    match surface.drag(DragUpdate::release(item, displacement)) {
        Some(settled) => Ok(session.apply_reorder(settled.as_slice())?.changed),
        None => Ok(false),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or the session cannot persist a move.
pub fn run_simple<S: KeyValueStore>(mut session: PuzzleSession<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                 Draggin - Line Mode               ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!("Drag individual words into their correct order.");
    println!("If you can't figure out the theme, use a hint!\n");
    print_help();

    let mut surface = ListSurface::new(session.definition().len(), Some(session.order()));

    if session.status() == Status::Solved {
        print_share(&session.share_text(), true, None);
        return Ok(());
    }

    loop {
        print_board(&session);

        let input = get_user_input("Command")?;
        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            LineCommand::Move { from, to } => {
                if !drag_slot(&mut session, &mut surface, from, to)? {
                    println!("Nothing moved.");
                }
            }
            LineCommand::Guess => {
                let outcome = session.submit_guess()?;
                print_guess_result(&session, outcome.correct);
                if outcome.correct {
                    let text = session.share_text();
                    let notice = copy_to_clipboard(&text);
                    print_share(&text, true, Some(&notice));
                    return Ok(());
                }
            }
            LineCommand::Hint => {
                if session.hints_remaining() == 0 {
                    println!("No more hints today.");
                } else {
                    session.request_hint()?;
                }
            }
            LineCommand::Share => {
                print_share(&session.share_text(), false, None);
            }
            LineCommand::Help => print_help(),
            LineCommand::Quit => {
                println!("\n👋 Progress saved. Come back later!\n");
                return Ok(());
            }
        }
    }
}

fn print_help() {
    println!("Commands: 'move <from> <to>', 'guess', 'hint', 'share', 'quit'\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PuzzleDefinition;
    use crate::config::GameOptions;
    use crate::core::Order;
    use crate::store::{MemoryStore, SessionStore};
    use chrono::NaiveDate;

    #[test]
    fn parse_move_is_one_based() {
        assert_eq!(
            parse_command("move 3 1"),
            Ok(LineCommand::Move { from: 2, to: 0 })
        );
        assert_eq!(
            parse_command("M 1 2"),
            Ok(LineCommand::Move { from: 0, to: 1 })
        );
    }

    #[test]
    fn parse_move_rejects_bad_slots() {
        assert!(parse_command("move 0 1").is_err());
        assert!(parse_command("move 1").is_err());
        assert!(parse_command("move a b").is_err());
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("g"), Ok(LineCommand::Guess));
        assert_eq!(parse_command("hint"), Ok(LineCommand::Hint));
        assert_eq!(parse_command(" share "), Ok(LineCommand::Share));
        assert_eq!(parse_command("exit"), Ok(LineCommand::Quit));
        assert!(parse_command("").is_err());
        assert!(parse_command("dance").is_err());
    }

    fn session() -> PuzzleSession<MemoryStore> {
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let mut store = SessionStore::new(MemoryStore::new());
        store.reset_if_stale("v1", today).unwrap();
        let definition = PuzzleDefinition {
            words: ["c", "a", "b"].map(String::from).to_vec(),
            final_order: Order::new(vec![1, 2, 0], 3).unwrap(),
            hints: vec![],
            day_index: 0,
        };
        PuzzleSession::initialize(definition, store, GameOptions::default(), today, "Yay")
    }

    #[test]
    fn drag_slot_moves_word() {
        let mut s = session();
        let mut surface = ListSurface::new(3, Some(s.order()));

        assert!(drag_slot(&mut s, &mut surface, 0, 2).unwrap());
        assert_eq!(s.display_words(), vec!["a", "b", "c"]);
        assert_eq!(s.state().drags, 1);
        assert!(s.submit_guess().unwrap().correct);
    }

    #[test]
    fn drag_slot_in_place_is_not_counted() {
        let mut s = session();
        let mut surface = ListSurface::new(3, Some(s.order()));

        assert!(!drag_slot(&mut s, &mut surface, 1, 1).unwrap());
        assert!(!drag_slot(&mut s, &mut surface, 7, 0).unwrap());
        assert_eq!(s.state().drags, 0);
    }
}
