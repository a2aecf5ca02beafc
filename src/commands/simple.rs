//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{GameManager, GameUiState};
use crate::output::{print_game_summary, print_round};
use colored::Colorize;
use std::io::{self, Write};

/// A line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Guess(String),
    Skip,
    NewGame,
    Quit,
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "/skip" | "/s" => Self::Skip,
            "/new" | "/n" => Self::NewGame,
            "/quit" | "/q" | "/exit" => Self::Quit,
            guess => Self::Guess(guess.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Renders whatever snapshot the manager publishes and forwards each line of
/// input back to it.
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_simple(game: &mut GameManager) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Unscramble - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Unscramble the letters to find the word.");
    println!(
        "Each correct answer is worth {} points, {} words per game.\n",
        game.config().score_increase(),
        game.config().max_rounds()
    );
    println!("Commands: '/skip' to skip a word, '/new' for new game, '/quit' to exit\n");

    let mut state_rx = game.subscribe();
    let mut state = state_rx.borrow_and_update().clone();
    print_round(&state, game.config());

    loop {
        let Some(line) = get_user_input("Your guess")? else {
            // EOF
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let input = Input::parse(&line);
        match &input {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::NewGame => {
                game.reset_game();
                state = state_rx.borrow_and_update().clone();
                println!("\n🔄 New game started!\n");
                print_round(&state, game.config());
                continue;
            }
            Input::Skip => game.skip_word(),
            Input::Guess(guess) => {
                game.update_user_guess(guess.as_str());
                game.check_user_guess();
            }
        }

        // Only re-render on publication
        if !state_rx.has_changed().unwrap_or(false) {
            continue;
        }
        let previous = state;
        state = state_rx.borrow_and_update().clone();

        if state.is_guessed_word_wrong {
            println!("{}\n", "❌ Wrong guess! Try again.".red().bold());
            continue;
        }

        match points_earned(&input, &previous, &state) {
            Some(points) => println!("{}\n", format!("✅ Correct! +{points}").green().bold()),
            None => println!("{}\n", "⏭  Skipped".yellow()),
        }

        if state.is_game_over {
            print_game_summary(&state, game.config());

            match get_user_input("Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game.reset_game();
                    state = state_rx.borrow_and_update().clone();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        print_round(&state, game.config());
    }
}

/// Points earned by an accepted action that moved the game on
///
/// `None` means the word was skipped; anything but a guess that got this far
/// was a skip.
fn points_earned(input: &Input, previous: &GameUiState, current: &GameUiState) -> Option<u32> {
    match input {
        Input::Guess(_) => Some(current.score.saturating_sub(previous.score)),
        _ => None,
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Input::parse("/skip"), Input::Skip);
        assert_eq!(Input::parse("  /s "), Input::Skip);
        assert_eq!(Input::parse("/new"), Input::NewGame);
        assert_eq!(Input::parse("/quit"), Input::Quit);
        assert_eq!(Input::parse("/exit"), Input::Quit);
    }

    #[test]
    fn parse_guess_is_trimmed() {
        assert_eq!(Input::parse(" kotlin \n"), Input::Guess("kotlin".to_string()));
        assert_eq!(Input::parse(""), Input::Guess(String::new()));
    }

    #[test]
    fn accepted_guess_counts_as_correct_even_without_points() {
        let previous = GameUiState::new_game("tlkoni".to_string());
        let mut current = GameUiState::new_game("dndiaro".to_string());
        current.current_word_count = 2;

        let guessed = Input::Guess("kotlin".to_string());
        assert_eq!(points_earned(&guessed, &previous, &current), Some(0));

        current.score = 20;
        assert_eq!(points_earned(&guessed, &previous, &current), Some(20));
        assert_eq!(points_earned(&Input::Skip, &previous, &current), None);
    }

    #[test]
    fn unknown_slash_word_is_a_guess() {
        assert_eq!(Input::parse("/help"), Input::Guess("/help".to_string()));
    }
}
