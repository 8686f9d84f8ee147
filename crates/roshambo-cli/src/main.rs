//! Console front-end for provably fair roshambo.
//!
//! Flow: validate the move names from argv, commit to a computer move,
//! show the commitment, read the user's move, announce the outcome,
//! then reveal the key so the user can recompute the commitment and
//! check that the computer never switched its move.

use roshambo_core::{MoveSet, MoveSetError, Outcome, OutcomeMatrix, Round};
use std::io::{self, BufRead, Write};
use std::process;
use std::thread;
use std::time::Duration;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Exit code shared by every termination path, early or happy
const EXIT_CODE: i32 = 1;

/// Seconds to leave the final output on screen before the process ends
const DEFAULT_EXIT_DELAY_SECS: u64 = 5;

// ============================================================================
// Termination
// ============================================================================

fn close() -> ! {
    let delay = std::env::var("ROSHAMBO_EXIT_DELAY_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_EXIT_DELAY_SECS);
    println!("Exiting in {delay} seconds");
    thread::sleep(Duration::from_secs(delay));
    process::exit(EXIT_CODE);
}

// ============================================================================
// Input
// ============================================================================

enum Choice {
    Move(usize),
    Exit,
    Help,
}

/// Map a line of input onto a menu choice; `None` means re-prompt
fn parse_choice(line: &str, move_count: usize) -> Option<Choice> {
    match line.trim() {
        "0" => Some(Choice::Exit),
        "?" => Some(Choice::Help),
        other => match other.parse::<usize>() {
            Ok(n) if (1..=move_count).contains(&n) => Some(Choice::Move(n - 1)),
            _ => None,
        },
    }
}

/// Prompt until the user enters something parseable. Bad input only
/// re-prompts; the round and its commitment stay untouched.
fn read_choice(moves: &MoveSet) -> Choice {
    let stdin = io::stdin();
    loop {
        print!("Enter your move: ");
        io::stdout().flush().expect("flush stdout");

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                // input stream closed
                println!();
                close();
            }
            Ok(_) => {}
            Err(err) => {
                error!("reading stdin failed: {err}");
                close();
            }
        }

        match parse_choice(&line, moves.len()) {
            Some(choice) => return choice,
            None => println!("You entered an incorrect value. Try again!"),
        }
    }
}

fn print_menu(moves: &MoveSet) {
    println!("Available moves:");
    for (i, name) in moves.names().iter().enumerate() {
        println!("{} - {}", i + 1, name);
    }
    println!("0 - exit");
    println!("? - help");
}

// ============================================================================
// Help table
// ============================================================================

/// Render the outcome matrix as a column-aligned grid with a rule under
/// the header row
fn render_matrix(matrix: &OutcomeMatrix) -> String {
    let rows = matrix.rows();
    let mut widths = vec![0usize; matrix.size()];
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.len());
        }
    }

    let mut out = String::new();
    for (idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                out.push_str(" | ");
            }
            out.push_str(&format!("{cell:<width$}", width = widths[col]));
        }
        out.push('\n');
        if idx == 0 {
            let total: usize = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
            out.push_str(&"-".repeat(total));
            out.push('\n');
        }
    }
    out
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let moves = match MoveSet::new(std::env::args().skip(1).collect()) {
        Ok(moves) => moves,
        Err(err) => {
            println!("{err}");
            match err {
                MoveSetError::BadCount(_) => {
                    println!("Pass an odd number of at least 3 distinct move names.");
                    println!("For example: rock paper scissors");
                }
                MoveSetError::DuplicateMove(_) => {
                    println!("Every move name must be unique. Try again!");
                }
                MoveSetError::UnknownMove(_) => {}
            }
            close();
        }
    };
    debug!(count = moves.len(), "move set validated");

    let round = match Round::open(&moves) {
        Ok(round) => round,
        Err(err) => {
            error!("cannot open a round: {err}");
            println!("Fatal: {err}");
            close();
        }
    };
    debug!("round opened, commitment fixed");

    println!("HMAC: {}", round.commitment());
    print_menu(&moves);

    let user_move = match read_choice(&moves) {
        Choice::Move(index) => moves.name(index),
        Choice::Exit => close(),
        Choice::Help => {
            print!("{}", render_matrix(&OutcomeMatrix::build(&moves)));
            close();
        }
    };

    println!("Your move: {user_move}");
    println!("Computer move: {}", round.computer_move());

    let outcome = match round.outcome(user_move) {
        Ok(outcome) => outcome,
        Err(err) => {
            // both moves come from the validated set, so this is a bug
            error!("resolution failed: {err}");
            println!("Fatal: {err}");
            close();
        }
    };
    match outcome {
        Outcome::User => println!("You win!"),
        Outcome::Computer => println!("You lose!"),
        Outcome::Draw => println!("Draw!"),
    }

    println!("HMAC key: {}", round.reveal());
    close();
}
