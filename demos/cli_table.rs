//! Thin CLI boundary for the card table engine.
//!
//! Usage: `cli_table [rounds] [players]` with 1-5 rounds (default 1) and a
//! player count from {1..7} (default 3). Validation failures exit with the
//! error's distinct status code.

use std::env;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use cardtable::{ConfigError, RoundResult, RunConfig, Table, TableOptions, Winner};

fn main() -> ExitCode {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("\nError: {err}");
            eprintln!("errorCode: {}", err.exit_code());
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let options = TableOptions::default().with_players(config.players);
    let mut table = match Table::new(options, seed) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("\nError: {err}");
            eprintln!("errorCode: {}", err.exit_code());
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    match table.play_rounds(config.rounds) {
        Ok(rounds) => {
            for round in &rounds {
                print_round(round);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("\nError: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Parses up to two positional integers: rounds, then players.
///
/// A non-numeric argument fails the same validation as an out-of-range one.
fn parse_args() -> Result<RunConfig, ConfigError> {
    let args: Vec<String> = env::args().skip(1).collect();

    let rounds = match args.first() {
        Some(raw) => Some(raw.parse().map_err(|_| ConfigError::InvalidRounds)?),
        None => None,
    };
    let players = match args.get(1) {
        Some(raw) => Some(raw.parse().map_err(|_| ConfigError::InvalidPlayers)?),
        None => None,
    };

    RunConfig::new(rounds, players)
}

fn print_round(round: &RoundResult) {
    println!("--- Round #{} ---------------\n", round.round);

    for turn in &round.turns {
        let player_flag = if turn.player_busted { " BUSTED!" } else { "" };
        println!(
            "{}: {} ({}){}",
            turn.nickname,
            format_cards(&turn.player_cards),
            turn.player_value,
            player_flag
        );

        let dealer_flag = if turn.dealer_busted { " BUSTED!" } else { "" };
        println!(
            "Dealer: {} ({}){}",
            format_cards(&turn.dealer_cards),
            turn.dealer_value,
            dealer_flag
        );

        match turn.winner {
            Winner::Player => println!("{} wins! \u{1f389}\n", turn.nickname),
            Winner::Dealer => println!("Dealer wins! \u{1f615}\n"),
        }
    }
}

fn format_cards(cards: &[cardtable::Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
