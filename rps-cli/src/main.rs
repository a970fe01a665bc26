mod commands;
mod config;
mod display;
mod menu;

use clap::{Parser, Subcommand};
use config::CliConfig;
use rps_core::{GameError, MIN_MOVES};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "Provably fair rock-paper-scissors with any odd number of moves")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print tables tab separated
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one round against the computer
    Play {
        /// Print the finished round as JSON
        #[arg(long)]
        json: bool,
        /// Moves in cycle order, e.g. Rock Paper Scissors
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
    /// Show who beats whom
    Table {
        /// Moves in cycle order
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
    /// Check a revealed key against the HMAC shown before the round
    Verify {
        /// Revealed key (hex encoded)
        #[arg(short, long)]
        key: String,
        /// Computer move shown after the round
        #[arg(short, long = "move")]
        label: String,
        /// HMAC shown before the round (hex encoded)
        #[arg(long)]
        hmac: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let mut config = CliConfig::new(cli.verbose, cli.plain);

    // Initialize logging
    let log_level = config.log_level();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "rps_cli={},rps_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Play { json, moves } => {
            config.json = json;
            commands::play(moves, &config)
        }
        Commands::Table { moves } => commands::show_table(moves, &config),
        Commands::Verify { key, label, hmac } => match commands::verify(&key, &label, &hmac) {
            Ok(true) => Ok(()),
            Ok(false) => std::process::exit(1),
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        let (code, message) = error_report(&e);
        eprintln!("{}", message);
        std::process::exit(code);
    }
}

/// Exit code for invalid move lists
const EXIT_CONFIG: i32 = 2;

/// Exit code and message printed for a failed command
fn error_report(e: &anyhow::Error) -> (i32, String) {
    match e.downcast_ref::<GameError>() {
        Some(err) if err.is_configuration() => (
            EXIT_CONFIG,
            format!(
                "Invalid arguments. Please provide an odd number (at least {}) of non-repeating moves\n\
                 Reason: {}\n\
                 Example: rps play Rock Paper Scissors",
                MIN_MOVES, err
            ),
        ),
        Some(GameError::InvalidKey(msg)) => (
            1,
            format!(
                "Error: Invalid key: {}\nThe key must be {} hex characters",
                msg,
                rps_core::commitment::KEY_SIZE * 2
            ),
        ),
        _ => (1, format!("Error: {:#}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn report_for(moves: &[&str]) -> (i32, String) {
        let config = CliConfig::default();
        let moves = moves.iter().map(|m| m.to_string()).collect();
        let err = commands::show_table(moves, &config).unwrap_err();
        error_report(&err)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_duplicate_moves_exit_code() {
        let (code, message) = report_for(&["A", "A", "C"]);
        assert_eq!(code, EXIT_CONFIG);
        assert!(message.starts_with("Invalid arguments."));
        assert!(message.contains("Duplicate move: A"));
    }

    #[test]
    fn test_even_and_short_lists_exit_code() {
        let (code, message) = report_for(&["A", "C"]);
        assert_eq!(code, EXIT_CONFIG);
        assert!(message.contains("Too few moves"));

        let (code, message) = report_for(&["A", "B", "C", "D"]);
        assert_eq!(code, EXIT_CONFIG);
        assert!(message.contains("Even number of moves"));
    }

    #[test]
    fn test_invalid_key_exit_code() {
        let err = commands::verify("beef", "Rock", "00").unwrap_err();
        let (code, message) = error_report(&err);
        assert_eq!(code, 1);
        assert!(message.starts_with("Error: Invalid key"));
        assert!(message.contains("64 hex characters"));
    }

    #[test]
    fn test_hyphenated_moves_parse() {
        let cli = Cli::try_parse_from(["rps", "play", "--json", "Rock", "-Paper", "Scissors"]).unwrap();
        match cli.command {
            Commands::Play { json, moves } => {
                assert!(json);
                assert_eq!(moves, vec!["Rock", "-Paper", "Scissors"]);
            }
            _ => panic!("expected play"),
        }

        let cli = Cli::try_parse_from(["rps", "table", "-a", "-b", "-c"]).unwrap();
        assert!(matches!(cli.command, Commands::Table { moves } if moves.len() == 3));
    }
}
