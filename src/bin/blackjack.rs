use blackjack_rs::config::{DeckPolicy, GameConfig};
use blackjack_rs::console::Console;
use blackjack_rs::session;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::Level;

/// Blackjack for 1-7 players against the dealer.
#[derive(Debug, Parser)]
#[command(name = "blackjack", version)]
struct Args {
    /// Seed for reproducible shuffles.
    #[arg(long)]
    seed: Option<u64>,

    /// Deal every round from one deck; running out of cards ends the game.
    #[arg(long)]
    persistent_deck: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Log verbosity on stderr (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn build_config(args: &Args) -> GameConfig {
    let policy =
        if args.persistent_deck { DeckPolicy::Persistent } else { DeckPolicy::FreshEachRound };
    let config = GameConfig::default().with_deck_policy(policy);
    match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Setup logging
    tracing_subscriber::fmt().with_max_level(args.log_level).with_writer(io::stderr).init();

    let interactive = io::stdin().is_terminal();
    let styled = !args.no_color && io::stdout().is_terminal();
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock()).styled(styled);

    let result = session::run(&mut console, build_config(&args));
    if let Err(e) = &result {
        eprintln!("blackjack: {e}");
    }
    if interactive {
        let _ = console.pause_before_exit();
    }
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_into_config() {
        let args = Args::parse_from(["blackjack", "--seed", "7", "--persistent-deck"]);
        let config = build_config(&args);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.deck_policy, DeckPolicy::Persistent);
        assert_eq!(args.log_level, Level::WARN);
    }

    #[test]
    fn defaults_to_fresh_decks() {
        let args = Args::parse_from(["blackjack", "--log-level", "debug"]);
        assert_eq!(build_config(&args).deck_policy, DeckPolicy::FreshEachRound);
        assert_eq!(args.log_level, Level::DEBUG);
    }
}
