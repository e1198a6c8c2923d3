//! Process lifecycle: register players once, then play rounds until the
//! table declines another.

use crate::config::GameConfig;
use crate::console::Console;
use crate::game::{Game, GameError, RoundReport};
use crate::participant::Outcome;
use std::io::{BufRead, Write};
use tracing::info;

/// Outcome counts across every round of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct SessionSummary {
    pub rounds: u64,
    pub wins: usize,
    /// Includes busts.
    pub losses: usize,
    pub pushes: usize,
}

impl SessionSummary {
    fn record(&mut self, report: &RoundReport) {
        self.rounds += 1;
        self.wins += report.count(Outcome::Win);
        self.losses += report.count(Outcome::Lose) + report.count(Outcome::Bust);
        self.pushes += report.count(Outcome::Push);
    }
}

/// Welcome, seat players, and keep playing while the answer is yes.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: GameConfig,
) -> Result<SessionSummary, GameError> {
    console.welcome()?;
    let names = console.ask_player_names()?;
    let mut game = Game::new(names, config)?;

    let mut summary = SessionSummary::default();
    loop {
        let report = game.play_round(console)?;
        summary.record(&report);
        if !console.ask_play_again()? {
            break;
        }
    }
    info!(rounds = summary.rounds, wins = summary.wins, "session over");
    Ok(summary)
}
