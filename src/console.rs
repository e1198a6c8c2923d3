//! Line-based terminal front end.
//!
//! `Console` owns a reader and a writer so the same code drives stdin/stdout
//! in the binary and in-memory buffers in tests. Every prompt re-asks until
//! the answer is valid; end of input is reported as [`PromptError::Eof`].

use crate::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::game::GameError;
use crate::hand::Hand;
use crate::io::TableIo;
use crate::participant::{Announcement, Outcome};
use crossterm::style::{style, Color, Stylize};
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use tracing::warn;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PromptError {
    #[error("input closed while waiting for an answer")]
    Eof,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Interpret a yes/no answer. Case and surrounding whitespace are ignored.
///
/// ```
/// use blackjack_rs::console::parse_yes_no;
///
/// assert_eq!(parse_yes_no(" Y "), Some(true));
/// assert_eq!(parse_yes_no("no"), Some(false));
/// assert_eq!(parse_yes_no("maybe"), None);
/// ```
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Plain-text console; see [`Console::styled`] for colors.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, styled: false }
    }

    /// Toggle ANSI styling of the banner and outcome lines.
    pub fn styled(mut self, on: bool) -> Self {
        self.styled = on;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line.
    pub fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn prompt(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, PromptError> {
        loop {
            let answer = self.prompt(question)?;
            match parse_yes_no(&answer) {
                Some(yes) => return Ok(yes),
                None => warn!(%answer, "expected a yes/no answer"),
            }
        }
    }

    pub fn ask_number(
        &mut self,
        question: &str,
        range: RangeInclusive<usize>,
    ) -> Result<usize, PromptError> {
        loop {
            let answer = self.prompt(question)?;
            match answer.trim().parse::<usize>() {
                Ok(n) if range.contains(&n) => return Ok(n),
                _ => warn!(%answer, min = range.start(), max = range.end(), "number out of range"),
            }
        }
    }

    /// Ask for free text; blank answers are asked again.
    pub fn ask_line(&mut self, question: &str) -> Result<String, PromptError> {
        loop {
            let answer = self.prompt(question)?;
            let trimmed = answer.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            warn!("blank answer");
        }
    }

    pub fn welcome(&mut self) -> Result<(), PromptError> {
        let title = "\t\tWelcome To Blackjack";
        if self.styled {
            let line = style(title).bold().to_string();
            self.say(&line)
        } else {
            self.say(title)
        }
    }

    /// Player count, then one name per seat in registration order.
    pub fn ask_player_names(&mut self) -> Result<Vec<String>, PromptError> {
        let question = format!("How many players? ({MIN_PLAYERS}-{MAX_PLAYERS}): ");
        let count = self.ask_number(&question, MIN_PLAYERS..=MAX_PLAYERS)?;
        let mut names = Vec::with_capacity(count);
        for _ in 0..count {
            names.push(self.ask_line("Player name?: ")?);
        }
        self.say("")?;
        Ok(names)
    }

    pub fn ask_play_again(&mut self) -> Result<bool, PromptError> {
        self.ask_yes_no("Do you want to play again? (Y/N): ")
    }

    /// Hold the window open until ENTER. Closed input counts as ENTER.
    pub fn pause_before_exit(&mut self) -> Result<(), PromptError> {
        match self.prompt("\nPress ENTER to EXIT.") {
            Ok(_) | Err(PromptError::Eof) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl<R: BufRead, W: Write> TableIo for Console<R, W> {
    fn ask_hit(&mut self, name: &str) -> Result<bool, GameError> {
        Ok(self.ask_yes_no(&format!("\n{name}, do you want to hit? (Y/N): "))?)
    }

    fn show_hand(&mut self, hand: &Hand) -> Result<(), GameError> {
        Ok(self.say(&hand.to_string())?)
    }

    fn announce(&mut self, announcement: &Announcement<'_>) -> Result<(), GameError> {
        let text = announcement.to_string();
        if !self.styled {
            return Ok(self.say(&text)?);
        }
        let color = match announcement.outcome {
            Outcome::Win => Color::Green,
            Outcome::Push => Color::Yellow,
            Outcome::Lose | Outcome::Bust => Color::Red,
        };
        let line = style(text).with(color).to_string();
        Ok(self.say(&line)?)
    }
}
