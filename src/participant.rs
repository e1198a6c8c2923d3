//! Participants: the hands at the table and how each decides to hit.
//!
//! `Player` and `Dealer` are siblings sharing the `Participant` capability
//! set. The round engine drives both through the trait; only the hitting
//! policy and the bust message differ.

use crate::game::GameError;
use crate::hand::Hand;
use crate::io::TableIo;
use core::fmt;

/// The dealer keeps drawing while the total is below this.
pub const DEALER_STANDS_ON: u16 = 17;

/// Name given to the house hand.
pub const DEALER_NAME: &str = "Dealer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Role {
    Player,
    Dealer,
}

/// How a hand finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    Win,
    Lose,
    Push,
    Bust,
}

impl Outcome {
    pub fn verb(self) -> &'static str {
        match self {
            Outcome::Win => "wins",
            Outcome::Lose => "loses",
            Outcome::Push => "pushes",
            Outcome::Bust => "busts",
        }
    }
}

/// A single outcome line, e.g. `"Ann wins."`.
///
/// The dealer's bust line carries no trailing period, matching existing
/// transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Announcement<'a> {
    pub name: &'a str,
    pub role: Role,
    pub outcome: Outcome,
}

impl fmt::Display for Announcement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.role, self.outcome) {
            (Role::Dealer, Outcome::Bust) => write!(f, "{} {}", self.name, self.outcome.verb()),
            _ => write!(f, "{} {}.", self.name, self.outcome.verb()),
        }
    }
}

/// Capabilities the round engine needs from every hand at the table.
pub trait Participant {
    fn role(&self) -> Role;
    fn hand(&self) -> &Hand;
    fn hand_mut(&mut self) -> &mut Hand;

    fn name(&self) -> &str {
        self.hand().name()
    }

    fn total(&self) -> Option<u16> {
        self.hand().total()
    }

    fn is_busted(&self) -> bool {
        self.hand().is_busted()
    }

    /// Whether another card is wanted right now.
    fn is_hitting(&self, io: &mut dyn TableIo) -> Result<bool, GameError>;

    /// Report going over 21.
    fn bust(&self, io: &mut dyn TableIo) -> Result<(), GameError>;
}

/// A human seat; hit decisions come from the table's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { hand: Hand::new(name) }
    }

    fn report(&self, io: &mut dyn TableIo, outcome: Outcome) -> Result<(), GameError> {
        io.announce(&Announcement { name: self.name(), role: Role::Player, outcome })
    }

    pub fn win(&self, io: &mut dyn TableIo) -> Result<(), GameError> {
        self.report(io, Outcome::Win)
    }

    pub fn lose(&self, io: &mut dyn TableIo) -> Result<(), GameError> {
        self.report(io, Outcome::Lose)
    }

    pub fn push(&self, io: &mut dyn TableIo) -> Result<(), GameError> {
        self.report(io, Outcome::Push)
    }
}

impl Participant for Player {
    fn role(&self) -> Role {
        Role::Player
    }
    fn hand(&self) -> &Hand {
        &self.hand
    }
    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
    fn is_hitting(&self, io: &mut dyn TableIo) -> Result<bool, GameError> {
        io.ask_hit(self.name())
    }
    fn bust(&self, io: &mut dyn TableIo) -> Result<(), GameError> {
        self.report(io, Outcome::Bust)?;
        self.lose(io)
    }
}

/// The house hand. Draws to 17 with no outside input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { hand: Hand::new(name) }
    }

    /// Hide or reveal the hole card.
    pub fn flip_first_card(&mut self) {
        self.hand.flip_first_card();
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new(DEALER_NAME)
    }
}

impl Participant for Dealer {
    fn role(&self) -> Role {
        Role::Dealer
    }
    fn hand(&self) -> &Hand {
        &self.hand
    }
    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
    fn is_hitting(&self, _io: &mut dyn TableIo) -> Result<bool, GameError> {
        Ok(self.total().is_some_and(|t| t < DEALER_STANDS_ON))
    }
    fn bust(&self, io: &mut dyn TableIo) -> Result<(), GameError> {
        io.announce(&Announcement { name: self.name(), role: Role::Dealer, outcome: Outcome::Bust })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[derive(Default)]
    struct Recorder {
        answers: Vec<bool>,
        lines: Vec<String>,
    }

    impl TableIo for Recorder {
        fn ask_hit(&mut self, name: &str) -> Result<bool, GameError> {
            self.lines.push(format!("ask {name}"));
            Ok(self.answers.pop().unwrap_or(false))
        }
        fn show_hand(&mut self, hand: &Hand) -> Result<(), GameError> {
            self.lines.push(hand.to_string());
            Ok(())
        }
        fn announce(&mut self, a: &Announcement<'_>) -> Result<(), GameError> {
            self.lines.push(a.to_string());
            Ok(())
        }
    }

    fn dealer_with(cards: &str) -> Dealer {
        let mut d = Dealer::default();
        for c in parse_cards(cards).unwrap() {
            d.hand_mut().add(c);
        }
        d
    }

    #[test]
    fn announcement_text() {
        let a = Announcement { name: "Ann", role: Role::Player, outcome: Outcome::Push };
        assert_eq!(a.to_string(), "Ann pushes.");
        let d = Announcement { name: "Dealer", role: Role::Dealer, outcome: Outcome::Bust };
        assert_eq!(d.to_string(), "Dealer busts");
    }

    #[test]
    fn dealer_hits_below_seventeen_only() {
        let mut io = Recorder::default();
        assert!(dealer_with("10c 6d").is_hitting(&mut io).unwrap());
        assert!(!dealer_with("10c 7d").is_hitting(&mut io).unwrap());
        assert!(!dealer_with("Ac 6d").is_hitting(&mut io).unwrap());
        assert!(!dealer_with("10c 6d 9h").is_hitting(&mut io).unwrap());
        assert!(io.lines.is_empty(), "dealer never asks for input");
    }

    #[test]
    fn dealer_with_hidden_hole_card_does_not_hit() {
        let mut io = Recorder::default();
        let mut d = dealer_with("2c 3d");
        d.flip_first_card();
        assert!(!d.is_hitting(&mut io).unwrap());
    }

    #[test]
    fn player_asks_and_bust_reports_loss() {
        let mut io = Recorder { answers: vec![true], ..Default::default() };
        let p = Player::new("Bo");
        assert!(p.is_hitting(&mut io).unwrap());
        p.bust(&mut io).unwrap();
        assert_eq!(io.lines, vec!["ask Bo", "Bo busts.", "Bo loses."]);
    }
}
