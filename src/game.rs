use crate::config::{DeckPolicy, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::console::PromptError;
use crate::deck::{DealError, Deck};
use crate::hand::{Hand, BLACKJACK};
use crate::io::TableIo;
use crate::participant::{Dealer, Outcome, Participant, Player};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use tracing::{debug, info};

/// Cards every hand receives before anyone acts.
pub const INITIAL_CARDS: usize = 2;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("player count must be between {min} and {max}, got {got}")]
    PlayerCount { min: usize, max: usize, got: usize },
    #[error("player {0} has an empty name")]
    EmptyName(usize),
}

/// Final state of one player's hand for a round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayerResult {
    pub name: String,
    pub total: Option<u16>,
    pub outcome: Outcome,
}

/// What happened in a round, players in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundReport {
    pub results: Vec<PlayerResult>,
    pub dealer_total: Option<u16>,
    pub dealer_busted: bool,
    /// Cards the dealer drew after the reveal.
    pub dealer_hits: usize,
}

impl RoundReport {
    pub fn outcome_of(&self, name: &str) -> Option<Outcome> {
        self.results.iter().find(|r| r.name == name).map(|r| r.outcome)
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.results.iter().filter(|r| r.outcome == outcome).count()
    }
}

/// Settle a standing hand against the dealer's final total.
///
/// ```
/// use blackjack_rs::game::settle;
/// use blackjack_rs::participant::Outcome;
///
/// assert_eq!(settle(20, 19), Outcome::Win);
/// assert_eq!(settle(18, 18), Outcome::Push);
/// assert_eq!(settle(12, 23), Outcome::Win);
/// ```
pub fn settle(player_total: u16, dealer_total: u16) -> Outcome {
    if player_total > BLACKJACK {
        return Outcome::Bust;
    }
    if dealer_total > BLACKJACK {
        return Outcome::Win;
    }
    match player_total.cmp(&dealer_total) {
        Ordering::Greater => Outcome::Win,
        Ordering::Less => Outcome::Lose,
        Ordering::Equal => Outcome::Push,
    }
}

/// One table: registered players, the dealer and the deck they share.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) dealer: Dealer,
    pub(crate) deck: Deck,
    config: GameConfig,
    rng: ChaCha8Rng,
    rounds_played: u64,
}

impl Game {
    /// Seat players in the given order and shuffle a full deck.
    pub fn new<I, S>(names: I, config: GameConfig) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = seat_players(names)?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut rng);
        info!(players = players.len(), seed, policy = ?config.deck_policy, "table opened");
        Ok(Self { players, dealer: Dealer::default(), deck, config, rng, rounds_played: 0 })
    }

    /// Seat players and deal from `deck` exactly as given.
    ///
    /// The deck is never rebuilt, so the policy becomes [`DeckPolicy::Persistent`].
    pub fn with_deck<I, S>(names: I, deck: Deck, config: GameConfig) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut game = Self::new(names, config.with_deck_policy(DeckPolicy::Persistent))?;
        game.deck = deck;
        Ok(game)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Players who have not busted, in registration order.
    pub fn still_playing(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.is_busted()).collect()
    }

    /// Play one full round: deal, player turns, dealer turn, settlement.
    ///
    /// Every hand is cleared afterwards, including when the round fails.
    pub fn play_round(&mut self, io: &mut dyn TableIo) -> Result<RoundReport, GameError> {
        self.prepare_deck();
        info!(round = self.rounds_played + 1, deck = self.deck.len(), "round started");
        let report = self.run_round(io);
        self.clear_hands();
        let report = report?;
        self.rounds_played += 1;
        info!(
            round = self.rounds_played,
            wins = report.count(Outcome::Win),
            pushes = report.count(Outcome::Push),
            "round finished"
        );
        Ok(report)
    }

    fn prepare_deck(&mut self) {
        if matches!(self.config.deck_policy, DeckPolicy::FreshEachRound) {
            self.deck.populate();
            self.deck.shuffle_with(&mut self.rng);
        }
    }

    fn run_round(&mut self, io: &mut dyn TableIo) -> Result<RoundReport, GameError> {
        self.deal_initial()?;

        // hole card stays hidden through every player's turn
        self.dealer.flip_first_card();
        for player in &self.players {
            io.show_hand(player.hand())?;
        }
        io.show_hand(self.dealer.hand())?;

        for player in self.players.iter_mut() {
            additional_cards(&mut self.deck, player, io)?;
        }

        self.dealer.flip_first_card();
        debug!(total = ?self.dealer.total(), "dealer reveals");

        let standing: Vec<usize> =
            (0..self.players.len()).filter(|&seat| !self.players[seat].is_busted()).collect();
        io.show_hand(self.dealer.hand())?;

        // busted seats already reported their own loss
        let mut outcomes = vec![Outcome::Bust; self.players.len()];
        let mut dealer_hits = 0;
        if !standing.is_empty() {
            dealer_hits = additional_cards(&mut self.deck, &mut self.dealer, io)?;
            let dealer_total = self.dealer.total().unwrap_or_default();
            for &seat in &standing {
                let player = &self.players[seat];
                let outcome = settle(player.total().unwrap_or_default(), dealer_total);
                match outcome {
                    Outcome::Win => player.win(io)?,
                    Outcome::Lose => player.lose(io)?,
                    Outcome::Push => player.push(io)?,
                    Outcome::Bust => player.bust(io)?,
                }
                debug!(player = player.name(), ?outcome, "settled");
                outcomes[seat] = outcome;
            }
        } else {
            debug!("every player busted; dealer stands");
        }

        let results = self
            .players
            .iter()
            .zip(outcomes)
            .map(|(p, outcome)| PlayerResult { name: p.name().to_string(), total: p.total(), outcome })
            .collect();
        Ok(RoundReport {
            results,
            dealer_total: self.dealer.total(),
            dealer_busted: self.dealer.is_busted(),
            dealer_hits,
        })
    }

    fn deal_initial(&mut self) -> Result<(), GameError> {
        let mut hands: Vec<&mut Hand> = self.players.iter_mut().map(|p| p.hand_mut()).collect();
        hands.push(self.dealer.hand_mut());
        self.deck.deal(&mut hands, INITIAL_CARDS)?;
        debug!(hands = hands.len(), remaining = self.deck.len(), "initial deal");
        Ok(())
    }

    fn clear_hands(&mut self) {
        for player in &mut self.players {
            player.hand_mut().clear();
        }
        self.dealer.hand_mut().clear();
    }
}

fn seat_players<I, S>(names: I) -> Result<Vec<Player>, GameError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
        return Err(GameError::PlayerCount { min: MIN_PLAYERS, max: MAX_PLAYERS, got: names.len() });
    }
    if let Some(seat) = names.iter().position(|n| n.trim().is_empty()) {
        return Err(GameError::EmptyName(seat + 1));
    }
    Ok(names.into_iter().map(Player::new).collect())
}

/// Deal to `who` while they are not busted and still want cards.
fn additional_cards<P: Participant>(
    deck: &mut Deck,
    who: &mut P,
    io: &mut dyn TableIo,
) -> Result<usize, GameError> {
    let mut hits = 0;
    while !who.is_busted() && who.is_hitting(io)? {
        deck.deal(&mut [who.hand_mut()], 1)?;
        hits += 1;
        debug!(name = who.name(), total = ?who.total(), "hit");
        io.show_hand(who.hand())?;
        if who.is_busted() {
            who.bust(io)?;
        }
    }
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::participant::Announcement;

    /// Answers "stand" to every hit prompt.
    struct Standing;

    impl TableIo for Standing {
        fn ask_hit(&mut self, _name: &str) -> Result<bool, GameError> {
            Ok(false)
        }
        fn show_hand(&mut self, _hand: &Hand) -> Result<(), GameError> {
            Ok(())
        }
        fn announce(&mut self, _a: &Announcement<'_>) -> Result<(), GameError> {
            Ok(())
        }
    }

    #[test]
    fn settle_compares_totals() {
        assert_eq!(settle(20, 19), Outcome::Win);
        assert_eq!(settle(17, 20), Outcome::Lose);
        assert_eq!(settle(18, 18), Outcome::Push);
        assert_eq!(settle(22, 23), Outcome::Bust);
        assert_eq!(settle(5, 22), Outcome::Win);
    }

    #[test]
    fn player_count_is_bounded() {
        let none: Vec<String> = Vec::new();
        assert!(matches!(
            Game::new(none, GameConfig::default()),
            Err(GameError::PlayerCount { got: 0, .. })
        ));
        let eight = (1..=8).map(|i| format!("P{i}"));
        assert!(matches!(
            Game::new(eight, GameConfig::default()),
            Err(GameError::PlayerCount { got: 8, .. })
        ));
        let seven = (1..=7).map(|i| format!("P{i}"));
        assert_eq!(Game::new(seven, GameConfig::default()).unwrap().players().len(), 7);
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(matches!(
            Game::new(["Ann", "  "], GameConfig::default()),
            Err(GameError::EmptyName(2))
        ));
    }

    #[test]
    fn fresh_policy_rebuilds_the_deck_every_round() {
        let mut g = Game::new(["Ann", "Bo"], GameConfig::default().with_seed(3)).unwrap();
        for _ in 0..40 {
            g.play_round(&mut Standing).unwrap();
        }
        assert_eq!(g.rounds_played(), 40);
        assert!(g.players().iter().all(|p| p.hand().is_empty()));
        assert!(g.dealer().hand().is_empty());
    }

    #[test]
    fn persistent_deck_exhaustion_is_fatal_and_clears_hands() {
        let deck = Deck::from_cards(parse_cards("2c 3c 4c").unwrap());
        let mut g = Game::with_deck(["Ann"], deck, GameConfig::default()).unwrap();
        let err = g.play_round(&mut Standing).unwrap_err();
        assert!(matches!(err, GameError::Deal(DealError::Exhausted { needed: 4, remaining: 3 })));
        assert_eq!(g.rounds_played(), 0);
        assert!(g.players()[0].hand().is_empty());
    }

    #[test]
    fn same_seed_same_rounds() {
        let cfg = GameConfig::default().with_seed(99);
        let mut a = Game::new(["Ann"], cfg).unwrap();
        let mut b = Game::new(["Ann"], cfg).unwrap();
        for _ in 0..5 {
            assert_eq!(a.play_round(&mut Standing).unwrap(), b.play_round(&mut Standing).unwrap());
        }
    }
}
