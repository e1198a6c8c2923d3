/// Fewest players a table seats.
pub const MIN_PLAYERS: usize = 1;
/// Most players a table seats.
pub const MAX_PLAYERS: usize = 7;

/// Where each round's cards come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DeckPolicy {
    /// Build and shuffle a full deck at the start of every round.
    #[default]
    FreshEachRound,
    /// Keep dealing from one deck across rounds; running out is fatal.
    Persistent,
}

/// Table settings.
///
/// ```
/// use blackjack_rs::config::{DeckPolicy, GameConfig};
///
/// let cfg = GameConfig::default().with_seed(7);
/// assert_eq!(cfg.seed, Some(7));
/// assert_eq!(cfg.deck_policy, DeckPolicy::FreshEachRound);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct GameConfig {
    pub deck_policy: DeckPolicy,
    /// Seed for shuffling; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_deck_policy(mut self, policy: DeckPolicy) -> Self {
        self.deck_policy = policy;
        self
    }
}
