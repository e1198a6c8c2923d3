use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("deck exhausted: need {needed} cards, {remaining} remaining")]
    Exhausted { needed: usize, remaining: usize },
}

/// An ordered pile of cards dealt from the front.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// An empty deck; call [`Deck::populate`] to fill it.
    pub fn new() -> Self {
        Self::default()
    }

    /// ```
    /// use blackjack_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.populate();
        deck
    }

    /// A deck that deals `cards` in the given order. Useful for scripted tables.
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self { cards: cards.into_iter().collect() }
    }

    /// Replace the contents with one face-down card per rank and suit, suit-major.
    pub fn populate(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                self.cards.push_back(Card::face_down(r, s));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Cards in dealing order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Take the front card, if any.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Deal `per_hand` passes; each pass gives one card to every hand in order.
    ///
    /// Cards land face up. Nothing is dealt when the deck cannot cover the
    /// whole request.
    pub fn deal(&mut self, hands: &mut [&mut Hand], per_hand: usize) -> Result<(), DealError> {
        let needed = hands.len() * per_hand;
        if needed > self.cards.len() {
            return Err(DealError::Exhausted { needed, remaining: self.cards.len() });
        }
        for _ in 0..per_hand {
            for hand in hands.iter_mut() {
                if let Some(mut card) = self.cards.pop_front() {
                    card.turn_face_up();
                    hand.add(card);
                }
            }
        }
        Ok(())
    }
}
