use crate::cards::Card;
use std::fmt;

/// Totals above this are busted.
pub const BLACKJACK: u16 = 21;

/// Extra points an Ace is worth when counted as 11 instead of 1.
const ACE_BONUS: u16 = 10;

/// Cards held by one named participant, in draw order.
///
/// ```
/// use blackjack_rs::cards::parse_cards;
/// use blackjack_rs::hand::Hand;
///
/// let mut hand = Hand::new("Ann");
/// for card in parse_cards("Ac Kd").unwrap() {
///     hand.add(card);
/// }
/// assert_eq!(hand.total(), Some(21));
/// assert_eq!(hand.to_string(), "Ann:\tAc\tKd\t(21)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    name: String,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), cards: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Drop every card; they return to no owner.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Turn the first card over. No-op on an empty hand.
    pub fn flip_first_card(&mut self) {
        if let Some(first) = self.cards.first_mut() {
            first.flip();
        }
    }

    /// Point total, or `None` while any card is face down.
    ///
    /// Aces count 1; one Ace (never more) counts 11 when that keeps the
    /// total at or under 21.
    pub fn total(&self) -> Option<u16> {
        let mut sum: u16 = 0;
        let mut has_ace = false;
        for card in &self.cards {
            sum += u16::from(card.value()?);
            has_ace |= card.is_ace();
        }
        if has_ace && sum + ACE_BONUS <= BLACKJACK {
            sum += ACE_BONUS;
        }
        Some(sum)
    }

    /// Busted once the revealed total exceeds 21. A hidden total is never busted.
    pub fn is_busted(&self) -> bool {
        self.total().is_some_and(|t| t > BLACKJACK)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\t", self.name)?;
        if self.cards.is_empty() {
            return f.write_str("<empty>");
        }
        for card in &self.cards {
            write!(f, "{card}\t")?;
        }
        if let Some(total) = self.total() {
            write!(f, "({total})")?;
        }
        Ok(())
    }
}
