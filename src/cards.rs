use std::fmt;
use std::str::FromStr;

/// Card ranks from Ace (low) to King. Discriminants follow the rank's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Blackjack base points: face value, 10 for court cards, 1 for the Ace.
    pub const fn points(self) -> u8 {
        let v = self as u8;
        if v > 10 {
            10
        } else {
            v
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let r = match upper.as_str() {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// The four suits, in the order a fresh deck is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card with an orientation.
///
/// A face-down card has no observable value until it is flipped.
///
/// ```
/// use blackjack_rs::cards::{Card, Rank, Suit};
///
/// let mut card = Card::new(Rank::King, Suit::Spades);
/// assert_eq!(card.value(), Some(10));
/// card.flip();
/// assert_eq!(card.value(), None);
/// assert_eq!(card.to_string(), "XX");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// A face-up card.
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit, face_up: true }
    }

    pub const fn face_down(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit, face_up: false }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    pub const fn is_ace(self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Point value while face up; `None` while face down.
    pub const fn value(self) -> Option<u8> {
        if self.face_up {
            Some(self.rank.points())
        } else {
            None
        }
    }

    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    pub(crate) fn turn_face_up(&mut self) {
        self.face_up = true;
    }

    /// Identity of the card regardless of orientation.
    pub const fn to_tuple(self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank, self.suit)
        } else {
            f.write_str("XX")
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses `<rank><suit>`, e.g. `Ac`, `10h`, `Td`. Parsed cards are face up.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let suit_ch = match t.chars().last() {
            Some(c) if t.len() >= 2 => c,
            _ => return Err(CardParseError::Invalid(s.to_string())),
        };
        let rank_str = &t[..t.len() - suit_ch.len_utf8()];
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use blackjack_rs::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("Ac, Kd 10h").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Clubs));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Hearts));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
