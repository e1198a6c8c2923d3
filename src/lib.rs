//! blackjack-rs: single-table blackjack for 1-7 players against a dealer
//!
//! Goals:
//! - Exact hand scoring (one Ace may count 11) and dealer-17 policy
//! - A round engine that talks to the outside world only through `TableIo`
//! - No panics on bad input; prompts re-ask and errors are `Result`s
//!
//! ## Quick start: score a hand
//! ```
//! use blackjack_rs::cards::parse_cards;
//! use blackjack_rs::hand::Hand;
//!
//! let mut hand = Hand::new("Ann");
//! for card in parse_cards("Ah Ad 9c").unwrap() {
//!     hand.add(card);
//! }
//! assert_eq!(hand.total(), Some(21));
//! assert!(!hand.is_busted());
//! ```
//!
//! ## Play
//! ```sh
//! cargo run --bin blackjack
//! ```

pub mod cards;
pub mod config;
pub mod console;
pub mod deck;
pub mod game;
pub mod hand;
pub mod io;
pub mod participant;
pub mod session;
