use blackjack_rs::cards::{Rank, Suit};
use blackjack_rs::deck::{DealError, Deck, DECK_SIZE};
use blackjack_rs::hand::Hand;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn identities(deck: &Deck) -> Vec<(Rank, Suit)> {
    let mut ids: Vec<(Rank, Suit)> = deck.iter().map(|c| c.to_tuple()).collect();
    ids.sort();
    ids
}

#[test]
fn standard_deck_is_every_rank_of_every_suit() {
    let deck = Deck::standard();
    let ids: HashSet<(Rank, Suit)> = deck.iter().map(|c| c.to_tuple()).collect();
    assert_eq!(ids.len(), DECK_SIZE);
    for s in Suit::ALL {
        for r in Rank::ALL {
            assert!(ids.contains(&(r, s)));
        }
    }
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut shuffled = Deck::standard();
        shuffled.shuffle_seeded(seed);
        prop_assert_eq!(identities(&shuffled), identities(&Deck::standard()));
    }

    #[test]
    fn dealt_cards_leave_the_deck(seed in any::<u64>(), hands in 1usize..=8, per_hand in 1usize..=3) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut rng);

        let mut owned: Vec<Hand> = (0..hands).map(|i| Hand::new(format!("H{i}"))).collect();
        let mut refs: Vec<&mut Hand> = owned.iter_mut().collect();
        deck.deal(&mut refs, per_hand).unwrap();

        prop_assert_eq!(deck.len(), DECK_SIZE - hands * per_hand);
        let mut seen: HashSet<(Rank, Suit)> = deck.iter().map(|c| c.to_tuple()).collect();
        for h in &owned {
            prop_assert_eq!(h.len(), per_hand);
            for c in h.cards() {
                prop_assert!(seen.insert(c.to_tuple()), "card owned twice");
            }
        }
        prop_assert_eq!(seen.len(), DECK_SIZE);
    }
}

#[test]
fn draining_the_deck_then_dealing_fails() {
    let mut deck = Deck::standard();
    let mut h = Hand::new("H");
    deck.deal(&mut [&mut h], DECK_SIZE).unwrap();
    assert!(deck.is_empty());
    assert_eq!(
        deck.deal(&mut [&mut h], 1),
        Err(DealError::Exhausted { needed: 1, remaining: 0 })
    );
    assert_eq!(h.len(), DECK_SIZE);
}
